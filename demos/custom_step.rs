//! A reusable step type built on top of `RunStep`.
//!
//! `cargo run --example custom_step -- --print`

use gadk::prelude::*;

/// Runs `make <target>` with `key="value"` arguments.
struct MakeStep {
    target: String,
    args: Vec<(String, String)>,
}

impl MakeStep {
    fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            args: Vec::new(),
        }
    }

    fn arg(mut self, name: &str, value: &str) -> Self {
        self.args.push((name.to_string(), value.to_string()));
        self
    }
}

impl From<MakeStep> for Step {
    fn from(make: MakeStep) -> Self {
        let mut cmd = format!("make {}", make.target);
        for (name, value) in &make.args {
            cmd.push_str(&format!(" {name}=\"{value}\""));
        }
        RunStep::new(cmd).into()
    }
}

struct FooBarService;

impl WorkflowDefinition for FooBarService {
    fn build() -> gadk::Result<Workflow> {
        Ok(Workflow::new("foobar").with_name("foobar service").with_job(
            "test",
            Job::new([
                MakeStep::new("build"),
                MakeStep::new("lint").arg("verbose", "1"),
                MakeStep::new("test").arg("verbose", "1").arg("suite", "unit"),
            ]),
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.register::<FooBarService>();
    gadk::run(&registry)
}
