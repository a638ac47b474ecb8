//! Passing a build output from one job to another.
//!
//! `cargo run --example artifacts -- --print`

use gadk::prelude::*;

struct MyService;

impl WorkflowDefinition for MyService {
    fn build() -> gadk::Result<Workflow> {
        let code_artifact = Artifact::new("code-archive", "build/code.zip");

        let workflow = Workflow::new("my_service")
            .with_name("my service workflow")
            .with_job(
                "build",
                Job::builder()
                    .step(RunStep::new("make build"))
                    .step(code_artifact.as_upload())
                    .build(),
            )
            .with_job(
                "deploy",
                Job::builder()
                    .needs(["build"])
                    .step(code_artifact.as_download())
                    .step(RunStep::new(format!("scp {}", code_artifact.path())))
                    .build(),
            );
        Ok(workflow)
    }
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.register::<MyService>();
    gadk::run(&registry)
}
