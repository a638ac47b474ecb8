//! A single workflow with triggers, concurrency and one job.
//!
//! `cargo run --example simple -- --print`

use gadk::prelude::*;

struct MyService;

impl WorkflowDefinition for MyService {
    fn build() -> gadk::Result<Workflow> {
        let mut workflow = Workflow::new("my_service")
            .with_name("my service workflow")
            .with_concurrency("${{ github.workflow }}-${{ github.head_ref || github.run_id }}", true);

        let paths = ["src/service/*.py", "src/service.yml"];
        workflow.on(
            Some(On::new().paths(paths)),
            Some(On::new().branches(["master"]).paths(paths)),
            serde_yaml::Value::Null,
        )?;

        workflow.add_job(
            "test",
            Job::new([
                RunStep::new("make build"),
                RunStep::new("make lint"),
                RunStep::new("make test"),
            ]),
        );
        Ok(workflow)
    }
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.register::<MyService>();
    gadk::run(&registry)
}
