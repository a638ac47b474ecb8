//! One workflow per service, sharing a layout through an abstract layer.
//!
//! Only `FooService` and `BarService` are generated: the `Service` layer
//! itself has no workflow of its own.
//!
//! `cargo run --example abstract_service -- --print`

use gadk::prelude::*;

const SERVICE: &str = "Service";

trait Service {
    const FILENAME: &'static str;

    fn service_name() -> &'static str;
}

fn service_workflow<S: Service>() -> gadk::Result<Workflow> {
    let name = S::service_name();
    let mut workflow = Workflow::new(S::FILENAME).with_name(format!("{name} service"));
    workflow.on(
        Some(On::new().paths([format!("services/{name}/**")])),
        None,
        false,
    )?;
    workflow.add_job(
        "test",
        Job::new([
            RunStep::new(format!("make name=\"{name}\" build")),
            RunStep::new(format!("make name=\"{name}\" test")),
        ]),
    );
    Ok(workflow)
}

struct FooService;

impl Service for FooService {
    const FILENAME: &'static str = "foo";

    fn service_name() -> &'static str {
        "foo"
    }
}

impl WorkflowDefinition for FooService {
    fn parents() -> &'static [&'static str] {
        &[SERVICE]
    }

    fn build() -> gadk::Result<Workflow> {
        service_workflow::<Self>()
    }
}

struct BarService;

impl Service for BarService {
    const FILENAME: &'static str = "bar";

    fn service_name() -> &'static str {
        "bar"
    }
}

impl WorkflowDefinition for BarService {
    fn parents() -> &'static [&'static str] {
        &[SERVICE]
    }

    fn build() -> gadk::Result<Workflow> {
        service_workflow::<Self>()
    }
}

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry
        .register_abstract(SERVICE, &[ROOT])
        .register::<FooService>()
        .register::<BarService>();
    gadk::run(&registry)
}
