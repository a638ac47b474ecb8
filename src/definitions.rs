//! Workflows of this repository, generated by the `gadk` binary itself.

use gadk::model::JobBuilder;
use gadk::prelude::*;
use gadk::Result;

const RUST_TOOLCHAIN: &str = "dtolnay/rust-toolchain@stable";

fn rust_job() -> JobBuilder {
    Job::builder()
        .env("CARGO_TERM_COLOR", "always")
        .step(UsesStep::new(RUST_TOOLCHAIN).with_arg("components", "rustfmt, clippy"))
}

fn sources() -> On {
    On::new().paths(["src/**", "demos/**", "tests/**", "Cargo.toml", "Cargo.lock"])
}

struct Ci;

impl WorkflowDefinition for Ci {
    fn build() -> Result<Workflow> {
        let mut workflow = Workflow::new("ci")
            .with_name("CI")
            .with_concurrency("${{ github.workflow }}-${{ github.head_ref || github.run_id }}", true);
        workflow.on(
            Some(sources()),
            Some(sources().branches(["main"])),
            true,
        )?;

        workflow.add_job(
            "lint",
            rust_job()
                .step(RunStep::new("cargo fmt --all -- --check").name("Formatting"))
                .step(RunStep::new("cargo clippy --all-targets -- -D warnings").name("Clippy"))
                .build(),
        );
        workflow.add_job(
            "test",
            rust_job()
                .needs(["lint"])
                .step(RunStep::new("cargo test --all-targets").name("Tests"))
                .build(),
        );
        workflow.add_job(
            "drift",
            rust_job()
                .needs(["lint"])
                .step(RunStep::new("cargo run --quiet -- check").name("Generated workflows are current"))
                .build(),
        );
        Ok(workflow)
    }
}

struct Release;

impl WorkflowDefinition for Release {
    fn build() -> Result<Workflow> {
        let mut workflow = Workflow::new("release").with_name("Release");
        workflow.on(None, None, true)?;

        let package = Artifact::new("crate-package", "target/package/*.crate");

        workflow.add_job(
            "package",
            rust_job()
                .step(RunStep::new("cargo package --locked").name("Package"))
                .step(package.as_upload())
                .build(),
        );
        workflow.add_job(
            "publish",
            rust_job()
                .needs(["package"])
                .condition("github.ref == 'refs/heads/main'")
                .step(package.as_download())
                .step(
                    RunStep::new("cargo publish --locked")
                        .name("Publish to crates.io")
                        .env("CARGO_REGISTRY_TOKEN", Expression::new("secrets.CARGO_REGISTRY_TOKEN")),
                )
                .build(),
        );
        Ok(workflow)
    }
}

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register::<Ci>().register::<Release>();
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadk::render::{order_workflows, render};

    #[test]
    fn test_own_workflows_render() {
        let workflows = order_workflows(registry().discover().unwrap()).unwrap();
        let filenames: Vec<_> = workflows.iter().map(Workflow::filename).collect();
        assert_eq!(filenames, vec!["ci", "release"]);

        for workflow in &workflows {
            let rendered = render(workflow).unwrap();
            assert!(rendered.contains(RUST_TOOLCHAIN));
        }
    }

    #[test]
    fn test_publish_uses_secret_expression() {
        let release = Release::build().unwrap();
        let rendered = render(&release).unwrap();
        assert!(rendered.contains("${{ secrets.CARGO_REGISTRY_TOKEN }}"));
        assert!(rendered.contains(ACTION_UPLOAD));
        assert!(rendered.contains(ACTION_DOWNLOAD));
    }
}
