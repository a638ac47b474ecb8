//! Generate GitHub Actions workflows from Rust code.
//!
//! Workflows are plain values built from the [`model`] types. Definitions are
//! registered in a [`discovery::Registry`], rendered to YAML with a fixed
//! header, written to `.github/workflows/` and checked for drift against the
//! files already on disk.
//!
//! ```no_run
//! use gadk::prelude::*;
//!
//! struct Ci;
//!
//! impl WorkflowDefinition for Ci {
//!     fn build() -> gadk::Result<Workflow> {
//!         let mut workflow = Workflow::new("ci").with_name("CI");
//!         workflow.on(Some(On::new().branches(["main"])), None, true)?;
//!         workflow.add_job("test", Job::new([RunStep::new("cargo test")]));
//!         Ok(workflow)
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut registry = Registry::new();
//!     registry.register::<Ci>();
//!     gadk::run(&registry)
//! }
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod model;
pub mod output;
pub mod render;
pub mod sync;

use clap::Parser;
use log::info;

pub use error::{GadkError, Result};

/// Everything needed to write workflow definitions.
pub mod prelude {
    pub use crate::discovery::{DefinitionSource, Registry, WorkflowDefinition, ROOT};
    pub use crate::model::{
        Artifact, EnvValue, EnvVars, Expression, Job, On, RunStep, Step, StepOptions, ToYaml,
        UsesStep, WithArgs, Workflow, ACTION_CHECKOUT, ACTION_DOWNLOAD, ACTION_UPLOAD,
    };
}

/// Runs the `gadk` command line against the given definitions.
///
/// # Errors
///
/// Returns any failure of the selected command, including
/// [`GadkError::Outdated`] when `check` finds drift.
pub fn run(source: &dyn discovery::DefinitionSource) -> anyhow::Result<()> {
    env_logger::init();

    output::print_banner();

    let cli = cli::Cli::parse();
    info!("Starting gadk - GitHub Actions Development Kit");
    cli.execute(source)
}
