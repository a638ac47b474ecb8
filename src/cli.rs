use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;

use crate::check::check;
use crate::config::Config;
use crate::discovery::DefinitionSource;
use crate::model::Workflow;
use crate::output::print_check_report;
use crate::render::order_workflows;
use crate::sync::{sync, SyncMode};

#[derive(Parser, Debug)]
#[command(name = "gadk")]
#[command(author, version, about = "Generate GitHub Actions workflows from code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print workflow YAML to stdout instead of writing files
    #[arg(short, long, global = true, default_value_t = false)]
    print: bool,

    /// Configuration file (defaults to ./gadk.toml, .json, .yaml or .yml)
    #[arg(short, long, global = true, env = "GADK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory of the generated workflows, overriding the configuration
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Render every workflow and write it to its file (the default)
    Sync,
    /// Fail if any generated file differs from its current definition
    Check,
}

impl Cli {
    fn load_workflows(source: &dyn DefinitionSource) -> Result<Vec<Workflow>> {
        let registry = source.load()?;
        let workflows = registry
            .discover()
            .context("Failed to discover workflow definitions")?;
        Ok(order_workflows(workflows)?)
    }

    fn execute_sync(&self, workflows: &[Workflow], config: &Config) -> Result<()> {
        let layout = config.layout(self.output_dir.as_deref())?;
        let mode = SyncMode::from_print_flag(self.print);

        let stdout = io::stdout();
        sync(workflows, &layout, mode, &mut stdout.lock())?;

        if mode == SyncMode::Write {
            info!("Workflows written to: {}", layout.directory().display());
        }
        Ok(())
    }

    fn execute_check(&self, workflows: &[Workflow], config: &Config) -> Result<()> {
        let layout = config.layout(self.output_dir.as_deref())?;

        let report = check(workflows, &layout)?;
        print_check_report(&report);
        report.ensure_up_to_date()?;
        Ok(())
    }

    pub fn execute(&self, source: &dyn DefinitionSource) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let workflows = Self::load_workflows(source)?;

        match self.command.unwrap_or(Commands::Sync) {
            Commands::Sync => self.execute_sync(&workflows, &config),
            Commands::Check => self.execute_check(&workflows, &config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{Registry, WorkflowDefinition};
    use crate::error::GadkError;
    use crate::model::{Job, RunStep};
    use tempfile::TempDir;

    struct Lint;

    impl WorkflowDefinition for Lint {
        fn build() -> crate::error::Result<Workflow> {
            Ok(Workflow::new("lint").with_job("lint", Job::new([RunStep::new("make lint")])))
        }
    }

    struct AlsoLint;

    impl WorkflowDefinition for AlsoLint {
        fn build() -> crate::error::Result<Workflow> {
            Ok(Workflow::new("lint"))
        }
    }

    fn parse(dir: &TempDir, args: &[&str]) -> Cli {
        let output_dir = dir.path().to_str().unwrap();
        let mut argv = vec!["gadk", "--output-dir", output_dir];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register::<Lint>();
        registry
    }

    #[test]
    fn test_default_command_is_sync() {
        let cli = Cli::parse_from(["gadk"]);
        assert_eq!(cli.command, None);
        assert!(!cli.print);

        let cli = Cli::parse_from(["gadk", "sync", "--print"]);
        assert_eq!(cli.command, Some(Commands::Sync));
        assert!(cli.print);
    }

    #[test]
    fn test_check_fails_before_sync_and_passes_after() {
        let temp_dir = TempDir::new().unwrap();

        let err = parse(&temp_dir, &["check"]).execute(&registry()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GadkError>(),
            Some(GadkError::Outdated { outdated: 1, total: 1 })
        ));

        parse(&temp_dir, &[]).execute(&registry()).unwrap();
        assert!(temp_dir.path().join("lint.yml").exists());

        parse(&temp_dir, &["check"]).execute(&registry()).unwrap();
    }

    #[test]
    fn test_print_mode_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        parse(&temp_dir, &["--print"]).execute(&registry()).unwrap();
        assert!(!temp_dir.path().join("lint.yml").exists());
    }

    #[test]
    fn test_duplicate_filenames_abort() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry();
        registry.register::<AlsoLint>();

        let err = parse(&temp_dir, &[]).execute(&registry).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GadkError>(),
            Some(GadkError::DuplicateFilename(_))
        ));
        assert!(!temp_dir.path().join("lint.yml").exists());
    }
}
