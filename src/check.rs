use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::{GadkError, Result};
use crate::layout::OutputLayout;
use crate::model::Workflow;
use crate::render::render;

/// Drift status of one workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The file matches the rendered workflow byte for byte.
    UpToDate,
    /// No file exists at the canonical path.
    Missing,
    /// The file exists but its content differs.
    Changed,
}

impl Status {
    pub fn is_up_to_date(self) -> bool {
        self == Self::UpToDate
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UpToDate => "up to date",
            Self::Missing => "outdated (missing)",
            Self::Changed => "outdated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStatus {
    pub filename: String,
    pub path: PathBuf,
    pub status: Status,
}

/// Per-workflow results of a drift check, in workflow order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: Vec<WorkflowStatus>,
}

impl CheckReport {
    pub fn outdated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.status.is_up_to_date())
            .count()
    }

    /// True when every workflow is up to date, including when there are none.
    pub fn is_up_to_date(&self) -> bool {
        self.outdated_count() == 0
    }

    /// # Errors
    ///
    /// Returns [`GadkError::Outdated`] if any workflow is outdated.
    pub fn ensure_up_to_date(&self) -> Result<()> {
        if self.is_up_to_date() {
            return Ok(());
        }
        Err(GadkError::Outdated {
            outdated: self.outdated_count(),
            total: self.entries.len(),
        })
    }
}

/// Compares every workflow against the file at its canonical path.
///
/// Missing and changed files are recorded in the report rather than
/// returned as errors, so every workflow is evaluated.
///
/// # Errors
///
/// Returns an error if rendering fails or an existing file cannot be read.
pub fn check(workflows: &[Workflow], layout: &OutputLayout) -> Result<CheckReport> {
    let mut entries = Vec::with_capacity(workflows.len());

    for workflow in workflows {
        let path = layout.path_for(workflow);
        let rendered = render(workflow)?;

        let status = match fs::read(&path) {
            Ok(existing) if existing == rendered.as_bytes() => Status::UpToDate,
            Ok(_) => Status::Changed,
            Err(err) if err.kind() == ErrorKind::NotFound => Status::Missing,
            Err(err) => return Err(err.into()),
        };

        if status.is_up_to_date() {
            debug!("{} is up to date", path.display());
        } else {
            warn!("{} is {}", path.display(), status.label());
        }

        entries.push(WorkflowStatus {
            filename: workflow.filename().to_string(),
            path,
            status,
        });
    }

    let report = CheckReport { entries };
    info!(
        "Checked {} workflows, {} outdated",
        report.entries.len(),
        report.outdated_count()
    );
    Ok(report)
}
