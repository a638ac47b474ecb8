use std::fs;
use std::io::Write;

use log::{debug, info};

use crate::error::Result;
use crate::layout::OutputLayout;
use crate::model::Workflow;
use crate::render::render;

/// Where rendered workflows go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Overwrite the file at each workflow's canonical path.
    Write,
    /// Stream each rendered workflow to the output sink.
    Print,
}

impl SyncMode {
    pub fn from_print_flag(print: bool) -> Self {
        if print {
            Self::Print
        } else {
            Self::Write
        }
    }
}

/// Renders every workflow and writes or prints it, in the given order.
///
/// Stops at the first failure; files written before it are left in place.
///
/// # Errors
///
/// Returns an error if rendering fails, or if the output directory or a
/// workflow file cannot be written.
pub fn sync(
    workflows: &[Workflow],
    layout: &OutputLayout,
    mode: SyncMode,
    output: &mut dyn Write,
) -> Result<()> {
    if mode == SyncMode::Write && !workflows.is_empty() {
        fs::create_dir_all(layout.directory())?;
    }

    for workflow in workflows {
        let rendered = render(workflow)?;
        match mode {
            SyncMode::Write => {
                let path = layout.path_for(workflow);
                fs::write(&path, rendered)?;
                debug!("Wrote {}", path.display());
            }
            SyncMode::Print => writeln!(output, "{rendered}")?,
        }
    }

    if mode == SyncMode::Write {
        info!(
            "Synced {} workflows to {}",
            workflows.len(),
            layout.directory().display()
        );
    }

    Ok(())
}
