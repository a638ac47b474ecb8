use std::path::{Path, PathBuf};

use crate::error::{GadkError, Result};
use crate::model::Workflow;

/// Directory the runner reads workflows from, relative to the repository root.
pub const DEFAULT_DIRECTORY: &str = ".github/workflows";
pub const DEFAULT_EXTENSION: &str = "yml";

/// Maps workflow filenames to their file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    directory: PathBuf,
    extension: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl OutputLayout {
    /// # Errors
    ///
    /// Returns [`GadkError::Config`] if the extension is empty or contains a
    /// path separator or a leading dot.
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Result<Self> {
        let extension = extension.into();
        if extension.is_empty() || extension.starts_with('.') || extension.contains(['/', '\\']) {
            return Err(GadkError::Config(format!(
                "invalid workflow file extension `{extension}`"
            )));
        }

        Ok(Self {
            directory: directory.into(),
            extension,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Canonical path of a workflow: `<directory>/<filename>.<extension>`.
    pub fn path_for(&self, workflow: &Workflow) -> PathBuf {
        self.directory
            .join(format!("{}.{}", workflow.filename(), self.extension))
    }
}
