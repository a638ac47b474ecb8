use serde_yaml::Value;

use crate::error::{GadkError, Result};
use crate::model::{ToYaml, Workflow};

/// First line of every generated file.
pub const HEADER: &str =
    "# This file is managed by gadk. For more information see https://docs.rs/gadk.";

/// Renders a workflow as the full content of its generated file.
///
/// # Errors
///
/// Returns an error if the YAML emitter rejects the document.
pub fn render(workflow: &Workflow) -> Result<String> {
    let body = dump_yaml(&workflow.to_yaml())?;
    Ok(format!("{HEADER}\n{body}"))
}

/// Block-style YAML with keys in insertion order.
///
/// `serde_yaml` never emits anchors or aliases, so repeated structures are
/// written out in full, which is what the runner expects.
pub fn dump_yaml(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Sorts workflows by filename.
///
/// # Errors
///
/// Returns [`GadkError::DuplicateFilename`] if two workflows would be written
/// to the same file.
pub fn order_workflows(mut workflows: Vec<Workflow>) -> Result<Vec<Workflow>> {
    workflows.sort_by(|a, b| a.filename().cmp(b.filename()));

    if let Some(pair) = workflows
        .windows(2)
        .find(|pair| pair[0].filename() == pair[1].filename())
    {
        return Err(GadkError::DuplicateFilename(pair[0].filename().to_string()));
    }
    Ok(workflows)
}
