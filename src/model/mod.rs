//! Workflow document model.
//!
//! Every node converts itself into a plain [`serde_yaml::Value`] tree through
//! [`ToYaml`]. Mappings are built with [`serde_yaml::Mapping`], which keeps
//! insertion order, so the field order chosen here is the order written to
//! disk. Empty collections and unset options are never emitted.

mod artifact;
mod env;
mod expression;
mod job;
mod step;
mod trigger;
mod workflow;

pub use artifact::Artifact;
pub use env::{EnvValue, EnvVars, WithArgs};
pub use expression::Expression;
pub use job::{Job, JobBuilder, DEFAULT_RUNS_ON};
pub use step::{RunStep, Step, StepCommon, StepOptions, UsesStep};
pub use trigger::On;
pub use workflow::{Concurrency, Workflow};

use serde_yaml::Value;

/// Action used for the checkout step prepended to jobs.
pub const ACTION_CHECKOUT: &str = "actions/checkout@v4";
/// Action used by [`Artifact::as_upload`].
pub const ACTION_UPLOAD: &str = "actions/upload-artifact@v4";
/// Action used by [`Artifact::as_download`].
pub const ACTION_DOWNLOAD: &str = "actions/download-artifact@v4";

/// Conversion of a model node into a value ready for YAML emission.
pub trait ToYaml {
    /// Returns a plain mapping/sequence/scalar tree without cycles.
    fn to_yaml(&self) -> Value;
}

fn string_sequence(items: &[String]) -> Value {
    Value::Sequence(items.iter().cloned().map(Value::String).collect())
}
