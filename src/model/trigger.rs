use serde_yaml::{Mapping, Value};

use super::{string_sequence, ToYaml};

/// Branch and path filters for a trigger kind such as `push` or `pull_request`.
///
/// Serialized as `branches` then `paths`; empty filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct On {
    branches: Vec<String>,
    paths: Vec<String>,
}

impl On {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }
}

impl ToYaml for On {
    fn to_yaml(&self) -> Value {
        let mut on = Mapping::new();
        if !self.branches.is_empty() {
            on.insert("branches".into(), string_sequence(&self.branches));
        }
        if !self.paths.is_empty() {
            on.insert("paths".into(), string_sequence(&self.paths));
        }
        Value::Mapping(on)
    }
}
