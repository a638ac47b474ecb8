use std::fmt;

use serde_yaml::Value;

use super::ToYaml;

/// A value evaluated by the runner instead of being taken literally,
/// e.g. `secrets.DEPLOY_KEY` or `github.ref`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    expr: String,
}

impl Expression {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }

    /// The raw expression, without the interpolation wrapper.
    pub fn raw(&self) -> &str {
        &self.expr
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{{ {} }}}}", self.expr)
    }
}

impl ToYaml for Expression {
    fn to_yaml(&self) -> Value {
        Value::String(self.to_string())
    }
}
