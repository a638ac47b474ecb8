use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use super::{Expression, ToYaml};

/// Environment variables in insertion order.
pub type EnvVars = IndexMap<String, EnvValue>;

/// Keyed arguments passed to an action through `with`.
pub type WithArgs = IndexMap<String, EnvValue>;

/// A variable value: either a literal scalar or a runner expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Literal(Value),
    Expression(Expression),
}

impl ToYaml for EnvValue {
    fn to_yaml(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Expression(expr) => expr.to_yaml(),
        }
    }
}

impl From<Expression> for EnvValue {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::String(value))
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Literal(Value::Bool(value))
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        Self::Literal(Value::Number(value.into()))
    }
}

impl From<u32> for EnvValue {
    fn from(value: u32) -> Self {
        Self::Literal(Value::Number(value.into()))
    }
}

impl From<f64> for EnvValue {
    fn from(value: f64) -> Self {
        Self::Literal(Value::Number(value.into()))
    }
}

/// Maps every value through [`EnvValue::to_yaml`], keeping key order.
pub(crate) fn vars_to_yaml(vars: &IndexMap<String, EnvValue>) -> Value {
    let mapping: Mapping = vars
        .iter()
        .map(|(key, value)| (Value::String(key.clone()), value.to_yaml()))
        .collect();
    Value::Mapping(mapping)
}
