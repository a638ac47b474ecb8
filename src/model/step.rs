use serde_yaml::{Mapping, Value};

use super::env::vars_to_yaml;
use super::{EnvValue, EnvVars, ToYaml, WithArgs};

/// Attributes shared by every kind of step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepCommon {
    name: Option<String>,
    condition: Option<String>,
    env: EnvVars,
}

/// Builder methods available on every step kind.
///
/// Implementors only expose their [`StepCommon`]; the setters come for free.
pub trait StepOptions: Sized {
    fn common_mut(&mut self) -> &mut StepCommon;

    /// Display name of the step.
    fn name(mut self, name: impl Into<String>) -> Self {
        self.common_mut().name = Some(name.into());
        self
    }

    /// Condition under which the step runs, emitted as `if`.
    fn condition(mut self, condition: impl Into<String>) -> Self {
        let condition = condition.into();
        self.common_mut().condition = (!condition.is_empty()).then_some(condition);
        self
    }

    /// Adds a single environment variable.
    fn env(mut self, key: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        self.common_mut().env.insert(key.into(), value.into());
        self
    }

    /// Replaces all environment variables.
    fn envs(mut self, env: EnvVars) -> Self {
        self.common_mut().env = env;
        self
    }
}

/// Runs a shell command.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStep {
    common: StepCommon,
    command: String,
}

impl RunStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            common: StepCommon::default(),
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl StepOptions for RunStep {
    fn common_mut(&mut self) -> &mut StepCommon {
        &mut self.common
    }
}

/// Invokes a reusable action, e.g. `actions/checkout@v4`.
#[derive(Debug, Clone, PartialEq)]
pub struct UsesStep {
    common: StepCommon,
    action: String,
    with: WithArgs,
}

impl UsesStep {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            common: StepCommon::default(),
            action: action.into(),
            with: WithArgs::new(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Adds a single keyed argument.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        self.with.insert(key.into(), value.into());
        self
    }

    /// Replaces all keyed arguments.
    pub fn with_args(&mut self, args: WithArgs) {
        self.with = args;
    }
}

impl StepOptions for UsesStep {
    fn common_mut(&mut self) -> &mut StepCommon {
        &mut self.common
    }
}

/// One entry of a job's `steps` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Run(RunStep),
    Uses(UsesStep),
}

impl Step {
    fn common(&self) -> &StepCommon {
        match self {
            Self::Run(step) => &step.common,
            Self::Uses(step) => &step.common,
        }
    }

    fn extend(&self, step: &mut Mapping) {
        match self {
            Self::Run(run) => {
                step.insert("run".into(), Value::String(run.command.clone()));
            }
            Self::Uses(uses) => {
                step.insert("uses".into(), Value::String(uses.action.clone()));
                if !uses.with.is_empty() {
                    step.insert("with".into(), vars_to_yaml(&uses.with));
                }
            }
        }
    }
}

impl From<RunStep> for Step {
    fn from(step: RunStep) -> Self {
        Self::Run(step)
    }
}

impl From<UsesStep> for Step {
    fn from(step: UsesStep) -> Self {
        Self::Uses(step)
    }
}

impl ToYaml for Step {
    fn to_yaml(&self) -> Value {
        let common = self.common();
        let mut step = Mapping::new();
        if let Some(name) = &common.name {
            step.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(condition) = &common.condition {
            step.insert("if".into(), Value::String(condition.clone()));
        }
        self.extend(&mut step);
        if !common.env.is_empty() {
            step.insert("env".into(), vars_to_yaml(&common.env));
        }
        Value::Mapping(step)
    }
}
