use serde_yaml::{Mapping, Value};

use super::env::vars_to_yaml;
use super::{string_sequence, EnvValue, EnvVars, Step, ToYaml, UsesStep, ACTION_CHECKOUT};

/// Runner label used when a job does not pick one.
pub const DEFAULT_RUNS_ON: &str = "ubuntu-latest";

/// A named unit of execution within a workflow.
///
/// Serialized as `if`, `needs`, `runs-on`, `env`, `steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    condition: Option<String>,
    runs_on: String,
    steps: Vec<Step>,
    needs: Vec<String>,
    env: EnvVars,
}

impl Job {
    /// A job on the default runner whose steps follow a checkout step.
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        Self::builder().steps(steps).build()
    }

    pub fn builder() -> JobBuilder {
        JobBuilder::default()
    }

    pub fn add_step(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    /// Inserts a step before every existing step, checkout included.
    pub fn prepend_step(&mut self, step: impl Into<Step>) {
        self.steps.insert(0, step.into());
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn needs(&self) -> &[String] {
        &self.needs
    }

    pub fn runs_on(&self) -> &str {
        &self.runs_on
    }
}

impl ToYaml for Job {
    fn to_yaml(&self) -> Value {
        let mut job = Mapping::new();
        if let Some(condition) = &self.condition {
            job.insert("if".into(), Value::String(condition.clone()));
        }
        if !self.needs.is_empty() {
            job.insert("needs".into(), string_sequence(&self.needs));
        }
        job.insert("runs-on".into(), Value::String(self.runs_on.clone()));
        if !self.env.is_empty() {
            job.insert("env".into(), vars_to_yaml(&self.env));
        }
        if !self.steps.is_empty() {
            job.insert(
                "steps".into(),
                Value::Sequence(self.steps.iter().map(ToYaml::to_yaml).collect()),
            );
        }
        Value::Mapping(job)
    }
}

/// Builder for [`Job`]. The checkout step is added by [`JobBuilder::build`]
/// unless [`JobBuilder::default_checkout`] turned it off.
#[derive(Debug, Clone)]
pub struct JobBuilder {
    condition: Option<String>,
    runs_on: String,
    steps: Vec<Step>,
    needs: Vec<String>,
    env: EnvVars,
    default_checkout: bool,
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self {
            condition: None,
            runs_on: DEFAULT_RUNS_ON.to_string(),
            steps: Vec::new(),
            needs: Vec::new(),
            env: EnvVars::new(),
            default_checkout: true,
        }
    }
}

impl JobBuilder {
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        let condition = condition.into();
        self.condition = (!condition.is_empty()).then_some(condition);
        self
    }

    pub fn runs_on(mut self, runs_on: impl Into<String>) -> Self {
        self.runs_on = runs_on.into();
        self
    }

    pub fn step(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    pub fn needs<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs = needs.into_iter().map(Into::into).collect();
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<EnvValue>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn envs(mut self, env: EnvVars) -> Self {
        self.env = env;
        self
    }

    pub fn default_checkout(mut self, enabled: bool) -> Self {
        self.default_checkout = enabled;
        self
    }

    pub fn build(self) -> Job {
        let mut steps = self.steps;
        if self.default_checkout {
            steps.insert(0, UsesStep::new(ACTION_CHECKOUT).into());
        }

        Job {
            condition: self.condition,
            runs_on: self.runs_on,
            steps,
            needs: self.needs,
            env: self.env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expression, RunStep};

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_default_checkout_comes_first() {
        let job = Job::new([RunStep::new("make build"), RunStep::new("make test")]);
        let expected: Value = serde_yaml::from_str(&format!(
            "runs-on: {DEFAULT_RUNS_ON}\nsteps:\n- uses: {ACTION_CHECKOUT}\n- run: make build\n- run: make test\n"
        ))
        .unwrap();
        assert_eq!(job.to_yaml(), expected);
    }

    #[test]
    fn test_checkout_is_inserted_once() {
        let job = Job::builder()
            .step(RunStep::new("a"))
            .step(RunStep::new("b"))
            .build();
        let checkouts = job
            .steps()
            .iter()
            .filter(|step| matches!(step, Step::Uses(uses) if uses.action() == ACTION_CHECKOUT))
            .count();
        assert_eq!(checkouts, 1);
        assert_eq!(job.steps().len(), 3);
    }

    #[test]
    fn test_without_default_checkout() {
        let job = Job::builder()
            .default_checkout(false)
            .step(RunStep::new("echo hi"))
            .build();
        assert_eq!(job.steps(), &[Step::from(RunStep::new("echo hi"))]);
    }

    #[test]
    fn test_job_without_steps_omits_steps_key() {
        let job = Job::builder().default_checkout(false).build();
        assert_eq!(keys(&job.to_yaml()), vec!["runs-on"]);
    }

    #[test]
    fn test_add_and_prepend_steps() {
        let mut job = Job::new([RunStep::new("middle")]);
        job.add_step(RunStep::new("last"));
        job.prepend_step(RunStep::new("first"));

        let steps = job.to_yaml()["steps"].clone();
        let steps = steps.as_sequence().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0]["run"], Value::String("first".into()));
        assert_eq!(steps[1]["uses"], Value::String(ACTION_CHECKOUT.into()));
        assert_eq!(steps[2]["run"], Value::String("middle".into()));
        assert_eq!(steps[3]["run"], Value::String("last".into()));
    }

    #[test]
    fn test_job_field_order() {
        let job = Job::builder()
            .env("CARGO_TERM_COLOR", "always")
            .env("TOKEN", Expression::new("secrets.TOKEN"))
            .needs(["build", "lint"])
            .runs_on("macos-latest")
            .condition("github.event_name == 'push'")
            .step(RunStep::new("cargo test"))
            .build();

        let yaml = job.to_yaml();
        assert_eq!(keys(&yaml), vec!["if", "needs", "runs-on", "env", "steps"]);
        assert_eq!(yaml["runs-on"], Value::String("macos-latest".into()));
        assert_eq!(
            yaml["env"]["TOKEN"],
            Value::String("${{ secrets.TOKEN }}".into())
        );
    }
}
