use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::error::{GadkError, Result};

use super::{Job, On, ToYaml};

/// Concurrency group of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concurrency {
    pub group: String,
    pub cancel_in_progress: bool,
}

impl ToYaml for Concurrency {
    fn to_yaml(&self) -> Value {
        if !self.cancel_in_progress {
            return Value::String(self.group.clone());
        }
        let mut concurrency = Mapping::new();
        concurrency.insert("group".into(), Value::String(self.group.clone()));
        concurrency.insert("cancel-in-progress".into(), Value::Bool(true));
        Value::Mapping(concurrency)
    }
}

/// A single CI document: triggers plus named jobs.
///
/// `filename` identifies the workflow: it names the generated file, orders
/// workflows in a batch and must be unique among all registered definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    filename: String,
    name: Option<String>,
    concurrency: Option<Concurrency>,
    pull_request: Option<On>,
    push: Option<On>,
    workflow_dispatch: bool,
    jobs: IndexMap<String, Job>,
}

impl Workflow {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            name: None,
            concurrency: None,
            pull_request: None,
            push: None,
            workflow_dispatch: false,
            jobs: IndexMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_concurrency(mut self, group: impl Into<String>, cancel_in_progress: bool) -> Self {
        self.concurrency = Some(Concurrency {
            group: group.into(),
            cancel_in_progress,
        });
        self
    }

    pub fn with_job(mut self, name: impl Into<String>, job: Job) -> Self {
        self.add_job(name, job);
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn jobs(&self) -> &IndexMap<String, Job> {
        &self.jobs
    }

    /// Adds a job, replacing any job already registered under `name` in place.
    pub fn add_job(&mut self, name: impl Into<String>, job: Job) {
        self.jobs.insert(name.into(), job);
    }

    /// Sets the triggers of the workflow.
    ///
    /// Every call replaces the previous configuration: a `None` trigger is
    /// removed. `workflow_dispatch` takes `true`, `false` or null, where null
    /// enables the trigger without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`GadkError::UnsupportedConfiguration`] for any other
    /// `workflow_dispatch` value, since dispatch inputs are not modelled.
    pub fn on(
        &mut self,
        pull_request: Option<On>,
        push: Option<On>,
        workflow_dispatch: impl Into<Value>,
    ) -> Result<()> {
        let workflow_dispatch = match workflow_dispatch.into() {
            Value::Bool(enabled) => enabled,
            Value::Null => true,
            other => {
                return Err(GadkError::UnsupportedConfiguration(format!(
                    "`workflow_dispatch` must be true, false or null (further configuration \
                     not yet supported), got {other:?}"
                )))
            }
        };

        self.pull_request = pull_request;
        self.push = push;
        self.workflow_dispatch = workflow_dispatch;
        Ok(())
    }

    fn triggers_to_yaml(&self) -> Value {
        let mut on = Mapping::new();
        if let Some(pull_request) = &self.pull_request {
            on.insert("pull_request".into(), pull_request.to_yaml());
        }
        if let Some(push) = &self.push {
            on.insert("push".into(), push.to_yaml());
        }
        if self.workflow_dispatch {
            on.insert("workflow_dispatch".into(), Value::Null);
        }
        Value::Mapping(on)
    }
}

impl ToYaml for Workflow {
    fn to_yaml(&self) -> Value {
        let mut workflow = Mapping::new();
        if let Some(name) = &self.name {
            workflow.insert("name".into(), Value::String(name.clone()));
        }
        if let Some(concurrency) = &self.concurrency {
            workflow.insert("concurrency".into(), concurrency.to_yaml());
        }
        workflow.insert("on".into(), self.triggers_to_yaml());
        if !self.jobs.is_empty() {
            let jobs: Mapping = self
                .jobs
                .iter()
                .map(|(name, job)| (Value::String(name.clone()), job.to_yaml()))
                .collect();
            workflow.insert("jobs".into(), Value::Mapping(jobs));
        }
        Value::Mapping(workflow)
    }
}
