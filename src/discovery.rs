//! Discovery of concrete workflow definitions.
//!
//! Definitions are arranged in a hierarchy under [`ROOT`]. Abstract layers
//! group definitions that share a shape (for example one workflow per
//! service); only types implementing [`WorkflowDefinition`] can be concrete,
//! so an unfinished layer can never be instantiated by mistake.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, info};

use crate::error::{GadkError, Result};
use crate::model::Workflow;

/// Name of the implicit root every hierarchy hangs off.
pub const ROOT: &str = "Workflow";

/// Zero-argument constructor of a concrete definition.
pub type Factory = fn() -> Result<Workflow>;

/// A concrete workflow definition.
pub trait WorkflowDefinition {
    /// Names of the layers this definition derives from.
    fn parents() -> &'static [&'static str] {
        &[ROOT]
    }

    /// Builds the workflow. Errors abort the whole discovery pass.
    fn build() -> Result<Workflow>;
}

/// Supplies the registry of definitions to work on.
///
/// Where the definitions come from (compiled in, generated, loaded from a
/// plugin) is up to the implementor.
pub trait DefinitionSource {
    /// # Errors
    ///
    /// Returns [`GadkError::DefinitionLoad`] when the definitions cannot be
    /// materialized.
    fn load(&self) -> Result<Registry>;
}

#[derive(Debug, Clone)]
enum NodeKind {
    Abstract,
    Concrete(Factory),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parents: Vec<String>,
}

/// Ordered registry of abstract layers and concrete definitions.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    nodes: IndexMap<String, Node>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an abstract layer below `parents`.
    pub fn register_abstract(&mut self, name: &str, parents: &[&str]) -> &mut Self {
        self.insert(name.to_string(), NodeKind::Abstract, parents);
        self
    }

    /// Registers the concrete definition `D`, keyed by its type name.
    ///
    /// Registering the same type twice merges its parents.
    pub fn register<D: WorkflowDefinition>(&mut self) -> &mut Self {
        self.register_factory(std::any::type_name::<D>(), D::parents(), D::build)
    }

    /// Registers a concrete definition from a plain constructor.
    pub fn register_factory(&mut self, name: &str, parents: &[&str], factory: Factory) -> &mut Self {
        self.insert(name.to_string(), NodeKind::Concrete(factory), parents);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, name: String, kind: NodeKind, parents: &[&str]) {
        let node = self.nodes.entry(name).or_insert_with(|| Node {
            kind: kind.clone(),
            parents: Vec::new(),
        });
        node.kind = kind;
        for parent in parents {
            if !node.parents.iter().any(|p| p == parent) {
                node.parents.push((*parent).to_string());
            }
        }
    }

    fn children_of(&self, parent: &str) -> impl Iterator<Item = &str> + '_ {
        let parent = parent.to_string();
        self.nodes
            .iter()
            .filter(move |(_, node)| node.parents.iter().any(|p| *p == parent))
            .map(|(name, _)| name.as_str())
    }

    fn validate(&self) -> Result<()> {
        for (name, node) in &self.nodes {
            for parent in &node.parents {
                let known = parent == ROOT
                    || matches!(
                        self.nodes.get(parent).map(|n| &n.kind),
                        Some(NodeKind::Abstract)
                    );
                if !known {
                    return Err(GadkError::DefinitionLoad(format!(
                        "`{name}` derives from `{parent}`, which is not a registered abstract layer"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Builds one workflow per concrete definition reachable from [`ROOT`].
    ///
    /// Breadth-first over the hierarchy: abstract layers contribute their
    /// children to the next level, concrete definitions are built once even
    /// when reachable through several layers. The result is in discovery
    /// order; use [`crate::render::order_workflows`] for a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`GadkError::DefinitionLoad`] for parents that are not
    /// registered layers, and [`GadkError::Construction`] for the first
    /// definition whose constructor fails.
    pub fn discover(&self) -> Result<Vec<Workflow>> {
        self.validate()?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut concrete: Vec<(&str, Factory)> = Vec::new();
        let mut frontier: Vec<&str> = self.children_of(ROOT).collect();

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for name in frontier {
                if !seen.insert(name) {
                    continue;
                }
                match self.nodes[name].kind {
                    NodeKind::Concrete(factory) => {
                        debug!("Found workflow definition {name}");
                        concrete.push((name, factory));
                    }
                    NodeKind::Abstract => {
                        debug!("Descending into abstract layer {name}");
                        next.extend(self.children_of(name).filter(|child| !seen.contains(child)));
                    }
                }
            }
            frontier = next;
        }

        let workflows = concrete
            .into_iter()
            .map(|(name, factory)| {
                factory().map_err(|err| GadkError::Construction {
                    definition: name.to_string(),
                    source: Box::new(err),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Discovered {} workflow definitions", workflows.len());
        Ok(workflows)
    }
}

impl DefinitionSource for Registry {
    fn load(&self) -> Result<Registry> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Job, RunStep};

    struct Concrete;

    impl WorkflowDefinition for Concrete {
        fn parents() -> &'static [&'static str] {
            &["B"]
        }

        fn build() -> Result<Workflow> {
            Ok(Workflow::new("concrete"))
        }
    }

    struct Diamond;

    impl WorkflowDefinition for Diamond {
        fn parents() -> &'static [&'static str] {
            &["Left", "Right"]
        }

        fn build() -> Result<Workflow> {
            Ok(Workflow::new("diamond"))
        }
    }

    struct Direct;

    impl WorkflowDefinition for Direct {
        fn build() -> Result<Workflow> {
            Ok(Workflow::new("direct").with_job("test", Job::new([RunStep::new("make test")])))
        }
    }

    struct Broken;

    impl WorkflowDefinition for Broken {
        fn build() -> Result<Workflow> {
            let mut workflow = Workflow::new("broken");
            workflow.on(None, None, "not a bool")?;
            Ok(workflow)
        }
    }

    fn filenames(workflows: &[Workflow]) -> Vec<&str> {
        workflows.iter().map(Workflow::filename).collect()
    }

    #[test]
    fn test_direct_definition() {
        let mut registry = Registry::new();
        registry.register::<Direct>();

        let workflows = registry.discover().unwrap();
        assert_eq!(filenames(&workflows), vec!["direct"]);
    }

    #[test]
    fn test_abstract_layers_are_excluded_at_any_depth() {
        let mut registry = Registry::new();
        registry
            .register_abstract("A", &[ROOT])
            .register_abstract("B", &["A"])
            .register::<Concrete>();

        let workflows = registry.discover().unwrap();
        assert_eq!(filenames(&workflows), vec!["concrete"]);
    }

    #[test]
    fn test_diamond_is_discovered_once() {
        let mut registry = Registry::new();
        registry
            .register_abstract("Left", &[ROOT])
            .register_abstract("Right", &[ROOT])
            .register::<Diamond>();

        let workflows = registry.discover().unwrap();
        assert_eq!(filenames(&workflows), vec!["diamond"]);
    }

    #[test]
    fn test_duplicate_registration_merges_parents() {
        let mut registry = Registry::new();
        registry.register_abstract("A", &[ROOT]);
        registry.register_factory("direct", &[ROOT], Direct::build);
        registry.register_factory("direct", &["A"], Direct::build);

        assert_eq!(registry.len(), 2);
        let workflows = registry.discover().unwrap();
        assert_eq!(filenames(&workflows), vec!["direct"]);
    }

    #[test]
    fn test_abstract_layer_without_children_contributes_nothing() {
        let mut registry = Registry::new();
        registry.register_abstract("Service", &[ROOT]).register::<Direct>();

        let workflows = registry.discover().unwrap();
        assert_eq!(filenames(&workflows), vec!["direct"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.discover().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_parent_is_a_load_error() {
        let mut registry = Registry::new();
        registry.register::<Concrete>();

        let err = registry.discover().unwrap_err();
        assert!(matches!(err, GadkError::DefinitionLoad(_)));
        assert!(err.to_string().contains("`B`"));
    }

    #[test]
    fn test_construction_failure_aborts_discovery() {
        let mut registry = Registry::new();
        registry.register::<Direct>().register::<Broken>();

        let err = registry.discover().unwrap_err();
        match err {
            GadkError::Construction { definition, source } => {
                assert!(definition.ends_with("Broken"));
                assert!(matches!(*source, GadkError::UnsupportedConfiguration(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_registry_is_a_definition_source() {
        let mut registry = Registry::new();
        registry.register::<Direct>();

        let loaded = registry.load().unwrap();
        assert_eq!(filenames(&loaded.discover().unwrap()), vec!["direct"]);
    }
}
