use std::collections::HashMap;
use std::sync::Arc;

use super::producer::{
    MatrixMultiply, MergeSort, PairSearch, PartitionStatistics, TournamentMax, TraceProducer,
    TreeSum,
};

/// Metadata describing a registered producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerInfo {
    /// Lookup name
    pub name: String,
    /// One-line description
    pub description: String,
}

/// Registry of trace producers, keyed by name.
#[derive(Default)]
pub struct ProducerRegistry {
    entries: HashMap<String, Arc<dyn TraceProducer>>,
}

impl std::fmt::Debug for ProducerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProducerRegistry")
            .field("producers", &self.names())
            .finish()
    }
}

impl ProducerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry pre-populated with every built-in producer.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(MergeSort);
        registry.register(TreeSum);
        registry.register(TournamentMax);
        registry.register(PartitionStatistics);
        registry.register(MatrixMultiply);
        registry.register(PairSearch::default());
        registry
    }

    /// Register a producer (replacing any with the same name) and return a handle to it.
    pub fn register<P>(&mut self, producer: P) -> Arc<P>
    where
        P: TraceProducer,
    {
        let arc = Arc::new(producer);
        self.entries
            .insert(arc.name().to_string(), arc.clone() as Arc<dyn TraceProducer>);
        arc
    }

    /// Retrieve a producer by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn TraceProducer>> {
        self.entries.get(name).map(Arc::clone)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All registered producers, sorted by name.
    pub fn list(&self) -> Vec<ProducerInfo> {
        let mut infos: Vec<ProducerInfo> = self
            .entries
            .iter()
            .map(|(name, producer)| ProducerInfo {
                name: name.clone(),
                description: producer.description().to_string(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_listed_in_order() {
        let registry = ProducerRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![
                "matrix-multiply",
                "merge-sort",
                "pair-search",
                "partition-statistics",
                "tournament-max",
                "tree-sum",
            ]
        );
        assert_eq!(registry.list().len(), 6);
    }

    #[test]
    fn test_register_replaces_by_name() {
        let mut registry = ProducerRegistry::new();
        registry.register(PairSearch { target: 3 });
        let handle = registry.register(PairSearch { target: 7 });
        assert_eq!(handle.target, 7);
        assert_eq!(registry.names(), vec!["pair-search"]);

        let trace = registry.get("pair-search").unwrap().run(&[3, 4]);
        assert_eq!(trace.events()[0].kind, crate::trace::EventKind::Found);
    }

    #[test]
    fn test_get_unknown() {
        assert!(ProducerRegistry::with_builtins().get("bogo-sort").is_none());
    }
}
