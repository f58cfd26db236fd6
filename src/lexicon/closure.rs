//! Memoized hyponym closures

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::graph::ConceptGraph;
use crate::error::Result;

/// Process-local cache of hyponym closures keyed by concept name.
///
/// Closures are computed with an explicit worklist. When the walk reaches a
/// concept whose closure is already cached, that closure is merged wholesale
/// and its subtree is not walked again. Entries are never invalidated: the
/// graph is immutable.
#[derive(Debug, Default)]
pub struct ClosureCache {
    closures: HashMap<String, Arc<HashSet<String>>>,
    hits: usize,
    misses: usize,
}

impl ClosureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Hyponym closure of `name`, excluding `name` itself
    pub fn closure(&mut self, graph: &ConceptGraph, name: &str) -> Result<Arc<HashSet<String>>> {
        if let Some(hit) = self.closures.get(name) {
            self.hits += 1;
            return Ok(Arc::clone(hit));
        }
        self.misses += 1;

        let root = graph.lookup(name)?;
        let mut visited: HashSet<String> = HashSet::new();
        let mut worklist: Vec<&str> = root.hyponyms().iter().map(String::as_str).collect();
        while let Some(next) = worklist.pop() {
            if !visited.insert(next.to_string()) {
                continue;
            }
            match self.closures.get(next) {
                Some(cached) => visited.extend(cached.iter().cloned()),
                None => worklist.extend(graph.lookup(next)?.hyponyms().iter().map(String::as_str)),
            }
        }

        let closure = Arc::new(visited);
        self.closures.insert(name.to_string(), Arc::clone(&closure));
        Ok(closure)
    }

    /// Whether `candidate` lies in the hyponym closure of `ancestor`
    pub fn is_hyponym_of(
        &mut self,
        graph: &ConceptGraph,
        candidate: &str,
        ancestor: &str,
    ) -> Result<bool> {
        Ok(self.closure(graph, ancestor)?.contains(candidate))
    }

    /// Number of cached closures
    pub fn len(&self) -> usize {
        self.closures.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }

    /// (hits, misses) since creation
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
