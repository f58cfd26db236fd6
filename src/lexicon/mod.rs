//! Lexical concept hierarchy
//!
//! This module provides the read-only hierarchy and the caches built on it:
//! - `ConceptGraph` - concepts, lookup, chains and closures
//! - `ClosureCache` - memoized hyponym closures
//! - `SpecificityScorer` - memoized breadth score per concept
//! - `Lexicon` - the graph bundled with one instance of each cache
//! - Structural metrics (flatness, repetition, lowest common ancestor)
//!
//! # Example
//!
//! ```
//! use oddword::lexicon::{ConceptGraph, Lexicon};
//!
//! let graph = ConceptGraph::builder()
//!     .concept("animal.n.01", ["animal"], Vec::<String>::new())
//!     .concept("dog.n.01", ["dog", "domestic_dog"], ["animal.n.01"])
//!     .build()
//!     .unwrap();
//! let mut lexicon = Lexicon::new(graph);
//!
//! assert_eq!(lexicon.specificity("animal.n.01").unwrap(), 3);
//! assert_eq!(lexicon.hypernym_chain("dog.n.01").unwrap().len(), 2);
//! ```

mod closure;
mod concept;
mod graph;
mod loader;
mod metrics;
mod specificity;

#[cfg(test)]
pub(crate) mod fixtures;

use std::collections::HashSet;
use std::sync::Arc;

pub use closure::ClosureCache;
pub use concept::Concept;
pub use graph::{ConceptGraph, ConceptGraphBuilder};
pub use loader::{load_lexicon, ConceptEntry, LexiconFile, LexiconFormat};
pub use metrics::{
    flatness, hypernym_chain_with_specificity, lowest_common_ancestor, OccurrenceIndex,
    LEAF_FLATNESS,
};
pub use specificity::{normalize_lemma, subtree_tokens, SpecificityScorer};

use crate::error::Result;

/// The hierarchy together with its process-wide caches.
///
/// The graph is shared read-only; the caches grow monotonically and are
/// owned here so every consumer goes through a single instance.
#[derive(Debug)]
pub struct Lexicon {
    graph: Arc<ConceptGraph>,
    closures: ClosureCache,
    scorer: SpecificityScorer,
}

impl Lexicon {
    /// Wrap a graph with empty caches
    pub fn new(graph: impl Into<Arc<ConceptGraph>>) -> Self {
        Self {
            graph: graph.into(),
            closures: ClosureCache::new(),
            scorer: SpecificityScorer::new(),
        }
    }

    /// The underlying hierarchy
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Shared handle to the hierarchy
    pub fn graph_handle(&self) -> Arc<ConceptGraph> {
        Arc::clone(&self.graph)
    }

    /// Resolve a concept by name
    pub fn lookup(&self, name: &str) -> Result<Arc<Concept>> {
        self.graph.lookup(name).map(Arc::clone)
    }

    /// Canonical hypernym chain of `name`
    pub fn hypernym_chain(&self, name: &str) -> Result<Vec<Arc<Concept>>> {
        self.graph.hypernym_chain(name)
    }

    /// Canonical parent of `name`, if any
    pub fn canonical_parent(&self, name: &str) -> Result<Option<Arc<Concept>>> {
        Ok(self.graph.canonical_parent(name)?.map(Arc::clone))
    }

    /// Direct hyponyms of `name`
    pub fn direct_children(&self, name: &str) -> Result<Vec<Arc<Concept>>> {
        self.graph.direct_children(name)
    }

    /// Memoized hyponym closure of `name`
    pub fn closure(&mut self, name: &str) -> Result<Arc<HashSet<String>>> {
        self.closures.closure(&self.graph, name)
    }

    /// Memoized specificity of `name`
    pub fn specificity(&mut self, name: &str) -> Result<usize> {
        self.scorer.evaluate(&self.graph, &mut self.closures, name)
    }

    /// Distinct normalized tokens under `name`
    pub fn subtree_tokens(&mut self, name: &str) -> Result<HashSet<String>> {
        subtree_tokens(&self.graph, &mut self.closures, name)
    }

    /// Canonical chain annotated with specificity
    pub fn chain_with_specificity(&mut self, name: &str) -> Result<Vec<(Arc<Concept>, usize)>> {
        hypernym_chain_with_specificity(&self.graph, &mut self.scorer, &mut self.closures, name)
    }

    /// Flatness of `name`
    pub fn flatness(&mut self, name: &str) -> Result<f64> {
        flatness(&self.graph, &mut self.closures, name)
    }

    /// Repetition index over the subtrees directly under `root`
    pub fn occurrence_index(&mut self, root: &str) -> Result<OccurrenceIndex> {
        OccurrenceIndex::build(&self.graph, &mut self.closures, root)
    }

    /// Most specific shared hypernym of some sense of every word
    pub fn lowest_common_ancestor(
        &mut self,
        words: &[&str],
        fallback: &str,
    ) -> Result<(usize, Arc<Concept>)> {
        lowest_common_ancestor(
            &self.graph,
            &mut self.scorer,
            &mut self.closures,
            words,
            fallback,
        )
    }

    /// Closure cache (hits, misses)
    pub fn cache_stats(&self) -> (usize, usize) {
        self.closures.stats()
    }
}
