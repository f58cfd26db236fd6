//! Specificity scoring
//!
//! Specificity of a concept is the number of distinct normalized surface
//! tokens lexicalized by the concept and everything below it. Small scores
//! mean concrete concepts (`poodle`), large scores broad ones (`entity`).

use std::collections::{HashMap, HashSet};

use super::closure::ClosureCache;
use super::graph::ConceptGraph;
use crate::error::Result;

/// Normalize a surface token so superficial variants are counted once.
///
/// Every underscore and hyphen becomes a single space, then the token is
/// lowercased: `Fire_Engine` and `fire-engine` both become `fire engine`.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Distinct normalized tokens of `name` and its whole hyponym closure.
pub fn subtree_tokens(
    graph: &ConceptGraph,
    closures: &mut ClosureCache,
    name: &str,
) -> Result<HashSet<String>> {
    let concept = graph.lookup(name)?;
    let mut tokens: HashSet<String> = concept.lemmas().iter().map(|l| normalize_lemma(l)).collect();
    for hyponym in closures.closure(graph, name)?.iter() {
        tokens.extend(graph.lookup(hyponym)?.lemmas().iter().map(|l| normalize_lemma(l)));
    }
    Ok(tokens)
}

/// Memoizing specificity scorer.
///
/// One instance per process is enough: scores are keyed by concept name and
/// never invalidated, so sharing across roots is pure reuse. The first call
/// for a concept costs O(closure size); later calls are O(1).
#[derive(Debug, Default)]
pub struct SpecificityScorer {
    cache: HashMap<String, usize>,
}

impl SpecificityScorer {
    /// Create a scorer with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Specificity of `name`
    pub fn evaluate(
        &mut self,
        graph: &ConceptGraph,
        closures: &mut ClosureCache,
        name: &str,
    ) -> Result<usize> {
        if let Some(&score) = self.cache.get(name) {
            return Ok(score);
        }
        let score = subtree_tokens(graph, closures, name)?.len();
        self.cache.insert(name.to_string(), score);
        Ok(score)
    }

    /// Cached score without computing it
    pub fn cached(&self, name: &str) -> Option<usize> {
        self.cache.get(name).copied()
    }

    /// Number of memoized scores
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been scored yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_underscore_and_hyphen() {
        assert_eq!(normalize_lemma("Fire_Engine"), "fire engine");
        assert_eq!(normalize_lemma("fire-engine"), "fire engine");
        assert_eq!(normalize_lemma("Fire_Engine"), normalize_lemma("fire-engine"));
    }

    #[test]
    fn test_normalize_each_separator_is_one_space() {
        assert_eq!(normalize_lemma("jack-in-the-box"), "jack in the box");
        assert_eq!(normalize_lemma("a__b"), "a  b");
        assert_eq!(normalize_lemma("plain"), "plain");
    }
}
