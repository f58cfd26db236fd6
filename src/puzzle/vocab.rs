//! Token vocabulary for puzzle encoding

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::types::Puzzle;
use crate::lexicon::{normalize_lemma, Concept};

/// Tokens a concept contributes to the vocabulary.
///
/// Normalized lemmas, deduplicated; a concept without lemmas falls back to
/// its name so it still gets a non-empty encoding.
pub fn concept_tokens(concept: &Concept) -> Vec<String> {
    let tokens: BTreeSet<String> = concept.lemmas().iter().map(|l| normalize_lemma(l)).collect();
    if tokens.is_empty() {
        vec![concept.name().to_string()]
    } else {
        tokens.into_iter().collect()
    }
}

/// Stable token → index mapping.
///
/// Indices follow lexicographic token order, so the mapping depends only on
/// the token set and never on the order concepts were seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    tokens: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from an arbitrary token collection
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
        let tokens: Vec<String> = sorted.into_iter().collect();
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { tokens, index }
    }

    /// Build from the tokens of a set of concepts
    pub fn from_concepts<'a>(concepts: impl IntoIterator<Item = &'a Concept>) -> Self {
        Self::from_tokens(concepts.into_iter().flat_map(concept_tokens))
    }

    /// Build from every concept appearing in a batch of puzzles
    pub fn from_puzzles<'a>(puzzles: impl IntoIterator<Item = &'a Puzzle>) -> Self {
        Self::from_concepts(
            puzzles
                .into_iter()
                .flat_map(|p| p.slots().iter().map(|c| &**c)),
        )
    }

    /// Restore the lookup table after deserialization
    pub fn reindex(&mut self) {
        self.index = self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of a token
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Tokens in index order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token at an index
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Whether a token is known
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Indices of a concept's tokens (unknown tokens are skipped)
    pub fn concept_indices(&self, concept: &Concept) -> Vec<usize> {
        concept_tokens(concept)
            .iter()
            .filter_map(|t| self.index_of(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::fixtures::animal_graph;

    #[test]
    fn test_indices_are_order_independent() {
        let a = Vocabulary::from_tokens(["wolf", "dog", "cat"]);
        let b = Vocabulary::from_tokens(["cat", "wolf", "dog", "dog"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.index_of("cat"), Some(0));
        assert_eq!(a.token(2), Some("wolf"));
        assert_eq!(a.index_of("lion"), None);
    }

    #[test]
    fn test_concept_tokens_are_normalized() {
        let graph = animal_graph();
        let dog = graph.lookup("dog.n.01").unwrap();
        assert_eq!(concept_tokens(dog), ["dog", "domestic dog"]);
    }

    #[test]
    fn test_from_concepts() {
        let graph = animal_graph();
        let vocab = Vocabulary::from_concepts(graph.iter().map(|c| &**c));
        assert!(vocab.contains("welsh corgi"));
        assert!(!vocab.contains("fire engine"));
        let corgi = graph.lookup("corgi.n.01").unwrap();
        assert_eq!(vocab.concept_indices(corgi).len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_needs_reindex() {
        let vocab = Vocabulary::from_tokens(["a", "b"]);
        let json = serde_json::to_string(&vocab).unwrap();
        let mut restored: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.index_of("b"), None);
        restored.reindex();
        assert_eq!(restored, vocab);
    }
}
