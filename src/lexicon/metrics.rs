//! Structural metrics over the hierarchy
//!
//! Analysis helpers used when choosing curriculum targets and inspecting a
//! lexicon: chain annotation, flatness, shared-subtree repetition and lowest
//! common ancestors of words.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::closure::ClosureCache;
use super::concept::Concept;
use super::graph::ConceptGraph;
use super::specificity::SpecificityScorer;
use crate::error::Result;

/// Flatness reported for concepts without hyponyms.
pub const LEAF_FLATNESS: f64 = 1.0;

/// Canonical hypernym chain of `name`, each concept paired with its specificity.
pub fn hypernym_chain_with_specificity(
    graph: &ConceptGraph,
    scorer: &mut SpecificityScorer,
    closures: &mut ClosureCache,
    name: &str,
) -> Result<Vec<(Arc<Concept>, usize)>> {
    graph
        .hypernym_chain(name)?
        .into_iter()
        .map(|c| {
            let score = scorer.evaluate(graph, closures, c.name())?;
            Ok((c, score))
        })
        .collect()
}

/// Share of a concept's descendants that are direct children.
///
/// `children / (children + descendants of children)`; a value near 1.0 means
/// a wide shallow subtree, near 0.0 a deep one. Leaves report
/// [`LEAF_FLATNESS`] instead of dividing by zero.
pub fn flatness(graph: &ConceptGraph, closures: &mut ClosureCache, name: &str) -> Result<f64> {
    let concept = graph.lookup(name)?;
    let children: HashSet<&str> = concept.hyponyms().iter().map(String::as_str).collect();
    let mut deeper: HashSet<String> = HashSet::new();
    for child in &children {
        deeper.extend(closures.closure(graph, child)?.iter().cloned());
    }
    let total = children.len() + deeper.len();
    if total == 0 {
        return Ok(LEAF_FLATNESS);
    }
    Ok(children.len() as f64 / total as f64)
}

/// How often each concept shows up when every top-level subtree of a root is
/// enumerated separately.
///
/// Concepts reachable through several subtrees (multiple inheritance) are
/// counted once per subtree, which exposes how much of the hierarchy is
/// shared.
#[derive(Debug, Clone)]
pub struct OccurrenceIndex {
    root: String,
    counts: HashMap<String, usize>,
    heads: HashMap<String, Vec<String>>,
}

impl OccurrenceIndex {
    /// Enumerate the subtrees directly under `root`
    pub fn build(graph: &ConceptGraph, closures: &mut ClosureCache, root: &str) -> Result<Self> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut heads: HashMap<String, Vec<String>> = HashMap::new();
        for head in graph.lookup(root)?.hyponyms() {
            *counts.entry(head.clone()).or_insert(0) += 1;
            heads.entry(head.clone()).or_default().push(root.to_string());
            for member in closures.closure(graph, head)?.iter() {
                *counts.entry(member.clone()).or_insert(0) += 1;
                heads.entry(member.clone()).or_default().push(head.clone());
            }
        }
        Ok(Self {
            root: root.to_string(),
            counts,
            heads,
        })
    }

    /// Root the index was built from
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Number of subtrees containing `name` (0 when unreachable)
    pub fn occurrence_count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Subtree heads containing `name`; the root itself when `name` is a head
    pub fn which_parents(&self, name: &str) -> &[String] {
        self.heads.get(name).map_or(&[], Vec::as_slice)
    }
}

/// Most specific concept that is a hypernym of some sense of every word.
///
/// Candidates are scored by specificity (ties broken by name). When the words
/// share no hypernym, or `words` is empty, `fallback` is returned.
pub fn lowest_common_ancestor(
    graph: &ConceptGraph,
    scorer: &mut SpecificityScorer,
    closures: &mut ClosureCache,
    words: &[&str],
    fallback: &str,
) -> Result<(usize, Arc<Concept>)> {
    let mut shared: Option<HashSet<String>> = None;
    for word in words {
        let mut hypernyms = HashSet::new();
        for sense in graph.senses(word) {
            hypernyms.extend(graph.all_hypernyms(sense.name())?);
        }
        shared = Some(match shared {
            None => hypernyms,
            Some(acc) => acc.intersection(&hypernyms).cloned().collect(),
        });
    }

    let mut best: Option<(usize, String)> = None;
    for name in shared.unwrap_or_default() {
        let score = scorer.evaluate(graph, closures, &name)?;
        let candidate = (score, name);
        if best.as_ref().is_none_or(|b| candidate < *b) {
            best = Some(candidate);
        }
    }

    match best {
        Some((score, name)) => Ok((score, Arc::clone(graph.lookup(&name)?))),
        None => {
            let root = Arc::clone(graph.lookup(fallback)?);
            let score = scorer.evaluate(graph, closures, fallback)?;
            Ok((score, root))
        }
    }
}
