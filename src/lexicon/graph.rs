//! Read-only concept hierarchy
//!
//! Hyponym links are derived from the hypernym links given to the builder,
//! so the two directions can never disagree. The graph is validated on
//! build: unknown parents, duplicate names and cycles are rejected.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use super::concept::Concept;
use super::specificity::normalize_lemma;
use crate::error::{Error, Result};

/// Builder collecting concepts before validation.
#[derive(Debug, Default)]
pub struct ConceptGraphBuilder {
    entries: Vec<(String, Vec<String>, Vec<String>)>,
}

impl ConceptGraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concept with its lemmas and ordered hypernyms
    pub fn concept<L, H>(mut self, name: impl Into<String>, lemmas: L, hypernyms: H) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        self.push(name, lemmas, hypernyms);
        self
    }

    /// Non-consuming form of [`ConceptGraphBuilder::concept`]
    pub fn push<L, H>(&mut self, name: impl Into<String>, lemmas: L, hypernyms: H)
    where
        L: IntoIterator,
        L::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        self.entries.push((
            name.into(),
            lemmas.into_iter().map(Into::into).collect(),
            hypernyms.into_iter().map(Into::into).collect(),
        ));
    }

    /// Validate and freeze the hierarchy
    pub fn build(self) -> Result<ConceptGraph> {
        let mut order = Vec::with_capacity(self.entries.len());
        let mut seen = HashSet::with_capacity(self.entries.len());
        for (name, _, _) in &self.entries {
            if name.trim().is_empty() {
                return Err(Error::Lexicon("concept with empty name".to_string()));
            }
            if !seen.insert(name.clone()) {
                return Err(Error::Lexicon(format!("duplicate concept '{name}'")));
            }
            order.push(name.clone());
        }

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        let mut lemmas: HashMap<String, Vec<String>> = HashMap::new();
        for (name, concept_lemmas, hypernyms) in self.entries {
            let mut unique = Vec::with_capacity(hypernyms.len());
            for parent in hypernyms {
                if !seen.contains(&parent) {
                    return Err(Error::Lexicon(format!(
                        "concept '{name}' names unknown hypernym '{parent}'"
                    )));
                }
                if parent == name {
                    return Err(Error::Lexicon(format!("concept '{name}' is its own hypernym")));
                }
                if !unique.contains(&parent) {
                    unique.push(parent);
                }
            }
            for parent in &unique {
                children.entry(parent.clone()).or_default().push(name.clone());
            }
            parents.insert(name.clone(), unique);
            lemmas.insert(name, concept_lemmas);
        }

        check_acyclic(&order, &children)?;

        let mut concepts = HashMap::with_capacity(order.len());
        let mut lemma_index: HashMap<String, Vec<String>> = HashMap::new();
        for name in &order {
            let concept_lemmas = lemmas.remove(name).unwrap_or_default();
            for lemma in &concept_lemmas {
                let senses = lemma_index.entry(normalize_lemma(lemma)).or_default();
                if !senses.contains(name) {
                    senses.push(name.clone());
                }
            }
            let concept = Concept::new(
                name.clone(),
                concept_lemmas,
                parents.remove(name).unwrap_or_default(),
                children.remove(name).unwrap_or_default(),
            );
            concepts.insert(name.clone(), Arc::new(concept));
        }

        Ok(ConceptGraph {
            concepts,
            order,
            lemma_index,
        })
    }
}

/// Kahn's algorithm over child edges; any concept left unprocessed sits on a cycle.
fn check_acyclic(order: &[String], children: &HashMap<String, Vec<String>>) -> Result<()> {
    let mut in_degree: HashMap<&str, usize> = order.iter().map(|n| (n.as_str(), 0)).collect();
    for kids in children.values() {
        for kid in kids {
            if let Some(d) = in_degree.get_mut(kid.as_str()) {
                *d += 1;
            }
        }
    }

    let mut queue: VecDeque<&str> = order
        .iter()
        .map(String::as_str)
        .filter(|n| in_degree.get(n) == Some(&0))
        .collect();
    let mut processed = 0usize;
    while let Some(name) = queue.pop_front() {
        processed += 1;
        for kid in children.get(name).into_iter().flatten() {
            if let Some(d) = in_degree.get_mut(kid.as_str()) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(kid.as_str());
                }
            }
        }
    }

    if processed == order.len() {
        Ok(())
    } else {
        let stuck = order
            .iter()
            .find(|n| in_degree.get(n.as_str()).is_some_and(|&d| d > 0))
            .map_or("?", String::as_str);
        Err(Error::Lexicon(format!("hypernym cycle through '{stuck}'")))
    }
}

/// Immutable lexical hierarchy shared read-only by every component.
#[derive(Debug, Clone)]
pub struct ConceptGraph {
    concepts: HashMap<String, Arc<Concept>>,
    order: Vec<String>,
    lemma_index: HashMap<String, Vec<String>>,
}

impl ConceptGraph {
    /// Start building a graph
    pub fn builder() -> ConceptGraphBuilder {
        ConceptGraphBuilder::new()
    }

    /// Number of concepts
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph holds no concepts
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a concept with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.concepts.contains_key(name)
    }

    /// Concepts in load order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Concept>> {
        self.order.iter().filter_map(|n| self.concepts.get(n))
    }

    /// Concepts without hypernyms
    pub fn roots(&self) -> impl Iterator<Item = &Arc<Concept>> {
        self.iter().filter(|c| c.is_root())
    }

    /// Resolve a concept by name
    pub fn lookup(&self, name: &str) -> Result<&Arc<Concept>> {
        self.concepts
            .get(name)
            .ok_or_else(|| Error::ConceptNotFound(name.to_string()))
    }

    /// All senses lexicalized by a word (matched after normalization)
    pub fn senses(&self, word: &str) -> Vec<&Arc<Concept>> {
        self.lemma_index
            .get(&normalize_lemma(word))
            .into_iter()
            .flatten()
            .filter_map(|n| self.concepts.get(n))
            .collect()
    }

    /// The canonical (first) parent of a concept
    pub fn canonical_parent(&self, name: &str) -> Result<Option<&Arc<Concept>>> {
        let concept = self.lookup(name)?;
        concept.canonical_parent().map(|p| self.lookup(p)).transpose()
    }

    /// Chain from `name` upward through canonical parents, starting with the
    /// concept itself and ending at a parentless concept.
    pub fn hypernym_chain(&self, name: &str) -> Result<Vec<Arc<Concept>>> {
        let mut current = self.lookup(name)?;
        let mut visited = HashSet::new();
        visited.insert(current.name());
        let mut chain = vec![Arc::clone(current)];
        while let Some(parent) = current.canonical_parent() {
            let next = self.lookup(parent)?;
            // Build rejects cycles; the guard keeps the walk finite regardless.
            if !visited.insert(next.name()) {
                return Err(Error::Lexicon(format!("hypernym cycle through '{parent}'")));
            }
            chain.push(Arc::clone(next));
            current = next;
        }
        Ok(chain)
    }

    /// Direct hyponyms of a concept
    pub fn direct_children(&self, name: &str) -> Result<Vec<Arc<Concept>>> {
        self.lookup(name)?
            .hyponyms()
            .iter()
            .map(|c| self.lookup(c).map(Arc::clone))
            .collect()
    }

    /// Every concept reachable through child links, excluding `name` itself.
    ///
    /// Uncached; see [`super::ClosureCache`] for the memoized form.
    pub fn hyponym_closure(&self, name: &str) -> Result<HashSet<String>> {
        let root = self.lookup(name)?;
        let mut visited = HashSet::new();
        let mut worklist: Vec<&str> = root.hyponyms().iter().map(String::as_str).collect();
        while let Some(next) = worklist.pop() {
            if !visited.insert(next.to_string()) {
                continue;
            }
            worklist.extend(self.lookup(next)?.hyponyms().iter().map(String::as_str));
        }
        Ok(visited)
    }

    /// Every concept reachable through any parent link, excluding `name` itself.
    pub fn all_hypernyms(&self, name: &str) -> Result<HashSet<String>> {
        let start = self.lookup(name)?;
        let mut visited = HashSet::new();
        let mut worklist: Vec<&str> = start.hypernyms().iter().map(String::as_str).collect();
        while let Some(next) = worklist.pop() {
            if !visited.insert(next.to_string()) {
                continue;
            }
            worklist.extend(self.lookup(next)?.hypernyms().iter().map(String::as_str));
        }
        Ok(visited)
    }
}
