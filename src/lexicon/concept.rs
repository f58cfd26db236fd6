//! Concept node of the lexical hierarchy

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single word sense (synset) in the hierarchy.
///
/// Identity is the unique `name` (e.g. `dog.n.01`): equality and hashing only
/// look at the name, so puzzles and sets of concepts dedupe by identity.
/// Parent and child links are ordered; the first hypernym is the canonical
/// parent used for chain walking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    name: String,
    lemmas: Vec<String>,
    hypernyms: Vec<String>,
    hyponyms: Vec<String>,
}

impl Concept {
    pub(crate) fn new(
        name: String,
        lemmas: Vec<String>,
        hypernyms: Vec<String>,
        hyponyms: Vec<String>,
    ) -> Self {
        Self {
            name,
            lemmas,
            hypernyms,
            hyponyms,
        }
    }

    /// Unique concept name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surface forms this concept lexicalizes, as written in the source data
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Parent concept names in canonical order
    pub fn hypernyms(&self) -> &[String] {
        &self.hypernyms
    }

    /// Child concept names in insertion order
    pub fn hyponyms(&self) -> &[String] {
        &self.hyponyms
    }

    /// The first hypernym, if any
    pub fn canonical_parent(&self) -> Option<&str> {
        self.hypernyms.first().map(String::as_str)
    }

    /// Whether this concept has no parent
    pub fn is_root(&self) -> bool {
        self.hypernyms.is_empty()
    }

    /// Whether this concept has no children
    pub fn is_leaf(&self) -> bool {
        self.hyponyms.is_empty()
    }

    /// Human-facing label: the name without its `.pos.NN` sense suffix.
    ///
    /// `dog.n.01` becomes `dog`; names without a sense suffix are returned
    /// unchanged.
    pub fn display_name(&self) -> &str {
        let mut parts = self.name.rsplitn(3, '.');
        let sense = parts.next();
        let pos = parts.next();
        match (sense, pos, parts.next()) {
            (Some(sense), Some(pos), Some(head))
                if !head.is_empty()
                    && pos.len() == 1
                    && !sense.is_empty()
                    && sense.chars().all(|c| c.is_ascii_digit()) =>
            {
                head
            }
            _ => &self.name,
        }
    }
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Concept {}

impl Hash for Concept {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
