//! Lexicon file loading
//!
//! A lexicon file lists concepts with their lemmas and ordered hypernyms:
//!
//! ```yaml
//! concepts:
//!   - name: dog.n.01
//!     lemmas: [dog, domestic_dog, Canis_familiaris]
//!     hypernyms: [canine.n.02, domestic_animal.n.01]
//! ```
//!
//! JSON and YAML are supported; the format is chosen by file extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::graph::ConceptGraph;
use crate::error::{Error, Result};

/// Serialized form of a lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Concepts in load order
    pub concepts: Vec<ConceptEntry>,
}

/// One concept as written in a lexicon file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Unique concept name
    pub name: String,

    /// Surface forms
    #[serde(default)]
    pub lemmas: Vec<String>,

    /// Parent concept names, canonical parent first
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

/// Lexicon serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    Json,
    Yaml,
}

impl LexiconFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl LexiconFile {
    /// Parse lexicon text in the given format
    pub fn parse(content: &str, format: LexiconFormat) -> Result<Self> {
        match format {
            LexiconFormat::Json => serde_json::from_str(content)
                .map_err(|e| Error::Serialization(format!("Failed to parse JSON lexicon: {e}"))),
            LexiconFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Error::Serialization(format!("Failed to parse YAML lexicon: {e}"))),
        }
    }

    /// Validate and build the graph
    pub fn into_graph(self) -> Result<ConceptGraph> {
        let mut builder = ConceptGraph::builder();
        for entry in self.concepts {
            builder.push(entry.name, entry.lemmas, entry.hypernyms);
        }
        builder.build()
    }
}

/// Load and validate a lexicon file
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<ConceptGraph> {
    let path = path.as_ref();
    let format = LexiconFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read lexicon {}: {e}", path.display()))
    })?;
    let graph = LexiconFile::parse(&content, format)?.into_graph()?;
    tracing::debug!(path = %path.display(), concepts = graph.len(), "lexicon loaded");
    Ok(graph)
}
