//! Curriculum targets and terminal-root resolution

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lexicon::{Concept, Lexicon};

/// A concept to start from, optionally with an explicit terminal root.
///
/// In configuration files a target is either a bare concept name or a
/// `{ start, terminal }` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTarget")]
pub struct CurriculumTarget {
    /// Concept training starts on
    pub start: String,
    /// Broadest concept to promote to; resolved from specificity when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Start(String),
    Pair {
        start: String,
        #[serde(default)]
        terminal: Option<String>,
    },
}

impl From<RawTarget> for CurriculumTarget {
    fn from(raw: RawTarget) -> Self {
        match raw {
            RawTarget::Start(start) => Self::new(start),
            RawTarget::Pair { start, terminal } => Self { start, terminal },
        }
    }
}

impl CurriculumTarget {
    /// Target with a terminal resolved from specificity
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            terminal: None,
        }
    }

    /// Target with an explicit terminal root
    pub fn with_terminal(start: impl Into<String>, terminal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            terminal: Some(terminal.into()),
        }
    }
}

/// A target with its promotion path fixed
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    chain: Vec<Arc<Concept>>,
}

impl ResolvedTarget {
    /// Concepts from start to terminal, each the canonical parent of the previous
    pub fn path(&self) -> &[Arc<Concept>] {
        &self.chain
    }

    /// First concept
    pub fn start(&self) -> &Arc<Concept> {
        &self.chain[0]
    }

    /// Last concept
    pub fn terminal(&self) -> &Arc<Concept> {
        &self.chain[self.chain.len() - 1]
    }
}

/// Fix the promotion path of `target`.
///
/// An explicit terminal must lie on the start's canonical chain. Otherwise the
/// terminal is the broadest chain member scoring below `terminal_specificity`;
/// when even the start scores too high it is its own terminal.
pub fn resolve_target(
    lexicon: &mut Lexicon,
    target: &CurriculumTarget,
    terminal_specificity: usize,
) -> Result<ResolvedTarget> {
    let chain = lexicon.hypernym_chain(&target.start)?;

    let end = match &target.terminal {
        Some(terminal) => {
            lexicon.lookup(terminal)?;
            chain
                .iter()
                .position(|c| c.name() == terminal)
                .ok_or_else(|| {
                    Error::ConfigError(format!(
                        "terminal {terminal} is not a canonical ancestor of {}",
                        target.start
                    ))
                })?
        }
        None => {
            let mut end = 0;
            for (i, concept) in chain.iter().enumerate() {
                if lexicon.specificity(concept.name())? < terminal_specificity {
                    end = i;
                }
            }
            end
        }
    };

    let chain: Vec<Arc<Concept>> = chain.into_iter().take(end + 1).collect();
    tracing::debug!(
        start = %target.start,
        terminal = chain[end].name(),
        steps = end,
        "curriculum target resolved"
    );
    Ok(ResolvedTarget { chain })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::fixtures::animal_graph;

    fn names(target: &ResolvedTarget) -> Vec<&str> {
        target.path().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_terminal_from_specificity() {
        let mut lexicon = Lexicon::new(animal_graph());
        // dog 9, canine 12, carnivore 26, animal 30, entity 46
        let resolved = resolve_target(&mut lexicon, &CurriculumTarget::new("dog.n.01"), 27).unwrap();
        assert_eq!(
            names(&resolved),
            ["dog.n.01", "canine.n.02", "carnivore.n.01"]
        );
        assert_eq!(resolved.terminal().name(), "carnivore.n.01");
    }

    #[test]
    fn test_whole_chain_below_threshold() {
        let mut lexicon = Lexicon::new(animal_graph());
        let resolved = resolve_target(&mut lexicon, &CurriculumTarget::new("dog.n.01"), 700).unwrap();
        assert_eq!(resolved.terminal().name(), "entity.n.01");
        assert_eq!(resolved.path().len(), 5);
    }

    #[test]
    fn test_start_above_threshold_is_its_own_terminal() {
        let mut lexicon = Lexicon::new(animal_graph());
        let resolved = resolve_target(&mut lexicon, &CurriculumTarget::new("dog.n.01"), 5).unwrap();
        assert_eq!(names(&resolved), ["dog.n.01"]);
    }

    #[test]
    fn test_explicit_terminal() {
        let mut lexicon = Lexicon::new(animal_graph());
        let target = CurriculumTarget::with_terminal("dog.n.01", "canine.n.02");
        let resolved = resolve_target(&mut lexicon, &target, 700).unwrap();
        assert_eq!(names(&resolved), ["dog.n.01", "canine.n.02"]);
    }

    #[test]
    fn test_terminal_off_canonical_chain() {
        let mut lexicon = Lexicon::new(animal_graph());
        // domestic_animal is a second parent, not the canonical one
        let target = CurriculumTarget::with_terminal("dog.n.01", "domestic_animal.n.01");
        let err = resolve_target(&mut lexicon, &target, 700).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_unknown_concepts() {
        let mut lexicon = Lexicon::new(animal_graph());
        let err = resolve_target(&mut lexicon, &CurriculumTarget::new("unicorn.n.01"), 700)
            .unwrap_err();
        assert!(matches!(err, Error::ConceptNotFound(_)));
        let target = CurriculumTarget::with_terminal("dog.n.01", "unicorn.n.01");
        let err = resolve_target(&mut lexicon, &target, 700).unwrap_err();
        assert!(matches!(err, Error::ConceptNotFound(_)));
    }

    #[test]
    fn test_targets_from_yaml() {
        let yaml = "- dog.n.01\n- start: cat.n.01\n  terminal: feline.n.01\n- start: wolf.n.01\n";
        let targets: Vec<CurriculumTarget> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(targets[0], CurriculumTarget::new("dog.n.01"));
        assert_eq!(
            targets[1],
            CurriculumTarget::with_terminal("cat.n.01", "feline.n.01")
        );
        assert_eq!(targets[2].terminal, None);
    }
}
