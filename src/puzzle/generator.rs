//! Odd-one-out puzzle sampling
//!
//! A puzzle is drawn in three steps from the closure of the active root:
//! 1. a candidate ancestor `c`, uniformly
//! 2. four distinct concepts from `closure(c)` inside the specificity band
//! 3. an odd concept from the root closure that is neither `c` nor in
//!    `closure(c)`, by rejection sampling
//!
//! Each root keeps a table of the concepts that can serve as `c`: enough
//! in-band descendants for the siblings and room left over for an odd
//! concept. Drawing `c` from the table is the same distribution as drawing
//! from the whole closure and rejecting unusable candidates.
//!
//! Step 3 can still fail for a given `c`; it is retried under explicit caps
//! so sampling always terminates, reporting `InsufficientClosure` when the
//! budget runs out. Batches drop failed draws and keep going.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::types::{Puzzle, PuzzleSet, PUZZLE_SIZE};
use super::vocab::Vocabulary;
use crate::error::{Error, Result};
use crate::lexicon::{Concept, Lexicon};

const SIBLINGS: usize = PUZZLE_SIZE - 1;

/// Inclusive specificity range for puzzle siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificityBand {
    /// Lowest accepted specificity
    pub min: usize,
    /// Highest accepted specificity
    pub max: usize,
}

impl SpecificityBand {
    /// Create a band; bounds are swapped if given in the wrong order
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Whether a score falls inside the band
    pub fn contains(&self, score: usize) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

impl Default for SpecificityBand {
    fn default() -> Self {
        Self { min: 1, max: 20 }
    }
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Sibling specificity band
    #[serde(default)]
    pub band: SpecificityBand,

    /// Candidate ancestors tried per puzzle before giving up
    #[serde(default = "default_candidate_attempts")]
    pub max_candidate_attempts: usize,

    /// Odd-concept draws per candidate before trying another candidate
    #[serde(default = "default_odd_attempts")]
    pub max_odd_attempts: usize,

    /// Failed draws a batch tolerates before giving up
    #[serde(default = "default_failed_draws")]
    pub max_failed_draws: usize,
}

fn default_candidate_attempts() -> usize {
    1000
}

fn default_odd_attempts() -> usize {
    200
}

fn default_failed_draws() -> usize {
    1000
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            band: SpecificityBand::default(),
            max_candidate_attempts: default_candidate_attempts(),
            max_odd_attempts: default_odd_attempts(),
            max_failed_draws: default_failed_draws(),
        }
    }
}

/// A closure member that can serve as the shared ancestor
#[derive(Debug)]
struct Candidate {
    ancestor: Arc<Concept>,
    under: Arc<HashSet<String>>,
    /// closure(ancestor), sorted by name
    descendants: Vec<Arc<Concept>>,
    /// descendants inside the active band
    siblings: Vec<Arc<Concept>>,
}

/// Puzzle generator bound to one active root at a time.
///
/// Owns the process lexicon (graph plus caches) so closures and scores
/// computed for one root are reused after [`PuzzleGenerator::reset_root`].
#[derive(Debug)]
pub struct PuzzleGenerator {
    lexicon: Lexicon,
    config: SamplerConfig,
    rng: StdRng,
    root: Arc<Concept>,
    members: Vec<Arc<Concept>>,
    specificities: HashMap<String, usize>,
    candidates: Vec<Candidate>,
    viable: Vec<usize>,
}

impl PuzzleGenerator {
    /// Create a generator rooted at `root`
    pub fn new(lexicon: Lexicon, root: &str, config: SamplerConfig, rng: StdRng) -> Result<Self> {
        let root_concept = lexicon.lookup(root)?;
        let mut generator = Self {
            lexicon,
            config,
            rng,
            root: root_concept,
            members: Vec::new(),
            specificities: HashMap::new(),
            candidates: Vec::new(),
            viable: Vec::new(),
        };
        generator.reset_root(root)?;
        Ok(generator)
    }

    /// Create a generator with a deterministic RNG
    pub fn seeded(lexicon: Lexicon, root: &str, config: SamplerConfig, seed: u64) -> Result<Self> {
        Self::new(lexicon, root, config, StdRng::seed_from_u64(seed))
    }

    /// Switch the active root, rebuilding the closure and specificity table
    pub fn reset_root(&mut self, root: &str) -> Result<()> {
        let root_concept = self.lexicon.lookup(root)?;
        let closure = self.lexicon.closure(root)?;

        let mut members = Vec::with_capacity(closure.len());
        let mut specificities = HashMap::with_capacity(closure.len());
        for name in closure.iter() {
            let score = self.lexicon.specificity(name)?;
            specificities.insert(name.clone(), score);
            members.push(self.lexicon.lookup(name)?);
        }
        // Sorted so seeded runs are reproducible regardless of hash order.
        members.sort_by(|a, b| a.name().cmp(b.name()));

        let mut candidates = Vec::new();
        for member in &members {
            let under = self.lexicon.closure(member.name())?;
            // Odd concept must come from outside closure(c) ∪ {c}.
            if under.len() < SIBLINGS || under.len() + 1 >= members.len() {
                continue;
            }
            let mut names: Vec<&String> = under.iter().collect();
            names.sort();
            let descendants = names
                .into_iter()
                .map(|name| self.lexicon.lookup(name))
                .collect::<Result<Vec<_>>>()?;
            candidates.push(Candidate {
                ancestor: Arc::clone(member),
                under,
                descendants,
                siblings: Vec::new(),
            });
        }

        self.root = root_concept;
        self.members = members;
        self.specificities = specificities;
        self.candidates = candidates;
        self.apply_band();

        tracing::debug!(
            root = self.root.name(),
            closure = self.members.len(),
            candidates = self.viable.len(),
            "puzzle root reset"
        );
        Ok(())
    }

    /// Refilter every candidate's siblings against the current band
    fn apply_band(&mut self) {
        let band = self.config.band;
        let specificities = &self.specificities;
        self.viable.clear();
        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            candidate.siblings = candidate
                .descendants
                .iter()
                .filter(|c| specificities.get(c.name()).is_some_and(|&s| band.contains(s)))
                .cloned()
                .collect();
            if candidate.siblings.len() >= SIBLINGS {
                self.viable.push(index);
            }
        }
    }

    /// Fail fast when no draw under the active root can ever succeed
    fn check_capacity(&self) -> Result<()> {
        if self.members.len() < PUZZLE_SIZE {
            return Err(Error::insufficient(
                self.root.name(),
                format!(
                    "closure has {} concepts, need at least {PUZZLE_SIZE}",
                    self.members.len()
                ),
            ));
        }
        if self.viable.is_empty() {
            let band = self.config.band;
            return Err(Error::insufficient(
                self.root.name(),
                format!(
                    "no concept has {SIBLINGS} descendants in band {}..={} and room for an odd concept",
                    band.min, band.max
                ),
            ));
        }
        Ok(())
    }

    /// Active root
    pub fn root(&self) -> &Arc<Concept> {
        &self.root
    }

    /// Root closure, sorted by name
    pub fn members(&self) -> &[Arc<Concept>] {
        &self.members
    }

    /// Cached specificity of a closure member
    pub fn member_specificity(&self, name: &str) -> Option<usize> {
        self.specificities.get(name).copied()
    }

    /// Sampling parameters
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Replace the sampling parameters (e.g. to widen the band)
    pub fn set_config(&mut self, config: SamplerConfig) {
        self.config = config;
        self.apply_band();
    }

    /// Closure members that can currently host a puzzle, sorted by name
    pub fn candidate_ancestors(&self) -> impl Iterator<Item = &Arc<Concept>> {
        self.viable.iter().map(|&i| &self.candidates[i].ancestor)
    }

    /// The lexicon and its caches
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mutable access to the lexicon caches
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// The generator's RNG, for callers that shuffle presentations
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Vocabulary over the root and its closure
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_concepts(
            std::iter::once(&*self.root).chain(self.members.iter().map(|c| &**c)),
        )
    }

    /// Draw one puzzle
    pub fn sample_puzzle(&mut self) -> Result<Puzzle> {
        self.check_capacity()?;

        for _ in 0..self.config.max_candidate_attempts {
            let Some(&index) = self.viable.choose(&mut self.rng) else {
                break;
            };
            let candidate = &self.candidates[index];
            let picks: Vec<Arc<Concept>> = candidate
                .siblings
                .choose_multiple(&mut self.rng, SIBLINGS)
                .cloned()
                .collect();
            let Ok(siblings) = <[Arc<Concept>; SIBLINGS]>::try_from(picks) else {
                continue;
            };

            for _ in 0..self.config.max_odd_attempts {
                let Some(odd) = self.members.choose(&mut self.rng) else {
                    break;
                };
                if odd.name() != candidate.ancestor.name() && !candidate.under.contains(odd.name()) {
                    return Ok(Puzzle::new(
                        siblings,
                        Arc::clone(odd),
                        Arc::clone(&candidate.ancestor),
                    ));
                }
            }
        }

        let band = self.config.band;
        Err(Error::insufficient(
            self.root.name(),
            format!(
                "no puzzle after {} candidate draws (band {}..={})",
                self.config.max_candidate_attempts, band.min, band.max
            ),
        ))
    }

    /// Draw `n` puzzles; duplicates are possible.
    ///
    /// Failed draws are dropped and replaced. The batch fails once more than
    /// `max_failed_draws` draws have failed.
    pub fn batch_generate(&mut self, n: usize) -> Result<Vec<Puzzle>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        self.check_capacity()?;

        let mut puzzles = Vec::with_capacity(n);
        let mut failed = 0;
        while puzzles.len() < n {
            match self.sample_puzzle() {
                Ok(puzzle) => puzzles.push(puzzle),
                Err(e) if e.is_recoverable() && failed < self.config.max_failed_draws => {
                    failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
        if failed > 0 {
            tracing::debug!(root = self.root.name(), failed, kept = n, "dropped failed draws");
        }
        Ok(puzzles)
    }

    /// Draw `n` puzzles and collapse duplicates into a set
    pub fn generate_set(&mut self, n: usize, vocab: Arc<Vocabulary>) -> Result<PuzzleSet> {
        Ok(PuzzleSet::new(self.batch_generate(n)?, vocab))
    }
}
