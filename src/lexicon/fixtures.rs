//! Small hand-built hierarchy shared by unit tests
//!
//! Specificities (distinct normalized tokens under each concept):
//!
//! | concept            | score |
//! |--------------------|-------|
//! | entity.n.01        | 46    |
//! | animal.n.01        | 30    |
//! | carnivore.n.01     | 26    |
//! | domestic_animal.n.01 | 20  |
//! | beverage.n.01      | 15    |
//! | feline.n.01        | 13    |
//! | canine.n.02        | 12    |
//! | alcohol.n.01       | 11    |
//! | dog.n.01, cat.n.01 | 9     |
//!
//! `dog.n.01` and `cat.n.01` have two parents (`domestic_animal.n.01` second),
//! so the hierarchy contains shared sub-DAGs.

use std::path::{Path, PathBuf};

use super::{ConceptEntry, ConceptGraph, LexiconFile};

const NONE: [&str; 0] = [];

pub(crate) fn animal_graph() -> ConceptGraph {
    ConceptGraph::builder()
        .concept("entity.n.01", ["entity"], NONE)
        .concept("animal.n.01", ["animal", "beast"], ["entity.n.01"])
        .concept("carnivore.n.01", ["carnivore"], ["animal.n.01"])
        .concept(
            "domestic_animal.n.01",
            ["domestic_animal", "domesticated_animal"],
            ["animal.n.01"],
        )
        .concept("canine.n.02", ["canine", "canid"], ["carnivore.n.01"])
        .concept(
            "dog.n.01",
            ["dog", "domestic_dog", "Domestic-Dog"],
            ["canine.n.02", "domestic_animal.n.01"],
        )
        .concept("poodle.n.01", ["poodle"], ["dog.n.01"])
        .concept("beagle.n.01", ["beagle"], ["dog.n.01"])
        .concept("terrier.n.01", ["terrier", "Terrier"], ["dog.n.01"])
        .concept("corgi.n.01", ["corgi", "Welsh_corgi"], ["dog.n.01"])
        .concept("dalmatian.n.01", ["dalmatian", "coach_dog"], ["dog.n.01"])
        .concept("wolf.n.01", ["wolf"], ["canine.n.02"])
        .concept("feline.n.01", ["feline", "felid"], ["carnivore.n.01"])
        .concept(
            "cat.n.01",
            ["cat", "true_cat"],
            ["feline.n.01", "domestic_animal.n.01"],
        )
        .concept("siamese.n.01", ["Siamese_cat", "siamese"], ["cat.n.01"])
        .concept("persian.n.01", ["Persian_cat"], ["cat.n.01"])
        .concept("manx.n.01", ["Manx", "Manx_cat"], ["cat.n.01"])
        .concept("tabby.n.01", ["tabby", "tabby_cat"], ["cat.n.01"])
        .concept("lion.n.01", ["lion", "king_of_beasts"], ["feline.n.01"])
        .concept("beverage.n.01", ["beverage", "drink"], ["entity.n.01"])
        .concept("alcohol.n.01", ["alcohol", "alcoholic_drink"], ["beverage.n.01"])
        .concept("beer.n.01", ["beer"], ["alcohol.n.01"])
        .concept("wine.n.01", ["wine", "vino"], ["alcohol.n.01"])
        .concept("whiskey.n.01", ["whiskey", "whisky"], ["alcohol.n.01"])
        .concept("gin.n.01", ["gin"], ["alcohol.n.01"])
        .concept("sake.n.01", ["sake", "saki", "rice_beer"], ["alcohol.n.01"])
        .concept("juice.n.01", ["juice"], ["beverage.n.01"])
        .concept("orange_juice.n.01", ["orange_juice"], ["juice.n.01"])
        .build()
        .expect("fixture hierarchy is valid")
}

/// A chain too shallow to host any puzzle.
pub(crate) fn shallow_graph() -> ConceptGraph {
    ConceptGraph::builder()
        .concept("thing.n.01", ["thing"], NONE)
        .concept("widget.n.01", ["widget"], ["thing.n.01"])
        .concept("gadget.n.01", ["gadget"], ["thing.n.01"])
        .concept("gizmo.n.01", ["gizmo"], ["gadget.n.01"])
        .build()
        .expect("fixture hierarchy is valid")
}

/// Write `graph` as a YAML lexicon file under `dir`
pub(crate) fn write_lexicon(graph: &ConceptGraph, dir: &Path) -> PathBuf {
    let file = LexiconFile {
        concepts: graph
            .iter()
            .map(|c| ConceptEntry {
                name: c.name().to_string(),
                lemmas: c.lemmas().to_vec(),
                hypernyms: c.hypernyms().to_vec(),
            })
            .collect(),
    };
    let path = dir.join("lexicon.yaml");
    std::fs::write(&path, serde_yaml::to_string(&file).expect("lexicon serializes"))
        .expect("lexicon written");
    path
}
