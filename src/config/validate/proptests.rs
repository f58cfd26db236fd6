//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::puzzle::{SamplerConfig, SpecificityBand};
use crate::train::{CurriculumConfig, CurriculumTarget};
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_valid_spec() -> impl Strategy<Value = CurriculumSpec> {
    (
        1usize..5000,  // epochs
        1usize..256,   // batch_size
        1usize..100,   // evaluate_every
        0.0f32..0.99,  // success_threshold
        1e-4f32..1.0,  // learning_rate
        (0usize..50, 0usize..50),
    )
        .prop_map(|(epochs, batch_size, evaluate_every, threshold, lr, (a, b))| {
            CurriculumSpec {
                lexicon: PathBuf::from("lexicon.yaml"),
                targets: vec![CurriculumTarget::new("dog.n.01")],
                training: CurriculumConfig {
                    epochs,
                    batch_size,
                    evaluate_every,
                    success_threshold: threshold,
                    ..Default::default()
                },
                sampler: SamplerConfig {
                    band: SpecificityBand::new(a, b),
                    ..Default::default()
                },
                model: ModelSpec {
                    learning_rate: lr,
                    ..Default::default()
                },
                output: OutputSpec::default(),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_zero_epochs_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.training.epochs = 0;
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidEpochs(0))
        ));
    }

    #[test]
    fn prop_threshold_at_or_above_one_fails(spec in arb_valid_spec(), t in 1.0f32..10.0) {
        let mut spec = spec;
        spec.training.success_threshold = t;
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidSuccessThreshold(_))
        ));
    }
}
