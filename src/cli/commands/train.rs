//! Train command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, build_controller, load_config, run_curriculum, validate_config, TrainArgs,
};
use crate::train::{CurriculumReport, ProgressCallback};

/// One-line summary of a finished run
pub fn format_report<S>(report: &CurriculumReport<S>) -> String {
    let mut line = format!(
        "Curriculum complete: {} mastered, {} abandoned",
        report.successes().count(),
        report.failures().count()
    );
    if report.stopped_early {
        line.push_str(" (stopped early)");
    }
    line
}

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Oddword: Training from {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Invalid override: {e}"))?;

    if args.dry_run {
        log(
            level,
            LogLevel::Normal,
            "Dry run - config validated successfully",
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Lexicon: {}", spec.lexicon.display()),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Targets: {}", spec.targets.len()),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Epochs per target: {}", spec.training.epochs),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("  Output dir: {}", spec.output.dir.display()),
        );
        return Ok(());
    }

    let mut controller = build_controller(&spec).map_err(|e| format!("Setup error: {e}"))?;
    if level != LogLevel::Quiet {
        controller.add_callback(ProgressCallback::new(spec.training.evaluate_every));
    }

    let report =
        run_curriculum(&spec, &mut controller).map_err(|e| format!("Training error: {e}"))?;

    log(level, LogLevel::Normal, &format_report(&report));
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Outcome log: {}",
            spec.output.outcome_log_path().display()
        ),
    );
    Ok(())
}
