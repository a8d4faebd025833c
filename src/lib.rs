//! Viewpoint-aware evaluation of flat image classifiers.
//!
//! The classifier under evaluation predicts over a flat label space whose
//! entries are secretly `<object>_<direction>` pairs. This crate recovers
//! accuracy at three granularities from each sample's raw per-class scores:
//! per (object, direction) cell, per object, and globally.
//!
//! ## Pipeline
//!
//! 1. **Taxonomy**: [`Taxonomy`] splits the [`ClassIndex`] into a dense
//!    objects × [`Direction`] table of optional class indices
//! 2. **Propagation**: [`Profile::propagate`] smooths each object's
//!    direction scores across neighbouring viewpoint sectors
//! 3. **Recombination**: [`Recombiner`] writes propagated scores back into
//!    the flat vector, re-normalises, and ranks objects
//! 4. **Aggregation**: [`Aggregator`] tallies top-1/top-5 hits and
//!    finalises into a [`Summary`]
//!
//! Undefined scores (an object lacking a viewpoint) are carried as
//! [`Reading::Absent`], never as zero.
#![allow(dead_code)]

pub mod error;
pub mod evaluation;
pub mod metrics;
pub mod scoring;
pub mod taxonomy;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::*;
pub use evaluation::*;
pub use metrics::*;
pub use scoring::*;
pub use taxonomy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw logits, softmax probabilities, and propagated scores.
pub type Score = f64;
/// Dense position of a label in the [`ClassIndex`].
pub type ClassId = usize;
/// Dense position of an object in the [`Taxonomy`]'s lexicographic ordering.
pub type ObjectId = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EVALUATION PARAMETERS
// ============================================================================
/// Size of the "top-k" window for object and direction accuracy.
pub const TOP_K: usize = 5;
/// Separator between the object and direction halves of a class label.
pub const SEPARATOR: char = '_';
/// Allowed deviation of a recombined distribution's mass from one.
pub const SUM_TOLERANCE: Score = 1e-6;
/// Ground truth used when a sample carries no label and no parent directory.
pub const UNKNOWN_LABEL: &str = "unknown";

// ============================================================================
// REPORT FILES
// ============================================================================
/// Per-sample report with every intermediate score table.
pub const DETAIL_FILE: &str = "samples.txt";
/// Tab-separated cell table plus object-level accuracy.
pub const SUMMARY_FILE: &str = "per_object_direction_evaluation.txt";
/// Structured form of the summary.
pub const SUMMARY_JSON: &str = "summary.json";
/// Resolved command line arguments.
pub const ARGS_FILE: &str = "args.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
