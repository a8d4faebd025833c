//! Running a sequence of samples through the pipeline.
mod detail;
mod evaluator;
mod sample;

pub use detail::*;
pub use evaluator::*;
pub use sample::*;
