//! Per-sample score propagation and recombination.
mod profile;
mod reading;
mod recombination;
mod recombiner;
mod softmax;

pub use profile::*;
pub use reading::*;
pub use recombination::*;
pub use recombiner::*;
pub use softmax::*;
