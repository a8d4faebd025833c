//! Top-1 / top-5 accounting at cell, object, and global scope.
mod accuracy;
mod aggregator;
mod summary;

pub use accuracy::*;
pub use aggregator::*;
pub use summary::*;
