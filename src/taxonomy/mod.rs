//! Flat class labels → objects × directions.
mod direction;
mod index;
mod label;
mod taxonomy;

pub use direction::*;
pub use index::*;
pub use label::*;
pub use taxonomy::*;
