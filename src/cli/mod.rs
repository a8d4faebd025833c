//! Command line front end.
mod args;
mod run;

pub use args::*;
