//! Adapter implementations
//!
//! Concrete implementations of the port traits, plus the demo data a
//! session starts with.

pub mod demo;
pub mod random;

pub use random::{OsRandom, SeededRandom};
