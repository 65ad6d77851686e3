//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! and the session controller depend only on these traits, never on a
//! terminal or a concrete random number generator.

mod console;
mod random;

pub use console::{Presenter, Prompter};
pub use random::RandomSource;
