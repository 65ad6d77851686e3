//! Core domain entities
//!
//! The account entity, its department, password generation and the
//! collection a session works on. Pure data and validation; randomness comes
//! in through the [`crate::ports::RandomSource`] port.

mod account;
mod department;
pub mod password;
mod registry;
pub mod result;

pub use account::{derive_email, is_valid_email, Account, DEFAULT_CAPACITY, DOMAIN, MAX_CAPACITY};
pub use department::Department;
pub use password::{PasswordGenerator, MIN_PASSWORD_LENGTH};
pub use registry::AccountRegistry;
