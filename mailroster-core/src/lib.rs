//! Mailroster Core - account model and session logic for email account management
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Account, Department, AccountRegistry) and password generation
//! - **ports**: Trait definitions for external collaborators (Prompter, Presenter, RandomSource)
//! - **services**: The interactive session controller and event logging
//! - **adapters**: Concrete implementations (OS and seeded randomness, demo accounts)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, AccountRegistry, Department, PasswordGenerator};
pub use services::{LogEvent, LoggingService, MenuOperation, SessionController, SessionState};
