//! Service layer - business logic orchestration
//!
//! The session controller drives the menu loop on top of the domain model;
//! the logging service records what happened along the way.

pub mod logging;
mod menu;
mod session;

pub use logging::{LogEvent, LoggingService};
pub use menu::{MenuOperation, SessionState, MENU};
pub use session::{SessionController, ADMIN_KEY};
