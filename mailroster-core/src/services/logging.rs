//! Logging service - structured event logging
//!
//! Records privacy-safe events through `tracing`. No account data (names,
//! addresses, passwords, admin keys) is ever logged, only what happened and
//! which menu command it happened in. Where the events end up is decided by
//! whatever subscriber the binary installs.

use serde::{Deserialize, Serialize};

/// Target every session event is emitted under
pub const EVENT_TARGET: &str = "mailroster::events";

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            error_message: None,
        }
    }

    /// Set the menu command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Logging service for session events
#[derive(Debug, Clone)]
pub struct LoggingService {
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    pub fn new(app_version: impl Into<String>) -> Self {
        Self {
            app_version: app_version.into(),
            platform: detect_platform(),
        }
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Record an event
    ///
    /// Events carrying an error are emitted at `warn`, the rest at `info`.
    pub fn log(&self, event: LogEvent) {
        let command = event.command.as_deref().unwrap_or("-");
        match event.error_message.as_deref() {
            Some(error) => tracing::warn!(
                target: EVENT_TARGET,
                event = %event.event,
                command,
                error,
                app_version = %self.app_version,
                platform = self.platform,
                "session event"
            ),
            None => tracing::info!(
                target: EVENT_TARGET,
                event = %event.event,
                command,
                app_version = %self.app_version,
                platform = self.platform,
                "session event"
            ),
        }
    }
}

impl Default for LoggingService {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_builder() {
        let event = LogEvent::new("password_changed").with_command("change_password");
        assert_eq!(event.event, "password_changed");
        assert_eq!(event.command.as_deref(), Some("change_password"));
        assert!(!event.is_error());

        let event = event.with_error("Password must be at least 12 characters");
        assert!(event.is_error());
    }

    #[test]
    fn test_log_event_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&LogEvent::new("session_started")).unwrap();
        assert_eq!(json, r#"{"event":"session_started"}"#);
    }

    #[test]
    fn test_logging_without_subscriber_is_silent() {
        let service = LoggingService::new("1.2.3");
        assert_eq!(service.app_version(), "1.2.3");
        service.log(LogEvent::new("session_started"));
        service.log(LogEvent::new("validation_failed").with_error("Invalid email format"));
    }
}
