//! Department domain model

use std::fmt;

use super::result::{Error, Result};

/// Department an account belongs to
///
/// Affects the domain part of the derived email address. `None` is a real
/// category ("no department"), not a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Sales,
    Dev,
    Acct,
    None,
}

impl Department {
    /// All departments in menu order
    pub const ALL: [Department; 4] = [
        Department::Sales,
        Department::Dev,
        Department::Acct,
        Department::None,
    ];

    /// Parse a department from free text
    ///
    /// Case-insensitive. A missing or blank value means [`Department::None`].
    pub fn parse(value: Option<&str>) -> Result<Self> {
        let normalized = value.map(|v| v.trim().to_lowercase()).unwrap_or_default();
        match normalized.as_str() {
            "sales" => Ok(Self::Sales),
            "dev" => Ok(Self::Dev),
            "acct" => Ok(Self::Acct),
            "none" | "" => Ok(Self::None),
            other => Err(Error::validation(format!("Unknown department: {other}"))),
        }
    }

    /// Department for a 1-based position in the department menu
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Lowercase form used in email addresses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Dev => "dev",
            Self::Acct => "acct",
            Self::None => "none",
        }
    }

    /// Capitalized form shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Dev => "Dev",
            Self::Acct => "Acct",
            Self::None => "None",
        }
    }

    /// Long label used in the department menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Dev => "Development",
            Self::Acct => "Accounting",
            Self::None => "None",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
