//! Demo data for a fresh session
//!
//! Six accounts across the three staffed departments, so every screen has
//! something to show from the first menu on.

use crate::domain::result::Result;
use crate::domain::{Account, AccountRegistry, Department, PasswordGenerator};

/// Name and department of each demo account, in display order
pub const DEMO_ACCOUNTS: [(&str, &str, Department); 6] = [
    ("Rose", "Taylor", Department::Dev),
    ("Ryan", "Smith", Department::Sales),
    ("Thomas", "Brown", Department::Acct),
    ("Olivia", "Jones", Department::Sales),
    ("Michael", "Anderson", Department::Dev),
    ("Jennifer", "Davis", Department::Acct),
];

/// Generate demo accounts with fresh passwords
pub fn generate_demo_accounts(passwords: &mut PasswordGenerator) -> Result<AccountRegistry> {
    DEMO_ACCOUNTS
        .iter()
        .map(|(first, last, department)| Account::new(first, last, *department, passwords))
        .collect()
}
