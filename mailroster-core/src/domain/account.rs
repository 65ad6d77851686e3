//! Account domain model

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;

use super::department::Department;
use super::password::{PasswordGenerator, MIN_PASSWORD_LENGTH};
use super::result::{Error, Result};

/// Domain shared by every derived address
pub const DOMAIN: &str = "company-com";

pub const DEFAULT_CAPACITY: u32 = 500;
pub const MAX_CAPACITY: u32 = 50_000;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").expect("email pattern is valid"))
}

/// Check an address against the alternate email pattern
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Derive the primary address for a name and department
///
/// `first-last@company-com` without a department,
/// `first-last@dept-company-com` otherwise.
pub fn derive_email(first_name: &str, last_name: &str, department: Department) -> String {
    let base = format!("{}-{}", first_name.to_lowercase(), last_name.to_lowercase());
    match department {
        Department::None => format!("{base}@{DOMAIN}"),
        dept => format!("{base}@{}-{DOMAIN}", dept.as_str()),
    }
}

/// An email account
///
/// Names, department and address are fixed at construction. Equality and
/// hashing use the derived address only; two accounts may still share an
/// address, and nothing rejects that.
#[derive(Debug, Clone)]
pub struct Account {
    first_name: String,
    last_name: String,
    department: Department,
    email_address: String,
    password: String,
    mailbox_capacity: u32,
    alternate_email: Option<String>,
}

impl Account {
    /// Create an account with a freshly generated password
    pub fn new(
        first_name: &str,
        last_name: &str,
        department: Department,
        passwords: &mut PasswordGenerator,
    ) -> Result<Self> {
        let first_name = validate_name(first_name, "First Name")?;
        let last_name = validate_name(last_name, "Last Name")?;
        let email_address = derive_email(&first_name, &last_name, department);

        Ok(Self {
            first_name,
            last_name,
            department,
            email_address,
            password: passwords.generate(),
            mailbox_capacity: DEFAULT_CAPACITY,
            alternate_email: None,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn department(&self) -> Department {
        self.department
    }

    /// Department as shown to users ("None", "Dev", ...)
    pub fn department_display(&self) -> &'static str {
        self.department.display_name()
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// Plaintext password
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn mailbox_capacity(&self) -> u32 {
        self.mailbox_capacity
    }

    pub fn alternate_email(&self) -> Option<&str> {
        self.alternate_email.as_deref()
    }

    /// Exact, case-sensitive comparison with the stored password
    pub fn verify_password(&self, candidate: &str) -> bool {
        candidate == self.password
    }

    /// Replace the password with one chosen by the user
    pub fn change_password(&mut self, new_password: &str) -> Result<()> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        self.password = new_password.to_string();
        Ok(())
    }

    /// Replace the password with a generated one
    pub fn reset_password(&mut self, passwords: &mut PasswordGenerator) {
        self.password = passwords.generate();
    }

    /// Set or clear the alternate email
    ///
    /// A missing or blank value clears the field.
    pub fn set_alternate_email(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            Some(email) if !email.trim().is_empty() => {
                if !is_valid_email(email) {
                    return Err(Error::validation("Invalid email format"));
                }
                self.alternate_email = Some(email.to_string());
            }
            _ => self.alternate_email = None,
        }
        Ok(())
    }

    pub fn set_mailbox_capacity(&mut self, capacity: u32) -> Result<()> {
        if !(1..=MAX_CAPACITY).contains(&capacity) {
            return Err(Error::validation(format!(
                "Capacity must be between 1 and {MAX_CAPACITY} MB"
            )));
        }
        self.mailbox_capacity = capacity;
        Ok(())
    }
}

fn validate_name(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.email_address == other.email_address
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email_address.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.email_address)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::ports::RandomSource;

    /// Cycles through 0, 1, 2, ... so consecutive passwords differ
    struct Counter(usize);

    impl RandomSource for Counter {
        fn next_below(&mut self, bound: usize) -> usize {
            self.0 += 1;
            self.0 % bound
        }
    }

    fn generator() -> PasswordGenerator {
        PasswordGenerator::new(Counter(0)).with_year(2025)
    }

    fn account(first: &str, last: &str, department: Department) -> Account {
        Account::new(first, last, department, &mut generator()).unwrap()
    }

    #[test]
    fn test_rose_taylor_scenario() {
        let acc = account("Rose", "Taylor", Department::Dev);
        assert_eq!(acc.email_address(), "rose-taylor@dev-company-com");
        assert_eq!(acc.mailbox_capacity(), 500);
        assert!(acc.password().len() >= MIN_PASSWORD_LENGTH);
        assert!(acc.verify_password(&acc.password().to_string()));
        assert!(!acc.verify_password("something else"));
        assert!(!acc.verify_password(&acc.password().to_lowercase()));
        assert_eq!(acc.department_display(), "Dev");
    }

    #[test]
    fn test_email_derivation() {
        assert_eq!(
            derive_email("Thomas", "Brown", Department::Acct),
            "thomas-brown@acct-company-com"
        );
        assert_eq!(
            derive_email("OLIVIA", "Jones", Department::Sales),
            "olivia-jones@sales-company-com"
        );
        assert_eq!(derive_email("Ann", "Lee", Department::None), "ann-lee@company-com");
    }

    #[test]
    fn test_names_are_trimmed_and_required() {
        let acc = account("  Ryan ", " Smith", Department::Sales);
        assert_eq!(acc.first_name(), "Ryan");
        assert_eq!(acc.last_name(), "Smith");
        assert_eq!(acc.email_address(), "ryan-smith@sales-company-com");

        let err = Account::new("", "Smith", Department::Sales, &mut generator()).unwrap_err();
        assert_eq!(err.validation_message(), Some("First Name cannot be empty"));

        let err = Account::new("Ryan", "   ", Department::Sales, &mut generator()).unwrap_err();
        assert_eq!(err.validation_message(), Some("Last Name cannot be empty"));
    }

    #[test]
    fn test_no_department_displays_none() {
        let dept = Department::parse(None).unwrap();
        let acc = account("Ann", "Lee", dept);
        assert_eq!(acc.department_display(), "None");
        assert_eq!(acc.email_address(), "ann-lee@company-com");
    }

    #[test]
    fn test_change_password() {
        let mut acc = account("Rose", "Taylor", Department::Dev);
        let before = acc.password().to_string();

        let err = acc.change_password("short").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(acc.password(), before);

        let err = acc.change_password("elevenchars").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(acc.password(), before);

        acc.change_password("twelve chars").unwrap();
        assert!(acc.verify_password("twelve chars"));
        assert!(!acc.verify_password(&before));
    }

    #[test]
    fn test_reset_password() {
        let mut passwords = generator();
        let mut acc = Account::new("Rose", "Taylor", Department::Dev, &mut passwords).unwrap();
        let before = acc.password().to_string();

        acc.reset_password(&mut passwords);
        assert_ne!(acc.password(), before);
        assert!(acc.password().len() >= MIN_PASSWORD_LENGTH);
        assert!(acc.verify_password(&acc.password().to_string()));
        assert!(!acc.verify_password(&before));
    }

    #[test]
    fn test_mailbox_capacity_bounds() {
        let mut acc = account("Rose", "Taylor", Department::Dev);

        for capacity in [1, 500, 12_345, MAX_CAPACITY] {
            acc.set_mailbox_capacity(capacity).unwrap();
            assert_eq!(acc.mailbox_capacity(), capacity);
        }

        acc.set_mailbox_capacity(750).unwrap();
        assert!(acc.set_mailbox_capacity(0).is_err());
        assert!(acc.set_mailbox_capacity(MAX_CAPACITY + 1).is_err());
        assert_eq!(acc.mailbox_capacity(), 750);
    }

    #[test]
    fn test_alternate_email() {
        let mut acc = account("Rose", "Taylor", Department::Dev);

        acc.set_alternate_email(Some("a@b")).unwrap();
        assert_eq!(acc.alternate_email(), Some("a@b"));

        let err = acc.set_alternate_email(Some("not-an-email")).unwrap_err();
        assert_eq!(err.validation_message(), Some("Invalid email format"));
        assert_eq!(acc.alternate_email(), Some("a@b"));

        assert!(acc.set_alternate_email(Some("bad chars!@x.com")).is_err());

        acc.set_alternate_email(Some("")).unwrap();
        assert_eq!(acc.alternate_email(), None);

        acc.set_alternate_email(Some("rose+mail@home.org")).unwrap();
        acc.set_alternate_email(Some("   ")).unwrap();
        assert_eq!(acc.alternate_email(), None);

        acc.set_alternate_email(Some("rose.t@home.org")).unwrap();
        acc.set_alternate_email(None).unwrap();
        assert_eq!(acc.alternate_email(), None);
    }

    #[test]
    fn test_identity_is_email_only() {
        let a = account("Rose", "Taylor", Department::Dev);
        let mut b = account("ROSE", "taylor", Department::Dev);
        b.set_mailbox_capacity(42).unwrap();
        let c = account("Rose", "Taylor", Department::Sales);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let acc = account("Rose", "Taylor", Department::Dev);
        assert_eq!(acc.to_string(), "Rose Taylor (rose-taylor@dev-company-com)");
        assert_eq!(acc.full_name(), "Rose Taylor");
    }
}
