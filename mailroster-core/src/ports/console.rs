//! Console ports - the presentation and input collaborators of a session
//!
//! The session controller never touches a terminal directly. It asks a
//! [`Prompter`] for already-validated input and tells a [`Presenter`] what to
//! show. The CLI crate implements both on top of a real terminal; tests use
//! scripted and recording doubles.

use crate::domain::result::Result;
use crate::domain::Account;

/// Input collaborator
///
/// Every method blocks until a usable value is available. Malformed input
/// (non-numeric text, out-of-range numbers, blank required lines) is handled
/// by re-prompting inside the implementation and never reaches the caller.
/// An `Err` means the input stream itself is gone.
pub trait Prompter {
    /// Read a menu choice in `min..=max`
    fn read_choice(&mut self, min: usize, max: usize) -> Result<usize>;

    /// Read a number in `min..=max` after showing `prompt`
    fn read_number(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32>;

    /// Read a non-empty, trimmed line
    fn read_required(&mut self, prompt: &str) -> Result<String>;

    /// Read a line exactly as typed (used for passwords and keys)
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    /// Read a trimmed line that may be empty
    fn read_optional(&mut self, prompt: &str) -> Result<String>;

    /// Wait for the user to acknowledge the current screen
    fn pause(&mut self) -> Result<()>;
}

/// Presentation collaborator
pub trait Presenter {
    /// Start a new screen
    fn clear(&mut self);

    /// Screen title
    fn title(&mut self, title: &str);

    /// Section heading inside a screen
    fn section(&mut self, name: &str);

    /// Plain text line
    fn line(&mut self, text: &str);

    /// Horizontal rule
    fn separator(&mut self);

    fn success(&mut self, message: &str);

    fn error(&mut self, message: &str);

    fn notice(&mut self, message: &str);

    /// `label: value` line
    fn field(&mut self, label: &str, value: &str);

    /// Table of index, name, email and password
    fn password_table(&mut self, accounts: &[Account]);

    /// Table of index, name, email, department and capacity, with an
    /// `Alt:` row under accounts that have an alternate email
    fn accounts_table(&mut self, accounts: &[Account]);

    /// Table shown while picking an account; same shape as the password table
    fn selection_table(&mut self, accounts: &[Account]) {
        self.password_table(accounts);
    }
}
