//! Output formatting - terminal implementation of the presentation port

use std::io::Write;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use mailroster_core::ports::Presenter;
use mailroster_core::Account;

const BORDER_WIDTH: usize = 90;

/// Column widths, in characters
const NAME_WIDTH: usize = 18;
const EMAIL_WIDTH: usize = 36;
const PASSWORD_WIDTH: usize = 22;
const DEPARTMENT_WIDTH: usize = 10;

/// Marker that replaces the tail of truncated cell content
const TRUNCATION_MARKER: &str = "---";

/// Print a success message
pub fn success(msg: &str) {
    println!("\n   {} {}", "[SUCCESS]".green().bold(), msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    println!("\n   {} {}", "[ERROR]".red().bold(), msg.red());
}

/// Print a notice
pub fn notice(msg: &str) {
    println!("  {} {}", "[!]".yellow().bold(), msg.yellow());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table
}

/// Cut `value` to `width` characters, ending in `---` when shortened
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value
        .chars()
        .take(width.saturating_sub(TRUNCATION_MARKER.len()))
        .collect();
    format!("{kept}{TRUNCATION_MARKER}")
}

/// Table of position, name, address and password
pub fn password_table(accounts: &[Account]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["#", "Name", "Email", "Password"]);

    for (i, account) in accounts.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            truncate(&account.full_name(), NAME_WIDTH),
            truncate(account.email_address(), EMAIL_WIDTH),
            truncate(account.password(), PASSWORD_WIDTH),
        ]);
    }
    table
}

/// Table of position, name, address, department and capacity
pub fn accounts_table(accounts: &[Account]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["#", "Name", "Email", "Department", "Capacity (MB)"]);

    for (i, account) in accounts.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            truncate(&account.full_name(), NAME_WIDTH),
            truncate(account.email_address(), EMAIL_WIDTH),
            truncate(account.department_display(), DEPARTMENT_WIDTH),
            account.mailbox_capacity().to_string(),
        ]);

        if let Some(alternate) = account.alternate_email().filter(|a| !a.is_empty()) {
            table.add_row(vec![
                String::new(),
                "Alt:".to_string(),
                truncate(alternate, EMAIL_WIDTH),
                String::new(),
                String::new(),
            ]);
        }
    }
    table
}

/// Presenter that writes to the terminal
pub struct ConsolePresenter {
    clear_screen: bool,
}

impl ConsolePresenter {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Presenter for ConsolePresenter {
    fn clear(&mut self) {
        if self.clear_screen {
            print!("\x1B[2J\x1B[1;1H");
            let _ = std::io::stdout().flush();
        } else {
            println!();
        }
    }

    fn title(&mut self, title: &str) {
        let border = "=".repeat(BORDER_WIDTH);
        let padding = BORDER_WIDTH.saturating_sub(title.chars().count()) / 2;
        println!("\n{border}");
        println!("{}{}", " ".repeat(padding), title.bold());
        println!("{border}");
    }

    fn section(&mut self, name: &str) {
        println!("\n  {}\n", format!("[{name}]").cyan());
    }

    fn line(&mut self, text: &str) {
        println!("  {text}");
    }

    fn separator(&mut self) {
        println!("{}", "-".repeat(BORDER_WIDTH).dimmed());
    }

    fn success(&mut self, message: &str) {
        success(message);
    }

    fn error(&mut self, message: &str) {
        error(message);
    }

    fn notice(&mut self, message: &str) {
        notice(message);
    }

    fn field(&mut self, label: &str, value: &str) {
        println!("    {label:<22}: {value}");
    }

    fn password_table(&mut self, accounts: &[Account]) {
        println!("{}", password_table(accounts));
    }

    fn accounts_table(&mut self, accounts: &[Account]) {
        println!("{}", accounts_table(accounts));
    }
}
