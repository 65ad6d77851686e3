//! Session controller - the interactive menu loop
//!
//! Owns the account registry and the password generator for one run of the
//! program. All reading and writing goes through the [`Prompter`] and
//! [`Presenter`] ports, so the loop runs the same against a terminal or a
//! scripted test double.

use crate::adapters::demo::generate_demo_accounts;
use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountRegistry, Department, PasswordGenerator, MAX_CAPACITY};
use crate::ports::{Presenter, Prompter};

use super::logging::{LogEvent, LoggingService};
use super::menu::{MenuOperation, SessionState, MENU};

/// Key that authorizes password resets without the account's password
pub const ADMIN_KEY: &str = "admin123";

/// Session controller
pub struct SessionController {
    accounts: AccountRegistry,
    passwords: PasswordGenerator,
    logger: LoggingService,
    state: SessionState,
}

impl SessionController {
    /// Create a session with no accounts
    pub fn new(passwords: PasswordGenerator) -> Self {
        Self {
            accounts: AccountRegistry::new(),
            passwords,
            logger: LoggingService::default(),
            state: SessionState::MainMenu,
        }
    }

    /// Create a session seeded with the demo accounts
    pub fn with_demo_accounts(mut passwords: PasswordGenerator) -> Result<Self> {
        let accounts = generate_demo_accounts(&mut passwords)?;
        Ok(Self {
            accounts,
            ..Self::new(passwords)
        })
    }

    pub fn with_logger(mut self, logger: LoggingService) -> Self {
        self.logger = logger;
        self
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the whole session: welcome screen, then the menu loop until Exit
    pub fn run(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        self.logger.log(LogEvent::new("session_started"));
        self.welcome(prompter, presenter)?;

        while self.state != SessionState::Exit {
            self.show_main_menu(presenter);
            let choice = prompter.read_choice(1, MENU.len())?;
            let operation = MenuOperation::from_choice(choice)
                .ok_or_else(|| Error::input(format!("Menu choice {choice} is out of range")))?;
            self.dispatch(operation, prompter, presenter)?;
        }

        self.logger.log(LogEvent::new("session_ended"));
        Ok(())
    }

    /// Run one operation to completion and move to the next state
    ///
    /// Validation errors are shown and swallowed; any other error ends the
    /// session.
    pub fn dispatch(
        &mut self,
        operation: MenuOperation,
        prompter: &mut dyn Prompter,
        presenter: &mut dyn Presenter,
    ) -> Result<SessionState> {
        let outcome = match operation {
            MenuOperation::CreateAccount => self.create_account(prompter, presenter),
            MenuOperation::ChangePassword => self.change_password(prompter, presenter),
            MenuOperation::SetAlternateEmail => self.set_alternate_email(prompter, presenter),
            MenuOperation::SetCapacity => self.set_capacity(prompter, presenter),
            MenuOperation::DisplayAll => self.display_all(presenter),
            MenuOperation::AdminReset => self.admin_reset(prompter, presenter),
            MenuOperation::ViewReference => self.view_reference(presenter),
            MenuOperation::Exit => self.exit(presenter),
        };

        match outcome {
            Ok(()) => {}
            Err(Error::Validation(message)) => {
                self.logger.log(
                    LogEvent::new("validation_failed")
                        .with_command(operation.command_name())
                        .with_error(&message),
                );
                presenter.error(&message);
            }
            Err(e) => return Err(e),
        }

        if operation != MenuOperation::Exit {
            prompter.pause()?;
        }

        self.state = operation.next_state();
        Ok(self.state)
    }

    fn welcome(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.clear();
        presenter.title("EMAIL MANAGEMENT SYSTEM");
        presenter.section("TEST ACCOUNTS - SAVE THESE PASSWORDS");
        presenter.password_table(self.accounts.as_slice());

        presenter.section("ADMIN KEY");
        presenter.line(&format!("Key: {ADMIN_KEY} (Use in Option 6 for password reset)"));

        presenter.section("TIPS");
        presenter.line("- Passwords shown on startup & in Option 7");
        presenter.line("- Admin key available in Option 7");
        presenter.line("- Password format: Word+Word+Symbol+Year-Digits");

        prompter.pause()
    }

    fn show_main_menu(&self, presenter: &mut dyn Presenter) {
        presenter.clear();
        presenter.title("MAIN MENU");
        for (choice, _, label) in MENU {
            presenter.line(&format!("{choice}. {label}"));
        }
        presenter.separator();
    }

    fn create_account(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.clear();
        presenter.title("CREATE NEW EMAIL ACCOUNT");

        let first_name = prompter.read_required("First Name")?;
        let last_name = prompter.read_required("Last Name")?;

        presenter.line("Select Department:");
        for (i, department) in Department::ALL.iter().enumerate() {
            presenter.line(&format!("  {}. {}", i + 1, department.menu_label()));
        }
        let choice = prompter.read_choice(1, Department::ALL.len())?;
        let department = Department::from_menu_choice(choice)
            .ok_or_else(|| Error::input(format!("Department choice {choice} is out of range")))?;

        let account = Account::new(&first_name, &last_name, department, &mut self.passwords)?;

        presenter.separator();
        presenter.success("Account Created Successfully!");
        presenter.line("Account Details:");
        presenter.field("Email", account.email_address());
        presenter.field("Password", account.password());
        presenter.field("Department", account.department_display());
        presenter.notice("SAVE THIS PASSWORD! View again in Option 7");
        presenter.separator();

        self.accounts.push(account);
        self.logger.log(
            LogEvent::new("account_created").with_command(MenuOperation::CreateAccount.command_name()),
        );
        Ok(())
    }

    fn change_password(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        let command = MenuOperation::ChangePassword.command_name();
        presenter.clear();
        presenter.title("CHANGE PASSWORD");

        let Some(position) = self.authenticated_account(command, prompter, presenter)? else {
            return Ok(());
        };

        let new_password = prompter.read_secret("New Password (12+ characters)")?;
        self.account_mut(position)?.change_password(&new_password)?;

        presenter.success("Password changed successfully!");
        presenter.line("View passwords anytime in Option 7");
        self.logger.log(LogEvent::new("password_changed").with_command(command));
        Ok(())
    }

    fn set_alternate_email(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        let command = MenuOperation::SetAlternateEmail.command_name();
        presenter.clear();
        presenter.title("SET ALTERNATE EMAIL");

        let Some(position) = self.authenticated_account(command, prompter, presenter)? else {
            return Ok(());
        };

        let alternate = prompter.read_optional("Alternate Email (or press ENTER to skip)")?;
        if alternate.is_empty() {
            presenter.line("No changes made.");
            return Ok(());
        }

        self.account_mut(position)?.set_alternate_email(Some(&alternate))?;

        presenter.success("Alternate email set successfully!");
        presenter.field("Alternate Email", &alternate);
        self.logger.log(LogEvent::new("alternate_email_set").with_command(command));
        Ok(())
    }

    fn set_capacity(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        let command = MenuOperation::SetCapacity.command_name();
        presenter.clear();
        presenter.title("SET MAILBOX CAPACITY");

        let Some(position) = self.authenticated_account(command, prompter, presenter)? else {
            return Ok(());
        };

        let capacity = prompter.read_number(
            &format!("New Capacity (1-{MAX_CAPACITY} MB)"),
            1,
            MAX_CAPACITY,
        )?;
        self.account_mut(position)?.set_mailbox_capacity(capacity)?;

        presenter.success("Mailbox capacity updated!");
        presenter.field("New Capacity", &format!("{capacity} MB"));
        self.logger.log(LogEvent::new("mailbox_capacity_set").with_command(command));
        Ok(())
    }

    fn display_all(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.clear();
        presenter.title(&format!("ALL EMAIL ACCOUNTS ({} total)", self.accounts.len()));

        if self.accounts.is_empty() {
            presenter.line("No accounts found.");
        } else {
            presenter.accounts_table(self.accounts.as_slice());
        }
        Ok(())
    }

    fn admin_reset(&mut self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<()> {
        let command = MenuOperation::AdminReset.command_name();
        presenter.clear();
        presenter.title("ADMIN PASSWORD RESET");
        presenter.section("ADMIN KEY REQUIRED");

        let key = prompter.read_secret("Enter Admin Key")?;
        if key != ADMIN_KEY {
            presenter.error("Access denied. Invalid admin key.");
            presenter.line("Hint: Check Option 7 for admin key");
            self.logger.log(
                LogEvent::new("admin_access_denied")
                    .with_command(command)
                    .with_error("invalid admin key"),
            );
            return Ok(());
        }

        let Some(position) = self.select_account(prompter, presenter)? else {
            return Ok(());
        };

        let account = self
            .accounts
            .get_mut(position)
            .ok_or_else(|| Error::input(format!("Account {position} does not exist")))?;
        account.reset_password(&mut self.passwords);

        presenter.separator();
        presenter.success("Password reset successfully!");
        presenter.line("Account Details:");
        presenter.field("Email", account.email_address());
        presenter.field("New Password", account.password());
        presenter.notice("SAVE THIS PASSWORD! View again in Option 7");
        presenter.separator();

        self.logger.log(LogEvent::new("password_reset").with_command(command));
        Ok(())
    }

    fn view_reference(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.clear();
        presenter.title("PASSWORD REFERENCE");
        presenter.section("ACCOUNT PASSWORDS");
        presenter.password_table(self.accounts.as_slice());
        presenter.section("ADMIN KEY");
        presenter.line(&format!("{ADMIN_KEY} (Use in Option 6 for password reset)"));
        presenter.separator();
        Ok(())
    }

    fn exit(&self, presenter: &mut dyn Presenter) -> Result<()> {
        presenter.clear();
        presenter.title("Thank you for using Email Management System!");
        presenter.line("Goodbye!");
        presenter.separator();
        Ok(())
    }

    /// Let the user pick an account by 1-based position, or cancel with 0
    fn select_account(&self, prompter: &mut dyn Prompter, presenter: &mut dyn Presenter) -> Result<Option<usize>> {
        if self.accounts.is_empty() {
            presenter.error("No accounts available.");
            return Ok(None);
        }

        presenter.line("Select Account (passwords shown for reference):");
        presenter.selection_table(self.accounts.as_slice());

        let choice = prompter.read_choice(0, self.accounts.len())?;
        if choice == 0 {
            presenter.line("Selection cancelled.");
            return Ok(None);
        }
        if self.accounts.get(choice).is_none() {
            return Err(Error::input(format!("Account {choice} does not exist")));
        }
        Ok(Some(choice))
    }

    /// Select an account and check its current password
    ///
    /// `None` when the selection was cancelled or the password did not match;
    /// both cases have already been reported to the user.
    fn authenticated_account(
        &self,
        command: &str,
        prompter: &mut dyn Prompter,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<usize>> {
        let Some(position) = self.select_account(prompter, presenter)? else {
            return Ok(None);
        };

        let current = prompter.read_secret("Current Password")?;
        let verified = self
            .accounts
            .get(position)
            .is_some_and(|account| account.verify_password(&current));

        if !verified {
            presenter.error("Authentication failed. Password incorrect.");
            self.logger.log(
                LogEvent::new("authentication_failed")
                    .with_command(command)
                    .with_error("password mismatch"),
            );
            return Ok(None);
        }
        Ok(Some(position))
    }

    fn account_mut(&mut self, position: usize) -> Result<&mut Account> {
        self.accounts
            .get_mut(position)
            .ok_or_else(|| Error::input(format!("Account {position} does not exist")))
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("accounts", &self.accounts.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
