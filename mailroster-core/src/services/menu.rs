//! Main menu - the operations a session offers and their choice numbers

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOperation {
    CreateAccount,
    ChangePassword,
    SetAlternateEmail,
    SetCapacity,
    DisplayAll,
    AdminReset,
    ViewReference,
    Exit,
}

/// Choice number, operation and label, in menu order
pub const MENU: [(usize, MenuOperation, &str); 8] = [
    (1, MenuOperation::CreateAccount, "Create New Email Account"),
    (2, MenuOperation::ChangePassword, "Change Password"),
    (3, MenuOperation::SetAlternateEmail, "Set Alternate Email"),
    (4, MenuOperation::SetCapacity, "Set Mailbox Capacity"),
    (5, MenuOperation::DisplayAll, "Display All Accounts"),
    (6, MenuOperation::AdminReset, "Admin Password Reset"),
    (7, MenuOperation::ViewReference, "View Password Reference"),
    (8, MenuOperation::Exit, "Exit Application"),
];

impl MenuOperation {
    /// Operation for a menu choice
    pub fn from_choice(choice: usize) -> Option<Self> {
        MENU.iter().find(|(n, _, _)| *n == choice).map(|(_, op, _)| *op)
    }

    /// Menu choice that selects this operation
    pub fn choice(self) -> usize {
        MENU.iter()
            .find(|(_, op, _)| *op == self)
            .map(|(n, _, _)| *n)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        MENU.iter()
            .find(|(_, op, _)| *op == self)
            .map(|(_, _, label)| *label)
            .unwrap_or_default()
    }

    /// Command name used in log events
    pub fn command_name(self) -> &'static str {
        match self {
            Self::CreateAccount => "create_account",
            Self::ChangePassword => "change_password",
            Self::SetAlternateEmail => "set_alternate_email",
            Self::SetCapacity => "set_capacity",
            Self::DisplayAll => "display_all",
            Self::AdminReset => "admin_reset",
            Self::ViewReference => "view_reference",
            Self::Exit => "exit",
        }
    }

    /// State the session is in once this operation has finished
    pub fn next_state(self) -> SessionState {
        match self {
            Self::Exit => SessionState::Exit,
            _ => SessionState::MainMenu,
        }
    }
}

/// Where the session loop stands between operations
///
/// While an operation runs the session is "in" that [`MenuOperation`];
/// every operation except [`MenuOperation::Exit`] returns to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_table_round_trip() {
        for (choice, op, label) in MENU {
            assert_eq!(MenuOperation::from_choice(choice), Some(op));
            assert_eq!(op.choice(), choice);
            assert_eq!(op.label(), label);
        }
    }

    #[test]
    fn test_out_of_range_choices() {
        assert_eq!(MenuOperation::from_choice(0), None);
        assert_eq!(MenuOperation::from_choice(9), None);
    }

    #[test]
    fn test_only_exit_is_terminal() {
        assert_eq!(MenuOperation::Exit.next_state(), SessionState::Exit);
        for (_, op, _) in MENU.iter().filter(|(_, op, _)| *op != MenuOperation::Exit) {
            assert_eq!(op.next_state(), SessionState::MainMenu);
        }
    }
}
