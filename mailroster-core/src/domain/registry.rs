//! Account registry - the ordered collection a session works on

use super::account::Account;

/// Ordered, position-indexed list of accounts
///
/// Positions shown to users are 1-based. Accounts are only ever appended,
/// so a position stays valid for the rest of the session. Duplicate
/// addresses are allowed.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account and return its 1-based position
    pub fn push(&mut self, account: Account) -> usize {
        self.accounts.push(account);
        self.accounts.len()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Account at a 1-based position
    pub fn get(&self, position: usize) -> Option<&Account> {
        position.checked_sub(1).and_then(|i| self.accounts.get(i))
    }

    /// Mutable account at a 1-based position
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Account> {
        position.checked_sub(1).and_then(move |i| self.accounts.get_mut(i))
    }

    /// All accounts carrying the given address, in order
    pub fn find_by_email<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Account> + 'a {
        self.accounts.iter().filter(move |a| a.email_address() == email)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    pub fn as_slice(&self) -> &[Account] {
        &self.accounts
    }
}

impl FromIterator<Account> for AccountRegistry {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self {
            accounts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AccountRegistry {
    type Item = &'a Account;
    type IntoIter = std::slice::Iter<'a, Account>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}
