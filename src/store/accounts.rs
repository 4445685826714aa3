//! In-memory account table.

use std::fmt;

/// An account record, sensitive fields included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub id: &'static str,
    pub name: &'static str,
    pub balance: &'static str,
    pub ssn: &'static str,
}

/// Renders the record the way a dict literal prints.
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'name': '{}', 'balance': '{}', 'ssn': '{}'}}",
            self.name, self.balance, self.ssn
        )
    }
}

static ACCOUNTS: [Account; 2] = [
    Account {
        id: "1",
        name: "Admin User",
        balance: "$10,000",
        ssn: "123-45-6789",
    },
    Account {
        id: "2",
        name: "Regular User",
        balance: "$100",
        ssn: "987-65-4321",
    },
];

/// Look up an account by its raw identifier. No ownership check.
pub fn find(id: &str) -> Option<&'static Account> {
    ACCOUNTS.iter().find(|a| a.id == id)
}
