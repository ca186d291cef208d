use serde::{Deserialize, Serialize};

/// A loan application as persisted by the record store.
///
/// The `id` is assigned once by the [`IdGenerator`](crate::domain::id::IdGenerator)
/// and never changes; `approved` is the only field mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: u64,
    pub amount: i64,
    pub email: String,
    pub contact: String,
    #[serde(default)]
    pub approved: bool,
}

impl LoanApplication {
    pub fn new(id: u64, amount: i64, email: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            email: email.into(),
            contact: contact.into(),
            approved: false,
        }
    }
}

/// Handle returned by store and approve operations. Carries only the
/// application id; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
}

impl Ticket {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Login/password pair consumed by the login stub. Never validated or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}
