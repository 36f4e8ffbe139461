use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of account kinds accepted at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Current,
    Savings,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Current, AccountType::Savings];

    /// Canonical name, as written to the store
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "CURRENT",
            AccountType::Savings => "SAVINGS",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive name match.
impl FromStr for AccountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown account type: {:?}", s)))
    }
}

/// Account entity. `account_type` is kept as the stored text; it is only
/// checked against [`AccountType`] when crossing the gRPC boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<i64>,
    pub balance: f64,
    pub creation_date: String,
    pub account_type: String,
}

impl Account {
    pub fn new(balance: f64, creation_date: String, account_type: AccountType) -> Self {
        Self {
            id: None,
            balance,
            creation_date,
            account_type: account_type.as_str().to_string(),
        }
    }

    /// Parses the stored type exactly as written.
    pub fn parsed_type(&self) -> Result<AccountType, DomainError> {
        self.account_type.parse()
    }
}
