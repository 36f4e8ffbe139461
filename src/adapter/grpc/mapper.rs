//! Conversions between domain records and `compte.v1` messages.

use super::error::{ApiError, INVALID_ACCOUNT_TYPE};
use super::proto;
use crate::domain::error::DomainError;
use crate::domain::model::{Account, AccountType};

impl From<AccountType> for proto::AccountType {
    fn from(t: AccountType) -> Self {
        match t {
            AccountType::Current => proto::AccountType::Current,
            AccountType::Savings => proto::AccountType::Savings,
        }
    }
}

impl From<proto::AccountType> for AccountType {
    fn from(t: proto::AccountType) -> Self {
        match t {
            proto::AccountType::Current => AccountType::Current,
            proto::AccountType::Savings => AccountType::Savings,
        }
    }
}

fn build(account: &Account, account_type: AccountType) -> proto::Account {
    proto::Account {
        id: account.id.map(|id| id.to_string()).unwrap_or_default(),
        balance: account.balance,
        creation_date: account.creation_date.clone(),
        account_type: proto::AccountType::from(account_type) as i32,
    }
}

/// Stored type must match an enum name exactly.
pub fn to_wire(account: &Account) -> Result<proto::Account, DomainError> {
    let account_type = account.parsed_type()?;
    Ok(build(account, account_type))
}

/// Stored type is upper-cased before matching. Only the by-type lookup uses this.
pub fn to_wire_normalized(account: &Account) -> Result<proto::Account, DomainError> {
    let account_type: AccountType = account.account_type.to_uppercase().parse()?;
    Ok(build(account, account_type))
}

/// Maps a bulk result, dropping records `map` rejects instead of failing.
pub fn to_wire_filtered<F>(accounts: &[Account], map: F) -> Vec<proto::Account>
where
    F: Fn(&Account) -> Result<proto::Account, DomainError>,
{
    accounts
        .iter()
        .filter_map(|account| match map(account) {
            Ok(wire) => Some(wire),
            Err(e) => {
                tracing::warn!("Skipping account {:?}: {}", account.id, e);
                None
            }
        })
        .collect()
}

/// Wire enum value to domain type; out-of-range values are rejected.
pub fn type_from_wire(value: i32) -> Option<AccountType> {
    proto::AccountType::try_from(value).ok().map(AccountType::from)
}

/// Validates an incoming account. The wire `id` is never copied: saving always
/// creates a record and the store assigns its id.
pub fn from_wire(wire: proto::Account) -> Result<Account, ApiError> {
    let account_type = type_from_wire(wire.account_type)
        .ok_or_else(|| ApiError::InvalidArgument(INVALID_ACCOUNT_TYPE.to_string()))?;

    Ok(Account::new(wire.balance, wire.creation_date, account_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, account_type: &str) -> Account {
        Account {
            id: Some(id),
            balance: -50.0,
            creation_date: "2023-06-01".to_string(),
            account_type: account_type.to_string(),
        }
    }

    #[test]
    fn test_wire_round_trip_keeps_fields_but_not_id() {
        let account = stored(2, "CURRENT");
        let wire = to_wire(&account).unwrap();
        assert_eq!(wire.id, "2");
        assert_eq!(wire.account_type, proto::AccountType::Current as i32);

        let back = from_wire(wire).unwrap();
        assert_eq!(back.id, None);
        assert_eq!(Account { id: account.id, ..back }, account);
    }

    #[test]
    fn test_exact_mapping_rejects_lowercase() {
        assert!(to_wire(&stored(1, "savings")).is_err());
        let wire = to_wire_normalized(&stored(1, "savings")).unwrap();
        assert_eq!(wire.account_type, proto::AccountType::Savings as i32);
    }

    #[test]
    fn test_filtered_drops_unmatchable_records() {
        let accounts = vec![stored(1, "CURRENT"), stored(2, "GOLD"), stored(3, "current")];

        let exact = to_wire_filtered(&accounts, to_wire);
        assert_eq!(exact.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["1"]);

        let normalized = to_wire_filtered(&accounts, to_wire_normalized);
        assert_eq!(normalized.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["1", "3"]);
    }

    #[test]
    fn test_from_wire_validation() {
        let mut wire = proto::Account {
            id: String::new(),
            balance: 200.0,
            creation_date: "2024-01-01".to_string(),
            account_type: 42,
        };
        assert!(matches!(from_wire(wire.clone()), Err(ApiError::InvalidArgument(m)) if m == INVALID_ACCOUNT_TYPE));

        wire.account_type = proto::AccountType::Current as i32;
        let account = from_wire(wire.clone()).unwrap();
        assert_eq!(account.id, None);
        assert_eq!(account.account_type, "CURRENT");

        // A client-supplied id, valid or not, is ignored.
        wire.id = "999".to_string();
        assert_eq!(from_wire(wire.clone()).unwrap().id, None);
        wire.id = "abc".to_string();
        assert_eq!(from_wire(wire).unwrap().id, None);
    }
}
