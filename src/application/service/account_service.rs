use crate::domain::model::Account;
use crate::domain::repository::{AccountRepository, Result};

pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_all(&self) -> Result<Vec<Account>> {
        self.repo.find_all()
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
        self.repo.find_by_type(account_type)
    }

    pub fn save(&self, account: Account) -> Result<Account> {
        self.repo.save(&account)
    }

    /// Returns `false` when there was nothing to delete.
    pub fn delete_by_id(&self, id: i64) -> Result<bool> {
        if self.repo.exists_by_id(id)? {
            self.repo.delete_by_id(id)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::model::AccountType;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<BTreeMap<i64, Account>>,
        deletes: Mutex<Vec<i64>>,
    }

    impl AccountRepository for MemoryRepository {
        fn find_all(&self) -> Result<Vec<Account>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|a| a.account_type == account_type)
                .cloned()
                .collect())
        }

        fn save(&self, account: &Account) -> Result<Account> {
            let mut rows = self.rows.lock().unwrap();
            let id = account
                .id
                .unwrap_or_else(|| rows.keys().next_back().map_or(1, |last| last + 1));
            let saved = Account {
                id: Some(id),
                ..account.clone()
            };
            rows.insert(id, saved.clone());
            Ok(saved)
        }

        fn exists_by_id(&self, id: i64) -> Result<bool> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }

        fn delete_by_id(&self, id: i64) -> Result<()> {
            self.deletes.lock().unwrap().push(id);
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    struct FailingRepository;

    impl AccountRepository for FailingRepository {
        fn find_all(&self) -> Result<Vec<Account>> {
            Err(DomainError::Database("unavailable".to_string()))
        }

        fn find_by_id(&self, _id: i64) -> Result<Option<Account>> {
            Err(DomainError::Database("unavailable".to_string()))
        }

        fn find_by_type(&self, _account_type: &str) -> Result<Vec<Account>> {
            Err(DomainError::Database("unavailable".to_string()))
        }

        fn save(&self, _account: &Account) -> Result<Account> {
            Err(DomainError::Database("unavailable".to_string()))
        }

        fn exists_by_id(&self, _id: i64) -> Result<bool> {
            Err(DomainError::Database("unavailable".to_string()))
        }

        fn delete_by_id(&self, _id: i64) -> Result<()> {
            Err(DomainError::Database("unavailable".to_string()))
        }
    }

    fn service_with_two_accounts() -> AccountService<MemoryRepository> {
        let service = AccountService::new(MemoryRepository::default());
        service
            .save(Account::new(100.0, "2023-05-01".to_string(), AccountType::Savings))
            .unwrap();
        service
            .save(Account::new(-50.0, "2023-06-01".to_string(), AccountType::Current))
            .unwrap();
        service
    }

    #[test]
    fn test_find_by_id_absent_is_none() {
        let service = service_with_two_accounts();
        assert!(service.find_by_id(2).unwrap().is_some());
        assert!(service.find_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_find_by_type_passes_text_through() {
        let service = service_with_two_accounts();
        assert_eq!(service.find_by_type("CURRENT").unwrap().len(), 1);
        assert!(service.find_by_type("current").unwrap().is_empty());
    }

    #[test]
    fn test_delete_checks_existence_first() {
        let service = service_with_two_accounts();

        assert!(!service.delete_by_id(99).unwrap());
        assert!(service.repo.deletes.lock().unwrap().is_empty());

        assert!(service.delete_by_id(1).unwrap());
        assert_eq!(*service.repo.deletes.lock().unwrap(), vec![1]);
        assert_eq!(service.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_returns_assigned_id() {
        let service = service_with_two_accounts();
        let saved = service
            .save(Account::new(200.0, "2024-01-01".to_string(), AccountType::Current))
            .unwrap();
        assert_eq!(saved.id, Some(3));
        assert_eq!(saved.balance, 200.0);
    }

    #[test]
    fn test_store_errors_propagate() {
        let service = AccountService::new(FailingRepository);
        assert!(matches!(service.find_all(), Err(DomainError::Database(_))));
        assert!(matches!(service.delete_by_id(1), Err(DomainError::Database(_))));
    }
}
