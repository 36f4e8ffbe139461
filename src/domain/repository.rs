use crate::domain::error::DomainError;
use crate::domain::model::Account;

pub type Result<T> = std::result::Result<T, DomainError>;

/// Record store for Account entity.
///
/// Implementations assign `id` on first save; saving an account that already
/// carries an id overwrites that record.
pub trait AccountRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Account>>;
    fn find_by_id(&self, id: i64) -> Result<Option<Account>>;
    /// Exact match against the stored text, no case folding.
    fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>>;
    fn save(&self, account: &Account) -> Result<Account>;
    fn exists_by_id(&self, id: i64) -> Result<bool>;
    fn delete_by_id(&self, id: i64) -> Result<()>;
}

// Implement AccountRepository for Box<dyn AccountRepository> to allow dynamic dispatch
impl AccountRepository for Box<dyn AccountRepository> {
    fn find_all(&self) -> Result<Vec<Account>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        (**self).find_by_id(id)
    }

    fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
        (**self).find_by_type(account_type)
    }

    fn save(&self, account: &Account) -> Result<Account> {
        (**self).save(account)
    }

    fn exists_by_id(&self, id: i64) -> Result<bool> {
        (**self).exists_by_id(id)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        (**self).delete_by_id(id)
    }
}
