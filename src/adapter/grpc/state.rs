use crate::application::service::AccountService;
use crate::domain::repository::AccountRepository;
use std::sync::Arc;

/// Type alias for dynamic repository type
pub type DynAccountRepository = Box<dyn AccountRepository>;
pub type SharedAccountService = Arc<AccountService<DynAccountRepository>>;

pub struct AppState {
    pub account_service: SharedAccountService,
}

impl AppState {
    pub fn new(account_repo: DynAccountRepository) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(account_repo)),
        }
    }
}
