mod account;

pub use account::{Account, AccountType};
