//! MongoDB persistence implementation

mod account_repo;
mod connection;

pub use account_repo::MongoAccountRepository;
pub use connection::{init_mongodb, MongoConnection};
