//! MongoDB Account Repository implementation
//!
//! Documents are keyed by a numeric `_id` allocated from the `counters`
//! collection, so ids look the same as with the SQLite backend.
//! Ordering is consistent with SQLite: id ASC.

use crate::domain::error::DomainError;
use crate::domain::model::Account;
use crate::domain::repository::{AccountRepository, Result};
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReplaceOptions, ReturnDocument};
use mongodb::Collection;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;

use super::connection::{ACCOUNTS_COLLECTION, COUNTERS_COLLECTION};
use super::MongoConnection;

/// MongoDB document wrapper for Account with _id field
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct AccountDocument {
    #[serde(rename = "_id")]
    id: i64,
    balance: f64,
    creation_date: String,
    #[serde(rename = "type")]
    account_type: String,
}

impl AccountDocument {
    fn new(id: i64, account: &Account) -> Self {
        Self {
            id,
            balance: account.balance,
            creation_date: account.creation_date.clone(),
            account_type: account.account_type.clone(),
        }
    }
}

impl From<AccountDocument> for Account {
    fn from(doc: AccountDocument) -> Self {
        Self {
            id: Some(doc.id),
            balance: doc.balance,
            creation_date: doc.creation_date,
            account_type: doc.account_type,
        }
    }
}

pub struct MongoAccountRepository {
    collection: Collection<AccountDocument>,
    counters: Collection<Document>,
    /// Tokio runtime handle captured at creation time, so the sync trait
    /// methods can drive async driver calls.
    runtime: Handle,
}

impl MongoAccountRepository {
    pub fn new(conn: Arc<MongoConnection>, runtime: Handle) -> Self {
        Self {
            collection: conn.collection(ACCOUNTS_COLLECTION),
            counters: conn.collection(COUNTERS_COLLECTION),
            runtime,
        }
    }

    /// block_in_place keeps this safe when called from a runtime worker thread.
    fn block_on<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| self.runtime.block_on(fut))
    }

    fn find_sorted(&self, filter: Document) -> Result<Vec<Account>> {
        let collection = self.collection.clone();

        self.block_on(async move {
            use futures::TryStreamExt;

            let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

            let cursor = collection.find(filter).with_options(options).await?;
            let docs: Vec<AccountDocument> = cursor.try_collect().await?;

            Ok::<_, DomainError>(docs.into_iter().map(Account::from).collect())
        })
    }
}

/// Atomically bump and return the accounts sequence.
async fn next_id(counters: &Collection<Document>) -> Result<i64> {
    let options = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();

    let counter = counters
        .find_one_and_update(
            doc! { "_id": ACCOUNTS_COLLECTION },
            doc! { "$inc": { "seq": 1_i64 } },
        )
        .with_options(options)
        .await?
        .ok_or_else(|| DomainError::Database("account id counter missing".to_string()))?;

    counter
        .get_i64("seq")
        .map_err(|e| DomainError::Database(e.to_string()))
}

impl AccountRepository for MongoAccountRepository {
    fn find_all(&self) -> Result<Vec<Account>> {
        self.find_sorted(doc! {})
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        let collection = self.collection.clone();

        self.block_on(async move {
            let found = collection.find_one(doc! { "_id": id }).await?;
            Ok::<_, DomainError>(found.map(Account::from))
        })
    }

    fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
        self.find_sorted(doc! { "type": account_type })
    }

    fn save(&self, account: &Account) -> Result<Account> {
        let collection = self.collection.clone();
        let counters = self.counters.clone();
        let account = account.clone();

        self.block_on(async move {
            let doc = match account.id {
                Some(id) => {
                    let doc = AccountDocument::new(id, &account);
                    let options = ReplaceOptions::builder().upsert(true).build();
                    collection
                        .replace_one(doc! { "_id": id }, &doc)
                        .with_options(options)
                        .await?;
                    doc
                }
                None => {
                    // insert_one fails on a taken _id rather than overwriting it.
                    let doc = AccountDocument::new(next_id(&counters).await?, &account);
                    collection.insert_one(&doc).await?;
                    doc
                }
            };

            Ok::<_, DomainError>(Account::from(doc))
        })
    }

    fn exists_by_id(&self, id: i64) -> Result<bool> {
        let collection = self.collection.clone();

        self.block_on(async move {
            let count = collection.count_documents(doc! { "_id": id }).await?;
            Ok::<_, DomainError>(count > 0)
        })
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let collection = self.collection.clone();

        self.block_on(async move {
            collection.delete_one(doc! { "_id": id }).await?;
            Ok::<_, DomainError>(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_conversion_keeps_stored_text() {
        let mut account = Account::new(
            12.5,
            "2024-02-29".to_string(),
            crate::domain::model::AccountType::Savings,
        );
        account.account_type = "savings".to_string();

        let doc = AccountDocument::new(7, &account);
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert_eq!(bson.get_i64("_id").unwrap(), 7);
        assert_eq!(bson.get_str("type").unwrap(), "savings");

        let back = Account::from(doc);
        assert_eq!(back.id, Some(7));
        assert_eq!(back.account_type, "savings");
        assert_eq!(back.balance, 12.5);
    }
}
