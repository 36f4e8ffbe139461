use crate::domain::error::DomainError;
use crate::domain::model::Account;
use crate::domain::repository::{AccountRepository, Result};
use super::DbConnection;
use rusqlite::{params, Row};

pub struct SqliteAccountRepository {
    pub conn: DbConnection,
}

impl SqliteAccountRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    fn query_list(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Account>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, row_to_account)?;

        let mut accounts = Vec::new();
        for account in rows {
            accounts.push(account?);
        }

        Ok(accounts)
    }
}

fn row_to_account(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: Some(row.get(0)?),
        balance: row.get(1)?,
        creation_date: row.get(2)?,
        account_type: row.get(3)?,
    })
}

impl AccountRepository for SqliteAccountRepository {
    fn find_all(&self) -> Result<Vec<Account>> {
        self.query_list(
            "SELECT id, balance, creation_date, type FROM accounts ORDER BY id ASC",
            params![],
        )
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let mut stmt = conn.prepare(
            "SELECT id, balance, creation_date, type FROM accounts WHERE id = ?",
        )?;

        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row_to_account(row)?))
        } else {
            Ok(None)
        }
    }

    fn find_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
        // `=` on TEXT is case-sensitive under the default BINARY collation
        self.query_list(
            "SELECT id, balance, creation_date, type FROM accounts WHERE type = ? ORDER BY id ASC",
            params![account_type],
        )
    }

    fn save(&self, account: &Account) -> Result<Account> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let id = match account.id {
            Some(id) => {
                conn.execute(
                    "INSERT OR REPLACE INTO accounts (id, balance, creation_date, type)
                     VALUES (?, ?, ?, ?)",
                    params![id, account.balance, account.creation_date, account.account_type],
                )?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO accounts (balance, creation_date, type) VALUES (?, ?, ?)",
                    params![account.balance, account.creation_date, account.account_type],
                )?;
                conn.last_insert_rowid()
            }
        };

        Ok(Account {
            id: Some(id),
            ..account.clone()
        })
    }

    fn exists_by_id(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| DomainError::Database(e.to_string()))?;

        conn.execute("DELETE FROM accounts WHERE id = ?", params![id])?;

        Ok(())
    }
}
