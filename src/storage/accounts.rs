// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded account database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `accounts`: wallet address → serialized Account (JSON bytes)
//!
//! The wallet address is the table key, so uniqueness is enforced by the
//! store itself. [`AccountDatabase::get_or_create`] performs the lookup and
//! the conditional insert inside a single write transaction; concurrent
//! connects with the same unseen address serialize on the transaction and
//! cannot produce duplicate accounts.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::WalletAddress;

/// Primary table: wallet address → serialized Account (JSON bytes).
const ACCOUNTS: TableDefinition<&str, &[u8]> = TableDefinition::new("accounts");

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AccountDbError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type AccountDbResult<T> = Result<T, AccountDbError>;

// =============================================================================
// Account Record
// =============================================================================

/// A stored account, keyed by its wallet address.
///
/// The wallet address is the natural key; there is no separate synthetic ID.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Account {
    /// The wallet address that identifies this account.
    pub wallet_address: WalletAddress,
    /// When the account was first created (first connect).
    pub created_at: DateTime<Utc>,
    /// When the account last established a session.
    pub last_login_at: DateTime<Utc>,
    /// Whether the account may log in.
    pub is_active: bool,
}

impl Account {
    fn new(wallet_address: WalletAddress, now: DateTime<Utc>) -> Self {
        Self {
            wallet_address,
            created_at: now,
            last_login_at: now,
            is_active: true,
        }
    }
}

// =============================================================================
// AccountDatabase
// =============================================================================

/// Embedded ACID account database.
pub struct AccountDatabase {
    db: Database,
}

impl AccountDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> AccountDbResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create the table so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ACCOUNTS)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Resolve the account for `address`, creating it if absent.
    ///
    /// Returns the account and whether it was created by this call. On the
    /// existing-account path, `last_login_at` is refreshed. Lookup and insert
    /// run in one write transaction, so the operation is insert-if-absent at
    /// the storage layer.
    pub fn get_or_create(&self, address: &WalletAddress) -> AccountDbResult<(Account, bool)> {
        let now = Utc::now();

        let write_txn = self.db.begin_write()?;
        let (account, created) = {
            let mut table = write_txn.open_table(ACCOUNTS)?;

            let existing: Option<Account> = match table.get(address.as_str())? {
                Some(value) => Some(serde_json::from_slice(value.value())?),
                None => None,
            };

            let (account, created) = match existing {
                Some(mut account) => {
                    account.last_login_at = now;
                    (account, false)
                }
                None => (Account::new(address.clone(), now), true),
            };

            let json = serde_json::to_vec(&account)?;
            table.insert(address.as_str(), json.as_slice())?;

            (account, created)
        };
        write_txn.commit()?;

        if created {
            tracing::info!(wallet_address = %account.wallet_address, "account created");
        }

        Ok((account, created))
    }

    /// Look up an account by wallet address.
    pub fn get(&self, address: &WalletAddress) -> AccountDbResult<Option<Account>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ACCOUNTS)?;
        match table.get(address.as_str())? {
            Some(value) => {
                let account: Account = serde_json::from_slice(value.value())?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    /// Number of stored accounts.
    pub fn count(&self) -> AccountDbResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ACCOUNTS)?;
        Ok(table.len()?)
    }
}
