// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::SessionStore;
use crate::storage::AccountDatabase;

/// Shared application state: the account database and the session store.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountDatabase>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(accounts: AccountDatabase, sessions: SessionStore) -> Self {
        Self {
            accounts: Arc::new(accounts),
            sessions,
        }
    }
}
