// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Server-side session store.
//!
//! Sessions are explicit objects held in shared state and addressed by the
//! UUID carried in the `session_id` cookie. A session binds one account
//! (by wallet address) to one client.

use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::WalletAddress;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// An active login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session identifier, carried in the cookie.
    pub id: Uuid,
    /// Wallet address of the bound account.
    pub wallet_address: WalletAddress,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Build the cookie announcing this session to the client.
    ///
    /// `SameSite=Lax` keeps the cookie off cross-site POSTs, which is the
    /// CSRF mitigation for the cookie-authenticated endpoints.
    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, self.id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }
}

/// Cookie that clears the session cookie on the client.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Shared in-process session store with TTL-based expiry.
#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or(Duration::MAX),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Establish a new session bound to `wallet_address`.
    pub async fn create(&self, wallet_address: WalletAddress) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            wallet_address,
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Look up a live session. Expired entries are dropped on access.
    pub async fn get(&self, id: &Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some(session) if Utc::now() - session.created_at <= self.ttl => {
                Some(session.clone())
            }
            Some(_) => {
                sessions.remove(id);
                None
            }
            None => None,
        }
    }

    /// Terminate a session. Returns whether one existed.
    pub async fn remove(&self, id: &Uuid) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Number of live entries (expired-but-unreaped included).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(
            crate::config::DEFAULT_SESSION_TTL_SECS,
        ))
    }
}
