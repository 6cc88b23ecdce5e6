// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the session-bound account.
//!
//! Use the `CurrentAccount` extractor in handlers to require a live session:
//!
//! ```rust,ignore
//! async fn my_handler(CurrentAccount(session): CurrentAccount) -> impl IntoResponse {
//!     // session.wallet_address is the authenticated identity
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use super::{AuthError, Session, SESSION_COOKIE};
use crate::state::AppState;

/// Extractor that rejects requests without a live session.
///
/// Reads the `session_id` cookie, parses it as a UUID and resolves it in
/// the session store. Any missing or stale step rejects with 401.
pub struct CurrentAccount(pub Session);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar.get(SESSION_COOKIE).ok_or(AuthError::NotAuthenticated)?;

        let session_id =
            Uuid::parse_str(cookie.value()).map_err(|_| AuthError::NotAuthenticated)?;

        let session = state
            .sessions
            .get(&session_id)
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        Ok(CurrentAccount(session))
    }
}
