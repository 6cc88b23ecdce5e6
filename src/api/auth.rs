// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet connect/disconnect endpoints.
//!
//! Connect resolves or creates the account for the claimed wallet address
//! and opens a session; disconnect tears the session down. The body is read
//! raw and parsed in-handler so that malformed JSON maps to the same
//! `{"status":"error"}` envelope as the other validation failures.

use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{
    auth::{session, SESSION_COOKIE},
    error::ApiError,
    models::{ConnectRequest, StatusResponse},
    state::AppState,
};

/// Log in with a claimed wallet address.
///
/// The address is trusted as-is: no signature challenge, no normalization.
/// The matching account is created on first sight.
#[utoipa::path(
    post,
    path = "/wallet-connect/",
    request_body = ConnectRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Session established", body = StatusResponse),
        (status = 400, description = "Missing or empty wallet address", body = StatusResponse),
        (status = 405, description = "Method other than POST", body = StatusResponse),
        (status = 500, description = "Account store fault", body = StatusResponse),
    )
)]
pub async fn connect_wallet(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<StatusResponse>), ApiError> {
    let request: ConnectRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Request body is not valid JSON: {e}")))?;

    let address = match request.wallet_address {
        Some(address) if !address.is_empty() => address,
        _ => return Err(ApiError::bad_request("Wallet address not provided")),
    };

    let (account, created) = state
        .accounts
        .get_or_create(&address)
        .map_err(ApiError::internal)?;

    // Session state is only touched after the account resolved.
    let session = state.sessions.create(account.wallet_address).await;
    tracing::info!(wallet_address = %session.wallet_address, created, "wallet connected");

    Ok((
        jar.add(session.cookie()),
        Json(StatusResponse::success("User logged in successfully")),
    ))
}

/// Fallback for non-POST requests to `/wallet-connect/`.
pub async fn connect_method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Invalid request method")
}

/// Log out. Succeeds whether or not a session exists.
#[utoipa::path(
    post,
    path = "/wallet-disconnect/",
    tag = "Auth",
    responses(
        (status = 200, description = "Session terminated (or none existed)", body = StatusResponse),
    )
)]
pub async fn disconnect_wallet(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<StatusResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session_id) = Uuid::parse_str(cookie.value()) {
            if state.sessions.remove(&session_id).await {
                tracing::info!(%session_id, "wallet disconnected");
            }
        }
    }

    (
        jar.remove(session::removal_cookie()),
        Json(StatusResponse::success("User logged out successfully")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionStore;
    use crate::models::WalletAddress;
    use crate::storage::AccountDatabase;
    use axum::http::StatusCode;
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let accounts = AccountDatabase::open(&dir.path().join("accounts.redb"))
            .expect("Failed to open database");
        (AppState::new(accounts, SessionStore::default()), dir)
    }

    fn connect_body(address: &str) -> Bytes {
        Bytes::from(format!(r#"{{"wallet_address":"{address}"}}"#))
    }

    #[tokio::test]
    async fn connect_creates_account_and_session() {
        let (state, _dir) = test_state();

        let (jar, Json(response)) = connect_wallet(
            State(state.clone()),
            CookieJar::new(),
            connect_body("0xABC"),
        )
        .await
        .expect("connect succeeds");

        assert_eq!(response, StatusResponse::success("User logged in successfully"));
        assert!(jar.get(SESSION_COOKIE).is_some());

        let account = state
            .accounts
            .get(&WalletAddress::from("0xABC"))
            .unwrap()
            .expect("account was created");
        assert_eq!(account.wallet_address, WalletAddress::from("0xABC"));
        assert_eq!(state.sessions.len().await, 1);
    }

    #[tokio::test]
    async fn connect_twice_reuses_the_account() {
        let (state, _dir) = test_state();

        for _ in 0..2 {
            connect_wallet(
                State(state.clone()),
                CookieJar::new(),
                connect_body("0xABC"),
            )
            .await
            .expect("connect succeeds");
        }

        assert_eq!(state.accounts.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn connect_rejects_missing_address() {
        let (state, _dir) = test_state();

        let err = connect_wallet(State(state.clone()), CookieJar::new(), Bytes::from("{}"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Wallet address not provided");
        assert_eq!(state.accounts.count().unwrap(), 0);
        assert_eq!(state.sessions.len().await, 0);
    }

    #[tokio::test]
    async fn connect_rejects_empty_address() {
        let (state, _dir) = test_state();

        let err = connect_wallet(State(state.clone()), CookieJar::new(), connect_body(""))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Wallet address not provided");
        assert_eq!(state.accounts.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn connect_rejects_unparseable_body() {
        let (state, _dir) = test_state();

        let err = connect_wallet(
            State(state.clone()),
            CookieJar::new(),
            Bytes::from("not json"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(state.accounts.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn method_fallback_returns_405() {
        let err = connect_method_not_allowed().await;
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message, "Invalid request method");
    }

    #[tokio::test]
    async fn disconnect_removes_the_session() {
        let (state, _dir) = test_state();
        let session = state.sessions.create(WalletAddress::from("0xABC")).await;

        let jar = CookieJar::new().add(session.cookie());
        let (_jar, Json(response)) = disconnect_wallet(State(state.clone()), jar).await;

        assert_eq!(
            response,
            StatusResponse::success("User logged out successfully")
        );
        assert!(state.sessions.get(&session.id).await.is_none());
    }

    #[tokio::test]
    async fn disconnect_without_session_still_succeeds() {
        let (state, _dir) = test_state();

        let (_jar, Json(response)) = disconnect_wallet(State(state), CookieJar::new()).await;

        assert_eq!(
            response,
            StatusResponse::success("User logged out successfully")
        );
    }

    #[tokio::test]
    async fn disconnect_with_garbage_cookie_still_succeeds() {
        let (state, _dir) = test_state();
        let jar = CookieJar::new().add(
            axum_extra::extract::cookie::Cookie::new(SESSION_COOKIE, "not-a-uuid"),
        );

        let (_jar, Json(response)) = disconnect_wallet(State(state), jar).await;
        assert_eq!(response.status, "success");
    }
}
