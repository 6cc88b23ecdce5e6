// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity query endpoint.

use axum::{extract::State, Json};

use crate::{
    auth::{AuthError, CurrentAccount},
    models::AddressResponse,
    state::AppState,
};

/// Return the wallet address bound to the caller's session.
///
/// The [`CurrentAccount`] extractor is the access-control gate; on top of
/// that the account is re-read from the store, so a session whose account
/// has vanished is reported as unauthenticated rather than a fault.
#[utoipa::path(
    get,
    path = "/app/get-wallet-address/",
    tag = "Account",
    responses(
        (status = 200, description = "Wallet address of the session's account", body = AddressResponse),
        (status = 401, description = "No live session"),
    )
)]
pub async fn get_wallet_address(
    State(state): State<AppState>,
    CurrentAccount(session): CurrentAccount,
) -> Result<Json<AddressResponse>, AuthError> {
    let account = state
        .accounts
        .get(&session.wallet_address)
        .map_err(|e| {
            tracing::error!(error = %e, "account lookup failed during identity query");
            AuthError::AccountMissing
        })?
        .ok_or(AuthError::AccountMissing)?;

    Ok(Json(AddressResponse {
        address: account.wallet_address,
    }))
}
