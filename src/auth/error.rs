// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// Every variant renders as `{"error": "User not authenticated"}` on the
/// wire; the distinction only matters for logging and tests.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No session cookie, or it does not name a live session
    NotAuthenticated,
    /// The session exists but its account is gone from the store
    AccountMissing,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User not authenticated")
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
