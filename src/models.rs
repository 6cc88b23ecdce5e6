// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the wallet authentication API. All
//! types derive `Serialize`/`Deserialize` and `ToSchema` for JSON handling
//! and OpenAPI documentation.
//!
//! ## Wallet Address Type
//!
//! The [`WalletAddress`] newtype wraps the client-supplied address string.
//! The address is used verbatim as the account key: case-sensitive and
//! untrimmed, with no checksum or format validation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client-supplied wallet address.
///
/// Used purely as a login key; the service performs no normalization, so
/// `0xABC` and `0xabc` are distinct accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WalletAddress {
    fn from(value: String) -> Self {
        WalletAddress(value)
    }
}

impl From<&str> for WalletAddress {
    fn from(value: &str) -> Self {
        WalletAddress(value.to_string())
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.0
    }
}

/// Body of POST `/wallet-connect/`.
///
/// `wallet_address` is optional at the serde level so that a missing field
/// is reported as "not provided" rather than as a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectRequest {
    /// The wallet address claimed by the client.
    #[serde(default)]
    pub wallet_address: Option<WalletAddress>,
}

/// The `{"status": ..., "message": ...}` envelope returned by the connect
/// and disconnect endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StatusResponse {
    /// "success" or "error".
    pub status: String,
    /// Human-readable outcome description.
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Response of GET `/app/get-wallet-address/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AddressResponse {
    /// Wallet address bound to the caller's session.
    pub address: WalletAddress,
}
