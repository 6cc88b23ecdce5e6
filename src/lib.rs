// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet Gate - Wallet-Based Authentication Service
//!
//! This crate provides wallet-address login for a web application: a client
//! POSTs a wallet address, the service resolves or creates the matching
//! account and binds a cookie session to it. The address is trusted as
//! claimed (no signature challenge).
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Cookie sessions and the authentication gate
//! - `storage` - Embedded account database (redb)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
