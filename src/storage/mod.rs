// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Persistent Storage Module
//!
//! Account records live in an embedded redb database (pure Rust, ACID).
//! The database file sits under `DATA_DIR` (see [`crate::config`]).
//!
//! ## Storage Layout
//!
//! ```text
//! {DATA_DIR}/
//!   accounts.redb     # accounts table: wallet address → account record
//! ```

pub mod accounts;

pub use accounts::{Account, AccountDatabase, AccountDbError, AccountDbResult};
