// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! Environment variable names and default values. Configuration is loaded
//! from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Directory holding the account database | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SESSION_TTL_SECS` | Idle lifetime of a login session | `1209600` (14 days) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the data directory path.
///
/// The account database file (`accounts.redb`) lives here.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Default data directory when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "/data";

/// File name of the account database inside the data directory.
pub const ACCOUNTS_DB_FILE: &str = "accounts.redb";

/// Environment variable overriding the session time-to-live, in seconds.
pub const SESSION_TTL_ENV: &str = "SESSION_TTL_SECS";

/// Default session time-to-live: 14 days.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 14 * 24 * 60 * 60;
