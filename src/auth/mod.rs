// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Cookie-bound server-side sessions for wallet login.
//!
//! ## Auth Flow
//!
//! 1. Client POSTs a wallet address to `/wallet-connect/`
//! 2. Server resolves or creates the matching account and opens a session
//! 3. The session ID travels in an HTTP-only `session_id` cookie
//! 4. Protected handlers take the [`CurrentAccount`] extractor, which maps
//!    the cookie back to the live session
//! 5. `/wallet-disconnect/` removes the session and clears the cookie
//!
//! ## Security
//!
//! - The wallet address is trusted as claimed; there is no signature
//!   challenge. Connecting with someone else's address logs in as them.
//! - Sessions live server-side and expire after a TTL (`SESSION_TTL_SECS`)
//! - The cookie is `HttpOnly` and `SameSite=Lax`

pub mod error;
pub mod extractor;
pub mod session;

pub use error::AuthError;
pub use extractor::CurrentAccount;
pub use session::{Session, SessionStore, SESSION_COOKIE};
