// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use tracing_subscriber::EnvFilter;

use wallet_gate::api::router;
use wallet_gate::auth::SessionStore;
use wallet_gate::config::{
    ACCOUNTS_DB_FILE, DATA_DIR_ENV, DEFAULT_DATA_DIR, DEFAULT_SESSION_TTL_SECS, SESSION_TTL_ENV,
};
use wallet_gate::state::AppState;
use wallet_gate::storage::AccountDatabase;

#[tokio::main]
async fn main() {
    init_tracing();

    // Open the account database
    let data_dir: PathBuf = env::var(DATA_DIR_ENV)
        .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
        .into();
    let db_path = data_dir.join(ACCOUNTS_DB_FILE);
    let accounts = AccountDatabase::open(&db_path).expect("Failed to open account database");

    // Session store with configured TTL
    let ttl_secs: u64 = env::var(SESSION_TTL_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_SECS);
    let sessions = SessionStore::new(Duration::from_secs(ttl_secs));

    let state = AppState::new(accounts, sessions);
    let app = router(state);

    // Parse bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, db = %db_path.display(), "Wallet Gate listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
