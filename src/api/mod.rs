// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{AddressResponse, ConnectRequest, StatusResponse, WalletAddress},
    state::AppState,
};

pub mod account;
pub mod auth;
pub mod health;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/wallet-connect/",
            post(auth::connect_wallet).fallback(auth::connect_method_not_allowed),
        )
        .route("/wallet-disconnect/", any(auth::disconnect_wallet))
        .route("/app/get-wallet-address/", get(account::get_wallet_address))
        .route("/health", get(health::liveness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // The web front end calls the connect/disconnect endpoints
        // cross-origin; CSRF exposure is bounded by the SameSite=Lax
        // session cookie rather than a per-request token.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::connect_wallet,
        auth::disconnect_wallet,
        account::get_wallet_address,
        health::liveness
    ),
    components(
        schemas(
            WalletAddress,
            ConnectRequest,
            StatusResponse,
            AddressResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Wallet connect and disconnect"),
        (name = "Account", description = "Session-bound account queries"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionStore;
    use crate::storage::AccountDatabase;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_app() -> (Router, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let accounts = AccountDatabase::open(&dir.path().join("accounts.redb"))
            .expect("Failed to open database");
        let state = AppState::new(accounts, SessionStore::default());
        (router(state), dir)
    }

    fn connect_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/wallet-connect/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let (app, _dir) = test_app();
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn connect_then_query_then_disconnect() {
        let (app, _dir) = test_app();

        // Connect with a wallet address
        let response = app
            .clone()
            .oneshot(connect_request(r#"{"wallet_address":"0xABC"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie is set")
            .to_str()
            .unwrap();
        let cookie_pair = set_cookie.split(';').next().unwrap().to_string();
        assert_eq!(
            body_string(response).await,
            r#"{"status":"success","message":"User logged in successfully"}"#
        );

        // The session resolves to the connected address
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/app/get-wallet-address/")
                    .header(header::COOKIE, &cookie_pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"address":"0xABC"}"#);

        // Disconnect
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/wallet-disconnect/")
                    .header(header::COOKIE, &cookie_pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"status":"success","message":"User logged out successfully"}"#
        );

        // The old cookie no longer authenticates
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/app/get-wallet-address/")
                    .header(header::COOKIE, &cookie_pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"User not authenticated"}"#
        );
    }

    #[tokio::test]
    async fn connect_rejects_non_post_with_405() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/wallet-connect/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_string(response).await,
            r#"{"status":"error","message":"Invalid request method"}"#
        );
    }

    #[tokio::test]
    async fn connect_with_missing_address_returns_400() {
        let (app, _dir) = test_app();

        let response = app.oneshot(connect_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"status":"error","message":"Wallet address not provided"}"#
        );
    }

    #[tokio::test]
    async fn query_without_session_returns_401() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/app/get-wallet-address/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"User not authenticated"}"#
        );
    }

    #[tokio::test]
    async fn disconnect_accepts_any_method() {
        let (app, _dir) = test_app();

        for method in ["POST", "GET", "DELETE"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/wallet-disconnect/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
