use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::login,
        error::route_not_found,
        health::healthz,
        posts::{create_post, get_post, list_posts},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// CORS headers are added to every response, errors included.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/auth/login", post(login))
        .route("/healthz", get(healthz))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use blogapi_core::auth::{
        secret_hash, AuthError, IdentityProvider, LoginRequest, SessionResponse, UserPool,
    };
    use blogapi_core::posts::Post;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::identity::MockIdentityProvider;
    use crate::storage::InMemoryRepository;

    const CLIENT_SECRET: &str = "client-secret";

    fn test_config() -> Config {
        let mut config = Config::default();
        config.user_pool_id = "us-east-1_test".to_string();
        config.user_pool_client_id = "app-client-id".to_string();
        config
    }

    fn state_with(repo: InMemoryRepository, identity: Arc<dyn IdentityProvider>) -> AppState {
        AppState::new(Arc::new(repo), identity, CLIENT_SECRET, &test_config())
    }

    fn test_state(repo: InMemoryRepository) -> AppState {
        let identity = MockIdentityProvider::new(CLIENT_SECRET).with_user("alice", "correct horse");
        state_with(repo, Arc::new(identity))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn send_post(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    fn three_posts() -> InMemoryRepository {
        InMemoryRepository::with_posts([
            Post::with_id("a", "A", "first", "2024-01-01"),
            Post::with_id("b", "B", "second", "2024-01-02"),
            Post::with_id("c", "C", "third", "2024-01-03"),
        ])
    }

    // ========================================================================
    // Posts
    // ========================================================================

    #[tokio::test]
    async fn test_list_posts_empty() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_get(app, "/posts").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "items": [], "next_url": null }));
    }

    #[tokio::test]
    async fn test_list_posts_follows_next_url() {
        let app = create_app(test_state(three_posts()));

        let response = send_get(app.clone(), "/posts?limit=2").await;
        assert_eq!(response.status(), StatusCode::OK);
        let first = body_json(response).await;
        assert_eq!(first["items"].as_array().unwrap().len(), 2);
        let next_url = first["next_url"].as_str().unwrap().to_string();
        assert!(next_url.starts_with("/posts?limit=2&start_key="));

        let response = send_get(app, &next_url).await;
        assert_eq!(response.status(), StatusCode::OK);
        let second = body_json(response).await;
        assert_eq!(second["items"].as_array().unwrap().len(), 1);
        assert!(second["next_url"].is_null());
    }

    #[tokio::test]
    async fn test_list_posts_empty_start_key_is_first_page() {
        let app = create_app(test_state(three_posts()));

        let json = body_json(send_get(app, "/posts?start_key=").await).await;

        assert_eq!(json["items"].as_array().unwrap().len(), 3);
        assert!(json["next_url"].is_null());
    }

    #[tokio::test]
    async fn test_list_posts_uses_configured_default_limit() {
        let mut state = test_state(three_posts());
        state.default_page_limit = 1;
        let app = create_app(state);

        let json = body_json(send_get(app, "/posts").await).await;

        assert_eq!(json["items"].as_array().unwrap().len(), 1);
        assert!(json["next_url"].as_str().unwrap().starts_with("/posts?limit=1&"));
    }

    #[tokio::test]
    async fn test_list_posts_invalid_limit() {
        for uri in ["/posts?limit=abc", "/posts?limit=0", "/posts?limit=-3"] {
            let app = create_app(test_state(InMemoryRepository::new()));

            let response = send_get(app, uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            let json = body_json(response).await;
            assert!(json["message"].as_str().unwrap().contains("Invalid limit"));
        }
    }

    #[tokio::test]
    async fn test_get_post() {
        let app = create_app(test_state(three_posts()));

        let response = send_get(app, "/posts/b").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "id": "b",
                "title": "B",
                "content": "second",
                "date": "2024-01-02",
            })
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_post() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/posts/nonexistent-id")
                    .header(header::ORIGIN, "https://blog.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "message": "Post not found" }));
    }

    #[tokio::test]
    async fn test_unknown_path_returns_message_json() {
        for uri in ["/posts/", "/drafts"] {
            let app = create_app(test_state(three_posts()));

            let response = send_get(app, uri).await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let json = body_json(response).await;
            assert_eq!(json["message"], format!("No route for {uri}"));
        }
    }

    #[tokio::test]
    async fn test_create_and_get_post() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(
            app.clone(),
            "/posts",
            r#"{"title":"T","content":"C","date":"2024-01-01"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(created["title"], "T");
        assert_eq!(created["content"], "C");
        assert_eq!(created["date"], "2024-01-01");

        let response = send_get(app, &format!("/posts/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_post_missing_field() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(app, "/posts", r#"{"title":"T","content":"C"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("date"));
    }

    #[tokio::test]
    async fn test_create_post_invalid_json() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(app, "/posts", "not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ========================================================================
    // Auth
    // ========================================================================

    #[tokio::test]
    async fn test_login_success() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(
            app,
            "/auth/login",
            r#"{"username":"alice","password":"correct horse"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["AuthenticationResult"]["AccessToken"],
            "mock-access-token-alice"
        );
        assert_eq!(json["AuthenticationResult"]["ExpiresIn"], 3600);
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(
            app,
            "/auth/login",
            r#"{"username":"alice","password":"wrong"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Incorrect username or password.");
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_post(app, "/auth/login", r#"{"username":"alice"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    struct FailingIdentity;

    #[async_trait::async_trait]
    impl IdentityProvider for FailingIdentity {
        async fn authenticate(
            &self,
            pool: &UserPool,
            login: &LoginRequest,
            provided_hash: &str,
        ) -> blogapi_core::auth::Result<SessionResponse> {
            assert_eq!(pool.client_id, "app-client-id");
            assert_eq!(
                provided_hash,
                secret_hash(&login.username, &pool.client_id, CLIENT_SECRET).unwrap()
            );
            Err(AuthError::Upstream("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_login_upstream_failure() {
        let app = create_app(state_with(
            InMemoryRepository::new(),
            Arc::new(FailingIdentity),
        ));

        let response = send_post(
            app,
            "/auth/login",
            r#"{"username":"alice","password":"pw"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    // ========================================================================
    // Health
    // ========================================================================

    #[tokio::test]
    async fn test_healthz() {
        let app = create_app(test_state(InMemoryRepository::new()));

        let response = send_get(app, "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": "ok" })
        );
    }
}
