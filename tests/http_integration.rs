//! Integration tests for the REST API.
//!
//! Sends requests through the full axum router (auth middleware, tower
//! layers, handlers) backed by the in-memory store and real JWTs.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use cafe_booking::adapters::http::{app_router, AppState};
use cafe_booking::adapters::{Argon2PasswordHasher, InMemoryStore, JwtCredentialService};
use cafe_booking::config::{AuthConfig, ServerConfig};
use cafe_booking::domain::account::User;
use cafe_booking::domain::foundation::{DomainError, Role, Timestamp, UserId};
use cafe_booking::domain::stats::{StatsSnapshot, DEFAULT_UNIT_PRICE};
use cafe_booking::ports::{StatsReader, TokenIssuer};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: Arc<InMemoryStore>,
    tokens: Arc<JwtCredentialService>,
}

impl TestApp {
    fn new() -> Self {
        Self::build(|_, _| {})
    }

    /// Lets a test swap ports or server settings before the router is built.
    fn build(configure: impl FnOnce(&mut AppState, &mut ServerConfig)) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(JwtCredentialService::new(&AuthConfig {
            jwt_secret: SecretString::new("http-test-secret-0123456789abcdef0123".to_string()),
            token_ttl_days: 7,
            issuer: "cafe-booking".to_string(),
            ..Default::default()
        }));
        let mut state = AppState::with_store(
            store.clone(),
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
            tokens.clone(),
            DEFAULT_UNIT_PRICE,
        );
        let mut server = ServerConfig::default();
        configure(&mut state, &mut server);
        Self {
            router: app_router(state, &server),
            store,
            tokens,
        }
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Signs up and returns the token.
    async fn signup(&self, name: &str, role: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/signup",
                None,
                Some(json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "password": "pa55word",
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    fn admin_token(&self) -> String {
        let user = User {
            id: UserId::new(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            phone: None,
            role: Role::Admin,
            created_at: Timestamp::now(),
        };
        let token = self.tokens.issue(&user.identity()).unwrap().token;
        self.store.insert_user(user, "unused").unwrap();
        token
    }

    async fn create_cafe(&self, token: &str, capacity: i64) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/cafes",
                Some(token),
                Some(json!({ "name": "Blue Tokai", "location": "Delhi", "capacity": capacity })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["cafe_id"].as_str().unwrap().to_string()
    }

    async fn book(&self, token: &str, cafe_id: &str, people: i64) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/api/bookings",
            Some(token),
            Some(json!({
                "cafe_id": cafe_id,
                "booking_date": "2025-07-14",
                "booking_time": "09:00",
                "people_count": people,
            })),
        )
        .await
    }
}

// =============================================================================
// Health and Auth
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn signup_cannot_request_admin() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "name": "Mallory", "email": "m@example.com", "password": "x", "role": "admin" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["role"], "customer");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = TestApp::new();
    app.signup("Nina", "customer").await;
    let (status, body) = app
        .send(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({ "name": "Nina", "email": "NINA@example.com", "password": "y" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn login_and_me() {
    let app = TestApp::new();
    app.signup("Omar", "owner").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "omar@example.com", "password": "nope" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email or password");

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "omar@example.com", "password": "pa55word" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = app.send("GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "omar@example.com");
    assert_eq!(body["user"]["role"], "owner");
}

#[tokio::test]
async fn protected_routes_distinguish_missing_and_bad_tokens() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");

    let (status, body) = app.send("GET", "/api/auth/me", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

// =============================================================================
// Cafes
// =============================================================================

#[tokio::test]
async fn cafe_crud_respects_ownership() {
    let app = TestApp::new();
    let owner = app.signup("Priya", "owner").await;
    let rival = app.signup("Qadir", "owner").await;
    let customer = app.signup("Rhea", "customer").await;

    let (status, _) = app
        .send("POST", "/api/cafes", Some(&customer), Some(json!({ "name": "X", "capacity": 2 })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let cafe_id = app.create_cafe(&owner, 20).await;

    let (status, body) = app.send("GET", "/api/cafes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafes"].as_array().unwrap().len(), 1);

    let (status, body) = app.send("GET", &format!("/api/cafes/{cafe_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafe"]["capacity"], 20);

    let (status, body) = app.send("GET", "/api/cafes/my", Some(&rival), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["cafes"].as_array().unwrap().is_empty());

    let update = json!({ "name": "Blue Tokai Roasters", "capacity": 25 });
    let (status, _) = app
        .send("PUT", &format!("/api/cafes/{cafe_id}"), Some(&rival), Some(update.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send("PUT", &format!("/api/cafes/{cafe_id}"), Some(&owner), Some(update))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cafe updated successfully");
    assert_eq!(body["cafe"]["name"], "Blue Tokai Roasters");

    let (status, body) = app
        .send("DELETE", &format!("/api/cafes/{cafe_id}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cafe deleted successfully");

    let (status, _) = app.send("GET", &format!("/api/cafes/{cafe_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_cafe_ids_are_not_found() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/api/cafes/42", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cafe not found");
}

#[tokio::test]
async fn unprivileged_roles_see_forbidden_whatever_the_id_looks_like() {
    let app = TestApp::new();
    let customer = app.signup("Priya", "customer").await;
    let owner = app.signup("Ravi", "owner").await;
    let well_formed = uuid::Uuid::new_v4().to_string();

    for id in ["not-a-uuid", well_formed.as_str()] {
        let (status, _) = app
            .send(
                "PUT",
                &format!("/api/bookings/{id}/status"),
                Some(&customer),
                Some(json!({ "status": "confirmed" })),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "status change, id {id}");

        let (status, _) = app
            .send("DELETE", &format!("/api/bookings/{id}"), Some(&owner), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "booking cancel, id {id}");

        let (status, _) = app
            .send("DELETE", &format!("/api/cafes/{id}"), Some(&customer), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "cafe delete, id {id}");

        let (status, _) = app
            .send(
                "PUT",
                &format!("/api/cafes/{id}"),
                Some(&customer),
                Some(json!({ "name": "X", "location": "Y", "capacity": 4 })),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "cafe update, id {id}");
    }

    // Admitted roles still get the not-found answer for garbage ids.
    let (status, body) = app
        .send("DELETE", "/api/cafes/not-a-uuid", Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cafe not found");
}

#[tokio::test]
async fn cafe_with_bookings_cannot_be_deleted() {
    let app = TestApp::new();
    let owner = app.signup("Sana", "owner").await;
    let customer = app.signup("Tara", "customer").await;
    let cafe_id = app.create_cafe(&owner, 4).await;
    app.book(&customer, &cafe_id, 2).await;

    let (status, body) = app
        .send("DELETE", &format!("/api/cafes/{cafe_id}"), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let app = TestApp::new();
    let owner = app.signup("Uma", "owner").await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/cafes")
        .header("Authorization", format!("Bearer {owner}"))
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");
}

// =============================================================================
// Bookings
// =============================================================================

#[tokio::test]
async fn booking_lifecycle_over_http() {
    let app = TestApp::new();
    let owner = app.signup("Vikram", "owner").await;
    let customer = app.signup("Wafa", "customer").await;
    let admin = app.admin_token();
    let cafe_id = app.create_cafe(&owner, 4).await;

    let (status, body) = app.book(&customer, &cafe_id, 4).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Booking created successfully");
    let booking_id = body["booking_id"].as_str().unwrap().to_string();

    let (status, body) = app.book(&customer, &cafe_id, 5).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Exceeds cafe capacity");

    let status_uri = format!("/api/bookings/{booking_id}/status");
    let (status, body) = app
        .send("PUT", &status_uri, Some(&owner), Some(json!({ "status": "confirmed" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Booking confirmed");
    assert_eq!(body["booking"]["status"], "confirmed");

    let (status, _) = app
        .send("DELETE", &format!("/api/bookings/{booking_id}"), Some(&customer), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app
        .send("PUT", &status_uri, Some(&admin), Some(json!({ "status": "cancelled" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["status"], "cancelled");

    let (status, _) = app
        .send("PUT", &status_uri, Some(&owner), Some(json!({ "status": "confirmed" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.send("GET", "/api/bookings/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["totalBookings"], 1);
    assert_eq!(body["stats"]["estimatedRevenue"], 0.0);
}

#[tokio::test]
async fn booking_views_are_scoped_by_role() {
    let app = TestApp::new();
    let owner = app.signup("Xavier", "owner").await;
    let customer = app.signup("Yamini", "customer").await;
    let admin = app.admin_token();
    let cafe_id = app.create_cafe(&owner, 8).await;
    app.book(&customer, &cafe_id, 3).await;

    let (status, body) = app.send("GET", "/api/bookings/my", Some(&customer), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"][0]["cafe_name"], "Blue Tokai");
    assert_eq!(body["bookings"][0]["status"], "pending");

    let (status, body) = app.send("GET", "/api/bookings/owner", Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"][0]["customer_email"], "yamini@example.com");

    let (status, _) = app.send("GET", "/api/bookings/admin", Some(&owner), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.send("GET", "/api/bookings/stats", Some(&customer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.send("GET", "/api/bookings/admin", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_status_is_invalid_input() {
    let app = TestApp::new();
    let owner = app.signup("Zoya", "owner").await;
    let customer = app.signup("Arjun", "customer").await;
    let cafe_id = app.create_cafe(&owner, 8).await;
    let (_, body) = app.book(&customer, &cafe_id, 1).await;
    let booking_id = body["booking_id"].as_str().unwrap();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/bookings/{booking_id}/status"),
            Some(&owner),
            Some(json!({ "status": "seated" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");
}

#[tokio::test]
async fn store_outage_is_service_unavailable() {
    let app = TestApp::new();
    app.store.set_unavailable(true);

    let (status, body) = app.send("GET", "/api/cafes", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Service temporarily unavailable");
}

/// Stats reader that answers long after any sane deadline.
struct StalledStats;

#[async_trait]
impl StatsReader for StalledStats {
    async fn snapshot(&self) -> Result<StatsSnapshot, DomainError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(StatsSnapshot::default())
    }
}

#[tokio::test]
async fn slow_store_is_service_unavailable() {
    let app = TestApp::build(|state, server| {
        state.stats_reader = Arc::new(StalledStats);
        server.request_timeout_secs = 1;
    });
    let admin = app.admin_token();

    let (status, body) = app.send("GET", "/api/bookings/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Service temporarily unavailable");
}
