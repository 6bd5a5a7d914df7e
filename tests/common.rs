#![allow(dead_code)]

use hotel_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::Claims,
    domain::services::room_lock::RoomLockRegistry,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo, sqlite_maintenance_repo::SqliteMaintenanceRepo,
        sqlite_room_repo::SqliteRoomRepo,
    },
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            room_lock_timeout_ms: 5000,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            maintenance_repo: Arc::new(SqliteMaintenanceRepo::new(pool.clone())),
            room_locks: Arc::new(RoomLockRegistry::new()),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Mints a signed access token the way the external identity service
    /// would, so tests can act as staff or registered guests.
    pub fn token_for(&self, sub: &str, name: &str, email: &str, role: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.state.config.jwt_secret.as_bytes()),
        )
        .expect("Failed to mint test token")
    }

    pub fn token(&self, role: &str) -> String {
        self.token_for(
            &Uuid::new_v4().to_string(),
            "Test User",
            "test@example.com",
            role,
        )
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Creates a room as a manager and returns its JSON representation.
    pub async fn create_room(&self, room_number: &str, room_type: &str, price: f64) -> Value {
        let token = self.token("manager");
        let response = self
            .request(
                "POST",
                "/api/v1/rooms",
                Some(&token),
                Some(serde_json::json!({
                    "room_number": room_number,
                    "type": room_type,
                    "price_per_night": price
                })),
            )
            .await;
        assert_eq!(response.status(), 201, "room creation failed in test helper");
        parse_body(response).await
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
