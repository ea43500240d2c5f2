use std::sync::Arc;

use auth::AuthConfig;
use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::config::JwtConfig;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::NewUser;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::ports::UserRepository;
use auth_service::domain::user::service::UserService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by the in-memory store
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub auth_config: AuthConfig,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let auth_config = JwtConfig {
            secret: Some(TEST_SECRET.to_string()),
            access_expire_secs: Some(900),
            refresh_expire_secs: Some(604800),
        }
        .resolve();

        let repository = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));
        let token_issuer = Arc::new(TokenIssuer::new(auth_config.clone()));
        let auth_service = Arc::new(AuthService::new(user_service, token_issuer));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET.as_bytes()),
            auth_config,
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Store a user directly, bypassing the registration policy
    pub async fn seed_user(&self, email: &str, password: &str) -> UserId {
        let user = NewUser {
            email: EmailAddress::new(email.to_string()).expect("Invalid seed email"),
            name: None,
            password_hash: PasswordHasher::new()
                .hash(password)
                .expect("Failed to hash password"),
            created_at: chrono::Utc::now(),
        };

        self.repository
            .create(user)
            .await
            .expect("Failed to seed user")
            .id
    }

    /// Register a user through the API, asserting it succeeded
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the response body
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}
