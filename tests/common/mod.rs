use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use portfolio::config::Config;
use portfolio::notify::{MailError, Mailer, Notifier, OutgoingEmail};

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const OWNER_ADDRESS: &str = "owner@portfolio.test";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to `/contact`, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a valid contact and return the response body.
    pub async fn submit_ok(&self, name: &str, email: &str, message: &str) -> Value {
        let (body, status) = self
            .submit(&json!({ "name": name, "email": email, "message": message }))
            .await;
        assert_eq!(status, StatusCode::OK, "submit failed: {body}");
        body
    }

    /// GET `/contact`, return (body, status).
    pub async fn list(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/contact"))
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET `/admin/contacts` with an optional raw Authorization header.
    pub async fn admin_list(&self, authorization: Option<&str>) -> (Value, StatusCode) {
        let mut req = self.client.get(self.url("/admin/contacts"));
        if let Some(value) = authorization {
            req = req.header("authorization", value);
        }
        let resp = req.send().await.expect("admin list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET an HTML page, return (text, status).
    #[allow(dead_code)]
    pub async fn page(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("page request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

/// Mail transport double that records every attempt and optionally fails.
#[derive(Default)]
pub struct TestMailer {
    pub attempts: Mutex<Vec<OutgoingEmail>>,
    pub fail: bool,
}

impl TestMailer {
    pub fn recording() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            attempts: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.attempts.lock().unwrap().clone()
    }

    /// Wait until at least `count` sends were attempted, or give up after 5s.
    pub async fn wait_for(&self, count: usize) -> Vec<OutgoingEmail> {
        for _ in 0..100 {
            let attempts = self.attempts();
            if attempts.len() >= count {
                return attempts;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.attempts()
    }
}

#[async_trait]
impl Mailer for TestMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.attempts.lock().unwrap().push(email);
        if self.fail {
            return Err("mail provider unreachable".into());
        }
        Ok(())
    }
}

pub fn test_config(database_url: String) -> Config {
    Config {
        database_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        db_max_connections: 5,
        admin_token: ADMIN_TOKEN.to_string(),
        log_level: "warn".to_string(),
        mail: None,
    }
}

/// Spawn a test app with mail disabled.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_with_notifier(Notifier::disabled()).await
}

/// Spawn a test app whose notifications go through `mailer`.
#[allow(dead_code)]
pub async fn spawn_app_with_mailer(mailer: Arc<TestMailer>) -> TestApp {
    spawn_with_notifier(Notifier::new(
        mailer,
        OWNER_ADDRESS.to_string(),
        "Test Owner".to_string(),
    ))
    .await
}

async fn spawn_with_notifier(notifier: Notifier) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("portfolio_test_{}", Uuid::new_v4().simple());

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let config = test_config(test_url);

    let pool = portfolio::db::connect(&config)
        .await
        .expect("Failed to connect to test database");

    portfolio::db::migrate(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let app = portfolio::build_app_with_notifier(pool.clone(), config, notifier);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
