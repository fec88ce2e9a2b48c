#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::json;
use tokio::sync::mpsc;

use shortlink::application::services::{AccountService, LinkService, TokenConfig, TokenService};
use shortlink::domain::entities::{Link, NewLink, NewUser, User};
use shortlink::domain::repositories::{LinkRepository, UserRepository};
use shortlink::domain::visit_event::VisitEvent;
use shortlink::error::AppError;
use shortlink::routes::router;
use shortlink::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// In-memory credential store. A single mutex over the map makes the
/// duplicate-email check atomic with the insert, mirroring the database
/// unique constraint.
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: Mutex<UserStore>,
}

#[derive(Default)]
struct UserStore {
    next_id: i64,
    users: Vec<User>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.inner.lock().unwrap();

        if store.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        store.next_id += 1;
        let user = User {
            id: store.next_id,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            salt: new_user.salt,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        store.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.email == email).cloned())
    }
}

/// In-memory link store. One mutex serializes the uniqueness check with
/// the insert and keeps concurrent visit increments lossless, which is
/// exactly the contract the repository trait demands of a real store.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: Mutex<LinkStore>,
}

#[derive(Default)]
struct LinkStore {
    next_id: i64,
    links: HashMap<String, Link>,
}

impl MemoryLinkRepository {
    /// Current visit count for a code; test-side inspection only.
    pub fn visits(&self, code: &str) -> Option<i64> {
        let store = self.inner.lock().unwrap();
        store.links.get(code).map(|l| l.visits)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().links.len()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.inner.lock().unwrap();

        if store.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        store.next_id += 1;
        let now = Utc::now();
        let link = Link {
            id: store.next_id,
            code: new_link.code.clone(),
            target_url: new_link.target_url,
            user_id: new_link.user_id,
            visits: 0,
            created_at: now,
            updated_at: now,
        };
        store.links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.links.get(code).cloned())
    }

    async fn increment_visits(&self, code: &str) -> Result<(), AppError> {
        let mut store = self.inner.lock().unwrap();
        if let Some(link) = store.links.get_mut(code) {
            link.visits += 1;
            link.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let store = self.inner.lock().unwrap();
        let mut links: Vec<Link> = store
            .links
            .values()
            .filter(|l| l.user_id == owner_id)
            .cloned()
            .collect();
        links.sort_by_key(|l| l.id);
        Ok(links)
    }

    async fn delete_by_id_and_owner(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        let mut store = self.inner.lock().unwrap();

        let code = store
            .links
            .iter()
            .find(|(_, l)| l.id == id && l.user_id == owner_id)
            .map(|(code, _)| code.clone());

        match code {
            Some(code) => {
                store.links.remove(&code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// A fully wired application over in-memory stores.
pub struct TestApp {
    pub server: TestServer,
    pub visit_rx: mpsc::Receiver<VisitEvent>,
    pub user_repo: Arc<MemoryUserRepository>,
    pub link_repo: Arc<MemoryLinkRepository>,
    pub token_service: Arc<TokenService>,
    pub link_service: Arc<LinkService>,
}

/// Builds the real router over in-memory repositories.
///
/// Returns the receiving half of the visit queue so tests can observe or
/// drain the fire-and-forget events deterministically.
pub fn spawn_app() -> TestApp {
    let user_repo = Arc::new(MemoryUserRepository::default());
    let link_repo = Arc::new(MemoryLinkRepository::default());

    let token_service = Arc::new(TokenService::new(TokenConfig {
        signing_secret: TEST_SIGNING_SECRET.to_string(),
        ttl: Duration::hours(24),
    }));
    let account_service = Arc::new(AccountService::new(user_repo.clone(), token_service.clone()));
    let link_service = Arc::new(LinkService::new(link_repo.clone()));

    let (visit_tx, visit_rx) = mpsc::channel(100);

    let state = AppState::new(
        account_service,
        link_service.clone(),
        token_service.clone(),
        visit_tx,
    );

    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        server,
        visit_rx,
        user_repo,
        link_repo,
        token_service,
        link_service,
    }
}

/// Signs up a user through the API and returns the new account id.
pub async fn signup(server: &TestServer, email: &str, password: &str) -> i64 {
    let response = server
        .post("/user/signup")
        .json(&json!({
            "firstName": "Test",
            "lastName": "User",
            "email": email,
            "password": password,
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Logs a user in through the API and returns the bearer token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/user/login")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Shortens a URL through the API, returning `(id, shortCode)`.
pub async fn shorten(server: &TestServer, token: &str, url: &str) -> (i64, String) {
    let response = server
        .post("/url/shorten")
        .authorization_bearer(token)
        .json(&json!({ "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    (
        body["id"].as_i64().unwrap(),
        body["shortCode"].as_str().unwrap().to_string(),
    )
}
