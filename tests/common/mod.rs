use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use empleados_api::app::app;
use empleados_api::auth::Claims;
use empleados_api::models::COLLECTION;
use empleados_api::services::{
    DocumentStore, IdentityError, IdentityService, JwtIdentity, MemoryStore, NewUser, StoreError,
    UserAccount,
};
use empleados_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Identity wrapper that counts calls per method, so tests can assert that
/// rejected requests never reach the provider.
pub struct CountingIdentity {
    inner: JwtIdentity,
    pub create_user_calls: AtomicUsize,
    pub verify_token_calls: AtomicUsize,
    pub get_user_calls: AtomicUsize,
    pub custom_token_calls: AtomicUsize,
    pub delete_user_calls: AtomicUsize,
}

impl CountingIdentity {
    pub fn new(inner: JwtIdentity) -> Self {
        Self {
            inner,
            create_user_calls: AtomicUsize::new(0),
            verify_token_calls: AtomicUsize::new(0),
            get_user_calls: AtomicUsize::new(0),
            custom_token_calls: AtomicUsize::new(0),
            delete_user_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IdentityService for CountingIdentity {
    async fn create_user(&self, new_user: NewUser) -> Result<UserAccount, IdentityError> {
        self.create_user_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_user(new_user).await
    }

    async fn verify_token(&self, token: &str) -> Result<Claims, IdentityError> {
        self.verify_token_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify_token(token).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<UserAccount, IdentityError> {
        self.get_user_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_user_by_email(email).await
    }

    async fn create_custom_token(&self, uid: &str) -> Result<String, IdentityError> {
        self.custom_token_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_custom_token(uid).await
    }

    async fn delete_user(&self, uid: &str) -> Result<(), IdentityError> {
        self.delete_user_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_user(uid).await
    }
}

/// Document-store wrapper with a single call counter, for asserting that a
/// short-circuited request never touches the store.
pub struct CountingStore {
    inner: MemoryStore,
    pub calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(collection, id).await
    }

    async fn set(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.set(collection, id, doc).await
    }

    async fn update(&self, collection: &str, id: &str, doc: Value) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(collection, id, doc).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(collection, id).await
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Value)>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query_eq(collection, field, value).await
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<(String, Value)>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all(collection).await
    }
}

pub struct TestEnv {
    pub app: Router,
    pub identity: Arc<CountingIdentity>,
    pub store: Arc<CountingStore>,
}

pub fn test_env() -> TestEnv {
    let identity = Arc::new(CountingIdentity::new(JwtIdentity::new(TEST_SECRET, 1)));
    let store = Arc::new(CountingStore::new(MemoryStore::new()));
    let state = AppState::new(identity.clone(), store.clone());

    TestEnv {
        app: app(state),
        identity,
        store,
    }
}

/// Create an identity account plus employee record directly through the
/// services, returning the account id.
pub async fn seed_empleado(
    env: &TestEnv,
    email: &str,
    password: &str,
    nombre: &str,
    is_admin: bool,
) -> Result<String> {
    let account = env
        .identity
        .create_user(NewUser {
            email: email.to_string(),
            password: password.to_string(),
            display_name: nombre.to_string(),
        })
        .await?;

    let doc = serde_json::json!({
        "email": email,
        "nombre": nombre,
        "is_admin": is_admin,
        "password": password,
    });
    env.store.set(COLLECTION, &account.uid, doc).await?;

    Ok(account.uid)
}

pub async fn token_for(env: &TestEnv, uid: &str) -> Result<String> {
    Ok(env.identity.create_custom_token(uid).await?)
}

/// Drive one request through the router and return (status, JSON body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
