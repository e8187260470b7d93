use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{DocumentStore, EmpleadoService, IdentityService, JwtIdentity, MemoryStore};

/// Shared handles to the two external capabilities, injected at construction
/// so both the gate and the directory are testable with substitutes. Cloned
/// per request; no other cross-request state exists.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityService>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    /// Default wiring: JWT-backed identity plus in-memory store.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(JwtIdentity::new(
                config.security.jwt_secret.clone(),
                config.security.token_expiry_hours,
            )),
            Arc::new(MemoryStore::new()),
        )
    }

    pub fn directory(&self) -> EmpleadoService {
        EmpleadoService::new(self.identity.clone(), self.store.clone())
    }
}
