use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::auth;
use crate::models::{Empleado, COLLECTION};

use super::identity::{IdentityError, IdentityService, NewUser};
use super::store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Login email matched no employee record.
    #[error("no employee record for that email")]
    UnknownEmail,

    /// Login password did not match the stored one.
    #[error("password mismatch")]
    WrongPassword,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The five employee-directory operations. Account lifecycle goes to the
/// identity service and record persistence to the document store; calls are
/// awaited in order because each depends on the previous result, and nothing
/// is retried or held across requests.
pub struct EmpleadoService {
    identity: Arc<dyn IdentityService>,
    store: Arc<dyn DocumentStore>,
}

impl EmpleadoService {
    pub fn new(identity: Arc<dyn IdentityService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    /// Two-phase create: provision the identity account, then persist the
    /// record keyed by the returned account id. If the record write fails,
    /// the just-created account is deleted again (best effort).
    pub async fn create(&self, empleado: Empleado) -> Result<(String, Empleado), DirectoryError> {
        let account = self
            .identity
            .create_user(NewUser {
                email: empleado.email.clone(),
                password: empleado.password.clone(),
                display_name: empleado.nombre.clone(),
            })
            .await?;

        let doc = serde_json::to_value(&empleado)?;
        if let Err(err) = self.store.set(COLLECTION, &account.uid, doc).await {
            if let Err(cleanup) = self.identity.delete_user(&account.uid).await {
                warn!(
                    "orphaned identity account {} after failed record write: {}",
                    account.uid, cleanup
                );
            }
            return Err(err.into());
        }

        Ok((account.uid, empleado))
    }

    /// Every record in the collection, projected to `{id, ...fields}`.
    pub async fn list(&self) -> Result<Vec<Value>, DirectoryError> {
        let docs = self.store.get_all(COLLECTION).await?;
        Ok(docs.into_iter().map(|(id, doc)| with_id(id, doc)).collect())
    }

    /// Full-record overwrite. Fails if no record exists at `id`.
    pub async fn update(&self, id: &str, empleado: Empleado) -> Result<(), DirectoryError> {
        let doc = serde_json::to_value(&empleado)?;
        self.store.update(COLLECTION, id, doc).await?;
        Ok(())
    }

    /// Remove the record at `id`. The identity-provider account is left in
    /// place. Removing an absent id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), DirectoryError> {
        self.store.delete(COLLECTION, id).await?;
        Ok(())
    }

    /// Authenticate by email and password; on success mint a custom token
    /// for the matching identity account. Returns the token only.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        let matches = self
            .store
            .query_eq(COLLECTION, "email", &Value::String(email.to_string()))
            .await?;

        let Some((_, doc)) = matches.into_iter().next() else {
            return Err(DirectoryError::UnknownEmail);
        };

        let stored = doc.get("password").and_then(Value::as_str).unwrap_or_default();
        if !auth::password_matches(stored, password) {
            return Err(DirectoryError::WrongPassword);
        }

        let account = self.identity.get_user_by_email(email).await?;
        let token = self.identity.create_custom_token(&account.uid).await?;
        Ok(token)
    }
}

/// Project a stored document to the wire shape `{id, ...fields}`.
fn with_id(id: String, doc: Value) -> Value {
    let mut map = match doc {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    map.insert("id".to_string(), Value::String(id));
    Value::Object(map)
}
