use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AuthError, Claims};

/// Input for provisioning a new identity-provider account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// An identity-provider account as seen by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email already in use: {0}")]
    EmailTaken(String),

    #[error("no account for email: {0}")]
    UserNotFound(String),

    #[error("no account for uid: {0}")]
    UidNotFound(String),

    #[error(transparent)]
    Token(#[from] AuthError),
}

/// Capability interface over the managed identity provider.
///
/// Account lifecycle and token verification/minting live behind this trait
/// so the admission gate and the employee directory can be exercised against
/// substitute implementations.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Provision an account. Fails if the email is already registered.
    async fn create_user(&self, new_user: NewUser) -> Result<UserAccount, IdentityError>;

    /// Validate a bearer credential and return its verified claims.
    async fn verify_token(&self, token: &str) -> Result<Claims, IdentityError>;

    async fn get_user_by_email(&self, email: &str) -> Result<UserAccount, IdentityError>;

    /// Mint a short-lived authentication token for an account id.
    async fn create_custom_token(&self, uid: &str) -> Result<String, IdentityError>;

    /// Remove an account. Consumed by the compensating action of a failed
    /// two-phase employee creation.
    async fn delete_user(&self, uid: &str) -> Result<(), IdentityError>;
}
