use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{self, Claims};

use super::identity::{IdentityError, IdentityService, NewUser, UserAccount};

struct Account {
    uid: String,
    email: String,
    display_name: String,
}

impl Account {
    fn as_user(&self) -> UserAccount {
        UserAccount {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Identity provider backed by locally signed JWTs (HS256) and an in-process
/// account registry. Tokens it mints are the tokens it verifies, so the same
/// secret serves login issuance and the admission gate.
pub struct JwtIdentity {
    secret: String,
    token_expiry_hours: u64,
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl JwtIdentity {
    pub fn new(secret: impl Into<String>, token_expiry_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            token_expiry_hours,
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl IdentityService for JwtIdentity {
    async fn create_user(&self, new_user: NewUser) -> Result<UserAccount, IdentityError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == new_user.email) {
            return Err(IdentityError::EmailTaken(new_user.email));
        }

        let uid = Uuid::new_v4().simple().to_string();
        let account = Account {
            uid: uid.clone(),
            email: new_user.email,
            display_name: new_user.display_name,
        };
        let user = account.as_user();
        accounts.insert(uid, account);

        Ok(user)
    }

    async fn verify_token(&self, token: &str) -> Result<Claims, IdentityError> {
        Ok(auth::verify_token(token, &self.secret)?)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<UserAccount, IdentityError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| a.email == email)
            .map(Account::as_user)
            .ok_or_else(|| IdentityError::UserNotFound(email.to_string()))
    }

    async fn create_custom_token(&self, uid: &str) -> Result<String, IdentityError> {
        let email = {
            let accounts = self.accounts.read().await;
            accounts.get(uid).map(|a| a.email.clone())
        };

        let claims = Claims::new(uid.to_string(), email, self.token_expiry_hours);
        Ok(auth::mint_token(&claims, &self.secret)?)
    }

    async fn delete_user(&self, uid: &str) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(uid)
            .map(|_| ())
            .ok_or_else(|| IdentityError::UidNotFound(uid.to_string()))
    }
}
