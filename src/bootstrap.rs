use serde_json::Value;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{Empleado, COLLECTION};
use crate::state::AppState;

/// Seed the first administrator from configuration.
///
/// The admin role is read from the same collection the admin routes protect,
/// so an empty store leaves the service unable to admit anyone. Runs once at
/// startup; skipped when no bootstrap admin is configured or a record with
/// that email already exists.
pub async fn seed_admin(state: &AppState, config: &AppConfig) {
    let (Some(email), Some(password)) = (
        config.bootstrap.admin_email.clone(),
        config.bootstrap.admin_password.clone(),
    ) else {
        return;
    };

    match state
        .store
        .query_eq(COLLECTION, "email", &Value::String(email.clone()))
        .await
    {
        Ok(existing) if !existing.is_empty() => return,
        Ok(_) => {}
        Err(e) => {
            warn!("bootstrap admin lookup failed: {}", e);
            return;
        }
    }

    let empleado = Empleado {
        email: email.clone(),
        nombre: config.bootstrap.admin_nombre.clone(),
        is_admin: true,
        password,
    };

    match state.directory().create(empleado).await {
        Ok((id, _)) => info!("bootstrap admin {} seeded as {}", email, id),
        Err(e) => warn!("bootstrap admin seeding failed: {}", e),
    }
}
