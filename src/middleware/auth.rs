use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::models::COLLECTION;
use crate::state::AppState;

/// Verified administrator identity attached to admitted requests.
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub uid: String,
    pub claims: Claims,
}

/// Admission gate for the employee-administration routes.
///
/// Extracts the bearer credential, verifies it against the identity service,
/// loads the employee record keyed by the verified account id, and admits
/// the request only if that record marks the caller as an administrator.
/// Two reads, no writes; every failure branch returns before the wrapped
/// handler starts.
pub async fn admin_gate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers).ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let claims = state
        .identity
        .verify_token(&token)
        .await
        .map_err(|e| ApiError::unauthorized_with("Unauthorized", e.to_string()))?;

    // A record-fetch failure is treated like a bad credential, so both the
    // verify and the fetch map to 401.
    let record = state
        .store
        .get(COLLECTION, &claims.sub)
        .await
        .map_err(|e| ApiError::unauthorized_with("Unauthorized", e.to_string()))?;

    // Absent record or absent/non-boolean is_admin both read as non-admin.
    let is_admin = record
        .as_ref()
        .and_then(|doc| doc.get("is_admin"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_admin {
        tracing::warn!("non-admin access attempt by uid {}", claims.sub);
        return Err(ApiError::forbidden(
            "Forbidden: Access is allowed only for administrators.",
        ));
    }

    tracing::debug!("admin {} admitted", claims.sub);
    request.extensions_mut().insert(AuthAdmin {
        uid: claims.sub.clone(),
        claims,
    });

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?;

    if token.trim().is_empty() {
        return None;
    }

    Some(token.to_string())
}
