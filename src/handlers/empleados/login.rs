// handlers/empleados/login.rs - POST /empleados/loginEmpleado handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

use super::str_field;

/// POST /empleados/loginEmpleado - Authenticate an employee and mint a token
///
/// The only unguarded route: it is how an employee obtains a credential in
/// the first place. Matches the record by email, compares the stored
/// password, then asks the identity service for a custom token.
///
/// Expected Input:
/// ```json
/// {
///   "email": "string",      // Required
///   "password": "string"    // Required
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiI..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let (Some(email), Some(password)) = (str_field(&body, "email"), str_field(&body, "password"))
    else {
        return Err(ApiError::bad_request(
            "Email y password son requeridos y deben ser strings",
        ));
    };

    let token = state
        .directory()
        .login(email, password)
        .await
        .map_err(|e| ApiError::from_directory(e, "Error al iniciar sesión"))?;

    Ok(Json(json!({ "token": token })))
}
