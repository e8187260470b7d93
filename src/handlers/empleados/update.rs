// handlers/empleados/update.rs - PUT /empleados/updateEmpleado handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::models::Empleado;
use crate::state::AppState;

use super::{bool_field, str_field};

/// PUT /empleados/updateEmpleado - Full-record overwrite of an employee
///
/// Every field is required on every update; there are no partial-patch
/// semantics. The record at `id` must already exist.
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let (Some(id), Some(email), Some(is_admin), Some(nombre), Some(password)) = (
        str_field(&body, "id"),
        str_field(&body, "email"),
        bool_field(&body, "is_admin"),
        str_field(&body, "nombre"),
        str_field(&body, "password"),
    ) else {
        return Err(ApiError::bad_request("Datos de empleado inválidos"));
    };

    let empleado = Empleado {
        email: email.to_string(),
        nombre: nombre.to_string(),
        is_admin,
        password: password.to_string(),
    };

    state
        .directory()
        .update(id, empleado)
        .await
        .map_err(|e| ApiError::from_directory(e, "Error al actualizar el empleado"))?;

    tracing::info!("empleado {} actualizado por admin {}", id, admin.uid);

    Ok(Json(json!({ "message": "Empleado actualizado con éxito" })))
}
