// handlers/empleados/delete.rs - DELETE /empleados/deleteEmpleado handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::str_field;

/// DELETE /empleados/deleteEmpleado - Remove an employee record
///
/// Deletes only the record; the identity-provider account stays and can
/// still authenticate elsewhere. Deleting an id with no record succeeds.
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let Some(id) = str_field(&body, "id") else {
        return Err(ApiError::bad_request(
            "Se requiere el ID del empleado y debe ser un string",
        ));
    };

    state
        .directory()
        .delete(id)
        .await
        .map_err(|e| ApiError::from_directory(e, "Error al eliminar el empleado"))?;

    tracing::info!("empleado {} eliminado por admin {}", id, admin.uid);

    Ok(Json(json!({ "message": "Empleado eliminado con éxito" })))
}
