// handlers/empleados/list.rs - GET /empleados/getEmpleados handler

use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

/// GET /empleados/getEmpleados - List every employee record as `{id, ...fields}`
pub async fn list(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
) -> Result<Json<Value>, ApiError> {
    let empleados = state
        .directory()
        .list()
        .await
        .map_err(|e| ApiError::from_directory(e, "Error al obtener empleados"))?;

    tracing::debug!("{} empleados listados para admin {}", empleados.len(), admin.uid);

    Ok(Json(json!({
        "message": "Empleados obtenidos con éxito",
        "data": empleados,
    })))
}
