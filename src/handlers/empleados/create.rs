// handlers/empleados/create.rs - POST /empleados/createEmpleado handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::models::Empleado;
use crate::state::AppState;

use super::{bool_field, str_field};

/// POST /empleados/createEmpleado - Create an employee
///
/// Provisions the identity-provider account first, then persists the record
/// under the returned account id. Requires an administrator credential.
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let (Some(email), Some(is_admin), Some(nombre), Some(password)) = (
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

    let (id, empleado) = state
        .directory()
        .create(empleado)
        .await
        .map_err(|e| ApiError::from_directory(e, "Error al crear el empleado"))?;

    tracing::info!("empleado {} creado por admin {}", id, admin.uid);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Empleado creado con éxito",
            "empleado": {
                "id": id,
                "email": empleado.email,
                "is_admin": empleado.is_admin,
                "nombre": empleado.nombre,
                "password": empleado.password,
            }
        })),
    ))
}
