use axum::{
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::empleados;
use crate::middleware::admin_gate;
use crate::models::COLLECTION;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    // Every route in this group passes the admin gate; login stays outside
    // because it is how a credential is obtained in the first place.
    let gated = Router::new()
        .route("/empleados/createEmpleado", post(empleados::create))
        .route("/empleados/getEmpleados", get(empleados::list))
        .route("/empleados/updateEmpleado", put(empleados::update))
        .route("/empleados/deleteEmpleado", delete(empleados::delete))
        .route_layer(from_fn_with_state(state.clone(), admin_gate));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/empleados/loginEmpleado", post(empleados::login))
        // Admin-gated employee administration
        .merge(gated)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "message": "API en funcionamiento",
        "name": "Empleados API",
        "version": version,
        "endpoints": {
            "login": "POST /empleados/loginEmpleado (public - token acquisition)",
            "create": "POST /empleados/createEmpleado (admin)",
            "list": "GET /empleados/getEmpleados (admin)",
            "update": "PUT /empleados/updateEmpleado (admin)",
            "delete": "DELETE /empleados/deleteEmpleado (admin)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.get_all(COLLECTION).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
