mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::atomic::Ordering;

use empleados_api::services::IdentityService;

#[tokio::test]
async fn missing_credential_is_rejected_without_touching_the_store() -> Result<()> {
    let env = common::test_env();
    let calls_before = env.store.call_count();

    let (status, body) = common::send(
        &env.app,
        Method::GET,
        "/empleados/getEmpleados",
        None,
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
    assert_eq!(env.store.call_count(), calls_before, "store was touched");
    assert_eq!(env.identity.verify_token_calls.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn garbage_credential_is_rejected_with_provider_detail() -> Result<()> {
    let env = common::test_env();
    let calls_before = env.store.call_count();

    let (status, body) = common::send(
        &env.app,
        Method::GET,
        "/empleados/getEmpleados",
        Some("not-a-real-token"),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
    assert!(body["error"].is_string(), "expected provider detail: {}", body);
    assert_eq!(env.store.call_count(), calls_before, "store was touched");

    Ok(())
}

#[tokio::test]
async fn verified_non_admin_is_forbidden() -> Result<()> {
    let env = common::test_env();
    let uid = common::seed_empleado(&env, "worker@example.com", "pw", "Worker", false).await?;
    let token = common::token_for(&env, &uid).await?;

    let (status, body) = common::send(
        &env.app,
        Method::GET,
        "/empleados/getEmpleados",
        Some(&token),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "Forbidden: Access is allowed only for administrators."
    );

    Ok(())
}

#[tokio::test]
async fn verified_identity_without_a_record_is_forbidden() -> Result<()> {
    let env = common::test_env();

    // Account exists in the identity provider but no employee record does
    let account = env
        .identity
        .create_user(empleados_api::services::NewUser {
            email: "ghost@example.com".to_string(),
            password: "pw".to_string(),
            display_name: "Ghost".to_string(),
        })
        .await?;
    let token = common::token_for(&env, &account.uid).await?;

    let (status, _body) = common::send(
        &env.app,
        Method::GET,
        "/empleados/getEmpleados",
        Some(&token),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn admin_is_admitted() -> Result<()> {
    let env = common::test_env();
    let uid = common::seed_empleado(&env, "jefe@example.com", "pw", "Jefe", true).await?;
    let token = common::token_for(&env, &uid).await?;

    let (status, body) = common::send(
        &env.app,
        Method::GET,
        "/empleados/getEmpleados",
        Some(&token),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Empleados obtenidos con éxito");

    Ok(())
}

#[tokio::test]
async fn every_guarded_route_short_circuits_without_a_credential() -> Result<()> {
    let env = common::test_env();
    let calls_before = env.store.call_count();

    let guarded = [
        (Method::POST, "/empleados/createEmpleado"),
        (Method::GET, "/empleados/getEmpleados"),
        (Method::PUT, "/empleados/updateEmpleado"),
        (Method::DELETE, "/empleados/deleteEmpleado"),
    ];

    for (method, uri) in guarded {
        let (status, _) = common::send(&env.app, method.clone(), uri, None, Some(json!({}))).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {} was not gated", uri);
    }

    assert_eq!(env.store.call_count(), calls_before, "store was touched");

    Ok(())
}

#[tokio::test]
async fn public_endpoints_respond_without_a_credential() -> Result<()> {
    let env = common::test_env();

    let (status, body) = common::send(&env.app, Method::GET, "/", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API en funcionamiento");

    let (status, body) = common::send(&env.app, Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    Ok(())
}
