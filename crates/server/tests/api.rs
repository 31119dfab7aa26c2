use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use server::startup::build_cors;
use server::state::AppState;

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    models::schema::ensure_schema(&db).await?;
    let cors = build_cors(&configs::CorsConfig::default())?;
    Ok(routes::build_router(AppState::new(db), cors))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_assign_and_list_round_trip() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, ana) = send(&app, "POST", "/employees/", Some(json!({"name": "Ana", "role": "Eng"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ana["name"], "Ana");
    assert_eq!(ana["role"], "Eng");
    let ana_id = ana["id"].as_i64().expect("generated id");

    let (status, x) = send(&app, "POST", "/projects/", Some(json!({"name": "X"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(x["description"], Value::Null);
    let x_id = x["id"].as_i64().expect("generated id");

    let (status, body) = send(&app, "POST", "/assign/", Some(json!({"project_id": x_id, "employee_id": ana_id}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee assigned to Project successfully");

    let (_, employees) = send(&app, "GET", "/employees/", None).await?;
    assert_eq!(employees, json!([{"id": ana_id, "name": "Ana", "role": "Eng", "projects": ["X"]}]));

    let (_, projects) = send(&app, "GET", "/projects/", None).await?;
    assert_eq!(projects, json!([{"id": x_id, "name": "X", "description": null, "employees": ["Ana"]}]));

    let (_, assignments) = send(&app, "GET", "/assignments/", None).await?;
    assert_eq!(assignments, json!([{"project_id": x_id, "employee_id": ana_id}]));
    Ok(())
}

#[tokio::test]
async fn test_create_validation() -> anyhow::Result<()> {
    let app = build_app().await?;

    for body in [json!({"name": "", "role": "Eng"}), json!({"name": "Ana"}), json!({})] {
        let (status, err) = send(&app, "POST", "/employees/", Some(body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "Validation Error");
    }
    let (status, _) = send(&app, "POST", "/projects/", Some(json!({"description": "no name"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, employees) = send(&app, "GET", "/employees/", None).await?;
    assert_eq!(employees, json!([]));
    let (_, projects) = send(&app, "GET", "/projects/", None).await?;
    assert_eq!(projects, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_malformed_requests_are_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;

    let req = Request::builder()
        .method("POST")
        .uri("/employees/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/employees/", Some(json!({"name": 5, "role": "Eng"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, err) = send(&app, "DELETE", "/employees/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Invalid Path");
    Ok(())
}

#[tokio::test]
async fn test_put_ignores_empty_patch_applies_it() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, ana) = send(&app, "POST", "/employees/", Some(json!({"name": "Ana", "role": "Eng"}))).await?;
    let uri = format!("/employees/{}", ana["id"]);

    let (status, put) = send(&app, "PUT", &uri, Some(json!({"name": "", "role": "Lead"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(put["name"], "Ana");
    assert_eq!(put["role"], "Lead");

    let (status, patched) = send(&app, "PATCH", &uri, Some(json!({"name": ""}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "");
    assert_eq!(patched["role"], "Lead");

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({"role": null}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_project_put_and_patch() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, x) = send(&app, "POST", "/projects/", Some(json!({"name": "X", "description": "payroll"}))).await?;
    let uri = format!("/projects/{}", x["id"]);

    let (_, put) = send(&app, "PUT", &uri, Some(json!({"description": ""}))).await?;
    assert_eq!(put["description"], "payroll");

    let (_, patched) = send(&app, "PATCH", &uri, Some(json!({"description": null}))).await?;
    assert_eq!(patched["description"], Value::Null);
    assert_eq!(patched["name"], "X");
    Ok(())
}

#[tokio::test]
async fn test_not_found_paths() -> anyhow::Result<()> {
    let app = build_app().await?;

    for (method, uri) in [
        ("PUT", "/employees/999"),
        ("PATCH", "/employees/999"),
        ("PUT", "/projects/999"),
        ("PATCH", "/projects/999"),
    ] {
        let (status, err) = send(&app, method, uri, Some(json!({"name": "Z"}))).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(err["error"], "Not Found");
    }
    let (status, _) = send(&app, "DELETE", "/employees/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", "/projects/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, ana) = send(&app, "POST", "/employees/", Some(json!({"name": "Ana", "role": "Eng"}))).await?;
    let (status, err) = send(&app, "POST", "/assign/", Some(json!({"project_id": 999, "employee_id": ana["id"]}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "Project or Employee not found");
    let (_, assignments) = send(&app, "GET", "/assignments/", None).await?;
    assert_eq!(assignments, json!([]));

    let (status, _) = send(&app, "POST", "/assign/", Some(json!({"employee_id": ana["id"]}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_assign_zero_ids_is_validation_error() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, err) = send(&app, "POST", "/assign/", Some(json!({"project_id": 0, "employee_id": 0}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Validation Error");
    assert_eq!(err["detail"], "Project ID and Employee ID are required");
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_from_listing_and_links() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (_, ana) = send(&app, "POST", "/employees/", Some(json!({"name": "Ana", "role": "Eng"}))).await?;
    let (_, x) = send(&app, "POST", "/projects/", Some(json!({"name": "X"}))).await?;
    send(&app, "POST", "/assign/", Some(json!({"project_id": x["id"], "employee_id": ana["id"]}))).await?;

    let (status, body) = send(&app, "DELETE", &format!("/employees/{}", ana["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");

    let (_, employees) = send(&app, "GET", "/employees/", None).await?;
    assert_eq!(employees, json!([]));
    let (_, assignments) = send(&app, "GET", "/assignments/", None).await?;
    assert_eq!(assignments, json!([]));
    let (_, projects) = send(&app, "GET", "/projects/", None).await?;
    assert_eq!(projects[0]["employees"], json!([]));

    let (status, body) = send(&app, "DELETE", &format!("/projects/{}", x["id"]), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Project deleted successfully");
    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_allows_listed_origin_with_credentials() -> anyhow::Result<()> {
    let app = build_app().await?;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/employees/")
        .header("origin", "http://127.0.0.1:5500")
        .header("access-control-request-method", "PATCH")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())?;
    let resp = app.clone().oneshot(req).await?;
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://127.0.0.1:5500");
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "PATCH");

    let req = Request::builder()
        .method("GET")
        .uri("/employees/")
        .header("origin", "http://evil.example")
        .body(Body::empty())?;
    let resp = app.clone().oneshot(req).await?;
    assert!(resp.headers().get("access-control-allow-origin").is_none());
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_lists_routes() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    for path in ["/employees/", "/employees/{id}", "/projects/", "/projects/{id}", "/assign/", "/assignments/"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
    Ok(())
}
