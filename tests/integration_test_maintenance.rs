mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_high_priority_report_takes_room_out_of_service() {
    let app = TestApp::new().await;
    let room = app.create_room("601", "double", 90.0).await;
    let room_id = room["id"].as_str().unwrap();

    let guest = app.token("guest");
    let response = app
        .request(
            "POST",
            "/api/v1/maintenance",
            Some(&guest),
            Some(json!({
                "room_id": room_id,
                "description": "Burst pipe under the sink",
                "type": "plumbing",
                "priority": "high"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request = parse_body(response).await;
    assert_eq!(request["status"], "open");
    assert_eq!(request["priority"], "high");

    let staff = app.token("manager");
    let room_after = parse_body(
        app.request("GET", &format!("/api/v1/rooms/{room_id}"), Some(&staff), None)
            .await,
    )
    .await;
    assert_eq!(room_after["status"], "maintenance");
}

#[tokio::test]
async fn test_medium_priority_report_leaves_room_status_alone() {
    let app = TestApp::new().await;
    let room = app.create_room("602", "single", 50.0).await;
    let room_id = room["id"].as_str().unwrap();

    let guest = app.token("guest");
    let response = app
        .request(
            "POST",
            "/api/v1/maintenance",
            Some(&guest),
            Some(json!({
                "room_id": room_id,
                "description": "TV remote missing"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request = parse_body(response).await;
    assert_eq!(request["priority"], "medium");
    assert_eq!(request["type"], "other");

    let staff = app.token("manager");
    let room_after = parse_body(
        app.request("GET", &format!("/api/v1/rooms/{room_id}"), Some(&staff), None)
            .await,
    )
    .await;
    assert_eq!(room_after["status"], "available");
}

#[tokio::test]
async fn test_resolving_sends_room_back_through_cleaning() {
    let app = TestApp::new().await;
    let room = app.create_room("603", "suite", 220.0).await;
    let room_id = room["id"].as_str().unwrap();

    let guest = app.token("guest");
    let created = parse_body(
        app.request(
            "POST",
            "/api/v1/maintenance",
            Some(&guest),
            Some(json!({
                "room_id": room_id,
                "description": "Sparking outlet",
                "type": "electrical",
                "priority": "high"
            })),
        )
        .await,
    )
    .await;
    let request_id = created["id"].as_str().unwrap();

    let staff = app.token("housekeeping");
    let resolved = app
        .request(
            "PATCH",
            &format!("/api/v1/maintenance/{request_id}"),
            Some(&staff),
            Some(json!({ "status": "resolved", "notes": "Outlet replaced" })),
        )
        .await;
    assert_eq!(resolved.status(), StatusCode::OK);
    let body = parse_body(resolved).await;
    assert_eq!(body["status"], "resolved");
    assert_eq!(body["notes"], "Outlet replaced");
    assert!(!body["resolved_at"].is_null());

    let room_after = parse_body(
        app.request("GET", &format!("/api/v1/rooms/{room_id}"), Some(&staff), None)
            .await,
    )
    .await;
    assert_eq!(room_after["status"], "cleaning");
}

#[tokio::test]
async fn test_listing_is_staff_only_and_orders_high_priority_first() {
    let app = TestApp::new().await;
    let room = app.create_room("604", "double", 90.0).await;
    let room_id = room["id"].as_str().unwrap();

    let guest = app.token("guest");
    for (desc, priority) in [("squeaky door", "low"), ("flooding", "high"), ("stain", "medium")] {
        app.request(
            "POST",
            "/api/v1/maintenance",
            Some(&guest),
            Some(json!({ "room_id": room_id, "description": desc, "priority": priority })),
        )
        .await;
    }

    let forbidden = app
        .request("GET", "/api/v1/maintenance", Some(&guest), None)
        .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let staff = app.token("housekeeping");
    let list = parse_body(
        app.request("GET", "/api/v1/maintenance", Some(&staff), None)
            .await,
    )
    .await;
    let requests = list.as_array().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0]["priority"], "high");

    let low_only = parse_body(
        app.request("GET", "/api/v1/maintenance?priority=low", Some(&staff), None)
            .await,
    )
    .await;
    assert_eq!(low_only.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cleaning_tasks_lists_rooms_awaiting_housekeeping() {
    let app = TestApp::new().await;
    let a = app.create_room("605", "single", 40.0).await;
    app.create_room("606", "single", 42.0).await;

    let staff = app.token("housekeeping");
    app.request(
        "PATCH",
        &format!("/api/v1/rooms/{}/status", a["id"].as_str().unwrap()),
        Some(&staff),
        Some(json!({ "status": "cleaning" })),
    )
    .await;

    let body = parse_body(
        app.request("GET", "/api/v1/maintenance/cleaning-tasks", Some(&staff), None)
            .await,
    )
    .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["tasks"][0]["room_number"], "605");
}

#[tokio::test]
async fn test_report_for_unknown_room_is_not_found() {
    let app = TestApp::new().await;
    let guest = app.token("guest");
    let response = app
        .request(
            "POST",
            "/api/v1/maintenance",
            Some(&guest),
            Some(json!({ "room_id": "ghost", "description": "?" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
