mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_two_night_booking_is_priced_and_confirmed() {
    let app = TestApp::new().await;
    let room = app.create_room("R101", "double", 100.0).await;
    let room_id = room["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            None,
            Some(json!({
                "room_id": room_id,
                "check_in": "2025-06-01T14:00:00Z",
                "check_out": "2025-06-03T11:00:00Z",
                "guest_details": { "name": "Ada Guest", "email": "ada@example.com", "phone": "555-0101" }
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = parse_body(response).await;

    // 45 hours rounds to 2 nights at $100/night.
    assert_eq!(booking["total_price"].as_f64().unwrap(), 200.0);
    assert_eq!(booking["status"], "confirmed");
    assert_eq!(booking["guest_name"], "Ada Guest");
    assert!(booking["guest_id"].is_null());

    // Occupancy reflects physical presence, not reservation: the room's
    // cached status must still show available.
    let token = app.token("receptionist");
    let room_after = parse_body(
        app.request("GET", &format!("/api/v1/rooms/{room_id}"), Some(&token), None)
            .await,
    )
    .await;
    assert_eq!(room_after["status"], "available");
}

#[tokio::test]
async fn test_additional_services_are_added_to_room_charge() {
    let app = TestApp::new().await;
    let room = app.create_room("R102", "suite", 250.0).await;

    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            None,
            Some(json!({
                "room_id": room["id"],
                "check_in": "2025-07-01T15:00:00Z",
                "check_out": "2025-07-04T11:00:00Z",
                "guest_details": { "name": "Bo", "email": "bo@example.com" },
                "additional_services": [
                    { "name": "breakfast", "price": 20.0 },
                    { "name": "spa", "price": 55.0 }
                ]
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = parse_body(response).await;
    // 3 nights * 250 + 75
    assert_eq!(booking["total_price"].as_f64().unwrap(), 825.0);
}

#[tokio::test]
async fn test_signed_in_guest_is_attributed_without_explicit_details() {
    let app = TestApp::new().await;
    let room = app.create_room("R103", "single", 80.0).await;
    let guest_token = app.token_for("guest-42", "Cleo Vance", "cleo@example.com", "guest");

    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            Some(&guest_token),
            Some(json!({
                "room_id": room["id"],
                "check_in": "2025-08-01T14:00:00Z",
                "check_out": "2025-08-02T11:00:00Z"
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let booking = parse_body(response).await;
    assert_eq!(booking["guest_id"], "guest-42");
    assert_eq!(booking["guest_name"], "Cleo Vance");
    assert_eq!(booking["guest_email"], "cleo@example.com");
}

#[tokio::test]
async fn test_anonymous_booking_without_contact_details_is_rejected() {
    let app = TestApp::new().await;
    let room = app.create_room("R104", "single", 80.0).await;

    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            None,
            Some(json!({
                "room_id": room["id"],
                "check_in": "2025-08-01T14:00:00Z",
                "check_out": "2025-08-02T11:00:00Z"
            })),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_list_is_staff_only_and_paginated() {
    let app = TestApp::new().await;
    let room = app.create_room("R105", "double", 90.0).await;

    for day in 1..=3 {
        let response = app
            .request(
                "POST",
                "/api/v1/bookings",
                None,
                Some(json!({
                    "room_id": room["id"],
                    "check_in": format!("2025-09-0{}T14:00:00Z", day * 2),
                    "check_out": format!("2025-09-0{}T11:00:00Z", day * 2 + 1),
                    "guest_details": { "name": "G", "email": "g@example.com" }
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let guest_token = app.token("guest");
    let forbidden = app
        .request("GET", "/api/v1/bookings", Some(&guest_token), None)
        .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let unauthorized = app.request("GET", "/api/v1/bookings", None, None).await;
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let staff_token = app.token("receptionist");
    let page = parse_body(
        app.request(
            "GET",
            "/api/v1/bookings?page=1&limit=2",
            Some(&staff_token),
            None,
        )
        .await,
    )
    .await;

    assert_eq!(page["total"], 3);
    assert_eq!(page["pages"], 2);
    assert_eq!(page["bookings"].as_array().unwrap().len(), 2);

    let room_id = room["id"].as_str().unwrap();
    let filtered = parse_body(
        app.request(
            "GET",
            &format!("/api/v1/bookings?status=confirmed&room_id={room_id}"),
            Some(&staff_token),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(filtered["total"], 3);

    let none = parse_body(
        app.request(
            "GET",
            "/api/v1/bookings?status=cancelled",
            Some(&staff_token),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(none["total"], 0);
}

#[tokio::test]
async fn test_get_booking_by_id() {
    let app = TestApp::new().await;
    let room = app.create_room("R106", "deluxe", 300.0).await;

    let created = parse_body(
        app.request(
            "POST",
            "/api/v1/bookings",
            None,
            Some(json!({
                "room_id": room["id"],
                "check_in": "2025-10-01T14:00:00Z",
                "check_out": "2025-10-03T11:00:00Z",
                "guest_details": { "name": "Didi", "email": "didi@example.com" }
            })),
        )
        .await,
    )
    .await;

    let token = app.token("receptionist");
    let booking_id = created["id"].as_str().unwrap();
    let fetched = parse_body(
        app.request(
            "GET",
            &format!("/api/v1/bookings/{booking_id}"),
            Some(&token),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(fetched["id"], created["id"]);

    let missing = app
        .request("GET", "/api/v1/bookings/nope", Some(&token), None)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
