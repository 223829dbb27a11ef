use chrono::{Duration, Utc};
use serde_json::json;

use super::*;
use crate::server::service::waitlist::WaitlistService;

fn entry(phone: &str) -> Value {
    json!({
        "firstName": "Ann",
        "lastInitial": "b",
        "phone": phone,
        "gameType": "8-ball",
        "smsUpdates": true
    })
}

/// Tests the full lifecycle of one patron.
///
/// Enqueues, rejects a second entry for the same phone, checks in, then sweeps two
/// hours later.
///
/// Expected: the checked-in entry survives the sweep
#[tokio::test]
async fn enqueue_duplicate_check_in_and_sweep() {
    let app = TestApp::new().await;

    let (status, created) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0100"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["checkedIn"], false);
    assert_eq!(created["smsUpdates"], true);
    assert_eq!(created["lastInitial"], "B");

    let (status, body) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0100"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Phone number already exists in the waitlist");

    let id = created["id"].as_str().unwrap();
    let (status, checked_in) = app
        .send(Method::PUT, &format!("/api/waitlist/checkin/{}", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checked_in["checkedIn"], true);

    WaitlistService::new(app.db())
        .sweep_expired(Utc::now() + Duration::hours(2))
        .await
        .unwrap();

    let (status, list) = app.send(Method::GET, "/api/waitlist").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id);
}

/// Tests that an entry that never checks in is swept.
///
/// Expected: waitlist empty after a sweep 61 minutes later
#[tokio::test]
async fn unconfirmed_entry_is_swept() {
    let app = TestApp::new().await;

    app.send_json(Method::POST, "/api/waitlist", entry("555-0101"))
        .await;

    WaitlistService::new(app.db())
        .sweep_expired(Utc::now() + Duration::minutes(61))
        .await
        .unwrap();

    let (_, list) = app.send(Method::GET, "/api/waitlist").await;
    assert!(list.as_array().unwrap().is_empty());
}

/// Tests that update answers 201 and clears both flags.
///
/// Expected: 201 with checkedIn and smsUpdates false, even when smsUpdates is sent
#[tokio::test]
async fn update_returns_created_and_clears_flags() {
    let app = TestApp::new().await;
    let (_, created) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0102"))
        .await;
    let id = created["id"].as_str().unwrap();
    app.send(Method::PUT, &format!("/api/waitlist/checkin/{}", id))
        .await;

    let (status, updated) = app
        .send_json(
            Method::PUT,
            &format!("/api/waitlist/{}", id),
            json!({
                "firstName": "Ann",
                "lastInitial": "c",
                "phone": "555-0102",
                "gameType": "9-ball",
                "smsUpdates": true
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(updated["lastInitial"], "C");
    assert_eq!(updated["checkedIn"], false);
    assert_eq!(updated["smsUpdates"], false);
}

/// Tests the reset route.
///
/// Expected: 200 with both flags cleared and the name untouched
#[tokio::test]
async fn reset_clears_flags() {
    let app = TestApp::new().await;
    let (_, created) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0103"))
        .await;
    let id = created["id"].as_str().unwrap();
    app.send(Method::PUT, &format!("/api/waitlist/checkin/{}", id))
        .await;

    let (status, reset) = app
        .send(Method::PUT, &format!("/api/waitlist/reset/{}", id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["checkedIn"], false);
    assert_eq!(reset["smsUpdates"], false);
    assert_eq!(reset["firstName"], "Ann");
}

/// Tests the not-found and delete responses.
///
/// Expected: 404 for unknown IDs on every route, 204 for a real delete
#[tokio::test]
async fn unknown_ids_and_delete() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::PUT, "/api/waitlist/checkin/missing")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = app.send(Method::PUT, "/api/waitlist/reset/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send_json(Method::PUT, "/api/waitlist/missing", entry("555-0199"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::DELETE, "/api/waitlist/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0104"))
        .await;
    let (_, kept) = app
        .send_json(Method::POST, "/api/waitlist", entry("555-0105"))
        .await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/api/waitlist/{}", created["id"].as_str().unwrap()),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = app.send(Method::GET, "/api/waitlist").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], kept["id"]);
}

/// Tests malformed and incomplete bodies.
///
/// Expected: 400 with an error message for both
#[tokio::test]
async fn rejects_invalid_bodies() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send_json(Method::POST, "/api/waitlist", json!({ "firstName": "Ann" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/waitlist",
            json!({
                "firstName": " ",
                "lastInitial": "B",
                "phone": "555-0106",
                "gameType": "8-ball"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
