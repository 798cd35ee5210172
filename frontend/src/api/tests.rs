#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use chrono::NaiveDate;
use serde_json::json;

fn student_json(id: &str, name: &str, year: u32) -> serde_json::Value {
    json!({
        "_id": id,
        "type": "student",
        "name": name,
        "present": true,
        "rollNo": format!("ECE-{}", id),
        "academicYear": year,
        "date": 31,
        "month": 1,
        "year": 2025
    })
}

fn staff_json(id: &str, name: &str, designation: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "type": "staff",
        "name": name,
        "present": false,
        "empId": format!("EMP-{}", id),
        "designation": designation
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url(""))
}

fn jan_31() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

#[tokio::test]
async fn list_attendance_sends_date_parts_and_type() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/attendance")
            .query_param("date", "31")
            .query_param("month", "1")
            .query_param("year", "2025")
            .query_param("type", "student");
        then.status(200).json_body(json!([
            student_json("r1", "Ann", 2),
            student_json("r2", "Ben", 3)
        ]));
    });

    let api = api_client(&server);
    let records = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Student))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Ann");
    assert_eq!(records[1].academic_year(), Some(3));
    assert_eq!(server.hits(GET, "/api/attendance"), 1);
}

#[tokio::test]
async fn list_attendance_decodes_staff_records() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/attendance")
            .query_param("type", "staff");
        then.status(200)
            .json_body(json!([staff_json("s1", "Cid", "Lecturer")]));
    });

    let api = api_client(&server);
    let records = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Staff))
        .await
        .unwrap();

    assert_eq!(records[0].designation(), Some("Lecturer"));
    assert_eq!(records[0].identifier(), "EMP-s1");
    assert!(!records[0].present);
}

#[tokio::test]
async fn list_attendance_maps_error_body_to_api_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.status(500)
            .json_body(json!({ "error": "database offline", "code": "INTERNAL" }));
    });

    let api = api_client(&server);
    let err = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Student))
        .await
        .unwrap_err();

    assert_eq!(err.error, "database offline");
    assert_eq!(err.code, "INTERNAL");
}

#[tokio::test]
async fn list_attendance_reports_status_when_error_body_is_not_json() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.status(404).json_body(json!("Not Found"));
    });

    let api = api_client(&server);
    let err = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Student))
        .await
        .unwrap_err();

    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.contains("404"));
}

#[tokio::test]
async fn list_attendance_rejects_malformed_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.status(200).json_body(json!({ "records": [] }));
    });

    let api = api_client(&server);
    let err = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Student))
        .await
        .unwrap_err();

    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn list_attendance_propagates_transport_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance");
        then.network_error("connection refused");
    });

    let api = api_client(&server);
    let err = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Student))
        .await
        .unwrap_err();

    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(err.error, "connection refused");
}

#[tokio::test]
async fn create_person_posts_draft_fields_with_selected_date() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance");
        then.status(201).json_body(student_json("r9", "Eve", 1));
    });

    let api = api_client(&server);
    let request = CreatePersonRequest::new(
        "Eve",
        PersonDetails::Student {
            roll_no: "ECE-09".into(),
            academic_year: Some(1),
        },
        jan_31(),
    );
    api.create_person(&request).await.unwrap();

    let received = server.received();
    assert_eq!(received.len(), 1);
    let body = received[0].body.clone().unwrap();
    assert_eq!(body["name"], json!("Eve"));
    assert_eq!(body["rollNo"], json!("ECE-09"));
    assert_eq!(body["academicYear"], json!(1));
    assert_eq!(body["type"], json!("student"));
    assert_eq!(body["date"], json!(31));
    assert_eq!(body["month"], json!(1));
    assert_eq!(body["year"], json!(2025));
}

#[tokio::test]
async fn create_person_surfaces_server_rejection() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/attendance");
        then.status(400)
            .json_body(json!({ "error": "rollNo already exists", "code": "CONFLICT" }));
    });

    let api = api_client(&server);
    let request = CreatePersonRequest::new(
        "Eve",
        PersonDetails::Student {
            roll_no: "ECE-09".into(),
            academic_year: Some(1),
        },
        jan_31(),
    );
    let err = api.create_person(&request).await.unwrap_err();
    assert_eq!(err.error, "rollNo already exists");
}

#[tokio::test]
async fn unmatched_route_is_reported_as_unknown() {
    let server = MockServer::start_async().await;
    let api = api_client(&server);
    let err = api
        .list_attendance(&AttendanceQuery::new(jan_31(), PersonKind::Staff))
        .await
        .unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.contains("/api/attendance"));
}
