#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn mark_attendance_posts_action_and_time() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/mark_attendance")
            .json_body(json!({ "action": "check_in", "time": "09:05" }));
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = api_client(&server);
    client
        .mark_attendance(AttendanceAction::CheckIn, "09:05")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn mark_attendance_check_out_uses_its_own_action() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/mark_attendance")
            .json_body(json!({ "action": "check_out", "time": "17:30" }));
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = api_client(&server);
    client
        .mark_attendance(AttendanceAction::CheckOut, "17:30")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn mark_attendance_surfaces_backend_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/mark_attendance");
        then.status(500)
            .json_body(json!({ "error": "database unavailable", "code": "INTERNAL" }));
    });

    let client = api_client(&server);
    let err = client
        .mark_attendance(AttendanceAction::CheckIn, "09:05")
        .await
        .unwrap_err();
    assert_eq!(err.error, "database unavailable");
    assert_eq!(err.code, "INTERNAL");
}

#[tokio::test]
async fn mark_attendance_maps_non_json_error_to_unknown() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/mark_attendance");
        then.status(503).body("bad gateway");
    });

    let client = api_client(&server);
    let err = client
        .mark_attendance(AttendanceAction::CheckOut, "17:30")
        .await
        .unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
}

#[tokio::test]
async fn mark_attendance_maps_transport_failure() {
    // Nothing listens on this port; the request itself must fail.
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client
        .mark_attendance(AttendanceAction::CheckIn, "09:05")
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn export_returns_binary_payload() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/export/leaves")
            .json_body(json!({ "format": "csv" }));
        then.status(200)
            .header("content-type", "text/csv")
            .body("id,employee,days\n1,alice,3\n");
    });

    let client = api_client(&server);
    let bytes = client
        .export(ExportTarget::new(ExportResource::Leaves, ExportFormat::Csv))
        .await
        .unwrap();
    assert_eq!(bytes, b"id,employee,days\n1,alice,3\n");
    mock.assert_async().await;
}

#[tokio::test]
async fn export_addresses_resource_in_path() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/export/attendance")
            .json_body(json!({ "format": "pdf" }));
        then.status(200).body("%PDF-1.4");
    });

    let client = api_client(&server);
    let bytes = client
        .export(ExportTarget::new(
            ExportResource::Attendance,
            ExportFormat::Pdf,
        ))
        .await
        .unwrap();
    assert_eq!(bytes, b"%PDF-1.4");
    mock.assert_async().await;
}

#[tokio::test]
async fn export_failure_yields_error_and_no_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/export/leaves");
        then.status(500)
            .json_body(json!({ "error": "export backend down", "code": "INTERNAL" }));
    });

    let client = api_client(&server);
    let err = client
        .export(ExportTarget::new(ExportResource::Leaves, ExportFormat::Pdf))
        .await
        .unwrap_err();
    assert_eq!(err.error, "export backend down");
}
