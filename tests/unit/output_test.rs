//! Tests for the Output module
//!
//! Reports render as human-readable text or machine-parseable JSON; these
//! tests pin the JSON shape.

use keymatch::core::models::{FileRef, Notice};
use keymatch::output::{OperationResult, OutputMode, SessionReport};

use crate::common::{Harness, MockKeyService, check_ok, key, upload_ok};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn fresh_view_serialization() {
    let h = Harness::new(MockKeyService::new());
    let json = serde_json::to_value(h.session.view()).unwrap();

    assert_eq!(json["app_name"], "");
    assert_eq!(json["missing_app_name_alert"], false);
    assert_eq!(json["upload_state"], "idle");
    assert_eq!(json["check_state"], "idle");
    assert!(json["upload_file_name"].is_null());
    assert_eq!(json["matched_count"], 0);
    assert!(json.get("upload_error").is_none());
    assert!(json.get("check_error").is_none());
    assert!(json["generated_at"].is_string());
}

#[tokio::test]
async fn report_serialization_after_both_workflows() {
    let h = Harness::new(
        MockKeyService::new()
            .with_upload(Ok(upload_ok("data.csv", "a,b\n1,2")))
            .with_check(Ok(check_ok("x.csv", Some(vec![key("k1", "A")]), Some(1)))),
    );
    h.session.set_app_name("MyApp");
    h.session.select_upload_file(FileRef::new("data.csv")).unwrap();
    h.session.dispatch_upload().await.unwrap();
    h.session.select_check_file(FileRef::new("x.csv")).await.unwrap();

    let report = SessionReport {
        view: h.session.view(),
        notices: h.notifier.notices(),
    };
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["app_name"], "MyApp");
    assert_eq!(json["upload_state"], "succeeded");
    assert_eq!(json["check_state"], "succeeded");
    assert_eq!(json["matched_count"], 1);
    assert_eq!(json["matched_keys"][0]["appName"], "A");
    assert_eq!(json["artifacts"][0]["name"], "uploaded_data.csv");
    assert_eq!(json["artifacts"][1]["name"], "matched_data.csv");
    assert_eq!(json["notices"][0]["kind"], "success");
    assert_eq!(json["notices"][0]["title"], "File uploaded successfully");
}

#[tokio::test]
async fn report_serialization_after_failure() {
    let h = Harness::new(MockKeyService::new().with_upload(Err("refused")));
    h.session.set_app_name("MyApp");
    h.session.select_upload_file(FileRef::new("data.csv")).unwrap();
    let _ = h.session.dispatch_upload().await;

    let json = serde_json::to_value(h.session.view()).unwrap();

    assert_eq!(json["upload_state"], "failed");
    assert_eq!(json["upload_error"], "request failed: refused");
}

#[test]
fn notice_serialization() {
    let json = serde_json::to_string(&Notice::error("Error", "boom")).unwrap();
    assert!(json.contains("\"kind\":\"error\""));
    assert!(json.contains("\"title\":\"Error\""));
    assert!(json.contains("\"message\":\"boom\""));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created .keymatch.toml".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created .keymatch.toml"));
}
