//! Tests for the upload workflow driven through a session

use keymatch::core::error::WorkflowError;
use keymatch::core::models::{FileRef, NoticeKind, StateLabel, TEXT_CSV, UPLOADED_ARTIFACT};
use test_case::test_case;

use crate::common::{Call, Harness, MockKeyService, upload_ok};

// =============================================================================
// VALIDATION GATE
// =============================================================================

#[test_case("" ; "empty")]
#[test_case(" " ; "single space")]
#[test_case("\t\n" ; "tab and newline")]
#[test_case("     " ; "many spaces")]
#[tokio::test]
async fn test_blank_app_name_never_dispatches(name: &str) {
    let h = Harness::new(MockKeyService::new().with_upload(Ok(upload_ok("data.csv", "a"))));
    h.session.set_app_name(name);
    h.session.select_upload_file(FileRef::new("data.csv")).unwrap();

    let err = h.session.dispatch_upload().await.unwrap_err();

    assert!(matches!(err, WorkflowError::MissingAppName));
    assert_eq!(h.service.upload_calls(), 0);
    assert!(h.notifier.alert_visible());
    assert!(h.session.view().missing_app_name_alert);
    assert_eq!(h.session.view().upload_state, StateLabel::Idle);

    let notice = h.notifier.last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.message, "Application Name is required");
}

#[tokio::test]
async fn test_setting_name_clears_alert() {
    let h = Harness::new(MockKeyService::new().with_upload(Ok(upload_ok("data.csv", "a"))));
    h.session.select_upload_file(FileRef::new("data.csv")).unwrap();
    assert!(h.session.dispatch_upload().await.is_err());
    assert!(h.notifier.alert_visible());

    h.session.set_app_name("MyApp");
    assert!(!h.notifier.alert_visible());
    assert!(!h.session.view().missing_app_name_alert);

    assert!(h.session.dispatch_upload().await.unwrap().is_some());
}

// =============================================================================
// DISPATCH
// =============================================================================

#[tokio::test]
async fn test_successful_upload_emits_artifact() {
    let h = Harness::new(
        MockKeyService::new().with_upload(Ok(upload_ok("data.csv", "a,b\n1,2"))),
    );
    h.session.select_upload_file(FileRef::new("input/data.csv")).unwrap();
    h.session.set_app_name("MyApp");

    let response = h.session.dispatch_upload().await.unwrap().unwrap();
    assert_eq!(response.filename, "data.csv");

    assert_eq!(h.service.calls(), vec![Call::Upload {
        file: "data.csv".to_string(),
        app_name: "MyApp".to_string(),
    }]);
    assert_eq!(h.session.view().upload_state, StateLabel::Succeeded);

    let delivered = h.sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, UPLOADED_ARTIFACT);
    assert_eq!(delivered[0].mime_type, TEXT_CSV);
    assert_eq!(delivered[0].content, b"a,b\n1,2");

    let notice = h.notifier.last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, "File uploaded successfully");
    assert_eq!(notice.message, "File: data.csv\nMessage: ok");
}

#[tokio::test]
async fn test_one_request_per_dispatch() {
    let h = Harness::new(
        MockKeyService::new()
            .with_upload(Ok(upload_ok("a.csv", "1")))
            .with_upload(Ok(upload_ok("a.csv", "2"))),
    );
    h.session.set_app_name("MyApp");
    h.session.select_upload_file(FileRef::new("a.csv")).unwrap();

    h.session.dispatch_upload().await.unwrap();
    assert_eq!(h.service.upload_calls(), 1);
    h.session.dispatch_upload().await.unwrap();
    assert_eq!(h.service.upload_calls(), 2);
}

#[tokio::test]
async fn test_failure_is_reported_and_retryable() {
    let h = Harness::new(
        MockKeyService::new()
            .with_upload(Err("connection reset"))
            .with_upload(Ok(upload_ok("a.csv", "x"))),
    );
    h.session.set_app_name("MyApp");
    h.session.select_upload_file(FileRef::new("a.csv")).unwrap();

    let err = h.session.dispatch_upload().await.unwrap_err();
    assert!(matches!(err, WorkflowError::Transport(_)));

    let view = h.session.view();
    assert_eq!(view.upload_state, StateLabel::Failed);
    assert_eq!(view.upload_error.as_deref(), Some("request failed: connection reset"));
    assert_eq!(view.upload_file_name.as_deref(), Some("a.csv"));
    assert!(h.sink.delivered().is_empty());

    let notice = h.notifier.last_notice().unwrap();
    assert_eq!(notice.title, "Error uploading file");
    assert_eq!(notice.message, "request failed: connection reset");

    // Retry without reselecting
    assert!(h.session.dispatch_upload().await.unwrap().is_some());
    assert_eq!(h.session.view().upload_state, StateLabel::Succeeded);
}

// =============================================================================
// FILE SLOT
// =============================================================================

#[tokio::test]
async fn test_dispatch_after_remove_is_noop() {
    let h = Harness::new(MockKeyService::new().with_upload(Ok(upload_ok("a.csv", "x"))));
    h.session.set_app_name("MyApp");
    h.session.select_upload_file(FileRef::new("a.csv")).unwrap();
    h.session.remove_upload_file().unwrap();

    assert!(h.session.view().upload_file_name.is_none());
    assert!(h.session.dispatch_upload().await.unwrap().is_none());
    assert_eq!(h.service.upload_calls(), 0);
    assert!(h.notifier.notices().is_empty());

    h.session.select_upload_file(FileRef::new("b.csv")).unwrap();
    assert!(h.session.dispatch_upload().await.unwrap().is_some());
    assert_eq!(h.service.upload_calls(), 1);
}

#[tokio::test]
async fn test_dispatch_without_file_skips_validation() {
    let h = Harness::new(MockKeyService::new());

    assert!(h.session.dispatch_upload().await.unwrap().is_none());
    assert!(!h.notifier.alert_visible());
    assert!(h.notifier.notices().is_empty());
}

#[test]
fn test_selecting_replaces_previous_file() {
    let h = Harness::new(MockKeyService::new());
    h.session.select_upload_file(FileRef::new("first.csv")).unwrap();
    h.session.select_upload_file(FileRef::new("second.csv")).unwrap();
    assert_eq!(h.session.view().upload_file_name.as_deref(), Some("second.csv"));
}
