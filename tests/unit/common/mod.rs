//! Test doubles for the port traits
//!
//! These mocks provide scripted behavior for driving a `Session`
//! without network or filesystem access. `server` holds a local HTTP
//! stand-in for the adapter tests.


use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use keymatch::core::error::{ArtifactError, ServiceError};
use keymatch::core::models::{
    Artifact, ArtifactHandle, CheckResponse, DeliveredArtifact, FileRef, MatchedKey, Notice,
    UploadResponse,
};
use keymatch::core::ports::{ArtifactSink, KeyService, Notifier};
use keymatch::core::services::Session;
use tokio::sync::{Notify, Semaphore};

/// A request the mock service received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload { file: String, app_name: String },
    Check { file: String, app_name: Option<String> },
}

/// Key service answering from scripted queues
///
/// Unscripted calls fail with "no scripted response". A gated service holds
/// every call until `open_gate` is called.
pub struct MockKeyService {
    uploads: Mutex<VecDeque<Result<UploadResponse, String>>>,
    checks: Mutex<VecDeque<Result<CheckResponse, String>>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Semaphore>,
    pub started: Notify,
}

impl MockKeyService {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(VecDeque::new()),
            checks: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            gate: None,
            started: Notify::new(),
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn with_upload(self, response: Result<UploadResponse, &str>) -> Self {
        self.uploads.lock().unwrap().push_back(response.map_err(String::from));
        self
    }

    pub fn with_check(self, response: Result<CheckResponse, &str>) -> Self {
        self.checks.lock().unwrap().push_back(response.map_err(String::from));
        self
    }

    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1_000);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn upload_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Upload { .. })).count()
    }

    pub fn check_calls(&self) -> usize {
        self.calls().iter().filter(|c| matches!(c, Call::Check { .. })).count()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
        self.started.notify_one();
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

#[async_trait]
impl KeyService for MockKeyService {
    async fn upload(&self, file: &FileRef, app_name: &str) -> Result<UploadResponse, ServiceError> {
        self.record(Call::Upload {
            file: file.display_name.clone(),
            app_name: app_name.to_string(),
        })
        .await;
        let next = self.uploads.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err("no scripted response".to_string()))
            .map_err(ServiceError::Request)
    }

    async fn check(
        &self,
        file: &FileRef,
        app_name: Option<&str>,
    ) -> Result<CheckResponse, ServiceError> {
        self.record(Call::Check {
            file: file.display_name.clone(),
            app_name: app_name.map(String::from),
        })
        .await;
        let next = self.checks.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err("no scripted response".to_string()))
            .map_err(ServiceError::Request)
    }
}

/// Artifact sink keeping everything in memory
#[derive(Default)]
pub struct MemorySink {
    next_id: AtomicU64,
    staged: Mutex<HashMap<u64, Artifact>>,
    delivered: Mutex<Vec<Artifact>>,
    released: Mutex<Vec<u64>>,
    fail_delivery: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_delivery: true,
            ..Self::default()
        }
    }

    pub fn delivered(&self) -> Vec<Artifact> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<u64> {
        self.released.lock().unwrap().clone()
    }

    pub fn outstanding(&self) -> usize {
        self.staged.lock().unwrap().len()
    }
}

impl ArtifactSink for MemorySink {
    fn stage(&self, artifact: &Artifact) -> Result<ArtifactHandle, ArtifactError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.staged.lock().unwrap().insert(id, artifact.clone());
        Ok(ArtifactHandle {
            id,
            name: artifact.name.clone(),
            size: artifact.content.len(),
            location: None,
        })
    }

    fn deliver(&self, handle: &ArtifactHandle) -> Result<DeliveredArtifact, ArtifactError> {
        if self.fail_delivery {
            return Err(ArtifactError::Io {
                name: handle.name.clone(),
                source: std::io::Error::other("disk full"),
            });
        }
        let artifact = self
            .staged
            .lock()
            .unwrap()
            .get(&handle.id)
            .cloned()
            .ok_or(ArtifactError::UnknownHandle(handle.id))?;
        self.delivered.lock().unwrap().push(artifact);
        Ok(DeliveredArtifact {
            name: handle.name.clone(),
            location: None,
            size: handle.size,
        })
    }

    fn release(&self, handle: ArtifactHandle) {
        self.staged.lock().unwrap().remove(&handle.id);
        self.released.lock().unwrap().push(handle.id);
    }
}

/// Notifier recording what it was told
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    alerts: Mutex<Vec<bool>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices().last().cloned()
    }

    pub fn alert_visible(&self) -> bool {
        self.alerts.lock().unwrap().last().copied().unwrap_or(false)
    }

    pub fn alert_history(&self) -> Vec<bool> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn set_missing_app_name_alert(&self, visible: bool) {
        self.alerts.lock().unwrap().push(visible);
    }
}

/// A session wired to mocks, with handles kept for assertions
pub struct Harness {
    pub session: Session,
    pub service: Arc<MockKeyService>,
    pub sink: Arc<MemorySink>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(service: MockKeyService) -> Self {
        Self::with_sink(service, MemorySink::new())
    }

    pub fn with_sink(service: MockKeyService, sink: MemorySink) -> Self {
        let service = Arc::new(service);
        let sink = Arc::new(sink);
        let notifier = Arc::new(RecordingNotifier::default());
        let session = Session::new(service.clone(), sink.clone(), notifier.clone());
        Self {
            session,
            service,
            sink,
            notifier,
        }
    }
}

pub fn upload_ok(filename: &str, file: &str) -> UploadResponse {
    UploadResponse {
        filename: filename.to_string(),
        message: "ok".to_string(),
        file: file.to_string(),
    }
}

pub fn check_ok(filename: &str, entries: Option<Vec<MatchedKey>>, count: Option<u64>) -> CheckResponse {
    CheckResponse {
        filename: filename.to_string(),
        entries,
        matched_count: count,
        file: "key,appName,hash\n".to_string(),
    }
}

pub fn key(key: &str, app_name: &str) -> MatchedKey {
    MatchedKey {
        key: key.to_string(),
        app_name: app_name.to_string(),
        hash: format!("h-{key}"),
    }
}
