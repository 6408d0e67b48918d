//! Test doubles: an input with a fixed file, a sink that records what it
//! was told, and an in-process `/process` server.

use crate::models::selected_file_dao::SelectedFile;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::input::{FileInput, InputError};
use crate::services::submitter::SubmitError;
use axum::extract::{Multipart, State};
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct StaticInput(pub Option<SelectedFile>);

impl FileInput for StaticInput {
    async fn selected(&self) -> Result<SelectedFile, InputError> {
        self.0.clone().ok_or(InputError::NoFileSelected)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    successes: Mutex<Vec<Value>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn successes(&self) -> Vec<Value> {
        self.successes.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn success(&self, value: &Value) {
        self.successes.lock().unwrap().push(value.clone());
    }

    fn failure(&self, err: &SubmitError) {
        self.failures.lock().unwrap().push(err.to_string());
    }
}

#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Parts seen by the stub server, one entry per request.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Vec<ReceivedPart>>>>);

impl Received {
    pub fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.0.lock().unwrap().clone()
    }
}

async fn process(State(received): State<Received>, mut multipart: Multipart) -> Json<Value> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    received.0.lock().unwrap().push(parts);
    Json(json!({"status": "ok"}))
}

pub async fn spawn_process_server() -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/process", post(process))
        .with_state(received.clone());

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    (format!("http://{addr}"), received)
}

/// Url of a local port nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}
