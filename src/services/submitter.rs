use crate::models::outcome_dto::Outcome;
use crate::models::selected_file_dao::SelectedFile;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::input::{FileInput, InputError};
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Failed to build form: {0}")]
    InvalidForm(reqwest::Error),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to read response: {0}")]
    ResponseReadFailed(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
}

// Anything that can take a file and answer with JSON
pub trait Endpoint {
    async fn process(&self, file: SelectedFile) -> Result<Value, SubmitError>;
}

/// Runs one submission: reads the selected file, sends it, and reports the
/// outcome to `sink`.
///
/// Only input errors are returned as `Err`. Transport and decoding failures
/// end up in the sink and in `Outcome::Failed`.
pub async fn submit<I, E, D>(input: &I, endpoint: &E, sink: &D) -> Result<Outcome, InputError>
where
    I: FileInput,
    E: Endpoint,
    D: DiagnosticSink,
{
    let span = info_span!("submission", id = %Uuid::new_v4());
    run(input, endpoint, sink).instrument(span).await
}

async fn run<I, E, D>(input: &I, endpoint: &E, sink: &D) -> Result<Outcome, InputError>
where
    I: FileInput,
    E: Endpoint,
    D: DiagnosticSink,
{
    let file = input.selected().await?;
    info!(
        name = %file.name,
        media_type = %file.media_type,
        size = file.size(),
        "submitting"
    );

    let outcome = match endpoint.process(file).await {
        Ok(value) => {
            sink.success(&value);
            Outcome::Processed(value)
        }
        Err(e) => {
            sink.failure(&e);
            Outcome::Failed(e)
        }
    };

    Ok(outcome)
}
