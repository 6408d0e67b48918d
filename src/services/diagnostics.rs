use crate::services::submitter::SubmitError;
use serde_json::Value;
use tracing::{error, info};

pub trait DiagnosticSink {
    fn success(&self, value: &Value);
    fn failure(&self, err: &SubmitError);
}

/// Reports outcomes as tracing events.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn success(&self, value: &Value) {
        info!(response = %value, "processed");
    }

    fn failure(&self, err: &SubmitError) {
        error!("Error: {}", err);
    }
}
