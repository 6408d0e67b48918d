use crate::services::submitter::SubmitError;
use serde_json::Value;

/// Terminal state of one submission.
#[derive(Debug)]
pub enum Outcome {
    Processed(Value),
    Failed(SubmitError),
}

