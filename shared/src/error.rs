use thiserror::Error;

/// Notice shown for every transport failure. Causes are logged, not displayed.
pub const GENERIC_FAILURE_NOTICE: &str = "An error occurred while evaluating the answers.";

/// Local checks that fail before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload both the student and ideal answer PDFs.")]
    MissingDocuments,
}

/// Anything that went wrong between dispatch and a decoded response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("an evaluation is already in progress")]
    Busy,
}

impl EvaluationError {
    /// Text for the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            EvaluationError::Validation(err) => err.to_string(),
            EvaluationError::Transport(_) => GENERIC_FAILURE_NOTICE.to_string(),
            EvaluationError::Busy => "Please wait for the current evaluation to finish.".to_string(),
        }
    }
}
