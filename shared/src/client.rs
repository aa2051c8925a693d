use async_trait::async_trait;

use crate::error::TransportError;
use crate::model::{EvaluationResponse, ManualEvaluationRequest};

pub const DOCUMENT_ENDPOINT: &str = "/evaluate-pdf";
pub const MANUAL_ENDPOINT: &str = "/evaluate";

// Multipart field names expected by the document endpoint
pub const STUDENT_FILE_FIELD: &str = "pdf";
pub const IDEAL_FILE_FIELD: &str = "ideal_pdf";
pub const HANDWRITTEN_FIELD: &str = "handwritten";

/// Transport to the evaluation service.
///
/// Implementations own the wire details (multipart assembly, JSON encoding,
/// status checks) and report every failure as a [`TransportError`].
#[async_trait(?Send)]
pub trait EvaluationClient {
    type File;

    async fn submit_document_evaluation(
        &self,
        student: &Self::File,
        ideal: &Self::File,
        handwritten: bool,
    ) -> Result<EvaluationResponse, TransportError>;

    async fn submit_manual_evaluation(
        &self,
        request: &ManualEvaluationRequest,
    ) -> Result<EvaluationResponse, TransportError>;
}

/// The single outbound request built for one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum EvaluationRequest<F> {
    Document {
        student: F,
        ideal: F,
        handwritten: bool,
    },
    Manual(ManualEvaluationRequest),
}

impl<F> EvaluationRequest<F> {
    pub fn endpoint(&self) -> &'static str {
        match self {
            EvaluationRequest::Document { .. } => DOCUMENT_ENDPOINT,
            EvaluationRequest::Manual(_) => MANUAL_ENDPOINT,
        }
    }

    pub async fn send<C>(&self, client: &C) -> Result<EvaluationResponse, TransportError>
    where
        C: EvaluationClient<File = F> + ?Sized,
    {
        match self {
            EvaluationRequest::Document {
                student,
                ideal,
                handwritten,
            } => {
                client
                    .submit_document_evaluation(student, ideal, *handwritten)
                    .await
            }
            EvaluationRequest::Manual(request) => client.submit_manual_evaluation(request).await,
        }
    }
}
