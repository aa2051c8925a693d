use async_trait::async_trait;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::client::{
    DOCUMENT_ENDPOINT, HANDWRITTEN_FIELD, IDEAL_FILE_FIELD, MANUAL_ENDPOINT, STUDENT_FILE_FIELD,
};
use shared::{EvaluationClient, EvaluationResponse, ManualEvaluationRequest, TransportError};
use web_sys::FormData;

use crate::config::ApiConfig;

/// Talks to the evaluation service through the browser's fetch.
pub struct GlooEvaluationClient {
    config: ApiConfig,
}

impl GlooEvaluationClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl EvaluationClient for GlooEvaluationClient {
    type File = GlooFile;

    async fn submit_document_evaluation(
        &self,
        student: &GlooFile,
        ideal: &GlooFile,
        handwritten: bool,
    ) -> Result<EvaluationResponse, TransportError> {
        let form_data = FormData::new().map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename(STUDENT_FILE_FIELD, student.as_ref(), &student.name())
            .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename(IDEAL_FILE_FIELD, ideal.as_ref(), &ideal.name())
            .map_err(|e| TransportError::Request(format!("{:?}", e)))?;
        form_data
            .append_with_str(HANDWRITTEN_FIELD, &handwritten.to_string())
            .map_err(|e| TransportError::Request(format!("{:?}", e)))?;

        let request = Request::post(&self.config.endpoint(DOCUMENT_ENDPOINT))
            .body(form_data)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        decode_response(response).await
    }

    async fn submit_manual_evaluation(
        &self,
        request: &ManualEvaluationRequest,
    ) -> Result<EvaluationResponse, TransportError> {
        let request = Request::post(&self.config.endpoint(MANUAL_ENDPOINT))
            .json(request)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        decode_response(response).await
    }
}

async fn decode_response(response: Response) -> Result<EvaluationResponse, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(TransportError::Status { status, body });
    }

    serde_json::from_str::<EvaluationResponse>(&body).map_err(|e| {
        log::debug!("Undecodable response body: {}", body);
        TransportError::Decode(e.to_string())
    })
}
