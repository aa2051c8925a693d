//! State and submission workflow of the evaluation screen.
//!
//! An evaluation runs in three steps so that an event-loop UI never holds the
//! session across the network await:
//!
//! 1. [`ExamSession::begin`] validates the active form, raises the loading
//!    flag and builds the request.
//! 2. [`PendingEvaluation::dispatch`] performs the call through an
//!    [`EvaluationClient`].
//! 3. [`ExamSession::complete`] applies the response and lowers the flag.
//!
//! Every `begin` and every `reset` advances the session generation. A
//! completion carrying an older generation is discarded without touching the
//! results or the loading flag.

use crate::answers::AnswerList;
use crate::client::{EvaluationClient, EvaluationRequest};
use crate::error::{EvaluationError, TransportError, ValidationError};
use crate::form::{DocumentSubmission, ManualSubmission};
use crate::model::{AnswerResult, EvaluationMode, EvaluationResponse};
use crate::render::{ResultRow, render_rows};

#[derive(Clone, Debug, PartialEq)]
pub struct ExamSession<F> {
    mode: EvaluationMode,
    document: DocumentSubmission<F>,
    manual: ManualSubmission,
    results: Vec<AnswerResult>,
    loading: bool,
    generation: u64,
}

impl<F> Default for ExamSession<F> {
    fn default() -> Self {
        Self {
            mode: EvaluationMode::default(),
            document: DocumentSubmission::default(),
            manual: ManualSubmission::default(),
            results: Vec::new(),
            loading: false,
            generation: 0,
        }
    }
}

/// A request that has been validated and is ready to go out.
#[derive(Debug)]
pub struct PendingEvaluation<F> {
    generation: u64,
    request: EvaluationRequest<F>,
}

/// Result of one dispatched request, tagged with the generation it belongs to.
#[derive(Debug)]
pub struct Completion {
    generation: u64,
    result: Result<EvaluationResponse, TransportError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvaluationOutcome {
    Success { count: usize },
    ValidationError(ValidationError),
    TransportError(TransportError),
    Busy,
    /// The response belonged to a submission that was reset away.
    Discarded,
}

impl EvaluationOutcome {
    /// Notice for the banner, if this outcome needs one.
    pub fn notice(&self) -> Option<String> {
        match self {
            EvaluationOutcome::Success { .. } | EvaluationOutcome::Discarded => None,
            EvaluationOutcome::ValidationError(err) => {
                Some(EvaluationError::Validation(err.clone()).user_message())
            }
            EvaluationOutcome::TransportError(err) => {
                Some(EvaluationError::Transport(err.clone()).user_message())
            }
            EvaluationOutcome::Busy => Some(EvaluationError::Busy.user_message()),
        }
    }
}

impl From<EvaluationError> for EvaluationOutcome {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::Validation(err) => EvaluationOutcome::ValidationError(err),
            EvaluationError::Transport(err) => EvaluationOutcome::TransportError(err),
            EvaluationError::Busy => EvaluationOutcome::Busy,
        }
    }
}

impl<F> PendingEvaluation<F> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &EvaluationRequest<F> {
        &self.request
    }

    pub async fn dispatch<C>(self, client: &C) -> Completion
    where
        C: EvaluationClient<File = F> + ?Sized,
    {
        log::info!(
            "Dispatching evaluation #{} to {}",
            self.generation,
            self.request.endpoint()
        );
        let result = self.request.send(client).await;
        Completion {
            generation: self.generation,
            result,
        }
    }
}

impl Completion {
    pub fn new(generation: u64, result: Result<EvaluationResponse, TransportError>) -> Self {
        Self { generation, result }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<F> ExamSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn document(&self) -> &DocumentSubmission<F> {
        &self.document
    }

    pub fn manual(&self) -> &ManualSubmission {
        &self.manual
    }

    pub fn answers(&self) -> &AnswerList {
        &self.manual.answers
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        render_rows(&self.results)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Input mode

    pub fn set_mode(&mut self, mode: EvaluationMode) {
        self.mode = mode;
    }

    // Document fields

    pub fn set_student_file(&mut self, file: Option<F>) {
        self.document.student_file = file;
    }

    pub fn set_ideal_file(&mut self, file: Option<F>) {
        self.document.ideal_file = file;
    }

    pub fn set_handwritten(&mut self, handwritten: bool) {
        self.document.handwritten = handwritten;
    }

    pub fn toggle_handwritten(&mut self) {
        self.document.handwritten = !self.document.handwritten;
    }

    // Manual fields

    pub fn set_model_answer(&mut self, model_answer: String) {
        self.manual.model_answer = model_answer;
    }

    pub fn set_keywords(&mut self, keywords: String) {
        self.manual.keywords = keywords;
    }

    pub fn add_answer(&mut self) {
        self.manual.answers.push_empty();
    }

    pub fn update_answer(&mut self, index: usize, value: String) -> bool {
        self.manual.answers.set(index, value)
    }

    pub fn remove_answer(&mut self, index: usize) -> bool {
        self.manual.answers.remove(index)
    }

    /// Restores both forms and clears the results.
    ///
    /// A request still in flight is orphaned: the loading flag drops now and
    /// its response will be discarded when it arrives.
    pub fn reset(&mut self) {
        if self.loading {
            log::info!("Reset while evaluation #{} is in flight", self.generation);
        }
        self.document = DocumentSubmission::default();
        self.manual = ManualSubmission::default();
        self.results.clear();
        self.loading = false;
        self.generation += 1;
    }

    /// Applies a finished request.
    pub fn complete(&mut self, completion: Completion) -> EvaluationOutcome {
        if completion.generation != self.generation || !self.loading {
            log::warn!(
                "Discarding stale evaluation #{} (current #{})",
                completion.generation,
                self.generation
            );
            return EvaluationOutcome::Discarded;
        }

        self.loading = false;
        match completion.result {
            Ok(response) => {
                let count = response.results.len();
                log::info!("Evaluation #{} returned {} result(s)", completion.generation, count);
                self.results = response.results;
                EvaluationOutcome::Success { count }
            }
            Err(err) => {
                log::error!("Evaluation #{} failed: {}", completion.generation, err);
                EvaluationOutcome::TransportError(err)
            }
        }
    }
}

impl<F: Clone> ExamSession<F> {
    /// Validates the active form and raises the loading flag.
    pub fn begin(&mut self) -> Result<PendingEvaluation<F>, EvaluationError> {
        if self.loading {
            return Err(EvaluationError::Busy);
        }

        let request = match self.mode {
            EvaluationMode::Document => {
                let (student, ideal) = self
                    .document
                    .files()
                    .ok_or(ValidationError::MissingDocuments)?;
                EvaluationRequest::Document {
                    student,
                    ideal,
                    handwritten: self.document.handwritten,
                }
            }
            EvaluationMode::Manual => EvaluationRequest::Manual(self.manual.to_request()),
        };

        self.generation += 1;
        self.loading = true;
        Ok(PendingEvaluation {
            generation: self.generation,
            request,
        })
    }

    /// Runs a whole evaluation against `client`.
    pub async fn evaluate<C>(&mut self, client: &C) -> EvaluationOutcome
    where
        C: EvaluationClient<File = F> + ?Sized,
    {
        let pending = match self.begin() {
            Ok(pending) => pending,
            Err(err) => return err.into(),
        };
        let completion = pending.dispatch(client).await;
        self.complete(completion)
    }
}
