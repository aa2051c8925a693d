pub mod answers;
pub mod client;
pub mod error;
pub mod form;
pub mod model;
pub mod render;
pub mod session;

pub use answers::AnswerList;
pub use client::{EvaluationClient, EvaluationRequest};
pub use error::{EvaluationError, TransportError, ValidationError};
pub use form::{DocumentSubmission, ManualSubmission};
pub use model::{AnswerResult, EvaluationMode, EvaluationResponse, ManualEvaluationRequest};
pub use render::{Metric, ResultRow, ScoreBucket};
pub use session::{Completion, EvaluationOutcome, ExamSession, PendingEvaluation};
