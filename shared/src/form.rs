use crate::answers::AnswerList;
use crate::model::{ManualEvaluationRequest, parse_keywords};

/// Fields of the upload form. `F` is the platform file handle.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSubmission<F> {
    pub student_file: Option<F>,
    pub ideal_file: Option<F>,
    pub handwritten: bool,
}

impl<F> Default for DocumentSubmission<F> {
    fn default() -> Self {
        Self {
            student_file: None,
            ideal_file: None,
            handwritten: false,
        }
    }
}

impl<F: Clone> DocumentSubmission<F> {
    /// Both files, if both have been chosen.
    pub fn files(&self) -> Option<(F, F)> {
        match (&self.student_file, &self.ideal_file) {
            (Some(student), Some(ideal)) => Some((student.clone(), ideal.clone())),
            _ => None,
        }
    }
}

/// Fields of the typed-answer form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualSubmission {
    pub answers: AnswerList,
    pub keywords: String,
    pub model_answer: String,
}

impl ManualSubmission {
    pub fn to_request(&self) -> ManualEvaluationRequest {
        ManualEvaluationRequest {
            answers: self.answers.to_vec(),
            keywords: parse_keywords(&self.keywords),
            model_answer: self.model_answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_require_both_slots() {
        let mut doc = DocumentSubmission::<&str>::default();
        assert_eq!(doc.files(), None);
        doc.student_file = Some("student.pdf");
        assert_eq!(doc.files(), None);
        doc.ideal_file = Some("ideal.pdf");
        assert_eq!(doc.files(), Some(("student.pdf", "ideal.pdf")));
    }

    #[test]
    fn manual_request_is_sent_verbatim_except_keywords() {
        let manual = ManualSubmission {
            answers: ["  Mitochondria  ", ""].into_iter().collect(),
            keywords: "ATP, Energy ".into(),
            model_answer: "The powerhouse of the cell.".into(),
        };
        let request = manual.to_request();
        assert_eq!(request.answers, vec!["  Mitochondria  ", ""]);
        assert_eq!(request.keywords, vec!["atp", "energy"]);
        assert_eq!(request.model_answer, "The powerhouse of the cell.");
    }
}
