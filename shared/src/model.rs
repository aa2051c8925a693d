use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which input surface feeds the next submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EvaluationMode {
    #[default]
    Document,
    Manual,
}

impl EvaluationMode {
    pub fn title(&self) -> &'static str {
        match self {
            EvaluationMode::Document => "PDF Upload",
            EvaluationMode::Manual => "Manual Input",
        }
    }
}

/// Body of `POST /evaluate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ManualEvaluationRequest {
    pub answers: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(rename = "modelAnswer")]
    pub model_answer: String,
}

/// One scored answer as returned by the evaluation service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnswerResult {
    #[serde(rename = "question", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_answer: Option<String>,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
    #[serde(rename = "keywordScore")]
    pub keyword_score: f64,
    #[serde(rename = "grammarScore")]
    pub grammar_score: f64,
    #[serde(rename = "semanticScore")]
    pub semantic_score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EvaluationResponse {
    pub results: Vec<AnswerResult>,
}

/// Splits the comma separated keyword field the way the service expects it.
///
/// Tokens are trimmed and lowercased. Empty tokens are kept, so an empty
/// input yields a single empty keyword.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|k| k.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keywords_are_trimmed_and_lowercased() {
        assert_eq!(parse_keywords("a, B ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_keywords_yield_single_empty_token() {
        assert_eq!(parse_keywords(""), vec![""]);
        assert_eq!(parse_keywords("x,,y"), vec!["x", "", "y"]);
    }

    #[test]
    fn manual_request_uses_service_field_names() {
        let request = ManualEvaluationRequest {
            answers: vec!["photosynthesis uses light".into()],
            keywords: vec!["light".into()],
            model_answer: "Plants use light".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["modelAnswer"], "Plants use light");
        assert_eq!(value["answers"][0], "photosynthesis uses light");
        assert_eq!(value["keywords"][0], "light");
    }

    #[test]
    fn response_accepts_both_service_shapes() {
        let body = r#"{"results":[
            {"finalScore":8.5,"keywordScore":4,"grammarScore":2.5,"semanticScore":2},
            {"question":"Q1: What is osmosis?","student_answer":"Water moves","finalScore":3,"keywordScore":1,"grammarScore":1,"semanticScore":1}
        ]}"#;
        let response: EvaluationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].label, None);
        assert_eq!(response.results[0].final_score, 8.5);
        assert_eq!(response.results[1].label.as_deref(), Some("Q1: What is osmosis?"));
        assert_eq!(response.results[1].student_answer.as_deref(), Some("Water moves"));
    }

    #[test]
    fn response_without_results_is_rejected() {
        assert!(serde_json::from_str::<EvaluationResponse>(r#"{"error":"bad"}"#).is_err());
    }

    #[test]
    fn mode_round_trips_through_strings() {
        assert_eq!(EvaluationMode::default(), EvaluationMode::Document);
        assert_eq!(EvaluationMode::Manual.to_string(), "manual");
        assert_eq!(EvaluationMode::from_str("document").unwrap(), EvaluationMode::Document);
    }
}
