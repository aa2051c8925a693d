use derive_more::Display;
use strum_macros::AsRefStr;

use crate::model::AnswerResult;

/// Colour bucket of the final score badge. The string form is the CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreBucket {
    High,
    Medium,
    Low,
}

impl ScoreBucket {
    pub fn for_score(final_score: f64) -> Self {
        if final_score >= 7.0 {
            ScoreBucket::High
        } else if final_score >= 5.0 {
            ScoreBucket::Medium
        } else {
            ScoreBucket::Low
        }
    }
}

/// Percentage of a progress bar. Not clamped: scores outside 0..=10 overflow.
#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display(fmt = "{}%", _0)]
pub struct BarWidth(pub f64);

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    /// CSS modifier for the bar fill.
    pub class: &'static str,
    pub value: f64,
    pub width: BarWidth,
}

impl Metric {
    fn new(name: &'static str, class: &'static str, value: f64) -> Self {
        Self {
            name,
            class,
            value,
            width: BarWidth(value * 10.0),
        }
    }
}

/// Display form of one [`AnswerResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub student_answer: Option<String>,
    pub final_score: f64,
    pub bucket: ScoreBucket,
    pub metrics: [Metric; 3],
}

impl ResultRow {
    pub fn from_result(index: usize, result: &AnswerResult) -> Self {
        let label = result
            .label
            .clone()
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| format!("Student {}", index + 1));

        Self {
            label,
            student_answer: result.student_answer.clone(),
            final_score: result.final_score,
            bucket: ScoreBucket::for_score(result.final_score),
            metrics: [
                Metric::new("Keywords", "keywords", result.keyword_score),
                Metric::new("Grammar", "grammar", result.grammar_score),
                Metric::new("Semantic", "semantic", result.semantic_score),
            ],
        }
    }

    pub fn badge_text(&self) -> String {
        format!("{} / 10", self.final_score)
    }
}

pub fn render_rows(results: &[AnswerResult]) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| ResultRow::from_result(index, result))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: Option<&str>, final_score: f64) -> AnswerResult {
        AnswerResult {
            label: label.map(str::to_string),
            student_answer: None,
            final_score,
            keyword_score: 4.0,
            grammar_score: 2.5,
            semantic_score: 12.0,
        }
    }

    #[test]
    fn buckets_follow_thresholds() {
        assert_eq!(ScoreBucket::for_score(8.0), ScoreBucket::High);
        assert_eq!(ScoreBucket::for_score(7.0), ScoreBucket::High);
        assert_eq!(ScoreBucket::for_score(6.0), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::for_score(5.0), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::for_score(4.99), ScoreBucket::Low);
        assert_eq!(ScoreBucket::for_score(3.0), ScoreBucket::Low);
    }

    #[test]
    fn bucket_class_names() {
        assert_eq!(ScoreBucket::High.as_ref(), "high");
        assert_eq!(ScoreBucket::Medium.as_ref(), "medium");
        assert_eq!(ScoreBucket::Low.as_ref(), "low");
    }

    #[test]
    fn labels_fall_back_to_one_based_index() {
        let rows = render_rows(&[result(None, 1.0), result(Some("Q2: Define entropy?"), 1.0)]);
        assert_eq!(rows[0].label, "Student 1");
        assert_eq!(rows[1].label, "Q2: Define entropy?");
        assert_eq!(ResultRow::from_result(4, &result(Some(""), 1.0)).label, "Student 5");
    }

    #[test]
    fn metrics_scale_by_ten_without_clamping() {
        let row = ResultRow::from_result(0, &result(None, 7.5));
        let widths: Vec<f64> = row.metrics.iter().map(|m| m.width.0).collect();
        assert_eq!(widths, vec![40.0, 25.0, 120.0]);
        assert_eq!(row.metrics[2].width.to_string(), "120%");
        assert_eq!(row.badge_text(), "7.5 / 10");
    }
}
