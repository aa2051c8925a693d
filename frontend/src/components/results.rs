use shared::{Metric, ResultRow};
use yew::prelude::*;

pub fn render_results(rows: &[ResultRow]) -> Html {
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="results">
            <h3 class="results-title">
                <span class="results-icon">{"📊"}</span>{" Evaluation Results"}
            </h3>
            <div class="results-list">
                { for rows.iter().enumerate().map(|(idx, row)| render_row(idx, row)) }
            </div>
        </div>
    }
}

fn render_row(idx: usize, row: &ResultRow) -> Html {
    html! {
        <div class="result-item" key={idx.to_string()}>
            <div class="result-header">
                <strong>{ &row.label }</strong>
                <span class={classes!("score-badge", row.bucket.as_ref().to_owned())}>
                    { row.badge_text() }
                </span>
            </div>
            if let Some(answer) = &row.student_answer {
                <p class="student-answer-text">{ answer }</p>
            }
            <div class="score-details">
                { for row.metrics.iter().map(render_metric) }
            </div>
        </div>
    }
}

fn render_metric(metric: &Metric) -> Html {
    html! {
        <div class="score-metric">
            <span class="metric-label">{ format!("{}:", metric.name) }</span>
            <div class="progress-bar">
                <div
                    class={classes!("progress-fill", metric.class)}
                    style={format!("width: {}", metric.width)}
                ></div>
            </div>
            <span class="metric-value">{ metric.value }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use shared::ScoreBucket;

    const STYLES: &str = include_str!("../../styles.css");

    #[test]
    fn every_bucket_has_a_badge_style() {
        for bucket in [ScoreBucket::High, ScoreBucket::Medium, ScoreBucket::Low] {
            let selector = format!(".score-badge.{}", bucket.as_ref());
            assert!(STYLES.contains(&selector), "missing {}", selector);
        }
    }

    #[test]
    fn metric_bars_are_styled() {
        assert!(STYLES.contains(".progress-bar {"));
        assert!(STYLES.contains(".progress-fill {"));
        for class in ["keywords", "grammar", "semantic"] {
            let selector = format!(".progress-fill.{}", class);
            assert!(STYLES.contains(&selector), "missing {}", selector);
        }
    }
}
