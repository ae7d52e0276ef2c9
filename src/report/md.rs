use crate::types::report::{PageReport, Priority};
use crate::types::scoring::Criterion;
use serde_json::Value;

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&key, nested, rows);
            }
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join(", ");
            rows.push((prefix.to_string(), joined));
        }
        Value::Number(number) => {
            let rendered = number
                .as_f64()
                .filter(|float| float.fract() != 0.0)
                .map_or_else(|| number.to_string(), |float| format!("{float:.2}"));
            rows.push((prefix.to_string(), rendered));
        }
        Value::Null => rows.push((prefix.to_string(), "n/a".to_string())),
        other => rows.push((prefix.to_string(), other.to_string())),
    }
}

pub fn to_markdown(report: &PageReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Page Quality Report\n\n");
    if let Some(url) = &report.url {
        output.push_str(&format!("URL: {url}\n\n"));
    }
    output.push_str(&format!("Analyzed at: {}\n\n", report.analyzed_at));
    output.push_str(&format!("Source SHA-256: `{}`\n\n", report.source_sha256));
    output.push_str(&format!(
        "Overall score: {:.2} ({})\n\n",
        result.overall_score,
        Priority::from_score(result.overall_score)
    ));

    output.push_str("## Criterion Scores\n\n");
    output.push_str("| Criterion | Score | Weight | Contribution |\n");
    output.push_str("|---|---:|---:|---:|\n");
    for criterion in Criterion::ALL {
        let score = result.scores.get(&criterion).copied().unwrap_or_default();
        let (weight, contribution) = result
            .contributions
            .get(&criterion)
            .map_or((0.0, 0.0), |entry| (entry.weight, entry.contribution));
        output.push_str(&format!(
            "| {} | {score:.1} | {weight:.2} | {contribution:.2} |\n",
            criterion.label()
        ));
    }
    output.push('\n');

    output.push_str("## Breakdowns\n\n");
    for criterion in Criterion::ALL {
        let Some(breakdown) = result.score_breakdowns.get(&criterion) else {
            continue;
        };
        output.push_str(&format!("### {}\n\n", criterion.label()));
        if breakdown.is_unavailable() {
            output.push_str("- not evaluated: page input unavailable\n\n");
            continue;
        }
        let mut rows = Vec::new();
        match serde_json::to_value(breakdown) {
            Ok(value) => flatten("", &value, &mut rows),
            Err(err) => tracing::warn!(criterion = criterion.as_str(), error = %err, "breakdown not renderable"),
        }
        for (key, value) in rows {
            output.push_str(&format!("- {key}: {value}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        output.push_str("- none\n");
    }
    for priority in Priority::ALL {
        let mut entries = result.recommendations_for(priority).peekable();
        if entries.peek().is_none() {
            continue;
        }
        output.push_str(&format!("### {priority}\n\n"));
        for recommendation in entries {
            output.push_str(&format!(
                "- **{}**: {}\n",
                recommendation.criterion.label(),
                recommendation.message
            ));
        }
        output.push('\n');
    }

    output
}
