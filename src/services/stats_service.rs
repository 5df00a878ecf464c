use crate::models::{ColumnSummary, StockRecord};

/// Count, mean, sample std, min, quartiles and max for every numeric column.
pub fn describe(rows: &[StockRecord]) -> Vec<ColumnSummary> {
    let columns: [(&str, fn(&StockRecord) -> f64); 5] = [
        ("Open", |r| r.open),
        ("High", |r| r.high),
        ("Low", |r| r.low),
        ("Close", |r| r.close),
        ("Volume", |r| r.volume as f64),
    ];

    columns
        .iter()
        .map(|(name, extract)| {
            let values: Vec<f64> = rows.iter().map(|r| extract(r)).collect();
            summarize(name, values)
        })
        .collect()
}

fn summarize(column: &str, mut values: Vec<f64>) -> ColumnSummary {
    values.sort_by(|a, b| a.total_cmp(b));

    let mean = mean(&values);
    ColumnSummary {
        column: column.to_string(),
        count: values.len(),
        mean,
        std: mean.and_then(|m| sample_std(&values, m)),
        min: values.first().copied(),
        p25: quantile(&values, 0.25),
        p50: quantile(&values, 0.50),
        p75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with Bessel's correction (n - 1).
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Quantile of already-sorted values, linearly interpolated between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
