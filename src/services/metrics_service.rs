use crate::models::{KeyMetrics, Metric, StockRecord};

/// The four headline metrics for a selection of rows.
///
/// Never panics on an empty selection: latest close and price change fall
/// back to zero, average volume and highest price become `None`.
pub fn key_metrics(rows: &[StockRecord]) -> KeyMetrics {
    let latest_close = rows.last().map(|r| r.close).unwrap_or(0.0);
    let average_volume = average_volume(rows);
    let highest_price = max_high(rows);
    let (price_change, price_change_pct) = price_change(rows);

    let delta = if rows.len() > 1 {
        Some(price_change_pct.map(format_percent).unwrap_or_else(|| "n/a".to_string()))
    } else {
        Some("0%".to_string())
    };

    KeyMetrics {
        latest_close: Metric {
            label: "Latest Close Price".to_string(),
            value: Some(latest_close),
            display: format_currency(latest_close),
            delta: None,
        },
        average_volume: Metric {
            label: "Average Volume".to_string(),
            value: average_volume,
            display: average_volume
                .map(format_thousands)
                .unwrap_or_else(|| "n/a".to_string()),
            delta: None,
        },
        price_change: Metric {
            label: "Price Change".to_string(),
            value: Some(price_change),
            display: format_currency(price_change),
            delta,
        },
        highest_price: Metric {
            label: "Highest Price".to_string(),
            value: highest_price,
            display: highest_price
                .map(format_currency)
                .unwrap_or_else(|| "n/a".to_string()),
            delta: None,
        },
        price_change_pct,
    }
}

pub fn average_volume(rows: &[StockRecord]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let total: f64 = rows.iter().map(|r| r.volume as f64).sum();
    Some(total / rows.len() as f64)
}

pub fn max_high(rows: &[StockRecord]) -> Option<f64> {
    rows.iter().map(|r| r.high).reduce(f64::max)
}

/// Absolute and percentage change from the first to the last close.
///
/// Zero change for fewer than two rows. The percentage is `None` when the
/// first close is zero.
pub fn price_change(rows: &[StockRecord]) -> (f64, Option<f64>) {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if rows.len() > 1 => {
            let change = last.close - first.close;
            let pct = (first.close != 0.0).then(|| change / first.close * 100.0);
            (change, pct)
        }
        _ => (0.0, Some(0.0)),
    }
}

/// `$1234.56`; negative amounts keep the sign after the dollar, `$-3.50`.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Rounds to a whole number and groups thousands with commas: `1,234,568`.
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}
