use serde_json::{json, Value};

use crate::models::{DashboardCharts, Figure, StockRecord};

pub fn build_charts(symbol: &str, rows: &[StockRecord]) -> DashboardCharts {
    DashboardCharts {
        price: price_figure(symbol, rows),
        volume: volume_figure(rows),
        candlestick: candlestick_figure(symbol, rows),
    }
}

/// Close, High and Low as lines sharing one unified hover.
pub fn price_figure(symbol: &str, rows: &[StockRecord]) -> Figure {
    let dates = dates(rows);
    Figure {
        data: vec![
            line_trace("Close Price", &dates, column(rows, |r| r.close), "blue", 2, None),
            line_trace("High Price", &dates, column(rows, |r| r.high), "green", 1, Some("dot")),
            line_trace("Low Price", &dates, column(rows, |r| r.low), "red", 1, Some("dot")),
        ],
        layout: json!({
            "title": { "text": format!("{} Stock Prices", symbol) },
            "xaxis": { "title": { "text": "Date" } },
            "yaxis": { "title": { "text": "Price ($)" } },
            "hovermode": "x unified",
        }),
    }
}

pub fn volume_figure(rows: &[StockRecord]) -> Figure {
    let volumes: Vec<u64> = rows.iter().map(|r| r.volume).collect();
    Figure {
        data: vec![json!({
            "type": "bar",
            "name": "Volume",
            "x": dates(rows),
            "y": volumes,
        })],
        layout: json!({
            "title": { "text": "Daily Trading Volume" },
            "xaxis": { "title": { "text": "Date" } },
            "yaxis": { "title": { "text": "Volume" } },
        }),
    }
}

pub fn candlestick_figure(symbol: &str, rows: &[StockRecord]) -> Figure {
    Figure {
        data: vec![json!({
            "type": "candlestick",
            "name": symbol,
            "x": dates(rows),
            "open": column(rows, |r| r.open),
            "high": column(rows, |r| r.high),
            "low": column(rows, |r| r.low),
            "close": column(rows, |r| r.close),
        })],
        layout: json!({
            "title": { "text": format!("{} Candlestick Chart", symbol) },
            "xaxis": { "title": { "text": "Date" } },
            "yaxis": { "title": { "text": "Price ($)" } },
        }),
    }
}

fn line_trace(
    name: &str,
    dates: &[String],
    values: Vec<f64>,
    color: &str,
    width: u32,
    dash: Option<&str>,
) -> Value {
    let mut line = json!({ "color": color, "width": width });
    if let Some(dash) = dash {
        line["dash"] = json!(dash);
    }
    json!({
        "type": "scatter",
        "mode": "lines",
        "name": name,
        "x": dates,
        "y": values,
        "line": line,
    })
}

fn dates(rows: &[StockRecord]) -> Vec<String> {
    rows.iter().map(|r| r.date.format("%Y-%m-%d").to_string()).collect()
}

fn column(rows: &[StockRecord], f: impl Fn(&StockRecord) -> f64) -> Vec<f64> {
    rows.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows() -> Vec<StockRecord> {
        let d = |day| NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
        vec![
            StockRecord::new(d(1), 90.0, 92.0, 89.0, 91.5, 1_200),
            StockRecord::new(d(2), 91.5, 94.0, 91.0, 93.0, 1_800),
        ]
    }

    #[test]
    fn test_price_figure_has_three_styled_lines() {
        let fig = price_figure("BMW", &rows());

        assert_eq!(fig.data.len(), 3);
        assert_eq!(fig.data[0]["name"], "Close Price");
        assert_eq!(fig.data[0]["line"]["color"], "blue");
        assert_eq!(fig.data[0]["line"]["width"], 2);
        assert!(fig.data[0]["line"].get("dash").is_none());
        assert_eq!(fig.data[1]["line"]["dash"], "dot");
        assert_eq!(fig.data[2]["name"], "Low Price");
        assert_eq!(fig.data[0]["x"], json!(["2024-07-01", "2024-07-02"]));
        assert_eq!(fig.data[0]["y"], json!([91.5, 93.0]));
        assert_eq!(fig.layout["title"]["text"], "BMW Stock Prices");
        assert_eq!(fig.layout["hovermode"], "x unified");
    }

    #[test]
    fn test_volume_figure_is_bar_chart() {
        let fig = volume_figure(&rows());
        assert_eq!(fig.data[0]["type"], "bar");
        assert_eq!(fig.data[0]["y"], json!([1200, 1800]));
        assert_eq!(fig.layout["title"]["text"], "Daily Trading Volume");
    }

    #[test]
    fn test_candlestick_carries_ohlc() {
        let fig = candlestick_figure("BMW", &rows());
        let trace = &fig.data[0];
        assert_eq!(trace["type"], "candlestick");
        assert_eq!(trace["open"], json!([90.0, 91.5]));
        assert_eq!(trace["high"], json!([92.0, 94.0]));
        assert_eq!(trace["low"], json!([89.0, 91.0]));
        assert_eq!(trace["close"], json!([91.5, 93.0]));
        assert_eq!(fig.layout["title"]["text"], "BMW Candlestick Chart");
    }

    #[test]
    fn test_empty_selection_yields_empty_traces() {
        let charts = build_charts("BMW", &[]);
        assert_eq!(charts.price.data[0]["x"], json!([]));
        assert_eq!(charts.volume.data[0]["y"], json!([]));
        assert_eq!(charts.candlestick.data[0]["close"], json!([]));
    }
}
