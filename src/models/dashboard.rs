use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DateBounds, StockRecord};

/// A single headline number plus the string the page shows for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: Option<f64>,
    pub display: String,
    /// Secondary figure rendered under the value (only the price change has one).
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub latest_close: Metric,
    pub average_volume: Metric,
    pub price_change: Metric,
    pub highest_price: Metric,
    /// Percentage change between the first and last close of the selection
    pub price_change_pct: Option<f64>,
}

/// Descriptive statistics for one numeric column.
///
/// Every field but `count` is `None` when the selection is empty; `std`
/// additionally needs at least two observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// A Plotly figure. `data` and `layout` are passed to `Plotly.newPlot` as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub price: Figure,
    pub volume: Figure,
    pub candlestick: Figure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub title: String,
    pub bounds: DateBounds,
    pub range: SelectedRange,
    pub rows: usize,
    pub metrics: KeyMetrics,
    pub charts: DashboardCharts,
    pub tail: Vec<StockRecord>,
    pub statistics: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsResponse {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub rows: usize,
}
