use chrono::NaiveDate;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::errors::AppError;
use crate::models::{DashboardResponse, DateBounds, SelectedRange, StockRecord};
use crate::services::{chart_service, metrics_service, stats_service};
use crate::store::PriceHistory;

/// Open ends of a range default to the first and last loaded date.
pub fn resolve_range(
    bounds: DateBounds,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> SelectedRange {
    SelectedRange {
        start: start.unwrap_or(bounds.min_date),
        end: end.unwrap_or(bounds.max_date),
    }
}

pub fn build_dashboard(
    history: &PriceHistory,
    config: &DashboardConfig,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DashboardResponse, AppError> {
    let bounds = history
        .bounds()
        .ok_or_else(|| AppError::NotFound("No price data loaded".to_string()))?;
    let range = resolve_range(bounds, start, end);
    let rows = history.select(range.start, range.end);

    debug!(
        "Building dashboard for {} to {} ({} rows)",
        range.start,
        range.end,
        rows.len()
    );

    Ok(DashboardResponse {
        title: config.title(),
        bounds,
        range,
        rows: rows.len(),
        metrics: metrics_service::key_metrics(rows),
        charts: chart_service::build_charts(&config.symbol, rows),
        tail: tail(rows, config.tail_rows).to_vec(),
        statistics: stats_service::describe(rows),
    })
}

/// The last `n` rows, or all of them when fewer exist.
pub fn tail(rows: &[StockRecord], n: usize) -> &[StockRecord] {
    &rows[rows.len().saturating_sub(n)..]
}
