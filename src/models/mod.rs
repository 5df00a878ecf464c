mod dashboard;
mod stock_record;

pub use dashboard::{
    BoundsResponse, ColumnSummary, DashboardCharts, DashboardResponse, Figure, KeyMetrics,
    Metric, SelectedRange,
};
pub use stock_record::{DateBounds, StockRecord};
