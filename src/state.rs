use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::store::PriceHistory;

#[derive(Clone)]
pub struct AppState {
    pub history: PriceHistory,
    pub config: Arc<DashboardConfig>,
}
