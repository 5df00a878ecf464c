pub mod chart_service;
pub mod csv_loader_service;
pub mod dashboard_service;
pub mod metrics_service;
pub mod stats_service;
