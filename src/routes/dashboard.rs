use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{BoundsResponse, DashboardResponse, StockRecord};
use crate::services::dashboard_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bounds", get(get_bounds))
        .route("/dashboard", get(get_dashboard))
        .route("/records", get(get_records))
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    start: Option<String>,
    end: Option<String>,
}

impl RangeQuery {
    fn parse(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
        Ok((
            parse_param("start", self.start.as_deref())?,
            parse_param("end", self.end.as_deref())?,
        ))
    }
}

fn parse_param(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some).map_err(|_| {
            warn!("Rejected {} date '{}'", name, raw);
            AppError::Validation(format!("Invalid {} date '{}', expected YYYY-MM-DD", name, raw))
        }),
    }
}

async fn get_bounds(State(state): State<AppState>) -> Result<Json<BoundsResponse>, AppError> {
    info!("GET /api/bounds - Getting date bounds");
    let bounds = state
        .history
        .bounds()
        .ok_or_else(|| AppError::NotFound("No price data loaded".to_string()))?;

    Ok(Json(BoundsResponse {
        min_date: bounds.min_date,
        max_date: bounds.max_date,
        rows: state.history.len(),
    }))
}

async fn get_dashboard(
    Query(params): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    info!("GET /api/dashboard - start={:?} end={:?}", params.start, params.end);
    let (start, end) = params.parse()?;

    dashboard_service::build_dashboard(&state.history, &state.config, start, end).map(Json)
}

async fn get_records(
    Query(params): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StockRecord>>, AppError> {
    info!("GET /api/records - start={:?} end={:?}", params.start, params.end);
    let (start, end) = params.parse()?;
    let bounds = state
        .history
        .bounds()
        .ok_or_else(|| AppError::NotFound("No price data loaded".to_string()))?;
    let range = dashboard_service::resolve_range(bounds, start, end);

    Ok(Json(state.history.select(range.start, range.end).to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_dates_must_be_iso() {
        let parsed = parse_param("start", Some(" 2024-02-29 ")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_param("start", Some("")).unwrap(), None);
        assert_eq!(parse_param("end", None).unwrap(), None);

        for raw in ["02/29/2024", "2024-02-29T00:00:00Z", "2024-02-30"] {
            assert!(matches!(
                parse_param("start", Some(raw)),
                Err(AppError::Validation(_))
            ));
        }
    }
}
