use axum::extract::OriginalUri;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::routes::{dashboard, health, page};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(page::router())
        .nest("/health", health::router())
        .nest("/api", dashboard::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::DashboardConfig;
    use crate::services::csv_loader_service::parse_records;
    use crate::store::PriceHistory;

    const CSV: &str = "Date,Open,High,Low,Close,Volume\n\
        2024-01-02,100,102,99,101,1000\n\
        2024-01-03,101,104,100,103,3000\n\
        2024-01-04,103,105,101,102,2000\n\
        2024-01-05,102,103,98,99,4000\n";

    fn app() -> Router {
        let history = PriceHistory::new(parse_records(CSV.as_bytes()).unwrap());
        create_app(AppState {
            history,
            config: Arc::new(DashboardConfig::default()),
        })
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["rows"], 4);
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("BMW Stock Dashboard"));
    }

    #[tokio::test]
    async fn test_bounds() {
        let (status, body) = get_json("/api/bounds").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["min_date"], "2024-01-02");
        assert_eq!(body["max_date"], "2024-01-05");
        assert_eq!(body["rows"], 4);
    }

    #[tokio::test]
    async fn test_dashboard_full_range() {
        let (status, body) = get_json("/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 4);
        assert_eq!(body["metrics"]["latest_close"]["value"], 99.0);
        assert_eq!(body["metrics"]["average_volume"]["value"], 2500.0);
        assert_eq!(body["metrics"]["average_volume"]["display"], "2,500");
        assert_eq!(body["metrics"]["price_change"]["value"], -2.0);
        assert_eq!(body["metrics"]["highest_price"]["value"], 105.0);
        assert_eq!(body["tail"].as_array().unwrap().len(), 4);
        assert_eq!(body["charts"]["candlestick"]["data"][0]["type"], "candlestick");
    }

    #[tokio::test]
    async fn test_dashboard_range_is_inclusive() {
        let (status, body) = get_json("/api/dashboard?start=2024-01-03&end=2024-01-04").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 2);
        assert_eq!(body["range"]["start"], "2024-01-03");
        assert_eq!(body["metrics"]["latest_close"]["value"], 102.0);
        assert_eq!(body["metrics"]["price_change"]["value"], -1.0);
        assert_eq!(body["metrics"]["highest_price"]["value"], 105.0);
    }

    #[tokio::test]
    async fn test_dashboard_empty_range() {
        let (status, body) = get_json("/api/dashboard?start=2024-01-05&end=2024-01-02").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 0);
        assert_eq!(body["metrics"]["average_volume"]["value"], Value::Null);
        assert_eq!(body["statistics"][0]["count"], 0);
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_date() {
        let (status, body) = get_json("/api/dashboard?start=someday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("someday"));
    }

    #[tokio::test]
    async fn test_dashboard_rejects_us_style_date() {
        let (status, body) = get_json("/api/dashboard?start=02/29/2024").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }

    #[tokio::test]
    async fn test_records_endpoint() {
        let (status, body) = get_json("/api/records?start=2024-01-04").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2024-01-04");
        assert_eq!(rows[1]["volume"], 4000);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get_json("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("/api/nope"));
    }
}
