use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::state::AppState;

const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(serve_page))
}

async fn serve_page(State(state): State<AppState>) -> Html<String> {
    info!("GET / - Serving dashboard page");
    Html(render_page(&state.config.title(), &state.config.icon))
}

/// Fills the page template. The title is HTML-escaped; the icon lands inside
/// the favicon's `data:` URL and is percent-encoded instead.
pub fn render_page(title: &str, icon: &str) -> String {
    DASHBOARD_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{ICON_URL}}", &encode_url_component(icon))
}

fn encode_url_component(value: &str) -> String {
    // form encoding writes spaces as '+', which a data URL would keep literally.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
