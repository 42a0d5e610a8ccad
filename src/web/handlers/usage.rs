//! Usage hint served for every unmatched path.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the usage page.
///
/// Renders `templates/usage.html` with the endpoint pattern and its query parameters.
#[derive(Template, WebTemplate)]
#[template(path = "usage.html")]
struct UsageTemplate {
    example_id: &'static str,
    version: &'static str,
}

/// Renders the usage page.
///
/// # Endpoint
///
/// Fallback for any path not handled by another route.
pub async fn usage_handler() -> impl IntoResponse {
    UsageTemplate {
        example_id: "76979871",
        version: env!("CARGO_PKG_VERSION"),
    }
}
