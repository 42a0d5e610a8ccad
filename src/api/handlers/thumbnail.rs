//! Handler for thumbnail redirects.

use axum::{
    extract::{Path, RawQuery, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::dto::thumbnail::ThumbnailQuery;
use crate::domain::entities::VideoId;
use crate::domain::errors::ResolveError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a video id to its thumbnail image.
///
/// # Endpoint
///
/// `GET /v/{id}?s=<size>&sfb=<bool>&c=<bool>`
///
/// # Query Parameters
///
/// - `s` - `large` (default), `medium` or `small`
/// - `sfb` - size fallback, disabled only by `false`
/// - `c` - use cache, disabled only by `false`
///
/// # Request Flow
///
/// 1. Validate the id (digits only) before touching cache or upstream.
///    An id that cannot be extracted at all (e.g. invalid UTF-8) is invalid too.
/// 2. Read the query; an unusable `s` is a 404 without any lookup
/// 3. Resolve through [`crate::application::services::ThumbnailService`]
/// 4. Return 301 Moved Permanently to the image
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not a number.
/// Returns 404 Not Found if upstream is unreachable, returns an invalid payload,
/// or has no thumbnail for the requested size chain.
pub async fn thumbnail_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, AppError> {
    let Path(raw_id) = path.map_err(|rejection| {
        debug!("Video id could not be extracted: {}", rejection);
        ResolveError::InvalidVideoId
    })?;

    let video_id = VideoId::parse(&raw_id).inspect_err(|_| {
        debug!("Video id not a number: {}", raw_id);
    })?;

    let options = ThumbnailQuery::from_query_string(raw_query.as_deref()).into_options()?;

    let url = state
        .thumbnail_service
        .resolve(&video_id, &options)
        .await?;

    debug!("Sending redirect for {} to {}", video_id, url);

    Ok(permanent_redirect(url))
}

/// Handles `/v` with no id at all.
///
/// # Endpoint
///
/// `GET /v`
pub async fn missing_video_id_handler() -> AppError {
    AppError::from(ResolveError::InvalidVideoId)
}

/// 301 with a `Location` header.
///
/// `axum::response::Redirect::permanent` answers 308, so the response is built by hand.
fn permanent_redirect(url: String) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]).into_response()
}
