//! Static files from the site root, with the app rendered for anything else

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

/// Router fallback: serve `/pkg/...`, `/robots.txt` and friends from
/// `site_root`, and let the app render its own not-found page otherwise.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let root = options.site_root.clone();

    match static_file(uri, &root).await {
        Ok(response) if response.status() == StatusCode::OK => response,
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options, App);
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            tracing::error!("Static file lookup failed: {}", message);
            (status, message).into_response()
        }
    }
}

async fn static_file(uri: Uri, root: &str) -> Result<Response, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(response) => Ok(response.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

    #[tokio::test]
    async fn test_serves_existing_file() {
        let response = static_file(Uri::from_static("/robots.txt"), PUBLIC)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let response = static_file(Uri::from_static("/no-such-page"), PUBLIC)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
