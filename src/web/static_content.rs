use axum::{
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::render::{NotFoundPage, RenderPage};

/// Assets compiled into the binary so a release build is a single file.
fn get_static_file(path: &str) -> Option<&'static str> {
    match path {
        "script.js" => Some(include_str!("../../static/script.js")),
        "style.css" => Some(include_str!("../../static/style.css")),
        _ => None,
    }
}

pub(crate) async fn static_path(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    let Some(file) = get_static_file(path) else {
        return (StatusCode::NOT_FOUND, RenderPage(NotFoundPage)).into_response();
    };
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    let content_type = HeaderValue::from_str(mime_type.as_ref())
        .unwrap_or(HeaderValue::from_static("text/plain"));
    (
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                #[cfg(not(debug_assertions))]
                HeaderValue::from_static("public, max-age=3600"),
                #[cfg(debug_assertions)]
                HeaderValue::from_static("no-cache"),
            ),
        ],
        file,
    )
        .into_response()
}
