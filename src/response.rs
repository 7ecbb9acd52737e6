//! Response helpers. JSON bodies are indented rather than compact.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

/// Like `axum::Json`, but serialized with `serde_json::to_vec_pretty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut buf) => {
                buf.push(b'\n');
                (
                    [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                    buf,
                )
                    .into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "response serialization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                    e.to_string(),
                )
                    .into_response()
            }
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, PrettyJson<T>) {
    (StatusCode::OK, PrettyJson(data))
}

pub fn html(fragment: &'static str) -> (StatusCode, Html<&'static str>) {
    (StatusCode::OK, Html(fragment))
}
