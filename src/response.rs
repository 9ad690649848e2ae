//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. Middleware in this
//! crate never rewrites responses, so what the handler builds is what the
//! client receives.

use bytes::Bytes;
use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use http_body_util::Full;

/// An outgoing HTTP response.
///
/// ```rust
/// use http::StatusCode;
/// use splay::Response;
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("hello");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Vec<u8>,
}

impl Response {
    /// `200 OK` with an `application/json` body.
    ///
    /// Takes bytes from whatever serializer you use — `serde_json::to_vec`,
    /// a `format!` literal, anything.
    pub fn json(body: Vec<u8>) -> Self {
        Self { status: StatusCode::OK, content_type: Some("application/json"), body }
    }

    /// `200 OK` with a `text/plain; charset=utf-8` body.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("text/plain; charset=utf-8"),
            body: body.into().into_bytes(),
        }
    }

    /// Response with a status code and no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Vec::new() }
    }

    pub fn status_code(&self) -> StatusCode { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut response = http::Response::new(Full::new(Bytes::from(self.body)));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        response
    }
}

/// Conversion into an HTTP [`Response`].
///
/// Implemented for the types a handler most often wants to return directly;
/// implement it on your own types to return them from handlers too.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`StatusCode`] directly from a handler: `return StatusCode::NOT_FOUND`.
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}
