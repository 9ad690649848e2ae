//! Incoming HTTP request type.
//!
//! The raw query string is the single stored representation of the query.
//! Every decoded accessor ([`query_pairs`](Request::query_pairs),
//! [`query_all`](Request::query_all)) parses it on demand, so after
//! [`set_query`](Request::set_query) the previous form is gone — no cached
//! copy survives for a later accessor to leak.

use bytes::Bytes;
use http::{HeaderMap, Method};

use crate::query;

/// An incoming HTTP request as seen by middleware and handlers.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl Request {
    /// Builds a request from a method and a request target such as
    /// `/search?q=1,2`. Anything after the first `?` is the query string.
    ///
    /// This is how tests and other direct [`Pipeline`](crate::Pipeline)
    /// callers construct requests; the server builds them from the wire.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
            None => (target.to_owned(), None),
        };
        Self { method, path, query, headers: HeaderMap::new(), body: Bytes::new() }
    }

    /// Shorthand for [`Request::new`] with `GET`.
    pub fn get(target: &str) -> Self {
        Self::new(Method::GET, target)
    }

    pub(crate) fn from_parts(parts: http::request::Parts, body: Bytes) -> Self {
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers,
            body,
        }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The raw, still-encoded query string, if the request has one.
    ///
    /// `None` means the target had no `?` at all; `Some("")` means it ended
    /// in a bare `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Replaces the raw query string.
    ///
    /// All decoded accessors read through the raw string, so downstream
    /// consumers observe only the new form.
    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query;
    }

    /// Decodes the query string into an ordered multi-map.
    ///
    /// Repeated keys yield repeated pairs, in wire order. A request without
    /// a query string yields no pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query.as_deref().map(query::decode).unwrap_or_default()
    }

    /// All decoded values for one parameter, in wire order.
    ///
    /// Absent parameter and present-but-valueless parameter are distinct:
    /// no `q` anywhere returns an empty vec, while `q=` returns `[""]`.
    pub fn query_all(&self, name: &str) -> Vec<String> {
        let Some(raw) = self.query.as_deref() else {
            return Vec::new();
        };
        query::decode_borrowed(raw)
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .collect()
    }

    /// Case-insensitive header lookup, returning the value as a string if it
    /// is valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
