//! The query-flattening middleware.

use tracing::trace;

use crate::flatten::flatten;
use crate::middleware::{BoxFuture, Middleware, Next};
use crate::query;
use crate::request::Request;

/// Rewrites delimiter-joined query values into repeated parameters.
///
/// With the default comma delimiter, a request for `/search?q=1,2` reaches
/// everything downstream as `/search?q=1&q=2`. The rewrite happens once,
/// before the endpoint runs, and replaces the request's stored query string,
/// so no accessor can observe the un-flattened form afterwards.
///
/// Values are decoded before splitting, which means an encoded delimiter
/// splits too: `q=a%2Cb` is the value `a,b` and becomes `q=a&q=b`. Clients
/// that need a literal comma inside a single value need a different
/// delimiter, configured via [`with_delimiter`](QueryFlatten::with_delimiter).
///
/// One instance serves all concurrent requests; the delimiter is fixed at
/// construction.
///
/// ```rust
/// use splay::{Pipeline, QueryFlatten, Request, Response};
///
/// async fn search(req: Request) -> Response {
///     Response::text(req.query_all("q").join("\n"))
/// }
///
/// let app = Pipeline::new(search).with(QueryFlatten::new());
/// ```
pub struct QueryFlatten {
    delimiter: String,
}

impl QueryFlatten {
    /// A flattener splitting on `,`.
    pub fn new() -> Self {
        Self::with_delimiter(",")
    }

    /// A flattener splitting on an arbitrary literal delimiter.
    ///
    /// The delimiter is matched as a plain substring, not a pattern.
    ///
    /// # Panics
    ///
    /// Panics if `delimiter` is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        assert!(!delimiter.is_empty(), "delimiter must not be empty");
        Self { delimiter }
    }
}

impl Default for QueryFlatten {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for QueryFlatten {
    fn handle(&self, mut req: Request, next: Next) -> BoxFuture {
        let rewritten = req.query().map(|raw| {
            let pairs = flatten(query::decode(raw), &self.delimiter);
            let encoded = query::encode(&pairs);
            if encoded != raw {
                trace!(original = raw, rewritten = %encoded, "flattened query string");
            }
            encoded
        });
        if let Some(encoded) = rewritten {
            req.set_query(Some(encoded));
        }
        next.run(req)
    }
}

#[cfg(test)]
mod tests {
    use super::QueryFlatten;
    use crate::middleware::Pipeline;
    use crate::request::Request;
    use crate::response::Response;

    async fn echo_raw_query(req: Request) -> Response {
        Response::text(req.query().unwrap_or("<none>").to_owned())
    }

    fn app() -> Pipeline {
        Pipeline::new(echo_raw_query).with(QueryFlatten::new())
    }

    #[tokio::test]
    async fn rewrites_the_stored_query_string() {
        let res = app().run(Request::get("/search?q=1,2")).await;
        assert_eq!(res.body(), b"q=1&q=2");
    }

    #[tokio::test]
    async fn absent_query_stays_absent() {
        let res = app().run(Request::get("/search")).await;
        assert_eq!(res.body(), b"<none>");
    }

    #[tokio::test]
    async fn encoded_delimiter_splits_after_decoding() {
        let res = app().run(Request::get("/search?q=a%2Cb")).await;
        assert_eq!(res.body(), b"q=a&q=b");
    }

    #[tokio::test]
    async fn custom_delimiter_leaves_commas_alone() {
        let app = Pipeline::new(echo_raw_query).with(QueryFlatten::with_delimiter("|"));
        let res = app.run(Request::get("/search?q=a,b%7Cc")).await;
        assert_eq!(res.body(), b"q=a%2Cb&q=c");
    }

    #[test]
    #[should_panic(expected = "delimiter must not be empty")]
    fn empty_delimiter_is_rejected_at_construction() {
        let _ = QueryFlatten::with_delimiter("");
    }
}
