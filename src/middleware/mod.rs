//! Middleware layer.
//!
//! Middleware intercepts a request on its way to the endpoint and may mutate
//! it, short-circuit with its own response, or pass it along via [`Next`].
//! The whole abstraction is two function shapes:
//!
//! ```text
//! Middleware = (Request, Next) -> Response
//! Next       = (Request)       -> Response
//! ```
//!
//! [`Next`] is a cursor over the remaining chain: calling
//! [`run`](Next::run) hands the request to the next middleware, or to the
//! endpoint once the chain is exhausted. A middleware that never calls
//! `next.run(req)` has short-circuited the request.
//!
//! A [`Pipeline`] owns the chain plus the endpoint and is what
//! [`Server::serve`](crate::Server::serve) drives. Middleware runs in
//! registration order: the first [`with`](Pipeline::with) is the first to
//! see the request.
//!
//! The built-in [`QueryFlatten`] middleware lives in this module; anything
//! else is yours to write:
//!
//! ```rust
//! use splay::{Pipeline, Request, Response};
//! use splay::middleware::{BoxFuture, Middleware, Next};
//!
//! struct RequireHost;
//!
//! impl Middleware for RequireHost {
//!     fn handle(&self, req: Request, next: Next) -> BoxFuture {
//!         if req.header("host").is_none() {
//!             return Box::pin(async { Response::status(http::StatusCode::BAD_REQUEST) });
//!         }
//!         next.run(req)
//!     }
//! }
//!
//! # async fn endpoint(_req: Request) -> Response { Response::text("ok") }
//! let app = Pipeline::new(endpoint).with(RequireHost);
//! ```

mod query_flatten;

pub use query_flatten::QueryFlatten;

use std::sync::Arc;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;

pub use crate::handler::BoxFuture;

/// A unit of request interception.
///
/// Implementations receive the request and the remainder of the chain.
/// Returning without calling [`Next::run`] short-circuits; calling it exactly
/// once continues. The instance is shared across all concurrent requests, so
/// any configuration it holds must be immutable after construction.
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, req: Request, next: Next) -> BoxFuture;
}

/// Any closure with the middleware shape is a middleware.
impl<F> Middleware for F
where
    F: Fn(Request, Next) -> BoxFuture + Send + Sync + 'static,
{
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        self(req, next)
    }
}

/// The remainder of a pipeline: the not-yet-run middleware plus the endpoint.
///
/// `Next` is consumed by [`run`](Next::run), so a middleware cannot invoke
/// the downstream chain twice — the type system enforces the once-per-request
/// interception contract.
pub struct Next {
    chain: Arc<[Arc<dyn Middleware>]>,
    index: usize,
    endpoint: BoxedHandler,
}

impl Next {
    /// Hands `req` to the next middleware in the chain, or to the endpoint
    /// if the chain is exhausted.
    pub fn run(mut self, req: Request) -> BoxFuture {
        let middleware = self.chain.get(self.index).map(Arc::clone);
        match middleware {
            Some(middleware) => {
                self.index += 1;
                middleware.handle(req, self)
            }
            None => self.endpoint.call(req),
        }
    }
}

/// An endpoint plus its ordered middleware chain.
///
/// Built once at startup, shared across all connections. Cloning the chain
/// per request is one `Arc` clone; the middleware list itself is never
/// copied after construction.
pub struct Pipeline {
    chain: Arc<[Arc<dyn Middleware>]>,
    endpoint: BoxedHandler,
}

impl Pipeline {
    /// Creates a pipeline with no middleware around `endpoint`.
    pub fn new(endpoint: impl Handler) -> Self {
        Self { chain: Arc::from(Vec::new()), endpoint: endpoint.into_boxed_handler() }
    }

    /// Appends a middleware. The first one registered runs outermost.
    ///
    /// Rebuilds the shared chain, which is fine: pipelines are built once at
    /// startup, not on the request path.
    pub fn with(mut self, middleware: impl Middleware) -> Self {
        let mut chain: Vec<Arc<dyn Middleware>> = self.chain.to_vec();
        chain.push(Arc::new(middleware));
        self.chain = Arc::from(chain);
        self
    }

    /// Drives one request through the chain to the endpoint.
    pub fn run(&self, req: Request) -> BoxFuture {
        Next {
            chain: Arc::clone(&self.chain),
            index: 0,
            endpoint: Arc::clone(&self.endpoint),
        }
        .run(req)
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::{BoxFuture, Next, Pipeline};
    use crate::request::Request;
    use crate::response::Response;

    async fn echo_path(req: Request) -> Response {
        Response::text(req.path().to_owned())
    }

    #[tokio::test]
    async fn empty_chain_reaches_the_endpoint() {
        let app = Pipeline::new(echo_path);
        let res = app.run(Request::get("/hello")).await;
        assert_eq!(res.body(), b"/hello");
    }

    #[tokio::test]
    async fn middleware_runs_in_registration_order() {
        // Each middleware appends a marker to the query; the endpoint echoes
        // what it finally observed.
        fn tag(marker: &'static str) -> impl Fn(Request, Next) -> BoxFuture + Send + Sync + 'static {
            move |mut req: Request, next: Next| {
                let mut q = req.query().unwrap_or_default().to_owned();
                q.push_str(marker);
                req.set_query(Some(q));
                next.run(req)
            }
        }

        async fn echo_query(req: Request) -> Response {
            Response::text(req.query().unwrap_or_default().to_owned())
        }

        let app = Pipeline::new(echo_query).with(tag("a")).with(tag("b"));
        let res = app.run(Request::get("/")).await;
        assert_eq!(res.body(), b"ab");
    }

    #[tokio::test]
    async fn middleware_can_short_circuit() {
        let app = Pipeline::new(echo_path).with(|_req: Request, _next: Next| -> BoxFuture {
            Box::pin(async { Response::status(StatusCode::FORBIDDEN) })
        });
        let res = app.run(Request::get("/hello")).await;
        assert_eq!(res.status_code(), StatusCode::FORBIDDEN);
    }
}
