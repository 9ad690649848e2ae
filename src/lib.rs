//! # splay
//!
//! Query-flattening middleware for Rust HTTP services.
//! Clients send `?q=1,2` — handlers see `?q=1&q=2`. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Plenty of HTTP clients join list parameters with commas because it reads
//! better in a URL. Plenty of handlers want repeated parameters because that
//! is what query multi-maps natively express. splay sits between the two:
//! it rewrites the request's query string once, before anything downstream
//! parses it, and touches nothing else. Body, headers, method, path — all
//! pass through byte-for-byte.
//!
//! What splay intentionally does **not** do:
//!
//! - **Routing** — dispatch to your handler however you like; splay hands
//!   you a [`Pipeline`] with exactly one endpoint.
//! - **Validation** — split values are delivered as-is, empty strings
//!   included. Deciding what `q=` means is your handler's job.
//! - **Structured encodings** — `a[0]=x` style nesting is opaque text here.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use splay::{Pipeline, QueryFlatten, Request, Response, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Pipeline::new(search).with(QueryFlatten::new());
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! async fn search(req: Request) -> Response {
//!     // GET /search?tag=rust,http,web  →  tags == ["rust", "http", "web"]
//!     let tags = req.query_all("tag");
//!     Response::text(tags.join("\n"))
//! }
//! ```
//!
//! The transform itself is a plain function, usable without any of the HTTP
//! plumbing:
//!
//! ```rust
//! use splay::flatten;
//!
//! let pairs = vec![("q".to_owned(), "1,2".to_owned())];
//! assert_eq!(
//!     flatten(pairs, ","),
//!     vec![("q".to_owned(), "1".to_owned()), ("q".to_owned(), "2".to_owned())],
//! );
//! ```

mod error;
mod flatten;
mod handler;
mod query;
mod request;
mod response;
mod server;

pub mod middleware;

pub use error::Error;
pub use flatten::flatten;
pub use handler::Handler;
pub use middleware::{Middleware, Next, Pipeline, QueryFlatten};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use server::Server;
