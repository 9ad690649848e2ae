//! Minimal splay example — comma-joined query params flattened in front of a
//! JSON endpoint.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl 'http://localhost:3000/search?tag=rust,http,web'
//!   curl 'http://localhost:3000/search?tag=rust&tag=http'
//!   curl 'http://localhost:3000/search'
//!
//! The first two return the same body: by the time the handler runs, the
//! comma-joined form no longer exists.

use http::StatusCode;
use splay::{Pipeline, QueryFlatten, Request, Response, Server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Pipeline::new(search).with(QueryFlatten::new());

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// GET /search?tag=a,b  →  ["a","b"]
async fn search(req: Request) -> Response {
    if req.path() != "/search" {
        return Response::status(StatusCode::NOT_FOUND);
    }

    let tags = req.query_all("tag");
    Response::json(serde_json::to_vec(&tags).expect("string list serializes"))
}
