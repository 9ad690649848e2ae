//! Endpoint trait and type erasure.
//!
//! A [`Pipeline`](crate::Pipeline) terminates in exactly one endpoint, but
//! every `async fn` has its own anonymous future type. To store "whatever
//! the user passed" behind one field, the concrete handler is hidden behind
//! a trait object:
//!
//! ```text
//! async fn search(req: Request) -> Response { … }   ← user writes this
//!        ↓ Pipeline::new(search)
//! search.into_boxed_handler()                       ← Handler blanket impl
//!        ↓ stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(req)  at request time                ← one vtable dispatch
//! ```
//!
//! Per request that costs one `Arc` clone and one virtual call — noise next
//! to the network I/O around it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future resolving to a [`Response`].
///
/// `Pin<Box<…>>` because the runtime polls the future in place; `Send +
/// 'static` so tokio may move it across worker threads. This is the return
/// type of [`Middleware::handle`](crate::Middleware::handle) and
/// [`Next::run`](crate::Next::run) as well.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of [`Handler::into_boxed_handler`]. External crates cannot
/// usefully interact with it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid endpoint.
///
/// You never implement this yourself. It is automatically satisfied for any
/// `async fn name(req: Request) -> impl IntoResponse`. The trait is sealed:
/// only the blanket impl below can satisfy it, which keeps the endpoint
/// contract stable across versions.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// `Sealed` is private, so external crates cannot name it and therefore
/// cannot implement `Handler` on their own types.
mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Newtype holding a concrete handler `F`, bridging the typed world to the
/// trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
