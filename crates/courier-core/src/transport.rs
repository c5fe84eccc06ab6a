//! Transport abstraction: the innermost link of the chain
//!
//! A transport performs the actual exchange and produces the two-variant
//! outcome the middleware chain flows back to the caller. This crate ships
//! no real transport; implementations live with the application (or, in
//! tests and demos, as closures via [`transport_fn`]).

use crate::error::Result;
use crate::middleware::BoxFuture;
use crate::request::Request;
use crate::response::Response;
use std::future::Future;

/// Trait for the terminal link of a client pipeline
pub trait Transport: Send + Sync + 'static {
    /// Perform the exchange for `req`
    fn send(&self, req: Request) -> BoxFuture;
}

/// Newtype wrapper implementing [`Transport`] for plain async functions,
/// bridging the typed closure world to the trait-object world.
pub struct FnTransport<F>(F);

impl<F, Fut> Transport for FnTransport<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    fn send(&self, req: Request) -> BoxFuture {
        Box::pin((self.0)(req))
    }
}

/// Build a transport from an async function.
///
/// ```rust,ignore
/// let transport = transport_fn(|req| async move {
///     Ok(Response::builder().url(req.url().clone()).build())
/// });
/// ```
pub fn transport_fn<F, Fut>(f: F) -> FnTransport<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    FnTransport(f)
}
