//! # Courier Core
//!
//! Core library providing the foundational types for the courier HTTP
//! client pipeline: request and response records, the transport
//! abstraction, and the middleware chain that links them.
//!
//! Middleware observes requests on the way out and outcomes on the way
//! back. A layer receives the request together with a continue-callback
//! (`next`) and decides when to invoke it; the transport is the innermost
//! link of the chain.

mod client;
mod error;
mod request;
mod response;
mod transport;

pub mod middleware;

// Public API
pub use client::Client;
pub use error::{Result, TransportError};
pub use middleware::{BoxFuture, BoxedNext, LayerStack, MiddlewareLayer};
pub use request::Request;
pub use response::{Response, ResponseBuilder};
pub use transport::{transport_fn, FnTransport, Transport};
