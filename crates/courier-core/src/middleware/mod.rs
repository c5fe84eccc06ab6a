//! Middleware infrastructure for the courier client pipeline
//!
//! Middleware is added with the [`Client::layer`](crate::Client::layer)
//! method and runs once per request. Each layer receives the outgoing
//! request and a continue-callback (`next`) that invokes the rest of the
//! chain, ending at the transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use courier_core::{Client, MiddlewareLayer};
//!
//! Client::new(transport)
//!     .layer(Box::new(MyLayer::new()))
//!     .send(request)
//!     .await
//! ```

mod layer;

pub use layer::{BoxFuture, BoxedNext, LayerStack, MiddlewareLayer};
