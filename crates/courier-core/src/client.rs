//! Client: middleware layers composed over a transport

use crate::error::Result;
use crate::middleware::{BoxedNext, LayerStack, MiddlewareLayer};
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;
use std::sync::Arc;

/// An HTTP client pipeline.
///
/// Owns an ordered stack of middleware layers and the transport they wrap.
/// Layers observe each exchange; the transport's outcome reaches the caller
/// unchanged unless a layer explicitly replaces it.
///
/// # Example
///
/// ```rust,ignore
/// use courier_core::{transport_fn, Client, Request};
///
/// let client = Client::new(transport_fn(my_transport))
///     .layer(Box::new(my_layer));
/// let response = client.send(Request::get(url)).await?;
/// ```
pub struct Client {
    stack: LayerStack,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client over `transport` with no middleware.
    pub fn new(transport: impl Transport) -> Self {
        Self {
            stack: LayerStack::new(),
            transport: Arc::new(transport),
        }
    }

    /// Add a middleware layer.
    ///
    /// Layers run in the order they are added (outermost first), with the
    /// transport as the innermost link.
    pub fn layer(mut self, layer: Box<dyn MiddlewareLayer>) -> Self {
        self.stack.push(layer);
        self
    }

    /// Send a request through the middleware chain and the transport.
    pub async fn send(&self, req: Request) -> Result<Response> {
        let transport = Arc::clone(&self.transport);
        let terminal: BoxedNext = Arc::new(move |req: Request| transport.send(req));
        self.stack.execute(req, terminal).await
    }
}
