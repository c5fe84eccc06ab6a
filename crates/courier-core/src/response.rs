//! Response types for the client pipeline

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode, Uri};

/// HTTP response record produced by a transport.
///
/// Carries the originating method and URL alongside the wire data so that
/// middleware downstream of the transport can report on the exchange
/// without holding on to the request.
pub struct Response {
    status: StatusCode,
    method: Method,
    url: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Start building a response.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::new()
    }

    /// Get the status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the method of the originating request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL of the originating request
    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// Get the headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// The diagnostic rendering embedded in emitted log lines. Body bytes are
/// shown lossily as UTF-8.
impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status.as_u16())
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &String::from_utf8_lossy(&self.body))
            .finish()
    }
}

/// Builder for [`Response`].
pub struct ResponseBuilder {
    status: StatusCode,
    method: Method,
    url: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseBuilder {
    fn new() -> Self {
        Self {
            status: StatusCode::OK,
            method: Method::GET,
            url: Uri::default(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set the status code.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Set the originating method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the originating URL.
    pub fn url(mut self, url: Uri) -> Self {
        self.url = url;
        self
    }

    /// Add a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Finish building.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
