//! Basic courier demo
//!
//! Run with: cargo run -p basic
//!
//! Wires a stub transport into a client with the logging layer and sends a
//! few requests. Each outcome produces one line at the level the spec
//! assigns; the `/slow-teapot` status has no rule and stays silent.

use courier_core::{transport_fn, Client, Request, Response, TransportError};
use courier_logging::{LevelSpec, LoggingLayer};
use http::{Method, StatusCode, Uri};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let spec: LevelSpec = serde_json::from_value(serde_json::json!([
        { "on": { "from": 200, "to": 299 }, "level": "info" },
        { "on": [404, 410], "level": "warn" },
        { "on": { "from": 500, "to": 599 }, "level": "error" },
    ]))?;

    let transport = transport_fn(|req: Request| async move {
        match req.url().path() {
            "/unreachable" => Err(TransportError::Connect {
                endpoint: "demo.local:80".to_string(),
                reason: "connection refused".to_string(),
            }),
            path => {
                let status = match path {
                    "/ok" => StatusCode::NO_CONTENT,
                    "/missing" => StatusCode::NOT_FOUND,
                    "/slow-teapot" => StatusCode::IM_A_TEAPOT,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                Ok(Response::builder()
                    .status(status)
                    .method(req.method().clone())
                    .url(req.url().clone())
                    .body(format!("stub body for {path}"))
                    .build())
            }
        }
    });

    let client =
        Client::new(transport).layer(Box::new(LoggingLayer::from_spec(&spec)?));

    for path in ["/ok", "/missing", "/boom", "/slow-teapot", "/unreachable"] {
        let url: Uri = format!("http://demo.local{path}").parse()?;
        // Outcomes are logged by the layer; the demo ignores them.
        let _ = client.send(Request::new(Method::GET, url)).await;
    }

    Ok(())
}
