use courier_core::{transport_fn, Client, Request, Response, TransportError};
use courier_logging::{
    Level, LevelSpec, LoggingLayer, MemorySink, RuleTable, StatusRule, StatusSpec,
};
use http::{Method, StatusCode, Uri};
use proptest::prelude::*;
use std::sync::Arc;

fn range_then_default_spec() -> LevelSpec {
    LevelSpec::Rules(vec![
        StatusRule::new(StatusSpec::Range { from: 200, to: 299 }, "info"),
        StatusRule::new(StatusSpec::Token("default".to_string()), "error"),
    ])
}

fn status_client(status: StatusCode, sink: Arc<MemorySink>) -> Client {
    let layer = LoggingLayer::from_spec(&range_then_default_spec())
        .unwrap()
        .sink(sink);
    Client::new(transport_fn(move |req: Request| async move {
        Ok(Response::builder()
            .status(status)
            .method(req.method().clone())
            .url(req.url().clone())
            .build())
    }))
    .layer(Box::new(layer))
}

fn test_request() -> Request {
    Request::new(Method::GET, Uri::from_static("http://api.test.local/v1/things"))
}

#[tokio::test]
async fn success_in_range_logs_at_info_with_status_and_duration() {
    let sink = Arc::new(MemorySink::new());
    let client = status_client(StatusCode::NO_CONTENT, sink.clone());

    let response = client.send(test_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (level, message) = &lines[0];
    assert_eq!(*level, Level::Info);
    assert!(message.contains("<<204("));
    assert!(message.contains("ms)"));
    assert!(message.starts_with("GET http://api.test.local/v1/things"));
}

#[tokio::test]
async fn success_outside_range_falls_back_to_default_level() {
    let sink = Arc::new(MemorySink::new());
    let client = status_client(StatusCode::INTERNAL_SERVER_ERROR, sink.clone());

    client.send(test_request()).await.unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Level::Error);
    assert!(lines[0].1.contains("<<500("));
}

#[tokio::test]
async fn transport_failure_logs_rendered_reason_at_error() {
    let sink = Arc::new(MemorySink::new());
    let layer = LoggingLayer::from_spec(&range_then_default_spec())
        .unwrap()
        .sink(sink.clone());
    let client = Client::new(transport_fn(|_req: Request| async {
        Err(TransportError::Connect {
            endpoint: "api.test.local:443".to_string(),
            reason: "dns failure".to_string(),
        })
    }))
    .layer(Box::new(layer));

    let err = client.send(test_request()).await.unwrap_err();
    assert!(matches!(err, TransportError::Connect { .. }));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Level::Error);
    assert!(lines[0].1.contains(">> ERROR: "));
    assert!(lines[0].1.contains("dns failure"));
}

#[tokio::test]
async fn one_line_per_request_across_a_session() {
    let sink = Arc::new(MemorySink::new());
    let client = status_client(StatusCode::OK, sink.clone());

    for _ in 0..3 {
        client.send(test_request()).await.unwrap();
    }

    assert_eq!(sink.len(), 3);
}

proptest! {
    #[test]
    fn bare_level_applies_to_every_status(status in 0u16..=999) {
        let table = RuleTable::from_spec(&LevelSpec::All("warn".to_string())).unwrap();
        prop_assert_eq!(table.resolve(status), Some(Level::Warn));
    }

    #[test]
    fn empty_spec_suppresses_every_status(status in 0u16..=999) {
        let table = RuleTable::from_spec(&LevelSpec::Rules(vec![])).unwrap();
        prop_assert_eq!(table.resolve(status), None);
    }

    #[test]
    fn declaration_order_beats_specificity(status in 200u16..=299) {
        // A broad range declared before an exact code for the same status:
        // the earlier rule wins even though the later one is narrower.
        let table = RuleTable::from_spec(&LevelSpec::Rules(vec![
            StatusRule::new(StatusSpec::Range { from: 200, to: 299 }, "info"),
            StatusRule::new(StatusSpec::Code(i64::from(status)), "debug"),
        ]))
        .unwrap();
        prop_assert_eq!(table.resolve(status), Some(Level::Info));

        // Flipping the declaration order flips the winner.
        let table = RuleTable::from_spec(&LevelSpec::Rules(vec![
            StatusRule::new(StatusSpec::Code(i64::from(status)), "debug"),
            StatusRule::new(StatusSpec::Range { from: 200, to: 299 }, "info"),
        ]))
        .unwrap();
        prop_assert_eq!(table.resolve(status), Some(Level::Debug));
    }

    #[test]
    fn exact_rule_before_default_resolves_both_paths(other in 300u16..=599) {
        let table = RuleTable::from_spec(&LevelSpec::Rules(vec![
            StatusRule::new(StatusSpec::Code(200), "info"),
            StatusRule::new(StatusSpec::Token("default".to_string()), "error"),
        ]))
        .unwrap();
        prop_assert_eq!(table.resolve(200), Some(Level::Info));
        prop_assert_eq!(table.resolve(other), Some(Level::Error));
    }
}
