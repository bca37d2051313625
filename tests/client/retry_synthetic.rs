use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use edgar_insiders::{Backoff, EdgarClient, EdgarError, FilingSource, RetryConfig, Throttle};
use httpmock::{Method::GET, MockServer};
use url::Url;

use crate::common::{client_for, fast_retry, no_retry};

fn doc_url(server: &MockServer) -> Url {
    Url::parse(&server.url("/Archives/edgar/data/1/doc.xml")).unwrap()
}

#[tokio::test]
async fn retries_retryable_status_then_surfaces_it() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/Archives/edgar/data/1/doc.xml");
        then.status(503);
    });

    let client = client_for(&server, fast_retry(2));
    let url = doc_url(&server);
    let err = client.fetch_document(&url).await.unwrap_err();

    mock.assert_calls(3);
    match err {
        EdgarError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/doc.xml"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/Archives/edgar/data/1/doc.xml");
        then.status(404);
    });

    let client = client_for(&server, fast_retry(3));
    let err = client.fetch_document(&doc_url(&server)).await.unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, EdgarError::Status { status: 404, .. }));
    assert!(err.is_fetch());
}

#[tokio::test]
async fn disabled_policy_makes_one_attempt() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/Archives/edgar/data/1/doc.xml");
        then.status(500);
    });

    let client = client_for(&server, no_retry());
    assert!(client.fetch_document(&doc_url(&server)).await.is_err());
    mock.assert_calls(1);
}

#[tokio::test]
async fn success_returns_body_and_sends_user_agent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/Archives/edgar/data/1/doc.xml")
            .header("user-agent", "test-suite ops@example.com");
        then.status(200).body("<ownershipDocument/>");
    });

    let client = EdgarClient::builder()
        .base_url(Url::parse(&server.url("/")).unwrap())
        .user_agent("test-suite ops@example.com")
        .throttle(edgar_insiders::Unthrottled)
        .build()
        .unwrap();
    let body = client.fetch_document(&doc_url(&server)).await.unwrap();

    mock.assert();
    assert_eq!(body, b"<ownershipDocument/>");
}

#[derive(Debug, Default)]
struct CountingThrottle(Arc<AtomicUsize>);

impl Throttle for CountingThrottle {
    fn acquire(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::ready(()))
    }
}

#[tokio::test]
async fn every_attempt_waits_on_the_throttle() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/Archives/edgar/data/1/doc.xml");
        then.status(429);
    });

    let count = Arc::new(AtomicUsize::new(0));
    let client = EdgarClient::builder()
        .base_url(Url::parse(&server.url("/")).unwrap())
        .throttle(CountingThrottle(count.clone()))
        .retry_config(fast_retry(2))
        .build()
        .unwrap();

    let _ = client.fetch_document(&doc_url(&server)).await;
    mock.assert_calls(3);
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn backoff_delays() {
    let fixed = Backoff::Fixed(Duration::from_millis(250));
    assert_eq!(fixed.delay(0), Duration::from_millis(250));
    assert_eq!(fixed.delay(7), Duration::from_millis(250));

    let exp = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(500),
        jitter: false,
    };
    assert_eq!(exp.delay(0), Duration::from_millis(100));
    assert_eq!(exp.delay(1), Duration::from_millis(200));
    assert_eq!(exp.delay(2), Duration::from_millis(400));
    assert_eq!(exp.delay(3), Duration::from_millis(500));
    assert_eq!(exp.delay(u32::MAX), Duration::from_millis(500));

    let jittered = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_secs(1),
        jitter: true,
    };
    for _ in 0..50 {
        let d = jittered.delay(1);
        assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(300));
    }
}

#[test]
fn default_policy_retries_transient_statuses() {
    let cfg = RetryConfig::default();
    assert!(cfg.enabled);
    assert_eq!(cfg.max_retries, 3);
    for s in [429, 500, 502, 503, 504] {
        assert!(cfg.retry_on_status.contains(&s));
    }
    assert!(!cfg.retry_on_status.contains(&404));
}
