//! Integration tests for the inference client against a local stub server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value};

use sentiview::{
    Analyzer, ClientConfig, Corpus, RemoteError, Sentiment, SentimentClassifier, SentimentClient,
    SentiviewError,
};

/// What the stub saw on its last request.
#[derive(Debug, Clone, Default)]
struct Captured {
    authorization: Option<String>,
    content_type: Option<String>,
    body: Value,
    requests: usize,
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    delay: Option<Duration>,
    captured: Arc<Mutex<Captured>>,
}

async fn handle(State(stub): State<Stub>, headers: HeaderMap, body: Bytes) -> (StatusCode, String) {
    {
        let mut captured = stub.captured.lock().unwrap();
        captured.authorization = headers
            .get(header::AUTHORIZATION)
            .map(|v| v.to_str().unwrap().to_string());
        captured.content_type = headers
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        captured.body = serde_json::from_slice(&body).unwrap_or(Value::Null);
        captured.requests += 1;
    }
    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }
    (stub.status, stub.body.to_string())
}

/// Start a stub inference server and return its endpoint URL.
async fn spawn_stub_with(
    status: StatusCode,
    body: &'static str,
    delay: Option<Duration>,
) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let stub = Stub {
        status,
        body,
        delay,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/models/sentiment", post(handle))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/models/sentiment", addr), captured)
}

async fn spawn_stub(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Captured>>) {
    spawn_stub_with(status, body, None).await
}

fn client_for(endpoint: &str) -> SentimentClient {
    SentimentClient::with_config(ClientConfig::default().with_endpoint(endpoint)).unwrap()
}

const POSITIVE_BODY: &str = r#"[[{"label":"POSITIVE","score":0.9987},{"label":"NEGATIVE","score":0.0013}]]"#;

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn test_anonymous_call_omits_authorization() {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, POSITIVE_BODY).await;

    let sentiment = client_for(&endpoint).classify("Great movie", None).await.unwrap();
    assert_eq!(sentiment, Sentiment::Positive);

    let captured = captured.lock().unwrap();
    assert_eq!(captured.authorization, None);
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(captured.body, json!({"inputs": "Great movie"}));
}

#[tokio::test]
async fn test_credential_sent_as_bearer() {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, POSITIVE_BODY).await;

    client_for(&endpoint).classify("Great movie", Some("abc")).await.unwrap();

    assert_eq!(
        captured.lock().unwrap().authorization.as_deref(),
        Some("Bearer abc")
    );
}

#[tokio::test]
async fn test_blank_credential_is_anonymous() {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, POSITIVE_BODY).await;

    client_for(&endpoint).classify("Great movie", Some("   ")).await.unwrap();

    assert_eq!(captured.lock().unwrap().authorization, None);
}

#[tokio::test]
async fn test_empty_text_never_sent() {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, POSITIVE_BODY).await;

    let err = client_for(&endpoint).classify("  ", None).await.unwrap_err();
    assert!(matches!(err, SentiviewError::InvalidInput(_)));
    assert_eq!(captured.lock().unwrap().requests, 0);
}

// =============================================================================
// Status Classification
// =============================================================================

async fn remote_error_for(status: StatusCode) -> RemoteError {
    let (endpoint, captured) = spawn_stub(status, r#"{"error":"nope"}"#).await;
    let err = client_for(&endpoint).classify("text", None).await.unwrap_err();
    assert_eq!(captured.lock().unwrap().requests, 1, "no retries");
    match err {
        SentiviewError::Remote(remote) => remote,
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_503_is_model_loading() {
    assert_eq!(
        remote_error_for(StatusCode::SERVICE_UNAVAILABLE).await,
        RemoteError::ModelLoading
    );
}

#[tokio::test]
async fn test_429_is_rate_limited() {
    assert_eq!(
        remote_error_for(StatusCode::TOO_MANY_REQUESTS).await,
        RemoteError::RateLimited
    );
}

#[tokio::test]
async fn test_401_is_unauthorized() {
    assert_eq!(
        remote_error_for(StatusCode::UNAUTHORIZED).await,
        RemoteError::Unauthorized
    );
}

#[tokio::test]
async fn test_500_is_unexpected_status() {
    let err = remote_error_for(StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(
        err,
        RemoteError::UnexpectedStatus {
            code: 500,
            status_text: "Internal Server Error".to_string()
        }
    );
    assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
}

// =============================================================================
// Payload Handling
// =============================================================================

#[tokio::test]
async fn test_negative_payload() {
    let (endpoint, _) = spawn_stub(
        StatusCode::OK,
        r#"[[{"label":"NEGATIVE","score":0.91},{"label":"POSITIVE","score":0.09}]]"#,
    )
    .await;

    let sentiment = client_for(&endpoint).classify("Dull", None).await.unwrap();
    assert_eq!(sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn test_malformed_success_body_is_neutral() {
    let (endpoint, _) = spawn_stub(StatusCode::OK, "<html>oops</html>").await;

    let sentiment = client_for(&endpoint).classify("Anything", None).await.unwrap();
    assert_eq!(sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_unexpected_shape_is_neutral() {
    let (endpoint, _) = spawn_stub(StatusCode::OK, r#"{"estimated_time": 20.0}"#).await;

    let sentiment = client_for(&endpoint).classify("Anything", None).await.unwrap();
    assert_eq!(sentiment, Sentiment::Neutral);
}

// =============================================================================
// Transport Failures
// =============================================================================

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then close it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}/models/sentiment", addr));
    let err = client.classify("text", None).await.unwrap_err();

    assert!(matches!(err, SentiviewError::Transport(_)));
    assert!(err.to_string().starts_with("Analysis failed: "));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let (endpoint, _) =
        spawn_stub_with(StatusCode::OK, POSITIVE_BODY, Some(Duration::from_secs(5))).await;

    let config = ClientConfig::default()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_millis(100));
    let client = SentimentClient::with_config(config).unwrap();

    match client.classify("text", None).await {
        Err(SentiviewError::Transport(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

// =============================================================================
// End to End
// =============================================================================

#[tokio::test]
async fn test_analyzer_with_remote_client() {
    let (endpoint, captured) = spawn_stub(StatusCode::OK, POSITIVE_BODY).await;

    let corpus = Corpus::from_texts(["  the only review  "]).unwrap();
    let analyzer = Analyzer::new(corpus, client_for(&endpoint));

    let analysis = analyzer.analyze_random(Some("tok")).await.unwrap();
    assert_eq!(analysis.review.as_str(), "the only review");
    assert_eq!(analysis.sentiment, Sentiment::Positive);
    assert_eq!(analysis.label.as_deref(), Some("POSITIVE"));
    assert_eq!(analysis.score, Some(0.9987));

    let captured = captured.lock().unwrap();
    assert_eq!(captured.body, json!({"inputs": "the only review"}));
    assert_eq!(captured.authorization.as_deref(), Some("Bearer tok"));
}
