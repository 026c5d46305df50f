use mxtoolbox_client::{MxError, MxToolboxClient};
use mxtoolbox_core::{ApiKey, Command, ErrorClass, QueryRequest};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> MxToolboxClient {
    let key = ApiKey::from_contents("test-key\n").unwrap();
    MxToolboxClient::builder(key)
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn query_keys(request: &wiremock::Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect()
}

#[tokio::test]
async fn sends_key_in_authorization_header_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/Lookup/a"))
        .and(header("Authorization", "test-key"))
        .and(query_param("argument", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Information": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = QueryRequest::new(Command::A, "example.com", None);
    let response = client(&server).execute(&request).await.unwrap();

    assert_eq!(response.command(), Command::A);
    assert!(response.body().contains("Information"));

    let received = server.received_requests().await.unwrap();
    assert_eq!(query_keys(&received[0]), vec!["argument"]);
}

#[tokio::test]
async fn tcp_probe_sends_port() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/Lookup/tcp"))
        .and(query_param("argument", "mail.example.com"))
        .and(query_param("port", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CommandArgument": "mail.example.com",
            "Information": [{"Summary": "Connected to mail.example.com:25"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = client(&server)
        .lookup()
        .tcp("mail.example.com")
        .port(25)
        .send()
        .await
        .unwrap();

    assert_eq!(report.command_argument, "mail.example.com");
    assert_eq!(report.information.len(), 1);
}

#[tokio::test]
async fn modifier_is_not_sent_for_scan() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/Lookup/scan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CommandArgument": "example.com",
            "Information": []
        })))
        .mount(&server)
        .await;

    let request = QueryRequest::new(Command::Scan, "example.com", Some("8080".into()));
    client(&server).execute(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(query_keys(&received[0]), vec!["argument"]);
}

#[tokio::test]
async fn typed_blacklist_helper() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v1/Lookup/blacklist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CommandArgument": "192.0.2.10",
            "Failed": [{"Name": "SPAMCOP"}, {"Name": "UCEPROTECTL1"}]
        })))
        .mount(&server)
        .await;

    let report = client(&server).lookup().blacklist("192.0.2.10").await.unwrap();
    assert_eq!(report.listed_count(), 2);
    assert_eq!(report.failed[1].name, "UCEPROTECTL1");
}

#[tokio::test]
async fn typed_helper_reports_parse_errors() {
    let server = MockServer::start().await;
    Mock::given(path("/api/v1/Lookup/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Information": []})))
        .mount(&server)
        .await;

    let err = client(&server).lookup().ping("example.com").await.unwrap_err();
    assert!(matches!(err, MxError::Parse { command: Command::Ping, .. }));
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let request = QueryRequest::new(Command::Ping, "example.com", None);
    let err = client(&server).execute(&request).await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.class(), ErrorClass::Transport);
}

#[tokio::test]
async fn server_error_keeps_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"Message": "lookup backend down"})),
        )
        .mount(&server)
        .await;

    let request = QueryRequest::new(Command::A, "example.com", None);
    let err = client(&server).execute(&request).await.unwrap_err();

    match err {
        MxError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "lookup backend down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "60"))
        .mount(&server)
        .await;

    let request = QueryRequest::new(Command::A, "example.com", None);
    let err = client(&server).execute(&request).await.unwrap_err();

    assert!(matches!(err, MxError::RateLimited { retry_after: Some(60) }));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let key = ApiKey::from_contents("test-key").unwrap();
    let client = MxToolboxClient::builder(key)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let request = QueryRequest::new(Command::A, "example.com", None);
    let err = client.execute(&request).await.unwrap_err();

    assert_eq!(err.class(), ErrorClass::Transport);
}

#[test]
fn invalid_base_url_is_rejected() {
    let key = ApiKey::from_contents("test-key").unwrap();
    let result = MxToolboxClient::builder(key).base_url("not a url").build();

    assert!(matches!(result, Err(MxError::InvalidUrl(_))));
}

#[test]
fn trailing_slash_is_trimmed() {
    let key = ApiKey::from_contents("test-key").unwrap();
    let client = MxToolboxClient::builder(key)
        .base_url("https://mxtoolbox.com/")
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "https://mxtoolbox.com");
}
