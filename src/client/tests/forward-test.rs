use std::time::Duration;

use formrelay_client::config_manager::{Config, ConfigLoader};
use formrelay_client::forwarder::SubmissionForwarder;
use formrelay_client::payload::build_payload;
use formrelay_common::types::form::{Element, FieldMappings, FormDefinition};
use formrelay_common::types::outcome::Outcome;
use formrelay_common::types::submission::{Submission, SubmissionPayload};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forwarder() -> SubmissionForwarder {
    let config = ConfigLoader::load_default_config().unwrap();
    SubmissionForwarder::from_config(&config).unwrap()
}

fn sample_payload() -> SubmissionPayload {
    let mappings = FieldMappings::from_pairs(vec![("email_address", "email")]).unwrap();
    let mut definition = FormDefinition::new(mappings);
    definition.insert_element("email_address", Element::new("email").with_title("Email"));

    let mut submission = Submission::new();
    submission.insert("email_address", json!("a@example.com"));

    build_payload(&definition, &submission)
}

#[tokio::test]
async fn test_redirect_response_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=a%40example.com"))
        .respond_with(ResponseTemplate::new(302))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = forwarder()
        .forward(&sample_payload(), &format!("{}/submit", server.uri()))
        .await;

    assert_eq!(outcome, Outcome::Accepted);
}

// The remote redirects on success and answers anything else on invalid data,
// so every non-redirect status classifies the same way, 200 included.
#[tokio::test]
async fn test_non_redirect_statuses_are_rejected() {
    for status in [200u16, 400, 401, 403, 404, 422, 500] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let outcome = forwarder().forward(&sample_payload(), &server.uri()).await;

        assert_eq!(outcome, Outcome::ValidationRejected, "status {}", status);
    }
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/followed", server.uri()).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(path("/followed"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = forwarder()
        .forward(&sample_payload(), &format!("{}/submit", server.uri()))
        .await;

    // following the redirect would land on /followed and turn this into a
    // rejection; the expect(0) above is verified when the server drops
    assert_eq!(outcome, Outcome::Accepted);
}

#[tokio::test]
async fn test_connection_error_is_transport_failure() {
    let endpoint = {
        let server = MockServer::start().await;
        server.uri()
    };

    let outcome = forwarder().forward(&sample_payload(), &endpoint).await;

    assert_eq!(outcome, Outcome::TransportFailure);
}

#[tokio::test]
async fn test_timeout_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(302).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = Config {
        request_timeout_ms: 100,
        connect_timeout_ms: 100,
    };
    let forwarder = SubmissionForwarder::from_config(&config).unwrap();

    let outcome = forwarder.forward(&sample_payload(), &server.uri()).await;

    assert_eq!(outcome, Outcome::TransportFailure);
}

#[tokio::test]
async fn test_every_call_issues_a_new_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(302))
        .expect(2)
        .mount(&server)
        .await;

    let forwarder = forwarder();
    let payload = sample_payload();

    assert_eq!(
        forwarder.forward(&payload, &server.uri()).await,
        Outcome::Accepted
    );
    assert_eq!(
        forwarder.forward(&payload, &server.uri()).await,
        Outcome::Accepted
    );
}

#[tokio::test]
async fn test_unconfigured_endpoint_is_transport_failure() {
    let outcome = forwarder().forward(&sample_payload(), "").await;

    assert_eq!(outcome, Outcome::TransportFailure);
}
