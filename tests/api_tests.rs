//! Integration tests for the Sidemail endpoint groups.
//!
//! Every test runs against a local wiremock server standing in for
//! `https://api.sidemail.io/v1`.

use std::time::Duration;

use serde_json::json;
use sidemail::{ApiKey, BaseUrl, HttpError, InvalidHttpRequestError, Sidemail, SidemailConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> Sidemail {
    let config = SidemailConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    Sidemail::new(config).unwrap()
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_requests_carry_auth_and_json_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header(
            "User-Agent",
            format!("sidemail-sdk-rust/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "project-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let project = create_client(&server).project().get().await.unwrap();
    assert_eq!(project.get("id").and_then(|v| v.as_str()), Some("project-1"));
}

#[tokio::test]
async fn test_user_agent_prefix_is_prepended() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .and(header(
            "User-Agent",
            format!("MyApp/2.0 | sidemail-sdk-rust/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = SidemailConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .user_agent_prefix("MyApp/2.0")
        .build()
        .unwrap();
    let client = Sidemail::new(config).unwrap();

    client.domains().list().await.unwrap();
}

// ============================================================================
// Email
// ============================================================================

#[tokio::test]
async fn test_send_email_posts_params_as_body() {
    let server = MockServer::start().await;
    let params = json!({
        "toAddress": "user@example.com",
        "fromAddress": "you@example.com",
        "templateName": "Welcome",
        "templateProps": {"firstName": "Ada"},
    });

    Mock::given(method("POST"))
        .and(path("/v1/email/send"))
        .and(body_json(&params))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "email-1", "status": "queued"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = create_client(&server).send_email(params).await.unwrap();
    let email = response.as_resource().unwrap();

    assert_eq!(email.id(), Some("email-1"));
    assert_eq!(email.status(), Some("queued"));
}

#[tokio::test]
async fn test_send_email_with_attachment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/email/send"))
        .and(body_json(json!({
            "toAddress": "user@example.com",
            "attachments": [{"name": "hello.txt", "content": "aGVsbG8="}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "email-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let attachment = Sidemail::file_to_attachment("hello.txt", b"hello");
    create_client(&server)
        .email()
        .send(json!({"toAddress": "user@example.com", "attachments": [attachment]}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_email_get_returns_email_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/email/email-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": {"id": "email-1", "status": "delivered", "type": "transactional"}
        })))
        .mount(&server)
        .await;

    let email = create_client(&server).email().get("email-1").await.unwrap();
    let email = email.as_resource().unwrap();

    assert_eq!(email.status(), Some("delivered"));
    assert_eq!(email.attr("type_").unwrap(), email.get("type").unwrap());
}

#[tokio::test]
async fn test_email_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/email/email-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = create_client(&server).email().delete("email-1").await.unwrap();
    assert_eq!(response.get("deleted").and_then(|v| v.as_bool()), Some(true));
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contact_find_encodes_address_and_extracts_contact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/contacts/ada%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contact": {"emailAddress": "ada@example.com", "customProps": {"plan": "pro"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let contact = create_client(&server)
        .contacts()
        .find("ada@example.com")
        .await
        .unwrap();

    assert_eq!(
        contact.to_dict(),
        json!({"emailAddress": "ada@example.com", "customProps": {"plan": "pro"}})
    );
}

#[tokio::test]
async fn test_contact_create_or_update_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/contacts"))
        .and(body_json(json!({"emailAddress": "ada@example.com", "isSubscribed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "created"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/contacts/ada%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let created = client
        .contacts()
        .create_or_update(json!({"emailAddress": "ada@example.com", "isSubscribed": true}))
        .await
        .unwrap();
    assert_eq!(created.get("status").and_then(|v| v.as_str()), Some("created"));

    client.contacts().delete("ada@example.com").await.unwrap();
}

#[tokio::test]
async fn test_empty_path_param_is_rejected_before_sending() {
    let server = MockServer::start().await;

    let error = create_client(&server).contacts().find("").await.unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPathParam { .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_object_params_are_rejected() {
    let server = MockServer::start().await;

    let error = create_client(&server)
        .contacts()
        .create_or_update(json!(["not", "an", "object"]))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::InvalidParams { .. })
    ));
}

// ============================================================================
// Messenger, domains, project
// ============================================================================

#[tokio::test]
async fn test_messenger_crud() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messenger"))
        .and(body_json(json!({"name": "Newsletter"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/messenger/m1"))
        .and(body_json(json!({"subject": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1", "subject": "Hello"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/messenger/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/messenger/m1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let messenger = client.messenger();

    let created = messenger.create(json!({"name": "Newsletter"})).await.unwrap();
    assert_eq!(created.as_resource().unwrap().id(), Some("m1"));

    let updated = messenger.update("m1", json!({"subject": "Hello"})).await.unwrap();
    assert_eq!(updated.get("subject").and_then(|v| v.as_str()), Some("Hello"));

    messenger.get("m1").await.unwrap();

    let deleted = messenger.delete("m1").await.unwrap();
    assert!(deleted.is_null());
}

#[tokio::test]
async fn test_domains_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "d1", "name": "example.com"}]})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/domains"))
        .and(body_json(json!({"name": "example.org"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "d2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/domains/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let domains = client.domains().list().await.unwrap();
    let first = &domains.get("data").and_then(|v| v.as_list()).unwrap()[0];
    assert_eq!(first.get("name").and_then(|v| v.as_str()), Some("example.com"));

    client.domains().create(json!({"name": "example.org"})).await.unwrap();
    client.domains().delete("d1").await.unwrap();
}

#[tokio::test]
async fn test_project_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/project"))
        .and(body_json(json!({"name": "Child"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p2", "apiKey": "k"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/project"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "p1", "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/project"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let project = client.project();

    let created = project.create(json!({"name": "Child"})).await.unwrap();
    assert_eq!(created.get("apiKey").and_then(|v| v.as_str()), Some("k"));

    let updated = project.update(json!({"name": "Renamed"})).await.unwrap();
    assert_eq!(updated.get("name").and_then(|v| v.as_str()), Some("Renamed"));

    assert!(project.delete().await.unwrap().is_null());
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_401_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "developerMessage": "Invalid API key",
            "errorCode": "unauthorized",
        })))
        .mount(&server)
        .await;

    let error = create_client(&server).project().get().await.unwrap_err();

    match error {
        HttpError::Auth(e) => {
            assert_eq!(e.status, 401);
            assert_eq!(e.message, "Invalid API key");
            assert_eq!(e.error_code.as_deref(), Some("unauthorized"));
        }
        other => panic!("expected an auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_keeps_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/email/send"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "developerMessage": "Something broke",
            "errorCode": "server_error",
            "moreInfo": "https://sidemail.io/docs",
        })))
        .mount(&server)
        .await;

    let error = create_client(&server)
        .send_email(json!({"toAddress": "user@example.com"}))
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Api(_)));
    let details = error.response().unwrap();
    assert_eq!(details.status, 500);
    assert_eq!(details.more_info.as_deref(), Some("https://sidemail.io/docs"));
    assert_eq!(details.payload["errorCode"], "server_error");
}

#[tokio::test]
async fn test_non_json_error_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let error = create_client(&server).domains().list().await.unwrap_err();

    assert_eq!(error.status(), Some(502));
    assert_eq!(error.to_string(), "Bad Gateway");
}

#[tokio::test]
async fn test_non_json_success_body_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let response = create_client(&server).project().get().await.unwrap();
    assert_eq!(response.as_str(), Some("OK"));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = SidemailConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = Sidemail::new(config).unwrap();

    let error = client.project().get().await.unwrap_err();
    match error {
        HttpError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_params_go_to_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/messenger"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "m1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server)
        .messenger()
        .list(json!({"limit": 5}))
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.offset(), Some(0));
    assert_eq!(result.limit(), Some(5));
    assert!(!result.has_more());
}

#[tokio::test]
async fn test_messenger_list_walks_offset_in_query_string() {
    let server = MockServer::start().await;
    let messengers = |from: usize, count: usize| {
        json!((from..from + count)
            .map(|i| json!({ "id": format!("m{i}") }))
            .collect::<Vec<_>>())
    };

    Mock::given(method("GET"))
        .and(path("/v1/messenger"))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": messengers(5, 2)})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/messenger"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": messengers(0, 5)})))
        .expect(1)
        .mount(&server)
        .await;

    let result = create_client(&server)
        .messenger()
        .list(json!({"limit": 5}))
        .await
        .unwrap();
    assert!(result.has_more());

    let items = result.auto_paginate().collect_all().await.unwrap();

    assert_eq!(items.len(), 7);
    assert_eq!(items[6].get("id").and_then(sidemail::Value::as_str), Some("m6"));
}
