//! End-to-end test of the facade against a mock Salesforce org: one token
//! exchange feeding query, composite, and event publication.

use std::sync::Arc;

use conduit_sf_api::{
    ClientCredentials, CompositeRequest, CompositeSubrequest, SalesforceRestClient, TokenManager,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_org() -> (MockServer, SalesforceRestClient) {
    let server = MockServer::start().await;

    // The org issues exactly one token for the whole session.
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "session_token",
            "instance_url": server.uri(),
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let creds = ClientCredentials::new("client123", "secret456", server.uri()).unwrap();
    let auth = Arc::new(TokenManager::new(creds).unwrap());
    let client = SalesforceRestClient::new(auth).unwrap();

    (server, client)
}

#[tokio::test]
async fn full_session_reuses_one_token_across_operations() {
    let (server, client) = mock_org().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v64.0/query"))
        .and(query_param("q", "SELECT Id, Name FROM Account LIMIT 3"))
        .and(header("Authorization", "Bearer session_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 3,
            "done": true,
            "records": [
                {"Id": "001xx1", "Name": "Alpha Corp"},
                {"Id": "001xx2", "Name": "Beta Industries"},
                {"Id": "001xx3", "Name": "Gamma Solutions"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/data/v64.0/composite"))
        .and(header("Authorization", "Bearer session_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "compositeResponse": [
                {
                    "body": {"records": [{"Id": "001xx1"}]},
                    "httpHeaders": {},
                    "httpStatusCode": 200,
                    "referenceId": "AccountReference"
                }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/data/v64.0/sobjects/Test__e"))
        .and(header("Authorization", "Bearer session_token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "e01xx0000000001AAA",
            "success": true,
            "errors": []
        })))
        .mount(&server)
        .await;

    let accounts: Vec<Value> = client
        .query("SELECT Id, Name FROM Account LIMIT 3")
        .await
        .unwrap();
    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[1]["Name"], "Beta Industries");

    let batch = CompositeRequest::new(vec![CompositeSubrequest::get(
        "/services/data/v64.0/query/?q=SELECT Id FROM Account LIMIT 1",
        "AccountReference",
    )]);
    let composite = client.composite(&batch).await.unwrap();
    assert_eq!(composite.responses.len(), 1);
    assert_eq!(composite.responses[0].http_status_code, 200);

    let event = client
        .publish_event("Test__e", &json!({"Code__c": "007"}))
        .await
        .unwrap();
    assert!(event.success);
}

#[tokio::test]
async fn api_error_on_optional_operation_is_catchable() {
    let (server, client) = mock_org().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v64.0/sobjects/Undefined__e"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    // Caller treats a missing event type as non-fatal, the way the smoke
    // driver does.
    let err = client
        .publish_event("Undefined__e", &json!({"Code__c": "007"}))
        .await
        .unwrap_err();
    assert!(!err.is_auth_error());
    assert_eq!(err.status(), Some(404));
}
