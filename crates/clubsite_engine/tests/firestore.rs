use std::time::Duration;

use clubsite_engine::{DocumentStore, FailureKind, FirestoreStore, StoreSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCS: &str = "/v1/projects/demo/databases/(default)/documents";

fn store_for(server: &MockServer) -> FirestoreStore {
    FirestoreStore::new(StoreSettings {
        base_url: server.uri(),
        project_id: "demo".to_string(),
        page_size: 2,
        ..StoreSettings::default()
    })
    .expect("client")
}

fn document(id: &str, name: &str, order: i64) -> serde_json::Value {
    json!({
        "name": format!("projects/demo/databases/(default)/documents/sponsors/{id}"),
        "fields": {
            "name": { "stringValue": name },
            "priority": { "integerValue": order.to_string() }
        }
    })
}

#[tokio::test]
async fn list_follows_page_tokens_and_decodes_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/sponsors")))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [document("acme", "Acme", 2), document("bolt", "Bolt", 1)],
            "nextPageToken": "page-2"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/sponsors")))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [document("core", "Core", 3)]
        })))
        .mount(&server)
        .await;

    let records = store_for(&server)
        .list_documents(&["sponsors"])
        .await
        .expect("list ok");

    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["acme", "bolt", "core"]);
    assert_eq!(records[1].get("name"), Some(&json!("Bolt")));
    assert_eq!(records[1].get("priority"), Some(&json!(1)));
}

#[tokio::test]
async fn empty_collection_lists_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/collaborations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let records = store_for(&server)
        .list_documents(&["collaborations"])
        .await
        .expect("list ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn get_missing_document_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/All_Data/Collaborated_Clubs")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let record = store_for(&server)
        .get_document(&["All_Data", "Collaborated_Clubs"])
        .await
        .expect("get ok");
    assert_eq!(record, None);
}

#[tokio::test]
async fn get_document_decodes_bundled_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/All_Data/Collaborated_Clubs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo/databases/(default)/documents/All_Data/Collaborated_Clubs",
            "fields": {
                "Image_1": { "stringValue": "https://img.example/1.png" },
                "Image_2": { "stringValue": "https://img.example/2.png" }
            }
        })))
        .mount(&server)
        .await;

    let record = store_for(&server)
        .get_document(&["All_Data", "Collaborated_Clubs"])
        .await
        .expect("get ok")
        .expect("present");
    assert_eq!(record.id, "Collaborated_Clubs");
    assert_eq!(record.get("Image_2"), Some(&json!("https://img.example/2.png")));
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .list_documents(&["sponsors"])
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .list_documents(&["sponsors"])
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_store_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let store = FirestoreStore::new(StoreSettings {
        base_url: server.uri(),
        project_id: "demo".to_string(),
        request_timeout: Duration::from_millis(50),
        ..StoreSettings::default()
    })
    .expect("client");

    let err = store.list_documents(&["sponsors"]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn path_shape_is_checked_before_any_request() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    let err = store
        .list_documents(&["All_Data", "Collaborated_Clubs"])
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPath);

    let err = store.get_document(&["sponsors"]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPath);

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn api_key_and_spaces_in_paths_are_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DOCS}/Contact%20Us")))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreStore::new(StoreSettings {
        base_url: server.uri(),
        project_id: "demo".to_string(),
        api_key: Some("secret".to_string()),
        ..StoreSettings::default()
    })
    .expect("client");

    store.list_documents(&["Contact Us"]).await.expect("list ok");
}
