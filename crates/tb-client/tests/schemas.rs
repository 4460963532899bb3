//! Schema and compatibility endpoints against a mock registry.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use tb_client::{
    Client, ClientError, ClientOptions, Compatibility, SchemaApi, SchemaId, SemanticVersion,
    VersionSelector,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{DEFINITION, client_for, schema_json};

#[tokio::test]
async fn register_schema_posts_definition_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subjects/test-subject/versions"))
        .and(header("content-type", "application/json"))
        .and(body_string(DEFINITION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .register_schema("test-subject", DEFINITION)
        .await
        .unwrap();
    assert_eq!(id, SchemaId { id: 7 });
}

#[tokio::test]
async fn register_schema_rejects_bare_integer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subjects/test-subject/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register_schema("test-subject", DEFINITION)
        .await
        .unwrap_err();
    let violations = err.violations().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$");
}

#[tokio::test]
async fn lookup_schema_maps_version_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subjects/test-subject/schema/lookup"))
        .and(body_string(DEFINITION))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema_json(3, "v1.2.0")))
        .mount(&server)
        .await;

    let schema = client_for(&server)
        .lookup_schema("test-subject", DEFINITION)
        .await
        .unwrap();
    assert_eq!(schema.id, 3);
    assert_eq!(schema.subject, "test-subject");
    assert_eq!(schema.version, SemanticVersion::new(1, 2, 0));
    assert_eq!(schema.schema, DEFINITION);
}

#[tokio::test]
async fn lookup_all_aggregates_every_element_failure() {
    let server = MockServer::start().await;
    let mut broken = schema_json(2, "1.0");
    broken["id"] = json!("two");
    Mock::given(method("POST"))
        .and(path("/subjects/test-subject/schema/lookupAll"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([schema_json(1, "v1.0.0"), broken])),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .lookup_all_schemas("test-subject", DEFINITION)
        .await
        .unwrap_err();
    let paths: Vec<&str> = err
        .violations()
        .unwrap()
        .iter()
        .map(|v| v.path.as_str())
        .collect();
    assert_eq!(paths, vec!["$[1].id", "$[1].version"]);
}

#[tokio::test]
async fn lookup_all_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/subjects/test-subject/schema/lookupAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            schema_json(2, "v2.0.0"),
            schema_json(1, "v1.0.0"),
        ])))
        .mount(&server)
        .await;

    let schemas = client_for(&server)
        .lookup_all_schemas("test-subject", DEFINITION)
        .await
        .unwrap();
    let ids: Vec<i64> = schemas.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn get_schema_by_id_uses_ids_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schemas/ids/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema_json(42, "v1.0.0")))
        .expect(1)
        .mount(&server)
        .await;

    let schema = client_for(&server).get_schema_by_id(42).await.unwrap();
    assert_eq!(schema.id, 42);
}

#[tokio::test]
async fn version_selectors_map_to_paths() {
    let server = MockServer::start().await;
    for (segment, version) in [("latest", "v3.1.4"), ("v3", "v3.1.4"), ("v1.0.1", "v1.0.1")] {
        Mock::given(method("GET"))
            .and(path(format!("/subjects/test-subject/versions/{segment}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(schema_json(1, version)))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);

    let latest = client.get_latest_schema("test-subject").await.unwrap();
    assert_eq!(latest.version, SemanticVersion::new(3, 1, 4));

    let major = client
        .get_schema_by_major_version("test-subject", 3)
        .await
        .unwrap();
    assert_eq!(major.version.major, 3);

    let exact = client
        .get_schema_by_version("test-subject", SemanticVersion::new(1, 0, 1))
        .await
        .unwrap();
    assert_eq!(exact.version, SemanticVersion::new(1, 0, 1));
}

#[tokio::test]
async fn list_versions_parses_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subjects/test-subject/versions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["v1.0.0", "v1.1.0", "v2.0.0"])),
        )
        .mount(&server)
        .await;

    let versions = client_for(&server)
        .list_versions("test-subject")
        .await
        .unwrap();
    assert_eq!(
        versions,
        vec![
            SemanticVersion::new(1, 0, 0),
            SemanticVersion::new(1, 1, 0),
            SemanticVersion::new(2, 0, 0),
        ]
    );
}

#[tokio::test]
async fn list_versions_rejects_malformed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subjects/test-subject/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["v1.0.0", "v01.0.0", 3])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_versions("test-subject")
        .await
        .unwrap_err();
    let paths: Vec<&str> = err
        .violations()
        .unwrap()
        .iter()
        .map(|v| v.path.as_str())
        .collect();
    assert_eq!(paths, vec!["$[1]", "$[2]"]);
}

#[tokio::test]
async fn compatibility_checks_hit_every_selector() {
    let server = MockServer::start().await;
    for (segment, compatible) in [("latest", true), ("v2", false), ("v2.0.1", true)] {
        Mock::given(method("POST"))
            .and(path(format!(
                "/compatibility/subjects/test-subject/versions/{segment}"
            )))
            .and(body_string(DEFINITION))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "isCompatible": compatible })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);

    assert_eq!(
        client
            .check_compatibility_with_latest("test-subject", DEFINITION)
            .await
            .unwrap(),
        Compatibility { is_compatible: true }
    );
    assert!(
        !client
            .check_compatibility_with_major_version("test-subject", 2, DEFINITION)
            .await
            .unwrap()
            .is_compatible
    );
    assert!(
        client
            .check_compatibility(
                "test-subject",
                VersionSelector::Exact(SemanticVersion::new(2, 0, 1)),
                DEFINITION,
            )
            .await
            .unwrap()
            .is_compatible
    );
}

#[tokio::test]
async fn compatibility_requires_boolean_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/compatibility/subjects/test-subject/versions/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isCompatible": "yes" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .check_compatibility_with_latest("test-subject", DEFINITION)
        .await
        .unwrap_err();
    assert_eq!(err.violations().unwrap()[0].path, "$.isCompatible");
}

#[tokio::test]
async fn unreachable_registry_is_a_transport_error() {
    let client = Client::new(&ClientOptions::new("http://127.0.0.1:1")).unwrap();
    let err = client.get_schema_by_id(1).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(matches!(err, ClientError::Transport(_)));
}
