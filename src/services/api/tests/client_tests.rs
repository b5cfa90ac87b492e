use super::transport::{Method, RequestBody};
use crate::services::archive::{pack, FileEntry};
use crate::services::events::ClientEvent;
use crate::services::tree::NodeType;
use crate::test_utils::{fake_client, FakeTransport};
use crate::types::errors::AppError;

fn sample_blob() -> crate::services::archive::ArchiveBlob {
    pack(&[
        FileEntry::new("demo/src/main.py", "print('hi')"),
        FileEntry::new("demo/README.md", "# demo"),
    ])
    .unwrap()
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let (client, _) = fake_client(FakeTransport::new());
    assert_eq!(client.base_url(), "http://backend.test");
}

#[tokio::test]
async fn test_upload_sends_single_multipart_request() {
    let transport =
        FakeTransport::new().respond(200, r#"{"status":"success","project_name":"demo"}"#);
    let (client, _) = fake_client(transport);
    let blob = sample_blob();

    let receipt = client.upload(&blob).await.unwrap();
    assert_eq!(receipt.project_name, "demo");
    assert_eq!(receipt.project_id.as_deref(), Some("demo"));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://backend.test/api/projects");
    match &requests[0].body {
        RequestBody::Multipart {
            field,
            file_name,
            mime,
            bytes,
        } => {
            assert_eq!(field, "file");
            assert_eq!(file_name, "demo.zip");
            assert_eq!(mime, "application/zip");
            assert_eq!(bytes, &blob.bytes);
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_prefers_project_id_over_other_identifiers() {
    let transport = FakeTransport::new().respond(
        200,
        r#"{"status":"success","project_id":42,"id":"x","project_name":"demo"}"#,
    );
    let (client, _) = fake_client(transport);

    let receipt = client.upload(&sample_blob()).await.unwrap();
    assert_eq!(receipt.project_id.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_upload_http_error_uses_status_text() {
    let transport = FakeTransport::new().respond(500, r#"{"detail":"boom"}"#);
    let (client, sink) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    match err {
        AppError::UploadFailed(msg) => assert_eq!(msg, "Internal Server Error"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, ClientEvent::UploadRejected { project, .. } if project == "demo")));
}

#[tokio::test]
async fn test_upload_unknown_status_code_falls_back_to_number() {
    let transport = FakeTransport::new().respond(599, "");
    let (client, _) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed: 599");
}

#[tokio::test]
async fn test_upload_backend_error_message_is_surfaced() {
    let transport =
        FakeTransport::new().respond(200, r#"{"status":"error","error":"bad archive"}"#);
    let (client, _) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed: bad archive");
}

#[tokio::test]
async fn test_upload_non_success_without_error_uses_default_message() {
    let transport = FakeTransport::new().respond(200, r#"{"status":"pending"}"#);
    let (client, _) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed: Upload failed");
}

#[tokio::test]
async fn test_upload_success_with_unparseable_body_keeps_parse_error() {
    let transport = FakeTransport::new().respond(200, "<html>ok</html>");
    let (client, sink) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    match err {
        AppError::UploadFailed(msg) => {
            assert!(msg.starts_with("Invalid response body: "), "{msg}");
            assert_ne!(msg, "Upload failed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        sink.events().last(),
        Some(ClientEvent::UploadRejected { .. })
    ));
}

#[tokio::test]
async fn test_upload_transport_failure() {
    let transport = FakeTransport::new().fail("connection refused");
    let (client, sink) = fake_client(transport);

    let err = client.upload(&sample_blob()).await.unwrap_err();
    assert!(matches!(err, AppError::UploadFailed(ref m) if m == "connection refused"));
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, ClientEvent::TransportFailed { .. })));
}

#[tokio::test]
async fn test_list_projects_parses_summaries_and_emits_events() {
    let body = r#"[
        {"name":"alpha","status":"success","info":{"description":"A","technologies":["Python"]}},
        {"id":7,"name":"beta","status":"success"}
    ]"#;
    let (client, sink) = fake_client(FakeTransport::new().respond(200, body));

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].identifier(), "alpha");
    assert_eq!(projects[1].identifier(), "7");
    assert_eq!(
        projects[0].info.as_ref().unwrap().technologies,
        vec!["Python".to_string()]
    );

    assert_eq!(
        sink.events(),
        vec![
            ClientEvent::RequestSent {
                method: Method::Get,
                url: "http://backend.test/api/projects".into(),
            },
            ClientEvent::ResponseReceived {
                method: Method::Get,
                url: "http://backend.test/api/projects".into(),
                status: 200,
            },
        ]
    );
}

#[tokio::test]
async fn test_list_projects_failure_surfaces_detail() {
    let transport = FakeTransport::new().respond(500, r#"{"detail":"database offline"}"#);
    let (client, _) = fake_client(transport);

    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(ref m) if m == "database offline"));
}

#[tokio::test]
async fn test_list_projects_failure_without_detail_uses_status_text() {
    let transport = FakeTransport::new().respond(503, "<html>down</html>");
    let (client, _) = fake_client(transport);

    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(ref m) if m == "Service Unavailable"));
}

#[tokio::test]
async fn test_delete_project_encodes_id() {
    let transport = FakeTransport::new().respond(200, r#"{"status":"success"}"#);
    let (client, _) = fake_client(transport);

    client.delete_project("my project").await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(
        requests[0].url,
        "http://backend.test/api/projects/my%20project"
    );
}

#[tokio::test]
async fn test_delete_project_not_found_is_fetch_error() {
    let transport = FakeTransport::new().respond(404, r#"{"detail":"Project not found"}"#);
    let (client, _) = fake_client(transport);

    let err = client.delete_project("ghost").await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(ref m) if m == "Project not found"));
}

#[tokio::test]
async fn test_generate_docs_posts_to_encoded_name() {
    let body = r#"{"status":"success","documentation":{
        "project_name":"my app",
        "analysis":{"summary":"Small app","code_quality":{"total_lines":10}}
    }}"#;
    let (client, _) = fake_client(FakeTransport::new().respond(200, body));

    let docs = client.generate_docs("my app").await.unwrap();
    assert_eq!(docs.project_name.as_deref(), Some("my app"));
    assert_eq!(docs.analysis.summary.as_deref(), Some("Small app"));
    assert_eq!(docs.analysis.code_quality.total_lines, 10);

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].url,
        "http://backend.test/api/generate-docs/my%20app"
    );
}

#[tokio::test]
async fn test_generate_docs_rejects_blank_name_without_request() {
    let (client, _) = fake_client(FakeTransport::new());

    let err = client.generate_docs("  ").await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_documentation_for_reuses_embedded_docs() {
    let summary: super::ProjectSummary = serde_json::from_str(
        r#"{"name":"alpha","status":"success","info":{"documentation":{"overview":"cached"}}}"#,
    )
    .unwrap();
    let (client, sink) = fake_client(FakeTransport::new());

    let docs = client.documentation_for(&summary).await.unwrap();
    assert_eq!(docs.overview.as_deref(), Some("cached"));
    assert!(client.transport().requests().is_empty());
    assert_eq!(
        sink.events(),
        vec![ClientEvent::DocumentationReused {
            project: "alpha".into()
        }]
    );
}

#[tokio::test]
async fn test_project_structure_returns_tree() {
    let body = r#"{"project":{"name":"alpha","structure":{
        "name":"alpha","type":"directory","children":[{"name":"main.py","type":"file"}]
    }}}"#;
    let (client, _) = fake_client(FakeTransport::new().respond(200, body));

    let tree = client.project_structure("alpha").await.unwrap();
    assert_eq!(tree.node_type, NodeType::Directory);
    assert_eq!(tree.children().len(), 1);
    assert_eq!(
        client.transport().requests()[0].url,
        "http://backend.test/api/projects/alpha"
    );
}

#[tokio::test]
async fn test_project_structure_missing_is_fetch_error() {
    let (client, _) = fake_client(FakeTransport::new().respond(200, r#"{"project":{}}"#));

    let err = client.project_structure("alpha").await.unwrap_err();
    assert_eq!(err.to_string(), "Fetch failed: Project structure is missing");
}

