//! Request/response contract of every client operation, checked against a
//! recording stub transport.

mod common;

use common::{body_json, client, client_with, CountingTokens, FailingTokens, StubTransport, BASE_URL};
use futures::future::join_all;
use modeler_client::types::*;
use modeler_client::{Error, HttpResponse, Method, ModelerClient};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

type Outcome = modeler_client::Result<Option<Value>>;

fn to_value<T: Serialize>(r: modeler_client::Result<Option<T>>) -> Outcome {
    r.map(|o| o.map(|v| serde_json::to_value(v).unwrap()))
}

/// Calls every operation once, in a fixed order.
async fn every_operation(client: &ModelerClient) -> Vec<(&'static str, Outcome)> {
    let collaborator = CreateCollaboratorDto::new("p-1", "ana@example.com", CollaboratorRole::Editor);
    let new_file = CreateFileDto::new("order.bpmn", FileType::Bpmn, "<definitions/>").in_project("p-1");
    let file_update = UpdateFileDto::new(3).rename("order-v2.bpmn");
    let new_folder = CreateFolderDto::new("Billing").in_project("p-1");
    let folder_update = UpdateFolderDto::default().rename("Invoicing");
    let milestone = CreateMilestoneDto::new("v1.0", "fi-1");

    vec![
        ("add_collaborator", client.add_collaborator(&collaborator).await),
        (
            "search_collaborators",
            to_value(client.search_collaborators(&CollaboratorSearch::default()).await),
        ),
        (
            "delete_collaborator",
            client.delete_collaborator("p-1", "ana@example.com").await.map(|_| None),
        ),
        ("create_file", to_value(client.create_file(&new_file).await)),
        ("get_file", to_value(client.get_file("fi-1").await)),
        ("delete_file", client.delete_file("fi-1").await.map(|_| None)),
        ("update_file", to_value(client.update_file("fi-1", &file_update).await)),
        ("search_files", to_value(client.search_files(&FileSearch::default()).await)),
        ("create_folder", to_value(client.create_folder(&new_folder).await)),
        ("get_folder", to_value(client.get_folder("fo-1").await)),
        ("delete_folder", client.delete_folder("fo-1").await.map(|_| None)),
        ("update_folder", to_value(client.update_folder("fo-1", &folder_update).await)),
        ("get_info", to_value(client.get_info().await)),
        ("create_milestone", to_value(client.create_milestone(&milestone).await)),
        ("get_milestone", to_value(client.get_milestone("m-1").await)),
        ("delete_milestone", client.delete_milestone("m-1").await.map(|_| None)),
        (
            "get_milestone_comparison",
            client
                .get_milestone_comparison("m-1", "m-2")
                .await
                .map(|text| Some(Value::String(text))),
        ),
        (
            "search_milestones",
            to_value(client.search_milestones(&MilestoneSearch::default()).await),
        ),
        ("create_project", to_value(client.create_project("Invoices").await)),
        ("get_project", to_value(client.get_project("p-1").await)),
        ("delete_project", client.delete_project("p-1").await.map(|_| None)),
        ("rename_project", to_value(client.rename_project("p-1", "Receipts").await)),
        ("search_projects", to_value(client.search_projects(&ProjectSearch::default()).await)),
    ]
}

#[tokio::test]
async fn every_operation_uses_its_documented_verb_and_path() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    let client = client(transport.clone());
    every_operation(&client).await;

    let expected = [
        (Method::Put, "/collaborators"),
        (Method::Post, "/collaborators/search"),
        (Method::Delete, "/project/p-1collaborators/ana@example.com"),
        (Method::Post, "/files"),
        (Method::Get, "/files/fi-1"),
        (Method::Delete, "/files/fi-1"),
        (Method::Patch, "/files/fi-1"),
        (Method::Post, "/files/search"),
        (Method::Post, "/folders"),
        (Method::Get, "/folders/fo-1"),
        (Method::Delete, "/folders/fo-1"),
        (Method::Patch, "/folders/fo-1"),
        (Method::Get, "/info"),
        (Method::Post, "/milestones"),
        (Method::Get, "/milestones/m-1"),
        (Method::Delete, "/milestones/m-1"),
        (Method::Get, "/milestones/compare/m-1...m-2"),
        (Method::Post, "/milestones/search"),
        (Method::Post, "/projects"),
        (Method::Get, "/projects/p-1"),
        (Method::Delete, "/projects/p-1"),
        (Method::Patch, "/projects/p-1"),
        (Method::Post, "/projects/search"),
    ];

    let calls = transport.calls();
    assert_eq!(calls.len(), expected.len());
    for (call, (method, path)) in calls.iter().zip(expected) {
        assert_eq!(call.method, method, "verb for {}", path);
        assert_eq!(call.url, format!("{}{}", BASE_URL, path));
        let wants_body = matches!(method, Method::Put | Method::Post | Method::Patch);
        assert_eq!(call.body.is_some(), wants_body, "body presence for {} {}", method, path);
    }
}

const COMPARE_LINK: &str = "https://modeler.test/diagrams/compare/m-1...m-2";

fn user(name: &str, email: &str) -> Value {
    json!({"id": format!("u-{}", name.to_lowercase()), "name": name, "email": email})
}

fn project_metadata() -> Value {
    json!({
        "id": "p-1",
        "name": "Invoices",
        "created": "2023-09-20T11:31:20.206801604Z",
        "createdBy": user("Ana", "ana@example.com"),
        "updated": "2023-09-21T08:00:00Z",
        "updatedBy": {"name": "Bo", "email": "bo@example.com", "avatar": "bo.png"},
        "organizationId": "org-7"
    })
}

fn file_metadata() -> Value {
    json!({
        "id": "fi-1",
        "name": "order.bpmn",
        "projectId": "p-1",
        "folderId": "fo-1",
        "simplePath": "Invoices/In\\/Out/order.bpmn",
        "canonicalPath": [
            {"id": "p-1", "name": "Invoices", "type": "PROJECT", "href": "/projects/p-1"},
            {"id": "fo-1", "name": "In/Out", "type": "FOLDER"}
        ],
        "revision": 3,
        "type": "bpmn",
        "created": "2023-09-20T11:31:20Z",
        "createdBy": user("Ana", "ana@example.com"),
        "processId": "order-process"
    })
}

fn folder_metadata() -> Value {
    json!({
        "id": "fo-1",
        "name": "In/Out",
        "projectId": "p-1",
        "canonicalPath": [{"id": "p-1", "name": "Invoices", "type": "PROJECT"}],
        "createdBy": user("Ana", "ana@example.com")
    })
}

fn milestone_metadata() -> Value {
    json!({
        "id": "m-1",
        "name": "v1.0",
        "fileId": "fi-1",
        "created": "2023-09-22T10:00:00Z",
        "createdBy": user("Ana", "ana@example.com"),
        "organizationId": "org-7"
    })
}

fn page_of(item: Value) -> Value {
    json!({"items": [item], "total": 1, "hasMore": false})
}

/// A 200 body for every JSON operation, with fields the client does not model
/// at each level.
fn canned_body(method: Method, path: &str) -> Value {
    match (method, path) {
        (Method::Delete, _) => json!({}),
        (Method::Put, "/collaborators") => {
            json!({"email": "ana@example.com", "role": "editor", "status": "invited"})
        }
        (Method::Post, "/collaborators/search") => page_of(json!({
            "email": "ana@example.com",
            "name": "Ana",
            "role": "project_admin",
            "projectId": "p-1",
            "invitedAt": "2023-09-20T11:31:20Z"
        })),
        (Method::Post, "/files") | (Method::Patch, "/files/fi-1") => file_metadata(),
        (Method::Get, "/files/fi-1") => json!({
            "metadata": file_metadata(),
            "content": "<definitions id=\"order\"/>",
            "links": {"self": "/files/fi-1"}
        }),
        (Method::Post, "/files/search") => page_of(file_metadata()),
        (Method::Post, "/folders") | (Method::Patch, "/folders/fo-1") => folder_metadata(),
        (Method::Get, "/folders/fo-1") => json!({
            "metadata": folder_metadata(),
            "content": {"files": [file_metadata()], "folders": [], "shares": 0},
            "permissions": ["read", "write"]
        }),
        (Method::Get, "/info") => json!({
            "version": "v1",
            "authorizedOrganization": "org-7",
            "createPermission": true,
            "readPermission": true,
            "updatePermission": false,
            "deletePermission": false,
            "clusterRegion": "eu-1"
        }),
        (Method::Post, "/milestones") => milestone_metadata(),
        (Method::Get, "/milestones/m-1") => json!({
            "metadata": milestone_metadata(),
            "content": "<definitions id=\"order\"/>",
            "compareUrl": COMPARE_LINK
        }),
        (Method::Post, "/milestones/search") => page_of(milestone_metadata()),
        (Method::Post, "/projects") | (Method::Patch, "/projects/p-1") => project_metadata(),
        (Method::Get, "/projects/p-1") => json!({
            "metadata": project_metadata(),
            "content": {
                "files": [file_metadata()],
                "folders": [folder_metadata()],
                "shares": 2
            },
            "permissions": ["read"]
        }),
        (Method::Post, "/projects/search") => page_of(project_metadata()),
        (method, path) => panic!("no canned body for {} {}", method, path),
    }
}

#[tokio::test]
async fn every_operation_returns_the_server_json_unchanged() {
    let transport = Arc::new(StubTransport::new(|req| {
        let path = req.url.strip_prefix(BASE_URL).expect("request under base url");
        if path.starts_with("/milestones/compare/") {
            return HttpResponse::new(200, "OK", COMPARE_LINK);
        }
        HttpResponse::new(200, "OK", canned_body(req.method, path).to_string())
    }));
    let client = client(transport.clone());
    let results = every_operation(&client).await;

    let calls = transport.calls();
    assert_eq!(results.len(), calls.len());
    for ((name, outcome), call) in results.into_iter().zip(calls) {
        let path = call.url.strip_prefix(BASE_URL).unwrap();
        let got = outcome.unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        let expected = match call.method {
            Method::Delete => None,
            _ if name == "get_milestone_comparison" => Some(Value::String(COMPARE_LINK.into())),
            method => Some(canned_body(method, path)),
        };
        assert_eq!(got, expected, "{}", name);
    }
}

#[tokio::test]
async fn every_request_carries_the_standard_headers() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    let client = client(transport.clone());
    every_operation(&client).await;

    for call in transport.calls() {
        assert_eq!(call.header("content-type"), Some("application/json"));
        assert_eq!(call.header("authorization"), Some("Bearer t0k3n"));
        assert_eq!(call.header("accept"), Some("*/*"));
        assert_eq!(call.header("user-agent"), Some(client.user_agent()));
    }
    assert!(client.user_agent().starts_with("modeler-client/"));
    assert!(client.user_agent().ends_with(" it-tests"));
}

#[tokio::test]
async fn bearer_token_is_the_one_issued_for_that_call() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    let tokens = Arc::new(CountingTokens::default());
    let client = client_with(transport.clone(), tokens.clone());

    client.get_info().await.unwrap();
    client.delete_file("fi-1").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].header("authorization"), Some("Bearer token-1"));
    assert_eq!(calls[1].header("authorization"), Some("Bearer token-2"));

    let ids = tokens.client_ids.lock().unwrap().clone();
    assert_eq!(ids, vec![client.user_agent().to_string(); 2]);
}

#[tokio::test]
async fn no_content_yields_none_for_every_json_operation() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    let client = client(transport);

    for (name, outcome) in every_operation(&client).await {
        let value = outcome.unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        if name == "get_milestone_comparison" {
            assert_eq!(value, Some(Value::String(String::new())));
        } else {
            assert!(value.is_none(), "{} should yield None on 204", name);
        }
    }
}

#[tokio::test]
async fn error_statuses_are_reported_with_code_and_status_text() {
    for (code, text) in [(400u16, "Bad Request"), (404, "Not Found"), (409, "Conflict"), (500, "Internal Server Error")] {
        let transport = Arc::new(StubTransport::fixed(code, text, r#"{"detail":"nope"}"#));
        let client = client(transport);

        for (name, outcome) in every_operation(&client).await {
            if name == "get_milestone_comparison" {
                assert_eq!(outcome.unwrap(), Some(Value::String(r#"{"detail":"nope"}"#.into())));
                continue;
            }
            match outcome {
                Err(Error::Http { code: c, message }) => {
                    assert_eq!(c, code, "{}", name);
                    assert_eq!(message, text, "{}", name);
                }
                other => panic!("{}: expected HTTP {} error, got {:?}", name, code, other),
            }
        }
    }
}

#[tokio::test]
async fn credential_failure_stops_every_operation_before_the_transport() {
    let transport = Arc::new(StubTransport::fixed(200, "OK", "{}"));
    let client = client_with(transport.clone(), Arc::new(FailingTokens));

    for (name, outcome) in every_operation(&client).await {
        match outcome {
            Err(err @ Error::Credential(_)) => {
                assert_eq!(err.to_string(), "token endpoint unreachable", "{}", name)
            }
            other => panic!("{}: expected credential error, got {:?}", name, other),
        }
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn create_project_sends_name_and_returns_metadata() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        "OK",
        r#"{"id":"p-1","name":"X","created":"2023-09-20T11:31:20Z","createdBy":{"id":"u-1","name":"Ana"}}"#,
    ));
    let client = client(transport.clone());

    let project = client.create_project("X").await.unwrap().unwrap();
    assert_eq!(project.id, "p-1");
    assert_eq!(project.name, "X");
    assert_eq!(project.created_by.unwrap().name.as_deref(), Some("Ana"));

    let call = transport.last();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.url, format!("{}/projects", BASE_URL));
    assert_eq!(body_json(&call), json!({"name": "X"}));
}

#[tokio::test]
async fn rename_project_patches_the_name() {
    let transport = Arc::new(StubTransport::fixed(200, "OK", r#"{"id":"p-1","name":"Receipts"}"#));
    let client = client(transport.clone());

    let project = client.rename_project("p-1", "Receipts").await.unwrap().unwrap();
    assert_eq!(project.name, "Receipts");
    assert_eq!(body_json(&transport.last()), json!({"name": "Receipts"}));
}

#[tokio::test]
async fn delete_folder_no_content_and_conflict() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    client(transport.clone()).delete_folder("fo-1").await.unwrap();
    let call = transport.last();
    assert_eq!(call.method, Method::Delete);
    assert_eq!(call.url, format!("{}/folders/fo-1", BASE_URL));

    let transport = Arc::new(StubTransport::fixed(409, "Conflict", ""));
    let err = client(transport).delete_folder("fo-1").await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert!(err.is_conflict());
}

#[tokio::test]
async fn delete_accepts_a_json_body_on_200() {
    let transport = Arc::new(StubTransport::fixed(200, "OK", "{}"));
    client(transport).delete_project("p-1").await.unwrap();
}

#[tokio::test]
async fn search_files_sends_the_exact_envelope() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        "OK",
        r#"{"items":[{"id":"fi-1","name":"a.bpmn","revision":2,"type":"bpmn"}],"total":1}"#,
    ));
    let client = client(transport.clone());

    let result = client.search_files(&FileSearch::default()).await.unwrap().unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].file_type, Some(FileType::Bpmn));

    let call = transport.last();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.url, format!("{}/files/search", BASE_URL));
    assert_eq!(
        body_json(&call),
        json!({"filter": {}, "sort": [], "page": 0, "size": 10})
    );
}

#[tokio::test]
async fn search_projects_passes_filter_sort_and_paging_through() {
    let transport = Arc::new(StubTransport::fixed(200, "OK", r#"{"items":[],"total":0}"#));
    let client = client(transport.clone());

    let search = ProjectSearch::new(ProjectFilter {
        name: Some("Invoices".into()),
        updated: Some(date_within("2023-09-20T11:31:20.206801604Z", DateRounding::Week)),
        ..Default::default()
    })
    .sort_by("name", SortDirection::Asc)
    .page(3)
    .size(20);
    client.search_projects(&search).await.unwrap();

    assert_eq!(
        body_json(&transport.last()),
        json!({
            "filter": {"name": "Invoices", "updated": "2023-09-20T11:31:20.206801604Z||/w"},
            "sort": [{"field": "name", "direction": "ASC"}],
            "page": 3,
            "size": 20
        })
    );
}

#[tokio::test]
async fn update_file_sends_revision() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        "OK",
        r#"{"id":"fi-1","name":"order.bpmn","revision":5}"#,
    ));
    let client = client(transport.clone());

    let update = UpdateFileDto::new(4)
        .with_content("<definitions id=\"v2\"/>")
        .move_to_folder("fo-2");
    let meta = client.update_file("fi-1", &update).await.unwrap().unwrap();
    assert_eq!(meta.revision, Some(5));
    assert_eq!(
        body_json(&transport.last()),
        json!({"folderId": "fo-2", "content": "<definitions id=\"v2\"/>", "revision": 4})
    );
}

#[tokio::test]
async fn stale_revision_surfaces_as_conflict() {
    let transport = Arc::new(StubTransport::fixed(409, "Conflict", ""));
    let err = client(transport)
        .update_file("fi-1", &UpdateFileDto::new(1))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn get_file_decodes_metadata_and_content() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        "OK",
        r#"{"metadata":{"id":"fi-1","name":"form.form","type":"form","revision":1,"simplePath":"Billing/form.form"},"content":"{\"components\":[]}"}"#,
    ));
    let file = client(transport).get_file("fi-1").await.unwrap().unwrap();
    assert_eq!(file.metadata.file_type, Some(FileType::Form));
    assert_eq!(file.metadata.simple_path.as_deref(), Some("Billing/form.form"));
    assert_eq!(file.content, json!("{\"components\":[]}"));
}

#[tokio::test]
async fn add_collaborator_upserts_with_put() {
    let transport = Arc::new(StubTransport::fixed(204, "No Content", ""));
    let client = client(transport.clone());
    let req = CreateCollaboratorDto::new("p-1", "ana@example.com", CollaboratorRole::ProjectAdmin);

    assert!(client.add_collaborator(&req).await.unwrap().is_none());
    let call = transport.last();
    assert_eq!(call.method, Method::Put);
    assert_eq!(
        body_json(&call),
        json!({"email": "ana@example.com", "projectId": "p-1", "role": "project_admin"})
    );
}

#[tokio::test]
async fn milestone_comparison_returns_raw_text_whatever_the_status() {
    let link = "https://modeler.test/diagrams/fi-1/milestones/m-1...m-2";
    let transport = Arc::new(StubTransport::fixed(200, "OK", link));
    assert_eq!(
        client(transport).get_milestone_comparison("m-1", "m-2").await.unwrap(),
        link
    );

    let transport = Arc::new(StubTransport::fixed(404, "Not Found", "no such milestone"));
    assert_eq!(
        client(transport).get_milestone_comparison("m-1", "m-9").await.unwrap(),
        "no such milestone"
    );
}

#[tokio::test]
async fn invalid_json_on_200_is_a_serialization_error() {
    let transport = Arc::new(StubTransport::fixed(200, "OK", "<html>maintenance</html>"));
    let err = client(transport).get_info().await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn concurrent_calls_keep_their_own_responses() {
    let transport = Arc::new(StubTransport::new(|req| {
        let id = req.url.rsplit('/').next().unwrap_or_default().to_string();
        HttpResponse::new(200, "OK", json!({"metadata": {"id": id, "name": format!("project {}", id)}}).to_string())
    }));
    let tokens = Arc::new(CountingTokens::default());
    let client = client_with(transport.clone(), tokens);

    let ids: Vec<String> = (0..50).map(|i| format!("p-{}", i)).collect();
    let results = join_all(ids.iter().map(|id| {
        let client = client.clone();
        async move { client.get_project(id).await }
    }))
    .await;

    for (id, result) in ids.iter().zip(results) {
        let project = result.unwrap().unwrap();
        assert_eq!(&project.metadata.id, id);
        assert_eq!(project.metadata.name, format!("project {}", id));
    }

    let calls = transport.calls();
    assert_eq!(calls.len(), 50);
    let tokens: HashSet<_> = calls
        .iter()
        .filter_map(|c| c.header("authorization").map(str::to_string))
        .collect();
    assert_eq!(tokens.len(), 50);
    assert!(calls.iter().all(|c| c.url.starts_with(client.base_url())));
}
