use filesmith::backend::{BackendError, ChatTurn, GenerativeBackend};
use filesmith::orchestration::{FileContentRequest, ToolCall, ToolRegistry};
use serde_json::json;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use tempfile::tempdir;

struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<String, String>>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: RefCell::new(
                replies
                    .into_iter()
                    .map(|reply| reply.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
        }
    }
}

impl GenerativeBackend for ScriptedBackend {
    fn generate(
        &self,
        _system_instruction: Option<&str>,
        _turns: &[ChatTurn],
    ) -> Result<String, BackendError> {
        match self.replies.borrow_mut().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(reason)) => Err(BackendError::Transport(reason)),
            None => Err(BackendError::EmptyReply),
        }
    }
}

#[test]
fn the_tool_catalog_is_closed() {
    assert_eq!(
        ToolRegistry::tool_ids(),
        [
            "read_directory",
            "create_dynamic_file",
            "generate_project_structure",
            "generate_file_content",
        ]
    );
}

#[test]
fn tool_call_shapes_are_reshaped_per_tool() {
    let single = ToolCall::from_parts(
        "create_dynamic_file",
        Some(&json!({"fileName": "a.txt", "content": "a"})),
    )
    .expect("single file spec");
    assert!(matches!(single, ToolCall::CreateDynamicFile { ref files } if files.len() == 1));

    let many = ToolCall::from_parts(
        "create_dynamic_file",
        Some(&json!([
            {"fileName": "a.txt", "content": "a"},
            {"fileName": "b.txt", "content": "b"}
        ])),
    )
    .expect("file spec list");
    assert!(matches!(many, ToolCall::CreateDynamicFile { ref files } if files.len() == 2));

    let listing = ToolCall::from_parts("read_directory", Some(&json!({"path": "app"})))
        .expect("object path");
    assert!(matches!(listing, ToolCall::ReadDirectory { ref path } if path == "app"));

    let listing = ToolCall::from_parts("read_directory", Some(&json!("app"))).expect("bare path");
    assert!(matches!(listing, ToolCall::ReadDirectory { ref path } if path == "app"));
}

#[test]
fn shape_mismatches_surface_as_typed_errors() {
    let err = ToolCall::from_parts("summon_demon", None).expect_err("unknown tool");
    assert!(err.to_string().contains("unknown tool"));

    let err = ToolCall::from_parts("create_dynamic_file", Some(&json!({"fileName": "a.txt"})))
        .expect_err("missing content");
    assert!(err.to_string().contains("missing required argument"));

    let err = ToolCall::from_parts(
        "generate_file_content",
        Some(&json!({"filePath": "a.txt", "projectType": "web", "description": "d", "isUpdate": "yes"})),
    )
    .expect_err("boolean expected");
    assert!(err.to_string().contains("invalid argument type"));
}

#[test]
fn create_dynamic_file_materializes_in_declaration_order() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("projects");
    let backend = ScriptedBackend::new(Vec::new());
    let registry = ToolRegistry::new(&root, &backend);

    let call = ToolCall::from_parts(
        "create_dynamic_file",
        Some(&json!([
            {"fileName": "app/index.html", "content": "<html></html>"},
            {"fileName": "app/css/style.css", "content": "body {}"}
        ])),
    )
    .expect("call");
    let result = registry.dispatch(&call);

    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("created"));
    assert!(lines[0].ends_with("app/index.html"));
    assert!(lines[1].starts_with("created"));
    assert!(lines[1].ends_with("app/css/style.css"));
    assert_eq!(
        fs::read_to_string(root.join("app/index.html")).expect("read"),
        "<html></html>"
    );
}

#[test]
fn read_directory_dispatch_returns_listing_json() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("projects");
    fs::create_dir_all(root.join("app")).expect("dirs");
    fs::write(root.join("app/a.txt"), "a").expect("file");
    let backend = ScriptedBackend::new(Vec::new());
    let registry = ToolRegistry::new(&root, &backend);

    let call = ToolCall::from_parts("read_directory", Some(&json!({"path": "app"})))
        .expect("call");
    let result = registry.dispatch(&call);
    let listing: serde_json::Value = serde_json::from_str(&result).expect("json");
    assert_eq!(listing["items"][0]["name"], "a.txt");
    assert_eq!(listing["items"][0]["isDirectory"], false);
}

#[test]
fn structure_generation_validates_the_backend_payload() {
    let dir = tempdir().expect("tempdir");
    let backend = ScriptedBackend::new(vec![Ok(
        "```json\n{\"structure\": [\"index.html\", \"style.css\"]}\n```",
    )]);
    let registry = ToolRegistry::new(dir.path(), &backend);

    let result = registry.generate_structure("web", "a page");
    let value: serde_json::Value = serde_json::from_str(&result).expect("json");
    assert_eq!(value["structure"][0], "index.html");
}

#[test]
fn structure_generation_falls_back_to_an_empty_object() {
    let dir = tempdir().expect("tempdir");

    let transport_failure = ScriptedBackend::new(vec![Err("boom")]);
    let registry = ToolRegistry::new(dir.path(), &transport_failure);
    assert_eq!(registry.generate_structure("web", "a page"), "{}");

    let not_json = ScriptedBackend::new(vec![Ok("sorry, no")]);
    let registry = ToolRegistry::new(dir.path(), &not_json);
    assert_eq!(registry.generate_structure("web", "a page"), "{}");

    let wrong_shape = ScriptedBackend::new(vec![Ok("{\"files\": []}")]);
    let registry = ToolRegistry::new(dir.path(), &wrong_shape);
    assert_eq!(registry.generate_structure("web", "a page"), "{}");
}

#[test]
fn file_content_failure_yields_a_placeholder_comment() {
    let dir = tempdir().expect("tempdir");
    let backend = ScriptedBackend::new(vec![Err("offline")]);
    let registry = ToolRegistry::new(dir.path(), &backend);

    let content = registry.generate_file_content(&FileContentRequest {
        file_path: "app/style.css".to_string(),
        project_type: "web".to_string(),
        description: "a page".to_string(),
        is_update: false,
        update_issue: None,
    });
    assert!(content.starts_with("/*"));
    assert!(content.contains("app/style.css"));
}

#[test]
fn markdown_files_use_the_static_execution_template() {
    let dir = tempdir().expect("tempdir");
    // No scripted replies: a backend call would fail the test.
    let backend = ScriptedBackend::new(Vec::new());
    let registry = ToolRegistry::new(dir.path(), &backend);

    let content = registry.generate_file_content(&FileContentRequest {
        file_path: "todo-app/EXECUTION.md".to_string(),
        project_type: "web application".to_string(),
        description: "a todo app".to_string(),
        is_update: false,
        update_issue: None,
    });
    assert!(content.contains("# Running todo-app"));
    assert!(content.contains("## How to run"));
}
