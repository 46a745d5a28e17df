use filesmith::orchestration::context::{
    extract_project_name, extract_project_type, extract_update_file,
};
use filesmith::orchestration::{classify_request, ProjectContext, RequestKind};

#[test]
fn update_signal_words_classify_as_update() {
    assert_eq!(
        classify_request("Please fix the button color in my todo app"),
        RequestKind::Update
    );
    assert_eq!(
        classify_request("UPDATE the landing page copy"),
        RequestKind::Update
    );
}

#[test]
fn run_signal_words_classify_as_execution_query() {
    assert_eq!(
        classify_request("How do I run the calculator project?"),
        RequestKind::ExecutionQuery
    );
    assert_eq!(
        classify_request("execute my notes app"),
        RequestKind::ExecutionQuery
    );
}

#[test]
fn everything_else_is_a_new_project() {
    assert_eq!(
        classify_request("Build me a personal portfolio website"),
        RequestKind::NewProject
    );
}

#[test]
fn update_wins_when_both_signal_families_appear() {
    assert_eq!(
        classify_request("fix the app so it can run"),
        RequestKind::Update
    );
}

#[test]
fn classification_records_the_update_issue() {
    let mut context = ProjectContext::default();
    context.apply_classification("fix the broken header");
    assert!(context.is_update_request);
    assert!(!context.is_execution_request);
    assert_eq!(context.update_issue.as_deref(), Some("fix the broken header"));
}

#[test]
fn project_type_is_extracted_from_analysis_prose() {
    assert_eq!(
        extract_project_type("This request is identified as a web application."),
        Some("web application".to_string())
    );
    assert_eq!(
        extract_project_type("identified as an API service. Moving on."),
        Some("API service".to_string())
    );
    assert_eq!(extract_project_type("no such phrasing here"), None);
}

#[test]
fn project_name_prefers_the_naming_phrase() {
    assert_eq!(
        extract_project_name("I'll name it 'portfolio-site'. Found project 'other'."),
        Some("portfolio-site".to_string())
    );
    assert_eq!(
        extract_project_name("Found project 'todo-app' in 'root' with a style.css."),
        Some("todo-app".to_string())
    );
    assert_eq!(extract_project_name("nameless reply"), None);
}

#[test]
fn update_file_is_extracted_as_project_relative_path() {
    assert_eq!(
        extract_update_file("Found project 'todo-app' in 'root' with a style.css."),
        Some("todo-app/style.css".to_string())
    );
    assert_eq!(extract_update_file("Found project 'x' but no file"), None);
}

#[test]
fn no_match_leaves_prior_values_untouched() {
    let mut context = ProjectContext {
        project_type: Some("web application".to_string()),
        ..ProjectContext::default()
    };
    if let Some(extracted) = extract_project_type("unrelated content") {
        context.project_type = Some(extracted);
    }
    assert_eq!(context.project_type.as_deref(), Some("web application"));
}

#[test]
fn reset_returns_the_context_to_defaults() {
    let mut context = ProjectContext {
        project_type: Some("web".to_string()),
        project_name: Some("site".to_string()),
        proposed_structure: vec!["index.html".to_string()],
        is_update_request: true,
        is_execution_request: false,
        update_issue: Some("broken".to_string()),
        update_file: Some("site/style.css".to_string()),
    };
    context.reset();
    assert_eq!(context, ProjectContext::default());
}
