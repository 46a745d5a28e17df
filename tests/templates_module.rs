use filesmith::templates::{
    is_execution_instructions_file, render_execution_instructions, EXECUTION_INSTRUCTIONS_FILE,
};

#[test]
fn markdown_files_are_recognized_by_extension() {
    assert!(is_execution_instructions_file("todo-app/EXECUTION.md"));
    assert!(is_execution_instructions_file("notes/readme.MD"));
    assert!(!is_execution_instructions_file("todo-app/index.html"));
    assert!(!is_execution_instructions_file("Makefile"));
}

#[test]
fn web_projects_get_browser_guidance() {
    let rendered = render_execution_instructions("todo-app", "web application");
    assert!(rendered.starts_with("# Running todo-app"));
    assert!(rendered.contains("index.html"));
}

#[test]
fn python_projects_get_interpreter_guidance() {
    let rendered = render_execution_instructions("scraper", "python script");
    assert!(rendered.contains("python main.py"));
}

#[test]
fn unknown_types_fall_back_to_generic_guidance() {
    let rendered = render_execution_instructions("", "");
    assert!(rendered.contains("# Running this project"));
    assert!(rendered.contains("entry point"));
}

#[test]
fn instructions_file_name_is_markdown() {
    assert!(is_execution_instructions_file(EXECUTION_INSTRUCTIONS_FILE));
}
