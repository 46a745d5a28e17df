const SYSTEM_INSTRUCTION: &str = include_str!("assets/system_instruction.md");
const STRUCTURE_PROMPT_TEMPLATE: &str = include_str!("assets/structure.prompt.md");
const WEB_FILE_PROMPT_TEMPLATE: &str = include_str!("assets/web_file.prompt.md");
const GENERIC_FILE_PROMPT_TEMPLATE: &str = include_str!("assets/generic_file.prompt.md");
const UPDATE_FILE_PROMPT_TEMPLATE: &str = include_str!("assets/update_file.prompt.md");

pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION
}

pub fn render_structure_prompt(project_type: &str, description: &str) -> String {
    STRUCTURE_PROMPT_TEMPLATE
        .replace("{{project_type}}", project_type)
        .replace("{{description}}", description)
}

pub fn render_web_file_prompt(file_path: &str, project_type: &str, description: &str) -> String {
    WEB_FILE_PROMPT_TEMPLATE
        .replace("{{file_path}}", file_path)
        .replace("{{project_type}}", project_type)
        .replace("{{description}}", description)
}

pub fn render_generic_file_prompt(
    file_path: &str,
    project_type: &str,
    description: &str,
) -> String {
    GENERIC_FILE_PROMPT_TEMPLATE
        .replace("{{file_path}}", file_path)
        .replace("{{project_type}}", project_type)
        .replace("{{description}}", description)
}

pub fn render_update_file_prompt(file_path: &str, project_type: &str, update_issue: &str) -> String {
    UPDATE_FILE_PROMPT_TEMPLATE
        .replace("{{file_path}}", file_path)
        .replace("{{project_type}}", project_type)
        .replace("{{update_issue}}", update_issue)
}
