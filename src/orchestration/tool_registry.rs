use crate::backend::{ChatRole, ChatTurn, GenerativeBackend};
use crate::orchestration::error::WorkflowError;
use crate::orchestration::step_reply::strip_code_fences;
use crate::prompts;
use crate::templates::{is_execution_instructions_file, render_execution_instructions};
use crate::workspace::{materialize_file, read_directory};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const READ_DIRECTORY: &str = "read_directory";
pub const CREATE_DYNAMIC_FILE: &str = "create_dynamic_file";
pub const GENERATE_PROJECT_STRUCTURE: &str = "generate_project_structure";
pub const GENERATE_FILE_CONTENT: &str = "generate_file_content";

const TOOL_IDS: &[&str] = &[
    READ_DIRECTORY,
    CREATE_DYNAMIC_FILE,
    GENERATE_PROJECT_STRUCTURE,
    GENERATE_FILE_CONTENT,
];

const WEB_FILE_EXTENSIONS: &[&str] = &[
    "html", "htm", "css", "js", "jsx", "ts", "tsx", "vue", "svelte",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSpec {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentRequest {
    pub file_path: String,
    pub project_type: String,
    pub description: String,
    pub is_update: bool,
    pub update_issue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    ReadDirectory {
        path: String,
    },
    CreateDynamicFile {
        files: Vec<FileSpec>,
    },
    GenerateProjectStructure {
        project_type: String,
        description: String,
    },
    GenerateFileContent(FileContentRequest),
}

fn missing_arg(tool_id: &str, arg: &str) -> WorkflowError {
    WorkflowError::MissingToolArg {
        tool_id: tool_id.to_string(),
        arg: arg.to_string(),
    }
}

fn invalid_arg(tool_id: &str, arg: &str, expected: &str) -> WorkflowError {
    WorkflowError::InvalidToolArgType {
        tool_id: tool_id.to_string(),
        arg: arg.to_string(),
        expected: expected.to_string(),
    }
}

fn require_str(
    tool_id: &str,
    args: &Map<String, Value>,
    key: &str,
) -> Result<String, WorkflowError> {
    match args.get(key) {
        None => Err(missing_arg(tool_id, key)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(invalid_arg(tool_id, key, "string")),
    }
}

fn optional_str(
    tool_id: &str,
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, WorkflowError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid_arg(tool_id, key, "string")),
    }
}

fn optional_bool(
    tool_id: &str,
    args: &Map<String, Value>,
    key: &str,
) -> Result<bool, WorkflowError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(invalid_arg(tool_id, key, "boolean")),
    }
}

fn file_spec_from_object(tool_id: &str, args: &Map<String, Value>) -> Result<FileSpec, WorkflowError> {
    Ok(FileSpec {
        file_name: require_str(tool_id, args, "fileName")?,
        content: require_str(tool_id, args, "content")?,
    })
}

impl ToolCall {
    pub fn from_parts(tool_id: &str, args: Option<&Value>) -> Result<Self, WorkflowError> {
        match tool_id {
            READ_DIRECTORY => {
                let path = match args {
                    Some(Value::String(path)) => path.clone(),
                    Some(Value::Object(map)) => require_str(tool_id, map, "path")?,
                    Some(_) => return Err(invalid_arg(tool_id, "path", "string or object")),
                    None => return Err(missing_arg(tool_id, "path")),
                };
                Ok(ToolCall::ReadDirectory { path })
            }
            CREATE_DYNAMIC_FILE => {
                let files = match args {
                    Some(Value::Object(map)) => vec![file_spec_from_object(tool_id, map)?],
                    Some(Value::Array(entries)) => {
                        let mut files = Vec::with_capacity(entries.len());
                        for entry in entries {
                            let map = entry.as_object().ok_or_else(|| {
                                invalid_arg(tool_id, "args", "array of file objects")
                            })?;
                            files.push(file_spec_from_object(tool_id, map)?);
                        }
                        files
                    }
                    Some(_) => {
                        return Err(invalid_arg(tool_id, "args", "object or array of objects"))
                    }
                    None => return Err(missing_arg(tool_id, "args")),
                };
                Ok(ToolCall::CreateDynamicFile { files })
            }
            GENERATE_PROJECT_STRUCTURE => {
                let map = args
                    .and_then(Value::as_object)
                    .ok_or_else(|| missing_arg(tool_id, "projectType"))?;
                Ok(ToolCall::GenerateProjectStructure {
                    project_type: require_str(tool_id, map, "projectType")?,
                    description: require_str(tool_id, map, "description")?,
                })
            }
            GENERATE_FILE_CONTENT => {
                let map = args
                    .and_then(Value::as_object)
                    .ok_or_else(|| missing_arg(tool_id, "filePath"))?;
                Ok(ToolCall::GenerateFileContent(FileContentRequest {
                    file_path: require_str(tool_id, map, "filePath")?,
                    project_type: require_str(tool_id, map, "projectType")?,
                    description: require_str(tool_id, map, "description")?,
                    is_update: optional_bool(tool_id, map, "isUpdate")?,
                    update_issue: optional_str(tool_id, map, "updateIssue")?,
                }))
            }
            other => Err(WorkflowError::UnknownTool {
                tool_id: other.to_string(),
            }),
        }
    }

    pub fn tool_id(&self) -> &'static str {
        match self {
            ToolCall::ReadDirectory { .. } => READ_DIRECTORY,
            ToolCall::CreateDynamicFile { .. } => CREATE_DYNAMIC_FILE,
            ToolCall::GenerateProjectStructure { .. } => GENERATE_PROJECT_STRUCTURE,
            ToolCall::GenerateFileContent(_) => GENERATE_FILE_CONTENT,
        }
    }
}

fn placeholder_comment(file_path: &str, reason: &str) -> String {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "html" | "htm" | "md" | "xml" | "svg" => {
            format!("<!-- content generation failed for {file_path}: {reason} -->")
        }
        "css" => format!("/* content generation failed for {file_path}: {reason} */"),
        "py" | "sh" | "yaml" | "yml" | "toml" => {
            format!("# content generation failed for {file_path}: {reason}")
        }
        _ => format!("// content generation failed for {file_path}: {reason}"),
    }
}

fn project_name_from_path(file_path: &str) -> &str {
    let normalized = file_path.trim_start_matches(['/', '.']);
    match normalized.split_once('/') {
        Some((first, _)) => first,
        None => "",
    }
}

fn is_web_file(file_path: &str) -> bool {
    Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let normalized = ext.to_ascii_lowercase();
            WEB_FILE_EXTENSIONS.contains(&normalized.as_str())
        })
        .unwrap_or(false)
}

pub struct ToolRegistry<'a> {
    project_root: PathBuf,
    backend: &'a dyn GenerativeBackend,
}

impl<'a> ToolRegistry<'a> {
    pub fn new(project_root: impl Into<PathBuf>, backend: &'a dyn GenerativeBackend) -> Self {
        Self {
            project_root: project_root.into(),
            backend,
        }
    }

    pub fn tool_ids() -> &'static [&'static str] {
        TOOL_IDS
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn dispatch(&self, call: &ToolCall) -> String {
        match call {
            ToolCall::ReadDirectory { path } => {
                let listing = read_directory(&self.project_root, path);
                serde_json::to_string(&listing)
                    .unwrap_or_else(|err| format!("failed to encode listing: {err}"))
            }
            ToolCall::CreateDynamicFile { files } => self.create_files(files),
            ToolCall::GenerateProjectStructure {
                project_type,
                description,
            } => self.generate_structure(project_type, description),
            ToolCall::GenerateFileContent(request) => self.generate_file_content(request),
        }
    }

    pub fn create_files(&self, files: &[FileSpec]) -> String {
        let mut outcomes = Vec::with_capacity(files.len());
        for spec in files {
            match materialize_file(&self.project_root, &spec.file_name, &spec.content) {
                Ok(result) => {
                    outcomes.push(format!("{} {}", result.outcome, result.path.display()))
                }
                Err(err) => outcomes.push(format!("failed to write {}: {err}", spec.file_name)),
            }
        }
        outcomes.join("\n")
    }

    pub fn generate_structure(&self, project_type: &str, description: &str) -> String {
        let prompt = prompts::render_structure_prompt(project_type, description);
        let reply = match self
            .backend
            .generate(None, &[ChatTurn::new(ChatRole::User, prompt)])
        {
            Ok(reply) => reply,
            Err(_) => return "{}".to_string(),
        };

        let stripped = strip_code_fences(&reply);
        let value: Value = match serde_json::from_str(&stripped) {
            Ok(value) => value,
            Err(_) => return "{}".to_string(),
        };
        let has_structure_list = value
            .get("structure")
            .map(Value::is_array)
            .unwrap_or(false);
        if !value.is_object() || !has_structure_list {
            return "{}".to_string();
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn generate_file_content(&self, request: &FileContentRequest) -> String {
        if is_execution_instructions_file(&request.file_path) {
            return render_execution_instructions(
                project_name_from_path(&request.file_path),
                &request.project_type,
            );
        }

        let prompt = if request.is_update {
            let issue = request
                .update_issue
                .as_deref()
                .unwrap_or(request.description.as_str());
            prompts::render_update_file_prompt(&request.file_path, &request.project_type, issue)
        } else if is_web_file(&request.file_path) {
            prompts::render_web_file_prompt(
                &request.file_path,
                &request.project_type,
                &request.description,
            )
        } else {
            prompts::render_generic_file_prompt(
                &request.file_path,
                &request.project_type,
                &request.description,
            )
        };

        match self
            .backend
            .generate(None, &[ChatTurn::new(ChatRole::User, prompt)])
        {
            Ok(content) => strip_code_fences(&content),
            Err(err) => placeholder_comment(&request.file_path, &err.to_string()),
        }
    }
}
