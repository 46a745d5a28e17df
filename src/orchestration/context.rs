use regex::Regex;

const UPDATE_SIGNAL_WORDS: &[&str] = &["update", "fix", "change", "modify", "repair", "correct"];
const EXECUTION_SIGNAL_WORDS: &[&str] = &["run", "execute", "start", "launch"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    NewProject,
    Update,
    ExecutionQuery,
}

pub fn classify_request(text: &str) -> RequestKind {
    let words: Vec<String> = text
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect();

    if words
        .iter()
        .any(|word| UPDATE_SIGNAL_WORDS.contains(&word.as_str()))
    {
        return RequestKind::Update;
    }
    if words
        .iter()
        .any(|word| EXECUTION_SIGNAL_WORDS.contains(&word.as_str()))
    {
        return RequestKind::ExecutionQuery;
    }
    RequestKind::NewProject
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    pub project_type: Option<String>,
    pub project_name: Option<String>,
    pub proposed_structure: Vec<String>,
    pub is_update_request: bool,
    pub is_execution_request: bool,
    pub update_issue: Option<String>,
    pub update_file: Option<String>,
}

impl ProjectContext {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply_classification(&mut self, request: &str) {
        match classify_request(request) {
            RequestKind::Update => {
                self.is_update_request = true;
                self.update_issue = Some(request.to_string());
            }
            RequestKind::ExecutionQuery => self.is_execution_request = true,
            RequestKind::NewProject => {}
        }
    }
}

fn first_capture(pattern: &str, content: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let captures = re.captures(content)?;
    captures
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn extract_project_type(content: &str) -> Option<String> {
    first_capture(r"(?i)identified as an? ([^.]+)\.", content)
}

pub fn extract_project_name(content: &str) -> Option<String> {
    first_capture(r"(?i)I'll name it '([^']+)'", content)
        .or_else(|| first_capture(r"(?i)Found project '([^']+)'", content))
}

pub fn extract_update_file(content: &str) -> Option<String> {
    let re = Regex::new(
        r"(?i)Found project '([^']+)' in .+? with a ([A-Za-z0-9_\-]+\.[A-Za-z0-9]+)",
    )
    .ok()?;
    let captures = re.captures(content)?;
    let project = captures.get(1)?.as_str().trim();
    let file = captures.get(2)?.as_str().trim();
    if project.is_empty() || file.is_empty() {
        return None;
    }
    Some(format!("{project}/{file}"))
}
