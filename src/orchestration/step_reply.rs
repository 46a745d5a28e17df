use crate::orchestration::error::WorkflowError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Initialization,
    Analyze,
    GenerateStructure,
    GenerateFiles,
    FinalResult,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Initialization => "initialization",
            Step::Analyze => "analyze",
            Step::GenerateStructure => "generate_structure",
            Step::GenerateFiles => "generate_files",
            Step::FinalResult => "final_result",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::FinalResult
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: Step,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl StepRecord {
    pub fn serialized(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.content.clone())
    }
}

fn is_fence_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("```") && !trimmed.trim_start_matches('`').contains(char::is_whitespace)
}

pub fn strip_code_fences(raw: &str) -> String {
    raw.lines()
        .filter(|line| !is_fence_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn parse_step_reply(raw: &str) -> Result<StepRecord, WorkflowError> {
    let stripped = strip_code_fences(raw);
    if stripped.is_empty() {
        return Err(WorkflowError::StepReply(
            "reply is empty after stripping code fences".to_string(),
        ));
    }
    serde_json::from_str(&stripped).map_err(|err| WorkflowError::StepReply(err.to_string()))
}
