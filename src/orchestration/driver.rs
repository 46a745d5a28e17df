use crate::backend::{ChatRole, GenerativeBackend};
use crate::orchestration::approval::ApprovalGate;
use crate::orchestration::context::{
    extract_project_name, extract_project_type, extract_update_file, ProjectContext,
};
use crate::orchestration::conversation::{Conversation, PROCEED_PROMPT};
use crate::orchestration::error::WorkflowError;
use crate::orchestration::step_reply::{parse_step_reply, Step, StepRecord};
use crate::orchestration::tool_registry::{FileContentRequest, ToolCall, ToolRegistry};
use crate::prompts;
use crate::workspace::materialize_file;
use serde::Deserialize;
use std::path::PathBuf;

// Guard against a backend that never reaches final_result.
const MAX_STEPS_PER_RUN: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        summary: String,
        project_name: Option<String>,
        execution_query: bool,
    },
    Rejected,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct StructurePayload {
    #[serde(default)]
    structure: Vec<String>,
}

pub struct WorkflowDriver<'a> {
    backend: &'a dyn GenerativeBackend,
    approval: &'a mut dyn ApprovalGate,
    project_root: PathBuf,
    context: ProjectContext,
}

impl<'a> WorkflowDriver<'a> {
    pub fn new(
        backend: &'a dyn GenerativeBackend,
        approval: &'a mut dyn ApprovalGate,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            backend,
            approval,
            project_root: project_root.into(),
            context: ProjectContext::default(),
        }
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    pub fn run_request<F>(
        &mut self,
        request: &str,
        on_step: F,
    ) -> Result<RunOutcome, WorkflowError>
    where
        F: FnMut(&StepRecord),
    {
        self.context.reset();
        let result = self.drive(request, on_step);
        if result.is_err() {
            self.context.reset();
        }
        result
    }

    fn drive<F>(&mut self, request: &str, mut on_step: F) -> Result<RunOutcome, WorkflowError>
    where
        F: FnMut(&StepRecord),
    {
        let registry = ToolRegistry::new(self.project_root.clone(), self.backend);
        let mut conversation = Conversation::new();
        conversation.append(ChatRole::User, request);

        let mut steps_taken = 0u32;
        loop {
            if steps_taken >= MAX_STEPS_PER_RUN {
                return Err(WorkflowError::MaxStepsExceeded {
                    max_steps: MAX_STEPS_PER_RUN,
                });
            }
            steps_taken += 1;

            let reply = self
                .backend
                .generate(Some(prompts::system_instruction()), conversation.turns())?;
            let record = parse_step_reply(&reply)?;
            conversation.append(ChatRole::Model, record.serialized());
            on_step(&record);

            match record.step {
                Step::Initialization => self.context.apply_classification(request),
                Step::Analyze => self.interpret_analysis(&record.content),
                _ => {}
            }

            self.dispatch_for_step(&registry, &record, &mut conversation)?;

            match record.step {
                Step::GenerateStructure => {
                    if !self.context.proposed_structure.is_empty()
                        && !self.context.is_update_request
                        && !self.context.is_execution_request
                    {
                        let decision = self
                            .approval
                            .review_structure(&self.context.proposed_structure);
                        if !decision.is_approve() {
                            self.context.reset();
                            return Ok(RunOutcome::Rejected);
                        }
                    }
                }
                Step::FinalResult => {
                    let outcome = RunOutcome::Completed {
                        summary: record.content.clone(),
                        project_name: self.context.project_name.clone(),
                        execution_query: self.context.is_execution_request,
                    };
                    self.context.reset();
                    return Ok(outcome);
                }
                _ => {}
            }

            conversation.append(ChatRole::User, PROCEED_PROMPT);
        }
    }

    fn interpret_analysis(&mut self, content: &str) {
        if let Some(project_type) = extract_project_type(content) {
            self.context.project_type = Some(project_type);
        }
        if let Some(project_name) = extract_project_name(content) {
            self.context.project_name = Some(project_name);
        }
        if self.context.is_update_request {
            if let Some(update_file) = extract_update_file(content) {
                self.context.update_file = Some(update_file);
            }
        }
    }

    fn dispatch_for_step(
        &mut self,
        registry: &ToolRegistry<'_>,
        record: &StepRecord,
        conversation: &mut Conversation,
    ) -> Result<(), WorkflowError> {
        // Update requests regenerate the one resolved file at generate_files,
        // taking precedence over whatever tool the backend declared.
        if record.step == Step::GenerateFiles && self.context.is_update_request {
            if let Some(update_file) = self.context.update_file.clone() {
                let result = self.regenerate_update_file(registry, &update_file);
                conversation.append(ChatRole::User, result);
                return Ok(());
            }
        }

        let Some(function) = record.function.as_deref() else {
            return Ok(());
        };
        let call = ToolCall::from_parts(function, record.args.as_ref())?;
        let result = registry.dispatch(&call);
        if matches!(call, ToolCall::GenerateProjectStructure { .. }) {
            self.store_structure(&result)?;
        }
        conversation.append(ChatRole::User, result);
        Ok(())
    }

    fn regenerate_update_file(&self, registry: &ToolRegistry<'_>, update_file: &str) -> String {
        let request = FileContentRequest {
            file_path: update_file.to_string(),
            project_type: self
                .context
                .project_type
                .clone()
                .unwrap_or_else(|| "project".to_string()),
            description: self.context.update_issue.clone().unwrap_or_default(),
            is_update: true,
            update_issue: self.context.update_issue.clone(),
        };
        let content = registry.generate_file_content(&request);
        match materialize_file(registry.project_root(), update_file, &content) {
            Ok(result) => format!("{} {}", result.outcome, result.path.display()),
            Err(err) => format!("failed to write {update_file}: {err}"),
        }
    }

    fn store_structure(&mut self, raw: &str) -> Result<(), WorkflowError> {
        let payload: StructurePayload = serde_json::from_str(raw)
            .map_err(|err| WorkflowError::StructurePayload(err.to_string()))?;
        self.context.proposed_structure = payload.structure;
        Ok(())
    }
}
