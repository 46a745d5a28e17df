use crate::backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("step reply parse failed: {0}")]
    StepReply(String),
    #[error("unknown tool `{tool_id}`")]
    UnknownTool { tool_id: String },
    #[error("missing required argument `{arg}` for tool `{tool_id}`")]
    MissingToolArg { tool_id: String, arg: String },
    #[error("invalid argument type for `{tool_id}.{arg}`; expected {expected}")]
    InvalidToolArgType {
        tool_id: String,
        arg: String,
        expected: String,
    },
    #[error("structure payload parse failed: {0}")]
    StructurePayload(String),
    #[error("workflow exceeded maximum step count ({max_steps})")]
    MaxStepsExceeded { max_steps: u32 },
    #[error("backend call failed: {0}")]
    Backend(#[from] BackendError),
}
