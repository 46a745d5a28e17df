pub mod approval;
pub mod context;
pub mod conversation;
pub mod driver;
pub mod error;
pub mod step_reply;
pub mod tool_registry;

pub use approval::{decision_from_answer, ApprovalGate, ReviewDecision};
pub use context::{classify_request, ProjectContext, RequestKind};
pub use conversation::{Conversation, PROCEED_PROMPT};
pub use driver::{RunOutcome, WorkflowDriver};
pub use error::WorkflowError;
pub use step_reply::{parse_step_reply, Step, StepRecord};
pub use tool_registry::{FileContentRequest, FileSpec, ToolCall, ToolRegistry};
