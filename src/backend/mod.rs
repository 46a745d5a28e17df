pub mod client;
pub mod types;

pub use client::{GenerativeBackend, HttpBackend};
pub use types::{BackendError, ChatRole, ChatTurn};
