#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn is_approve(self) -> bool {
        self == ReviewDecision::Approve
    }
}

pub fn decision_from_answer(raw: &str) -> ReviewDecision {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => ReviewDecision::Approve,
        _ => ReviewDecision::Reject,
    }
}

pub trait ApprovalGate {
    fn review_structure(&mut self, paths: &[String]) -> ReviewDecision;
}
