use crate::backend::types::{
    Content, ContentPart, GenerateRequest, GenerateResponse, SystemInstruction,
};
use crate::backend::{BackendError, ChatTurn};
use std::time::Duration;

pub trait GenerativeBackend {
    fn generate(
        &self,
        system_instruction: Option<&str>,
        turns: &[ChatTurn],
    ) -> Result<String, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}

fn request_body(system_instruction: Option<&str>, turns: &[ChatTurn]) -> GenerateRequest {
    GenerateRequest {
        contents: turns
            .iter()
            .map(|turn| Content {
                role: turn.role.to_string(),
                parts: vec![ContentPart {
                    text: turn.text.clone(),
                }],
            })
            .collect(),
        system_instruction: system_instruction.map(|text| SystemInstruction {
            parts: vec![ContentPart {
                text: text.to_string(),
            }],
        }),
    }
}

fn joined_candidate_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let lines: Vec<&str> = candidate
        .content
        .parts
        .iter()
        .map(|part| part.text.trim())
        .filter(|text| !text.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n"))
}

impl GenerativeBackend for HttpBackend {
    fn generate(
        &self,
        system_instruction: Option<&str>,
        turns: &[ChatTurn],
    ) -> Result<String, BackendError> {
        let body = serde_json::to_value(request_body(system_instruction, turns))
            .map_err(|err| BackendError::Decode(err.to_string()))?;

        let response = ureq::post(&self.generate_url())
            .timeout(self.timeout)
            .send_json(body)
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let decoded = response
            .into_json::<GenerateResponse>()
            .map_err(|err| BackendError::Decode(err.to_string()))?;

        joined_candidate_text(&decoded).ok_or(BackendError::EmptyReply)
    }
}
