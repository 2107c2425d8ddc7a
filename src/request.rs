//! Chat-completion request body.
//!
//! The body always has two messages: a system message holding the prompt
//! and a user message holding the image as a base64 data URI.
//!
//! ```json
//! {
//!   "model": "gpt-4o",
//!   "messages": [
//!     {"role": "system", "content": [{"type": "text", "text": "..."}]},
//!     {"role": "user", "content": [{"type": "image_url",
//!       "image_url": {"url": "data:image/png;base64,...", "detail": "high"}}]}
//!   ]
//! }
//! ```

use serde::Serialize;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One element of a message's content array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: ImageDetail,
}

/// Analysis fidelity hint for an image part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Low,
    High,
    Auto,
}

impl ChatMessage {
    /// System message with a single text part.
    pub fn system_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: vec![ContentPart::Text { text: text.into() }],
        }
    }

    /// User message with a single PNG image part at the highest detail level.
    pub fn user_image(base64_image: &str) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: format!("{}{}", DATA_URI_PREFIX, base64_image),
                    detail: ImageDetail::High,
                },
            }],
        }
    }
}

/// Assemble the request body for one recognition call.
pub fn build_request_body(model: &str, base64_image: &str, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system_text(prompt),
            ChatMessage::user_image(base64_image),
        ],
    }
}
