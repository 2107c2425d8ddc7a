//! Chat-completion response parsing.
//!
//! Success bodies are walked level by level (`choices[0].message.content`)
//! without assuming a schema. Error bodies use the OpenAI envelope
//! `{"error": {"message": "..."}}` when present and fall back to the whole
//! body otherwise.

use serde_json::Value;

use crate::error::OcrError;
use crate::transport::HttpResponse;

/// Extract the recognized text from a successful response body.
///
/// The content is returned exactly as sent, without trimming.
pub fn parse_response(response: &Value) -> Result<String, OcrError> {
    let content = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str());

    match content {
        Some(text) => Ok(text.to_string()),
        None => Err(OcrError::InvalidResponseFormat {
            body: response.to_string(),
        }),
    }
}

/// Build the error for a non-success HTTP response.
pub fn format_error(response: &HttpResponse) -> OcrError {
    let message = response
        .data
        .get("error")
        .and_then(|err| err.get("message"))
        .and_then(|msg| msg.as_str())
        .filter(|msg| !msg.is_empty())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| response.data.to_string());

    OcrError::HttpRequestError {
        status: response.status,
        message,
    }
}
