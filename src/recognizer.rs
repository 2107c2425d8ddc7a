use reqwest::Method;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::endpoint::normalize_request_path;
use crate::error::{OcrError, Result};
use crate::parser;
use crate::prompt::build_prompt;
use crate::request::build_request_body;
use crate::transport::{HttpBody, HttpRequest, HttpTransport};
use crate::types::{Config, RecognitionRequest};

const MISSING_API_KEY: &str = "API Key is required. Please configure your API Key.";
const EMPTY_IMAGE: &str = "Image data is empty. Please provide a valid image.";
const EMPTY_MODEL: &str = "Model is required. Please specify a model name.";
const MODEL_NOT_STRING: &str = "Model must be a string. Please specify a model name.";

/// Recognize the text in an image through a chat-completion API.
///
/// Sends exactly one `POST` through `transport` and returns the first
/// choice's message content unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The API key is blank ([`OcrError::MissingCredential`], before any request)
/// - The image data or an explicitly set model is blank, or the host's model
///   is not a string ([`OcrError::InvalidInput`])
/// - The API returns a non-success status ([`OcrError::HttpRequestError`])
/// - The response has no `choices[0].message.content` ([`OcrError::InvalidResponseFormat`])
/// - The transport fails; its error is returned as-is
pub async fn recognize<T>(
    transport: &T,
    request: &RecognitionRequest,
    config: &Config,
) -> Result<String>
where
    T: HttpTransport + ?Sized,
{
    validate_params(&config.api_key, &request.base64_image)?;

    if config.non_string_model {
        return Err(OcrError::InvalidInput(MODEL_NOT_STRING.to_string()));
    }
    if config.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
        return Err(OcrError::InvalidInput(EMPTY_MODEL.to_string()));
    }
    let model = config.resolved_model();

    let url = normalize_request_path(config.request_path.as_deref().unwrap_or(""));
    let prompt = build_prompt(config.custom_prompt.as_deref(), &request.target_language);
    let body = build_request_body(model, &request.base64_image, &prompt);
    let payload = serde_json::to_value(&body)?;

    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", config.api_key),
    );

    debug!(%url, model, lang = %request.target_language, "sending recognition request");
    let res = transport
        .fetch(HttpRequest {
            method: Method::POST,
            url,
            headers,
            body: HttpBody::Json(payload),
        })
        .await?;

    if res.ok {
        parser::parse_response(&res.data)
    } else {
        warn!(status = res.status, "recognition request failed");
        Err(parser::format_error(&res))
    }
}

/// Check the required inputs before any request is made.
pub fn validate_params(api_key: &str, base64_image: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(OcrError::MissingCredential(MISSING_API_KEY.to_string()));
    }
    if base64_image.trim().is_empty() {
        return Err(OcrError::InvalidInput(EMPTY_IMAGE.to_string()));
    }
    Ok(())
}
