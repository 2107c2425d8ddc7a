use serde_json::Value;
use std::fmt;

/// Model used when the host does not configure one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Plugin configuration supplied by the host for a single call.
///
/// Every field except the API key is optional. Defaults are applied where
/// the value is used, never at construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Model name (e.g., "gpt-4o", "qwen-vl-max"). `None` uses [`DEFAULT_MODEL`].
    pub model: Option<String>,
    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,
    /// User-entered endpoint, normalized before use.
    pub request_path: Option<String>,
    /// Custom system prompt; `$lang` is replaced by the target language.
    pub custom_prompt: Option<String>,
    /// The host supplied a `model` that was not a string; rejected at recognition.
    pub(crate) non_string_model: bool,
}

impl Config {
    /// Create a config with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the request path (base URL or full completions URL).
    pub fn request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = Some(path.into());
        self
    }

    /// Set the custom prompt template.
    pub fn custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }

    /// The configured model, or [`DEFAULT_MODEL`] when none was given.
    pub fn resolved_model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Read the host's configuration mapping.
    ///
    /// Expects keys `model`, `apiKey`, `requestPath` and `customPrompt`.
    /// Missing or `null` keys are treated as absent. A `model` that is
    /// present but not a string makes [`recognize`](crate::recognizer::recognize)
    /// fail with [`OcrError::InvalidInput`](crate::OcrError::InvalidInput)
    /// once the API key and image have been checked.
    pub fn from_host_config(value: &Value) -> Self {
        let (model, non_string_model) = match value.get("model") {
            None | Some(Value::Null) => (None, false),
            Some(Value::String(s)) => (Some(s.clone()), false),
            Some(_) => (None, true),
        };

        let string_field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };

        Self {
            model,
            api_key: string_field("apiKey").unwrap_or_default(),
            request_path: string_field("requestPath"),
            custom_prompt: string_field("customPrompt"),
            non_string_model,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "***" };
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("api_key", &api_key)
            .field("request_path", &self.request_path)
            .field("custom_prompt", &self.custom_prompt)
            .finish()
    }
}

/// One image to recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionRequest {
    /// Base64-encoded image bytes, without a `data:` prefix.
    pub base64_image: String,
    /// Language hint substituted into the prompt (e.g., "Japanese", "auto").
    pub target_language: String,
}

impl RecognitionRequest {
    pub fn new(base64_image: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            base64_image: base64_image.into(),
            target_language: target_language.into(),
        }
    }
}
