//! # openai-ocr
//!
//! Text recognition through any OpenAI-compatible vision chat-completion API
//! (OpenAI, Azure proxies, DeepSeek, Qwen-VL, local servers...).
//!
//! ## Features
//!
//! - **Endpoint normalization** that accepts bare hosts, `/v1` bases or full
//!   completions URLs
//! - **Prompt templates** with a `$lang` placeholder for the target language
//! - **Injectable transport** so hosts control networking, timeouts and
//!   cancellation, and tests can run without a server
//! - **Caller-ready errors** with the HTTP status and the API's own message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openai_ocr::{Config, RecognitionRequest, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::with_api_key("sk-...")
//!         .request_path("api.openai.com/v1")
//!         .custom_prompt("Recognize the $lang text in the image.");
//!     let transport = ReqwestTransport::new();
//!
//!     let request = RecognitionRequest::new("iVBORw0KGgo...", "Japanese");
//!     let text = openai_ocr::recognize(&transport, &request, &config).await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoint Normalization
//!
//! ```rust
//! use openai_ocr::normalize_request_path;
//!
//! assert_eq!(
//!     normalize_request_path(""),
//!     "https://api.openai.com/v1/chat/completions"
//! );
//! assert_eq!(
//!     normalize_request_path("api.example.com/v1/"),
//!     "https://api.example.com/v1/chat/completions"
//! );
//! ```

pub mod endpoint;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod recognizer;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use endpoint::{normalize_request_path, API_ENDPOINT, DEFAULT_API_PATH};
pub use error::{BoxError, OcrError, Result};
pub use parser::{format_error, parse_response};
pub use prompt::{build_prompt, DEFAULT_PROMPT, LANG_PLACEHOLDER};
pub use recognizer::{recognize, validate_params};
pub use request::{
    build_request_body, ChatMessage, ChatRequest, ContentPart, ImageDetail, ImageUrl, Role,
};
pub use transport::{HttpBody, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Config, RecognitionRequest, DEFAULT_MODEL};
