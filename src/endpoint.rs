//! Request path normalization.
//!
//! Users paste anything from a bare host (`api.example.com`) to a full
//! completions URL. Normalization turns that into the URL the request is
//! actually sent to:
//!
//! | Input                                   | Output                                          |
//! |-----------------------------------------|-------------------------------------------------|
//! | *(blank)*                               | `https://api.openai.com/v1/chat/completions`    |
//! | `api.example.com`                       | `https://api.example.com/v1/chat/completions`   |
//! | `http://localhost:8080/v1/`             | `http://localhost:8080/v1/chat/completions`     |
//! | `https://host/api/v4/chat/completions`  | unchanged                                       |

/// Base URL used when no request path is configured.
pub const DEFAULT_API_PATH: &str = "https://api.openai.com";

/// Endpoint suffix appended to base URLs.
pub const API_ENDPOINT: &str = "/v1/chat/completions";

const COMPLETIONS_SEGMENT: &str = "/chat/completions";
const VERSION_SEGMENT: &str = "/v1";

/// Normalize a user-supplied request path into a full chat-completions URL.
///
/// No URL validation happens here; malformed results fail in the transport.
pub fn normalize_request_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return format!("{}{}", DEFAULT_API_PATH, API_ENDPOINT);
    }

    let mut normalized = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let without_slashes = normalized.trim_end_matches('/').len();
    normalized.truncate(without_slashes);

    if normalized.ends_with(COMPLETIONS_SEGMENT) {
        // already complete
    } else if normalized.ends_with(VERSION_SEGMENT) {
        normalized.push_str(COMPLETIONS_SEGMENT);
    } else {
        normalized.push_str(API_ENDPOINT);
    }

    normalized
}

/// Case-insensitive `http://` / `https://` prefix check.
fn has_http_scheme(path: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        path.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
