/// Instruction sent when no custom prompt is configured.
pub const DEFAULT_PROMPT: &str =
    "Just recognize the text in the image. Do not offer unnecessary explanations.";

/// Placeholder replaced by the target language in custom prompts.
pub const LANG_PLACEHOLDER: &str = "$lang";

/// Resolve the system prompt for a recognition request.
///
/// A blank custom prompt falls back to [`DEFAULT_PROMPT`]. Otherwise every
/// `$lang` is replaced with `lang`; any other text, including unknown
/// placeholders, is passed through verbatim.
pub fn build_prompt(custom_prompt: Option<&str>, lang: &str) -> String {
    match custom_prompt {
        Some(template) if !template.trim().is_empty() => template.replace(LANG_PLACEHOLDER, lang),
        _ => DEFAULT_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_uses_default() {
        assert_eq!(build_prompt(None, "Japanese"), DEFAULT_PROMPT);
        assert_eq!(build_prompt(Some(""), "Japanese"), DEFAULT_PROMPT);
        assert_eq!(build_prompt(Some("  \n"), "Japanese"), DEFAULT_PROMPT);
    }

    #[test]
    fn test_lang_substitution() {
        assert_eq!(
            build_prompt(Some("Translate to $lang"), "Japanese"),
            "Translate to Japanese"
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        assert_eq!(
            build_prompt(Some("$lang text; answer in $lang"), "zh_cn"),
            "zh_cn text; answer in zh_cn"
        );
    }

    #[test]
    fn test_unknown_placeholders_pass_through() {
        assert_eq!(
            build_prompt(Some("Read {input} as $lang, keep $other"), "en"),
            "Read {input} as en, keep $other"
        );
    }

    #[test]
    fn test_prompt_without_placeholder_unchanged() {
        assert_eq!(build_prompt(Some("static prompt"), "fr"), "static prompt");
    }
}
