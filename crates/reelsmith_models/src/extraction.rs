//! Recovery of a JSON array embedded in free-form model output.
//!
//! Models asked for structured output often wrap it in prose or markdown
//! fences. The grammar here is deliberately narrow: the first `[` and its
//! matching `]`, tracking nesting depth, ignoring brackets inside JSON string
//! literals, and honoring backslash escapes within those literals.

use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithResult};

/// Extract the first balanced `[...]` span from a model response.
///
/// # Errors
///
/// Returns a `Parse` error if the response contains no `[` or the first one
/// is never closed.
///
/// # Examples
///
/// ```
/// use reelsmith_models::extract_json_array;
///
/// let response = "Sure! Here are your scenes:\n\
///     [{\"title\": \"Dawn\", \"description\": \"A harbor [at first light]\"}]\n\
///     Let me know if you want changes.";
///
/// let json = extract_json_array(response).unwrap();
/// assert!(json.starts_with('['));
/// assert!(json.ends_with(']'));
/// ```
pub fn extract_json_array(response: &str) -> ReelsmithResult<&str> {
    if let Some(span) = balanced_span(response, '[', ']') {
        return Ok(span);
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON array found in model response"
    );

    Err(GenerationError::new(GenerationErrorKind::Parse(format!(
        "No balanced JSON array found in response (length: {})",
        response.len()
    )))
    .into())
}

fn balanced_span(response: &str, open: char, close: char) -> Option<&str> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&response[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        assert_eq!(extract_json_array("[1, 2, 3]").unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_prose_around_payload() {
        let response = "Here you go: [{\"a\": 1}] Hope that helps [really].";
        assert_eq!(extract_json_array(response).unwrap(), "[{\"a\": 1}]");
    }

    #[test]
    fn test_nested_arrays() {
        let response = "x [[1, [2]], [3]] y";
        assert_eq!(extract_json_array(response).unwrap(), "[[1, [2]], [3]]");
    }

    #[test]
    fn test_brackets_inside_strings_ignored() {
        let response = r#"[{"title": "A ] tricky [ one"}] trailing"#;
        assert_eq!(
            extract_json_array(response).unwrap(),
            r#"[{"title": "A ] tricky [ one"}]"#
        );
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let response = r#"[{"title": "say \"hi]\" now"}]"#;
        assert_eq!(extract_json_array(response).unwrap(), response);
    }

    #[test]
    fn test_code_fence() {
        let response = "```json\n[{\"title\": \"x\"}]\n```";
        assert_eq!(extract_json_array(response).unwrap(), "[{\"title\": \"x\"}]");
    }

    #[test]
    fn test_unbalanced_is_parse_error() {
        let err = extract_json_array("[{\"title\": \"cut off\"").unwrap_err();
        assert!(matches!(
            err.generation_kind(),
            Some(GenerationErrorKind::Parse(_))
        ));
    }

    #[test]
    fn test_no_bracket_is_parse_error() {
        assert!(extract_json_array("I cannot help with that.").is_err());
    }
}
