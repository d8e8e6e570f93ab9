use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json|```").unwrap());

/// Strips markdown code fences the model sometimes wraps JSON payloads in,
/// leaving the payload itself.
pub fn strip_code_fences(response: &str) -> String {
    CODE_FENCE_PATTERN
        .replace_all(response, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let input = "```json\n{\"predictedPrice\": 45000}\n```";
        assert_eq!(strip_code_fences(input), "{\"predictedPrice\": 45000}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_preserves_unfenced_payload() {
        let input = "{\"a\": 1}";
        assert_eq!(strip_code_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  \n"), "{\"a\": 1}");
    }
}
