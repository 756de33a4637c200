use crate::domain::entities::params::TranslationParams;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replaces `{{name}}` tokens with the matching parameter in a single
/// left-to-right pass. Tokens naming an unknown parameter, and anything that
/// is not a well-formed token, are copied through unchanged.
pub fn interpolate(template: &str, params: &TranslationParams) -> String {
    if params.is_empty() || !template.contains(OPEN) {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let name = &after_open[..end];
        match params.get(name).filter(|_| is_identifier(name)) {
            Some(value) => {
                output.push_str(&value.to_string());
                rest = &after_open[end + CLOSE.len()..];
            }
            None if is_identifier(name) => {
                output.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // `{{{{name}}` and similar: emit one brace and rescan
                output.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_every_occurrence() {
        let params = TranslationParams::new().with("min", 5);
        assert_eq!(
            interpolate("At least {{min}} characters ({{min}} minimum)", &params),
            "At least 5 characters (5 minimum)"
        );
    }

    #[test]
    fn test_unknown_placeholder_left_literally() {
        let params = TranslationParams::new().with("name", "Ada");
        assert_eq!(
            interpolate("Hi {{name}}, you have {{unread}} messages", &params),
            "Hi Ada, you have {{unread}} messages"
        );
    }

    #[test]
    fn test_count_is_substituted() {
        let params = TranslationParams::counted(3);
        assert_eq!(interpolate("{{count}} reseñas", &params), "3 reseñas");
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let params = TranslationParams::new().with("a", "x");
        assert_eq!(interpolate("{{a", &params), "{{a");
        assert_eq!(interpolate("{{ a }}", &params), "{{ a }}");
        assert_eq!(interpolate("{{{{a}}", &params), "{{x");
        assert_eq!(interpolate("{{}}", &params), "{{}}");
    }

    #[test]
    fn test_no_recursive_substitution() {
        let params = TranslationParams::new().with("a", "{{b}}").with("b", "y");
        assert_eq!(interpolate("{{a}}", &params), "{{b}}");
    }
}
