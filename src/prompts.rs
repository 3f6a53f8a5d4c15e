use crate::models::GenerationRequest;

pub const CONTENT: &str = include_str!("../data/prompts/content.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is a single left-to-right pass over the template, so values
/// are inserted verbatim and never re-scanned for placeholders. Unknown
/// placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

/// Build the instruction sent to the provider for a validated request.
pub fn compose(request: &GenerationRequest) -> String {
    let range = request.length_range();
    let min_words = range.min_words.to_string();
    let max_words = range.max_words.to_string();

    render(
        CONTENT.trim_end(),
        &[
            ("tone", request.tone.as_str()),
            ("content_type", request.content_type.as_str()),
            ("topic", request.topic.as_str()),
            ("min_words", min_words.as_str()),
            ("max_words", max_words.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(length: serde_json::Value) -> GenerationRequest {
        GenerationRequest {
            topic: "coffee".to_string(),
            tone: "playful".to_string(),
            content_type: "haiku".to_string(),
            length,
        }
    }

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_render_does_not_expand_inserted_values() {
        assert_eq!(
            render("{{a}} {{b}}", &[("a", "{{b}}"), ("b", "x")]),
            "{{b}} x"
        );
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed_placeholders() {
        assert_eq!(render("{{missing}} ok", &[]), "{{missing}} ok");
        assert_eq!(render("open {{a", &[("a", "x")]), "open {{a");
    }

    #[test]
    fn test_content_template_has_placeholders() {
        for key in ["tone", "content_type", "topic", "min_words", "max_words"] {
            assert!(CONTENT.contains(&format!("{{{{{}}}}}", key)));
        }
    }

    #[test]
    fn test_compose_small() {
        assert_eq!(
            compose(&request(json!("small"))),
            "Write a playful haiku about coffee around 50 - 100 words"
        );
    }

    #[test]
    fn test_compose_medium() {
        assert!(compose(&request(json!("medium"))).contains("around 100 - 200 words"));
    }

    #[test]
    fn test_compose_falls_back_to_default_range() {
        for length in [json!("large"), json!(""), json!("MEDIUM"), json!(3), json!(null)] {
            assert!(compose(&request(length)).contains("around 200 - 300 words"));
        }
    }

    #[test]
    fn test_compose_is_verbatim() {
        let mut req = request(json!("small"));
        req.topic = "<b>{{tone}}</b>".to_string();
        assert_eq!(
            compose(&req),
            "Write a playful haiku about <b>{{tone}}</b> around 50 - 100 words"
        );
    }
}
