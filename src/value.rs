//! Entry points over raw CMS field values.
//!
//! CMS documents arrive as JSON, and a `description` field may be missing,
//! `null`, or hold something other than a string. Anything that is not a
//! non-empty string renders as the empty output.

use serde_json::Value;

use crate::description::Description;

pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}

pub fn format_markdown_value(value: &Value) -> String {
    as_text(value).map(crate::format_markdown).unwrap_or_default()
}

pub fn parse_description_value(value: &Value) -> Description {
    as_text(value)
        .map(crate::parse_description)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn non_text_values() -> Vec<Value> {
        vec![
            Value::Null,
            json!(""),
            json!(0),
            json!(42.5),
            json!(true),
            json!(false),
            json!(["- a"]),
            json!({"description": "- a"}),
        ]
    }

    #[test]
    fn test_format_non_text_is_empty() {
        for value in non_text_values() {
            assert_eq!(format_markdown_value(&value), "", "value: {value}");
        }
    }

    #[test]
    fn test_parse_non_text_is_empty() {
        for value in non_text_values() {
            assert_eq!(
                parse_description_value(&value),
                Description::default(),
                "value: {value}"
            );
        }
    }

    #[test]
    fn test_string_values() {
        assert_eq!(format_markdown_value(&json!("**x**")), "<strong>x</strong>");
        let parsed = parse_description_value(&json!("Intro\n- a"));
        assert_eq!(parsed.text, "Intro");
        assert_eq!(parsed.items, vec!["a"]);
    }

    #[test]
    fn test_field_lookup() {
        let document = json!({"title": "Kaos", "description": "*Baru*"});
        assert_eq!(format_markdown_value(&document["description"]), "<em>Baru</em>");
        assert_eq!(format_markdown_value(&document["missing"]), "");
    }
}
