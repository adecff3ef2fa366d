use serde::de::DeserializeOwned;

use crate::{JsonRepairError, Result};

/// Locates the JSON document inside model output: unwraps a markdown code
/// fence when the text does not already start with JSON, then skips any prose
/// before the first `{` or `[`.
pub fn extract_payload(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    let body = if trimmed.starts_with(['{', '[']) {
        trimmed
    } else {
        strip_code_fence(trimmed)
    };
    let start = body.find(['{', '['])?;
    Some(&body[start..])
}

fn strip_code_fence(s: &str) -> &str {
    let Some(open) = s.find("```") else {
        return s;
    };
    let after = &s[open + 3..];
    // Skip the info string, e.g. ```json
    let after = match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => after,
    };
    match after.find("```") {
        Some(close) => &after[..close],
        None => after,
    }
}

/// Cuts anything after the top-level value closes, and closes strings,
/// objects and arrays left open by truncated output. Strings may use either
/// quote, so JSON5 single-quoted values survive.
fn close_structure(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut closers: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        out.push(c);
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                closers.pop();
                if closers.is_empty() {
                    return out;
                }
            }
            _ => {}
        }
    }

    if let Some(open) = quote {
        if escaped {
            out.pop();
        }
        out.push(open);
    }

    let tail = out.trim_end().len();
    out.truncate(tail);
    if out.ends_with(',') {
        out.pop();
    } else if out.ends_with(':') {
        out.push_str("null");
    }

    out.extend(closers.into_iter().rev());
    out
}

/// Removes commas that directly precede a closing bracket.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            out.push(c);
            continue;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Repairs the common ways model output deviates from strict JSON and
/// deserializes the result. JSON5 syntax (single quotes, unquoted keys) is
/// accepted as a last resort.
pub fn json_repair<T: DeserializeOwned>(s: &str) -> Result<T> {
    let payload = extract_payload(s).ok_or(JsonRepairError::NoPayload)?;
    let repaired = strip_trailing_commas(&close_structure(payload));

    serde_json::from_str(&repaired).or_else(|_| {
        serde_json5::from_str(&repaired).map_err(|e| JsonRepairError::Unrepairable(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_extract_payload_skips_prose() {
        let fixture = "Sure! Here is the result: {\"a\": 1} Hope this helps.";
        let actual = extract_payload(fixture);
        let expected = Some("{\"a\": 1} Hope this helps.");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_extract_payload_unwraps_fence() {
        let fixture = "```json\n{\"a\": 1}\n```";
        let actual = extract_payload(fixture);
        let expected = Some("{\"a\": 1}\n");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_extract_payload_keeps_fences_inside_json() {
        let fixture = "{\"content\": \"```rust\\nfn main() {}\\n```\"}";
        let actual = extract_payload(fixture);
        let expected = Some(fixture);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_extract_payload_without_json() {
        let actual = extract_payload("I cannot help with that.");
        assert_eq!(actual, None);
    }

    #[test]
    fn test_repair_drops_trailing_prose() {
        let fixture = "{\"a\": 1} and some explanation [sic]";
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"a": 1});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_trailing_commas() {
        let fixture = r#"{"keyPoints": ["a", "b",], "x": 1,}"#;
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"keyPoints": ["a", "b"], "x": 1});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_truncated_output() {
        let fixture =
            r#"{"type": "clarification_needed", "followUpQuestions": ["Which sector?", "What bud"#;
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({
            "type": "clarification_needed",
            "followUpQuestions": ["Which sector?", "What bud"]
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_dangling_key() {
        let fixture = r#"{"title": "Oil", "content":"#;
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"title": "Oil", "content": null});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_commas_inside_strings_untouched() {
        let fixture = r#"{"reasoning": "a, ]b", "x": [1,]"#;
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"reasoning": "a, ]b", "x": [1]});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_json5_syntax() {
        let fixture = "{title: 'Oil', content: 'Body'}";
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"title": "Oil", "content": "Body"});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_single_quoted_values_with_double_quotes() {
        let fixture = r#"{title: 'The "Oil" {boom}', content: 'Body',} trailing"#;
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"title": "The \"Oil\" {boom}", "content": "Body"});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_truncated_single_quoted_value() {
        let fixture = "{title: 'Oil', content: 'Body of the";
        let actual: Value = json_repair(fixture).unwrap();
        let expected = json!({"title": "Oil", "content": "Body of the"});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_repair_without_payload() {
        let actual = json_repair::<Value>("no json here");
        assert!(matches!(actual, Err(JsonRepairError::NoPayload)));
    }
}
