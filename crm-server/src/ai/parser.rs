//! Generation Response Parsers
//!
//! Pure functions from raw completion text to the task's shape.

use shared::models::RuleGroup;
use thiserror::Error;

/// Placeholder every usable suggestion must contain; substituted with
/// the customer's name when a campaign message is actually sent.
pub const NAME_PLACEHOLDER: &str = "{{customerName}}";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON in generation response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a rule group or an array of rule groups")]
    UnexpectedShape,
}

/// Keep lines that are non-empty after trimming, contain the name
/// placeholder, and are not bullet-prefixed. Fewer than the requested
/// three survivors is a degraded success, not an error.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| {
            !line.trim().is_empty()
                && line.contains(NAME_PLACEHOLDER)
                && !line.starts_with('-')
                && !line.starts_with('*')
        })
        .map(str::to_string)
        .collect()
}

/// Decode the response as rule groups. A single object is wrapped in a
/// one-element vec; anything else that parses as JSON but is neither
/// object nor array is rejected.
pub fn parse_segment_rules(raw: &str) -> Result<Vec<RuleGroup>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => Err(ParseError::UnexpectedShape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RuleConnector;

    #[test]
    fn test_suggestions_keep_only_placeholder_lines() {
        let raw = "Hi {{customerName}}, our sale ends tonight!\n\
                   Here are some ideas:\n\
                   {{customerName}}, your loyalty gift is waiting.\n\
                   Check out the new arrivals today.\n\
                   Welcome back {{customerName}}, enjoy 10% off.";
        let suggestions = parse_suggestions(raw);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.contains(NAME_PLACEHOLDER)));
    }

    #[test]
    fn test_suggestions_drop_bulleted_and_blank_lines() {
        let raw = "- {{customerName}}, bullet one\n\
                   * {{customerName}}, bullet two\n\
                   \n\
                   {{customerName}}, the only good line";
        let suggestions = parse_suggestions(raw);
        assert_eq!(
            suggestions,
            vec!["{{customerName}}, the only good line".to_string()]
        );
    }

    #[test]
    fn test_suggestions_may_return_fewer_than_three() {
        let suggestions = parse_suggestions("No placeholder anywhere\nStill none");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_segment_rules_array() {
        let raw = r#"[{"operator": "AND", "rules": [{"field": "total_spend", "operator": "gt", "value": 100}]}]"#;
        let groups = parse_segment_rules(raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].operator, RuleConnector::And);
        assert_eq!(groups[0].rules[0].field, "total_spend");
    }

    #[test]
    fn test_segment_rules_single_object_wrapped() {
        let raw = r#"{"operator": "OR", "rules": [{"field": "last_purchase", "operator": "before", "value": "2026-01-01"}]}"#;
        let groups = parse_segment_rules(raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].operator, RuleConnector::Or);
    }

    #[test]
    fn test_segment_rules_not_json_is_parse_error() {
        let err = parse_segment_rules("sorry, I cannot help with that").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_segment_rules_scalar_json_rejected() {
        let err = parse_segment_rules("42").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedShape));
    }
}
