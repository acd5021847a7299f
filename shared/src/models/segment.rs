//! Segment Rule Model
//!
//! Structured targeting rules produced by natural-language conversion.

use serde::{Deserialize, Serialize};

/// Logical connector joining the predicates of a group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleConnector {
    And,
    Or,
}

/// Single targeting predicate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRule {
    pub field: String,
    pub operator: String,
    /// Comparison value; scalar shape depends on the field
    /// (number for spend thresholds, string for time windows).
    pub value: serde_json::Value,
}

/// Conjunction/disjunction of predicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroup {
    pub operator: RuleConnector,
    pub rules: Vec<SegmentRule>,
}
