//! Structural validation of a diagram.
//!
//! Validation never fails: it reports what it finds as a flat list of
//! [`ValidationIssue`]s. Only `error` issues make a diagram invalid.

use crate::diagram::{Edge, ServiceNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod passes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The pass that produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Connection,
    Placement,
    Dependency,
    Viability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub node_ids: Vec<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        node_ids: Vec<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            node_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
        let error_count = count(Severity::Error);
        let warning_count = count(Severity::Warning);
        let info_count = count(Severity::Info);
        Self {
            is_valid: error_count == 0,
            error_count,
            warning_count,
            info_count,
            issues,
        }
    }

    /// A result with no issues.
    pub fn empty() -> Self {
        Self::from_issues(Vec::new())
    }

    pub fn issues_in(&self, category: Category) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Runs the connection, placement, dependency, and viability passes over the raw
/// node and edge lists.
pub struct Validator<'a> {
    nodes: &'a [ServiceNode],
    edges: &'a [Edge],
}

impl<'a> Validator<'a> {
    pub fn new(nodes: &'a [ServiceNode], edges: &'a [Edge]) -> Self {
        Self { nodes, edges }
    }

    pub fn run(&self) -> ValidationResult {
        let mut issues = passes::connections(self.nodes, self.edges);
        issues.extend(passes::placements(self.nodes));
        issues.extend(passes::dependencies(self.nodes));
        issues.extend(passes::viability(self.nodes, self.edges));

        let result = ValidationResult::from_issues(issues);
        debug!(
            errors = result.error_count,
            warnings = result.warning_count,
            info = result.info_count,
            "Validation finished"
        );
        result
    }
}

/// Validates a diagram.
pub fn validate(nodes: &[ServiceNode], edges: &[Edge]) -> ValidationResult {
    Validator::new(nodes, edges).run()
}
