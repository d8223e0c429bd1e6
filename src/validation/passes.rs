use super::{Category, Severity, ValidationIssue};
use crate::connection::can_connect;
use crate::diagram::{Edge, ServiceNode};
use crate::rules;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

/// Every edge between two known nodes is checked against the connection rules.
pub(super) fn connections(nodes: &[ServiceNode], edges: &[Edge]) -> Vec<ValidationIssue> {
    let by_id: AHashMap<&str, &ServiceNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let mut issues = Vec::new();

    for edge in edges {
        let (Some(source), Some(target)) = (
            by_id.get(edge.source.as_str()),
            by_id.get(edge.target.as_str()),
        ) else {
            continue;
        };
        let endpoints = vec![edge.source.clone(), edge.target.clone()];

        let check = can_connect(source.service_type, target.service_type);
        if !check.allowed {
            let message = check.warning.unwrap_or_else(|| {
                format!(
                    "{} cannot connect to {}",
                    source.service_type, target.service_type
                )
            });
            issues.push(ValidationIssue::new(
                Severity::Error,
                Category::Connection,
                message,
                endpoints.clone(),
            ));
        }

        if let Some(message) = rules::suboptimal_warning(source.service_type, target.service_type)
        {
            issues.push(ValidationIssue::new(
                Severity::Warning,
                Category::Connection,
                message,
                endpoints,
            ));
        }
    }

    issues
}

pub(super) fn placements(nodes: &[ServiceNode]) -> Vec<ValidationIssue> {
    nodes
        .iter()
        .filter(|n| rules::requires_private_placement(n.service_type) && n.parent_id.is_none())
        .map(|n| {
            ValidationIssue::new(
                Severity::Warning,
                Category::Placement,
                format!(
                    "{} should be in a private subnet for security",
                    n.service_type
                ),
                vec![n.id.clone()],
            )
        })
        .collect()
}

/// Prerequisites are a set-membership check over the whole diagram, not a reachability check.
pub(super) fn dependencies(nodes: &[ServiceNode]) -> Vec<ValidationIssue> {
    let present: AHashSet<_> = nodes.iter().map(|n| n.service_type).collect();
    let mut issues = Vec::new();

    for node in nodes {
        for required in rules::dependencies_of(node.service_type) {
            if !present.contains(required) {
                issues.push(ValidationIssue::new(
                    Severity::Warning,
                    Category::Dependency,
                    format!("{} typically requires {}", node.service_type, required),
                    vec![node.id.clone()],
                ));
            }
        }
    }

    issues
}

pub(super) fn viability(nodes: &[ServiceNode], edges: &[Edge]) -> Vec<ValidationIssue> {
    let flow: Vec<&ServiceNode> = nodes.iter().filter(|n| n.is_flow()).collect();
    let mut issues = Vec::new();
    if flow.is_empty() {
        return issues;
    }

    let has_entry_point = flow.iter().any(|n| rules::is_entry_point(n.service_type));
    if !has_entry_point {
        let labels = rules::ENTRY_POINT_TYPES.iter().map(|t| t.label()).join(", ");
        issues.push(ValidationIssue::new(
            Severity::Warning,
            Category::Viability,
            format!("No entry point found. Add one of {} as an entry point.", labels),
            Vec::new(),
        ));
    }

    let has_compute = flow.iter().any(|n| rules::is_compute(n.service_type));
    let databases: Vec<String> = flow
        .iter()
        .filter(|n| rules::is_database(n.service_type))
        .map(|n| n.id.clone())
        .collect();
    if !databases.is_empty() && !has_compute {
        issues.push(ValidationIssue::new(
            Severity::Warning,
            Category::Viability,
            "Database services found without a compute layer. Add ECS, EKS, EC2, or Lambda to process requests.",
            databases,
        ));
    }

    if has_entry_point && flow.len() > 1 {
        let unreachable = unreachable_backends(&flow, edges);
        if !unreachable.is_empty() {
            issues.push(ValidationIssue::new(
                Severity::Warning,
                Category::Viability,
                format!(
                    "{} backend service(s) unreachable from entry points. Check connections.",
                    unreachable.len()
                ),
                unreachable,
            ));
        }
    }

    let connected: AHashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();
    issues.extend(
        flow.iter()
            .filter(|n| !connected.contains(n.id.as_str()))
            .map(|n| {
                ValidationIssue::new(
                    Severity::Info,
                    Category::Viability,
                    format!("{} is isolated with no connections.", n.service_type),
                    vec![n.id.clone()],
                )
            }),
    );

    issues
}

/// Breadth-first walk from every entry point; returns backend ids never reached.
fn unreachable_backends(flow: &[&ServiceNode], edges: &[Edge]) -> Vec<String> {
    let mut adjacency: AHashMap<&str, Vec<&str>> =
        flow.iter().map(|n| (n.id.as_str(), Vec::new())).collect();
    for edge in edges {
        if let Some(neighbors) = adjacency.get_mut(edge.source.as_str()) {
            neighbors.push(edge.target.as_str());
        }
    }

    let mut queue: VecDeque<&str> = flow
        .iter()
        .filter(|n| rules::is_entry_point(n.service_type))
        .map(|n| n.id.as_str())
        .collect();
    let mut reached: AHashSet<&str> = queue.iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        for &next in adjacency.get(current).into_iter().flatten() {
            if reached.insert(next) {
                queue.push_back(next);
            }
        }
    }

    flow.iter()
        .filter(|n| rules::is_backend(n.service_type) && !reached.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect()
}
