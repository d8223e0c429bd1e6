//! Tests for the structural validator.
mod common;
use archsim::prelude::*;
use common::*;

#[test]
fn test_nat_gateway_requires_internet_gateway() {
    let nodes = vec![node("1", ServiceType::NatGateway)];
    let result = validate(&nodes, &[]);

    let dependency: Vec<_> = result.issues_in(Category::Dependency).collect();
    assert_eq!(dependency.len(), 1);
    assert_eq!(dependency[0].severity, Severity::Warning);
    assert!(dependency[0].message.contains("internet-gateway"));
    assert_eq!(dependency[0].node_ids, vec!["1".to_string()]);
    // Infrastructure alone has no flow nodes to check for viability.
    assert_eq!(result.issues_in(Category::Viability).count(), 0);
}

#[test]
fn test_typical_architecture_has_no_errors() {
    let (nodes, edges) = typical_architecture();
    let result = validate(&nodes, &edges);

    assert_eq!(result.error_count, 0, "{:?}", result.issues);
    assert!(result.is_valid);
    // Compute and database sit outside any subnet.
    let placement: Vec<_> = result.issues_in(Category::Placement).collect();
    assert_eq!(placement.len(), 2);
    assert!(placement[0].message.ends_with("should be in a private subnet for security"));
}

#[test]
fn test_counts_match_issue_list() {
    let nodes = vec![
        node("cdn", ServiceType::Cloudfront),
        node("db", ServiceType::Rds),
        node("queue", ServiceType::Sqs),
    ];
    let edges = vec![edge("cdn", "db")];
    let result = validate(&nodes, &edges);

    let count = |severity: Severity| {
        result
            .issues
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    };
    assert_eq!(result.error_count, count(Severity::Error));
    assert_eq!(result.warning_count, count(Severity::Warning));
    assert_eq!(result.info_count, count(Severity::Info));
    assert!(!result.is_valid);
}

#[test]
fn test_suboptimal_pattern_reports_error_and_warning() {
    let nodes = vec![node("cdn", ServiceType::Cloudfront), node("db", ServiceType::Rds)];
    let edges = vec![edge("cdn", "db")];
    let result = validate(&nodes, &edges);

    let connection: Vec<_> = result.issues_in(Category::Connection).collect();
    assert_eq!(connection.len(), 2);
    assert_eq!(connection[0].severity, Severity::Error);
    assert_eq!(connection[1].severity, Severity::Warning);
    assert_eq!(connection[1].node_ids, vec!["cdn".to_string(), "db".to_string()]);
}

#[test]
fn test_missing_entry_point_and_compute() {
    let nodes = vec![node("db", ServiceType::Dynamodb)];
    let result = validate(&nodes, &[]);

    let messages: Vec<&str> = result
        .issues_in(Category::Viability)
        .map(|i| i.message.as_str())
        .collect();
    assert!(messages.iter().any(|m| m.starts_with("No entry point found.")));
    assert!(
        messages
            .iter()
            .any(|m| m.starts_with("Database services found without a compute layer."))
    );
    assert!(messages.contains(&"dynamodb is isolated with no connections."));
    assert_eq!(result.info_count, 1);
}

#[test]
fn test_unreachable_backend_is_flagged() {
    let nodes = vec![
        node("lb", ServiceType::Alb),
        node("app", ServiceType::Ecs),
        node("orphan", ServiceType::Lambda),
        node("bucket", ServiceType::S3),
    ];
    let edges = vec![edge("lb", "app"), edge("orphan", "bucket")];
    let result = validate(&nodes, &edges);

    let unreachable = result
        .issues_in(Category::Viability)
        .find(|i| i.message.contains("unreachable from entry points"))
        .expect("unreachable issue");
    assert_eq!(
        unreachable.message,
        "2 backend service(s) unreachable from entry points. Check connections."
    );
    assert_eq!(unreachable.node_ids, vec!["orphan".to_string(), "bucket".to_string()]);
}

#[test]
fn test_empty_diagram_is_valid() {
    let result = validate(&[], &[]);
    assert!(result.is_valid);
    assert!(result.issues.is_empty());
}

#[test]
fn test_result_serializes_camel_case() {
    let nodes = vec![node("1", ServiceType::NatGateway)];
    let json = serde_json::to_value(validate(&nodes, &[])).unwrap();
    assert_eq!(json["isValid"], serde_json::json!(true));
    assert_eq!(json["warningCount"], serde_json::json!(1));
    assert_eq!(json["issues"][0]["category"], serde_json::json!("dependency"));
    assert_eq!(json["issues"][0]["nodeIds"], serde_json::json!(["1"]));
}
