//! Common test utilities for building diagrams and traffic profiles.
use archsim::prelude::*;

/// Creates a node with its catalogue defaults.
#[allow(dead_code)]
pub fn node(id: &str, service_type: ServiceType) -> ServiceNode {
    ServiceNode::new(id, service_type)
}

/// Creates an edge whose id is derived from its endpoints.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> Edge {
    Edge::new(format!("{}->{}", source, target), source, target)
}

/// DNS -> CDN -> load balancer -> compute -> database, fully connected, all defaults.
#[allow(dead_code)]
pub fn typical_architecture() -> (Vec<ServiceNode>, Vec<Edge>) {
    let nodes = vec![
        node("dns", ServiceType::Route53),
        node("cdn", ServiceType::Cloudfront),
        node("lb", ServiceType::Alb),
        node("app", ServiceType::Ecs),
        node("db", ServiceType::Rds),
    ];
    let edges = vec![
        edge("dns", "cdn"),
        edge("cdn", "lb"),
        edge("lb", "app"),
        edge("app", "db"),
    ];
    (nodes, edges)
}

/// A traffic profile at `rps` with otherwise default settings.
#[allow(dead_code)]
pub fn traffic(rps: f64) -> TrafficProfile {
    TrafficProfile {
        requests_per_second: rps,
        ..TrafficProfile::default()
    }
}

/// A small diagram document as an editor would persist it.
#[allow(dead_code)]
pub const TYPICAL_DIAGRAM_JSON: &str = r#"
{
    "nodes": [
        { "id": "dns", "serviceType": "route53" },
        { "id": "lb", "serviceType": "alb", "config": { "name": "Public ALB" } },
        {
            "id": "app",
            "serviceType": "ecs",
            "parentId": "private-a",
            "config": { "specific": { "taskCount": 4, "cpu": 0.5, "memory": 1 } }
        },
        { "id": "db", "serviceType": "rds", "parentId": "private-a" }
    ],
    "edges": [
        { "id": "e1", "source": "dns", "target": "lb", "protocol": "https" },
        { "id": "e2", "source": "lb", "target": "app", "protocol": "http" },
        { "id": "e3", "source": "app", "target": "db", "protocol": "tcp" }
    ],
    "traffic": {
        "requestsPerSecond": 250,
        "averagePayloadSize": 8,
        "readWriteRatio": 0.7
    }
}
"#;

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}
