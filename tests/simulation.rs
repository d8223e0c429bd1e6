//! Tests for the simulation engine: performance, cost, security, and availability.
mod common;
use archsim::diagram::{SubnetConfig, SubnetType};
use archsim::prelude::*;
use archsim::simulation::{analyze_availability, calculate_cost, calculate_performance};
use common::*;

#[test]
fn test_total_latency_is_sum_of_bases() {
    let (nodes, edges) = typical_architecture();
    let ordered = order(&nodes, &edges);
    let performance = calculate_performance(&ordered, &traffic(100.0));

    let expected: f64 = nodes.iter().map(|n| n.config.latency.base).sum();
    assert_close(performance.total_latency, expected);
    assert_close(performance.p50_latency, expected * 0.9);
    assert_close(performance.p99_latency, expected * 1.8);
    assert_close(performance.ttfb, 3.0);
}

#[test]
fn test_cache_layers_filter_traffic() {
    let (nodes, edges) = typical_architecture();
    let ordered = order(&nodes, &edges);
    let performance = calculate_performance(&ordered, &traffic(100.0));

    // Only the CDN caches, at its default 85% hit rate.
    assert_close(performance.requests_reaching_origin, 15.0);
    assert_close(performance.cache_hit_rate, 0.85);

    let idle = calculate_performance(&ordered, &traffic(0.0));
    assert_eq!(idle.cache_hit_rate, 0.0);
}

#[test]
fn test_zero_traffic_costs_only_fixed_components() {
    let (nodes, edges) = typical_architecture();
    let ordered = order(&nodes, &edges);
    let cost = calculate_cost(&ordered, &traffic(0.0));

    assert_eq!(cost.per_request, 0.0);
    // Hosted zone + ALB hours + two Fargate tasks + one db.t3.micro with 20 GB.
    assert_close(cost.monthly, 0.5 + 16.425 + 18.02005 + 14.71);
    assert_eq!(cost.breakdown.len(), 5);
    assert_eq!(cost.breakdown[1].amount, 0.0);
}

#[test]
fn test_downstream_cost_sees_cached_rate() {
    let (nodes, edges) = typical_architecture();
    let ordered = order(&nodes, &edges);
    let cost = calculate_cost(&ordered, &traffic(100.0));

    // The ALB behind the CDN is billed for 15 rps: 0.6 LCU on top of its hourly rate.
    let alb = &cost.breakdown[2];
    assert_eq!(alb.service, nodes[2].config.name);
    assert_close(alb.amount, 16.425 + 0.6 * 0.008 * 730.0);

    let total: f64 = cost.breakdown.iter().map(|e| e.amount).sum();
    assert_close(cost.monthly, total);
    assert_close(cost.per_request, cost.monthly / (100.0 * 2_592_000.0));
}

#[test]
fn test_security_of_typical_architecture() {
    let (nodes, edges) = typical_architecture();
    let result = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));

    let security = &result.security;
    assert!(security.ddos_protection);
    assert!(!security.waf_enabled);
    assert!(security.encryption_in_transit);
    assert!(security.encryption_at_rest);
    assert_eq!(security.score, 60);
}

#[test]
fn test_unknown_protocol_breaks_encryption_in_transit() {
    let (nodes, mut edges) = typical_architecture();
    edges[2] = edges[2].clone().with_protocol("http");
    let labelled = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));
    assert!(labelled.security.encryption_in_transit);
    assert_eq!(labelled.security.score, 60);

    edges[2] = edges[2].clone().with_protocol("ftp");
    let result = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));
    assert!(!result.security.encryption_in_transit);
    assert_eq!(result.security.score, 40);
}

#[test]
fn test_private_subnet_inside_vpc_scores_highest_bonus() {
    let (mut nodes, edges) = typical_architecture();
    nodes.push(node("vpc", ServiceType::Vpc));

    let vpc_only = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));
    assert_eq!(vpc_only.security.score, 70);

    // Subnets default to public, which earns nothing extra.
    nodes.push(node("public-a", ServiceType::Subnet).with_parent("vpc"));
    let with_public = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));
    assert_eq!(with_public.security.score, 70);

    let mut private = node("private-a", ServiceType::Subnet).with_parent("vpc");
    private.config.specific = SpecificConfig::Subnet(SubnetConfig {
        subnet_type: SubnetType::Private,
        ..SubnetConfig::default()
    });
    nodes.push(private);
    let with_subnet = Simulator::builder().build().run(&nodes, &edges, &traffic(100.0));
    assert_eq!(with_subnet.security.score, 80);
}

#[test]
fn test_availability_of_empty_flow() {
    let availability = analyze_availability(&[]);
    assert_eq!(availability.redundancy_score, 100);
    assert_eq!(availability.estimated_uptime, 0.9999);
    assert!(availability.single_points_of_failure.is_empty());
}

#[test]
fn test_single_database_is_a_point_of_failure() {
    let (nodes, edges) = typical_architecture();
    let ordered = order(&nodes, &edges);
    let availability = analyze_availability(&ordered);

    assert_eq!(availability.single_points_of_failure, vec![nodes[4].config.name.clone()]);
    assert_eq!(availability.redundancy_score, 80);
    assert_eq!(availability.estimated_uptime, 0.9979);
}

#[test]
fn test_simulation_is_idempotent() {
    let (nodes, edges) = typical_architecture();
    let options = SimulationOptions {
        advanced_mode: true,
    };
    let first = simulate(&nodes, &edges, &traffic(420.0), options);
    let second = simulate(&nodes, &edges, &traffic(420.0), options);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_validation_can_be_skipped() {
    let nodes = vec![node("cdn", ServiceType::Cloudfront), node("db", ServiceType::Rds)];
    let edges = vec![edge("cdn", "db")];

    let checked = Simulator::builder().build().run(&nodes, &edges, &traffic(10.0));
    assert!(!checked.validation.is_valid);

    let unchecked = Simulator::builder()
        .validate(false)
        .build()
        .run(&nodes, &edges, &traffic(10.0));
    assert_eq!(unchecked.validation, ValidationResult::empty());
    assert!(unchecked.validation.is_valid);
}

#[test]
fn test_infrastructure_is_not_simulated() {
    let (mut nodes, edges) = typical_architecture();
    let baseline = simulate(&nodes, &edges, &traffic(100.0), SimulationOptions::default());

    nodes.push(node("vpc", ServiceType::Vpc));
    nodes.push(node("nat", ServiceType::NatGateway).with_parent("vpc"));
    let with_infra = simulate(&nodes, &edges, &traffic(100.0), SimulationOptions::default());

    assert_eq!(with_infra.performance, baseline.performance);
    assert_eq!(with_infra.cost.breakdown.len(), baseline.cost.breakdown.len());
    assert_eq!(with_infra.availability, baseline.availability);
}

#[test]
fn test_cycle_members_drop_out_of_the_results() {
    let nodes = vec![
        node("dns", ServiceType::Route53),
        node("a", ServiceType::Sqs),
        node("b", ServiceType::Lambda),
    ];
    let edges = vec![edge("dns", "a"), edge("a", "b"), edge("b", "a")];
    let result = simulate(&nodes, &edges, &traffic(10.0), SimulationOptions::default());

    assert_close(result.performance.total_latency, 3.0);
    assert_eq!(result.cost.breakdown.len(), 1);
}
