use crate::cost::{TrafficVolumes, service_monthly_cost};
use crate::diagram::{Edge, ServiceNode, SpecificConfig, SubnetType, TrafficProfile};
use crate::rules::{self, DATA_STORE_TYPES};
use crate::service::ServiceType;
use serde::{Deserialize, Serialize};

const P50_MULTIPLIER: f64 = 0.9;
const P99_MULTIPLIER: f64 = 1.8;
const FEATURE_POINTS: u32 = 20;
const VPC_BONUS: u32 = 10;
const PRIVATE_VPC_BONUS: u32 = 20;
const BASE_UPTIME: f64 = 0.99;
const MAX_UPTIME: f64 = 0.9999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResult {
    /// Sum of every flow node's base latency, ms.
    pub total_latency: f64,
    pub p50_latency: f64,
    pub p99_latency: f64,
    /// Base latency of the first flow node, ms.
    pub ttfb: f64,
    pub cache_hit_rate: f64,
    /// Requests per second left after every cache layer.
    pub requests_reaching_origin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    pub service: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    pub monthly: f64,
    pub per_request: f64,
    pub breakdown: Vec<CostEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityResult {
    pub ddos_protection: bool,
    pub waf_enabled: bool,
    pub encryption_in_transit: bool,
    pub encryption_at_rest: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    /// Names of the flow nodes with no redundancy, in flow order.
    pub single_points_of_failure: Vec<String>,
    pub redundancy_score: u32,
    pub estimated_uptime: f64,
}

pub(crate) fn flow_nodes<'a>(ordered: &[&'a ServiceNode]) -> impl Iterator<Item = &'a ServiceNode> {
    ordered.iter().copied().filter(|n| n.is_flow())
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    // Adding zero turns -0.0 into 0.0.
    (value * factor).round() / factor + 0.0
}

/// Walks the flow order summing latency; each cache removes its hit rate from the
/// traffic that survived the caches before it.
pub fn calculate_performance(
    ordered: &[&ServiceNode],
    traffic: &TrafficProfile,
) -> PerformanceResult {
    let initial = traffic.requests_per_second;

    let (total_latency, remaining) =
        flow_nodes(ordered).fold((0.0, initial), |(latency, remaining), node| {
            let filtered = node
                .config
                .active_cache_hit_rate()
                .map_or(0.0, |hit_rate| remaining * hit_rate);
            (latency + node.config.latency.base, remaining - filtered)
        });

    let ttfb = flow_nodes(ordered)
        .next()
        .map_or(0.0, |first| first.config.latency.base);

    PerformanceResult {
        total_latency,
        p50_latency: total_latency * P50_MULTIPLIER,
        p99_latency: total_latency * P99_MULTIPLIER,
        ttfb,
        cache_hit_rate: if initial > 0.0 {
            1.0 - remaining / initial
        } else {
            0.0
        },
        requests_reaching_origin: remaining,
    }
}

/// Prices each flow node at the request rate that reaches it.
pub fn calculate_cost(ordered: &[&ServiceNode], traffic: &TrafficProfile) -> CostResult {
    struct Acc {
        breakdown: Vec<CostEntry>,
        total: f64,
        effective_rps: f64,
    }

    let acc = flow_nodes(ordered).fold(
        Acc {
            breakdown: Vec::new(),
            total: 0.0,
            effective_rps: traffic.requests_per_second,
        },
        |mut acc, node| {
            let volumes = TrafficVolumes::from_rps(acc.effective_rps, traffic.average_payload_size);
            let amount = service_monthly_cost(&node.config, &volumes, traffic);
            acc.breakdown.push(CostEntry {
                service: node.config.name.clone(),
                amount,
            });
            acc.total += amount;
            if let Some(hit_rate) = node.config.active_cache_hit_rate() {
                acc.effective_rps *= 1.0 - hit_rate;
            }
            acc
        },
    );

    let requests_per_month =
        TrafficVolumes::from_rps(traffic.requests_per_second, traffic.average_payload_size)
            .requests_per_month;

    CostResult {
        monthly: acc.total,
        per_request: if requests_per_month > 0.0 {
            acc.total / requests_per_month
        } else {
            0.0
        },
        breakdown: acc.breakdown,
    }
}

pub fn analyze_security(ordered: &[&ServiceNode], edges: &[Edge]) -> SecurityResult {
    let ddos_protection = flow_nodes(ordered).any(|n| n.config.security_flags().ddos_protection);
    let waf_enabled = flow_nodes(ordered).any(|n| n.config.security_flags().waf);
    let encryption_in_transit = edges
        .iter()
        .all(|e| rules::is_secure_label(e.protocol.as_deref()));
    let encryption_at_rest = flow_nodes(ordered)
        .filter(|n| DATA_STORE_TYPES.contains(&n.service_type))
        .all(|n| n.config.security_flags().encryption);

    let features = [
        ddos_protection,
        waf_enabled,
        encryption_in_transit,
        encryption_at_rest,
    ];
    let base: u32 = features.iter().filter(|f| **f).count() as u32 * FEATURE_POINTS;

    SecurityResult {
        ddos_protection,
        waf_enabled,
        encryption_in_transit,
        encryption_at_rest,
        score: (base + network_bonus(ordered)).min(100),
    }
}

/// A VPC earns a bonus, doubled when a private subnet sits inside it.
fn network_bonus(ordered: &[&ServiceNode]) -> u32 {
    let is_vpc = |id: &str| {
        ordered
            .iter()
            .any(|n| n.id == id && n.service_type == ServiceType::Vpc)
    };
    let has_vpc = ordered.iter().any(|n| n.service_type == ServiceType::Vpc);
    let has_private_subnet = ordered.iter().any(|n| {
        matches!(
            &n.config.specific,
            SpecificConfig::Subnet(subnet) if subnet.subnet_type == SubnetType::Private
        ) && n.parent_id.as_deref().is_some_and(is_vpc)
    });

    match (has_vpc, has_private_subnet) {
        (true, true) => PRIVATE_VPC_BONUS,
        (true, false) => VPC_BONUS,
        _ => 0,
    }
}

/// Whether a node survives the loss of one instance.
pub fn is_redundant(node: &ServiceNode) -> bool {
    match &node.config.specific {
        SpecificConfig::Ecs(ecs) => {
            ecs.task_count > 1 || (ecs.auto_scaling.enabled && ecs.auto_scaling.max > 1)
        }
        SpecificConfig::Eks(eks) => {
            eks.node_count > 1 || (eks.auto_scaling.enabled && eks.auto_scaling.max > 1)
        }
        SpecificConfig::Ec2(ec2) => ec2.instance_count > 1,
        SpecificConfig::Elasticache(cache) => cache.num_nodes > 1,
        SpecificConfig::Rds(rds) => rds.multi_az || rds.read_replicas >= 1,
        SpecificConfig::Alb(alb) => alb.target_count > 1,
        SpecificConfig::Nlb(nlb) => nlb.target_count > 1,
        SpecificConfig::Cloudfront(_)
        | SpecificConfig::Route53(_)
        | SpecificConfig::S3(_)
        | SpecificConfig::Dynamodb(_)
        | SpecificConfig::Lambda(_)
        | SpecificConfig::Sqs(_)
        | SpecificConfig::Sns(_)
        | SpecificConfig::Kinesis(_) => true,
        _ => false,
    }
}

pub fn analyze_availability(ordered: &[&ServiceNode]) -> AvailabilityResult {
    let (redundant, fragile): (Vec<&ServiceNode>, Vec<&ServiceNode>) =
        flow_nodes(ordered).partition(|n| is_redundant(n));
    let total = redundant.len() + fragile.len();

    if total == 0 {
        return AvailabilityResult {
            single_points_of_failure: Vec::new(),
            redundancy_score: 100,
            estimated_uptime: MAX_UPTIME,
        };
    }

    let redundancy_score = (redundant.len() as f64 / total as f64 * 100.0).round() as u32;
    let uptime = BASE_UPTIME + (MAX_UPTIME - BASE_UPTIME) * f64::from(redundancy_score) / 100.0;

    AvailabilityResult {
        single_points_of_failure: fragile.iter().map(|n| n.config.name.clone()).collect(),
        redundancy_score,
        estimated_uptime: round_to(uptime, 4),
    }
}
