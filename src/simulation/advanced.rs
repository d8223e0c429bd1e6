//! Optional analytics: per-service latency percentiles, scalability, and a
//! categorised cost breakdown.

use super::engine::{flow_nodes, round_to};
use crate::cost::{TrafficVolumes, service_monthly_cost};
use crate::diagram::{LaunchType, NodeGroupType, ServiceNode, SpecificConfig, TrafficProfile};
use crate::rules::latency_range;
use crate::service::ServiceType;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedResult {
    pub latency_breakdown: LatencyBreakdown,
    pub scalability: Scalability,
    pub operational_cost: CostCategoryBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLatency {
    pub service: String,
    pub service_type: ServiceType,
    pub base_ms: f64,
    pub p50_ms: f64,
    pub p99_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyBreakdown {
    pub per_service: Vec<ServiceLatency>,
    pub total_p50: f64,
    pub total_p99: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCapacity {
    pub service: String,
    pub current_capacity: f64,
    pub max_capacity: f64,
    pub is_fargate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scalability {
    pub bottleneck_service: Option<String>,
    #[serde(rename = "maxRPS")]
    pub max_rps: f64,
    pub headroom_percent: f64,
    pub auto_scaling_enabled: bool,
    pub per_service: Vec<ServiceCapacity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    Compute,
    Storage,
    DataTransfer,
    Requests,
}

impl CostCategory {
    pub fn of(service_type: ServiceType) -> Self {
        use ServiceType::*;
        match service_type {
            Ecs | Eks | Ec2 | Lambda => CostCategory::Compute,
            Rds | S3 | Dynamodb | Elasticache => CostCategory::Storage,
            Cloudfront | NatGateway => CostCategory::DataTransfer,
            _ => CostCategory::Requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedCost {
    pub service: String,
    pub category: CostCategory,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategoryBreakdown {
    pub compute: f64,
    pub storage: f64,
    pub data_transfer: f64,
    pub requests: f64,
    pub per_service: Vec<CategorizedCost>,
}

pub fn calculate_advanced(ordered: &[&ServiceNode], traffic: &TrafficProfile) -> AdvancedResult {
    AdvancedResult {
        latency_breakdown: latency_breakdown(ordered),
        scalability: scalability(ordered, traffic),
        operational_cost: cost_breakdown(ordered, traffic),
    }
}

/// Percentiles per hop, interpolated inside the hop's tabled latency range.
pub fn latency_breakdown(ordered: &[&ServiceNode]) -> LatencyBreakdown {
    let per_service: Vec<ServiceLatency> = flow_nodes(ordered)
        .map(|node| {
            let range = latency_range(node.service_type, node.config.latency.base);
            let p50 = range.min + (range.base - range.min) * 0.6;
            let p99 = range.base + (range.max - range.base) * 0.9;
            ServiceLatency {
                service: node.config.name.clone(),
                service_type: node.service_type,
                base_ms: range.base,
                p50_ms: round_to(p50, 2),
                p99_ms: round_to(p99, 2),
            }
        })
        .collect();

    let total_p50 = round_to(per_service.iter().fold(0.0, |acc, s| acc + s.p50_ms), 2);
    let total_p99 = round_to(per_service.iter().fold(0.0, |acc, s| acc + s.p99_ms), 2);

    LatencyBreakdown {
        per_service,
        total_p50,
        total_p99,
    }
}

struct Throughput {
    max_rps: f64,
    is_fargate: bool,
    auto_scaling: bool,
}

/// Throughput ceiling for compute-class nodes; `None` for everything else.
fn max_throughput(node: &ServiceNode) -> Option<Throughput> {
    let per_unit = 1000.0 / node.config.latency.base.max(1.0);

    let throughput = match &node.config.specific {
        SpecificConfig::Ecs(ecs) => {
            let units = if ecs.auto_scaling.enabled {
                ecs.auto_scaling.max
            } else {
                ecs.task_count
            };
            Throughput {
                max_rps: f64::from(units) * per_unit,
                is_fargate: ecs.launch_type == LaunchType::Fargate,
                auto_scaling: ecs.auto_scaling.enabled,
            }
        }
        SpecificConfig::Eks(eks) => {
            let units = if eks.auto_scaling.enabled {
                eks.auto_scaling.max
            } else {
                eks.node_count
            };
            Throughput {
                max_rps: f64::from(units) * per_unit,
                is_fargate: eks.node_group_type == NodeGroupType::Fargate,
                auto_scaling: eks.auto_scaling.enabled,
            }
        }
        SpecificConfig::Ec2(ec2) => Throughput {
            max_rps: f64::from(ec2.instance_count) * per_unit,
            is_fargate: false,
            auto_scaling: ec2.auto_scaling,
        },
        SpecificConfig::Lambda(lambda) => Throughput {
            max_rps: lambda.concurrency,
            is_fargate: false,
            auto_scaling: true,
        },
        SpecificConfig::ApiGateway(api) => Throughput {
            max_rps: api.throttling_rate,
            is_fargate: false,
            auto_scaling: true,
        },
        _ => return None,
    };
    Some(throughput)
}

pub fn scalability(ordered: &[&ServiceNode], traffic: &TrafficProfile) -> Scalability {
    let compute: Vec<(&ServiceNode, Throughput)> = flow_nodes(ordered)
        .filter_map(|node| max_throughput(node).map(|t| (node, t)))
        .collect();

    // The first node wins ties.
    let Some((bottleneck, limit)) = compute
        .iter()
        .reduce(|min, e| if e.1.max_rps < min.1.max_rps { e } else { min })
    else {
        return Scalability {
            bottleneck_service: None,
            max_rps: 0.0,
            headroom_percent: 0.0,
            auto_scaling_enabled: false,
            per_service: Vec::new(),
        };
    };

    let max_rps = limit.max_rps.round();
    let headroom_percent = if max_rps > 0.0 {
        round_to((max_rps - traffic.requests_per_second) / max_rps * 100.0, 0).max(0.0)
    } else {
        0.0
    };
    debug!(bottleneck = %bottleneck.config.name, max_rps, "Scalability bottleneck");

    Scalability {
        bottleneck_service: Some(bottleneck.config.name.clone()),
        max_rps,
        headroom_percent,
        auto_scaling_enabled: compute.iter().all(|(_, t)| t.auto_scaling),
        per_service: compute
            .iter()
            .map(|(node, t)| ServiceCapacity {
                service: node.config.name.clone(),
                current_capacity: traffic.requests_per_second,
                max_capacity: t.max_rps.round(),
                is_fargate: t.is_fargate,
            })
            .collect(),
    }
}

/// Buckets each flow node's full-traffic monthly cost into one category.
pub fn cost_breakdown(ordered: &[&ServiceNode], traffic: &TrafficProfile) -> CostCategoryBreakdown {
    let volumes =
        TrafficVolumes::from_rps(traffic.requests_per_second, traffic.average_payload_size);

    let per_service: Vec<CategorizedCost> = flow_nodes(ordered)
        .map(|node| CategorizedCost {
            service: node.config.name.clone(),
            category: CostCategory::of(node.service_type),
            amount: service_monthly_cost(&node.config, &volumes, traffic),
        })
        .collect();

    let total = |category: CostCategory| {
        round_to(
            per_service
                .iter()
                .filter(|e| e.category == category)
                .fold(0.0, |acc, e| acc + e.amount),
            2,
        )
    };

    CostCategoryBreakdown {
        compute: total(CostCategory::Compute),
        storage: total(CostCategory::Storage),
        data_transfer: total(CostCategory::DataTransfer),
        requests: total(CostCategory::Requests),
        per_service,
    }
}
