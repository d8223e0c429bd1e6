use crate::service::ServiceType::{self, *};
use serde::Serialize;

/// Millisecond bounds for a single hop through a service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyRange {
    pub min: f64,
    pub base: f64,
    pub max: f64,
}

const fn range(min: f64, base: f64, max: f64) -> LatencyRange {
    LatencyRange { min, base, max }
}

pub const LATENCY_TABLE: &[(ServiceType, LatencyRange)] = &[
    (Route53, range(1.0, 3.0, 10.0)),
    (Cloudfront, range(5.0, 20.0, 60.0)),
    (Alb, range(2.0, 5.0, 15.0)),
    (Nlb, range(1.0, 3.0, 8.0)),
    (ApiGateway, range(10.0, 30.0, 100.0)),
    (Ecs, range(20.0, 50.0, 200.0)),
    (Eks, range(20.0, 50.0, 200.0)),
    (Ec2, range(20.0, 50.0, 200.0)),
    (Lambda, range(20.0, 100.0, 1000.0)),
    (S3, range(5.0, 15.0, 50.0)),
    (Rds, range(1.0, 3.0, 20.0)),
    (Dynamodb, range(2.0, 5.0, 15.0)),
    (Elasticache, range(0.5, 1.0, 3.0)),
    (Sqs, range(5.0, 10.0, 30.0)),
    (Sns, range(2.0, 5.0, 20.0)),
    (Kinesis, range(3.0, 8.0, 25.0)),
    (Waf, range(1.0, 2.0, 5.0)),
];

/// The tabled range for `service_type`, or `{0, base, 2 * base}` for unlisted types.
pub fn latency_range(service_type: ServiceType, configured_base: f64) -> LatencyRange {
    LATENCY_TABLE
        .iter()
        .find(|(t, _)| *t == service_type)
        .map(|(_, r)| *r)
        .unwrap_or(range(0.0, configured_base, configured_base * 2.0))
}
