//! Published list prices, in currency units.

pub const HOURS_PER_MONTH: f64 = 730.0;
pub const SECONDS_PER_MONTH: f64 = 30.0 * 24.0 * 3600.0;
pub const MILLION: f64 = 1_000_000.0;

pub const ROUTE53_PER_MILLION_QUERIES: f64 = 0.40;
pub const ROUTE53_HOSTED_ZONE_MONTHLY: f64 = 0.50;

pub const CLOUDFRONT_PER_GB: f64 = 0.085;
pub const CLOUDFRONT_PER_10K_REQUESTS: f64 = 0.0075;

pub const ALB_HOURLY: f64 = 0.0225;
pub const ALB_PER_LCU_HOUR: f64 = 0.008;
/// New connections per second one LCU covers.
pub const ALB_RPS_PER_LCU: f64 = 25.0;
pub const NLB_HOURLY: f64 = 0.0225;
pub const NLB_PER_NLCU_HOUR: f64 = 0.006;
pub const NLB_RPS_PER_NLCU: f64 = 800.0;
/// Processed bytes are averaged over a 30-day month.
pub const HOURS_PER_BILLING_MONTH: f64 = 720.0;

pub const API_GATEWAY_REST_PER_MILLION: f64 = 3.50;
pub const API_GATEWAY_HTTP_PER_MILLION: f64 = 1.00;
pub const API_GATEWAY_CACHE_HOURLY: f64 = 0.02;

pub const FARGATE_PER_VCPU_HOUR: f64 = 0.04048;
pub const FARGATE_PER_GB_HOUR: f64 = 0.004445;

pub const EC2_HOURLY: &[(&str, f64)] = &[
    ("t3.micro", 0.0104),
    ("t3.small", 0.0208),
    ("t3.medium", 0.0416),
    ("t3.large", 0.0832),
    ("t3.xlarge", 0.1664),
];

pub const EKS_CONTROL_PLANE_HOURLY: f64 = 0.10;
pub const EKS_NODE_HOURLY: &[(&str, f64)] = &[
    ("t3.medium", 0.0416),
    ("t3.large", 0.0832),
    ("t3.xlarge", 0.1664),
];

pub const LAMBDA_PER_MILLION_REQUESTS: f64 = 0.20;
pub const LAMBDA_PER_GB_SECOND: f64 = 0.000_016_666_7;

pub const S3_STORAGE_PER_GB: f64 = 0.023;
pub const S3_PER_1K_GET: f64 = 0.0004;
pub const S3_PER_1K_PUT: f64 = 0.005;

pub const RDS_HOURLY: &[(&str, f64)] = &[
    ("db.t3.micro", 0.017),
    ("db.t3.small", 0.034),
    ("db.t3.medium", 0.068),
    ("db.t3.large", 0.136),
];
pub const RDS_STORAGE_PER_GB: f64 = 0.115;

pub const DYNAMODB_PER_MILLION_READS: f64 = 0.25;
pub const DYNAMODB_PER_MILLION_WRITES: f64 = 1.25;
pub const DYNAMODB_RCU_HOURLY: f64 = 0.00013;
pub const DYNAMODB_WCU_HOURLY: f64 = 0.00065;
pub const DYNAMODB_STORAGE_PER_GB: f64 = 0.25;

pub const ELASTICACHE_HOURLY: &[(&str, f64)] = &[
    ("cache.t3.micro", 0.017),
    ("cache.t3.small", 0.034),
    ("cache.t3.medium", 0.068),
];

pub const WAF_WEB_ACL_MONTHLY: f64 = 5.0;
pub const WAF_PER_RULE_MONTHLY: f64 = 1.0;
pub const WAF_PER_MILLION_REQUESTS: f64 = 0.60;

pub const SHIELD_ADVANCED_MONTHLY: f64 = 3000.0;

pub const SQS_STANDARD_PER_MILLION: f64 = 0.40;
pub const SQS_FIFO_PER_MILLION: f64 = 0.50;

pub const SNS_PER_MILLION_PUBLISHES: f64 = 0.50;
pub const SNS_PER_MILLION_DELIVERIES: f64 = 0.09;

pub const KINESIS_ON_DEMAND_PER_GB: f64 = 0.08;
/// PUT payload units, billed per shard-hour in both stream modes.
pub const KINESIS_PER_SHARD_HOURLY: f64 = 0.04;
pub const KINESIS_PROVISIONED_SHARD_HOURLY: f64 = 0.015;

pub const NAT_GATEWAY_HOURLY: f64 = 0.045;
pub const NAT_GATEWAY_PER_GB: f64 = 0.045;

/// Looks up a size in a tier table, falling back to the first (cheapest) tier.
pub fn tier_rate(table: &[(&str, f64)], size: &str) -> f64 {
    table
        .iter()
        .find(|(name, _)| *name == size)
        .or_else(|| table.first())
        .map(|(_, rate)| *rate)
        .unwrap_or(0.0)
}
