use super::ServiceType;
use crate::diagram::{
    CacheConfig, CostConfig, LatencyConfig, SecurityConfig, ServiceConfig, SpecificConfig,
};

fn latency(base: f64, per_request: Option<f64>) -> LatencyConfig {
    LatencyConfig { base, per_request }
}

fn cost(per_request: Option<f64>, per_gb: Option<f64>, monthly: Option<f64>) -> CostConfig {
    CostConfig {
        per_request,
        per_gb,
        monthly,
    }
}

fn cache(ttl: f64, hit_rate: f64) -> Option<CacheConfig> {
    Some(CacheConfig {
        enabled: true,
        ttl,
        hit_rate,
    })
}

fn security(waf: bool, ddos_protection: bool, encryption: bool) -> Option<SecurityConfig> {
    Some(SecurityConfig {
        waf,
        ddos_protection,
        encryption,
    })
}

/// The configuration a freshly placed node starts with.
pub fn default_config(service_type: ServiceType) -> ServiceConfig {
    use ServiceType::*;

    let (latency_config, cost_config, cache_config, security_config) = match service_type {
        Route53 => (latency(3.0, None), cost(Some(0.000_000_5), None, Some(0.5)), None, None),
        Cloudfront => (
            latency(20.0, None),
            cost(Some(0.000_000_75), Some(0.085), None),
            cache(86_400.0, 0.85),
            security(false, true, false),
        ),
        Alb => (latency(5.0, None), cost(None, None, Some(16.2)), None, None),
        Nlb => (latency(3.0, None), cost(None, None, Some(16.2)), None, None),
        ApiGateway => (latency(30.0, None), cost(Some(0.000_003_5), None, None), None, None),
        Ecs => (latency(50.0, Some(0.5)), cost(None, None, Some(0.0)), None, None),
        Eks => (latency(50.0, Some(0.5)), cost(None, None, Some(73.0)), None, None),
        Ec2 => (latency(50.0, Some(0.5)), cost(None, None, Some(8.5)), None, None),
        Lambda => (latency(100.0, None), cost(Some(0.000_000_2), None, None), None, None),
        S3 => (
            latency(15.0, None),
            cost(Some(0.000_000_4), Some(0.023), None),
            None,
            security(false, false, true),
        ),
        Rds => (
            latency(3.0, Some(0.1)),
            cost(None, None, Some(25.0)),
            None,
            security(false, false, true),
        ),
        Dynamodb => (
            latency(5.0, Some(0.05)),
            cost(Some(0.000_001_25), None, Some(0.0)),
            None,
            security(false, false, true),
        ),
        Elasticache => (
            latency(1.0, None),
            cost(None, None, Some(12.5)),
            cache(300.0, 0.9),
            None,
        ),
        Sqs => (latency(10.0, None), cost(Some(0.000_000_4), None, None), None, None),
        Sns => (latency(5.0, None), cost(Some(0.000_000_5), None, None), None, None),
        Kinesis => (latency(8.0, None), cost(None, None, Some(0.0)), None, None),
        Waf => (
            latency(2.0, None),
            cost(Some(0.000_000_6), None, Some(5.0)),
            None,
            security(true, false, false),
        ),
        Shield => (
            latency(0.0, None),
            cost(None, None, Some(0.0)),
            None,
            security(false, true, false),
        ),
        NatGateway => (latency(1.0, None), cost(None, Some(0.045), Some(32.4)), None, None),
        Vpc | Subnet | SecurityGroup | InternetGateway => {
            (latency(0.0, None), cost(None, None, Some(0.0)), None, None)
        }
    };

    ServiceConfig {
        name: service_type.label().to_string(),
        region: None,
        cache: cache_config,
        latency: latency_config,
        cost: cost_config,
        security: security_config,
        specific: SpecificConfig::default_for(service_type),
    }
}
