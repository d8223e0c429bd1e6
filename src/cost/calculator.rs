use super::rates::*;
use crate::diagram::{
    ApiGatewayConfig, ApiType, CapacityMode, CostConfig, DeliveryType, DynamodbConfig,
    Ec2Config, EcsConfig, EksConfig, ElasticacheConfig, KinesisConfig, LambdaConfig, LaunchType,
    NodeGroupType, RdsConfig, S3Config, ServiceConfig, ShieldConfig, ShieldTier, SnsConfig,
    SpecificConfig, SqsConfig, StreamMode, TrafficProfile, WafConfig,
};
use serde::Serialize;

/// Monthly request and transfer volumes derived from a request rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficVolumes {
    pub requests_per_month: f64,
    #[serde(rename = "dataTransferGB")]
    pub data_transfer_gb: f64,
}

impl TrafficVolumes {
    /// `payload_kb` is the average payload per request in kilobytes.
    pub fn from_rps(requests_per_second: f64, payload_kb: f64) -> Self {
        let requests_per_month = requests_per_second * SECONDS_PER_MONTH;
        Self {
            requests_per_month,
            data_transfer_gb: requests_per_month * payload_kb / (1024.0 * 1024.0),
        }
    }

    fn millions(&self) -> f64 {
        self.requests_per_month / MILLION
    }

    fn average_rps(&self) -> f64 {
        self.requests_per_month / SECONDS_PER_MONTH
    }

    fn gb_per_hour(&self) -> f64 {
        self.data_transfer_gb / HOURS_PER_BILLING_MONTH
    }
}

/// Monthly cost of one service at the given volumes.
///
/// `traffic` supplies the read/write split; the request rate itself comes from `volumes`,
/// which callers derive from the rate left after upstream caches.
pub fn service_monthly_cost(
    config: &ServiceConfig,
    volumes: &TrafficVolumes,
    traffic: &TrafficProfile,
) -> f64 {
    let read_ratio = traffic.read_write_ratio;
    match &config.specific {
        SpecificConfig::Route53(_) => route53_cost(volumes),
        SpecificConfig::Cloudfront(_) => cloudfront_cost(volumes),
        SpecificConfig::Alb(_) => alb_cost(volumes),
        SpecificConfig::Nlb(_) => nlb_cost(volumes),
        SpecificConfig::ApiGateway(api) => api_gateway_cost(api, volumes),
        SpecificConfig::Ecs(ecs) => ecs_cost(ecs),
        SpecificConfig::Eks(eks) => eks_cost(eks),
        SpecificConfig::Ec2(ec2) => ec2_cost(ec2),
        SpecificConfig::Lambda(lambda) => lambda_cost(lambda, volumes),
        SpecificConfig::S3(s3) => s3_cost(s3, volumes, read_ratio),
        SpecificConfig::Rds(rds) => rds_cost(rds),
        SpecificConfig::Dynamodb(dynamo) => dynamodb_cost(dynamo, volumes, read_ratio),
        SpecificConfig::Elasticache(cache) => elasticache_cost(cache),
        SpecificConfig::Waf(waf) => waf_cost(waf, volumes),
        SpecificConfig::Shield(shield) => shield_cost(shield),
        SpecificConfig::Sqs(sqs) => sqs_cost(sqs, volumes),
        SpecificConfig::Sns(sns) => sns_cost(sns, volumes),
        SpecificConfig::Kinesis(kinesis) => kinesis_cost(kinesis, volumes),
        SpecificConfig::NatGateway(_) => nat_gateway_cost(volumes),
        SpecificConfig::Vpc(_)
        | SpecificConfig::Subnet(_)
        | SpecificConfig::SecurityGroup(_)
        | SpecificConfig::InternetGateway(_) => generic_cost(&config.cost, volumes),
    }
}

/// `perRequest * requests + perGB * GB + monthly` from the node's own cost record.
pub fn generic_cost(cost: &CostConfig, volumes: &TrafficVolumes) -> f64 {
    cost.per_request.unwrap_or(0.0) * volumes.requests_per_month
        + cost.per_gb.unwrap_or(0.0) * volumes.data_transfer_gb
        + cost.monthly.unwrap_or(0.0)
}

pub fn route53_cost(volumes: &TrafficVolumes) -> f64 {
    volumes.millions() * ROUTE53_PER_MILLION_QUERIES + ROUTE53_HOSTED_ZONE_MONTHLY
}

pub fn cloudfront_cost(volumes: &TrafficVolumes) -> f64 {
    volumes.data_transfer_gb * CLOUDFRONT_PER_GB
        + volumes.requests_per_month / 10_000.0 * CLOUDFRONT_PER_10K_REQUESTS
}

// Capacity units are billed on the larger of the connection and bandwidth dimensions.
pub fn alb_cost(volumes: &TrafficVolumes) -> f64 {
    let lcu = (volumes.average_rps() / ALB_RPS_PER_LCU).max(volumes.gb_per_hour());
    ALB_HOURLY * HOURS_PER_MONTH + lcu * ALB_PER_LCU_HOUR * HOURS_PER_MONTH
}

pub fn nlb_cost(volumes: &TrafficVolumes) -> f64 {
    let nlcu = (volumes.average_rps() / NLB_RPS_PER_NLCU).max(volumes.gb_per_hour());
    NLB_HOURLY * HOURS_PER_MONTH + nlcu * NLB_PER_NLCU_HOUR * HOURS_PER_MONTH
}

pub fn api_gateway_cost(api: &ApiGatewayConfig, volumes: &TrafficVolumes) -> f64 {
    let per_million = match api.api_type {
        ApiType::Rest => API_GATEWAY_REST_PER_MILLION,
        ApiType::Http | ApiType::Websocket => API_GATEWAY_HTTP_PER_MILLION,
    };
    let caching = if api.caching_enabled {
        API_GATEWAY_CACHE_HOURLY * HOURS_PER_MONTH
    } else {
        0.0
    };
    volumes.millions() * per_million + caching
}

/// Fargate tasks are billed per vCPU and GB; EC2-backed tasks are paid for by their instances.
pub fn ecs_cost(ecs: &EcsConfig) -> f64 {
    match ecs.launch_type {
        LaunchType::Fargate => {
            (ecs.cpu * FARGATE_PER_VCPU_HOUR + ecs.memory * FARGATE_PER_GB_HOUR)
                * HOURS_PER_MONTH
                * f64::from(ecs.task_count)
        }
        LaunchType::Ec2 => 0.0,
    }
}

pub fn eks_cost(eks: &EksConfig) -> f64 {
    let control_plane = EKS_CONTROL_PLANE_HOURLY * HOURS_PER_MONTH;
    let nodes = match eks.node_group_type {
        NodeGroupType::Fargate => 0.0,
        NodeGroupType::Managed => {
            tier_rate(EKS_NODE_HOURLY, &eks.instance_type)
                * HOURS_PER_MONTH
                * f64::from(eks.node_count)
        }
    };
    control_plane + nodes
}

pub fn ec2_cost(ec2: &Ec2Config) -> f64 {
    tier_rate(EC2_HOURLY, &ec2.instance_type) * HOURS_PER_MONTH * f64::from(ec2.instance_count)
}

pub fn lambda_cost(lambda: &LambdaConfig, volumes: &TrafficVolumes) -> f64 {
    let requests = volumes.millions() * LAMBDA_PER_MILLION_REQUESTS;
    let gb_seconds = (lambda.memory_mb / 1024.0)
        * (lambda.avg_duration_ms / 1000.0)
        * volumes.requests_per_month;
    requests + gb_seconds * LAMBDA_PER_GB_SECOND
}

pub fn s3_cost(s3: &S3Config, volumes: &TrafficVolumes, read_ratio: f64) -> f64 {
    let reads = volumes.requests_per_month * read_ratio;
    let writes = volumes.requests_per_month - reads;
    s3.storage_gb * S3_STORAGE_PER_GB
        + reads / 1000.0 * S3_PER_1K_GET
        + writes / 1000.0 * S3_PER_1K_PUT
}

pub fn rds_cost(rds: &RdsConfig) -> f64 {
    let hourly = tier_rate(RDS_HOURLY, &rds.instance_class);
    let az_factor = if rds.multi_az { 2.0 } else { 1.0 };
    let instance = hourly * HOURS_PER_MONTH * az_factor;
    let replicas = hourly * HOURS_PER_MONTH * f64::from(rds.read_replicas);
    let storage = rds.storage_gb * RDS_STORAGE_PER_GB * az_factor;
    instance + replicas + storage
}

pub fn dynamodb_cost(dynamo: &DynamodbConfig, volumes: &TrafficVolumes, read_ratio: f64) -> f64 {
    let storage = dynamo.storage_gb * DYNAMODB_STORAGE_PER_GB;
    match dynamo.capacity_mode {
        CapacityMode::OnDemand => {
            let millions = volumes.millions();
            millions * read_ratio * DYNAMODB_PER_MILLION_READS
                + millions * (1.0 - read_ratio) * DYNAMODB_PER_MILLION_WRITES
                + storage
        }
        CapacityMode::Provisioned => {
            (dynamo.read_capacity_units * DYNAMODB_RCU_HOURLY
                + dynamo.write_capacity_units * DYNAMODB_WCU_HOURLY)
                * HOURS_PER_MONTH
                + storage
        }
    }
}

pub fn elasticache_cost(cache: &ElasticacheConfig) -> f64 {
    tier_rate(ELASTICACHE_HOURLY, &cache.node_type) * HOURS_PER_MONTH * f64::from(cache.num_nodes)
}

pub fn waf_cost(waf: &WafConfig, volumes: &TrafficVolumes) -> f64 {
    WAF_WEB_ACL_MONTHLY
        + f64::from(waf.rule_count) * WAF_PER_RULE_MONTHLY
        + volumes.millions() * WAF_PER_MILLION_REQUESTS
}

pub fn shield_cost(shield: &ShieldConfig) -> f64 {
    match shield.tier {
        ShieldTier::Standard => 0.0,
        ShieldTier::Advanced => SHIELD_ADVANCED_MONTHLY,
    }
}

pub fn sqs_cost(sqs: &SqsConfig, volumes: &TrafficVolumes) -> f64 {
    let per_million = match sqs.queue_type {
        DeliveryType::Standard => SQS_STANDARD_PER_MILLION,
        DeliveryType::Fifo => SQS_FIFO_PER_MILLION,
    };
    volumes.millions() * per_million
}

pub fn sns_cost(sns: &SnsConfig, volumes: &TrafficVolumes) -> f64 {
    let millions = volumes.millions();
    millions * SNS_PER_MILLION_PUBLISHES
        + millions * SNS_PER_MILLION_DELIVERIES * f64::from(sns.subscription_count)
}

/// On-demand streams bill ingest plus one estimated shard, and nothing at all when idle.
pub fn kinesis_cost(kinesis: &KinesisConfig, volumes: &TrafficVolumes) -> f64 {
    match kinesis.stream_mode {
        StreamMode::OnDemand => {
            if volumes.requests_per_month > 0.0 {
                volumes.data_transfer_gb * KINESIS_ON_DEMAND_PER_GB
                    + KINESIS_PER_SHARD_HOURLY * HOURS_PER_MONTH
            } else {
                0.0
            }
        }
        StreamMode::Provisioned => {
            (KINESIS_PROVISIONED_SHARD_HOURLY + KINESIS_PER_SHARD_HOURLY)
                * HOURS_PER_MONTH
                * f64::from(kinesis.shard_count)
        }
    }
}

pub fn nat_gateway_cost(volumes: &TrafficVolumes) -> f64 {
    NAT_GATEWAY_HOURLY * HOURS_PER_MONTH + volumes.data_transfer_gb * NAT_GATEWAY_PER_GB
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::ServiceNode;
    use crate::service::ServiceType;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn idle() -> TrafficVolumes {
        TrafficVolumes::from_rps(0.0, 10.0)
    }

    #[test]
    fn volumes() {
        let v = TrafficVolumes::from_rps(1.0, 1024.0);
        assert_close(v.requests_per_month, 2_592_000.0);
        assert_close(v.data_transfer_gb, 2_592_000.0 / 1024.0);
    }

    #[test]
    fn request_metered_services_are_free_when_idle() {
        assert_close(cloudfront_cost(&idle()), 0.0);
        assert_close(sqs_cost(&SqsConfig::default(), &idle()), 0.0);
        assert_close(sns_cost(&SnsConfig::default(), &idle()), 0.0);
        assert_close(lambda_cost(&LambdaConfig::default(), &idle()), 0.0);
        assert_close(kinesis_cost(&KinesisConfig::default(), &idle()), 0.0);
    }

    #[test]
    fn fixed_charges_survive_idle_traffic() {
        assert_close(route53_cost(&idle()), 0.5);
        assert_close(alb_cost(&idle()), 0.0225 * 730.0);
        assert_close(nat_gateway_cost(&idle()), 0.045 * 730.0);
        assert_close(waf_cost(&WafConfig::default(), &idle()), 15.0);
    }

    #[test]
    fn ec2_uses_hourly_rate_times_count() {
        let ec2 = Ec2Config {
            instance_type: "t3.medium".to_string(),
            instance_count: 3,
            auto_scaling: false,
        };
        assert_close(ec2_cost(&ec2), 0.0416 * 730.0 * 3.0);

        let unknown = Ec2Config {
            instance_type: "x9.huge".to_string(),
            ..ec2
        };
        assert_close(ec2_cost(&unknown), 0.0104 * 730.0 * 3.0);
    }

    #[test]
    fn rds_multi_az_doubles_instance_and_storage() {
        let rds = RdsConfig {
            instance_class: "db.t3.small".to_string(),
            multi_az: true,
            read_replicas: 1,
            storage_gb: 100.0,
        };
        let expected = 0.034 * 730.0 * 2.0 + 0.034 * 730.0 + 100.0 * 0.115 * 2.0;
        assert_close(rds_cost(&rds), expected);
    }

    #[test]
    fn eks_fargate_pays_control_plane_only() {
        let eks = EksConfig {
            node_group_type: NodeGroupType::Fargate,
            ..EksConfig::default()
        };
        assert_close(eks_cost(&eks), 73.0);
        assert_close(eks_cost(&EksConfig::default()), 73.0 + 0.0416 * 730.0 * 2.0);
    }

    #[test]
    fn ecs_ec2_launch_type_is_free() {
        let ecs = EcsConfig {
            launch_type: LaunchType::Ec2,
            ..EcsConfig::default()
        };
        assert_close(ecs_cost(&ecs), 0.0);
        assert_close(
            ecs_cost(&EcsConfig::default()),
            (0.25 * 0.04048 + 0.5 * 0.004445) * 730.0 * 2.0,
        );
    }

    #[test]
    fn lambda_compute_charge() {
        let volumes = TrafficVolumes::from_rps(10.0, 1.0);
        let lambda = LambdaConfig {
            memory_mb: 512.0,
            avg_duration_ms: 100.0,
            ..LambdaConfig::default()
        };
        let requests = volumes.requests_per_month;
        let expected = requests / 1e6 * 0.2 + 0.5 * 0.1 * requests * 0.0000166667;
        assert_close(lambda_cost(&lambda, &volumes), expected);
    }

    #[test]
    fn queue_type_selects_rate() {
        let volumes = TrafficVolumes::from_rps(100.0, 1.0);
        let fifo = SqsConfig {
            queue_type: DeliveryType::Fifo,
            ..SqsConfig::default()
        };
        let millions = volumes.requests_per_month / 1e6;
        assert_close(sqs_cost(&SqsConfig::default(), &volumes), millions * 0.4);
        assert_close(sqs_cost(&fifo, &volumes), millions * 0.5);
    }

    #[test]
    fn dispatch_follows_specific_config() {
        let volumes = TrafficVolumes::from_rps(0.0, 10.0);
        let traffic = TrafficProfile::default();
        let node = ServiceNode::new("dns", ServiceType::Route53);
        assert_close(service_monthly_cost(&node.config, &volumes, &traffic), 0.5);

        let vpc = ServiceNode::new("vpc", ServiceType::Vpc);
        assert_close(service_monthly_cost(&vpc.config, &volumes, &traffic), 0.0);
    }
}
