use crate::service::ServiceType;
use serde::{Deserialize, Serialize};

/// Service-specific parameters, one variant per service type.
///
/// On the wire this is the bare parameter object; which variant it decodes into is
/// decided by the owning node's `serviceType`, see [`SpecificConfig::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpecificConfig {
    Route53(Route53Config),
    Cloudfront(CloudfrontConfig),
    Alb(AlbConfig),
    Nlb(NlbConfig),
    ApiGateway(ApiGatewayConfig),
    Ecs(EcsConfig),
    Eks(EksConfig),
    Ec2(Ec2Config),
    Lambda(LambdaConfig),
    S3(S3Config),
    Rds(RdsConfig),
    Elasticache(ElasticacheConfig),
    Waf(WafConfig),
    Shield(ShieldConfig),
    Dynamodb(DynamodbConfig),
    Sqs(SqsConfig),
    Sns(SnsConfig),
    Kinesis(KinesisConfig),
    Vpc(VpcConfig),
    Subnet(SubnetConfig),
    SecurityGroup(SecurityGroupConfig),
    NatGateway(NatGatewayConfig),
    InternetGateway(InternetGatewayConfig),
}

impl SpecificConfig {
    /// The default parameter bag for a service type.
    pub fn default_for(service_type: ServiceType) -> Self {
        match service_type {
            ServiceType::Route53 => Self::Route53(Default::default()),
            ServiceType::Cloudfront => Self::Cloudfront(Default::default()),
            ServiceType::Alb => Self::Alb(Default::default()),
            ServiceType::Nlb => Self::Nlb(Default::default()),
            ServiceType::ApiGateway => Self::ApiGateway(Default::default()),
            ServiceType::Ecs => Self::Ecs(Default::default()),
            ServiceType::Eks => Self::Eks(Default::default()),
            ServiceType::Ec2 => Self::Ec2(Default::default()),
            ServiceType::Lambda => Self::Lambda(Default::default()),
            ServiceType::S3 => Self::S3(Default::default()),
            ServiceType::Rds => Self::Rds(Default::default()),
            ServiceType::Elasticache => Self::Elasticache(Default::default()),
            ServiceType::Waf => Self::Waf(Default::default()),
            ServiceType::Shield => Self::Shield(Default::default()),
            ServiceType::Dynamodb => Self::Dynamodb(Default::default()),
            ServiceType::Sqs => Self::Sqs(Default::default()),
            ServiceType::Sns => Self::Sns(Default::default()),
            ServiceType::Kinesis => Self::Kinesis(Default::default()),
            ServiceType::Vpc => Self::Vpc(Default::default()),
            ServiceType::Subnet => Self::Subnet(Default::default()),
            ServiceType::SecurityGroup => Self::SecurityGroup(Default::default()),
            ServiceType::NatGateway => Self::NatGateway(Default::default()),
            ServiceType::InternetGateway => Self::InternetGateway(Default::default()),
        }
    }

    /// The service type this parameter bag belongs to.
    pub fn service_type(&self) -> ServiceType {
        match self {
            Self::Route53(_) => ServiceType::Route53,
            Self::Cloudfront(_) => ServiceType::Cloudfront,
            Self::Alb(_) => ServiceType::Alb,
            Self::Nlb(_) => ServiceType::Nlb,
            Self::ApiGateway(_) => ServiceType::ApiGateway,
            Self::Ecs(_) => ServiceType::Ecs,
            Self::Eks(_) => ServiceType::Eks,
            Self::Ec2(_) => ServiceType::Ec2,
            Self::Lambda(_) => ServiceType::Lambda,
            Self::S3(_) => ServiceType::S3,
            Self::Rds(_) => ServiceType::Rds,
            Self::Elasticache(_) => ServiceType::Elasticache,
            Self::Waf(_) => ServiceType::Waf,
            Self::Shield(_) => ServiceType::Shield,
            Self::Dynamodb(_) => ServiceType::Dynamodb,
            Self::Sqs(_) => ServiceType::Sqs,
            Self::Sns(_) => ServiceType::Sns,
            Self::Kinesis(_) => ServiceType::Kinesis,
            Self::Vpc(_) => ServiceType::Vpc,
            Self::Subnet(_) => ServiceType::Subnet,
            Self::SecurityGroup(_) => ServiceType::SecurityGroup,
            Self::NatGateway(_) => ServiceType::NatGateway,
            Self::InternetGateway(_) => ServiceType::InternetGateway,
        }
    }

    /// Decodes a raw parameter object as the variant belonging to `service_type`.
    ///
    /// Missing fields take their defaults; unknown fields are ignored.
    pub fn from_value(
        service_type: ServiceType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match service_type {
            ServiceType::Route53 => Self::Route53(serde_json::from_value(value)?),
            ServiceType::Cloudfront => Self::Cloudfront(serde_json::from_value(value)?),
            ServiceType::Alb => Self::Alb(serde_json::from_value(value)?),
            ServiceType::Nlb => Self::Nlb(serde_json::from_value(value)?),
            ServiceType::ApiGateway => Self::ApiGateway(serde_json::from_value(value)?),
            ServiceType::Ecs => Self::Ecs(serde_json::from_value(value)?),
            ServiceType::Eks => Self::Eks(serde_json::from_value(value)?),
            ServiceType::Ec2 => Self::Ec2(serde_json::from_value(value)?),
            ServiceType::Lambda => Self::Lambda(serde_json::from_value(value)?),
            ServiceType::S3 => Self::S3(serde_json::from_value(value)?),
            ServiceType::Rds => Self::Rds(serde_json::from_value(value)?),
            ServiceType::Elasticache => Self::Elasticache(serde_json::from_value(value)?),
            ServiceType::Waf => Self::Waf(serde_json::from_value(value)?),
            ServiceType::Shield => Self::Shield(serde_json::from_value(value)?),
            ServiceType::Dynamodb => Self::Dynamodb(serde_json::from_value(value)?),
            ServiceType::Sqs => Self::Sqs(serde_json::from_value(value)?),
            ServiceType::Sns => Self::Sns(serde_json::from_value(value)?),
            ServiceType::Kinesis => Self::Kinesis(serde_json::from_value(value)?),
            ServiceType::Vpc => Self::Vpc(serde_json::from_value(value)?),
            ServiceType::Subnet => Self::Subnet(serde_json::from_value(value)?),
            ServiceType::SecurityGroup => Self::SecurityGroup(serde_json::from_value(value)?),
            ServiceType::NatGateway => Self::NatGateway(serde_json::from_value(value)?),
            ServiceType::InternetGateway => Self::InternetGateway(serde_json::from_value(value)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingPolicy {
    #[default]
    Simple,
    Weighted,
    Latency,
    Failover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route53Config {
    pub routing_policy: RoutingPolicy,
    pub health_check_enabled: bool,
}

impl Default for Route53Config {
    fn default() -> Self {
        Self {
            routing_policy: RoutingPolicy::Simple,
            health_check_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudfrontConfig {
    pub edge_locations: u32,
    pub behaviors: u32,
    pub origin_shield: bool,
    pub compression_enabled: bool,
}

impl Default for CloudfrontConfig {
    fn default() -> Self {
        Self {
            edge_locations: 200,
            behaviors: 1,
            origin_shield: false,
            compression_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    #[default]
    Instance,
    Ip,
    Lambda,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbConfig {
    pub target_type: TargetType,
    pub target_count: u32,
    pub health_check_interval: u32,
    pub sticky_session: bool,
}

impl Default for AlbConfig {
    fn default() -> Self {
        Self {
            target_type: TargetType::Instance,
            target_count: 2,
            health_check_interval: 30,
            sticky_session: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NlbConfig {
    pub target_type: TargetType,
    pub target_count: u32,
    pub cross_zone: bool,
}

impl Default for NlbConfig {
    fn default() -> Self {
        Self {
            target_type: TargetType::Instance,
            target_count: 2,
            cross_zone: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApiType {
    #[default]
    Rest,
    Http,
    Websocket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiGatewayConfig {
    pub api_type: ApiType,
    /// Steady-state request limit, requests per second.
    pub throttling_rate: f64,
    pub throttling_burst: f64,
    pub caching_enabled: bool,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            api_type: ApiType::Rest,
            throttling_rate: 10_000.0,
            throttling_burst: 5_000.0,
            caching_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoScalingConfig {
    pub enabled: bool,
    pub min: u32,
    pub max: u32,
    #[serde(rename = "targetCPU")]
    pub target_cpu: f64,
}

impl Default for AutoScalingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min: 2,
            max: 10,
            target_cpu: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchType {
    #[default]
    Fargate,
    Ec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EcsConfig {
    pub launch_type: LaunchType,
    pub task_count: u32,
    /// vCPU per task.
    pub cpu: f64,
    /// Memory per task, GB.
    pub memory: f64,
    pub auto_scaling: AutoScalingConfig,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            launch_type: LaunchType::Fargate,
            task_count: 2,
            cpu: 0.25,
            memory: 0.5,
            auto_scaling: AutoScalingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NodeGroupType {
    #[default]
    Managed,
    Fargate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EksConfig {
    pub node_group_type: NodeGroupType,
    pub node_count: u32,
    pub instance_type: String,
    pub auto_scaling: AutoScalingConfig,
}

impl Default for EksConfig {
    fn default() -> Self {
        Self {
            node_group_type: NodeGroupType::Managed,
            node_count: 2,
            instance_type: "t3.medium".to_string(),
            auto_scaling: AutoScalingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ec2Config {
    pub instance_type: String,
    pub instance_count: u32,
    pub auto_scaling: bool,
}

impl Default for Ec2Config {
    fn default() -> Self {
        Self {
            instance_type: "t3.micro".to_string(),
            instance_count: 1,
            auto_scaling: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LambdaConfig {
    #[serde(rename = "memoryMB")]
    pub memory_mb: f64,
    pub timeout_seconds: u32,
    /// Reserved concurrency; doubles as the throughput ceiling.
    pub concurrency: f64,
    pub runtime: String,
    pub avg_duration_ms: f64,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            memory_mb: 128.0,
            timeout_seconds: 30,
            concurrency: 100.0,
            runtime: "nodejs20.x".to_string(),
            avg_duration_ms: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StorageClass {
    #[default]
    Standard,
    Ia,
    Glacier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct S3Config {
    pub storage_class: StorageClass,
    pub versioning_enabled: bool,
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RdsConfig {
    pub instance_class: String,
    #[serde(rename = "multiAZ")]
    pub multi_az: bool,
    pub read_replicas: u32,
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
}

impl Default for RdsConfig {
    fn default() -> Self {
        Self {
            instance_class: "db.t3.micro".to_string(),
            multi_az: false,
            read_replicas: 0,
            storage_gb: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityMode {
    Provisioned,
    #[default]
    OnDemand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DynamodbConfig {
    pub capacity_mode: CapacityMode,
    pub read_capacity_units: f64,
    pub write_capacity_units: f64,
    pub global_tables: bool,
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
}

impl Default for DynamodbConfig {
    fn default() -> Self {
        Self {
            capacity_mode: CapacityMode::OnDemand,
            read_capacity_units: 5.0,
            write_capacity_units: 5.0,
            global_tables: false,
            storage_gb: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CacheEngine {
    #[default]
    Redis,
    Memcached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElasticacheConfig {
    pub engine: CacheEngine,
    pub node_type: String,
    pub num_nodes: u32,
    pub cluster_mode: bool,
}

impl Default for ElasticacheConfig {
    fn default() -> Self {
        Self {
            engine: CacheEngine::Redis,
            node_type: "cache.t3.micro".to_string(),
            num_nodes: 1,
            cluster_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WafConfig {
    pub rule_count: u32,
    pub rate_based_rules: bool,
    pub managed_rule_groups: u32,
}

impl Default for WafConfig {
    fn default() -> Self {
        Self {
            rule_count: 10,
            rate_based_rules: true,
            managed_rule_groups: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShieldTier {
    #[default]
    Standard,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ShieldConfig {
    pub tier: ShieldTier,
}

/// Standard versus ordered delivery for queues and topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryType {
    #[default]
    Standard,
    Fifo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SqsConfig {
    pub queue_type: DeliveryType,
    pub visibility_timeout: u32,
    pub message_retention: u32,
    pub dlq_enabled: bool,
}

impl Default for SqsConfig {
    fn default() -> Self {
        Self {
            queue_type: DeliveryType::Standard,
            visibility_timeout: 30,
            message_retention: 345_600,
            dlq_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnsConfig {
    pub topic_type: DeliveryType,
    pub subscription_count: u32,
}

impl Default for SnsConfig {
    fn default() -> Self {
        Self {
            topic_type: DeliveryType::Standard,
            subscription_count: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StreamMode {
    Provisioned,
    #[default]
    OnDemand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KinesisConfig {
    pub stream_mode: StreamMode,
    pub shard_count: u32,
    pub retention_hours: u32,
}

impl Default for KinesisConfig {
    fn default() -> Self {
        Self {
            stream_mode: StreamMode::OnDemand,
            shard_count: 1,
            retention_hours: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VpcConfig {
    pub cidr_block: String,
    pub enable_dns_support: bool,
    pub enable_dns_hostnames: bool,
}

impl Default for VpcConfig {
    fn default() -> Self {
        Self {
            cidr_block: "10.0.0.0/16".to_string(),
            enable_dns_support: true,
            enable_dns_hostnames: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SubnetType {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubnetConfig {
    pub cidr_block: String,
    pub availability_zone: String,
    pub subnet_type: SubnetType,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        Self {
            cidr_block: "10.0.1.0/24".to_string(),
            availability_zone: "us-east-1a".to_string(),
            subnet_type: SubnetType::Public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityGroupConfig {
    pub ingress_rules: u32,
    pub egress_rules: u32,
}

impl Default for SecurityGroupConfig {
    fn default() -> Self {
        Self {
            ingress_rules: 3,
            egress_rules: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Connectivity {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NatGatewayConfig {
    pub connectivity_type: Connectivity,
}

/// The internet gateway has no parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InternetGatewayConfig {}
