use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod catalog;

pub use catalog::default_config;

/// Every building block a diagram can contain.
///
/// Wire names are kebab-case (`"api-gateway"`, `"nat-gateway"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Route53,
    Cloudfront,
    Alb,
    Nlb,
    ApiGateway,
    Ecs,
    Eks,
    Ec2,
    Lambda,
    S3,
    Rds,
    Elasticache,
    Waf,
    Shield,
    Dynamodb,
    Sqs,
    Sns,
    Kinesis,
    Vpc,
    Subnet,
    SecurityGroup,
    NatGateway,
    InternetGateway,
}

/// Whether a service sits on the request path or only groups other services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceRole {
    Flow,
    Infrastructure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Networking,
    Compute,
    Storage,
    Database,
    Messaging,
    Security,
    Infrastructure,
}

/// Static, display-oriented facts about a service type.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefinition {
    pub service_type: ServiceType,
    pub label: &'static str,
    pub category: ServiceCategory,
    pub role: ServiceRole,
    pub description: &'static str,
}

macro_rules! define_services {
    ( $( ($variant:ident, $wire:expr, $label:expr, $category:ident, $role:ident, $description:expr) ),* $(,)? ) => {
        /// The definition table, indexed by `ServiceType as usize`.
        static DEFINITIONS: &[ServiceDefinition] = &[
            $(
                ServiceDefinition {
                    service_type: ServiceType::$variant,
                    label: $label,
                    category: ServiceCategory::$category,
                    role: ServiceRole::$role,
                    description: $description,
                },
            )*
        ];

        impl ServiceType {
            /// All service types in declaration order.
            pub const ALL: &'static [ServiceType] = &[ $( ServiceType::$variant ),* ];

            /// The kebab-case wire name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( ServiceType::$variant => $wire, )*
                }
            }
        }

        impl FromStr for ServiceType {
            type Err = UnknownServiceType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(ServiceType::$variant), )*
                    other => Err(UnknownServiceType(other.to_string())),
                }
            }
        }
    };
}

define_services! {
    (Route53, "route53", "Route 53", Networking, Flow, "DNS and domain management"),
    (Cloudfront, "cloudfront", "CloudFront", Networking, Flow, "CDN and edge cache"),
    (Alb, "alb", "ALB", Networking, Flow, "Application Load Balancer"),
    (Nlb, "nlb", "NLB", Networking, Flow, "Network Load Balancer"),
    (ApiGateway, "api-gateway", "API Gateway", Networking, Flow, "Managed API front door"),
    (Ecs, "ecs", "ECS", Compute, Flow, "Container orchestration"),
    (Eks, "eks", "EKS", Compute, Flow, "Kubernetes orchestration"),
    (Ec2, "ec2", "EC2", Compute, Flow, "Virtual servers"),
    (Lambda, "lambda", "Lambda", Compute, Flow, "Serverless functions"),
    (S3, "s3", "S3", Storage, Flow, "Object storage"),
    (Rds, "rds", "RDS", Database, Flow, "Relational database"),
    (Elasticache, "elasticache", "ElastiCache", Database, Flow, "In-memory cache"),
    (Waf, "waf", "WAF", Security, Flow, "Web Application Firewall"),
    (Shield, "shield", "Shield", Security, Flow, "DDoS protection"),
    (Dynamodb, "dynamodb", "DynamoDB", Database, Flow, "NoSQL database"),
    (Sqs, "sqs", "SQS", Messaging, Flow, "Message queue"),
    (Sns, "sns", "SNS", Messaging, Flow, "Pub/sub notifications"),
    (Kinesis, "kinesis", "Kinesis", Messaging, Flow, "Data streaming"),
    (Vpc, "vpc", "VPC", Infrastructure, Infrastructure, "Virtual private cloud"),
    (Subnet, "subnet", "Subnet", Infrastructure, Infrastructure, "Subnet"),
    (SecurityGroup, "security-group", "Security Group", Infrastructure, Infrastructure, "Security group"),
    (NatGateway, "nat-gateway", "NAT Gateway", Infrastructure, Infrastructure, "NAT gateway"),
    (InternetGateway, "internet-gateway", "Internet Gateway", Infrastructure, Infrastructure, "Internet gateway"),
}

/// Error returned when parsing an unrecognised service type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown service type '{0}'")]
pub struct UnknownServiceType(pub String);

impl ServiceType {
    pub fn definition(&self) -> &'static ServiceDefinition {
        &DEFINITIONS[*self as usize]
    }

    /// Human-readable label, e.g. `"API Gateway"`.
    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    pub fn category(&self) -> ServiceCategory {
        self.definition().category
    }

    pub fn role(&self) -> ServiceRole {
        self.definition().role
    }

    /// Pure containment types never take part in the request flow.
    pub fn is_infrastructure(&self) -> bool {
        self.role() == ServiceRole::Infrastructure
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which child types each containment type may hold.
const NESTING_RULES: &[(ServiceType, &[ServiceType])] = &[
    (
        ServiceType::Vpc,
        &[
            ServiceType::Subnet,
            ServiceType::SecurityGroup,
            ServiceType::NatGateway,
        ],
    ),
    (
        ServiceType::Subnet,
        &[
            ServiceType::Alb,
            ServiceType::Nlb,
            ServiceType::Ecs,
            ServiceType::Eks,
            ServiceType::Ec2,
            ServiceType::Lambda,
            ServiceType::Rds,
            ServiceType::Elasticache,
            ServiceType::Dynamodb,
        ],
    ),
];

/// Returns true if `child` may be placed inside a node of type `parent`.
pub fn can_nest_in(child: ServiceType, parent: ServiceType) -> bool {
    NESTING_RULES
        .iter()
        .find(|(container, _)| *container == parent)
        .is_some_and(|(_, children)| children.contains(&child))
}
