use crate::service::ServiceType::{self, *};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legal downstream types per source type.
///
/// A type with no row is unrestricted. A row with an empty list marks a terminal
/// service that may never originate a connection.
pub const ALLOWED_TARGETS: &[(ServiceType, &[ServiceType])] = &[
    (Route53, &[Cloudfront, Alb, Nlb, ApiGateway, S3, Ec2]),
    (Cloudfront, &[Alb, Nlb, ApiGateway, S3, Ec2, Lambda]),
    (Waf, &[Cloudfront, Alb, ApiGateway]),
    (Shield, &[Cloudfront, Alb, Nlb, Route53]),
    (Alb, &[Ecs, Eks, Ec2, Lambda]),
    (Nlb, &[Ecs, Eks, Ec2]),
    (ApiGateway, &[Lambda, Ecs, Ec2, Nlb]),
    (Ecs, DATA_TIER),
    (Eks, DATA_TIER),
    (Ec2, DATA_TIER),
    (Lambda, DATA_TIER),
    (Sqs, &[Lambda, Ecs, Eks]),
    (Sns, &[Lambda, Sqs, Kinesis, Ecs, Eks]),
    (Kinesis, &[Lambda, Ecs, Eks]),
    (S3, &[]),
    (Rds, &[]),
    (Dynamodb, &[]),
    (Elasticache, &[]),
    (NatGateway, &[InternetGateway]),
];

const DATA_TIER: &[ServiceType] = &[Rds, Dynamodb, Elasticache, S3, Sqs, Sns, Kinesis];

const COMPUTE: &[ServiceType] = &[Ecs, Eks, Ec2, Lambda];
const MESSAGING: &[ServiceType] = &[Sqs, Sns, Kinesis];

/// The allow-list for `source`, or `None` if it is unrestricted.
pub fn allowed_targets(source: ServiceType) -> Option<&'static [ServiceType]> {
    ALLOWED_TARGETS
        .iter()
        .find(|(service_type, _)| *service_type == source)
        .map(|(_, targets)| *targets)
}

/// Wire-protocol label attached to a drawn edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Tcp,
    Udp,
    Dns,
    Invoke,
    Inline,
}

impl Protocol {
    pub const ALL: &'static [Protocol] = &[
        Protocol::Http,
        Protocol::Https,
        Protocol::Tcp,
        Protocol::Udp,
        Protocol::Dns,
        Protocol::Invoke,
        Protocol::Inline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Dns => "dns",
            Protocol::Invoke => "invoke",
            Protocol::Inline => "inline",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .iter()
            .copied()
            .find(|protocol| protocol.as_str() == s)
            .ok_or(())
    }
}

/// Protocols an edge may carry and still count as secure in transit.
pub const SECURE_PROTOCOLS: &[Protocol] = &[
    Protocol::Https,
    Protocol::Http,
    Protocol::Tcp,
    Protocol::Udp,
    Protocol::Dns,
    Protocol::Invoke,
    Protocol::Inline,
];

/// An edge without a label is secure; an unrecognised label is not.
pub fn is_secure_label(label: Option<&str>) -> bool {
    match label {
        None => true,
        Some(label) => label
            .parse::<Protocol>()
            .is_ok_and(|protocol| SECURE_PROTOCOLS.contains(&protocol)),
    }
}

/// One side of a protocol rule.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    One(ServiceType),
    Set(&'static [ServiceType]),
    Any,
}

impl Pattern {
    pub fn matches(&self, service_type: ServiceType) -> bool {
        match self {
            Pattern::One(expected) => *expected == service_type,
            Pattern::Set(set) => set.contains(&service_type),
            Pattern::Any => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProtocolRule {
    pub source: Pattern,
    pub target: Pattern,
    pub protocol: Protocol,
}

const fn rule(source: Pattern, target: Pattern, protocol: Protocol) -> ProtocolRule {
    ProtocolRule {
        source,
        target,
        protocol,
    }
}

/// Evaluated top to bottom; the first match wins.
pub const PROTOCOL_RULES: &[ProtocolRule] = &[
    rule(Pattern::One(Route53), Pattern::Any, Protocol::Dns),
    rule(Pattern::One(Waf), Pattern::Any, Protocol::Inline),
    rule(Pattern::One(Shield), Pattern::Any, Protocol::Inline),
    rule(Pattern::One(Alb), Pattern::Set(&[Ecs, Ec2, Lambda]), Protocol::Http),
    rule(Pattern::One(Alb), Pattern::One(Eks), Protocol::Http),
    rule(Pattern::One(Nlb), Pattern::Set(&[Ecs, Ec2]), Protocol::Tcp),
    rule(Pattern::One(Nlb), Pattern::One(Eks), Protocol::Tcp),
    rule(Pattern::One(ApiGateway), Pattern::One(Lambda), Protocol::Invoke),
    rule(Pattern::One(ApiGateway), Pattern::Set(&[Ecs, Ec2, Nlb]), Protocol::Https),
    rule(Pattern::Set(COMPUTE), Pattern::Set(&[Rds, Elasticache]), Protocol::Tcp),
    rule(Pattern::Set(COMPUTE), Pattern::Set(&[Dynamodb, S3]), Protocol::Https),
    rule(Pattern::Set(COMPUTE), Pattern::Set(MESSAGING), Protocol::Https),
    rule(Pattern::One(Sqs), Pattern::One(Lambda), Protocol::Invoke),
    rule(Pattern::One(Sqs), Pattern::Set(&[Ecs, Eks]), Protocol::Https),
    rule(Pattern::One(Sns), Pattern::One(Lambda), Protocol::Invoke),
    rule(Pattern::One(Sns), Pattern::Set(&[Sqs, Kinesis, Ecs, Eks]), Protocol::Https),
    rule(Pattern::One(Kinesis), Pattern::One(Lambda), Protocol::Invoke),
    rule(Pattern::One(Kinesis), Pattern::Set(&[Ecs, Eks]), Protocol::Https),
    rule(Pattern::One(Cloudfront), Pattern::Any, Protocol::Https),
    rule(Pattern::One(NatGateway), Pattern::One(InternetGateway), Protocol::Tcp),
];

pub const DEFAULT_PROTOCOL: Protocol = Protocol::Https;

/// Structurally legal pairs that skip a tier, with the advisory shown for them.
pub const SUBOPTIMAL_CONNECTIONS: &[(ServiceType, ServiceType, &str)] = &[
    (
        Cloudfront,
        Rds,
        "CloudFront should not connect directly to RDS. Use a compute layer.",
    ),
    (
        Route53,
        Rds,
        "Route 53 should not connect directly to RDS. Use a load balancer.",
    ),
    (
        Alb,
        Rds,
        "ALB should not connect directly to RDS. Use a compute service like ECS or Lambda.",
    ),
];

pub fn suboptimal_warning(source: ServiceType, target: ServiceType) -> Option<&'static str> {
    SUBOPTIMAL_CONNECTIONS
        .iter()
        .find(|(s, t, _)| *s == source && *t == target)
        .map(|(_, _, message)| *message)
}
