//! Live connection checks used while an edge is being drawn.

use crate::rules::{self, PROTOCOL_RULES, Protocol};
use crate::service::ServiceType;
use itertools::Itertools;
use serde::Serialize;

const CONTAINMENT_MESSAGE: &str =
    "Infrastructure services are placed by containment, not connected with edges.";

/// Outcome of [`can_connect`].
///
/// `warning` holds the rejection reason when `allowed` is false, and an optional
/// advisory when it is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionCheck {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ConnectionCheck {
    fn allowed() -> Self {
        Self {
            allowed: true,
            warning: None,
        }
    }

    fn advisory(message: &str) -> Self {
        Self {
            allowed: true,
            warning: Some(message.to_string()),
        }
    }

    fn rejected(message: String) -> Self {
        Self {
            allowed: false,
            warning: Some(message),
        }
    }
}

/// Decides whether an edge `source -> target` is legal.
pub fn can_connect(source: ServiceType, target: ServiceType) -> ConnectionCheck {
    if source.is_infrastructure() || target.is_infrastructure() {
        if source == ServiceType::NatGateway && target == ServiceType::InternetGateway {
            return ConnectionCheck::allowed();
        }
        return ConnectionCheck::rejected(CONTAINMENT_MESSAGE.to_string());
    }

    let Some(targets) = rules::allowed_targets(source) else {
        return ConnectionCheck::allowed();
    };

    if !targets.contains(&target) {
        return ConnectionCheck::rejected(rejection_message(source, target));
    }

    match rules::suboptimal_warning(source, target) {
        Some(message) => ConnectionCheck::advisory(message),
        None => ConnectionCheck::allowed(),
    }
}

/// Whether `target -> source` would be accepted by the allow-list.
pub fn is_reverse_valid(source: ServiceType, target: ServiceType) -> bool {
    rules::allowed_targets(target).is_none_or(|targets| targets.contains(&source))
}

fn is_terminal(service_type: ServiceType) -> bool {
    rules::allowed_targets(service_type).is_some_and(|targets| targets.is_empty())
}

fn rejection_message(source: ServiceType, target: ServiceType) -> String {
    let source_label = source.label();
    let target_label = target.label();

    if is_terminal(source) {
        return format!(
            "{} is a terminal service and cannot have outgoing connections.",
            source_label
        );
    }

    let mut message = if is_reverse_valid(source, target) {
        format!(
            "{} → {} is not a valid connection (the reverse direction {} → {} is valid).",
            source_label, target_label, target_label, source_label
        )
    } else {
        format!(
            "{} → {} is not a valid connection.",
            source_label, target_label
        )
    };

    if let Some(targets) = rules::allowed_targets(source).filter(|t| !t.is_empty()) {
        message.push_str(&format!(
            " {} can connect to: {}",
            source_label,
            targets.iter().map(|t| t.label()).join(", ")
        ));
    }

    message
}

/// Infers the protocol label for an edge. The first matching rule wins; `https` otherwise.
pub fn protocol_for(source: ServiceType, target: ServiceType) -> Protocol {
    PROTOCOL_RULES
        .iter()
        .find(|rule| rule.source.matches(source) && rule.target.matches(target))
        .map(|rule| rule.protocol)
        .unwrap_or(rules::connection::DEFAULT_PROTOCOL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ServiceType::*;

    #[test]
    fn terminal_source_is_named() {
        let check = can_connect(S3, Ec2);
        assert!(!check.allowed);
        let message = check.warning.unwrap();
        assert!(message.contains("S3 is a terminal service"), "{}", message);
    }

    #[test]
    fn reverse_direction_hint() {
        let check = can_connect(Ec2, Route53);
        assert!(!check.allowed);
        let message = check.warning.unwrap();
        assert!(message.contains("reverse direction Route 53 → EC2"), "{}", message);
        assert!(
            message.contains("EC2 can connect to: RDS, DynamoDB, ElastiCache, S3, SQS, SNS, Kinesis")
        );
    }

    #[test]
    fn no_hint_when_reverse_is_also_illegal() {
        let message = can_connect(Alb, S3).warning.unwrap();
        assert!(!message.contains("reverse"));
        assert!(message.contains("ALB can connect to: ECS, EKS, EC2, Lambda"));
    }

    #[test]
    fn infrastructure_is_containment_only() {
        assert_eq!(can_connect(NatGateway, InternetGateway), ConnectionCheck::allowed());
        let check = can_connect(Vpc, Ec2);
        assert!(!check.allowed);
        assert_eq!(check.warning.as_deref(), Some(CONTAINMENT_MESSAGE));
        assert!(!can_connect(Ec2, Subnet).allowed);
        assert!(!can_connect(InternetGateway, NatGateway).allowed);
    }

    #[test]
    fn reverse_check_against_unrestricted_target() {
        assert_eq!(can_connect(Shield, Cloudfront), ConnectionCheck::allowed());
        assert!(is_reverse_valid(Ec2, Vpc));
        assert!(!is_reverse_valid(Ec2, Shield));
        assert!(is_reverse_valid(Ec2, Route53));
    }

    #[test]
    fn protocols() {
        assert_eq!(protocol_for(Route53, Cloudfront), Protocol::Dns);
        assert_eq!(protocol_for(Alb, Eks), Protocol::Http);
        assert_eq!(protocol_for(Nlb, Ec2), Protocol::Tcp);
        assert_eq!(protocol_for(ApiGateway, Lambda), Protocol::Invoke);
        assert_eq!(protocol_for(Lambda, Rds), Protocol::Tcp);
        assert_eq!(protocol_for(Ecs, Sqs), Protocol::Https);
        assert_eq!(protocol_for(Waf, Alb), Protocol::Inline);
        assert_eq!(protocol_for(NatGateway, InternetGateway), Protocol::Tcp);
        assert_eq!(protocol_for(S3, Ec2), Protocol::Https);
    }
}
