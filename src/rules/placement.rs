use crate::service::ServiceType::{self, *};

/// Types that belong inside a private subnet, flagged when placed without a parent.
pub const REQUIRES_PRIVATE_PLACEMENT: &[ServiceType] = &[Rds, Elasticache, Ecs, Eks, Ec2];

/// Types whose presence assumes another type exists somewhere in the diagram.
pub const DEPENDENCY_RULES: &[(ServiceType, &[ServiceType])] = &[
    (NatGateway, &[InternetGateway]),
    (Subnet, &[Vpc]),
    (SecurityGroup, &[Vpc]),
];

pub const ENTRY_POINT_TYPES: &[ServiceType] = &[Route53, Cloudfront, ApiGateway, Alb, Nlb];
pub const COMPUTE_TYPES: &[ServiceType] = &[Ecs, Eks, Ec2, Lambda];
pub const DATABASE_TYPES: &[ServiceType] = &[Rds, Dynamodb, Elasticache];

/// Storage and database types checked for encryption at rest.
pub const DATA_STORE_TYPES: &[ServiceType] = &[S3, Rds, Elasticache, Dynamodb];

pub fn requires_private_placement(service_type: ServiceType) -> bool {
    REQUIRES_PRIVATE_PLACEMENT.contains(&service_type)
}

pub fn dependencies_of(service_type: ServiceType) -> &'static [ServiceType] {
    DEPENDENCY_RULES
        .iter()
        .find(|(t, _)| *t == service_type)
        .map(|(_, deps)| *deps)
        .unwrap_or(&[])
}

pub fn is_entry_point(service_type: ServiceType) -> bool {
    ENTRY_POINT_TYPES.contains(&service_type)
}

pub fn is_compute(service_type: ServiceType) -> bool {
    COMPUTE_TYPES.contains(&service_type)
}

pub fn is_database(service_type: ServiceType) -> bool {
    DATABASE_TYPES.contains(&service_type)
}

/// Compute, database, and object storage: everything that should be reachable from an entry point.
pub fn is_backend(service_type: ServiceType) -> bool {
    is_compute(service_type) || is_database(service_type) || service_type == S3
}
