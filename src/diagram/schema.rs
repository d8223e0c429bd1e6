//! Range checks for user-supplied diagrams.
//!
//! The engine itself tolerates anything it is handed; these checks exist for the
//! loading edge, so that a file with a negative latency or a hit rate of 3 is
//! rejected with a precise message instead of producing nonsense numbers.

use super::definition::{Diagram, ServiceConfig, ServiceNode, TrafficProfile};
use crate::error::ConfigError;
use ahash::AHashSet;

const MAX_TRAFFIC_VALUE: f64 = 1_000_000.0;

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::TrafficOutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

fn non_negative(node_id: &str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNodeField {
            node_id: node_id.to_string(),
            field,
            message: format!("must be a non-negative number, but was {}", value),
        })
    }
}

impl TrafficProfile {
    pub fn check(&self) -> Result<(), ConfigError> {
        check_range(
            "requestsPerSecond",
            self.requests_per_second,
            0.0,
            MAX_TRAFFIC_VALUE,
        )?;
        check_range(
            "averagePayloadSize",
            self.average_payload_size,
            0.0,
            MAX_TRAFFIC_VALUE,
        )?;
        check_range("readWriteRatio", self.read_write_ratio, 0.0, 1.0)?;

        for (index, share) in self.geo_distribution.iter().enumerate() {
            if share.region.is_empty() {
                return Err(ConfigError::InvalidGeoShare {
                    index,
                    message: "region must not be empty".to_string(),
                });
            }
            if !(0.0..=100.0).contains(&share.percentage) {
                return Err(ConfigError::InvalidGeoShare {
                    index,
                    message: format!(
                        "percentage must be within [0, 100], but was {}",
                        share.percentage
                    ),
                });
            }
        }
        Ok(())
    }
}

impl ServiceConfig {
    /// Checks this configuration, attributing failures to `node_id`.
    pub fn check(&self, node_id: &str) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName {
                node_id: node_id.to_string(),
            });
        }

        non_negative(node_id, "latency.base", self.latency.base)?;
        if let Some(per_request) = self.latency.per_request {
            non_negative(node_id, "latency.perRequest", per_request)?;
        }

        let cost_fields = [
            ("cost.perRequest", self.cost.per_request),
            ("cost.perGB", self.cost.per_gb),
            ("cost.monthly", self.cost.monthly),
        ];
        for (field, value) in cost_fields {
            if let Some(value) = value {
                non_negative(node_id, field, value)?;
            }
        }

        if let Some(cache) = &self.cache {
            non_negative(node_id, "cache.ttl", cache.ttl)?;
            if !(0.0..=1.0).contains(&cache.hit_rate) {
                return Err(ConfigError::InvalidNodeField {
                    node_id: node_id.to_string(),
                    field: "cache.hitRate",
                    message: format!("must be within [0, 1], but was {}", cache.hit_rate),
                });
            }
        }
        Ok(())
    }
}

impl ServiceNode {
    /// Checks the configuration and that its `specific` bag belongs to this node's type.
    pub fn check(&self) -> Result<(), ConfigError> {
        let found = self.config.specific.service_type();
        if found != self.service_type {
            return Err(ConfigError::MismatchedSpecific {
                node_id: self.id.clone(),
                service_type: self.service_type,
                found,
            });
        }
        self.config.check(&self.id)
    }
}

impl Diagram {
    /// Checks the traffic profile, every node configuration, and node id uniqueness.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.traffic.check()?;

        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(ConfigError::DuplicateNodeId(node.id.clone()));
            }
            node.check()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{CacheConfig, GeoShare};
    use crate::service::ServiceType;

    #[test]
    fn default_traffic_is_valid() {
        assert!(TrafficProfile::default().check().is_ok());
    }

    #[test]
    fn traffic_bounds() {
        let mut traffic = TrafficProfile::default();
        traffic.read_write_ratio = 1.5;
        assert!(matches!(
            traffic.check(),
            Err(ConfigError::TrafficOutOfRange { field: "readWriteRatio", .. })
        ));

        let mut traffic = TrafficProfile::default();
        traffic.requests_per_second = -1.0;
        assert!(traffic.check().is_err());

        let mut traffic = TrafficProfile::default();
        traffic.geo_distribution.push(GeoShare {
            region: String::new(),
            percentage: 10.0,
        });
        assert!(matches!(
            traffic.check(),
            Err(ConfigError::InvalidGeoShare { index: 1, .. })
        ));
    }

    #[test]
    fn node_config_bounds() {
        let mut node = ServiceNode::new("db", ServiceType::Rds);
        assert!(node.check().is_ok());

        node.config.latency.base = -3.0;
        let err = node.check().unwrap_err();
        assert!(err.to_string().contains("latency.base"));
        assert!(err.to_string().contains("db"));

        let mut node = ServiceNode::new("cdn", ServiceType::Cloudfront);
        node.config.cache = Some(CacheConfig {
            enabled: true,
            ttl: 60.0,
            hit_rate: 1.2,
        });
        assert!(node.check().is_err());

        let mut node = ServiceNode::new("x", ServiceType::Sqs);
        node.config.name.clear();
        assert_eq!(
            node.check(),
            Err(ConfigError::EmptyName {
                node_id: "x".to_string()
            })
        );
    }

    #[test]
    fn specific_bag_must_match_service_type() {
        let node = ServiceNode::new("db", ServiceType::Rds)
            .with_config(ServiceConfig::default_for(ServiceType::Ec2));
        assert_eq!(
            node.check(),
            Err(ConfigError::MismatchedSpecific {
                node_id: "db".to_string(),
                service_type: ServiceType::Rds,
                found: ServiceType::Ec2,
            })
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let diagram = Diagram {
            nodes: vec![
                ServiceNode::new("a", ServiceType::Ec2),
                ServiceNode::new("a", ServiceType::Rds),
            ],
            ..Default::default()
        };
        assert_eq!(
            diagram.check(),
            Err(ConfigError::DuplicateNodeId("a".to_string()))
        );
    }
}
