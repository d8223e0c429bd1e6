use super::specific::SpecificConfig;
use crate::service::{ServiceRole, ServiceType, default_config};
use serde::{Deserialize, Serialize};

/// A complete diagram: the service nodes, the directed edges between them, and the
/// traffic profile to simulate with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<ServiceNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub traffic: TrafficProfile,
}

/// A single building block placed on the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawServiceNode")]
pub struct ServiceNode {
    pub id: String,
    pub service_type: ServiceType,
    pub config: ServiceConfig,
    /// The containing node, used only by placement rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl ServiceNode {
    /// Creates a node carrying the catalogue default configuration.
    pub fn new(id: impl Into<String>, service_type: ServiceType) -> Self {
        Self {
            id: id.into(),
            service_type,
            config: default_config(service_type),
            parent_id: None,
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn role(&self) -> ServiceRole {
        self.service_type.role()
    }

    pub fn is_flow(&self) -> bool {
        self.role() == ServiceRole::Flow
    }
}

/// The configuration record every node carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,
    pub latency: LatencyConfig,
    pub cost: CostConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityConfig>,
    pub specific: SpecificConfig,
}

impl ServiceConfig {
    /// The catalogue default configuration for `service_type`.
    pub fn default_for(service_type: ServiceType) -> Self {
        default_config(service_type)
    }

    /// The cache hit rate if a cache is declared and enabled.
    pub fn active_cache_hit_rate(&self) -> Option<f64> {
        self.cache
            .as_ref()
            .filter(|cache| cache.enabled && cache.hit_rate > 0.0)
            .map(|cache| cache.hit_rate)
    }

    pub fn security_flags(&self) -> SecurityConfig {
        self.security.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    pub enabled: bool,
    /// Seconds.
    pub ttl: f64,
    /// Fraction of arriving requests served from cache, in `[0, 1]`.
    pub hit_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyConfig {
    /// Milliseconds.
    pub base: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_request: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_request: Option<f64>,
    #[serde(default, rename = "perGB", skip_serializing_if = "Option::is_none")]
    pub per_gb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    #[serde(default)]
    pub waf: bool,
    #[serde(default)]
    pub ddos_protection: bool,
    #[serde(default)]
    pub encryption: bool,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Wire-protocol label attached by the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            protocol: None,
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

/// The load a simulation is run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficProfile {
    pub requests_per_second: f64,
    /// Kilobytes.
    pub average_payload_size: f64,
    /// Fraction of requests that are reads, in `[0, 1]`.
    pub read_write_ratio: f64,
    #[serde(default)]
    pub geo_distribution: Vec<GeoShare>,
}

impl Default for TrafficProfile {
    fn default() -> Self {
        Self {
            requests_per_second: 100.0,
            average_payload_size: 10.0,
            read_write_ratio: 0.2,
            geo_distribution: vec![GeoShare {
                region: "us-east-1".to_string(),
                percentage: 100.0,
            }],
        }
    }
}

/// Informational share of traffic originating from a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoShare {
    pub region: String,
    pub percentage: f64,
}

// --- Wire decoding ---
// `specific` can only be decoded once the service type is known, and every part of
// `config` is optional on the wire, falling back to the catalogue defaults.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServiceNode {
    id: String,
    #[serde(alias = "type")]
    service_type: ServiceType,
    #[serde(default)]
    config: Option<RawServiceConfig>,
    #[serde(default)]
    parent_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServiceConfig {
    name: Option<String>,
    region: Option<String>,
    cache: Option<CacheConfig>,
    latency: Option<LatencyConfig>,
    cost: Option<CostConfig>,
    security: Option<SecurityConfig>,
    specific: Option<serde_json::Value>,
}

impl TryFrom<RawServiceNode> for ServiceNode {
    type Error = serde_json::Error;

    fn try_from(raw: RawServiceNode) -> Result<Self, Self::Error> {
        let defaults = default_config(raw.service_type);
        let config = match raw.config {
            None => defaults,
            Some(cfg) => ServiceConfig {
                name: cfg.name.unwrap_or(defaults.name),
                region: cfg.region.or(defaults.region),
                cache: cfg.cache.or(defaults.cache),
                latency: cfg.latency.unwrap_or(defaults.latency),
                cost: cfg.cost.unwrap_or(defaults.cost),
                security: cfg.security.or(defaults.security),
                specific: match cfg.specific {
                    Some(value) => SpecificConfig::from_value(raw.service_type, value)?,
                    None => defaults.specific,
                },
            },
        };

        Ok(ServiceNode {
            id: raw.id,
            service_type: raw.service_type,
            config,
            parent_id: raw.parent_id,
        })
    }
}
