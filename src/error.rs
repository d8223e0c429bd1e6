use crate::service::ServiceType;
use thiserror::Error;

/// Errors that can occur while loading or converting a diagram.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    #[error("Failed to parse diagram JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read diagram file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid custom diagram data: {0}")]
    Conversion(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for DiagramError {
    fn from(e: serde_json::Error) -> Self {
        DiagramError::JsonParseError(e.to_string())
    }
}

/// A user-supplied value outside its permitted range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Traffic field '{field}' must be within [{min}, {max}], but was {value}")]
    TrafficOutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Geo distribution entry {index} is invalid: {message}")]
    InvalidGeoShare { index: usize, message: String },

    #[error("Node '{node_id}' has an empty name")]
    EmptyName { node_id: String },

    #[error("Node '{node_id}' has invalid '{field}': {message}")]
    InvalidNodeField {
        node_id: String,
        field: &'static str,
        message: String,
    },

    #[error("Node '{node_id}' is a {service_type} but carries {found} parameters")]
    MismatchedSpecific {
        node_id: String,
        service_type: ServiceType,
        found: ServiceType,
    },

    #[error("Node id '{0}' is used more than once")]
    DuplicateNodeId(String),
}
