//! Static rule tables.
//!
//! Every rule the validator, the connection checker, and the simulation consult lives
//! here as data. Supporting a new service type means adding rows, not branches.

pub mod connection;
pub mod latency;
pub mod placement;

pub use connection::{
    ALLOWED_TARGETS, PROTOCOL_RULES, Pattern, Protocol, ProtocolRule, SUBOPTIMAL_CONNECTIONS,
    allowed_targets, is_secure_label, suboptimal_warning,
};
pub use latency::{LATENCY_TABLE, LatencyRange, latency_range};
pub use placement::*;
