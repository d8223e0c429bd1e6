//! The cost formula library.
//!
//! Every formula is a pure function of a service's configuration and the monthly
//! volumes it sees. The simulation decides which volumes each service sees.

pub mod calculator;
pub mod rates;

pub use calculator::{TrafficVolumes, generic_cost, service_monthly_cost};
