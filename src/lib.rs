//! # archsim - Cloud Architecture Simulation and Validation Engine
//!
//! **archsim** answers "what would this architecture cost, how fast would it respond,
//! how secure and how available is it?" for a diagram of cloud building blocks. The
//! engine is deterministic and synchronous: every analysis is a pure function of the
//! diagram and a traffic profile.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Diagram**: Parse a diagram document with [`Diagram::from_json`], or
//!     implement [`IntoDiagram`] for your editor's own format.
//! 2.  **Order**: [`graph::order`] sorts the nodes into a request flow (Kahn's algorithm).
//! 3.  **Simulate**: [`Simulator`] walks that flow computing performance, cost, security,
//!     and availability, and optionally the advanced analytics.
//! 4.  **Validate**: [`validation::validate`] runs the structural rule passes. Simulation
//!     runs them too and attaches the result.
//!
//! While a user is drawing an edge, [`connection::can_connect`] and
//! [`connection::protocol_for`] answer whether the edge is legal and how to label it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use archsim::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes = vec![
//!         ServiceNode::new("dns", ServiceType::Route53),
//!         ServiceNode::new("lb", ServiceType::Alb),
//!         ServiceNode::new("app", ServiceType::Ecs),
//!         ServiceNode::new("db", ServiceType::Rds),
//!     ];
//!     let edges = vec![
//!         Edge::new("e1", "dns", "lb"),
//!         Edge::new("e2", "lb", "app"),
//!         Edge::new("e3", "app", "db"),
//!     ];
//!
//!     let simulator = Simulator::builder().advanced_mode(true).build();
//!     let result = simulator.run(&nodes, &edges, &TrafficProfile::default());
//!
//!     println!("{}", ReportFormatter::format_result(&result));
//!     println!("Monthly cost: {:.2}", result.cost.monthly);
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod cost;
pub mod diagram;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod service;
pub mod simulation;
pub mod validation;

pub use diagram::{Diagram, IntoDiagram};
pub use simulation::{SimulationOptions, SimulationResult, Simulator, simulate};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, or by `level` when it is unset.
#[cfg(feature = "cli")]
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
