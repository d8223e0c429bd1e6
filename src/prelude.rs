//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the archsim
//! crate, so that a single glob import gives access to the core workflow.
//!
//! # Example
//!
//! ```rust,no_run
//! use archsim::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let diagram = Diagram::from_file("path/to/diagram.json")?;
//!
//! let result = Simulator::builder()
//!     .advanced_mode(true)
//!     .build()
//!     .run_diagram(&diagram);
//!
//! if !result.validation.is_valid {
//!     println!("{}", ReportFormatter::format_validation(&result.validation));
//! }
//! # Ok(())
//! # }
//! ```

// Simulation and validation
pub use crate::graph::order;
pub use crate::simulation::advanced::AdvancedResult;
pub use crate::simulation::{
    SimulationOptions, SimulationResult, Simulator, SimulatorBuilder, simulate,
};
pub use crate::validation::{
    Category, Severity, ValidationIssue, ValidationResult, Validator, validate,
};

// Diagram model
pub use crate::diagram::{
    Diagram, Edge, IntoDiagram, ServiceConfig, ServiceNode, SpecificConfig, TrafficProfile,
};
pub use crate::service::{ServiceRole, ServiceType, UnknownServiceType};

// Connection rules
pub use crate::connection::{ConnectionCheck, can_connect, protocol_for};
pub use crate::rules::Protocol;

// Error types
pub use crate::error::{ConfigError, DiagramError};

// Report formatting
pub use crate::report::ReportFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
