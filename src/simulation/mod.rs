//! The simulation engine.
//!
//! A simulation orders the diagram into a request flow, evaluates performance, cost,
//! security, and availability over that flow, validates the raw graph, and merges
//! everything into one [`SimulationResult`]. Nothing here fails: malformed input is
//! skipped, not reported as an error.

use crate::diagram::{Diagram, Edge, ServiceNode, TrafficProfile};
use crate::graph;
use crate::validation::{self, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod advanced;
mod engine;

pub use advanced::AdvancedResult;
pub use engine::{
    AvailabilityResult, CostEntry, CostResult, PerformanceResult, SecurityResult,
    analyze_availability, analyze_security, calculate_cost, calculate_performance, is_redundant,
};

/// Caller-facing switches for a single simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Also compute [`AdvancedResult`].
    pub advanced_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub performance: PerformanceResult,
    pub cost: CostResult,
    pub security: SecurityResult,
    pub availability: AvailabilityResult,
    pub validation: ValidationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedResult>,
}

pub struct Simulator {
    options: SimulationOptions,
    validate: bool,
}

pub struct SimulatorBuilder {
    options: SimulationOptions,
    validate: bool,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self {
            options: SimulationOptions::default(),
            validate: true,
        }
    }

    pub fn advanced_mode(mut self, enabled: bool) -> Self {
        self.options.advanced_mode = enabled;
        self
    }

    /// When disabled, the result carries an empty, valid validation section.
    pub fn validate(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    pub fn options(mut self, options: SimulationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Simulator {
        Simulator {
            options: self.options,
            validate: self.validate,
        }
    }
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    pub fn new(options: SimulationOptions) -> Self {
        SimulatorBuilder::new().options(options).build()
    }

    pub fn run(
        &self,
        nodes: &[ServiceNode],
        edges: &[Edge],
        traffic: &TrafficProfile,
    ) -> SimulationResult {
        let ordered = graph::order(nodes, edges);
        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            ordered = ordered.len(),
            "Running simulation"
        );

        let validation = if self.validate {
            validation::validate(nodes, edges)
        } else {
            ValidationResult::empty()
        };

        SimulationResult {
            performance: calculate_performance(&ordered, traffic),
            cost: calculate_cost(&ordered, traffic),
            security: analyze_security(&ordered, edges),
            availability: analyze_availability(&ordered),
            validation,
            advanced: self
                .options
                .advanced_mode
                .then(|| advanced::calculate_advanced(&ordered, traffic)),
        }
    }

    pub fn run_diagram(&self, diagram: &Diagram) -> SimulationResult {
        self.run(&diagram.nodes, &diagram.edges, &diagram.traffic)
    }
}

/// Simulates a diagram with the given options.
pub fn simulate(
    nodes: &[ServiceNode],
    edges: &[Edge],
    traffic: &TrafficProfile,
    options: SimulationOptions,
) -> SimulationResult {
    Simulator::new(options).run(nodes, edges, traffic)
}
