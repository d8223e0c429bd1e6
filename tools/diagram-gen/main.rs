use archsim::connection::{can_connect, protocol_for};
use archsim::diagram::{Diagram, Edge, ServiceNode, TrafficProfile};
use archsim::service::ServiceType::{self, *};
use clap::Parser;
use rand::seq::IndexedRandom;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

/// A CLI tool to generate random layered diagrams for the archsim CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_diagram.json")]
    output: String,

    /// The minimum number of compute nodes
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of compute nodes
    #[arg(long, default_value_t = 4)]
    max: usize,
}

const ENTRY: &[ServiceType] = &[Route53, Cloudfront, ApiGateway];
const BALANCERS: &[ServiceType] = &[Alb, Nlb];
const COMPUTE: &[ServiceType] = &[Ecs, Eks, Ec2, Lambda];
const DATA: &[ServiceType] = &[Rds, Dynamodb, Elasticache, S3, Sqs];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 || cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) must be at least 1 and not greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let compute_count = rng.random_range(cli.min..=cli.max);
    println!("Generating a layered diagram with {} compute node(s)...", compute_count);

    let mut generator = Generator::default();
    let entry = generator.layer(&mut rng, ENTRY, 1);
    let balancers = generator.layer(&mut rng, BALANCERS, 1);
    let compute = generator.layer(&mut rng, COMPUTE, compute_count);
    let data_count = rng.random_range(1..=3);
    let data = generator.layer(&mut rng, DATA, data_count);

    generator.connect(&entry, &balancers);
    generator.connect(&balancers, &compute);
    generator.connect(&compute, &data);

    let diagram = Diagram {
        nodes: generator.nodes,
        edges: generator.edges,
        traffic: TrafficProfile {
            requests_per_second: rng.random_range(10.0..5000.0_f64).round(),
            average_payload_size: rng.random_range(1.0..100.0_f64).round(),
            read_write_ratio: rng.random_range(0.5..0.95_f64),
            ..TrafficProfile::default()
        },
    };

    println!(
        "-> {} node(s), {} edge(s).",
        diagram.nodes.len(),
        diagram.edges.len()
    );

    let json_output = serde_json::to_string_pretty(&diagram)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved diagram to '{}'", cli.output);

    Ok(())
}

#[derive(Default)]
struct Generator {
    nodes: Vec<ServiceNode>,
    edges: Vec<Edge>,
}

impl Generator {
    /// Adds `count` randomly chosen nodes and returns their positions.
    fn layer(&mut self, rng: &mut ThreadRng, choices: &[ServiceType], count: usize) -> Vec<usize> {
        (0..count)
            .filter_map(|_| choices.choose(&mut *rng).copied())
            .map(|service_type| {
                let id = format!("{}-{}", service_type.as_str(), self.nodes.len() + 1);
                self.nodes.push(ServiceNode::new(id, service_type));
                self.nodes.len() - 1
            })
            .collect()
    }

    /// Wires every legal pair between two layers, labelled with the inferred protocol.
    fn connect(&mut self, from: &[usize], to: &[usize]) {
        for &source in from {
            for &target in to {
                let (s, t) = (&self.nodes[source], &self.nodes[target]);
                if !can_connect(s.service_type, t.service_type).allowed {
                    continue;
                }
                let id = format!("e{}", self.edges.len() + 1);
                let edge = Edge::new(id, s.id.clone(), t.id.clone())
                    .with_protocol(protocol_for(s.service_type, t.service_type).as_str());
                self.edges.push(edge);
            }
        }
    }
}
