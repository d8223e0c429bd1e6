use archsim::prelude::*;
use clap::{Parser, Subcommand};
use std::process;
use std::time::Instant;
use tracing::info;

/// Simulate, validate, and inspect cloud architecture diagrams
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full simulation over a diagram file
    Simulate {
        /// Path to the diagram JSON file
        path: String,
        /// Also compute latency percentiles, scalability, and cost categories
        #[arg(short, long)]
        advanced: bool,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run only the structural validator
    Validate {
        /// Path to the diagram JSON file
        path: String,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether an edge between two service types is legal
    Connect {
        /// Source service type, e.g. `alb`
        source: String,
        /// Target service type, e.g. `ecs`
        target: String,
    },
    /// List every known service type
    Services,
}

fn main() {
    let cli = Cli::parse();
    archsim::init_logging(&cli.log_level);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Simulate {
            path,
            advanced,
            json,
        } => {
            let diagram = load(&path)?;
            let start = Instant::now();
            let result = Simulator::builder()
                .advanced_mode(advanced)
                .build()
                .run_diagram(&diagram);
            info!(elapsed = ?start.elapsed(), "Simulation complete");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", ReportFormatter::format_result(&result));
            }
        }
        Command::Validate { path, json } => {
            let diagram = load(&path)?;
            let result = validate(&diagram.nodes, &diagram.edges);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", ReportFormatter::format_validation(&result));
            }
        }
        Command::Connect { source, target } => {
            let source: ServiceType = source.parse()?;
            let target: ServiceType = target.parse()?;
            let check = can_connect(source, target);

            println!(
                "{} -> {}: {}",
                source.label(),
                target.label(),
                if check.allowed { "allowed" } else { "rejected" }
            );
            if let Some(warning) = &check.warning {
                println!("  {}", warning);
            }
            if check.allowed {
                println!("  protocol: {}", protocol_for(source, target));
            }
        }
        Command::Services => {
            for service_type in ServiceType::ALL {
                let definition = service_type.definition();
                println!(
                    "{:<18} {:<18} {:<15} {}",
                    service_type.as_str(),
                    definition.label,
                    format!("{:?}", definition.role).to_lowercase(),
                    definition.description
                );
            }
        }
    }
    Ok(())
}

fn load(path: &str) -> Result<Diagram> {
    info!(path, "Loading diagram");
    let diagram = Diagram::from_file(path)?;
    info!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "Diagram loaded"
    );
    Ok(diagram)
}
