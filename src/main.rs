use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use delivery_planner::utils::edge_list::load_edge_list;
use delivery_planner::{DeliveryPlan, DeliveryPlanner, PlannerConfig, PlannerError};

/// Plan the shortest round trip from a depot through a set of delivery stops
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated edge list: origin,destination[,weight]
    #[arg(short, long)]
    edges: PathBuf,

    /// Location every route starts and ends at
    #[arg(long)]
    depot: String,

    /// Delivery stops, separated by commas
    #[arg(short, long, value_delimiter = ',')]
    stops: Vec<String>,

    /// JSON planner configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat edges as one-way
    #[arg(long)]
    directed: bool,

    /// Evaluate stop orderings in parallel
    #[arg(long)]
    parallel: bool,

    /// Largest number of stops to search exhaustively
    #[arg(long)]
    max_stops: Option<usize>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = PlannerConfig::load(cli.config.as_deref())
        .context("failed to load planner configuration")?;
    config.directed |= cli.directed;
    config.parallel |= cli.parallel;
    if let Some(max_stops) = cli.max_stops {
        config.max_stops = max_stops;
    }

    let edges = load_edge_list(&cli.edges).context("failed to load edge list")?;

    let stops: Vec<String> = cli
        .stops
        .iter()
        .map(|stop| stop.trim().to_string())
        .filter(|stop| !stop.is_empty())
        .collect();
    let depot = cli.depot.trim().to_string();
    let planner = DeliveryPlanner::from_edges(edges, config);

    println!("Checking route feasibility...");
    let plan = match planner.plan(&depot, &stops) {
        Ok(plan) => plan,
        Err(err @ PlannerError::UnreachableStops { .. }) => {
            println!("One or more delivery locations are unreachable from the depot.");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    println!("Route exists.\n");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    Ok(())
}

fn print_plan(plan: &DeliveryPlan<String>) {
    println!("Delivery plan:");
    for (i, leg) in plan.legs.iter().enumerate() {
        println!("{}. {} → {} ({} ML)", i + 1, leg.from, leg.to, leg.distance);
        if leg.path.len() > 2 {
            println!("   via {}", leg.path.join(" → "));
        }
    }
    println!("Total distance: {} ML", plan.total());
}
