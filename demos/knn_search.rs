//! Build a random k-nearest-neighbor graph and compare search strategies on
//! one root/target pair.
//!
//! Run: cargo run --bin knn-search -- --nodes 5000 --neighbors 5 --seed 7

use clap::Parser;
use flexi_logger::Logger;
use geosearch_core::GraphConfig;
use geosearch_demos::{DemoConfig, run};
use geosearch_paths::{Heuristic, SearchConfig, Strategy};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of nodes (also the side of the bounding square).
    #[arg(long, default_value_t = 500)]
    nodes: usize,
    /// Nearest neighbors each node links to.
    #[arg(long, short = 'k', default_value_t = 3)]
    neighbors: usize,
    /// Seed for point placement and random root/target choice.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long)]
    root: Option<usize>,
    #[arg(long)]
    target: Option<usize>,
    /// Stop each search after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Use the uniform-cost (zero) estimate for the A strategy.
    #[arg(long)]
    uniform_a: bool,
    /// Strategy to run (bfs, dfs, best, a, astar); repeatable, default all.
    #[arg(long = "strategy", short = 's')]
    strategies: Vec<Strategy>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    let _logger = match Logger::try_with_env_or_str("info").and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let config = DemoConfig {
        graph: GraphConfig::new(args.nodes, args.neighbors),
        search: SearchConfig {
            a_heuristic: if args.uniform_a {
                Heuristic::Zero
            } else {
                Heuristic::ManhattanScaled
            },
            max_expansions: args.max_expansions,
        },
        seed: args.seed,
        root: args.root,
        target: args.target,
        strategies: if args.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            args.strategies
        },
    };

    let demo = match run(&config) {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&demo) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", demo.render());
    }
}
