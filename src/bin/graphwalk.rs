//! CLI entry point for the `graphwalk` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "graphwalk",
    about = "Graph traversals, earliest-ancestor search, and social-network paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every traversal and search on the demonstration graph
    Graph {
        /// Starting vertex (1-7)
        #[arg(long, default_value = "1")]
        start: u32,
        /// Goal vertex for the path searches (1-7)
        #[arg(long, default_value = "6")]
        goal: u32,
    },
    /// Find the earliest ancestor in a family tree
    Ancestor {
        /// Starting individual
        start: i64,
        /// Comma-separated parent:child pairs (defaults to a built-in tree)
        #[arg(long)]
        edges: Option<String>,
    },
    /// Populate a random social network and compute social paths
    Social {
        /// Number of users to create
        #[arg(long, default_value = "10")]
        users: usize,
        /// Average number of friendships per user
        #[arg(long, default_value = "2")]
        avg: usize,
        /// User whose extended network to compute
        #[arg(long, default_value = "1")]
        start: u64,
        /// Seed for reproducible population
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Graph { start, goal } => commands::cmd_graph(start, goal, json),
        Commands::Ancestor { start, edges } => {
            let edges = match edges {
                Some(input) => match commands::parse_edges(&input) {
                    Ok(edges) => edges,
                    Err(msg) => {
                        eprintln!("{}", msg);
                        process::exit(3);
                    }
                },
                None => commands::DEFAULT_ANCESTRY.to_vec(),
            };
            commands::cmd_ancestor(&edges, start, json)
        }
        Commands::Social {
            users,
            avg,
            start,
            seed,
        } => commands::cmd_social(users, avg, start, seed, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::FriendshipTargetUnreachable { .. } => 3,
            GraphError::MissingVertex(_) => 4,
            GraphError::CyclicAncestry(_) => 5,
        };
        process::exit(code);
    }
}
