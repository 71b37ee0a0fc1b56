//! Command-line interface over the graph engine.
//!
//! Loads a graph description file, runs one query against it, and prints
//! the answer as plain text or JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::info;

use crate::desc;
use crate::error::Result;
use crate::graph::Graph;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "routegraph", version, about = "Query an undirected weighted graph")]
pub struct Cli {
    /// Graph description file: node names on the first line, then one
    /// `name name weight` edge per line. `#` starts a comment.
    pub graph_file: PathBuf,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count the connected components.
    Components,
    /// Test whether a path exists between two nodes.
    Reachable { from: String, to: String },
    /// Find a path between two nodes and its total cost.
    Path {
        from: String,
        to: String,
        /// Traversal to use for the path.
        #[arg(long, value_enum, default_value_t = Algorithm::Dijkstra)]
        algorithm: Algorithm,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// First path discovered depth-first.
    Dfs,
    /// Fewest hops.
    Bfs,
    /// Minimum total weight.
    Dijkstra,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Run one parsed invocation and return the text to print.
pub fn execute(cli: &Cli) -> Result<String> {
    let description = desc::load(&cli.graph_file)?;
    let graph = Graph::from_description(&description)?;
    let stats = graph.stats();
    info!(nodes = stats.nodes, edges = stats.edges, "graph loaded");

    let output = match &cli.command {
        Command::Components => {
            let count = graph.connected_components();
            if cli.json {
                json!({ "components": count }).to_string()
            } else {
                count.to_string()
            }
        }
        Command::Reachable { from, to } => {
            let reachable = graph.is_reachable(from, to)?;
            if cli.json {
                json!({ "from": from, "to": to, "reachable": reachable }).to_string()
            } else {
                reachable.to_string()
            }
        }
        Command::Path {
            from,
            to,
            algorithm,
        } => {
            let summary = match algorithm {
                Algorithm::Dfs => graph.dfs_path_between(from, to)?,
                Algorithm::Bfs => graph.bfs_path_between(from, to)?,
                Algorithm::Dijkstra => graph.dijkstra_path_between(from, to)?,
            };
            if cli.json {
                serde_json::to_string(&summary).unwrap_or_default()
            } else if summary.is_empty() {
                format!("no path from {from} to {to}")
            } else {
                format!("cost {}: {}", summary.cost, summary.path.join(" -> "))
            }
        }
    };
    Ok(output)
}

/// Parse the process arguments, execute, and print.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
