//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Render a container host's networks and containers as a Graphviz graph
#[derive(Parser, Debug)]
#[command(name = "wharfmap")]
#[command(about = "Render a container host's networks and containers as a Graphviz graph")]
#[command(version)]
pub struct Args {
    /// Print each discovered network and container
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the rendered graph to this file; the extension selects the
    /// output format. Without it, DOT source is printed to stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Layout engine override (e.g. sfdp, fdp, dot)
    #[arg(long)]
    pub engine: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
