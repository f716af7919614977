//! CLI module for Wharfmap

mod args;

pub use args::Args;

use crate::config::Config;
use crate::error::Result;
use crate::graph::GraphBuilder;
use crate::output::{output_format, render_to_file, DotEncoder};
use crate::runtime::{self, SnapshotReader};
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub async fn run() -> ExitCode {
    let args = Args::parse_args();

    init_logging(args.verbose);

    match execute(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

async fn execute(args: Args) -> Result<()> {
    // An explicitly named config file must load; the default location is
    // optional.
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new("wharfmap.toml")),
    };
    config.merge_cli(args.engine.clone());
    config.validate()?;

    // A bad destination is rejected before the runtime is contacted
    if let Some(out) = &args.out {
        output_format(out)?;
    }

    let docker = runtime::connect()?;
    let reader = SnapshotReader::new(docker);

    let mut palette = config.allocator();
    let snapshot = reader.snapshot(&mut palette).await?;

    let model = GraphBuilder::new()
        .with_container_fill(config.graph.container_fill.clone())
        .build(&snapshot);

    let source = DotEncoder::new()
        .with_splines(config.graph.splines)
        .encode(&model);

    match &args.out {
        Some(out) => {
            render_to_file(&source, out, &config.graph.engine)?;
            log::info!("Graph written to {}", out.display());
        }
        None => println!("{}", source),
    }

    Ok(())
}
