//! Wharfmap - render container networks as a Graphviz graph
//!
//! Takes one snapshot of a container host's networks and running containers
//! and builds a record-styled graph of the attachments between them.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod output;
pub mod runtime;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{GraphBuilder, GraphModel};
pub use model::{ColorAllocator, Container, Interface, Link, Network, Snapshot};
pub use output::DotEncoder;
