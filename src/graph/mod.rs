//! Graph model built from a snapshot

pub mod label;

pub use label::{LabelField, RecordLabel};

use crate::model::{Container, Network, Snapshot, NO_NETWORK};
use serde::Serialize;
use std::collections::HashMap;

/// Default fill color for container nodes
pub const CONTAINER_FILL: &str = "#ff9999";

/// A record-shaped node ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Graph-wide unique identifier
    pub id: String,
    pub label: RecordLabel,
    pub fill_color: String,
}

/// One end of an edge: a node, optionally a specific record port
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub node: String,
    pub port: Option<String>,
}

impl Anchor {
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            node: id.into(),
            port: None,
        }
    }

    pub fn port(id: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node: id.into(),
            port: Some(port.into()),
        }
    }
}

/// An edge between a container interface anchor and a network node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub tail: Anchor,
    pub head: Anchor,
    pub color: String,
}

/// Typed nodes and edges, ready for the DOT encoder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphModel {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphModel {
    /// Check whether a node id is present
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Node id for a network
pub fn network_node_id(name: &str) -> String {
    format!("network_{}", name)
}

/// Node id for a container
pub fn container_node_id(id: &str) -> String {
    format!("container_{}", id)
}

/// Builds the graph model from a snapshot: network nodes first (reader
/// order), then container nodes, then one edge per usable link.
pub struct GraphBuilder {
    container_fill: String,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            container_fill: CONTAINER_FILL.to_string(),
        }
    }

    /// Override the container node fill color
    pub fn with_container_fill(mut self, color: impl Into<String>) -> Self {
        self.container_fill = color.into();
        self
    }

    pub fn build(&self, snapshot: &Snapshot) -> GraphModel {
        let mut model = GraphModel::default();

        let mut colors: HashMap<&str, &str> = HashMap::new();
        for network in &snapshot.networks {
            colors.insert(network.name.as_str(), network.color.as_str());
            model.nodes.push(self.network_node(network));
        }

        for container in &snapshot.containers {
            model.nodes.push(self.container_node(container));
        }

        for link in &snapshot.links {
            if link.network_name == NO_NETWORK {
                continue;
            }
            // Links to filtered-out networks are dropped, not rendered
            let Some(color) = colors.get(link.network_name.as_str()) else {
                continue;
            };
            model.edges.push(Edge {
                tail: Anchor::port(
                    container_node_id(&link.container_id),
                    link.endpoint_id.as_str(),
                ),
                head: Anchor::node(network_node_id(&link.network_name)),
                color: (*color).to_string(),
            });
        }

        model
    }

    fn network_node(&self, network: &Network) -> Node {
        let mut label = RecordLabel::new()
            .anchored("gw_iface", network.gateway.as_str())
            .text(network.name.as_str());
        if network.internal {
            label = label.text("Internal");
        }
        if network.isolated {
            label = label.text("Containers isolated");
        }

        Node {
            id: network_node_id(&network.name),
            label,
            fill_color: network.color.clone(),
        }
    }

    fn container_node(&self, container: &Container) -> Node {
        let interfaces = container
            .interfaces
            .iter()
            .map(|iface| {
                let mut fields: Vec<LabelField> = iface
                    .aliases
                    .iter()
                    .map(|alias| LabelField::Text(alias.clone()))
                    .collect();
                fields.push(LabelField::Anchored {
                    port: iface.endpoint_id.clone(),
                    text: iface.address.clone(),
                });
                LabelField::Group(fields)
            })
            .collect();

        Node {
            id: container_node_id(&container.id),
            label: RecordLabel::new().text(container.name.as_str()).group(interfaces),
            fill_color: self.container_fill.clone(),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
