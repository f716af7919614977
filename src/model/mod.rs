//! Snapshot entities for a container host

pub mod palette;

pub use palette::{ColorAllocator, PALETTE};

use serde::Serialize;

/// Name of the synthetic network representing host networking
pub const HOST_NETWORK: &str = "host";

/// Placeholder gateway shown on the synthetic host network
pub const HOST_GATEWAY: &str = "0.0.0.0";

/// Network attachment sentinel for containers with networking disabled.
/// Links to it are never rendered.
pub const NO_NETWORK: &str = "none";

/// A usable network on the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    /// Network name, unique within a snapshot
    pub name: String,
    /// Gateway address of the first IPAM config entry
    pub gateway: String,
    /// Network is internal (no external connectivity)
    pub internal: bool,
    /// Inter-container communication is disabled
    pub isolated: bool,
    /// Color assigned for this snapshot
    pub color: String,
}

impl Network {
    /// The synthetic host-networking entry, appended after all real networks
    pub fn host() -> Self {
        Self {
            name: HOST_NETWORK.to_string(),
            gateway: HOST_GATEWAY.to_string(),
            internal: false,
            isolated: false,
            color: "#808080".to_string(),
        }
    }
}

/// One network attachment of a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Endpoint id, unique within the owning container; used as the edge
    /// anchor port
    pub endpoint_id: String,
    /// IP address on the attached network, empty when unassigned
    pub address: String,
    /// Alternate names, with the container's own short id and name removed
    pub aliases: Vec<String>,
}

/// A running container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    /// Full container id, unique within a snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// One interface per attached network, in attachment order
    pub interfaces: Vec<Interface>,
}

/// A container-interface-to-network attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub container_id: String,
    pub endpoint_id: String,
    pub network_name: String,
}

/// One point-in-time view of the host, consumed once by the graph builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Networks sorted by name, with the synthetic host entry last
    pub networks: Vec<Network>,
    pub containers: Vec<Container>,
    pub links: Vec<Link>,
}

impl Snapshot {
    /// Look up a network by name
    pub fn network(&self, name: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.name == name)
    }
}
