//! Snapshot reading
//!
//! Queries the runtime for networks and running containers and normalizes
//! the raw records into the typed entities in [`crate::model`]. Optional
//! attributes degrade to defaults; records that cannot be used at all are
//! skipped rather than failing the read.

use crate::error::Result;
use crate::model::{ColorAllocator, Container, Interface, Link, Network, Snapshot};
use bollard::models::{ContainerSummary, Network as NetworkRecord};
use bollard::query_parameters::{ListContainersOptions, ListNetworksOptions};
use bollard::Docker;

/// Bridge driver option disabling inter-container communication
const ICC_OPTION: &str = "com.docker.network.bridge.enable_icc";

/// Reads one point-in-time snapshot from the container runtime
pub struct SnapshotReader {
    docker: Docker,
}

impl SnapshotReader {
    pub fn new(docker: Docker) -> Self {
        Self { docker }
    }

    /// Read networks and containers into a single snapshot
    pub async fn snapshot(&self, palette: &mut ColorAllocator) -> Result<Snapshot> {
        let networks = self.read_networks(palette).await?;
        let (containers, links) = self.read_containers().await?;

        Ok(Snapshot {
            networks,
            containers,
            links,
        })
    }

    /// List networks sorted by name, skipping entries without a usable
    /// gateway, and append the synthetic host entry last.
    pub async fn read_networks(&self, palette: &mut ColorAllocator) -> Result<Vec<Network>> {
        let mut records = self
            .docker
            .list_networks(None::<ListNetworksOptions>)
            .await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));

        let mut networks = Vec::new();
        for record in &records {
            let Some(network) = normalize_network(record, palette) else {
                continue;
            };
            log::info!(
                "Network: {}{}{} gw:{}",
                network.name,
                if network.internal { " internal" } else { "" },
                if network.isolated { " isolated" } else { "" },
                network.gateway
            );
            networks.push(network);
        }

        networks.push(Network::host());

        Ok(networks)
    }

    /// List running containers sorted by name, with one interface and one
    /// link per network attachment.
    pub async fn read_containers(&self) -> Result<(Vec<Container>, Vec<Link>)> {
        let records = self
            .docker
            .list_containers(None::<ListContainersOptions>)
            .await?;

        let mut normalized: Vec<(Container, Vec<Link>)> =
            records.iter().filter_map(normalize_container).collect();
        normalized.sort_by(|a, b| a.0.name.cmp(&b.0.name));

        let mut containers = Vec::new();
        let mut links = Vec::new();
        for (container, container_links) in normalized {
            let addresses: Vec<&str> = container
                .interfaces
                .iter()
                .map(|iface| iface.address.as_str())
                .collect();
            log::info!("Container: {} {}", container.name, addresses.join(" "));

            containers.push(container);
            links.extend(container_links);
        }

        Ok((containers, links))
    }
}

/// Normalize one network record. Returns `None` for entries without a name
/// or without a gateway in the first IPAM config entry; those networks are
/// considered unused and draw no color from the allocator.
pub fn normalize_network(record: &NetworkRecord, palette: &mut ColorAllocator) -> Option<Network> {
    let name = record.name.clone()?;
    let gateway = record
        .ipam
        .as_ref()
        .and_then(|ipam| ipam.config.as_ref())
        .and_then(|config| config.first())
        .and_then(|entry| entry.gateway.clone())
        .filter(|gateway| !gateway.is_empty())?;

    let internal = record.internal.unwrap_or(false);
    let isolated = record
        .options
        .as_ref()
        .and_then(|options| options.get(ICC_OPTION))
        .map(|value| value == "false")
        .unwrap_or(false);

    Some(Network {
        name,
        gateway,
        internal,
        isolated,
        color: palette.next_color(),
    })
}

/// Normalize one container record into a container plus its links. Returns
/// `None` only when the record has no id. Attachments are ordered by
/// network name; attachments without an endpoint id are skipped.
pub fn normalize_container(record: &ContainerSummary) -> Option<(Container, Vec<Link>)> {
    let id = record.id.clone()?;
    let name = record
        .names
        .as_ref()
        .and_then(|names| names.first())
        .map(|name| name.trim_start_matches('/').to_string())
        .unwrap_or_else(|| short_id(&id).to_string());

    let mut interfaces = Vec::new();
    let mut links = Vec::new();

    if let Some(networks) = record
        .network_settings
        .as_ref()
        .and_then(|settings| settings.networks.as_ref())
    {
        let mut attachments: Vec<_> = networks.iter().collect();
        attachments.sort_by(|a, b| a.0.cmp(b.0));

        for (network_name, endpoint) in attachments {
            let Some(endpoint_id) = endpoint
                .endpoint_id
                .clone()
                .filter(|endpoint_id| !endpoint_id.is_empty())
            else {
                continue;
            };

            let address = endpoint.ip_address.clone().unwrap_or_default();
            // The runtime always includes the short id and container name
            // as aliases; both are redundant on the rendered label.
            let aliases = endpoint
                .aliases
                .clone()
                .unwrap_or_default()
                .into_iter()
                .filter(|alias| alias.as_str() != short_id(&id) && alias.as_str() != name.as_str())
                .collect();

            interfaces.push(Interface {
                endpoint_id: endpoint_id.clone(),
                address,
                aliases,
            });
            links.push(Link {
                container_id: id.clone(),
                endpoint_id,
                network_name: network_name.clone(),
            });
        }
    }

    Some((Container { id, name, interfaces }, links))
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(12)]
}
