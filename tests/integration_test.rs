// Integration tests for Wharfmap

use assert_cmd::Command;
use bollard::models::{
    ContainerSummary, ContainerSummaryNetworkSettings, EndpointSettings, Ipam, IpamConfig,
    Network as NetworkRecord,
};
use predicates::prelude::*;
use std::collections::HashMap;
use wharfmap::model::PALETTE;
use wharfmap::runtime::snapshot::{normalize_container, normalize_network};
use wharfmap::{ColorAllocator, Config, DotEncoder, GraphBuilder, Network, Snapshot};

fn network_record(name: &str, gateway: Option<&str>) -> NetworkRecord {
    NetworkRecord {
        name: Some(name.to_string()),
        ipam: gateway.map(|gw| Ipam {
            config: Some(vec![IpamConfig {
                subnet: Some("172.18.0.0/16".to_string()),
                gateway: Some(gw.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn container_record(id: &str, name: &str, attachments: &[(&str, &str, &str)]) -> ContainerSummary {
    let networks: HashMap<String, EndpointSettings> = attachments
        .iter()
        .map(|(network, endpoint_id, address)| {
            (
                network.to_string(),
                EndpointSettings {
                    endpoint_id: Some(endpoint_id.to_string()),
                    ip_address: Some(address.to_string()),
                    ..Default::default()
                },
            )
        })
        .collect();

    ContainerSummary {
        id: Some(id.to_string()),
        names: Some(vec![format!("/{}", name)]),
        network_settings: Some(ContainerSummaryNetworkSettings {
            networks: Some(networks),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// Normalize records the way the reader does, with a fresh allocator
fn snapshot_from_records(
    networks: &[NetworkRecord],
    containers: &[ContainerSummary],
) -> Snapshot {
    let mut palette = ColorAllocator::new();

    let mut normalized_networks: Vec<Network> = networks
        .iter()
        .filter_map(|record| normalize_network(record, &mut palette))
        .collect();
    normalized_networks.push(Network::host());

    let mut normalized_containers = Vec::new();
    let mut links = Vec::new();
    for record in containers {
        let Some((container, container_links)) = normalize_container(record) else {
            continue;
        };
        normalized_containers.push(container);
        links.extend(container_links);
    }

    Snapshot {
        networks: normalized_networks,
        containers: normalized_containers,
        links,
    }
}

// ============================================================================
// Model Building Tests
// ============================================================================

#[test]
fn test_single_network_single_container() {
    let snapshot = snapshot_from_records(
        &[network_record("app-net", Some("172.18.0.1"))],
        &[container_record("abc123", "web", &[("app-net", "ep1", "172.18.0.5")])],
    );

    let model = GraphBuilder::new().build(&snapshot);

    // app-net, the synthetic host network, and the container
    assert_eq!(model.nodes.len(), 3);
    assert!(model.contains_node("network_app-net"));
    assert!(model.contains_node("network_host"));
    assert!(model.contains_node("container_abc123"));

    assert_eq!(model.edges.len(), 1);
    assert_eq!(model.edges[0].tail.node, "container_abc123");
    assert_eq!(model.edges[0].tail.port.as_deref(), Some("ep1"));
    assert_eq!(model.edges[0].head.node, "network_app-net");
    assert_eq!(model.edges[0].color, PALETTE[0]);
}

#[test]
fn test_gateway_less_network_excluded() {
    let snapshot = snapshot_from_records(
        &[
            network_record("configured", Some("10.0.0.1")),
            network_record("unconfigured", None),
        ],
        &[],
    );

    let model = GraphBuilder::new().build(&snapshot);
    assert!(model.contains_node("network_configured"));
    assert!(!model.contains_node("network_unconfigured"));
}

#[test]
fn test_container_on_filtered_and_none_networks() {
    let snapshot = snapshot_from_records(
        &[network_record("unconfigured", None)],
        &[container_record(
            "c9",
            "stranded",
            &[("unconfigured", "ep1", "10.9.0.2"), ("none", "ep2", "")],
        )],
    );

    let model = GraphBuilder::new().build(&snapshot);

    // The container still appears, but neither link becomes an edge
    assert!(model.contains_node("container_c9"));
    assert!(model.edges.is_empty());
}

#[test]
fn test_edges_reference_existing_nodes() {
    let snapshot = snapshot_from_records(
        &[
            network_record("front", Some("10.1.0.1")),
            network_record("back", Some("10.2.0.1")),
        ],
        &[
            container_record("a1", "api", &[("back", "ep-a", "10.2.0.5")]),
            container_record(
                "b2",
                "proxy",
                &[("front", "ep-f", "10.1.0.5"), ("back", "ep-b", "10.2.0.6")],
            ),
        ],
    );

    let model = GraphBuilder::new().build(&snapshot);
    assert_eq!(model.edges.len(), 3);
    for edge in &model.edges {
        assert!(model.contains_node(&edge.tail.node));
        assert!(model.contains_node(&edge.head.node));
    }
}

#[test]
fn test_identical_snapshots_render_identically() {
    let records = [
        network_record("alpha", Some("10.1.0.1")),
        network_record("beta", Some("10.2.0.1")),
    ];
    let containers = [container_record("c1", "web", &[("alpha", "ep1", "10.1.0.5")])];

    let first = snapshot_from_records(&records, &containers);
    let second = snapshot_from_records(&records, &containers);
    assert_eq!(first, second);

    let encoder = DotEncoder::new();
    let first_source = encoder.encode(&GraphBuilder::new().build(&first));
    let second_source = encoder.encode(&GraphBuilder::new().build(&second));
    assert_eq!(first_source, second_source);
}

#[test]
fn test_networks_share_color_with_their_edges() {
    let snapshot = snapshot_from_records(
        &[
            network_record("alpha", Some("10.1.0.1")),
            network_record("beta", Some("10.2.0.1")),
        ],
        &[
            container_record("c1", "one", &[("beta", "ep1", "10.2.0.5")]),
            container_record("c2", "two", &[("beta", "ep2", "10.2.0.6")]),
        ],
    );

    let model = GraphBuilder::new().build(&snapshot);
    let beta = model.node("network_beta").unwrap();
    for edge in &model.edges {
        assert_eq!(edge.color, beta.fill_color);
    }
}

// ============================================================================
// DOT Encoding Tests
// ============================================================================

#[test]
fn test_dot_source_for_example_snapshot() {
    let snapshot = snapshot_from_records(
        &[network_record("app-net", Some("172.18.0.1"))],
        &[container_record("abc123", "web", &[("app-net", "ep1", "172.18.0.5")])],
    );

    let source = DotEncoder::new().encode(&GraphBuilder::new().build(&snapshot));

    assert!(source.contains(
        "\"network_app-net\" [shape=record, style=filled, fillcolor=\"#1f78b4\", \
         label=\"{ <gw_iface> 172.18.0.1 | app-net }\"];"
    ));
    assert!(source.contains("label=\"{ web | { { <ep1> 172.18.0.5 } } }\""));
    assert!(source.contains(
        "\"container_abc123\":\"ep1\" -- \"network_app-net\" [color=\"#1f78b4\"];"
    ));
}

#[test]
fn test_dot_source_node_order_is_stable() {
    // Reader order is sorted by name with host appended last; the builder
    // and encoder preserve it
    let snapshot = snapshot_from_records(
        &[
            network_record("alpha", Some("10.1.0.1")),
            network_record("zeta", Some("10.3.0.1")),
        ],
        &[],
    );

    let source = DotEncoder::new().encode(&GraphBuilder::new().build(&snapshot));
    let alpha = source.find("network_alpha").unwrap();
    let zeta = source.find("network_zeta").unwrap();
    let host = source.find("network_host").unwrap();
    assert!(alpha < zeta);
    assert!(zeta < host);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_palette_drives_network_colors() {
    let mut config = Config::default();
    config.palette.colors = vec!["#0a0b0c".to_string()];

    let mut palette = config.allocator();
    let network =
        normalize_network(&network_record("app-net", Some("172.18.0.1")), &mut palette).unwrap();
    assert_eq!(network.color, "#0a0b0c");
}

// ============================================================================
// CLI Tests
// ============================================================================

#[test]
fn test_cli_rejects_unsupported_extension() {
    // Must fail during argument validation, before any runtime connection
    Command::cargo_bin("wharfmap")
        .unwrap()
        .args(["--out", "graph.docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

#[test]
fn test_cli_rejects_extensionless_output() {
    Command::cargo_bin("wharfmap")
        .unwrap()
        .args(["--out", "graph"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

#[test]
fn test_cli_rejects_missing_explicit_config() {
    Command::cargo_bin("wharfmap")
        .unwrap()
        .args(["--config", "/nonexistent/wharfmap.toml", "--out", "graph.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("wharfmap.toml");
    std::fs::write(&config_path, "[palette]\ncolors = [\"chartreuse\"]\n").unwrap();

    Command::cargo_bin("wharfmap")
        .unwrap()
        .args(["--config"])
        .arg(&config_path)
        .args(["--out", "graph.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("#RRGGBB"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("wharfmap")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--out"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("wharfmap")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wharfmap"));
}
