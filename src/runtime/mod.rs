//! Container runtime boundary

pub mod snapshot;

pub use snapshot::SnapshotReader;

use crate::error::Result;
use bollard::Docker;

/// Connect to the container runtime.
///
/// Honors `DOCKER_HOST` (either a `unix://` socket path or a `tcp://`
/// address), falling back to the platform-local socket defaults.
pub fn connect() -> Result<Docker> {
    let docker = if let Ok(docker_host) = std::env::var("DOCKER_HOST") {
        log::debug!("Using DOCKER_HOST: {}", docker_host);
        if let Some(socket_path) = docker_host.strip_prefix("unix://") {
            Docker::connect_with_socket(socket_path, 120, bollard::API_DEFAULT_VERSION)?
        } else {
            Docker::connect_with_http(&docker_host, 120, bollard::API_DEFAULT_VERSION)?
        }
    } else {
        Docker::connect_with_local_defaults()?
    };

    Ok(docker)
}
