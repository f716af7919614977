//! Layout engine invocation
//!
//! The DOT source is piped to an external Graphviz layout process which
//! writes the rendered file. Output extensions are validated up front so a
//! bad destination fails before any runtime work happens.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Output formats the layout engine can produce
pub const FORMATS: [&str; 21] = [
    "bmp", "canon", "dot", "eps", "gif", "jpe", "jpeg", "jpg", "json", "pdf", "pic", "plain",
    "png", "ps", "ps2", "svg", "svgz", "tif", "tiff", "webp", "xdot",
];

/// Resolve the render format from the destination's extension.
///
/// A missing or unsupported extension is a user-input error.
pub fn output_format(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| Error::unsupported_format(path))?;

    if FORMATS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(Error::unsupported_format(path))
    }
}

/// Render DOT source to a file with the given layout engine
pub fn render_to_file(source: &str, path: &Path, engine: &str) -> Result<()> {
    let format = output_format(path)?;

    let mut child = Command::new(engine)
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::layout(format!("failed to run {}: {}", engine, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::layout(format!(
            "{} exited with {}: {}",
            engine,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}
