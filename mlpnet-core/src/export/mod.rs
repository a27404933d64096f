// src/export/mod.rs
// Topology export of a MultiLayerPerceptron. Weights are not exported.

pub mod dot;
pub mod json;

pub use dot::{to_dot_string, write_dot};
pub use json::{to_json_string, write_json, LayerRecord, ModelRecord};

use crate::error::MlpError;
use crate::nn::MultiLayerPerceptron;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output formats understood by [`save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Graphviz digraph, one fully connected edge list per layer.
    Dot,
    /// One record per layer with its sizes and activation name.
    Json,
}

impl ExportFormat {
    /// Picks the format from the file extension (case-insensitive).
    ///
    /// # Errors
    /// Returns `MlpError::UnsupportedExportFormat` with the offending extension
    /// (empty when there is none).
    pub fn from_path(path: &Path) -> Result<Self, MlpError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "dot" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            _ => Err(MlpError::UnsupportedExportFormat(ext)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Dot => "dot",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes the topology of `network` in `format` to `writer`.
pub fn write_to<W: Write>(network: &MultiLayerPerceptron, format: ExportFormat, writer: W) -> Result<(), MlpError> {
    match format {
        ExportFormat::Dot => write_dot(network, writer),
        ExportFormat::Json => write_json(network, writer),
    }
}

/// Saves the topology of `network` to `path`, choosing the format from the extension.
///
/// Nothing is written when the extension is not supported; callers that want
/// to ignore such paths can match on `MlpError::UnsupportedExportFormat`.
///
/// # Errors
/// - `MlpError::UnbuiltNetwork` if the network has no layers.
/// - `MlpError::UnsupportedExportFormat` for an extension other than `dot`/`json`.
/// - `MlpError::Io` if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(network: &MultiLayerPerceptron, path: P) -> Result<(), MlpError> {
    let path = path.as_ref();
    if !network.is_built() {
        return Err(MlpError::UnbuiltNetwork);
    }
    let format = ExportFormat::from_path(path)?;

    let file = File::create(path).map_err(|e| MlpError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_to(network, format, &mut writer)?;
    writer.flush().map_err(|e| MlpError::io(path, e))?;

    info!(
        "Saved topology of '{}' ({} layers) to {} as {}",
        network.name(),
        network.layers().len(),
        path.display(),
        format.extension()
    );
    Ok(())
}
