// src/export/json.rs

use crate::error::MlpError;
use crate::nn::{ActivationKind, MultiLayerPerceptron};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Topology record of a single layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub name: String,
    #[serde(rename = "inputsize")]
    pub input_size: usize,
    #[serde(rename = "outputsize")]
    pub output_size: usize,
    pub activation: ActivationKind,
}

/// Topology record of a whole network. Weights and biases are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub name: String,
    #[serde(rename = "inputsize")]
    pub input_size: usize,
    #[serde(rename = "outputsize")]
    pub output_size: usize,
    pub layers: Vec<LayerRecord>,
}

impl From<&MultiLayerPerceptron> for ModelRecord {
    fn from(network: &MultiLayerPerceptron) -> Self {
        ModelRecord {
            name: network.name().to_string(),
            input_size: network.input_size(),
            output_size: network.output_size(),
            layers: network
                .layers()
                .iter()
                .map(|layer| LayerRecord {
                    name: layer.name().to_string(),
                    input_size: layer.input_size(),
                    output_size: layer.output_size(),
                    activation: layer.activation_kind(),
                })
                .collect(),
        }
    }
}

/// Writes the network topology as pretty-printed JSON.
pub fn write_json<W: Write>(network: &MultiLayerPerceptron, mut writer: W) -> Result<(), MlpError> {
    serde_json::to_writer_pretty(&mut writer, &ModelRecord::from(network))?;
    writeln!(writer).map_err(|e| MlpError::Io {
        path: "<json writer>".to_string(),
        message: e.to_string(),
    })
}

/// Renders [`write_json`] output into a `String`.
pub fn to_json_string(network: &MultiLayerPerceptron) -> Result<String, MlpError> {
    let mut json = serde_json::to_string_pretty(&ModelRecord::from(network))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_record_fields() {
        let mut net = MultiLayerPerceptron::new("mlp", 4, 3);
        net.build(&[5]).unwrap();
        let json = to_json_string(&net).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "mlp");
        assert_eq!(value["inputsize"], 4);
        assert_eq!(value["outputsize"], 3);
        let layers = value["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0]["name"], "layer0");
        assert_eq!(layers[0]["activation"], "sigmoid");
        assert_eq!(layers[1]["inputsize"], 5);
        assert_eq!(layers[1]["outputsize"], 3);
        // No parameters in the export
        assert!(layers[0].get("W").is_none());
        assert!(layers[0].get("b").is_none());
    }

    #[test]
    fn test_json_writer_matches_string() {
        let mut net = MultiLayerPerceptron::new("mlp", 2, 2);
        net.build_with_activation(&[], ActivationKind::TanhOpt).unwrap();
        let mut buffer = Vec::new();
        write_json(&net, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_json_string(&net).unwrap());
        assert!(to_json_string(&net).unwrap().contains("\"tanhopt\""));
    }
}
