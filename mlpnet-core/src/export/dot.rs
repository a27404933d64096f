// src/export/dot.rs

use crate::error::MlpError;
use crate::nn::MultiLayerPerceptron;
use std::io::Write;

/// Writes the network as a left-to-right Graphviz digraph.
///
/// Neuron `m` of boundary `i` is named `neuron_{i}_{m}`; layer `i` is a
/// subgraph connecting every `neuron_{i}_*` to every `neuron_{i+1}_*`.
pub fn write_dot<W: Write>(network: &MultiLayerPerceptron, mut writer: W) -> Result<(), MlpError> {
    let io = |e: std::io::Error| MlpError::Io {
        path: "<dot writer>".to_string(),
        message: e.to_string(),
    };

    writeln!(writer, "digraph {:?} {{", network.name()).map_err(io)?;
    writeln!(writer, "\trankdir = LR").map_err(io)?;
    writeln!(writer, "\tnode [shape=\"circle\" label=\"\"]").map_err(io)?;
    writeln!(writer).map_err(io)?;

    for (i, layer) in network.layers().iter().enumerate() {
        writeln!(writer, "\tsubgraph layer{} {{", i).map_err(io)?;
        let targets: Vec<String> = (0..layer.output_size())
            .map(|n| format!("neuron_{}_{}", i + 1, n))
            .collect();
        let targets = targets.join(" ");
        for m in 0..layer.input_size() {
            writeln!(writer, "\t\tneuron_{}_{} -> {{ {} }}", i, m, targets).map_err(io)?;
        }
        writeln!(writer, "\t}}").map_err(io)?;
    }
    writeln!(writer, "}}").map_err(io)?;
    Ok(())
}

/// Renders [`write_dot`] output into a `String`.
pub fn to_dot_string(network: &MultiLayerPerceptron) -> Result<String, MlpError> {
    let mut buffer = Vec::new();
    write_dot(network, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| MlpError::Serialization(e.to_string()))
}
