use mlpnet_data::Sample;
use std::io::Write;
use std::path::Path;

/// Writes samples as `f1,...,fk,label` lines, the layout of the UCI Iris file.
#[allow(dead_code)]
pub fn write_csv(path: &Path, samples: &[Sample]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for sample in samples {
        let fields: Vec<String> = sample.features.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{},{}", fields.join(","), sample.label)?;
    }
    // The UCI file ends with a blank line.
    writeln!(file)?;
    Ok(())
}
