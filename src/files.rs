//! File I/O for the CLI frontend.
//!
//! Reads a netlist from disk, runs it and writes the dataset text next to it.

use std::path::Path;

use log::info;

use crate::components::StampRegistry;
use crate::error::{QucsimError, Result};
use crate::solver::SimulatorConfig;

/// Read a text file, mapping failures to [`QucsimError::FileReadError`].
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| QucsimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a text file, mapping failures to [`QucsimError::FileWriteError`].
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| QucsimError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Simulate the netlist at `input` and write the dataset to `output`.
pub fn simulate_file(input: &Path, output: &Path, config: SimulatorConfig) -> Result<()> {
    let netlist = read_text(input)?;
    let result = crate::run_with(&netlist, StampRegistry::default(), config)?;
    write_text(output, &result)?;
    info!("wrote {} ({} bytes)", output.display(), result.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_file() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let input = dir.join(format!("qucsim-files-{}.net", id));
        let output = dir.join(format!("qucsim-files-{}.dat", id));

        write_text(&input, "Vdc:V1 top 0 U=\"1.5\"\nR:R1 top 0\n").unwrap();
        simulate_file(&input, &output, SimulatorConfig::default()).unwrap();
        let results = crate::decode_file(&output).unwrap();

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
        assert_eq!(results["top"], vec![1.5, 1.5]);
    }

    #[test]
    fn test_missing_input() {
        let input = std::env::temp_dir().join("qucsim-files-missing-input.net");
        let output = std::env::temp_dir().join("qucsim-files-missing-output.dat");
        let err = simulate_file(&input, &output, SimulatorConfig::default()).unwrap_err();
        assert!(matches!(err, QucsimError::FileReadError { .. }));
    }
}
