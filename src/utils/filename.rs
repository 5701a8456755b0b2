use crate::error::Result;
use crate::models::LevelSelection;
use crate::utils::constants::DEFAULT_INVENTORY_FILE;
use std::path::{Path, PathBuf};

/// Data file for a level: `{dir}/igra-level{LEVEL}.dat`
pub fn data_output_path(output_dir: &Path, level: LevelSelection) -> PathBuf {
    output_dir.join(format!("igra-level{}.dat", level.code()))
}

/// Inventory file matching the most recent data file.
///
/// Uses the lexicographically last `*.dat` in `output_dir` with its
/// extension swapped to `.inv`, or `igra.inv` when there is none.
pub fn inventory_output_path(output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Ok(output_dir.join(DEFAULT_INVENTORY_FILE));
    }

    let mut dats = Vec::new();
    for entry in std::fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "dat") {
            dats.push(path);
        }
    }
    dats.sort();

    Ok(match dats.pop() {
        Some(dat) => dat.with_extension("inv"),
        None => output_dir.join(DEFAULT_INVENTORY_FILE),
    })
}
