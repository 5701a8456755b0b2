use crate::error::{ProcessingError, Result};
use crate::models::StationMetadata;
use crate::utils::constants::{INVENTORY_BODY_WIDTH, INVENTORY_LINE_WIDTH};
use std::io::Write;

/// Render one GHCN-M inventory line, newline included.
pub fn format_inventory_line(station: &StationMetadata) -> Result<String> {
    let body = format!(
        "{} {:8.4} {:9.4} {:6.1} {:30.30}",
        station.ghcnm_id()?,
        station.latitude,
        station.longitude,
        station.elevation,
        station.name
    );

    if body.chars().count() != INVENTORY_BODY_WIDTH {
        return Err(ProcessingError::InvalidFormat(format!(
            "inventory record for station {} is {} characters, expected {}",
            station.wmo_id,
            body.chars().count(),
            INVENTORY_BODY_WIDTH
        )));
    }

    Ok(format!("{:<width$}\n", body, width = INVENTORY_LINE_WIDTH))
}

pub struct InventoryWriter<W: Write> {
    writer: W,
}

impl<W: Write> InventoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write every station, returning the number of lines written
    pub fn write_stations(&mut self, stations: &[StationMetadata]) -> Result<usize> {
        for station in stations {
            self.writer
                .write_all(format_inventory_line(station)?.as_bytes())?;
        }
        Ok(stations.len())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
