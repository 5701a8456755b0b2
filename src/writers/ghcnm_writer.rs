use crate::error::{ProcessingError, Result};
use crate::models::MonthValues;
use crate::utils::constants::{
    DATA_LINE_WIDTH, MISSING_TOKEN, MONTH_FIELD_WIDTH, PROVENANCE_FLAG, QUANTITY_CODE,
    STATION_ID_WIDTH, VALUE_WIDTH,
};
use std::io::Write;

// Largest and smallest hundredths that fit five characters without
// colliding with the missing token.
const MAX_HUNDREDTHS: i64 = 99_999;
const MIN_HUNDREDTHS: i64 = -9_998;

/// Render one monthly value as an 8 character GHCN-M field.
///
/// Values are written in hundredths of a degree, right-justified in five
/// characters, followed by two spaces and the provenance flag. A missing
/// month is the literal `-9999` padded with spaces.
pub fn format_month(value: Option<f64>) -> Result<String> {
    let Some(degrees) = value else {
        return Ok(format!("{:<width$}", MISSING_TOKEN, width = MONTH_FIELD_WIDTH));
    };

    let hundredths = (degrees * 100.0).round();
    if !(MIN_HUNDREDTHS as f64..=MAX_HUNDREDTHS as f64).contains(&hundredths) {
        return Err(ProcessingError::InvalidFormat(format!(
            "{} degrees does not fit a GHCN-M value field",
            degrees
        )));
    }

    Ok(format!(
        "{:>width$}  {}",
        hundredths as i64,
        PROVENANCE_FLAG,
        width = VALUE_WIDTH
    ))
}

/// Render a full data line (without terminator), or `None` when every
/// month is missing.
pub fn format_record(
    station_id: &str,
    year: &str,
    months: &MonthValues,
) -> Result<Option<String>> {
    if months.iter().all(Option::is_none) {
        return Ok(None);
    }

    if station_id.len() != STATION_ID_WIDTH {
        return Err(ProcessingError::InvalidFormat(format!(
            "station id '{}' is not {} characters",
            station_id, STATION_ID_WIDTH
        )));
    }
    if year.len() != 4 {
        return Err(ProcessingError::InvalidFormat(format!(
            "year '{}' is not 4 characters",
            year
        )));
    }

    let mut line = String::with_capacity(DATA_LINE_WIDTH + 1);
    line.push_str(station_id);
    line.push_str(year);
    line.push_str(QUANTITY_CODE);
    for value in months {
        line.push_str(&format_month(*value)?);
    }

    debug_assert_eq!(line.len(), DATA_LINE_WIDTH);
    Ok(Some(line))
}

/// Writes GHCN-M monthly data lines to a sink in arrival order.
pub struct GhcnmWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> GhcnmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write the line for one station year. Returns `false` when every
    /// month is missing and nothing was written.
    pub fn write_year(
        &mut self,
        station_id: &str,
        year: &str,
        months: &MonthValues,
    ) -> Result<bool> {
        match format_record(station_id, year, months)? {
            Some(line) => {
                writeln!(self.writer, "{}", line)?;
                self.lines_written += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
