use crate::error::{ProcessingError, Result};
use crate::models::RawRow;
use crate::utils::constants::{
    MONTHS_PER_YEAR, RAW_FIELD_COUNT, SOURCE_MISSING_VALUE, WMO_ID_WIDTH,
};
use std::io::BufRead;

/// Parse one whitespace-delimited monthly record:
/// `STATION YEAR MONTH LEVEL TEMP COUNT`, with TEMP in tenths of a degree.
pub fn parse_record_line(line: &str, line_number: usize) -> Result<RawRow> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() != RAW_FIELD_COUNT {
        return Err(ProcessingError::malformed(
            line_number,
            format!(
                "expected {} fields, found {}: '{}'",
                RAW_FIELD_COUNT,
                parts.len(),
                line.trim_end()
            ),
        ));
    }

    let station_id = parts[0];
    if station_id.len() != WMO_ID_WIDTH || !station_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::malformed(
            line_number,
            format!("invalid station id: '{}'", station_id),
        ));
    }

    let year = parts[1];
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::malformed(
            line_number,
            format!("invalid year: '{}'", year),
        ));
    }

    let month = parts[2]
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=MONTHS_PER_YEAR as u32).contains(m))
        .ok_or_else(|| {
            ProcessingError::malformed(line_number, format!("invalid month: '{}'", parts[2]))
        })?;

    let level = parts[3].parse::<i32>().map_err(|_| {
        ProcessingError::malformed(line_number, format!("invalid level: '{}'", parts[3]))
    })?;

    let tenths = parts[4]
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| {
            ProcessingError::malformed(
                line_number,
                format!("invalid temperature: '{}'", parts[4]),
            )
        })?;

    let temperature = if tenths == SOURCE_MISSING_VALUE as f64 {
        None
    } else {
        Some(tenths / 10.0)
    };

    let sample_count = parts[5].parse::<u32>().map_err(|_| {
        ProcessingError::malformed(
            line_number,
            format!("invalid sample count: '{}'", parts[5]),
        )
    })?;

    Ok(RawRow {
        station_id: station_id.to_string(),
        year: year.to_string(),
        month,
        level,
        temperature,
        sample_count,
    })
}

/// Streams parsed records from a line source, tagging each with its
/// 1-based line number. Blank lines are skipped.
pub struct RecordIterator<R> {
    reader: R,
    buffer: Vec<u8>,
    line_count: usize,
}

impl<R: BufRead> RecordIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_count: 0,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line_count
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<(usize, RawRow)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();

            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_count += 1;
                    let line_number = self.line_count;

                    let line = match std::str::from_utf8(&self.buffer) {
                        Ok(line) => line,
                        Err(e) => {
                            return Some(Err(ProcessingError::malformed(
                                line_number,
                                format!("invalid UTF-8 at byte {}", e.valid_up_to()),
                            )))
                        }
                    };

                    if line.trim().is_empty() {
                        continue;
                    }

                    return Some(
                        parse_record_line(line, line_number).map(|row| (line_number, row)),
                    );
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
