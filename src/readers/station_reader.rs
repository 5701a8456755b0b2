use crate::error::{ProcessingError, Result};
use crate::models::StationMetadata;
use std::io::{BufRead, ErrorKind};
use tracing::debug;
use validator::Validate;

// Columns are 1-based and inclusive, as in the IGRA station list readme.
const FIPS_COUNTRY: (usize, usize) = (1, 2);
const WMO_ID: (usize, usize) = (5, 9);
const NAME: (usize, usize) = (12, 46);
const LATITUDE: (usize, usize) = (48, 53);
const LONGITUDE: (usize, usize) = (55, 61);
const ELEVATION: (usize, usize) = (63, 66);
const GUAN: (usize, usize) = (68, 68);
const LKS: (usize, usize) = (69, 69);
const COMPOSITE: (usize, usize) = (70, 70);
const FIRST_YEAR: (usize, usize) = (73, 76);
const LAST_YEAR: (usize, usize) = (78, 81);

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read station metadata from any line source
    pub fn read_stations<R: BufRead>(&self, reader: R) -> Result<Vec<StationMetadata>> {
        let mut stations = Vec::new();

        for (index, line_result) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line_result.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    ProcessingError::malformed(line_number, "station line is not valid UTF-8")
                }
                _ => e.into(),
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let station = self.parse_station_line(&line, line_number)?;
            station.validate()?;
            stations.push(station);
        }

        debug!("Read {} station records", stations.len());
        Ok(stations)
    }

    /// Parse a single fixed-column line from the station list
    fn parse_station_line(&self, line: &str, line_number: usize) -> Result<StationMetadata> {
        // Columns are byte offsets
        if !line.is_ascii() {
            return Err(ProcessingError::malformed(
                line_number,
                format!("non-ASCII station line: '{}'", line.trim_end()),
            ));
        }

        let wmo_id = column(line, WMO_ID);
        if wmo_id.len() != 5 {
            return Err(ProcessingError::malformed(
                line_number,
                format!("truncated WMO id: '{}'", wmo_id),
            ));
        }

        Ok(StationMetadata {
            fips_country: column(line, FIPS_COUNTRY).to_string(),
            wmo_id: wmo_id.to_string(),
            name: column(line, NAME).trim_end().to_string(),
            latitude: parse_number(line, LATITUDE, "latitude", line_number)?,
            longitude: parse_number(line, LONGITUDE, "longitude", line_number)?,
            elevation: parse_number(line, ELEVATION, "elevation", line_number)?,
            guan: flag(line, GUAN),
            lks: flag(line, LKS),
            composite: flag(line, COMPOSITE),
            first_year: parse_number(line, FIRST_YEAR, "first year", line_number)?,
            last_year: parse_number(line, LAST_YEAR, "last year", line_number)?,
        })
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Slice an inclusive 1-based column range, clipped to the line length
fn column(line: &str, (begin, end): (usize, usize)) -> &str {
    let start = begin - 1;
    let stop = end.min(line.len());
    if start >= stop {
        return "";
    }
    line.get(start..stop).unwrap_or("")
}

fn flag(line: &str, range: (usize, usize)) -> bool {
    !column(line, range).trim().is_empty()
}

fn parse_number<T: std::str::FromStr>(
    line: &str,
    range: (usize, usize),
    field: &str,
    line_number: usize,
) -> Result<T> {
    let raw = column(line, range);
    raw.trim().parse::<T>().map_err(|_| {
        ProcessingError::malformed(line_number, format!("invalid {}: '{}'", field, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LERWICK: &str =
        "UK  03005  LERWICK                              60.13   -1.18   84 G    1948 2012";
    const BRAGANCA: &str =
        "PO  08575  BRAGANCA                             41.80   -6.73  692      1962 1987";

    #[test]
    fn test_parse_station_line() {
        let reader = StationReader::new();
        let station = reader.parse_station_line(LERWICK, 1).unwrap();

        assert_eq!(station.fips_country, "UK");
        assert_eq!(station.wmo_id, "03005");
        assert_eq!(station.name, "LERWICK");
        assert!((station.latitude - 60.13).abs() < 1e-9);
        assert!((station.longitude - -1.18).abs() < 1e-9);
        assert_eq!(station.elevation, 84.0);
        assert!(station.guan);
        assert!(!station.lks);
        assert!(!station.composite);
        assert_eq!(station.first_year, 1948);
        assert_eq!(station.last_year, 2012);
    }

    #[test]
    fn test_truncated_line_is_malformed() {
        let reader = StationReader::new();
        let err = reader.parse_station_line(&LERWICK[..60], 9).unwrap_err();

        assert!(matches!(
            err,
            ProcessingError::MalformedRecord { line: 9, .. }
        ));
    }

    #[test]
    fn test_non_ascii_line_is_malformed() {
        let reader = StationReader::new();
        let accented = LERWICK.replacen("LERWICK", "LERW\u{00CF}CK", 1);
        let err = reader.parse_station_line(&accented, 4).unwrap_err();

        assert!(matches!(
            err,
            ProcessingError::MalformedRecord { line: 4, .. }
        ));
    }

    #[test]
    fn test_undecodable_station_line_is_malformed() {
        let mut input = format!("{}\n", LERWICK).into_bytes();
        input.extend_from_slice(b"PO  08575  BRAG\xffNCA\n");

        let result = StationReader::new().read_stations(Cursor::new(input));
        assert!(matches!(
            result,
            Err(ProcessingError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_stations_skips_blank_lines() -> Result<()> {
        let input = format!("{}\n\n{}\n", LERWICK, BRAGANCA);
        let stations = StationReader::new().read_stations(Cursor::new(input))?;

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].wmo_id, "03005");
        assert_eq!(stations[1].name, "BRAGANCA");
        assert_eq!(stations[1].elevation, 692.0);
        assert!(!stations[1].guan);

        Ok(())
    }

    #[test]
    fn test_out_of_range_latitude_fails_validation() {
        let bad = LERWICK.replacen(" 60.13", " 99.13", 1);
        let result = StationReader::new().read_stations(Cursor::new(bad));

        assert!(matches!(result, Err(ProcessingError::Validation(_))));
    }
}
