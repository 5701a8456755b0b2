use crate::error::{ProcessingError, Result};
use crate::utils::constants::MONTHS_PER_YEAR;

/// One monthly mean for one station, year, month and level.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub station_id: String,
    pub year: String,
    pub month: u32,
    pub level: i32,
    /// Degrees Celsius, `None` when the source carries its missing code
    pub temperature: Option<f64>,
    pub sample_count: u32,
}

impl RawRow {
    pub fn key(&self) -> (&str, &str) {
        (&self.station_id, &self.year)
    }
}

/// Twelve monthly values for a single station and year. `None` is MISSING.
pub type MonthValues = [Option<f64>; MONTHS_PER_YEAR];

#[derive(Debug, Clone, PartialEq)]
pub struct YearVector {
    pub station_id: String,
    pub year: String,
    pub months: MonthValues,
}

impl YearVector {
    pub fn new(station_id: String, year: String) -> Self {
        Self {
            station_id,
            year,
            months: [None; MONTHS_PER_YEAR],
        }
    }

    /// Store a row's value in its month slot. A repeated month overwrites
    /// the earlier value.
    pub fn set(&mut self, month: u32, temperature: Option<f64>) -> Result<()> {
        let slot = (month as usize)
            .checked_sub(1)
            .and_then(|index| self.months.get_mut(index))
            .ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "month {} is outside 1..={}",
                    month, MONTHS_PER_YEAR
                ))
            })?;

        *slot = temperature;
        Ok(())
    }

    pub fn is_all_missing(&self) -> bool {
        self.months.iter().all(Option::is_none)
    }
}

/// One year of a station's values, carrying the output identifier derived
/// once for the whole station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationYear {
    pub output_id: String,
    pub year: String,
    pub months: MonthValues,
    /// Set on the first year of each contiguous station run
    pub first_of_station: bool,
}
