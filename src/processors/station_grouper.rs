use crate::error::Result;
use crate::models::{derive_station_id, StationYear, YearVector};

/// Follows the contiguous run of year vectors for each station, deriving
/// the station's output identifier once when its run begins.
///
/// Years are forwarded as they arrive, so a failure later in a station's
/// run does not hold back the years already grouped.
pub struct StationGrouper<I> {
    years: I,
    // Source id and derived output id of the station being forwarded
    current: Option<(String, String)>,
}

impl<I> StationGrouper<I>
where
    I: Iterator<Item = Result<YearVector>>,
{
    pub fn new(years: I) -> Self {
        Self {
            years,
            current: None,
        }
    }
}

impl<I> Iterator for StationGrouper<I>
where
    I: Iterator<Item = Result<YearVector>>,
{
    type Item = Result<StationYear>;

    fn next(&mut self) -> Option<Self::Item> {
        let vector = match self.years.next()? {
            Ok(vector) => vector,
            Err(e) => return Some(Err(e)),
        };

        let (output_id, first_of_station) = match &self.current {
            Some((station_id, output_id)) if *station_id == vector.station_id => {
                (output_id.clone(), false)
            }
            _ => {
                let output_id = match derive_station_id(&vector.station_id) {
                    Ok(id) => id,
                    Err(e) => return Some(Err(e)),
                };
                self.current = Some((vector.station_id, output_id.clone()));
                (output_id, true)
            }
        };

        Some(Ok(StationYear {
            output_id,
            year: vector.year,
            months: vector.months,
            first_of_station,
        }))
    }
}
