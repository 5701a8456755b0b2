use crate::error::{ProcessingError, Result};
use crate::models::{RawRow, YearVector};

/// Folds consecutive rows sharing a (station, year) key into one
/// [`YearVector`].
///
/// Grouping is by adjacency: the input must already be sorted by station,
/// then year. A key that sorts before the previous one means the input is
/// out of order (or a key recurs non-contiguously) and is reported as an
/// error instead of being silently split into two groups.
///
/// Within a group a repeated month overwrites the earlier value. Whether
/// true duplicates should instead be rejected is unresolved; last write wins.
pub struct YearGrouper<I> {
    rows: I,
    current: Option<YearVector>,
    finished: bool,
}

impl<I> YearGrouper<I>
where
    I: Iterator<Item = Result<(usize, RawRow)>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            current: None,
            finished: false,
        }
    }

    fn fail(&mut self, error: ProcessingError) -> Option<Result<YearVector>> {
        self.finished = true;
        self.current = None;
        Some(Err(error))
    }
}

impl<I> Iterator for YearGrouper<I>
where
    I: Iterator<Item = Result<(usize, RawRow)>>,
{
    type Item = Result<YearVector>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (line, row) = match self.rows.next() {
                Some(Ok(item)) => item,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.finished = true;
                    return self.current.take().map(Ok);
                }
            };

            let same_key = self
                .current
                .as_ref()
                .is_some_and(|v| v.station_id == row.station_id && v.year == row.year);

            if same_key {
                let stored = match self.current.as_mut() {
                    Some(vector) => vector.set(row.month, row.temperature),
                    None => Ok(()),
                };
                if let Err(e) = stored {
                    return self.fail(ProcessingError::malformed(line, e.to_string()));
                }
                continue;
            }

            if let Some(previous) = &self.current {
                if row.key() < (previous.station_id.as_str(), previous.year.as_str()) {
                    let error = ProcessingError::OutOfOrder {
                        line,
                        previous: format!("{}/{}", previous.station_id, previous.year),
                        current: format!("{}/{}", row.station_id, row.year),
                    };
                    return self.fail(error);
                }
            }

            let mut vector = YearVector::new(row.station_id, row.year);
            if let Err(e) = vector.set(row.month, row.temperature) {
                return self.fail(ProcessingError::malformed(line, e.to_string()));
            }

            if let Some(completed) = self.current.replace(vector) {
                return Some(Ok(completed));
            }
        }
    }
}
