use crate::error::Result;
use crate::models::LevelSelection;
use crate::processors::{LevelFilter, StationGrouper, YearGrouper};
use crate::readers::RecordIterator;
use crate::utils::constants::PROGRESS_INTERVAL;
use crate::utils::progress::ProgressReporter;
use crate::writers::GhcnmWriter;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Parameters fixed for the whole of one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    pub level: LevelSelection,
}

impl ConversionConfig {
    pub fn new(level: LevelSelection) -> Self {
        Self { level }
    }

    pub fn from_level_code(code: i32) -> Result<Self> {
        Ok(Self::new(LevelSelection::from_code(code)?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines_read: usize,
    pub rows_kept: usize,
    pub records_written: usize,
    pub years_skipped: usize,
    pub stations_written: usize,
}

impl ConversionSummary {
    pub fn summary(&self) -> String {
        format!(
            "Conversion Summary:\n\
             - Lines read: {}\n\
             - Rows at selected level: {}\n\
             - Year records written: {}\n\
             - All-missing years skipped: {}\n\
             - Stations written: {}",
            self.lines_read,
            self.rows_kept,
            self.records_written,
            self.years_skipped,
            self.stations_written
        )
    }
}

/// Converts a sorted IGRA monthly line stream into GHCN-M data lines for a
/// single level.
///
/// The pipeline is lazy and sequential: rows are parsed, filtered and
/// grouped as they are pulled, and each year is written as soon as its last
/// month has been seen. The first malformed or out-of-order line aborts
/// the run; lines already written to the sink stay there.
pub struct Converter {
    config: ConversionConfig,
    filter: LevelFilter,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            filter: LevelFilter::new(config.level),
        }
    }

    /// Surface observations only
    pub fn surface() -> Self {
        Self::new(ConversionConfig::new(LevelSelection::Surface))
    }

    pub fn convert<R, W>(
        &self,
        input: R,
        output: W,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConversionSummary>
    where
        R: BufRead,
        W: Write,
    {
        info!("Converting level {}", self.config.level);

        let mut summary = ConversionSummary::default();
        let mut records = RecordIterator::new(input);
        let mut writer = GhcnmWriter::new(output);
        let mut rows_kept = 0;

        {
            let filter = self.filter;
            let kept = records.by_ref().filter(|item| match item {
                Ok((line, row)) => {
                    if line % PROGRESS_INTERVAL == 0 {
                        if let Some(progress) = progress {
                            progress.set_message(&format!("Read {} lines", line));
                        }
                    }
                    let keep = filter.keep(row);
                    if keep {
                        rows_kept += 1;
                    }
                    keep
                }
                Err(_) => true,
            });

            let mut station_has_output = false;

            for record in StationGrouper::new(YearGrouper::new(kept)) {
                let record = record?;
                if record.first_of_station {
                    debug!("Converting station {}", record.output_id);
                    station_has_output = false;
                }

                if writer.write_year(&record.output_id, &record.year, &record.months)? {
                    if !station_has_output {
                        summary.stations_written += 1;
                        station_has_output = true;
                    }
                } else {
                    summary.years_skipped += 1;
                }
            }
        }

        summary.records_written = writer.lines_written();
        writer.finish()?;

        summary.lines_read = records.lines_read();
        summary.rows_kept = rows_kept;

        info!(
            "Wrote {} records for {} stations from {} lines",
            summary.records_written, summary.stations_written, summary.lines_read
        );

        Ok(summary)
    }
}
