pub mod converter;
pub mod level_filter;
pub mod station_grouper;
pub mod year_grouper;

pub use converter::{ConversionConfig, ConversionSummary, Converter};
pub use level_filter::LevelFilter;
pub use station_grouper::StationGrouper;
pub use year_grouper::YearGrouper;
