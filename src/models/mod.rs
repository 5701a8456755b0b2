pub mod level;
pub mod monthly;
pub mod station;

pub use level::LevelSelection;
pub use monthly::{MonthValues, RawRow, StationYear, YearVector};
pub use station::{derive_station_id, StationMetadata};
