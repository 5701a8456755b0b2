pub mod record_reader;
pub mod source;
pub mod station_reader;

pub use record_reader::{parse_record_line, RecordIterator};
pub use source::DataSource;
pub use station_reader::StationReader;
