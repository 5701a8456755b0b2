/// Source archives
pub const DEFAULT_DATA_URL: &str =
    "http://www1.ncdc.noaa.gov/pub/data/igra/monthly-por/temp_00z.mly.gz";
pub const DEFAULT_STATIONS_URL: &str = "http://www1.ncdc.noaa.gov/pub/data/igra/igra-stations.txt";

/// Station identifier derivation: IGR + WMO id + 500
pub const ARCHIVE_TAG: &str = "IGR";
pub const DISAMBIGUATION_CODE: &str = "500";
pub const WMO_ID_WIDTH: usize = 5;
pub const STATION_ID_WIDTH: usize = 11;

/// Level selection
pub const SURFACE_LEVEL: i32 = 9999;
pub const MIN_PRESSURE_LEVEL: i32 = 1;
pub const MAX_PRESSURE_LEVEL: i32 = 1100;

/// Source record layout
pub const RAW_FIELD_COUNT: usize = 6;
pub const SOURCE_MISSING_VALUE: i32 = -9999;
pub const MONTHS_PER_YEAR: usize = 12;

/// GHCN-M data record layout
pub const QUANTITY_CODE: &str = "TAVG";
pub const PROVENANCE_FLAG: char = 'f';
pub const MISSING_TOKEN: &str = "-9999";
pub const VALUE_WIDTH: usize = 5;
pub const MONTH_FIELD_WIDTH: usize = 8;
pub const DATA_LINE_WIDTH: usize = STATION_ID_WIDTH + 4 + 4 + MONTHS_PER_YEAR * MONTH_FIELD_WIDTH;

/// GHCN-M inventory record layout
pub const INVENTORY_BODY_WIDTH: usize = 68;
pub const INVENTORY_LINE_WIDTH: usize = 107;

/// Output locations
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_INVENTORY_FILE: &str = "igra.inv";
pub const DEFAULT_SETTINGS_FILE: &str = "igra";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const PROGRESS_INTERVAL: usize = 100_000;
