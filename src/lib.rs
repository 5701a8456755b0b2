//! Converts the IGRA monthly-means archive into GHCN-M data and inventory
//! files.
//!
//! The data pipeline reads per-(station, year, month, level) rows that are
//! already sorted by station and year, keeps one level, groups the rows into
//! twelve-month vectors and writes each vector as a fixed-width GHCN-M line.

pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use processors::{ConversionConfig, ConversionSummary, Converter};
