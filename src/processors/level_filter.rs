use crate::models::{LevelSelection, RawRow};

/// Keeps the rows reported at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    level: LevelSelection,
}

impl LevelFilter {
    pub fn new(level: LevelSelection) -> Self {
        Self { level }
    }

    /// Surface observations only
    pub fn surface() -> Self {
        Self::new(LevelSelection::Surface)
    }

    pub fn keep(&self, row: &RawRow) -> bool {
        row.level == self.level.code()
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: i32) -> RawRow {
        RawRow {
            station_id: "12345".to_string(),
            year: "1950".to_string(),
            month: 1,
            level,
            temperature: Some(15.0),
            sample_count: 8,
        }
    }

    #[test]
    fn test_pressure_filter() {
        let filter = LevelFilter::new(LevelSelection::Pressure(1000));
        assert!(filter.keep(&row(1000)));
        assert!(!filter.keep(&row(850)));
        assert!(!filter.keep(&row(9999)));
    }

    #[test]
    fn test_surface_filter() {
        let filter = LevelFilter::surface();
        assert_eq!(filter, LevelFilter::default());
        assert!(filter.keep(&row(9999)));
        assert!(!filter.keep(&row(1000)));
    }
}
