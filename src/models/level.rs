use crate::error::{ProcessingError, Result};
use crate::utils::constants::{MAX_PRESSURE_LEVEL, MIN_PRESSURE_LEVEL, SURFACE_LEVEL};
use std::fmt;

/// The single level a conversion run keeps.
///
/// The archive reports surface observations under the sentinel level `9999`;
/// every other level is a pressure in hPa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelSelection {
    #[default]
    Surface,
    Pressure(i32),
}

impl LevelSelection {
    pub fn from_code(code: i32) -> Result<Self> {
        if code == SURFACE_LEVEL {
            return Ok(LevelSelection::Surface);
        }

        if !(MIN_PRESSURE_LEVEL..=MAX_PRESSURE_LEVEL).contains(&code) {
            return Err(ProcessingError::Config(format!(
                "Level {} is neither a pressure in [{}, {}] hPa nor the surface sentinel {}",
                code, MIN_PRESSURE_LEVEL, MAX_PRESSURE_LEVEL, SURFACE_LEVEL
            )));
        }

        Ok(LevelSelection::Pressure(code))
    }

    /// Level value as it appears in the source archive
    pub fn code(&self) -> i32 {
        match self {
            LevelSelection::Surface => SURFACE_LEVEL,
            LevelSelection::Pressure(hpa) => *hpa,
        }
    }
}

impl fmt::Display for LevelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelSelection::Surface => write!(f, "surface"),
            LevelSelection::Pressure(hpa) => write!(f, "{} hPa", hpa),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_sentinel() {
        let level = LevelSelection::from_code(9999).unwrap();
        assert_eq!(level, LevelSelection::Surface);
        assert_eq!(level.code(), 9999);
        assert_eq!(LevelSelection::default(), LevelSelection::Surface);
    }

    #[test]
    fn test_pressure_levels() {
        assert_eq!(
            LevelSelection::from_code(500).unwrap(),
            LevelSelection::Pressure(500)
        );
        assert_eq!(LevelSelection::from_code(1000).unwrap().code(), 1000);
        assert_eq!(LevelSelection::Pressure(850).to_string(), "850 hPa");
    }

    #[test]
    fn test_invalid_levels() {
        assert!(matches!(
            LevelSelection::from_code(0),
            Err(ProcessingError::Config(_))
        ));
        assert!(LevelSelection::from_code(-10).is_err());
        assert!(LevelSelection::from_code(5000).is_err());
    }
}
