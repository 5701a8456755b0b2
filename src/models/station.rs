use crate::error::{ProcessingError, Result};
use crate::utils::constants::{ARCHIVE_TAG, DISAMBIGUATION_CODE, WMO_ID_WIDTH};
use validator::Validate;

/// Build the 11 character GHCN-M identifier for a WMO station.
///
/// Some WMO ids are shared by a radiosonde station and a surface station,
/// so the `500` suffix keeps IGRA ids apart from GHCN-M's own.
pub fn derive_station_id(wmo_id: &str) -> Result<String> {
    if wmo_id.len() != WMO_ID_WIDTH || !wmo_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::InvalidFormat(format!(
            "WMO id must be {} digits, got '{}'",
            WMO_ID_WIDTH, wmo_id
        )));
    }

    Ok(format!("{}{}{}", ARCHIVE_TAG, wmo_id, DISAMBIGUATION_CODE))
}

#[derive(Debug, Clone, Validate)]
pub struct StationMetadata {
    pub fips_country: String,

    #[validate(length(equal = 5))]
    pub wmo_id: String,

    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: f64,

    pub guan: bool,
    pub lks: bool,
    pub composite: bool,

    pub first_year: i32,
    pub last_year: i32,
}

impl StationMetadata {
    pub fn ghcnm_id(&self) -> Result<String> {
        derive_station_id(&self.wmo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(latitude: f64) -> StationMetadata {
        StationMetadata {
            fips_country: "UK".to_string(),
            wmo_id: "03005".to_string(),
            name: "LERWICK".to_string(),
            latitude,
            longitude: -1.18,
            elevation: 84.0,
            guan: true,
            lks: false,
            composite: false,
            first_year: 1948,
            last_year: 2012,
        }
    }

    #[test]
    fn test_derive_station_id() {
        assert_eq!(derive_station_id("12345").unwrap(), "IGR12345500");
        assert_eq!(derive_station_id("03005").unwrap(), "IGR03005500");
    }

    #[test]
    fn test_derive_station_id_is_injective() {
        let a = derive_station_id("01001").unwrap();
        let b = derive_station_id("10010").unwrap();
        assert_ne!(a, b);
        assert_eq!(&a[3..8], "01001");
        assert_eq!(&b[3..8], "10010");
    }

    #[test]
    fn test_derive_station_id_rejects_bad_ids() {
        assert!(derive_station_id("1234").is_err());
        assert!(derive_station_id("123456").is_err());
        assert!(derive_station_id("12a45").is_err());
    }

    #[test]
    fn test_station_validation() {
        let valid = station(60.13);
        assert!(valid.validate().is_ok());
        assert_eq!(valid.ghcnm_id().unwrap(), "IGR03005500");

        let invalid = station(91.0);
        assert!(invalid.validate().is_err());
    }
}
