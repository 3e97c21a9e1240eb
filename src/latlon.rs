use std::fmt::Display;

use crate::{
    cartesian::Geodetic,
    constants::{GRID_DECIMALS, LATLON_DECIMALS},
    grid::GridRef,
    transform,
    utility::{parse_pair, GeoMath},
    Error, ParseCoord,
};

/// Representation of a WGS84 latitude/longitude point in degrees. Can be
/// converted to/from [`GridRef`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "lng"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// NaN and infinite values are never valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::LatLon;
    ///
    /// let coord = LatLon::create(51.500729, -0.124625);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 51.500729);
    /// assert_eq!(coord.longitude(), -0.124625);
    ///
    /// let invalid_coord_lat = LatLon::create(91.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, 181.0);
    /// assert!(invalid_coord_lon.is_err());
    ///
    /// assert!(LatLon::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !lat.is_finite() || !lon.is_finite() {
            Err(Error::InvalidInput(format!("Latitude {lat} and longitude {lon} must both be finite.")))
        } else if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidInput(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::InvalidInput(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts from [`GridRef`] to [`LatLon`]. Latitude and longitude are
    /// rounded to 6 decimal places (~0.11m).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the grid coordinate is so far from
    /// the false origin that the projection series overflows.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::{GridRef, LatLon};
    ///
    /// let grid = GridRef::create(530000.0, 180000.0).unwrap();
    /// let converted = LatLon::from_grid(&grid).unwrap();
    ///
    /// assert!((converted.latitude() - 51.503991).abs() < 1e-9);
    /// assert!((converted.longitude() - -0.128354).abs() < 1e-9);
    ///
    /// let overflowing = GridRef::create(1e60, 0.0).unwrap();
    /// assert!(LatLon::from_grid(&overflowing).is_err());
    /// ```
    pub fn from_grid(value: &GridRef) -> Result<LatLon, Error> {
        let point = transform::grid_to_wgs84(value.easting, value.northing);

        if !point.lat.is_finite() || !point.lng.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Easting {} and northing {} overflow the National Grid projection.",
                value.easting,
                value.northing,
            )));
        }

        Ok(LatLon::new(
            point.lat.to_degrees().round_to(LATLON_DECIMALS),
            point.lng.to_degrees().round_to(LATLON_DECIMALS),
        ))
    }

    /// Converts from [`LatLon`] to [`GridRef`]. Easting and northing are
    /// rounded to 3 decimal places (mm).
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::LatLon;
    ///
    /// let coord = LatLon::create(51.500729, -0.124625).unwrap();
    /// let converted = coord.to_grid();
    ///
    /// assert!((converted.easting() - 530268.084).abs() < 1e-6);
    /// assert!((converted.northing() - 179643.899).abs() < 1e-6);
    /// ```
    pub fn to_grid(&self) -> GridRef {
        let (easting, northing) = transform::wgs84_to_grid(Geodetic::new(
            self.longitude.to_radians(),
            self.latitude.to_radians(),
        ));

        GridRef::new(
            easting.round_to(GRID_DECIMALS),
            northing.round_to(GRID_DECIMALS),
        )
    }
}

impl TryFrom<GridRef> for LatLon {
    type Error = Error;

    fn try_from(value: GridRef) -> Result<Self, Self::Error> {
        LatLon::from_grid(&value)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"lat lon"` or `"lat, lon"`.
    fn parse_coord(value: &str) -> Result<LatLon, Error> {
        let (lat, lon) = parse_pair(value)
            .ok_or_else(|| Error::InvalidInput(format!("Could not parse latitude/longitude from {value:?}")))?;

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserialize_field_names() {
        for json in [
            r#"{"latitude": 52.657979, "longitude": 1.716052}"#,
            r#"{"lat": 52.657979, "lon": 1.716052}"#,
            r#"{"lat": 52.657979, "lng": 1.716052}"#,
        ] {
            let coord: LatLon = serde_json::from_str(json).unwrap();
            assert_eq!(coord, LatLon::new(52.657_979, 1.716_052), "{json}");
        }
    }

    #[test]
    fn serialize_uses_full_names() {
        let json = serde_json::to_string(&LatLon::new(52.5, -1.25)).unwrap();
        assert_eq!(json, r#"{"latitude":52.5,"longitude":-1.25}"#);
    }
}
