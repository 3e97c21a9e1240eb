use std::fmt::Display;

use crate::{
    latlon::LatLon,
    osgridref::OsGridRef,
    utility::parse_pair,
    Error, ParseCoord,
};

/// An Ordnance Survey National Grid coordinate, in meters east and north of
/// the false origin (OSGB36 datum).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRef {
    #[cfg_attr(feature = "serde", serde(alias = "e"))]
    pub(crate) easting: f64,
    #[cfg_attr(feature = "serde", serde(alias = "n"))]
    pub(crate) northing: f64,
}

impl GridRef {
    pub(crate) fn new(easting: f64, northing: f64) -> GridRef {
        Self {
            easting,
            northing,
        }
    }

    /// Tries to create a grid coordinate. Any finite easting/northing is
    /// accepted; accuracy of the conversions degrades well outside Great
    /// Britain but they remain defined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either value is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::GridRef;
    ///
    /// let coord = GridRef::create(651409.903, 313177.270).unwrap();
    /// assert_eq!(coord.easting(), 651409.903);
    /// assert_eq!(coord.northing(), 313177.270);
    ///
    /// assert!(GridRef::create(-2_000_000.0, 5_000_000.0).is_ok());
    /// assert!(GridRef::create(f64::NAN, 0.0).is_err());
    /// assert!(GridRef::create(0.0, f64::INFINITY).is_err());
    /// ```
    pub fn create(easting: f64, northing: f64) -> Result<GridRef, Error> {
        if !easting.is_finite() {
            Err(Error::InvalidInput(format!("Easting {easting} is not finite.")))
        } else if !northing.is_finite() {
            Err(Error::InvalidInput(format!("Northing {northing} is not finite.")))
        } else {
            Ok(GridRef::new(easting, northing))
        }
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`GridRef`] to WGS84 [`LatLon`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the projection series overflows,
    /// which only happens for coordinates astronomically far from Great Britain.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::GridRef;
    ///
    /// let coord = GridRef::create(651409.903, 313177.270).unwrap();
    /// let converted = coord.to_latlon().unwrap();
    ///
    /// assert!((converted.latitude() - 52.657979).abs() < 1e-9);
    /// assert!((converted.longitude() - 1.716052).abs() < 1e-9);
    /// ```
    pub fn to_latlon(&self) -> Result<LatLon, Error> {
        LatLon::from_grid(self)
    }

    /// Converts from WGS84 [`LatLon`] to [`GridRef`].
    pub fn from_latlon(value: &LatLon) -> GridRef {
        value.to_grid()
    }

    /// Converts to a lettered [`OsGridRef`] with `precision` digits per axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridRef`] if the point lies outside the lettered
    /// grid or `precision` is not in `0..=5`.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::GridRef;
    ///
    /// let coord = GridRef::create(651409.903, 313177.270).unwrap();
    /// assert_eq!(coord.to_os_grid_ref(5).unwrap().to_string(), "TG 51409 13177");
    /// assert_eq!(coord.to_os_grid_ref(3).unwrap().to_string(), "TG 514 131");
    /// ```
    pub fn to_os_grid_ref(&self, precision: i32) -> Result<OsGridRef, Error> {
        OsGridRef::from_grid(self, precision)
    }
}

impl From<LatLon> for GridRef {
    fn from(value: LatLon) -> Self {
        value.to_grid()
    }
}

impl ParseCoord for GridRef {
    /// Parses `"easting northing"` or `"easting, northing"`.
    fn parse_coord(value: &str) -> Result<GridRef, Error> {
        let (easting, northing) = parse_pair(value)
            .ok_or_else(|| Error::InvalidInput(format!("Could not parse easting/northing from {value:?}")))?;

        GridRef::create(easting, northing)
    }
}

impl Display for GridRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{easting} {northing}",
        )
    }
}
