//! Conversion between Ordnance Survey National Grid coordinates (OSGB36,
//! Transverse Mercator) and WGS84 longitude/latitude.
//!
//! ```
//! let (lon, lat) = natgrid::grid_to_wgs84(651409.903, 313177.270).unwrap();
//! assert!((lon - 1.716052).abs() < 1e-9);
//! assert!((lat - 52.657979).abs() < 1e-9);
//!
//! let (easting, northing) = natgrid::wgs84_to_grid(-0.124625, 51.500729).unwrap();
//! assert!((easting - 530268.084).abs() < 1e-6);
//! assert!((northing - 179643.899).abs() < 1e-6);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod ellipsoid;
pub mod grid;
pub mod helmert;
pub mod latlon;
pub mod osgridref;

pub use grid::GridRef;
pub use latlon::LatLon;
pub use osgridref::OsGridRef;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod cartesian;
pub(crate) mod constants;
pub(crate) mod transform;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate input is not valid: {0}")]
    InvalidInput(String),
    #[error("OS grid reference is invalid: {0}")]
    InvalidGridRef(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an [`Error`] if `value` cannot be parsed into a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type.
///
/// # Errors
///
/// Returns an [`Error`] if `value` cannot be parsed into a valid `T`.
///
/// # Usage
///
/// ```
/// use natgrid::{GridRef, LatLon, OsGridRef};
///
/// let grid: GridRef = natgrid::from_str("530000, 180000").unwrap();
/// let latlon: LatLon = natgrid::from_str("51.503991 -0.128354").unwrap();
/// let lettered: OsGridRef = natgrid::from_str("TQ 30 80").unwrap();
///
/// assert_eq!(lettered.to_grid(), grid);
/// assert_eq!(grid.to_latlon().unwrap(), latlon);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Converts a National Grid easting/northing (meters) to WGS84
/// `(longitude, latitude)` in degrees, rounded to 6 decimal places.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either argument is NaN or infinite, or
/// if the point is so far outside the grid that the projection overflows.
pub fn grid_to_wgs84(easting: f64, northing: f64) -> Result<(f64, f64), Error> {
    let latlon = GridRef::create(easting, northing)?.to_latlon()?;

    Ok((latlon.longitude(), latlon.latitude()))
}

/// Converts WGS84 longitude/latitude (degrees) to a National Grid
/// `(easting, northing)` in meters, rounded to 3 decimal places.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either argument is NaN or infinite, the
/// longitude is outside [-180, 180] or the latitude is outside [-90, 90].
pub fn wgs84_to_grid(longitude: f64, latitude: f64) -> Result<(f64, f64), Error> {
    let grid = LatLon::create(latitude, longitude)?.to_grid();

    Ok((grid.easting(), grid.northing()))
}
