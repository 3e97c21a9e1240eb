//! Reference ellipsoids used by the WGS84 and OSGB36 datums.

/// A reference ellipsoid given by its semi-major and semi-minor axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

/// The WGS84 ellipsoid (GPS and web mapping).
#[allow(clippy::unreadable_literal)]
pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6378137.0,
    b: 6356752.3142,
};

/// The Airy 1830 ellipsoid underlying OSGB36 and the National Grid.
#[allow(clippy::unreadable_literal)]
pub const OSGB36: Ellipsoid = Ellipsoid {
    a: 6377563.396,
    b: 6356256.909,
};

impl Ellipsoid {
    /// Semi-major axis in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    /// Semi-minor axis in meters.
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }

    /// First eccentricity squared, *e² = (a² − b²) / a²*.
    pub fn eccentricity_squared(&self) -> f64 {
        (self.a.powi(2) - self.b.powi(2)) / self.a.powi(2)
    }

    /// Third flattening, *n = (a − b) / (a + b)*.
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// Radius of curvature in the prime vertical at `lat` (radians).
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1. - self.eccentricity_squared() * lat.sin().powi(2)).sqrt()
    }

    /// Radius of curvature in the meridian at `lat` (radians).
    pub fn meridional_radius(&self, lat: f64) -> f64 {
        let e2 = self.eccentricity_squared();
        self.a * (1. - e2) * (1. - e2 * lat.sin().powi(2)).powf(-1.5)
    }
}
