use lazy_static::lazy_static;

use crate::{
    cartesian::Geodetic,
    constants::{E0, F0, LAT0_DEG, LNG0_DEG, MAX_ITERATIONS, N0, PRECISION},
    ellipsoid::{Ellipsoid, OSGB36},
    utility::{polyval, Converged},
};

lazy_static! {
    pub(crate) static ref NATIONAL_GRID: TransverseMercator = TransverseMercator::national_grid();
}

/// Transverse Mercator projection with a fixed true and false origin.
///
/// Angles are in radians, grid coordinates in meters.
pub(crate) struct TransverseMercator {
    a: f64,
    b: f64,
    k0: f64,
    e2: f64,
    // Meridional arc coefficients, polynomials in n
    arc: [f64; 4],
    lat0: f64,
    lng0: f64,
    e0: f64,
    n0: f64,
}

impl TransverseMercator {
    pub fn new(ellipsoid: &Ellipsoid, k0: f64, lat0: f64, lng0: f64, e0: f64, n0: f64) -> TransverseMercator {
        let n = ellipsoid.third_flattening();

        let arc = [
            polyval(&[5. / 4., 5. / 4., 1., 1.], n),
            polyval(&[21. / 8., 3., 3., 0.], n),
            polyval(&[15. / 8., 15. / 8., 0., 0.], n),
            35. / 24. * n.powi(3),
        ];

        Self {
            a: ellipsoid.a,
            b: ellipsoid.b,
            k0,
            e2: ellipsoid.eccentricity_squared(),
            arc,
            lat0,
            lng0,
            e0,
            n0,
        }
    }

    /// The Ordnance Survey National Grid on the Airy 1830 ellipsoid.
    pub fn national_grid() -> TransverseMercator {
        Self::new(&OSGB36, F0, LAT0_DEG.to_radians(), LNG0_DEG.to_radians(), E0, N0)
    }

    /// Scaled meridional arc from the true origin latitude to `lat`.
    pub fn meridional_arc(&self, lat: f64) -> f64 {
        let dlat = lat - self.lat0;
        let slat = lat + self.lat0;

        self.b * self.k0 * (
            self.arc[0] * dlat
            - self.arc[1] * dlat.sin() * slat.cos()
            + self.arc[2] * (2. * dlat).sin() * (2. * slat).cos()
            - self.arc[3] * (3. * dlat).sin() * (3. * slat).cos()
        )
    }

    /// Scaled transverse (`v`) and meridional (`rho`) radii of curvature and
    /// eta squared at `lat`.
    fn radii(&self, lat: f64) -> (f64, f64, f64) {
        let s = 1. - self.e2 * lat.sin().powi(2);
        let v = self.a * self.k0 / s.sqrt();
        let rho = self.a * self.k0 * (1. - self.e2) * s.powf(-1.5);

        (v, rho, v / rho - 1.)
    }

    /// Latitude on the central meridian whose meridional arc matches `northing`.
    pub fn footpoint_latitude(&self, northing: f64) -> Converged {
        let mut lat = self.lat0;
        let mut m = 0.;
        let mut iterations = 0;

        while iterations < MAX_ITERATIONS {
            iterations += 1;

            lat += (northing - self.n0 - m) / (self.a * self.k0);
            m = self.meridional_arc(lat);

            if (northing - self.n0 - m).abs() < PRECISION {
                break;
            }
        }

        Converged { value: lat, iterations }
    }

    /// Grid coordinates to a point on this projection's ellipsoid.
    #[allow(clippy::similar_names)]
    pub fn grid_to_geodetic(&self, easting: f64, northing: f64) -> Geodetic {
        let lat = self.footpoint_latitude(northing).value;
        let (v, rho, eta2) = self.radii(lat);

        let t = lat.tan();
        let t2 = t.powi(2);
        let sec = lat.cos().recip();

        let c7 = t / (2. * rho * v);
        let c8 = t / (24. * rho * v.powi(3)) * (5. + 3. * t2 + eta2 - 9. * t2 * eta2);
        let c9 = t / (720. * rho * v.powi(5)) * polyval(&[45., 90., 61.], t2);
        let c10 = sec / v;
        let c11 = sec / (6. * v.powi(3)) * (v / rho + 2. * t2);
        let c12 = sec / (120. * v.powi(5)) * polyval(&[24., 28., 5.], t2);
        let c12a = sec / (5040. * v.powi(7)) * polyval(&[720., 1320., 662., 61.], t2);

        let d = easting - self.e0;
        let d2 = d.powi(2);

        Geodetic::new(
            self.lng0 + d * polyval(&[-c12a, c12, -c11, c10], d2),
            lat + d2 * polyval(&[-c9, c8, -c7], d2),
        )
    }

    /// A point on this projection's ellipsoid to grid coordinates.
    pub fn geodetic_to_grid(&self, point: Geodetic) -> (f64, f64) {
        let lat = point.lat;
        let (v, rho, eta2) = self.radii(lat);

        let (sin, cos) = lat.sin_cos();
        let t2 = lat.tan().powi(2);

        let c1 = self.meridional_arc(lat) + self.n0;
        let c2 = v / 2. * sin * cos;
        let c3 = v / 24. * sin * cos.powi(3) * (5. - t2 + 9. * eta2);
        let c3a = v / 720. * sin * cos.powi(5) * polyval(&[1., -58., 61.], t2);
        let c4 = v * cos;
        let c5 = v / 6. * cos.powi(3) * (v / rho - t2);
        let c6 = v / 120. * cos.powi(5) * (5. - 18. * t2 + t2.powi(2) + 14. * eta2 - 58. * t2 * eta2);

        let d = point.lng - self.lng0;
        let d2 = d.powi(2);

        (
            self.e0 + d * polyval(&[c6, c5, c4], d2),
            polyval(&[c3a, c3, c2, c1], d2),
        )
    }
}
