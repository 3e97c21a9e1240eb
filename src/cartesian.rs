use crate::{
    constants::{MAX_ITERATIONS, PRECISION},
    ellipsoid::Ellipsoid,
    utility::Converged,
};

/// Geocentric point relative to an ellipsoid, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Ellipsoidal point. Angles in radians, height in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Geodetic {
    pub lng: f64,
    pub lat: f64,
    pub height: f64,
}

impl Geodetic {
    pub fn new(lng: f64, lat: f64) -> Geodetic {
        Self { lng, lat, height: 0. }
    }

    pub fn to_cartesian(self, ellipsoid: &Ellipsoid) -> Cartesian {
        geodetic_to_cartesian(self.lng, self.lat, self.height, ellipsoid)
    }
}

impl Cartesian {
    pub fn to_geodetic(self, ellipsoid: &Ellipsoid) -> Geodetic {
        cartesian_to_geodetic(self.x, self.y, self.z, ellipsoid)
    }
}

pub(crate) fn geodetic_to_cartesian(lng: f64, lat: f64, height: f64, ellipsoid: &Ellipsoid) -> Cartesian {
    let e2 = ellipsoid.eccentricity_squared();
    let v = ellipsoid.prime_vertical_radius(lat);

    Cartesian {
        x: (v + height) * lat.cos() * lng.cos(),
        y: (v + height) * lat.cos() * lng.sin(),
        z: ((1. - e2) * v + height) * lat.sin(),
    }
}

pub(crate) fn cartesian_to_geodetic(x: f64, y: f64, z: f64, ellipsoid: &Ellipsoid) -> Geodetic {
    // Quadrant-correct, unlike atan(y / x)
    let lng = y.atan2(x);
    let p = x.hypot(y);

    let lat = solve_latitude(p, z, ellipsoid).value;
    let v = ellipsoid.prime_vertical_radius(lat);

    // Equivalent to p / cos(lat) - v, but stays finite at the poles
    let height = p * lat.cos() + z * lat.sin() - ellipsoid.a.powi(2) / v;

    Geodetic { lng, lat, height }
}

/// Fixed-point solve for latitude given the distance `p` from the polar
/// axis and the polar component `z`.
pub(crate) fn solve_latitude(p: f64, z: f64, ellipsoid: &Ellipsoid) -> Converged {
    let e2 = ellipsoid.eccentricity_squared();

    let mut lat = z.atan2(p * (1. - e2));
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        iterations += 1;

        let v = ellipsoid.prime_vertical_radius(lat);
        let next = (z + e2 * v * lat.sin()).atan2(p);
        let delta = (next - lat).abs();
        lat = next;

        if delta < PRECISION {
            break;
        }
    }

    Converged { value: lat, iterations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{OSGB36, WGS84};
    use approx::assert_abs_diff_eq;

    #[test]
    fn cartesian_round_trip() {
        for (lng, lat, height) in [
            (-1.5_f64, 53.0_f64, 0.),
            (1.716, 52.658, 120.),
            (-7.5, 49.9, -35.),
            (0., 0., 0.),
        ] {
            let geo = Geodetic { lng: lng.to_radians(), lat: lat.to_radians(), height };
            let back = geo.to_cartesian(&OSGB36).to_geodetic(&OSGB36);

            assert_abs_diff_eq!(back.lng, geo.lng, epsilon = 1e-12);
            assert_abs_diff_eq!(back.lat, geo.lat, epsilon = 1e-9);
            assert_abs_diff_eq!(back.height, geo.height, epsilon = 1e-3);
        }
    }

    #[test]
    fn known_cartesian() {
        // On the equator at the prime meridian the point lies on the x axis
        let c = geodetic_to_cartesian(0., 0., 0., &WGS84);
        assert_abs_diff_eq!(c.x, WGS84.a);
        assert_abs_diff_eq!(c.y, 0.);
        assert_abs_diff_eq!(c.z, 0.);

        let c = geodetic_to_cartesian(0., std::f64::consts::FRAC_PI_2, 0., &WGS84);
        assert_abs_diff_eq!(c.x, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(c.z, WGS84.b, epsilon = 1e-3);
    }

    #[test]
    fn longitude_in_all_quadrants() {
        for lng in [170_f64, -170., 95., -95., 180.] {
            let geo = Geodetic::new(lng.to_radians(), (-30_f64).to_radians());
            let back = geo.to_cartesian(&WGS84).to_geodetic(&WGS84);

            assert_abs_diff_eq!(back.lng.to_degrees(), lng, epsilon = 1e-9);
            assert_abs_diff_eq!(back.lat.to_degrees(), -30., epsilon = 1e-9);
        }
    }

    #[test]
    fn latitude_solve_is_bounded() {
        for lat in (-90..=90).step_by(5) {
            for height in [-1000_f64, 0., 50., 10_000.] {
                let lat = f64::from(lat).to_radians();
                let c = geodetic_to_cartesian(0.3, lat, height, &OSGB36);
                let solved = solve_latitude(c.x.hypot(c.y), c.z, &OSGB36);

                assert!(solved.iterations <= MAX_ITERATIONS);
                assert!(solved.value.is_finite());
            }
        }
    }

    #[test]
    fn latitude_solve_converges_quickly_over_britain() {
        for lat in 49..=61 {
            for lng in -8..=2 {
                let c = Geodetic::new(f64::from(lng).to_radians(), f64::from(lat).to_radians())
                    .to_cartesian(&WGS84);
                let solved = solve_latitude(c.x.hypot(c.y), c.z, &OSGB36);

                assert!(solved.iterations <= 3, "{lat} {lng}: {}", solved.iterations);
            }
        }
    }
}
