//! Datum-shifting pipelines between WGS84 geodetic points and National Grid
//! coordinates. Nothing here rounds; callers apply output precision.

use crate::{
    cartesian::Geodetic,
    ellipsoid::{OSGB36, WGS84},
    helmert::{OSGB36_TO_WGS84, WGS84_TO_OSGB36},
    projections::transverse_mercator::NATIONAL_GRID,
};

/// National Grid easting/northing to a WGS84 point (radians).
pub(crate) fn grid_to_wgs84(easting: f64, northing: f64) -> Geodetic {
    let osgb36 = NATIONAL_GRID.grid_to_geodetic(easting, northing);

    OSGB36_TO_WGS84
        .apply(osgb36.to_cartesian(&OSGB36))
        .to_geodetic(&WGS84)
}

/// WGS84 point (radians) to National Grid easting/northing.
pub(crate) fn wgs84_to_grid(point: Geodetic) -> (f64, f64) {
    let osgb36 = WGS84_TO_OSGB36
        .apply(point.to_cartesian(&WGS84))
        .to_geodetic(&OSGB36);

    NATIONAL_GRID.geodetic_to_grid(osgb36)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round_trip_without_rounding() {
        for (e, n) in [
            (651_409.903, 313_177.270),
            (0., 0.),
            (700_000., 1_300_000.),
            (100_000., 50_000.),
            (530_000., 180_000.),
            (400_000., -100_000.),
            (325_000., 673_000.),
        ] {
            let (e2, n2) = wgs84_to_grid(grid_to_wgs84(e, n));

            assert_abs_diff_eq!(e2, e, epsilon = 0.01);
            assert_abs_diff_eq!(n2, n, epsilon = 0.01);
        }
    }

    #[test]
    fn datum_shift_moves_points_west_and_north() {
        // Around London the WGS84 position reads ~110 m west and ~55 m north
        let wgs84 = grid_to_wgs84(530_000., 180_000.);
        let osgb36 = NATIONAL_GRID.grid_to_geodetic(530_000., 180_000.);

        let dlng = (wgs84.lng - osgb36.lng).to_degrees();
        let dlat = (wgs84.lat - osgb36.lat).to_degrees();
        assert!((-0.003..-0.001).contains(&dlng), "{dlng}");
        assert!((0.0002..0.001).contains(&dlat), "{dlat}");
    }
}
