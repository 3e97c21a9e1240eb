use approx::assert_abs_diff_eq;
use natgrid::{grid_to_wgs84, wgs84_to_grid, Error, GridRef, LatLon};

const GRID_POINTS: [((f64, f64), (f64, f64)); 6] = [
    ((651_409.903, 313_177.270), (1.716_052, 52.657_979)),
    ((530_000., 180_000.), (-0.128_354, 51.503_991)),
    ((325_000., 673_000.), (-3.202_386, 55.944_167)),
    ((216_000., 771_000.), (-5.014_377, 56.794_057)),
    ((0., 0.), (-7.557_16, 49.766_807)),
    ((123_456.789, 987_654.321), (-6.774_471, 58.687_956)),
];

const WGS84_POINTS: [((f64, f64), (f64, f64)); 5] = [
    ((-0.124_625, 51.500_729), (530_268.084, 179_643.899)),
    ((-3.188_267, 55.953_251), (325_899.185, 673_995.713)),
    ((-5.714_722, 50.066_389), (134_264.529, 25_087.054)),
    ((-2., 49.), (400_095.632, -100_085.687)),
    ((-1.234_567_891, 53.987_654_321), (450_287.24, 454_893.878)),
];

#[test]
fn grid_to_wgs84_known_points() {
    for ((e, n), (lon, lat)) in GRID_POINTS {
        let (lon2, lat2) = grid_to_wgs84(e, n).unwrap();

        assert_abs_diff_eq!(lon2, lon, epsilon = 1e-9);
        assert_abs_diff_eq!(lat2, lat, epsilon = 1e-9);
    }
}

#[test]
fn wgs84_to_grid_known_points() {
    for ((lon, lat), (e, n)) in WGS84_POINTS {
        let (e2, n2) = wgs84_to_grid(lon, lat).unwrap();

        assert_abs_diff_eq!(e2, e, epsilon = 1e-6);
        assert_abs_diff_eq!(n2, n, epsilon = 1e-6);
    }
}

#[test]
fn round_trip_through_public_api() {
    // Six decimal places of latitude is ~0.11m, which dominates the error
    let mut easting = 50_000.;
    while easting < 700_000. {
        let mut northing = 0.;
        while northing < 1_250_000. {
            let (lon, lat) = grid_to_wgs84(easting, northing).unwrap();
            let (e2, n2) = wgs84_to_grid(lon, lat).unwrap();

            assert_abs_diff_eq!(e2, easting, epsilon = 0.15);
            assert_abs_diff_eq!(n2, northing, epsilon = 0.15);

            northing += 61_234.5;
        }
        easting += 48_765.4;
    }
}

#[test]
fn true_origin() {
    let (lon, lat) = grid_to_wgs84(400_000., -100_000.).unwrap();
    assert_abs_diff_eq!(lon, -2.001_308, epsilon = 1e-9);
    assert_abs_diff_eq!(lat, 49.000_771, epsilon = 1e-9);

    let (e, n) = wgs84_to_grid(lon, lat).unwrap();
    assert_abs_diff_eq!(e, 400_000., epsilon = 0.1);
    assert_abs_diff_eq!(n, -100_000., epsilon = 0.1);
}

#[test]
fn outputs_are_rounded() {
    for ((e, n), _) in GRID_POINTS {
        let (lon, lat) = grid_to_wgs84(e + 0.123_456_7, n - 0.765_432_1).unwrap();
        assert_eq!(lon, (lon * 1e6).round() / 1e6);
        assert_eq!(lat, (lat * 1e6).round() / 1e6);
    }

    for ((lon, lat), _) in WGS84_POINTS {
        let (e, n) = wgs84_to_grid(lon + 1.234_567e-7, lat - 7.654_321e-7).unwrap();
        assert_eq!(e, (e * 1e3).round() / 1e3);
        assert_eq!(n, (n * 1e3).round() / 1e3);
    }
}

#[test]
fn far_outside_britain_is_still_defined() {
    for (e, n) in [
        (-2_000_000., 5_000_000.),
        (3_000_000., -4_000_000.),
        (1e7, 1e7),
        (1e20, 0.),
        (0., 1e300),
    ] {
        let (lon, lat) = grid_to_wgs84(e, n).unwrap();
        assert!(lon.is_finite() && lat.is_finite(), "{e} {n}");
    }

    for (lon, lat) in [(150., -45.), (-120., 35.), (179.9, 0.)] {
        let (e, n) = wgs84_to_grid(lon, lat).unwrap();
        assert!(e.is_finite() && n.is_finite(), "{lon} {lat}");
    }
}

#[test]
fn series_overflow_is_an_error() {
    for (e, n) in [(1e60, 0.), (1e100, 0.), (-1.7e308, 0.), (1.7e308, 1.7e308)] {
        assert!(matches!(grid_to_wgs84(e, n), Err(Error::InvalidInput(_))), "{e} {n}");
    }
}

#[test]
fn typed_api_matches_free_functions() {
    for ((e, n), _) in GRID_POINTS {
        let latlon = GridRef::create(e, n).unwrap().to_latlon().unwrap();
        assert_eq!((latlon.longitude(), latlon.latitude()), grid_to_wgs84(e, n).unwrap());
    }

    for ((lon, lat), _) in WGS84_POINTS {
        let grid = LatLon::create(lat, lon).unwrap().to_grid();
        assert_eq!((grid.easting(), grid.northing()), wgs84_to_grid(lon, lat).unwrap());
    }
}
