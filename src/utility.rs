/// Arc-seconds per degree
pub(crate) const ARCSEC_PER_DEG: f64 = 3600.;

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Splits a pair of numbers separated by whitespace and/or a comma.
pub(crate) fn parse_pair(value: &str) -> Option<(f64, f64)> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty());

    let first = pieces.next()?.parse().ok()?;
    let second = pieces.next()?.parse().ok()?;

    pieces.next().is_none().then_some((first, second))
}

/// Result of a bounded fixed-point solve.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Converged {
    pub value: f64,
    // Only inspected by the convergence tests
    #[allow(dead_code)]
    pub iterations: usize,
}

pub(crate) trait GeoMath {
    fn round_to(&self, decimals: i32) -> Self;
    fn arcsec_to_radians(&self) -> Self;
}

impl GeoMath for f64 {
    fn round_to(&self, decimals: i32) -> f64 {
        let scale = 10_f64.powi(decimals);
        (*self * scale).round() / scale
    }

    fn arcsec_to_radians(&self) -> f64 {
        (*self / ARCSEC_PER_DEG).to_radians()
    }
}
