// National Grid central meridian scale factor
#[allow(clippy::unreadable_literal)]
pub(crate) const F0: f64 = 0.9996012717;

// True origin, 49°N 2°W (degrees; converted once by the projection)
pub(crate) const LAT0_DEG: f64 = 49.0;
pub(crate) const LNG0_DEG: f64 = -2.0;

// False origin offsets from the true origin (meters)
pub(crate) const E0: f64 = 400_000.;
pub(crate) const N0: f64 = -100_000.;

/// Convergence threshold shared by every iterative solve
pub(crate) const PRECISION: f64 = 1e-8;
/// Hard cap on iterations for every iterative solve
pub(crate) const MAX_ITERATIONS: usize = 10;

// Output rounding, in decimal places
pub(crate) const LATLON_DECIMALS: i32 = 6;
pub(crate) const GRID_DECIMALS: i32 = 3;
