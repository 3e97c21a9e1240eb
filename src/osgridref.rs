use std::fmt::Display;

use crate::{grid::GridRef, Error, ParseCoord};

/// Size of a lettered grid square (meters)
pub(crate) const SQUARE: i32 = 100_000;
/// Lettered grid extent, in 100km squares
pub(crate) const EASTING_SQUARES: i32 = 7;
pub(crate) const NORTHING_SQUARES: i32 = 13;
/// Digits per axis at 1m resolution
pub(crate) const MAX_PRECISION: i32 = 5;

const BASE: i32 = 10;

/// 500km square letters, south row first
const MAJOR_LETTERS: [&str; 3] = ["ST", "NO", "HJ"];
/// 100km square letters within a 500km square, from the north-west corner
const MINOR_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A lettered Ordnance Survey grid reference such as `TG 51409 13177`.
///
/// The two letters name a 100km square; each axis then carries between 0
/// and 5 digits, giving a resolution from 100km down to 1m.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OsGridRef {
    pub(crate) grid: GridRef,
    pub(crate) precision: i32,
}

impl OsGridRef {
    /// Creates a lettered reference for `value` with `precision` digits per
    /// axis. Digits are truncated, so the reference names the square that
    /// contains the point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridRef`] if `precision` is not in `0..=5` or
    /// the point is outside the lettered grid (0-700km east, 0-1300km north).
    pub fn from_grid(value: &GridRef, precision: i32) -> Result<OsGridRef, Error> {
        if !(0..=MAX_PRECISION).contains(&precision) {
            return Err(Error::InvalidGridRef(format!("Precision {precision} not in range [0, {MAX_PRECISION}]")));
        }

        square_indices(value.easting, value.northing)?;

        Ok(OsGridRef {
            grid: *value,
            precision,
        })
    }

    /// Parses a lettered reference, with or without spaces, e.g.
    /// `"TG 51409 13177"`, `"tg5140913177"` or `"SU"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridRef`] if the letters do not name a square in
    /// the grid or the digits are not an even count of at most 10.
    ///
    /// # Usage
    ///
    /// ```
    /// use natgrid::OsGridRef;
    ///
    /// let coord = OsGridRef::parse_str("TG 51409 13177").unwrap();
    /// assert_eq!(coord.precision(), 5);
    /// assert_eq!(coord.easting(), 651409.0);
    /// assert_eq!(coord.northing(), 313177.0);
    ///
    /// assert!(OsGridRef::parse_str("TI 123 456").is_err());
    /// assert!(OsGridRef::parse_str("TG 1234 567").is_err());
    /// ```
    pub fn parse_str(value: &str) -> Result<OsGridRef, Error> {
        let compact = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        let invalid = |msg: &str| Error::InvalidGridRef(format!("{value:?}: {msg}"));

        let mut chars = compact.chars();
        let (major, minor) = match (chars.next(), chars.next()) {
            (Some(major), Some(minor)) => (major, minor),
            _ => return Err(invalid("missing square letters")),
        };

        let (major_col, major_row) = MAJOR_LETTERS
            .iter()
            .enumerate()
            .find_map(|(row, letters)| letters.find(major).map(|col| (col, row)))
            .ok_or_else(|| invalid("unknown 500km square letter"))?;
        let minor_idx = MINOR_LETTERS
            .find(minor)
            .ok_or_else(|| invalid("unknown 100km square letter"))?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let e100k = (major_col * 5 + minor_idx % 5) as i32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let n100k = (major_row * 5 + 4 - minor_idx / 5) as i32;

        if e100k >= EASTING_SQUARES || n100k >= NORTHING_SQUARES {
            return Err(invalid("square outside the National Grid"));
        }

        let digits = chars.as_str();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected only digits after the square letters"));
        }
        if digits.len() % 2 != 0 || digits.len() > 2 * MAX_PRECISION as usize {
            return Err(invalid("expected an even number of digits, at most 10"));
        }

        let half = digits.len() / 2;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let precision = half as i32;
        // Digits are right-padded up to meter resolution
        #[allow(clippy::cast_sign_loss)]
        let scale = BASE.pow((MAX_PRECISION - precision) as u32);

        let parse_axis = |s: &str| -> Result<i32, Error> {
            if s.is_empty() {
                return Ok(0);
            }
            s.parse::<i32>()
                .map(|offset| offset * scale)
                .map_err(|err| invalid(&err.to_string()))
        };

        let easting = e100k * SQUARE + parse_axis(&digits[..half])?;
        let northing = n100k * SQUARE + parse_axis(&digits[half..])?;

        Ok(OsGridRef {
            grid: GridRef::new(f64::from(easting), f64::from(northing)),
            precision,
        })
    }

    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Easting of the referenced square's south-west corner.
    pub fn easting(&self) -> f64 {
        self.grid.easting - self.grid.easting.rem_euclid(self.resolution())
    }

    /// Northing of the referenced square's south-west corner.
    pub fn northing(&self) -> f64 {
        self.grid.northing - self.grid.northing.rem_euclid(self.resolution())
    }

    /// Side length of the referenced square, in meters.
    pub fn resolution(&self) -> f64 {
        #[allow(clippy::cast_sign_loss)]
        let digits_dropped = (MAX_PRECISION - self.precision) as u32;
        f64::from(BASE.pow(digits_dropped))
    }

    /// South-west corner of the referenced square as a [`GridRef`].
    pub fn to_grid(&self) -> GridRef {
        GridRef::new(self.easting(), self.northing())
    }

    /// Two-letter name of the 100km square.
    pub fn letters(&self) -> String {
        // Range was checked on construction
        let (e100k, n100k) = square_indices(self.grid.easting, self.grid.northing)
            .unwrap_or((0, 0));
        square_letters(e100k, n100k)
    }
}

/// 100km square column and row containing the point.
fn square_indices(easting: f64, northing: f64) -> Result<(i32, i32), Error> {
    let max_e = f64::from(EASTING_SQUARES * SQUARE);
    let max_n = f64::from(NORTHING_SQUARES * SQUARE);

    if !(0_f64..max_e).contains(&easting) || !(0_f64..max_n).contains(&northing) {
        return Err(Error::InvalidGridRef(format!(
            "Easting {:.2}km, northing {:.2}km not in lettered grid [0km, {:.0}km) x [0km, {:.0}km)",
            easting / 1000.0,
            northing / 1000.0,
            max_e / 1000.0,
            max_n / 1000.0,
        )));
    }

    #[allow(clippy::cast_possible_truncation)]
    let indices = (
        (easting / f64::from(SQUARE)).floor() as i32,
        (northing / f64::from(SQUARE)).floor() as i32,
    );

    Ok(indices)
}

#[allow(clippy::cast_sign_loss)]
fn square_letters(e100k: i32, n100k: i32) -> String {
    let major = MAJOR_LETTERS[(n100k / 5) as usize].as_bytes()[(e100k / 5) as usize];
    let minor = MINOR_LETTERS.as_bytes()[((4 - n100k % 5) * 5 + e100k % 5) as usize];

    String::from_utf8_lossy(&[major, minor]).into_owned()
}

impl ParseCoord for OsGridRef {
    fn parse_coord(value: &str) -> Result<OsGridRef, Error> {
        OsGridRef::parse_str(value)
    }
}

impl Display for OsGridRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters = self.letters();

        if self.precision == 0 {
            return write!(f, "{letters}");
        }

        let square = f64::from(SQUARE);
        let resolution = self.resolution();
        #[allow(clippy::cast_possible_truncation)]
        let e = (self.grid.easting.rem_euclid(square) / resolution).floor() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let n = (self.grid.northing.rem_euclid(square) / resolution).floor() as i64;
        #[allow(clippy::cast_sign_loss)]
        let width = self.precision as usize;

        write!(f, "{letters} {e:0width$} {n:0width$}")
    }
}
