//! Seven-parameter Helmert datum shifts between WGS84 and OSGB36.

use crate::{cartesian::Cartesian, utility::GeoMath};

/// Parameters of a small-angle Helmert similarity transform.
///
/// Translations are in meters, rotations in arc-seconds and scale in parts
/// per million.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmertParameters {
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub scale_ppm: f64,
}

/// WGS84 to OSGB36.
pub const WGS84_TO_OSGB36: HelmertParameters = HelmertParameters {
    tx: -446.448,
    ty: 125.157,
    tz: -542.060,
    rx: -0.1502,
    ry: -0.2470,
    rz: -0.8421,
    scale_ppm: 20.4894,
};

/// OSGB36 to WGS84.
///
/// Component-wise negation of [`WGS84_TO_OSGB36`] rather than the exact
/// inverse, which is what published outputs were produced with.
pub const OSGB36_TO_WGS84: HelmertParameters = HelmertParameters {
    tx: 446.448,
    ty: -125.157,
    tz: 542.060,
    rx: 0.1502,
    ry: 0.2470,
    rz: 0.8421,
    scale_ppm: -20.4894,
};

impl HelmertParameters {
    /// Returns the component-wise negation of these parameters.
    pub fn negated(&self) -> HelmertParameters {
        HelmertParameters {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            scale_ppm: -self.scale_ppm,
        }
    }

    pub(crate) fn apply(&self, point: Cartesian) -> Cartesian {
        let Cartesian { x, y, z } = point;

        let s = 1. + self.scale_ppm / 1e6;
        let rx = self.rx.arcsec_to_radians();
        let ry = self.ry.arcsec_to_radians();
        let rz = self.rz.arcsec_to_radians();

        Cartesian {
            x: self.tx + x * s - y * rz + z * ry,
            y: self.ty + x * rz + y * s - z * rx,
            z: self.tz - x * ry + y * rx + z * s,
        }
    }
}
