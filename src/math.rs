//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Point2, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for planar points.
pub type P2 = Point2<Scalar>;
/// Convenient alias for planar vectors.
pub type V2 = Vector2<Scalar>;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex value `r·cos(phi) + j·r·sin(phi)`.
#[inline]
#[must_use]
pub fn pol(r: Scalar, phi: Scalar) -> CScalar {
    CScalar::from_polar(r, phi)
}

/// Rotates `v` by 90° clockwise, i.e. `(x, y) -> (y, -x)`.
///
/// This is the tangential direction convention used for parallel phasor
/// offsets and label displacement: the tangent of a phasor pointing along
/// `+y` is `+x`.
#[inline]
#[must_use]
pub fn rotate90_cw(v: V2) -> V2 {
    V2::new(v.y, -v.x)
}

/// Returns the point at polar coordinates `(r, phi)` around the origin.
#[inline]
#[must_use]
pub fn polar_point(r: Scalar, phi: Scalar) -> P2 {
    P2::new(r * phi.cos(), r * phi.sin())
}
