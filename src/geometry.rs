//! Pure coordinate geometry for phasor arrows, angular arcs, and sine
//! companion curves. Nothing in this module draws; the results feed the
//! [`crate::canvas::Canvas`] operations.

use std::f64::consts::FRAC_PI_2;

use crate::errors::PhasorPlotError;
use crate::math::{polar_point, rotate90_cw, P2, Scalar, V2};
use crate::units::{Phasor, Quantity};

/// Fraction of the arrow length covered by the shaft polyline; the remainder
/// is covered by the arrow head so the line style is not rendered twice under
/// the head decoration. Tunable visual constant.
pub const SHAFT_SPLIT: Scalar = 0.999;

/// Angular offset applied to the tangential direction of arc end arrows so
/// the head does not visually overlap the arc. Tunable visual constant.
pub const HEAD_TANGENT_OFFSET: Scalar = 0.98 * FRAC_PI_2;

/// Arc sampling resolution in degrees per segment.
pub const ARC_DEG_PER_SEGMENT: Scalar = 2.0;

/// Sine sampling resolution in points per half-turn.
pub const SINE_SAMPLES_PER_HALF_TURN: usize = 500;

/// World-space length of an arc end-arrow head segment.
const ARC_HEAD_BACKOFF: Scalar = 0.05;

/// Label placement parameters for a phasor arrow.
#[derive(Debug, Clone, Copy)]
pub struct ArrowPlacement {
    /// Tangential parallel-offset fraction applied to both endpoints.
    pub par: Scalar,
    /// Radial label position as a fraction of the arrow length.
    pub label_radial_sep: Scalar,
    /// Perpendicular label displacement along the tangent.
    pub label_tangent_sep: Scalar,
    /// When set, the label is rotated to the arrow angle plus this relative
    /// angle in degrees; otherwise the label stays horizontal.
    pub relative_rotation: Option<Scalar>,
}

impl Default for ArrowPlacement {
    fn default() -> Self {
        Self {
            par: 0.0,
            label_radial_sep: 0.5,
            label_tangent_sep: 0.1,
            relative_rotation: None,
        }
    }
}

/// Computed coordinates for one phasor arrow in the unit plotting square.
#[derive(Debug, Clone, Copy)]
pub struct ArrowGeometry {
    /// Shaft start after the parallel offset.
    pub start: P2,
    /// Arrow tip after the parallel offset.
    pub end: P2,
    /// End of the shaft polyline at the [`SHAFT_SPLIT`] fraction.
    pub line_end: P2,
    /// Unit direction from start to end.
    pub dir: V2,
    /// Unit tangent, 90° clockwise from `dir`.
    pub tangent: V2,
    /// Arrow length in plotting units.
    pub length: Scalar,
    /// Arrow angle in radians.
    pub angle: Scalar,
    /// Label anchor position.
    pub label_pos: P2,
    /// Label rotation in degrees.
    pub label_rotation_deg: Scalar,
}

/// Computes the arrow geometry for `phasor` drawn from `origin`, both
/// normalized by `reference`.
///
/// All three quantities must share a physical dimension; mismatches abort
/// with [`PhasorPlotError::IncompatibleUnits`]. A zero-magnitude phasor is a
/// degenerate no-op and yields `Ok(None)`.
pub fn phasor_arrow(
    phasor: &Phasor,
    origin: &Phasor,
    reference: Quantity,
    placement: &ArrowPlacement,
) -> Result<Option<ArrowGeometry>, PhasorPlotError> {
    let c = phasor.ratio_to(reference)?;
    let o = origin.ratio_to(reference)?;

    if c.norm() == 0.0 {
        return Ok(None);
    }

    let mut start = P2::new(o.re, o.im);
    let mut end = P2::new(o.re + c.re, o.im + c.im);
    let length = (end - start).norm();
    let dir = (end - start) / length;
    let tangent = rotate90_cw(dir);

    // Parallel phasors are separated by shifting both endpoints along the
    // tangent by -par.
    start -= tangent * placement.par;
    end -= tangent * placement.par;

    let line_end = start + (end - start) * SHAFT_SPLIT;
    let angle = dir.y.atan2(dir.x);
    let label_pos =
        start + dir * (length * placement.label_radial_sep) - tangent * placement.label_tangent_sep;
    let label_rotation_deg = placement
        .relative_rotation
        .map_or(0.0, |rel| angle.to_degrees() + rel);

    Ok(Some(ArrowGeometry {
        start,
        end,
        line_end,
        dir,
        tangent,
        length,
        angle,
        label_pos,
        label_rotation_deg,
    }))
}

/// Samples an arc of radius `radius` from `phi1` to `phi2` (radians) at
/// roughly [`ARC_DEG_PER_SEGMENT`] per segment.
///
/// Both endpoints are included and the samples are monotone in the sign of
/// `phi2 - phi1`.
#[must_use]
pub fn arc_points(radius: Scalar, phi1: Scalar, phi2: Scalar) -> Vec<P2> {
    let span = phi2 - phi1;
    let segments = ((span.abs().to_degrees() / ARC_DEG_PER_SEGMENT).round() as usize).max(1);
    let step = span / segments as Scalar;
    (0..=segments)
        .map(|i| polar_point(radius, phi1 + step * i as Scalar))
        .collect()
}

/// Head segment for an arc end arrow at angle `phi` on a circle of `radius`.
///
/// `orientation` is `+1.0` for a head pointing counter-clockwise and `-1.0`
/// for clockwise. The tail sits along the near-tangential direction offset by
/// [`HEAD_TANGENT_OFFSET`]; returns `(tail, tip)`.
#[must_use]
pub fn arc_head_segment(radius: Scalar, phi: Scalar, orientation: Scalar) -> (P2, P2) {
    let tip = polar_point(radius, phi);
    let theta = phi + orientation.signum() * HEAD_TANGENT_OFFSET;
    let back = V2::new(theta.cos(), theta.sin());
    (tip - back * ARC_HEAD_BACKOFF, tip)
}

/// Samples one period of `mag·sin(psi + phi)` with `psi` running 0–360°.
///
/// Returns `(psi_deg, value)` pairs at [`SINE_SAMPLES_PER_HALF_TURN`] samples
/// per half-turn, endpoints inclusive.
#[must_use]
pub fn sine_points(mag: Scalar, phi: Scalar) -> Vec<(Scalar, Scalar)> {
    let segments = 2 * SINE_SAMPLES_PER_HALF_TURN;
    (0..=segments)
        .map(|i| {
            let psi_deg = 360.0 * i as Scalar / segments as Scalar;
            (psi_deg, mag * (psi_deg.to_radians() + phi).sin())
        })
        .collect()
}

/// Chops the segment `a..b` into dash/gap pieces for dashed guide lines.
#[must_use]
pub fn dash_segments(a: P2, b: P2, dash: Scalar, gap: Scalar) -> Vec<(P2, P2)> {
    let total = (b - a).norm();
    if total == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    // A negative gap would keep `t` from advancing.
    let gap = gap.max(0.0);
    let dir = (b - a) / total;
    let mut segments = Vec::new();
    let mut t = 0.0;
    while t < total {
        let t_end = (t + dash).min(total);
        segments.push((a + dir * t, a + dir * t_end));
        t = t_end + gap;
    }
    segments
}
