//! Length dimension annotations: a dimensioning line with end arrows,
//! optional perpendicular offset, auxiliary leader lines, and a label.

use crate::canvas::{ArrowStyle, Canvas, LineStyle, TextStyle};
use crate::errors::PhasorPlotError;
use crate::geometry::SHAFT_SPLIT;
use crate::math::{rotate90_cw, P2, Scalar};
use crate::units::{Phasor, Quantity};

/// Options for [`draw_length_dimension`].
#[derive(Debug, Clone)]
pub struct LengthDimensionOptions {
    /// Perpendicular displacement of the dimension line from the measured
    /// span, along the clockwise tangent of the span direction (negated,
    /// matching the phasor parallel-offset convention).
    pub offset: Scalar,
    /// Draw leader lines from the measured endpoints to the dimension line.
    pub leaders: bool,
    /// Label text; empty or absent labels draw nothing.
    pub label: Option<String>,
    /// Perpendicular label displacement from the dimension line midpoint.
    pub label_sep: Scalar,
    /// Rotate the label to the dimension line angle.
    pub rotate_label: bool,
    /// Dimension and leader line style.
    pub line: LineStyle,
    /// End-arrow style.
    pub arrow: ArrowStyle,
    /// Label text style.
    pub text: TextStyle,
}

impl Default for LengthDimensionOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            leaders: false,
            label: None,
            label_sep: 0.1,
            rotate_label: true,
            line: LineStyle::default(),
            arrow: ArrowStyle::default(),
            text: TextStyle::default(),
        }
    }
}

/// Draws a length dimension between `from` and `to`.
///
/// Degenerate spans (`from == to`) draw nothing.
pub fn draw_length_dimension(
    canvas: &mut dyn Canvas,
    from: P2,
    to: P2,
    options: &LengthDimensionOptions,
) -> Result<(), PhasorPlotError> {
    let length = (to - from).norm();
    if length == 0.0 {
        return Ok(());
    }
    let dir = (to - from) / length;
    let tangent = rotate90_cw(dir);

    let a = from - tangent * options.offset;
    let b = to - tangent * options.offset;

    if options.leaders && options.offset != 0.0 {
        canvas.polyline(&[from, a], &options.line)?;
        canvas.polyline(&[to, b], &options.line)?;
    }

    // Shaft between the two head split points, then outward-pointing arrows
    // at both ends.
    let a_split = b + (a - b) * SHAFT_SPLIT;
    let b_split = a + (b - a) * SHAFT_SPLIT;
    canvas.polyline(&[a_split, b_split], &options.line)?;
    canvas.arrow(b_split, b, &options.arrow)?;
    canvas.arrow(a_split, a, &options.arrow)?;

    if let Some(label) = options.label.as_deref() {
        let mid = a + (b - a) * 0.5;
        let pos = mid - tangent * options.label_sep;
        let style = TextStyle {
            rotation_deg: if options.rotate_label {
                dir.y.atan2(dir.x).to_degrees()
            } else {
                0.0
            },
            ..options.text
        };
        canvas.text(pos, label, &style)?;
    }

    Ok(())
}

/// Draws a length dimension along `phasor`, normalized by `reference`.
///
/// Thin composition over [`draw_length_dimension`], parameterizing it with
/// the phasor's normalized rectangular coordinates. The phasor, its origin,
/// and the reference scale must share a physical dimension.
pub fn draw_phasor_dimension(
    canvas: &mut dyn Canvas,
    phasor: &Phasor,
    origin: &Phasor,
    reference: Quantity,
    options: &LengthDimensionOptions,
) -> Result<(), PhasorPlotError> {
    let c = phasor.ratio_to(reference)?;
    let o = origin.ratio_to(reference)?;
    let from = P2::new(o.re, o.im);
    let to = P2::new(o.re + c.re, o.im + c.im);
    draw_length_dimension(canvas, from, to, options)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::canvas::{DrawCmd, RecordingCanvas};
    use crate::units::Unit;

    #[test]
    fn horizontal_dimension_draws_two_outward_arrows() {
        let mut canvas = RecordingCanvas::new();
        draw_length_dimension(
            &mut canvas,
            P2::new(0.0, 0.0),
            P2::new(2.0, 0.0),
            &LengthDimensionOptions::default(),
        )
        .unwrap();

        let arrows = canvas.arrows();
        assert_eq!(arrows.len(), 2);
        assert_relative_eq!(arrows[0].1.x, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(arrows[1].1.x, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn offset_shifts_the_dimension_line() {
        let mut canvas = RecordingCanvas::new();
        let options = LengthDimensionOptions {
            offset: 0.5,
            leaders: true,
            ..Default::default()
        };
        // Span along +x; its clockwise tangent is -y, so the negated offset
        // moves the dimension line up.
        draw_length_dimension(&mut canvas, P2::new(0.0, 0.0), P2::new(1.0, 0.0), &options)
            .unwrap();

        let polylines: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect();
        // Two leaders plus the dimension line.
        assert_eq!(polylines.len(), 3);
        assert_relative_eq!(polylines[0][1].y, 0.5, epsilon = 1.0e-12);
        assert_relative_eq!(polylines[2][0].y, 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn degenerate_span_is_a_no_op() {
        let mut canvas = RecordingCanvas::new();
        draw_length_dimension(
            &mut canvas,
            P2::new(1.0, 1.0),
            P2::new(1.0, 1.0),
            &LengthDimensionOptions::default(),
        )
        .unwrap();
        assert!(canvas.is_empty());
    }

    #[test]
    fn phasor_dimension_normalizes_by_the_reference() {
        let mut canvas = RecordingCanvas::new();
        draw_phasor_dimension(
            &mut canvas,
            &Phasor::new(0.0, 115.0, Unit::Volt),
            &Phasor::zero(Unit::Volt),
            Quantity::volts(230.0),
            &LengthDimensionOptions::default(),
        )
        .unwrap();

        let arrows = canvas.arrows();
        assert_eq!(arrows.len(), 2);
        assert_relative_eq!(arrows[0].1.y, 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn phasor_dimension_checks_units() {
        let mut canvas = RecordingCanvas::new();
        let err = draw_phasor_dimension(
            &mut canvas,
            &Phasor::new(1.0, 0.0, Unit::Ampere),
            &Phasor::zero(Unit::Ampere),
            Quantity::volts(1.0),
            &LengthDimensionOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PhasorPlotError::IncompatibleUnits { .. }));
        assert!(canvas.is_empty());
    }

    #[test]
    fn label_rotation_matches_the_span_angle() {
        let mut canvas = RecordingCanvas::new();
        let options = LengthDimensionOptions {
            label: Some("U".into()),
            ..Default::default()
        };
        draw_length_dimension(&mut canvas, P2::new(0.0, 0.0), P2::new(0.0, 1.0), &options)
            .unwrap();

        let Some(DrawCmd::Text { style, .. }) = canvas
            .commands()
            .iter()
            .find(|cmd| matches!(cmd, DrawCmd::Text { .. }))
        else {
            panic!("expected a text command");
        };
        assert_relative_eq!(style.rotation_deg, 90.0, epsilon = 1.0e-9);
    }
}
