//! Phasor arrow drawing.

use crate::canvas::{ArrowStyle, Canvas, LineStyle, TextStyle};
use crate::errors::PhasorPlotError;
use crate::geometry::{phasor_arrow, ArrowGeometry, ArrowPlacement};
use crate::math::Scalar;
use crate::units::{Phasor, Quantity};

/// Options for [`draw_phasor`].
///
/// `origin` and `reference` default to the drawn phasor's own dimension (zero
/// origin, unit reference); the defaults are resolved inside the draw call.
#[derive(Debug, Clone, Default)]
pub struct PhasorArrowOptions {
    /// Point the arrow is drawn from. Defaults to zero in the phasor's unit.
    pub origin: Option<Phasor>,
    /// Reference scale mapping the phasor onto the unit plotting square.
    /// Defaults to `1` in the phasor's unit.
    pub reference: Option<Quantity>,
    /// Tangential parallel-offset fraction.
    pub par: Scalar,
    /// Label text; empty or absent labels draw nothing.
    pub label: Option<String>,
    /// Placement parameters for the label.
    pub placement: LabelPlacement,
    /// Shaft stroke style.
    pub line: LineStyle,
    /// Arrow head style.
    pub arrow: ArrowStyle,
    /// Label text style; rotation is overridden by `placement`.
    pub text: TextStyle,
}

/// Label placement along and beside the arrow.
#[derive(Debug, Clone, Copy)]
pub struct LabelPlacement {
    /// Radial position as a fraction of the arrow length.
    pub radial_sep: Scalar,
    /// Perpendicular displacement along the tangent.
    pub tangent_sep: Scalar,
    /// When set, rotate the label with the arrow by this relative angle in
    /// degrees; otherwise keep it horizontal.
    pub relative_rotation: Option<Scalar>,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        let defaults = ArrowPlacement::default();
        Self {
            radial_sep: defaults.label_radial_sep,
            tangent_sep: defaults.label_tangent_sep,
            relative_rotation: None,
        }
    }
}

/// Draws `phasor` as an arrow on `canvas` and returns the computed geometry.
///
/// The phasor, its origin, and the reference scale must share a physical
/// dimension. A zero-magnitude phasor draws nothing and returns `Ok(None)`.
pub fn draw_phasor(
    canvas: &mut dyn Canvas,
    phasor: &Phasor,
    options: &PhasorArrowOptions,
) -> Result<Option<ArrowGeometry>, PhasorPlotError> {
    let origin = options
        .origin
        .unwrap_or_else(|| Phasor::zero(phasor.unit()));
    let reference = options
        .reference
        .unwrap_or_else(|| Quantity::new(1.0, phasor.unit()));
    let placement = ArrowPlacement {
        par: options.par,
        label_radial_sep: options.placement.radial_sep,
        label_tangent_sep: options.placement.tangent_sep,
        relative_rotation: options.placement.relative_rotation,
    };

    let Some(geometry) = phasor_arrow(phasor, &origin, reference, &placement)? else {
        return Ok(None);
    };

    // Shaft stops at the split point so the line style is not drawn twice
    // under the head.
    canvas.polyline(&[geometry.start, geometry.line_end], &options.line)?;
    canvas.arrow(geometry.line_end, geometry.end, &options.arrow)?;

    if let Some(label) = options.label.as_deref() {
        let style = TextStyle {
            rotation_deg: geometry.label_rotation_deg,
            ..options.text
        };
        canvas.text(geometry.label_pos, label, &style)?;
    }

    Ok(Some(geometry))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::canvas::{DrawCmd, RecordingCanvas};
    use crate::units::Unit;

    #[test]
    fn unit_phasor_draws_shaft_and_head() {
        let mut canvas = RecordingCanvas::new();
        let g = draw_phasor(
            &mut canvas,
            &Phasor::dimensionless(1.0, 0.0),
            &PhasorArrowOptions::default(),
        )
        .unwrap()
        .unwrap();

        assert_relative_eq!(g.start.x, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(g.end.x, 1.0, epsilon = 1.0e-12);
        let arrows = canvas.arrows();
        assert_eq!(arrows.len(), 1);
        assert_relative_eq!(arrows[0].1.x, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(arrows[0].1.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_phasor_emits_no_commands() {
        let mut canvas = RecordingCanvas::new();
        let g = draw_phasor(
            &mut canvas,
            &Phasor::zero(Unit::Volt),
            &PhasorArrowOptions::default(),
        )
        .unwrap();
        assert!(g.is_none());
        assert!(canvas.is_empty());
    }

    #[test]
    fn defaults_resolve_to_the_phasor_unit() {
        let mut canvas = RecordingCanvas::new();
        // Volts with no explicit origin/reference must not mismatch.
        let g = draw_phasor(
            &mut canvas,
            &Phasor::from_polar(Quantity::volts(0.8), FRAC_PI_2),
            &PhasorArrowOptions::default(),
        )
        .unwrap()
        .unwrap();
        assert_relative_eq!(g.end.y, 0.8, epsilon = 1.0e-12);
    }

    #[test]
    fn explicit_mismatched_reference_fails() {
        let mut canvas = RecordingCanvas::new();
        let options = PhasorArrowOptions {
            reference: Some(Quantity::amps(1.0)),
            ..Default::default()
        };
        let err = draw_phasor(
            &mut canvas,
            &Phasor::new(1.0, 0.0, Unit::Volt),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, PhasorPlotError::IncompatibleUnits { .. }));
        assert!(canvas.is_empty());
    }

    #[test]
    fn label_is_emitted_with_requested_rotation() {
        let mut canvas = RecordingCanvas::new();
        let options = PhasorArrowOptions {
            label: Some("U".into()),
            placement: LabelPlacement {
                relative_rotation: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        draw_phasor(&mut canvas, &Phasor::dimensionless(0.0, 1.0), &options).unwrap();

        let labels = canvas.texts();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].1, "U");
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
