//! Side-by-side phasor and sine companion plot.
//!
//! The left panel shows phasors of magnitude ≤ 1 on the unit circle; the
//! right panel shows one period of `mag·sin(psi + phi)` over 0–360°. Both
//! panels share one world coordinate space so dashed connector lines can tie
//! phasor features to the sine curve.

use crate::canvas::{ArrowStyle, Canvas, Color, HAlign, LineStyle, TextStyle, VAlign};
use crate::errors::PhasorPlotError;
use crate::geometry::{arc_points, phasor_arrow, sine_points, ArrowPlacement};
use crate::math::{P2, Scalar};
use crate::units::{Phasor, Quantity};
use std::f64::consts::TAU;

/// Overshoot of the panel axes beyond the unit amplitude.
const AXIS_OVERSHOOT: Scalar = 1.2;
/// World x position of the sine panel's 0° ordinate.
const SINE_X0: Scalar = 1.8;
/// World x units per degree in the sine panel.
const SINE_X_PER_DEG: Scalar = 0.01;
/// Length of axis tick marks.
const TICK_LEN: Scalar = 0.05;
/// Tolerance for merging overlay tick values.
const TICK_EPS: Scalar = 1.0e-9;

/// World x coordinate of `psi_deg` in the sine panel.
#[must_use]
pub fn sine_x(psi_deg: Scalar) -> Scalar {
    SINE_X0 + psi_deg * SINE_X_PER_DEG
}

/// Styling for one phasor/sine pair.
#[derive(Debug, Clone, Default)]
pub struct CompanionStyle {
    /// Stroke style for the phasor shaft and the sine curve.
    pub line: LineStyle,
    /// Phasor arrow head style.
    pub arrow: ArrowStyle,
}

/// Two-panel phasor/sine diagram.
///
/// [`PhasorSineDiagram::new`] creates the panels; every further
/// [`add`](PhasorSineDiagram::add) overlays another phasor/sine pair onto the
/// same panels, extending the y tick labels rather than replacing them.
#[derive(Debug)]
pub struct PhasorSineDiagram {
    y_ticks: Vec<Scalar>,
}

impl PhasorSineDiagram {
    /// Draws the two panels (axes, unit circle, x ticks) and returns the
    /// diagram handle used to add phasor/sine pairs.
    pub fn new(canvas: &mut dyn Canvas) -> Result<Self, PhasorPlotError> {
        let axis = LineStyle {
            color: Color::GRAY,
            width: 1,
            dashed: false,
        };

        // Phasor panel: centered axes plus the unit circle outline.
        canvas.polyline(
            &[P2::new(-AXIS_OVERSHOOT, 0.0), P2::new(AXIS_OVERSHOOT, 0.0)],
            &axis,
        )?;
        canvas.polyline(
            &[P2::new(0.0, -AXIS_OVERSHOOT), P2::new(0.0, AXIS_OVERSHOOT)],
            &axis,
        )?;
        canvas.polyline(
            &arc_points(1.0, 0.0, TAU),
            &LineStyle {
                color: Color::LIGHT_GRAY,
                width: 1,
                dashed: false,
            },
        )?;

        // Sine panel: abscissa over one period, ordinate at 0°.
        canvas.polyline(&[P2::new(sine_x(0.0), 0.0), P2::new(sine_x(360.0), 0.0)], &axis)?;
        canvas.polyline(
            &[
                P2::new(sine_x(0.0), -AXIS_OVERSHOOT),
                P2::new(sine_x(0.0), AXIS_OVERSHOOT),
            ],
            &axis,
        )?;

        let tick_text = TextStyle {
            size: 14,
            h_align: HAlign::Center,
            v_align: VAlign::Top,
            ..TextStyle::default()
        };
        for deg in [0.0, 90.0, 180.0, 270.0, 360.0] {
            let x = sine_x(deg);
            canvas.polyline(&[P2::new(x, 0.0), P2::new(x, -TICK_LEN)], &axis)?;
            canvas.text(
                P2::new(x, -TICK_LEN * 1.5),
                &format!("{deg}°"),
                &tick_text,
            )?;
        }

        Ok(Self { y_ticks: Vec::new() })
    }

    /// Y tick values accumulated so far.
    #[must_use]
    pub fn y_ticks(&self) -> &[Scalar] {
        &self.y_ticks
    }

    /// Adds one phasor/sine pair: an arrow of `mag` at `phi` (radians) on the
    /// unit circle and the matching `mag·sin(psi + phi)` curve.
    pub fn add(
        &mut self,
        canvas: &mut dyn Canvas,
        mag: Scalar,
        phi: Scalar,
        style: &CompanionStyle,
    ) -> Result<(), PhasorPlotError> {
        let phasor = Phasor::from_polar(Quantity::dimensionless(mag), phi);
        if let Some(geometry) = phasor_arrow(
            &phasor,
            &Phasor::dimensionless(0.0, 0.0),
            Quantity::dimensionless(1.0),
            &ArrowPlacement::default(),
        )? {
            canvas.polyline(&[geometry.start, geometry.line_end], &style.line)?;
            canvas.arrow(geometry.line_end, geometry.end, &style.arrow)?;
        }

        let curve: Vec<P2> = sine_points(mag, phi)
            .into_iter()
            .map(|(psi_deg, value)| P2::new(sine_x(psi_deg), value))
            .collect();
        canvas.polyline(&curve, &style.line)?;

        for value in [mag, -mag] {
            self.push_y_tick(canvas, value, style.line.color)?;
        }
        Ok(())
    }

    /// Draws the four dashed guide lines tying the phasor to its sine curve:
    /// initial value, peak level, trough level, and the peak abscissa.
    pub fn connectors(
        &self,
        canvas: &mut dyn Canvas,
        mag: Scalar,
        phi: Scalar,
    ) -> Result<(), PhasorPlotError> {
        let guide = LineStyle {
            color: Color::GRAY,
            width: 1,
            dashed: true,
        };
        let phi_deg = phi.to_degrees();
        let initial = mag * phi.sin();
        let psi_peak = (90.0 - phi_deg).rem_euclid(360.0);
        let psi_trough = (270.0 - phi_deg).rem_euclid(360.0);

        let tip = P2::new(mag * phi.cos(), mag * phi.sin());
        canvas.polyline(&[tip, P2::new(sine_x(0.0), initial)], &guide)?;
        canvas.polyline(&[P2::new(0.0, mag), P2::new(sine_x(psi_peak), mag)], &guide)?;
        canvas.polyline(
            &[P2::new(0.0, -mag), P2::new(sine_x(psi_trough), -mag)],
            &guide,
        )?;
        canvas.polyline(
            &[P2::new(sine_x(psi_peak), 0.0), P2::new(sine_x(psi_peak), mag)],
            &guide,
        )?;
        Ok(())
    }

    fn push_y_tick(
        &mut self,
        canvas: &mut dyn Canvas,
        value: Scalar,
        color: Color,
    ) -> Result<(), PhasorPlotError> {
        if self
            .y_ticks
            .iter()
            .any(|tick| (tick - value).abs() < TICK_EPS)
        {
            return Ok(());
        }
        self.y_ticks.push(value);

        let tick = LineStyle {
            color,
            width: 1,
            dashed: false,
        };
        let x0 = sine_x(0.0);
        canvas.polyline(&[P2::new(x0 - TICK_LEN, value), P2::new(x0, value)], &tick)?;
        canvas.text(
            P2::new(x0 - TICK_LEN * 1.5, value),
            &format_tick(value),
            &TextStyle {
                size: 14,
                color,
                h_align: HAlign::Right,
                v_align: VAlign::Center,
                ..TextStyle::default()
            },
        )?;
        Ok(())
    }
}

fn format_tick(value: Scalar) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::canvas::{DrawCmd, RecordingCanvas};
    use crate::geometry::SINE_SAMPLES_PER_HALF_TURN;

    #[test]
    fn panels_carry_degree_ticks() {
        let mut canvas = RecordingCanvas::new();
        PhasorSineDiagram::new(&mut canvas).unwrap();

        let labels: Vec<String> = canvas.texts().into_iter().map(|(_, t)| t).collect();
        assert!(labels.contains(&"0°".to_owned()));
        assert!(labels.contains(&"360°".to_owned()));
    }

    #[test]
    fn add_draws_arrow_and_full_period_curve() {
        let mut canvas = RecordingCanvas::new();
        let mut diagram = PhasorSineDiagram::new(&mut canvas).unwrap();
        diagram
            .add(&mut canvas, 0.8, FRAC_PI_2, &CompanionStyle::default())
            .unwrap();

        assert_eq!(canvas.arrows().len(), 1);
        let curve = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polyline { points, .. }
                    if points.len() == 2 * SINE_SAMPLES_PER_HALF_TURN + 1 =>
                {
                    Some(points.clone())
                }
                _ => None,
            })
            .next()
            .expect("expected the sine curve polyline");
        assert_relative_eq!(curve[0].x, sine_x(0.0), epsilon = 1.0e-12);
        // mag·sin(0 + 90°) = mag at the initial ordinate.
        assert_relative_eq!(curve[0].y, 0.8, epsilon = 1.0e-12);
        assert_relative_eq!(curve.last().unwrap().x, sine_x(360.0), epsilon = 1.0e-12);
    }

    #[test]
    fn overlay_extends_y_ticks_without_replacing() {
        let mut canvas = RecordingCanvas::new();
        let mut diagram = PhasorSineDiagram::new(&mut canvas).unwrap();
        diagram
            .add(&mut canvas, 1.0, 0.0, &CompanionStyle::default())
            .unwrap();
        assert_eq!(diagram.y_ticks(), &[1.0, -1.0]);

        diagram
            .add(&mut canvas, 0.6, FRAC_PI_2, &CompanionStyle::default())
            .unwrap();
        assert_eq!(diagram.y_ticks(), &[1.0, -1.0, 0.6, -0.6]);
    }

    #[test]
    fn repeated_magnitudes_do_not_duplicate_ticks() {
        let mut canvas = RecordingCanvas::new();
        let mut diagram = PhasorSineDiagram::new(&mut canvas).unwrap();
        diagram
            .add(&mut canvas, 0.5, 0.0, &CompanionStyle::default())
            .unwrap();
        diagram
            .add(&mut canvas, 0.5, FRAC_PI_2, &CompanionStyle::default())
            .unwrap();
        assert_eq!(diagram.y_ticks(), &[0.5, -0.5]);
    }

    #[test]
    fn connectors_emit_four_dashed_guides() {
        let mut canvas = RecordingCanvas::new();
        let diagram = {
            let mut scratch = RecordingCanvas::new();
            PhasorSineDiagram::new(&mut scratch).unwrap()
        };
        diagram.connectors(&mut canvas, 1.0, 0.0).unwrap();

        let guides: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polyline { points, style } if style.dashed => Some(points.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(guides.len(), 4);
        // For phi = 0 the peak sits at psi = 90°.
        assert_relative_eq!(guides[1][1].x, sine_x(90.0), epsilon = 1.0e-12);
        assert_relative_eq!(guides[1][1].y, 1.0, epsilon = 1.0e-12);
        // Initial value guide starts at the phasor tip.
        assert_relative_eq!(guides[0][0].x, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(guides[0][0].y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn tick_labels_trim_trailing_zeros() {
        assert_eq!(format_tick(1.0), "1");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(-0.75), "-0.75");
    }
}
