//! Angular dimension arcs between two phasor directions.

use crate::canvas::{ArrowStyle, Canvas, LineStyle, Marker, TextStyle};
use crate::errors::PhasorPlotError;
use crate::geometry::{arc_head_segment, arc_points};
use crate::math::{polar_point, Scalar};

/// World-space radius of dot end markers.
const DOT_RADIUS: Scalar = 0.015;

/// Options for [`draw_angle_arc`].
#[derive(Debug, Clone)]
pub struct AngleArcOptions {
    /// Arc radius in plotting units.
    pub radius: Scalar,
    /// Start angle in radians.
    pub phi1: Scalar,
    /// End angle in radians.
    pub phi2: Scalar,
    /// Marker at the start of the arc.
    pub start_marker: Marker,
    /// Marker at the end of the arc.
    pub end_marker: Marker,
    /// Draw a dot at the arc midpoint to denote a right angle.
    pub right_angle_dot: bool,
    /// Label text; empty or absent labels draw nothing.
    pub label: Option<String>,
    /// Radial label displacement beyond the arc radius.
    pub label_radial_sep: Scalar,
    /// Label position along the arc as a fraction of the span.
    pub label_angle_sep: Scalar,
    /// Arc stroke style.
    pub line: LineStyle,
    /// End-arrow style.
    pub arrow: ArrowStyle,
    /// Label text style.
    pub text: TextStyle,
}

impl Default for AngleArcOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            phi1: 0.0,
            phi2: 0.0,
            start_marker: Marker::None,
            end_marker: Marker::Arrow,
            right_angle_dot: false,
            label: None,
            label_radial_sep: 0.15,
            label_angle_sep: 0.5,
            line: LineStyle::default(),
            arrow: ArrowStyle::default(),
            text: TextStyle::default(),
        }
    }
}

/// Draws an angular dimension arc from `phi1` to `phi2`.
///
/// The sign of `phi2 - phi1` sets the marker orientation: end arrows point
/// along increasing angle for a positive span and along decreasing angle
/// otherwise.
pub fn draw_angle_arc(
    canvas: &mut dyn Canvas,
    options: &AngleArcOptions,
) -> Result<(), PhasorPlotError> {
    let span = options.phi2 - options.phi1;
    let orientation = if span < 0.0 { -1.0 } else { 1.0 };

    let points = arc_points(options.radius, options.phi1, options.phi2);
    canvas.polyline(&points, &options.line)?;

    draw_marker(
        canvas,
        options,
        options.start_marker,
        options.phi1,
        -orientation,
    )?;
    draw_marker(
        canvas,
        options,
        options.end_marker,
        options.phi2,
        orientation,
    )?;

    if options.right_angle_dot {
        let mid = polar_point(options.radius, options.phi1 + span * 0.5);
        canvas.dot(mid, DOT_RADIUS, options.line.color)?;
    }

    if let Some(label) = options.label.as_deref() {
        let pos = polar_point(
            options.radius + options.label_radial_sep,
            options.phi1 + span * options.label_angle_sep,
        );
        canvas.text(pos, label, &options.text)?;
    }

    Ok(())
}

fn draw_marker(
    canvas: &mut dyn Canvas,
    options: &AngleArcOptions,
    marker: Marker,
    phi: Scalar,
    orientation: Scalar,
) -> Result<(), PhasorPlotError> {
    match marker {
        Marker::Arrow => {
            let (tail, tip) = arc_head_segment(options.radius, phi, orientation);
            canvas.arrow(tail, tip, &options.arrow)
        }
        Marker::Dot => canvas.dot(
            polar_point(options.radius, phi),
            DOT_RADIUS,
            options.line.color,
        ),
        Marker::None => Ok(()),
    }
}
