//! Convenience re-exports for building phasor diagrams.

pub use crate::arc::{draw_angle_arc, AngleArcOptions};
pub use crate::canvas::{
    ArrowStyle, Canvas, Color, DrawCmd, HAlign, LineStyle, Marker, RecordingCanvas, TextStyle,
    VAlign,
};
pub use crate::companion::{sine_x, CompanionStyle, PhasorSineDiagram};
pub use crate::diagram::{draw_phasor, LabelPlacement, PhasorArrowOptions};
pub use crate::dimension::{
    draw_length_dimension, draw_phasor_dimension, LengthDimensionOptions,
};
pub use crate::errors::PhasorPlotError;
pub use crate::geometry::{
    arc_points, phasor_arrow, sine_points, ArrowGeometry, ArrowPlacement,
};
pub use crate::math::{pol, polar_point, rotate90_cw, CScalar, Scalar, P2, V2};
pub use crate::render::{PlottersCanvas, Viewport};
pub use crate::units::{Phasor, Quantity, Unit};
