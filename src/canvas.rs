//! Drawing abstraction separating geometry from rendering.
//!
//! Drawing operations take a [`Canvas`] handle instead of relying on an
//! ambient figure context. [`RecordingCanvas`] captures the emitted commands
//! for inspection and testing; `crate::render::PlottersCanvas` forwards them
//! to a `plotters` drawing area.

use crate::errors::PhasorPlotError;
use crate::math::{P2, Scalar};

/// 24-bit RGB color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Mid gray, used for guide lines and axes decoration.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Light gray, used for the unit-circle outline.
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
    /// Red, conventional for voltage phasors.
    pub const RED: Self = Self::rgb(200, 30, 30);
    /// Blue, conventional for current phasors.
    pub const BLUE: Self = Self::rgb(30, 30, 200);

    /// Creates a color from channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stroke styling for polylines.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in backend pixels.
    pub width: u32,
    /// Render as a dashed line.
    pub dashed: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2,
            dashed: false,
        }
    }
}

/// Arrow styling; head dimensions are in world units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    /// Shaft and head color.
    pub color: Color,
    /// Shaft width in backend pixels.
    pub width: u32,
    /// Head length along the shaft direction.
    pub head_length: Scalar,
    /// Head width across the shaft direction.
    pub head_width: Scalar,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2,
            head_length: 0.06,
            head_width: 0.04,
        }
    }
}

/// Horizontal text anchoring.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the center.
    #[default]
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Vertical text anchoring.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    /// Anchor at the top edge.
    Top,
    /// Anchor at the center.
    #[default]
    Center,
    /// Anchor at the bottom edge.
    Bottom,
}

/// Text styling and placement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in backend points.
    pub size: u32,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: Scalar,
    /// Horizontal anchoring.
    pub h_align: HAlign,
    /// Vertical anchoring.
    pub v_align: VAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 18,
            rotation_deg: 0.0,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
        }
    }
}

/// End markers for angular dimension arcs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Arrow head oriented along the arc.
    #[default]
    Arrow,
    /// Filled dot.
    Dot,
    /// No marker.
    None,
}

/// Sink for drawing primitives in world coordinates.
pub trait Canvas {
    /// Draws a polyline through `points`.
    fn polyline(&mut self, points: &[P2], style: &LineStyle) -> Result<(), PhasorPlotError>;

    /// Draws a straight arrow from `from` to `to` with a filled head at `to`.
    fn arrow(&mut self, from: P2, to: P2, style: &ArrowStyle) -> Result<(), PhasorPlotError>;

    /// Places `text` anchored at `pos`. Empty text draws nothing.
    fn text(&mut self, pos: P2, text: &str, style: &TextStyle) -> Result<(), PhasorPlotError>;

    /// Draws a filled dot of world-space `radius` at `center`.
    fn dot(&mut self, center: P2, radius: Scalar, color: Color) -> Result<(), PhasorPlotError>;
}

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// A polyline.
    Polyline {
        /// Vertices in world coordinates.
        points: Vec<P2>,
        /// Stroke style.
        style: LineStyle,
    },
    /// An arrow.
    Arrow {
        /// Tail position.
        from: P2,
        /// Tip position.
        to: P2,
        /// Arrow style.
        style: ArrowStyle,
    },
    /// A text label.
    Text {
        /// Anchor position.
        pos: P2,
        /// Label content.
        text: String,
        /// Text style.
        style: TextStyle,
    },
    /// A filled dot.
    Dot {
        /// Center position.
        center: P2,
        /// World-space radius.
        radius: Scalar,
        /// Fill color.
        color: Color,
    },
}

/// Canvas implementation that records commands instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCmd>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in emission order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// True if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded arrows as `(from, to)` pairs.
    #[must_use]
    pub fn arrows(&self) -> Vec<(P2, P2)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Arrow { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text labels as `(pos, text)` pairs.
    #[must_use]
    pub fn texts(&self) -> Vec<(P2, String)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { pos, text, .. } => Some((*pos, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn polyline(&mut self, points: &[P2], style: &LineStyle) -> Result<(), PhasorPlotError> {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn arrow(&mut self, from: P2, to: P2, style: &ArrowStyle) -> Result<(), PhasorPlotError> {
        self.commands.push(DrawCmd::Arrow {
            from,
            to,
            style: *style,
        });
        Ok(())
    }

    fn text(&mut self, pos: P2, text: &str, style: &TextStyle) -> Result<(), PhasorPlotError> {
        if text.is_empty() {
            return Ok(());
        }
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.to_owned(),
            style: *style,
        });
        Ok(())
    }

    fn dot(&mut self, center: P2, radius: Scalar, color: Color) -> Result<(), PhasorPlotError> {
        self.commands.push(DrawCmd::Dot {
            center,
            radius,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas
            .polyline(&[P2::new(0.0, 0.0), P2::new(1.0, 0.0)], &LineStyle::default())
            .unwrap();
        canvas
            .arrow(P2::new(0.0, 0.0), P2::new(0.0, 1.0), &ArrowStyle::default())
            .unwrap();
        assert_eq!(canvas.commands().len(), 2);
        assert_eq!(canvas.arrows().len(), 1);
    }

    #[test]
    fn empty_text_is_dropped() {
        let mut canvas = RecordingCanvas::new();
        canvas
            .text(P2::new(0.0, 0.0), "", &TextStyle::default())
            .unwrap();
        assert!(canvas.is_empty());
    }
}
