//! `plotters`-backed canvas implementation.
//!
//! Geometry stays in world coordinates; [`Viewport`] maps the world rectangle
//! onto the backend pixel grid (with the y axis flipped) and
//! [`PlottersCanvas`] forwards [`Canvas`] commands to a `plotters` drawing
//! area.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, PathElement, Polygon};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color as _, FontTransform, IntoFont as _, IntoTextStyle as _};
use plotters::style::{RGBColor, ShapeStyle};

use crate::canvas::{ArrowStyle, Canvas, Color, HAlign, LineStyle, TextStyle, VAlign};
use crate::errors::PhasorPlotError;
use crate::geometry::dash_segments;
use crate::math::{P2, Scalar, V2};

/// World-space dash length for dashed polylines.
const DASH_WORLD: Scalar = 0.06;
/// World-space gap length between dashes.
const GAP_WORLD: Scalar = 0.04;

/// Linear mapping from a world rectangle to a backend pixel rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_range: (Scalar, Scalar),
    y_range: (Scalar, Scalar),
    px: (u32, u32),
}

impl Viewport {
    /// Creates a viewport for the world rectangle `x_range` × `y_range`
    /// rendered into `px` pixels.
    #[must_use]
    pub const fn new(x_range: (Scalar, Scalar), y_range: (Scalar, Scalar), px: (u32, u32)) -> Self {
        Self {
            x_range,
            y_range,
            px,
        }
    }

    /// Creates a viewport filling the pixel dimensions of `area`.
    #[must_use]
    pub fn fit<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        x_range: (Scalar, Scalar),
        y_range: (Scalar, Scalar),
    ) -> Self {
        Self::new(x_range, y_range, area.dim_in_pixel())
    }

    /// Maps a world point to backend pixel coordinates (y flipped).
    #[must_use]
    pub fn to_px(&self, p: P2) -> (i32, i32) {
        let sx = Scalar::from(self.px.0) / (self.x_range.1 - self.x_range.0);
        let sy = Scalar::from(self.px.1) / (self.y_range.1 - self.y_range.0);
        let x = (p.x - self.x_range.0) * sx;
        let y = Scalar::from(self.px.1) - (p.y - self.y_range.0) * sy;
        (x.round() as i32, y.round() as i32)
    }

    /// Pixels per world unit along x, used to size screen-space decorations.
    #[must_use]
    pub fn scale(&self) -> Scalar {
        Scalar::from(self.px.0) / (self.x_range.1 - self.x_range.0)
    }
}

/// [`Canvas`] drawing into a `plotters` [`DrawingArea`].
pub struct PlottersCanvas<'a, DB: DrawingBackend> {
    area: &'a DrawingArea<DB, Shift>,
    viewport: Viewport,
}

impl<'a, DB: DrawingBackend> PlottersCanvas<'a, DB> {
    /// Creates a canvas drawing into `area` through `viewport`.
    #[must_use]
    pub const fn new(area: &'a DrawingArea<DB, Shift>, viewport: Viewport) -> Self {
        Self { area, viewport }
    }

    fn draw_path(&self, points: &[P2], style: ShapeStyle) -> Result<(), PhasorPlotError> {
        let px: Vec<(i32, i32)> = points.iter().map(|p| self.viewport.to_px(*p)).collect();
        self.area
            .draw(&PathElement::new(px, style))
            .map_err(render_err)
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<'_, DB> {
    fn polyline(&mut self, points: &[P2], style: &LineStyle) -> Result<(), PhasorPlotError> {
        let shape = ShapeStyle::from(&rgb(style.color)).stroke_width(style.width);
        if !style.dashed {
            return self.draw_path(points, shape);
        }
        for pair in points.windows(2) {
            for (a, b) in dash_segments(pair[0], pair[1], DASH_WORLD, GAP_WORLD) {
                self.draw_path(&[a, b], shape)?;
            }
        }
        Ok(())
    }

    fn arrow(&mut self, from: P2, to: P2, style: &ArrowStyle) -> Result<(), PhasorPlotError> {
        let length = (to - from).norm();
        if length == 0.0 {
            return Ok(());
        }
        let dir = (to - from) / length;
        let tangent = V2::new(-dir.y, dir.x);
        let base = to - dir * style.head_length;
        let half = tangent * (style.head_width * 0.5);

        let shape = ShapeStyle::from(&rgb(style.color)).stroke_width(style.width);
        self.draw_path(&[from, base], shape)?;

        let head = [to, base + half, base - half];
        let px: Vec<(i32, i32)> = head.iter().map(|p| self.viewport.to_px(*p)).collect();
        self.area
            .draw(&Polygon::new(px, rgb(style.color).filled()))
            .map_err(render_err)
    }

    fn text(&mut self, pos: P2, text: &str, style: &TextStyle) -> Result<(), PhasorPlotError> {
        if text.is_empty() {
            return Ok(());
        }
        let color = rgb(style.color);
        let text_style = ("sans-serif", i32::try_from(style.size).unwrap_or(18))
            .into_font()
            .into_text_style(self.area)
            .color(&color)
            .transform(font_transform(style.rotation_deg))
            .pos(Pos::new(hpos(style.h_align), vpos(style.v_align)));
        self.area
            .draw_text(text, &text_style, self.viewport.to_px(pos))
            .map_err(render_err)
    }

    fn dot(&mut self, center: P2, radius: Scalar, color: Color) -> Result<(), PhasorPlotError> {
        let px_radius = ((radius * self.viewport.scale()).round() as i32).max(1);
        self.area
            .draw(&Circle::new(
                self.viewport.to_px(center),
                px_radius,
                rgb(color).filled(),
            ))
            .map_err(render_err)
    }
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn render_err<E: std::fmt::Display>(e: E) -> PhasorPlotError {
    PhasorPlotError::Render(e.to_string())
}

/// Quantizes a counter-clockwise world rotation to the backend's quadrant
/// font transforms. Screen y points down, so world quadrants map in reverse.
fn font_transform(rotation_deg: Scalar) -> FontTransform {
    match ((rotation_deg / 90.0).round() as i64).rem_euclid(4) {
        1 => FontTransform::Rotate270,
        2 => FontTransform::Rotate180,
        3 => FontTransform::Rotate90,
        _ => FontTransform::None,
    }
}

const fn hpos(align: HAlign) -> HPos {
    match align {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    }
}

const fn vpos(align: VAlign) -> VPos {
    match align {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    }
}

#[cfg(test)]
mod tests {
    use plotters::prelude::*;

    use super::*;
    use crate::diagram::{draw_phasor, PhasorArrowOptions};
    use crate::units::Phasor;

    #[test]
    fn viewport_flips_the_y_axis() {
        let viewport = Viewport::new((-1.0, 1.0), (-1.0, 1.0), (200, 100));
        assert_eq!(viewport.to_px(P2::new(-1.0, -1.0)), (0, 100));
        assert_eq!(viewport.to_px(P2::new(1.0, 1.0)), (200, 0));
        assert_eq!(viewport.to_px(P2::new(0.0, 0.0)), (100, 50));
    }

    #[test]
    fn rotation_quantizes_to_quadrants() {
        assert!(matches!(font_transform(10.0), FontTransform::None));
        assert!(matches!(font_transform(90.0), FontTransform::Rotate270));
        assert!(matches!(font_transform(-90.0), FontTransform::Rotate90));
        assert!(matches!(font_transform(185.0), FontTransform::Rotate180));
    }

    #[test]
    fn phasor_arrow_renders_to_svg() {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (400, 400)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let viewport = Viewport::fit(&root, (-1.5, 1.5), (-1.5, 1.5));
            let mut canvas = PlottersCanvas::new(&root, viewport);
            let options = PhasorArrowOptions {
                label: Some("U".into()),
                ..Default::default()
            };
            draw_phasor(&mut canvas, &Phasor::dimensionless(1.0, 0.0), &options).unwrap();
            root.present().unwrap();
        }
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polyline") || svg.contains("path"));
        assert!(svg.contains('U'));
    }
}
