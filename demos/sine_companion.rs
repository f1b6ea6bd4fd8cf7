use std::f64::consts::FRAC_PI_4;

use phasor_plot::prelude::*;
use plotters::prelude::{IntoDrawingArea, SVGBackend, WHITE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new("sine_companion.svg", (1000, 420)).into_drawing_area();
    root.fill(&WHITE)?;

    let viewport = Viewport::fit(&root, (-1.6, 5.8), (-1.5, 1.5));
    let mut canvas = PlottersCanvas::new(&root, viewport);

    let mut diagram = PhasorSineDiagram::new(&mut canvas)?;

    // Voltage at full scale, 45° ahead of the current.
    diagram.add(
        &mut canvas,
        1.0,
        FRAC_PI_4,
        &CompanionStyle {
            line: LineStyle {
                color: Color::RED,
                ..Default::default()
            },
            arrow: ArrowStyle {
                color: Color::RED,
                ..Default::default()
            },
        },
    )?;
    diagram.connectors(&mut canvas, 1.0, FRAC_PI_4)?;

    // Overlay the current at 60 % amplitude; the y tick labels extend.
    diagram.add(
        &mut canvas,
        0.6,
        0.0,
        &CompanionStyle {
            line: LineStyle {
                color: Color::BLUE,
                ..Default::default()
            },
            arrow: ArrowStyle {
                color: Color::BLUE,
                ..Default::default()
            },
        },
    )?;

    root.present()?;
    println!("wrote sine_companion.svg");
    Ok(())
}
