use std::f64::consts::FRAC_PI_3;

use phasor_plot::prelude::*;
use plotters::prelude::{IntoDrawingArea, SVGBackend, WHITE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new("phasor_diagram.svg", (600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let viewport = Viewport::fit(&root, (-1.5, 1.5), (-1.5, 1.5));
    let mut canvas = PlottersCanvas::new(&root, viewport);

    // Voltage across an RL load and the lagging current, normalized onto the
    // unit plotting square.
    let u = Phasor::from_polar(Quantity::volts(230.0), FRAC_PI_3);
    let i = Phasor::from_polar(Quantity::amps(8.0), 0.0);

    draw_phasor(
        &mut canvas,
        &u,
        &PhasorArrowOptions {
            reference: Some(Quantity::volts(230.0)),
            label: Some("U".into()),
            arrow: ArrowStyle {
                color: Color::RED,
                ..Default::default()
            },
            line: LineStyle {
                color: Color::RED,
                ..Default::default()
            },
            text: TextStyle {
                color: Color::RED,
                ..Default::default()
            },
            ..Default::default()
        },
    )?;

    draw_phasor(
        &mut canvas,
        &i,
        &PhasorArrowOptions {
            reference: Some(Quantity::amps(10.0)),
            label: Some("I".into()),
            arrow: ArrowStyle {
                color: Color::BLUE,
                ..Default::default()
            },
            line: LineStyle {
                color: Color::BLUE,
                ..Default::default()
            },
            text: TextStyle {
                color: Color::BLUE,
                ..Default::default()
            },
            ..Default::default()
        },
    )?;

    // Phase angle between current and voltage.
    draw_angle_arc(
        &mut canvas,
        &AngleArcOptions {
            radius: 0.45,
            phi1: 0.0,
            phi2: FRAC_PI_3,
            label: Some("φ".into()),
            ..Default::default()
        },
    )?;

    // Dimension the voltage magnitude beside the arrow.
    draw_phasor_dimension(
        &mut canvas,
        &u,
        &Phasor::zero(Unit::Volt),
        Quantity::volts(230.0),
        &LengthDimensionOptions {
            offset: -0.12,
            leaders: true,
            label: Some("230 V".into()),
            line: LineStyle {
                color: Color::GRAY,
                width: 1,
                dashed: false,
            },
            ..Default::default()
        },
    )?;

    root.present()?;
    println!("wrote phasor_diagram.svg");
    Ok(())
}
