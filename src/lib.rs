#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared mathematical utilities (aliases, polar helpers, sampling).
pub mod math;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Pure coordinate geometry for arrows, arcs, and sine curves.
pub mod geometry;
/// Drawing abstraction and the recording canvas.
pub mod canvas;
/// Phasor arrow drawing.
pub mod diagram;
/// Angular dimension arcs.
pub mod arc;
/// Phasor and sine companion plots.
pub mod companion;
/// Length dimension annotations.
pub mod dimension;
/// `plotters`-backed rendering.
pub mod render;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::PhasorPlotError;
