//! svgpaint: a canvas abstraction for SVG-style rendering
//!
//! Wraps the tiny-skia rasterizer behind a small drawing API: build a
//! [`Path`], pick a paint style (solid [`Color`], gradient or pattern), then
//! fill or stroke it on a [`Canvas`]. Canvases can own their pixels or draw
//! into caller memory, composite onto each other, and post-process their
//! pixels into straight-alpha RGBA or luminance masks.
//!
//! Runtime knobs (allocation limit, pattern sampling, anti-aliasing, paint
//! logging) are read from `SVGPAINT_*` environment variables; see
//! [`debug::runtime`].

pub mod color;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod path;

pub use color::Color;
pub use error::{Error, RenderError, Result};
pub use geometry::{Point, Rect, Transform};
pub use paint::{
  BlendMode, Canvas, Gradient, GradientStop, LineCap, LineJoin, LinearGradientValues, PaintStyle,
  Pattern, RadialGradientValues, SpreadMethod, TileMode, WindRule,
};
pub use path::{Path, PathCommand, PathIterator};
