//! Painting and rasterization
//!
//! This module turns paths and paint styles into pixels using tiny-skia.
//!
//! # Responsibilities
//!
//! - **Canvas**: Pixel surface plus drawing state (transform, opacity, stroke)
//! - **Styles**: Solid colors, linear/radial gradients and surface patterns
//! - **Conversion**: Mapping geometry, colors and enums onto tiny-skia types
//! - **Pixel passes**: Un-premultiplied RGBA output and luminance masks
//!
//! # Example
//!
//! ```
//! use svgpaint::paint::{BlendMode, Canvas};
//! use svgpaint::{Color, Path};
//!
//! let mut mask = Canvas::new(8, 8)?;
//! mask.clear(0xFFFFFFFF);
//! mask.luminance();
//!
//! let mut canvas = Canvas::new(8, 8)?;
//! canvas.set_color(Color::BLACK);
//! let mut path = Path::new();
//! path.circle(4.0, 4.0, 3.0);
//! canvas.fill(&path);
//! canvas.blend(&mask, BlendMode::DstIn, 1.0);
//! # Ok::<(), svgpaint::Error>(())
//! ```

pub mod canvas;
pub mod convert;
pub mod pixel_ops;
pub(crate) mod pixmap;
pub mod style;
pub(crate) mod surface;

pub use canvas::Canvas;
pub use convert::{BlendMode, LineCap, LineJoin, SpreadMethod, TileMode, WindRule};
pub use pixel_ops::{luminance_pixel, unpremultiply_pixel};
pub use style::{
  Gradient, GradientGeometry, GradientStop, LinearGradientValues, PaintStyle, Pattern,
  RadialGradientValues,
};
