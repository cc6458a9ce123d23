//! Paint styles: solid color, gradient or pattern.
//!
//! A canvas holds one [`PaintStyle`] and uses it for both fills and strokes.
//! Backend objects are built when a style is created; dispatch only wraps
//! them in a [`tiny_skia::Paint`].

use super::convert::{
  to_skia_color, to_skia_filter_quality, to_skia_spread_mode, to_skia_tile_mode,
  to_skia_transform, SpreadMethod, TileMode,
};
use crate::color::Color;
use crate::debug::runtime::PaintConfig;
use crate::geometry::Transform;
use std::sync::Arc;
use tiny_skia::{Paint, Pixmap, Shader};

/// End points of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearGradientValues {
  pub x1: f32,
  pub y1: f32,
  pub x2: f32,
  pub y2: f32,
}

impl LinearGradientValues {
  pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
    Self { x1, y1, x2, y2 }
  }
}

/// Center, radius and focal point of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadialGradientValues {
  pub cx: f32,
  pub cy: f32,
  pub r: f32,
  pub fx: f32,
  pub fy: f32,
}

impl RadialGradientValues {
  pub const fn new(cx: f32, cy: f32, r: f32, fx: f32, fy: f32) -> Self {
    Self { cx, cy, r, fx, fy }
  }
}

/// One color stop. Offsets are expected in `[0, 1]` and ascending, but are not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
  pub offset: f32,
  pub color: Color,
}

impl GradientStop {
  pub const fn new(offset: f32, color: Color) -> Self {
    Self { offset, color }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
  Linear(LinearGradientValues),
  Radial(RadialGradientValues),
}

/// A gradient paint together with its prepared shader.
#[derive(Debug, Clone)]
pub struct Gradient {
  geometry: GradientGeometry,
  stops: Vec<GradientStop>,
  spread: SpreadMethod,
  transform: Transform,
  shader: Option<Shader<'static>>,
}

impl Gradient {
  pub fn linear(
    values: LinearGradientValues,
    transform: Transform,
    spread: SpreadMethod,
    stops: &[GradientStop],
  ) -> Self {
    Self::build(GradientGeometry::Linear(values), transform, spread, stops)
  }

  pub fn radial(
    values: RadialGradientValues,
    transform: Transform,
    spread: SpreadMethod,
    stops: &[GradientStop],
  ) -> Self {
    Self::build(GradientGeometry::Radial(values), transform, spread, stops)
  }

  fn build(
    geometry: GradientGeometry,
    transform: Transform,
    spread: SpreadMethod,
    stops: &[GradientStop],
  ) -> Self {
    let skia_stops = stops
      .iter()
      .map(|stop| tiny_skia::GradientStop::new(stop.offset, to_skia_color(&stop.color)))
      .collect::<Vec<_>>();
    let mode = to_skia_spread_mode(spread);
    let matrix = to_skia_transform(&transform);

    let shader = match geometry {
      GradientGeometry::Linear(v) => tiny_skia::LinearGradient::new(
        tiny_skia::Point::from_xy(v.x1, v.y1),
        tiny_skia::Point::from_xy(v.x2, v.y2),
        skia_stops,
        mode,
        matrix,
      ),
      // tiny-skia takes the focal point as the start and the center as the end.
      GradientGeometry::Radial(v) => tiny_skia::RadialGradient::new(
        tiny_skia::Point::from_xy(v.fx, v.fy),
        tiny_skia::Point::from_xy(v.cx, v.cy),
        v.r,
        skia_stops,
        mode,
        matrix,
      ),
    };
    if shader.is_none() {
      log::debug!("gradient {geometry:?} with {} stops is degenerate", stops.len());
    }

    Self {
      geometry,
      stops: stops.to_vec(),
      spread,
      transform,
      shader,
    }
  }

  pub fn geometry(&self) -> &GradientGeometry {
    &self.geometry
  }

  pub fn stops(&self) -> &[GradientStop] {
    &self.stops
  }

  pub fn spread(&self) -> SpreadMethod {
    self.spread
  }

  pub fn transform(&self) -> Transform {
    self.transform
  }

  /// False when the rasterizer rejected the gradient; painting with it draws nothing.
  pub fn is_drawable(&self) -> bool {
    self.shader.is_some()
  }
}

/// A tile surface shared with the canvas it was taken from.
#[derive(Debug, Clone)]
pub struct Pattern {
  tile: Arc<Pixmap>,
  transform: Transform,
  mode: TileMode,
}

impl Pattern {
  pub(crate) fn new(tile: Arc<Pixmap>, transform: Transform, mode: TileMode) -> Self {
    Self {
      tile,
      transform,
      mode,
    }
  }

  pub fn transform(&self) -> Transform {
    self.transform
  }

  pub fn tile_mode(&self) -> TileMode {
    self.mode
  }

  pub fn tile_width(&self) -> u32 {
    self.tile.width()
  }

  pub fn tile_height(&self) -> u32 {
    self.tile.height()
  }

  /// Premultiplied pixels of the tile as captured when the pattern was set.
  pub fn tile_data(&self) -> &[u8] {
    self.tile.data()
  }

  /// Number of live handles to the tile pixels, the pattern included.
  pub fn tile_ref_count(&self) -> usize {
    Arc::strong_count(&self.tile)
  }
}

/// The paint applied by `fill` and `stroke`.
#[derive(Debug, Clone)]
pub enum PaintStyle {
  Color(Color),
  Gradient(Gradient),
  Pattern(Pattern),
}

impl PaintStyle {
  /// Paint for the fill slot, with the global opacity folded in.
  pub(crate) fn apply_as_fill(&self, opacity: f32, config: &PaintConfig) -> Option<Paint<'_>> {
    self.to_paint(opacity, config)
  }

  /// Paint for the stroke slot, with the global opacity folded in.
  pub(crate) fn apply_as_stroke(&self, opacity: f32, config: &PaintConfig) -> Option<Paint<'_>> {
    self.to_paint(opacity, config)
  }

  fn to_paint(&self, opacity: f32, config: &PaintConfig) -> Option<Paint<'_>> {
    let shader = match self {
      PaintStyle::Color(color) => {
        let mut color = to_skia_color(color);
        color.apply_opacity(opacity);
        Shader::SolidColor(color)
      }
      PaintStyle::Gradient(gradient) => {
        let mut shader = gradient.shader.clone()?;
        shader.apply_opacity(opacity);
        shader
      }
      PaintStyle::Pattern(pattern) => tiny_skia::Pattern::new(
        Pixmap::as_ref(&pattern.tile),
        to_skia_tile_mode(pattern.mode),
        to_skia_filter_quality(config.pattern_quality),
        opacity,
        to_skia_transform(&pattern.transform),
      ),
    };

    Some(Paint {
      shader,
      anti_alias: config.anti_alias,
      ..Paint::default()
    })
  }

  pub(crate) fn kind_name(&self) -> &'static str {
    match self {
      PaintStyle::Color(_) => "color",
      PaintStyle::Gradient(_) => "gradient",
      PaintStyle::Pattern(_) => "pattern",
    }
  }
}
