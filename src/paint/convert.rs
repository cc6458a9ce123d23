//! Conversions from the paint model into tiny-skia types.
//!
//! All mappings are one-to-one and side-effect free.

use crate::color::Color;
use crate::debug::runtime::SamplingQuality;
use crate::geometry::Transform;
use crate::path::{Path, PathCommand};
use crate::geometry::Point;
use tiny_skia::BlendMode as SkiaBlendMode;
use tiny_skia::{FillRule, FilterQuality, LineCap as SkiaLineCap, LineJoin as SkiaLineJoin};
use tiny_skia::{PathBuilder, SpreadMode};

/// Stroke end-cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
  #[default]
  Butt,
  Round,
  Square,
}

/// Stroke corner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
  #[default]
  Miter,
  Round,
  Bevel,
}

/// Fill rule deciding which regions of a path are inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindRule {
  #[default]
  NonZero,
  EvenOdd,
}

/// How a gradient continues beyond its defined span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpreadMethod {
  #[default]
  Pad,
  Reflect,
  Repeat,
}

/// How a pattern tile continues beyond its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
  #[default]
  Pad,
  Tiled,
}

/// Composition operator for [`Canvas::blend`](crate::Canvas::blend).
///
/// Only two operators exist at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
  /// Source drawn over destination.
  #[default]
  SrcOver,
  /// Destination kept only where the source has alpha.
  DstIn,
}

pub(crate) fn to_skia_color(color: &Color) -> tiny_skia::Color {
  let [r, g, b, a] = color.to_rgba8();
  tiny_skia::Color::from_rgba8(r, g, b, a)
}

pub(crate) fn to_skia_transform(matrix: &Transform) -> tiny_skia::Transform {
  tiny_skia::Transform::from_row(
    matrix.m00, matrix.m10, matrix.m01, matrix.m11, matrix.m02, matrix.m12,
  )
}

pub(crate) fn to_skia_fill_rule(rule: WindRule) -> FillRule {
  match rule {
    WindRule::EvenOdd => FillRule::EvenOdd,
    WindRule::NonZero => FillRule::Winding,
  }
}

pub(crate) fn to_skia_line_cap(cap: LineCap) -> SkiaLineCap {
  match cap {
    LineCap::Butt => SkiaLineCap::Butt,
    LineCap::Round => SkiaLineCap::Round,
    LineCap::Square => SkiaLineCap::Square,
  }
}

/// `Miter` maps to tiny-skia's miter join, which turns into a bevel once the
/// miter limit is exceeded (not the clipped variant).
pub(crate) fn to_skia_line_join(join: LineJoin) -> SkiaLineJoin {
  match join {
    LineJoin::Miter => SkiaLineJoin::Miter,
    LineJoin::Round => SkiaLineJoin::Round,
    LineJoin::Bevel => SkiaLineJoin::Bevel,
  }
}

pub(crate) fn to_skia_spread_mode(spread: SpreadMethod) -> SpreadMode {
  match spread {
    SpreadMethod::Pad => SpreadMode::Pad,
    SpreadMethod::Reflect => SpreadMode::Reflect,
    SpreadMethod::Repeat => SpreadMode::Repeat,
  }
}

pub(crate) fn to_skia_tile_mode(mode: TileMode) -> SpreadMode {
  match mode {
    TileMode::Tiled => SpreadMode::Repeat,
    TileMode::Pad => SpreadMode::Pad,
  }
}

pub(crate) fn to_skia_blend_mode(mode: BlendMode) -> SkiaBlendMode {
  match mode {
    BlendMode::DstIn => SkiaBlendMode::DestinationIn,
    BlendMode::SrcOver => SkiaBlendMode::SourceOver,
  }
}

pub(crate) fn to_skia_filter_quality(quality: SamplingQuality) -> FilterQuality {
  match quality {
    SamplingQuality::Nearest => FilterQuality::Nearest,
    SamplingQuality::Bilinear => FilterQuality::Bilinear,
    SamplingQuality::Bicubic => FilterQuality::Bicubic,
  }
}

/// Builds tiny-skia geometry by walking the path with a [`PathIterator`](crate::path::PathIterator).
///
/// Returns `None` for paths tiny-skia rejects (empty, or without any drawable segment).
pub(crate) fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
  let mut builder = PathBuilder::with_capacity(path.len(), path.points().len());
  let mut it = path.iter();
  let mut p = [Point::ZERO; 3];
  while !it.is_done() {
    match it.current_segment(&mut p) {
      PathCommand::MoveTo => builder.move_to(p[0].x, p[0].y),
      PathCommand::LineTo => builder.line_to(p[0].x, p[0].y),
      PathCommand::CubicTo => builder.cubic_to(p[0].x, p[0].y, p[1].x, p[1].y, p[2].x, p[2].y),
      PathCommand::Close => builder.close(),
    }
    it.advance();
  }
  builder.finish()
}
