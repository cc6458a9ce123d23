//! Canvas wrapper for the tiny-skia 2D graphics library
//!
//! This module provides the drawing surface used by the SVG painter. It handles:
//!
//! - Surface ownership (self-allocated, or a view over caller memory)
//! - The active paint style (color, gradient or pattern)
//! - Drawing state (transform, opacity, stroke parameters, fill rule)
//! - Path fill/stroke, whole-surface compositing and clearing
//! - Pixel post-processing (un-premultiplication, luminance masks)
//!
//! # Architecture
//!
//! The Canvas wraps a pixel [`Surface`] and keeps a stack of drawing states.
//! Every draw call runs inside its own save/restore pair, so state touched for
//! one operation never leaks into the next.
//!
//! # Example
//!
//! ```
//! use svgpaint::{Canvas, Color, Path};
//!
//! let mut canvas = Canvas::new(20, 20)?;
//! canvas.set_color(Color::new(1.0, 0.0, 0.0, 1.0));
//!
//! let mut path = Path::new();
//! path.move_to(0.0, 0.0);
//! path.line_to(20.0, 0.0);
//! path.line_to(20.0, 20.0);
//! path.line_to(0.0, 20.0);
//! path.close();
//! canvas.fill(&path);
//!
//! canvas.rgba();
//! assert_eq!(&canvas.data()[..4], &[255, 0, 0, 255]);
//! # Ok::<(), svgpaint::Error>(())
//! ```

use super::convert::{
  to_skia_blend_mode, to_skia_fill_rule, to_skia_line_cap, to_skia_line_join, to_skia_path,
  to_skia_transform, BlendMode, LineCap, LineJoin, SpreadMethod, TileMode, WindRule,
};
use super::pixel_ops::{luminance_rows, unpremultiply_rows};
use super::pixmap::new_pixmap_with_context;
use super::style::{
  Gradient, GradientStop, LinearGradientValues, PaintStyle, Pattern, RadialGradientValues,
};
use super::surface::{ExternalSurface, Surface};
use crate::color::Color;
use crate::debug::runtime::runtime_toggles;
use crate::error::Result;
use crate::geometry::Transform;
use crate::path::Path;
use std::fmt;
use std::sync::Arc;
use tiny_skia::{FilterQuality, PixmapPaint, Stroke};

// ============================================================================
// Canvas State
// ============================================================================

/// Drawing state saved and restored around each operation.
#[derive(Debug, Clone, PartialEq)]
struct CanvasState {
  transform: Transform,
  opacity: f32,
  fill_rule: WindRule,
  line_width: f32,
  line_cap: LineCap,
  line_join: LineJoin,
  miter_limit: f32,
  blend_mode: BlendMode,
}

impl CanvasState {
  fn new() -> Self {
    Self {
      transform: Transform::IDENTITY,
      opacity: 1.0,
      fill_rule: WindRule::NonZero,
      line_width: 1.0,
      line_cap: LineCap::Butt,
      line_join: LineJoin::Miter,
      miter_limit: 4.0,
      blend_mode: BlendMode::SrcOver,
    }
  }

  fn stroke(&self) -> Stroke {
    Stroke {
      width: self.line_width,
      miter_limit: self.miter_limit,
      line_cap: to_skia_line_cap(self.line_cap),
      line_join: to_skia_line_join(self.line_join),
      dash: None,
    }
  }
}

impl Default for CanvasState {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone, Copy)]
enum DrawOp {
  Fill,
  Stroke,
}

// ============================================================================
// Canvas
// ============================================================================

/// A pixel surface plus the drawing state used to paint on it.
///
/// Pixels are 32-bit premultiplied RGBA in tiny-skia's byte order. `'a` is the
/// lifetime of caller memory for canvases created with
/// [`Canvas::from_external`]; owned canvases are `Canvas<'static>`.
///
/// # Thread Safety
///
/// Every mutator takes `&mut self`; a canvas is painted from one thread at a time.
pub struct Canvas<'a> {
  surface: Surface<'a>,
  style: Option<PaintStyle>,
  state_stack: Vec<CanvasState>,
  current_state: CanvasState,
}

impl Canvas<'static> {
  /// Creates a canvas with its own zero-initialized (fully transparent) surface.
  ///
  /// # Errors
  ///
  /// Returns `RenderError::InvalidParameters` if:
  /// - Width or height is zero
  /// - Width × height × 4 overflows or exceeds `SVGPAINT_MAX_PIXMAP_BYTES`
  /// - Allocation fails
  pub fn new(width: u32, height: u32) -> Result<Self> {
    let pixmap = new_pixmap_with_context(width, height, "canvas")?;
    Ok(Self::with_surface(Surface::Owned(Arc::new(pixmap))))
  }
}

impl<'a> Canvas<'a> {
  /// Wraps caller memory as the canvas surface.
  ///
  /// Rows start every `stride` bytes and hold `width` premultiplied pixels.
  /// The memory is borrowed for the canvas lifetime and cleared to transparent;
  /// padding bytes between rows are never written.
  ///
  /// # Errors
  ///
  /// Returns `RenderError::InvalidSurface` for zero dimensions, a stride shorter
  /// than `width * 4`, or a buffer too small for `height` rows.
  pub fn from_external(data: &'a mut [u8], width: u32, height: u32, stride: u32) -> Result<Self> {
    let view = ExternalSurface::new(data, width, height, stride)?;
    let mut canvas = Self::with_surface(Surface::External(view));
    for row in canvas.surface.rows_mut() {
      row.fill(0);
    }
    Ok(canvas)
  }

  fn with_surface(surface: Surface<'a>) -> Self {
    Self {
      surface,
      style: None,
      state_stack: Vec::new(),
      current_state: CanvasState::new(),
    }
  }

  /// Returns the canvas width in pixels
  #[inline]
  pub fn width(&self) -> u32 {
    self.surface.width()
  }

  /// Returns the canvas height in pixels
  #[inline]
  pub fn height(&self) -> u32 {
    self.surface.height()
  }

  /// Returns the number of bytes between the starts of two rows
  #[inline]
  pub fn stride(&self) -> usize {
    self.surface.stride()
  }

  /// True for canvases created with [`Canvas::from_external`].
  #[inline]
  pub fn is_external(&self) -> bool {
    self.surface.is_external()
  }

  /// The live pixel bytes, `stride` bytes per row.
  pub fn data(&self) -> &[u8] {
    self.surface.data()
  }

  /// Mutable access to the live pixel bytes.
  ///
  /// Writes bypass the drawing state entirely.
  pub fn data_mut(&mut self) -> &mut [u8] {
    self.surface.data_mut()
  }

  // ========================================================================
  // State Management
  // ========================================================================

  /// Pushes a copy of the current drawing state.
  pub fn save(&mut self) {
    self.state_stack.push(self.current_state.clone());
  }

  /// Pops the most recently saved drawing state.
  ///
  /// Does nothing if the stack is empty.
  pub fn restore(&mut self) {
    if let Some(state) = self.state_stack.pop() {
      self.current_state = state;
    }
  }

  /// Returns the current state stack depth
  #[inline]
  pub fn state_depth(&self) -> usize {
    self.state_stack.len()
  }

  pub fn set_matrix(&mut self, matrix: Transform) {
    self.current_state.transform = matrix;
  }

  #[inline]
  pub fn matrix(&self) -> Transform {
    self.current_state.transform
  }

  /// Sets the global opacity (clamped to 0.0..=1.0) applied to every draw call.
  pub fn set_opacity(&mut self, opacity: f32) {
    self.current_state.opacity = opacity.clamp(0.0, 1.0);
  }

  #[inline]
  pub fn opacity(&self) -> f32 {
    self.current_state.opacity
  }

  pub fn set_winding(&mut self, winding: WindRule) {
    self.current_state.fill_rule = winding;
  }

  #[inline]
  pub fn winding(&self) -> WindRule {
    self.current_state.fill_rule
  }

  pub fn set_line_width(&mut self, width: f32) {
    self.current_state.line_width = width;
  }

  #[inline]
  pub fn line_width(&self) -> f32 {
    self.current_state.line_width
  }

  pub fn set_line_cap(&mut self, cap: LineCap) {
    self.current_state.line_cap = cap;
  }

  #[inline]
  pub fn line_cap(&self) -> LineCap {
    self.current_state.line_cap
  }

  pub fn set_line_join(&mut self, join: LineJoin) {
    self.current_state.line_join = join;
  }

  #[inline]
  pub fn line_join(&self) -> LineJoin {
    self.current_state.line_join
  }

  pub fn set_miter_limit(&mut self, limit: f32) {
    self.current_state.miter_limit = limit;
  }

  #[inline]
  pub fn miter_limit(&self) -> f32 {
    self.current_state.miter_limit
  }

  /// Dash patterns are not supported; strokes are always solid.
  pub fn set_dash(&mut self, _array: &[f32], _offset: f32) {}

  // ========================================================================
  // Paint Style
  // ========================================================================

  pub fn set_color(&mut self, color: Color) {
    self.style = Some(PaintStyle::Color(color));
  }

  pub fn set_linear_gradient(
    &mut self,
    values: LinearGradientValues,
    matrix: Transform,
    spread: SpreadMethod,
    stops: &[GradientStop],
  ) {
    self.style = Some(PaintStyle::Gradient(Gradient::linear(
      values, matrix, spread, stops,
    )));
  }

  pub fn set_radial_gradient(
    &mut self,
    values: RadialGradientValues,
    matrix: Transform,
    spread: SpreadMethod,
    stops: &[GradientStop],
  ) {
    self.style = Some(PaintStyle::Gradient(Gradient::radial(
      values, matrix, spread, stops,
    )));
  }

  /// Uses the pixels of `tile` as the paint.
  ///
  /// Owned tiles are shared, not copied; later drawing on `tile` detaches it
  /// from the pattern, which keeps the pixels as they were here.
  ///
  /// # Errors
  ///
  /// Fails only when `tile` is an external canvas whose pixels cannot be copied.
  pub fn set_pattern(&mut self, tile: &Canvas<'_>, matrix: Transform, mode: TileMode) -> Result<()> {
    let pixels = tile.surface.share()?;
    self.style = Some(PaintStyle::Pattern(Pattern::new(pixels, matrix, mode)));
    Ok(())
  }

  /// The active paint style, `None` until one of the style setters is called.
  pub fn paint_style(&self) -> Option<&PaintStyle> {
    self.style.as_ref()
  }

  // ========================================================================
  // Drawing Operations
  // ========================================================================

  /// Fills `path` with the active style using the current fill rule.
  pub fn fill(&mut self, path: &Path) {
    self.save();
    self.draw_path(path, DrawOp::Fill);
    self.restore();
  }

  /// Strokes `path` with the active style and stroke parameters.
  pub fn stroke(&mut self, path: &Path) {
    self.save();
    self.draw_path(path, DrawOp::Stroke);
    self.restore();
  }

  fn draw_path(&mut self, path: &Path, op: DrawOp) {
    let toggles = runtime_toggles();
    let config = toggles.config();

    let Some(style) = self.style.as_ref() else {
      log::debug!("{op:?} skipped: no paint style set");
      return;
    };
    let state = &self.current_state;
    let paint = match op {
      DrawOp::Fill => style.apply_as_fill(state.opacity, config),
      DrawOp::Stroke => style.apply_as_stroke(state.opacity, config),
    };
    let Some(mut paint) = paint else {
      log::debug!("{op:?} skipped: {} paint is not drawable", style.kind_name());
      return;
    };
    paint.blend_mode = to_skia_blend_mode(state.blend_mode);

    let Some(geometry) = to_skia_path(path) else {
      log::debug!("{op:?} skipped: path with {} segments is empty", path.len());
      return;
    };
    if config.log_paint {
      log::debug!(
        "{op:?}: {} segments, {} paint, opacity {}",
        path.len(),
        style.kind_name(),
        state.opacity
      );
    }

    let transform = to_skia_transform(&state.transform);
    let drawn = match op {
      DrawOp::Fill => {
        let fill_rule = to_skia_fill_rule(state.fill_rule);
        self.surface.with_pixmap_mut(|pixmap| {
          pixmap.fill_path(&geometry, &paint, fill_rule, transform, None)
        })
      }
      DrawOp::Stroke => {
        let stroke = state.stroke();
        self.surface.with_pixmap_mut(|pixmap| {
          pixmap.stroke_path(&geometry, &paint, &stroke, transform, None)
        })
      }
    };
    if drawn.is_none() {
      log::debug!("{op:?} skipped: surface unavailable");
    }
  }

  /// Composites all of `source` onto this canvas at the origin.
  ///
  /// The current transform is not applied. `opacity` scales the source alpha.
  pub fn blend(&mut self, source: &Canvas<'_>, mode: BlendMode, opacity: f32) {
    self.save();
    self.current_state.blend_mode = mode;
    self.set_opacity(opacity);

    let paint = PixmapPaint {
      opacity: self.current_state.opacity,
      blend_mode: to_skia_blend_mode(self.current_state.blend_mode),
      quality: FilterQuality::Nearest,
    };
    if runtime_toggles().config().log_paint {
      log::debug!(
        "blend: {}x{} source, {:?}, opacity {}",
        source.width(),
        source.height(),
        mode,
        paint.opacity
      );
    }
    let surface = &mut self.surface;
    let drawn = source.surface.with_pixmap_ref(|src| {
      surface.with_pixmap_mut(|dst| {
        dst.draw_pixmap(0, 0, src, &paint, tiny_skia::Transform::identity(), None)
      })
    });
    if drawn.flatten().is_none() {
      log::debug!("blend skipped: surface unavailable");
    }

    self.restore();
  }

  /// Replaces every pixel with a color packed as `0xRRGGBBAA`.
  pub fn clear(&mut self, value: u32) {
    let [r, g, b, a] = value.to_be_bytes();
    self.clear_rgba(r, g, b, a);
  }

  /// Replaces every pixel with the given straight-alpha color.
  pub fn clear_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
    self.save();
    let color = tiny_skia::Color::from_rgba8(r, g, b, a)
      .premultiply()
      .to_color_u8();
    let bytes = [color.red(), color.green(), color.blue(), color.alpha()];
    for row in self.surface.rows_mut() {
      for px in row.chunks_exact_mut(4) {
        px.copy_from_slice(&bytes);
      }
    }
    self.restore();
  }

  // ========================================================================
  // Pixel Post-processing
  // ========================================================================

  /// Converts the surface to straight alpha in place.
  ///
  /// Each pixel becomes the `u32` `(a << 24) | (b << 16) | (g << 8) | r`,
  /// stored little-endian. Transparent pixels are left as they are. Channel
  /// values are truncated, so drawing the result back loses precision.
  pub fn rgba(&mut self) {
    unpremultiply_rows(self.surface.rows_mut());
  }

  /// Turns the surface into an alpha mask of its luminance.
  ///
  /// Alpha becomes `(2r + 3g + b) / 6` of the stored channels; color channels become zero.
  pub fn luminance(&mut self) {
    luminance_rows(self.surface.rows_mut());
  }
}

impl fmt::Debug for Canvas<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Canvas")
      .field("width", &self.width())
      .field("height", &self.height())
      .field("stride", &self.stride())
      .field("external", &self.is_external())
      .field("style", &self.style.as_ref().map(PaintStyle::kind_name))
      .field("state_depth", &self.state_depth())
      .finish()
  }
}

// ============================================================================
// Tests
// ============================================================================
