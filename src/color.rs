//! Normalized RGBA colors
//!
//! Channels are straight (not premultiplied) values in `[0, 1]`. Values
//! outside that range are not validated; conversion to 8-bit saturates.

/// A straight-alpha color with normalized channels
///
/// # Examples
///
/// ```
/// use svgpaint::Color;
///
/// let c = Color::new(1.0, 0.5, 0.0, 1.0);
/// assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
  pub a: f32,
}

impl Color {
  pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
  pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
  pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

  pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
    Self { r, g, b, a }
  }

  /// Opaque color from 8-bit channels.
  pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
    Self::rgba8(r, g, b, 255)
  }

  pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self::new(
      r as f32 / 255.0,
      g as f32 / 255.0,
      b as f32 / 255.0,
      a as f32 / 255.0,
    )
  }

  /// Converts to 8-bit channels using `round(c * 255)`.
  pub fn to_rgba8(&self) -> [u8; 4] {
    [
      channel_to_u8(self.r),
      channel_to_u8(self.g),
      channel_to_u8(self.b),
      channel_to_u8(self.a),
    ]
  }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
  (value * 255.0).round() as u8
}
