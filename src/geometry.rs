//! Core geometry types for painting
//!
//! The coordinate system has its origin at the top-left corner of the surface:
//! - Positive X extends to the right
//! - Positive Y extends downward

use std::fmt;

/// A 2D point in user space
///
/// # Examples
///
/// ```
/// use svgpaint::Point;
///
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::ZERO;
///
/// assert_eq!(p1.x, 10.0);
/// assert_eq!(p1.y, 20.0);
/// assert_eq!(p2, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  /// X coordinate (horizontal position, increases to the right)
  pub x: f32,
  /// Y coordinate (vertical position, increases downward)
  pub y: f32,
}

impl Point {
  /// The zero point at the origin (0, 0)
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Linear interpolation between `self` and `other`
  pub fn lerp(self, other: Point, t: f32) -> Point {
    Point::new(
      self.x + (other.x - self.x) * t,
      self.y + (other.y - self.y) * t,
    )
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
}

impl Rect {
  pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  #[inline]
  pub fn max_x(&self) -> f32 {
    self.x + self.width
  }

  #[inline]
  pub fn max_y(&self) -> f32 {
    self.y + self.height
  }
}

/// A 2D affine transform stored as six coefficients.
///
/// Maps a point with
///
/// ```text
/// x' = m00 * x + m01 * y + m02
/// y' = m10 * x + m11 * y + m12
/// ```
///
/// Inversion and decomposition are left to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
  pub m00: f32,
  pub m10: f32,
  pub m01: f32,
  pub m11: f32,
  pub m02: f32,
  pub m12: f32,
}

impl Default for Transform {
  fn default() -> Self {
    Self::IDENTITY
  }
}

impl Transform {
  pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

  /// Creates a transform from coefficients in `m00 m10 m01 m11 m02 m12` order.
  pub const fn new(m00: f32, m10: f32, m01: f32, m11: f32, m02: f32, m12: f32) -> Self {
    Self {
      m00,
      m10,
      m01,
      m11,
      m02,
      m12,
    }
  }

  pub const fn translate(tx: f32, ty: f32) -> Self {
    Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
  }

  pub const fn scale(sx: f32, sy: f32) -> Self {
    Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
  }

  pub fn rotate(degrees: f32) -> Self {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Self::new(cos, sin, -sin, cos, 0.0, 0.0)
  }

  pub fn is_identity(&self) -> bool {
    *self == Self::IDENTITY
  }

  /// Returns `self * other`: `other` is applied first, then `self`.
  pub fn multiply(&self, other: &Transform) -> Transform {
    Transform::new(
      self.m00 * other.m00 + self.m01 * other.m10,
      self.m10 * other.m00 + self.m11 * other.m10,
      self.m00 * other.m01 + self.m01 * other.m11,
      self.m10 * other.m01 + self.m11 * other.m11,
      self.m00 * other.m02 + self.m01 * other.m12 + self.m02,
      self.m10 * other.m02 + self.m11 * other.m12 + self.m12,
    )
  }

  pub fn map_point(&self, p: Point) -> Point {
    Point::new(
      self.m00 * p.x + self.m01 * p.y + self.m02,
      self.m10 * p.x + self.m11 * p.y + self.m12,
    )
  }
}
