//! Vector paths and the segment iteration protocol
//!
//! A [`Path`] is an append-only list of drawing commands. Once handed to a
//! canvas it is only read, through a [`PathIterator`]:
//!
//! ```
//! use svgpaint::path::{Path, PathCommand};
//! use svgpaint::Point;
//!
//! let mut path = Path::new();
//! path.move_to(0.0, 0.0);
//! path.line_to(10.0, 0.0);
//! path.close();
//!
//! let mut it = path.iter();
//! let mut points = [Point::ZERO; 3];
//! let mut commands = Vec::new();
//! while !it.is_done() {
//!   commands.push(it.current_segment(&mut points));
//!   it.advance();
//! }
//! assert_eq!(commands, vec![PathCommand::MoveTo, PathCommand::LineTo, PathCommand::Close]);
//! ```

use crate::geometry::{Point, Rect};

/// Bezier approximation constant for quarter circles.
const KAPPA: f32 = 0.552_284_8;

/// Kind of a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCommand {
  MoveTo,
  LineTo,
  CubicTo,
  Close,
}

impl PathCommand {
  /// Number of points this command carries.
  #[inline]
  pub const fn point_count(self) -> usize {
    match self {
      PathCommand::MoveTo | PathCommand::LineTo => 1,
      PathCommand::CubicTo => 3,
      PathCommand::Close => 0,
    }
  }
}

/// A sequence of move/line/cubic/close commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
  commands: Vec<PathCommand>,
  points: Vec<Point>,
  start: Point,
}

impl Path {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn move_to(&mut self, x: f32, y: f32) {
    self.commands.push(PathCommand::MoveTo);
    self.points.push(Point::new(x, y));
    self.start = Point::new(x, y);
  }

  pub fn line_to(&mut self, x: f32, y: f32) {
    self.commands.push(PathCommand::LineTo);
    self.points.push(Point::new(x, y));
  }

  pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
    self.commands.push(PathCommand::CubicTo);
    self.points.push(Point::new(x1, y1));
    self.points.push(Point::new(x2, y2));
    self.points.push(Point::new(x3, y3));
  }

  /// Appends a quadratic curve, stored as the equivalent cubic.
  pub fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
    let p0 = self.current_point();
    let c = Point::new(x1, y1);
    let p2 = Point::new(x2, y2);
    let c1 = p0.lerp(c, 2.0 / 3.0);
    let c2 = p2.lerp(c, 2.0 / 3.0);
    self.cubic_to(c1.x, c1.y, c2.x, c2.y, p2.x, p2.y);
  }

  pub fn close(&mut self) {
    if matches!(self.commands.last(), None | Some(PathCommand::Close)) {
      return;
    }
    self.commands.push(PathCommand::Close);
  }

  /// Appends a closed axis-aligned rectangle.
  pub fn rect(&mut self, rect: Rect) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
      return;
    }
    self.move_to(rect.x, rect.y);
    self.line_to(rect.max_x(), rect.y);
    self.line_to(rect.max_x(), rect.max_y());
    self.line_to(rect.x, rect.max_y());
    self.close();
  }

  /// Appends a closed ellipse made of four cubic arcs.
  pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
    if rx <= 0.0 || ry <= 0.0 {
      return;
    }
    let (left, top, right, bottom) = (cx - rx, cy - ry, cx + rx, cy + ry);
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    self.move_to(cx, top);
    self.cubic_to(cx + kx, top, right, cy - ky, right, cy);
    self.cubic_to(right, cy + ky, cx + kx, bottom, cx, bottom);
    self.cubic_to(cx - kx, bottom, left, cy + ky, left, cy);
    self.cubic_to(left, cy - ky, cx - kx, top, cx, top);
    self.close();
  }

  pub fn circle(&mut self, cx: f32, cy: f32, r: f32) {
    self.ellipse(cx, cy, r, r);
  }

  /// The end point of the last segment, or the start of the current subpath after a close.
  pub fn current_point(&self) -> Point {
    match self.commands.last() {
      None => Point::ZERO,
      Some(PathCommand::Close) => self.start,
      Some(_) => self.points.last().copied().unwrap_or(Point::ZERO),
    }
  }

  /// Bounds of all stored points, control points included.
  pub fn bounding_box(&self) -> Option<Rect> {
    let first = self.points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &self.points[1..] {
      min_x = min_x.min(p.x);
      min_y = min_y.min(p.y);
      max_x = max_x.max(p.x);
      max_y = max_y.max(p.y);
    }
    Some(Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y))
  }

  pub fn is_empty(&self) -> bool {
    self.commands.is_empty()
  }

  /// Number of segments, closes included.
  pub fn len(&self) -> usize {
    self.commands.len()
  }

  pub fn commands(&self) -> &[PathCommand] {
    &self.commands
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Returns a fresh iterator positioned at the first segment.
  pub fn iter(&self) -> PathIterator<'_> {
    PathIterator::new(self)
  }
}

/// Cursor over the segments of a [`Path`].
///
/// Check [`is_done`](Self::is_done) before every
/// [`current_segment`](Self::current_segment)/[`advance`](Self::advance) pair.
/// Each iterator makes a single pass; create another one to walk the path again.
#[derive(Debug, Clone)]
pub struct PathIterator<'a> {
  commands: &'a [PathCommand],
  points: &'a [Point],
  index: usize,
  point_index: usize,
}

impl<'a> PathIterator<'a> {
  pub fn new(path: &'a Path) -> Self {
    Self {
      commands: &path.commands,
      points: &path.points,
      index: 0,
      point_index: 0,
    }
  }

  #[inline]
  pub fn is_done(&self) -> bool {
    self.index >= self.commands.len()
  }

  /// Copies the points of the current segment into `points` and returns its kind.
  ///
  /// Does not move the cursor. Panics when called after the iterator is done.
  pub fn current_segment(&self, points: &mut [Point; 3]) -> PathCommand {
    let command = self.commands[self.index];
    let count = command.point_count();
    points[..count].copy_from_slice(&self.points[self.point_index..self.point_index + count]);
    command
  }

  /// Moves to the next segment.
  pub fn advance(&mut self) {
    if let Some(command) = self.commands.get(self.index) {
      self.point_index += command.point_count();
      self.index += 1;
    }
  }
}
