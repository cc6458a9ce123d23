//! Paint style selection as seen through the canvas.

use svgpaint::paint::GradientGeometry;
use svgpaint::{
  Canvas, Color, GradientStop, LinearGradientValues, PaintStyle, RadialGradientValues,
  SpreadMethod, TileMode, Transform,
};

fn stops() -> [GradientStop; 2] {
  [
    GradientStop::new(0.0, Color::rgb8(255, 0, 0)),
    GradientStop::new(1.0, Color::rgb8(0, 0, 255)),
  ]
}

#[test]
fn test_style_starts_unset() {
  let canvas = Canvas::new(2, 2).unwrap();
  assert!(canvas.paint_style().is_none());
}

#[test]
fn test_color_style() {
  let mut canvas = Canvas::new(2, 2).unwrap();
  canvas.set_color(Color::rgba8(1, 2, 3, 4));
  match canvas.paint_style() {
    Some(PaintStyle::Color(color)) => assert_eq!(color.to_rgba8(), [1, 2, 3, 4]),
    other => panic!("expected color, got {other:?}"),
  }
}

#[test]
fn test_linear_gradient_style_keeps_inputs() {
  let mut canvas = Canvas::new(2, 2).unwrap();
  let values = LinearGradientValues::new(1.0, 2.0, 3.0, 4.0);
  let matrix = Transform::rotate(45.0);
  canvas.set_linear_gradient(values, matrix, SpreadMethod::Repeat, &stops());

  let Some(PaintStyle::Gradient(gradient)) = canvas.paint_style() else {
    panic!("expected gradient");
  };
  assert_eq!(gradient.geometry(), &GradientGeometry::Linear(values));
  assert_eq!(gradient.transform(), matrix);
  assert_eq!(gradient.spread(), SpreadMethod::Repeat);
  assert_eq!(gradient.stops(), &stops());
  assert!(gradient.is_drawable());
}

#[test]
fn test_radial_gradient_style_with_focal_point() {
  let mut canvas = Canvas::new(2, 2).unwrap();
  let values = RadialGradientValues::new(10.0, 10.0, 8.0, 12.0, 9.0);
  canvas.set_radial_gradient(values, Transform::IDENTITY, SpreadMethod::Reflect, &stops());

  let Some(PaintStyle::Gradient(gradient)) = canvas.paint_style() else {
    panic!("expected gradient");
  };
  assert_eq!(gradient.geometry(), &GradientGeometry::Radial(values));
  assert!(gradient.is_drawable());
}

#[test]
fn test_pattern_style_captures_tile() {
  let mut tile = Canvas::new(3, 2).unwrap();
  tile.clear(0x11223344);
  let mut canvas = Canvas::new(2, 2).unwrap();
  canvas
    .set_pattern(&tile, Transform::scale(2.0, 2.0), TileMode::Pad)
    .unwrap();

  let Some(PaintStyle::Pattern(pattern)) = canvas.paint_style() else {
    panic!("expected pattern");
  };
  assert_eq!(pattern.tile_width(), 3);
  assert_eq!(pattern.tile_height(), 2);
  assert_eq!(pattern.tile_mode(), TileMode::Pad);
  assert_eq!(pattern.transform(), Transform::scale(2.0, 2.0));
  assert_eq!(pattern.tile_data(), tile.data());
}

#[test]
fn test_new_style_replaces_previous() {
  let mut canvas = Canvas::new(2, 2).unwrap();
  let tile = Canvas::new(1, 1).unwrap();
  canvas
    .set_pattern(&tile, Transform::IDENTITY, TileMode::Tiled)
    .unwrap();
  canvas.set_color(Color::WHITE);
  assert!(matches!(canvas.paint_style(), Some(PaintStyle::Color(_))));
}
