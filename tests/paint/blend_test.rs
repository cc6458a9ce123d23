//! Whole-canvas compositing and luminance masks.

use super::util::{assert_close, pixel, rect_path, to_rgba_image};
use svgpaint::{BlendMode, Canvas, Color, Transform};

fn half_opaque_mask(width: u32, height: u32) -> Canvas<'static> {
  let mut mask = Canvas::new(width, height).unwrap();
  mask.set_color(Color::WHITE);
  mask.fill(&rect_path(0.0, 0.0, width as f32 / 2.0, height as f32));
  mask
}

#[test]
fn test_src_over_composites_source() {
  let mut dst = Canvas::new(10, 10).unwrap();
  dst.clear(0xFF0000FF);

  let mut src = Canvas::new(10, 10).unwrap();
  src.set_color(Color::new(0.0, 0.0, 1.0, 1.0));
  src.fill(&rect_path(0.0, 0.0, 5.0, 10.0));

  dst.blend(&src, BlendMode::SrcOver, 1.0);
  assert_eq!(pixel(&dst, 2, 5), [0, 0, 255, 255]);
  assert_eq!(pixel(&dst, 7, 5), [255, 0, 0, 255]);
}

#[test]
fn test_src_over_with_opacity() {
  let mut dst = Canvas::new(4, 4).unwrap();
  let mut src = Canvas::new(4, 4).unwrap();
  src.clear(0x00FF00FF);

  dst.blend(&src, BlendMode::SrcOver, 0.5);
  let image = to_rgba_image(&mut dst);
  assert_close(*image.get_pixel(1, 1), [0, 255, 0, 128], 2);
}

#[test]
fn test_dst_in_keeps_pixels_under_mask() {
  let mut dst = Canvas::new(10, 10).unwrap();
  dst.clear(0xFF0000FF);

  let mask = half_opaque_mask(10, 10);
  dst.blend(&mask, BlendMode::DstIn, 1.0);

  assert_eq!(pixel(&dst, 2, 5), [255, 0, 0, 255]);
  assert_eq!(pixel(&dst, 7, 5), [0, 0, 0, 0]);
}

#[test]
fn test_dst_in_differs_from_src_over() {
  let mask = half_opaque_mask(10, 10);

  let mut over = Canvas::new(10, 10).unwrap();
  over.clear(0xFF0000FF);
  over.blend(&mask, BlendMode::SrcOver, 1.0);

  let mut masked = Canvas::new(10, 10).unwrap();
  masked.clear(0xFF0000FF);
  masked.blend(&mask, BlendMode::DstIn, 1.0);

  assert_eq!(pixel(&over, 2, 5), [255, 255, 255, 255]);
  assert_eq!(pixel(&masked, 2, 5), [255, 0, 0, 255]);
  assert_eq!(pixel(&over, 7, 5), [255, 0, 0, 255]);
  assert_eq!(pixel(&masked, 7, 5), [0, 0, 0, 0]);
}

#[test]
fn test_blend_ignores_current_matrix() {
  let mut dst = Canvas::new(10, 10).unwrap();
  dst.set_matrix(Transform::translate(5.0, 5.0));

  let mut src = Canvas::new(10, 10).unwrap();
  src.clear(0x000000FF);

  dst.blend(&src, BlendMode::SrcOver, 1.0);
  assert_eq!(pixel(&dst, 0, 0), [0, 0, 0, 255]);
  assert_eq!(dst.matrix(), Transform::translate(5.0, 5.0));
}

#[test]
fn test_luminance_mask_workflow() {
  // White content becomes an opaque mask, black content a transparent one.
  let mut mask = Canvas::new(10, 10).unwrap();
  mask.clear(0x000000FF);
  mask.set_color(Color::WHITE);
  mask.fill(&rect_path(0.0, 0.0, 5.0, 10.0));
  mask.luminance();
  assert_eq!(pixel(&mask, 2, 5), [0, 0, 0, 255]);
  assert_eq!(pixel(&mask, 7, 5), [0, 0, 0, 0]);

  let mut content = Canvas::new(10, 10).unwrap();
  content.clear(0x0000FFFF);
  content.blend(&mask, BlendMode::DstIn, 1.0);
  assert_eq!(pixel(&content, 2, 5), [0, 0, 255, 255]);
  assert_eq!(pixel(&content, 7, 5), [0, 0, 0, 0]);
}

#[test]
fn test_smaller_source_covers_top_left() {
  let mut dst = Canvas::new(10, 10).unwrap();
  let mut src = Canvas::new(4, 4).unwrap();
  src.clear(0xFFFFFFFF);

  dst.blend(&src, BlendMode::SrcOver, 1.0);
  assert_eq!(pixel(&dst, 3, 3), [255, 255, 255, 255]);
  assert_eq!(pixel(&dst, 4, 4), [0, 0, 0, 0]);
}
