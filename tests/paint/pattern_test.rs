//! Pattern styles and tile sharing.

use super::util::{assert_close, pixel, rect_path, to_rgba_image};
use svgpaint::{Canvas, PaintStyle, TileMode, Transform};

fn solid_tile(value: u32) -> Canvas<'static> {
  let mut tile = Canvas::new(2, 2).unwrap();
  tile.clear(value);
  tile
}

fn tile_ref_count(canvas: &Canvas<'_>) -> usize {
  match canvas.paint_style() {
    Some(PaintStyle::Pattern(pattern)) => pattern.tile_ref_count(),
    other => panic!("expected pattern style, got {other:?}"),
  }
}

#[test]
fn test_pattern_fills_with_tile() {
  let tile = solid_tile(0xFF0000FF);
  let mut canvas = Canvas::new(10, 10).unwrap();
  canvas
    .set_pattern(&tile, Transform::IDENTITY, TileMode::Tiled)
    .unwrap();
  canvas.fill(&rect_path(0.0, 0.0, 10.0, 10.0));

  let image = to_rgba_image(&mut canvas);
  for (x, y) in [(0, 0), (5, 5), (9, 9)] {
    assert_close(*image.get_pixel(x, y), [255, 0, 0, 255], 1);
  }
}

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

/// 2x2 tile: red left column, blue right column.
fn striped_tile() -> Canvas<'static> {
  let mut tile = Canvas::new(2, 2).unwrap();
  for px in tile.data_mut().chunks_exact_mut(8) {
    px[..4].copy_from_slice(&RED);
    px[4..].copy_from_slice(&BLUE);
  }
  tile
}

fn fill_with_pattern(tile: &Canvas<'_>, mode: TileMode) -> Canvas<'static> {
  let mut canvas = Canvas::new(10, 10).unwrap();
  canvas.set_pattern(tile, Transform::IDENTITY, mode).unwrap();
  canvas.fill(&rect_path(0.0, 0.0, 10.0, 10.0));
  canvas
}

#[test]
fn test_pad_mode_extends_edge_pixels() {
  let tile = striped_tile();
  let canvas = fill_with_pattern(&tile, TileMode::Pad);

  assert_close(image::Rgba(pixel(&canvas, 0, 0)), RED, 1);
  // Everything right of the tile takes the right edge column.
  assert_close(image::Rgba(pixel(&canvas, 8, 8)), BLUE, 1);
  assert_close(image::Rgba(pixel(&canvas, 5, 2)), BLUE, 1);
}

#[test]
fn test_tiled_mode_repeats_tile() {
  let tile = striped_tile();
  let canvas = fill_with_pattern(&tile, TileMode::Tiled);

  assert_close(image::Rgba(pixel(&canvas, 8, 8)), RED, 1);
  assert_close(image::Rgba(pixel(&canvas, 9, 8)), BLUE, 1);
  assert_close(image::Rgba(pixel(&canvas, 4, 2)), RED, 1);
  assert_close(image::Rgba(pixel(&canvas, 5, 2)), BLUE, 1);
}

#[test]
fn test_pattern_shares_tile_until_written() {
  let mut tile = solid_tile(0xFF0000FF);
  let mut canvas = Canvas::new(10, 10).unwrap();
  canvas
    .set_pattern(&tile, Transform::IDENTITY, TileMode::Tiled)
    .unwrap();
  assert_eq!(tile_ref_count(&canvas), 2);

  // Drawing on the tile afterwards must not leak into the pattern.
  tile.clear(0x0000FFFF);
  assert_eq!(tile_ref_count(&canvas), 1);
  assert_eq!(pixel(&tile, 0, 0), [0, 0, 255, 255]);

  canvas.fill(&rect_path(0.0, 0.0, 10.0, 10.0));
  let image = to_rgba_image(&mut canvas);
  assert_close(*image.get_pixel(4, 4), [255, 0, 0, 255], 1);
}

#[test]
fn test_pattern_from_external_canvas_is_a_snapshot() {
  let mut buffer = vec![0u8; 2 * 2 * 4];
  let mut canvas = Canvas::new(6, 6).unwrap();
  {
    let mut tile = Canvas::from_external(&mut buffer, 2, 2, 8).unwrap();
    tile.clear(0xFFFFFFFF);
    canvas
      .set_pattern(&tile, Transform::IDENTITY, TileMode::Tiled)
      .unwrap();
  }
  // The caller memory is free again and the pattern still holds the pixels.
  buffer.fill(0);
  canvas.fill(&rect_path(0.0, 0.0, 6.0, 6.0));
  assert_close(
    image::Rgba(pixel(&canvas, 3, 3)),
    [255, 255, 255, 255],
    1,
  );
}

#[test]
fn test_pattern_transform_offsets_tile() {
  let mut tile = Canvas::new(4, 4).unwrap();
  tile.clear(0x000000FF);
  let mut canvas = Canvas::new(8, 8).unwrap();
  canvas
    .set_pattern(&tile, Transform::translate(4.0, 0.0), TileMode::Pad)
    .unwrap();
  canvas.fill(&rect_path(0.0, 0.0, 8.0, 4.0));

  // Pad extends the opaque tile everywhere.
  assert_eq!(pixel(&canvas, 1, 1)[3], 255);
  assert_eq!(pixel(&canvas, 6, 1)[3], 255);
  assert_eq!(pixel(&canvas, 6, 6)[3], 0);
}
