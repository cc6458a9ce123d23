//! Helpers shared by the paint integration tests.

use image::{Rgba, RgbaImage};
use svgpaint::{Canvas, Path, Rect};

/// Routes `log` output through env_logger; `RUST_LOG=debug` shows skipped draws.
pub fn init_logging() {
  let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rect_path(x: f32, y: f32, width: f32, height: f32) -> Path {
  let mut path = Path::new();
  path.rect(Rect::from_xywh(x, y, width, height));
  path
}

/// Stored (premultiplied unless a pass ran) bytes of one pixel.
pub fn pixel(canvas: &Canvas<'_>, x: u32, y: u32) -> [u8; 4] {
  let idx = y as usize * canvas.stride() + x as usize * 4;
  let data = canvas.data();
  [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
}

/// Runs the straight-alpha pass and wraps the result as an image.
pub fn to_rgba_image(canvas: &mut Canvas<'_>) -> RgbaImage {
  canvas.rgba();
  let (width, height) = (canvas.width(), canvas.height());
  let row_bytes = width as usize * 4;
  let mut packed = Vec::with_capacity(row_bytes * height as usize);
  for row in canvas.data().chunks(canvas.stride()) {
    packed.extend_from_slice(&row[..row_bytes]);
  }
  RgbaImage::from_raw(width, height, packed).expect("buffer matches dimensions")
}

pub fn assert_close(actual: Rgba<u8>, expected: [u8; 4], tolerance: u8) {
  for (channel, (a, e)) in actual.0.iter().zip(expected.iter()).enumerate() {
    assert!(
      a.abs_diff(*e) <= tolerance,
      "channel {channel}: got {:?}, expected {:?} (tolerance {tolerance})",
      actual.0,
      expected
    );
  }
}
