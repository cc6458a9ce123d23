//! In-place pixel passes run after rendering.
//!
//! Input pixels are in tiny-skia's native layout: premultiplied, one byte per
//! channel in `R, G, B, A` order. All arithmetic is integer and truncating.

/// Un-premultiplies one pixel and packs it as the `u32`
/// `(a << 24) | (b << 16) | (g << 8) | r`, stored little-endian.
///
/// Fully transparent pixels are returned unchanged; their color is lost.
#[inline]
pub fn unpremultiply_pixel(px: [u8; 4]) -> [u8; 4] {
  let [r, g, b, a] = px.map(u32::from);
  if a == 0 {
    return px;
  }

  let (r, g, b) = if a == 255 {
    (r, g, b)
  } else {
    ((r * 255) / a, (g * 255) / a, (b * 255) / a)
  };

  // Premultiplied input keeps c <= a; the clamp only matters for malformed pixels.
  let (r, g, b) = (r.min(255), g.min(255), b.min(255));
  ((a << 24) | (b << 16) | (g << 8) | r).to_le_bytes()
}

/// Replaces a pixel with an alpha-only pixel carrying `(2r + 3g + b) / 6`.
#[inline]
pub fn luminance_pixel(px: [u8; 4]) -> [u8; 4] {
  let [r, g, b, _] = px.map(u32::from);
  let luma = (2 * r + 3 * g + b) / 6;
  [0, 0, 0, luma as u8]
}

fn map_rows<'r>(rows: impl Iterator<Item = &'r mut [u8]>, f: fn([u8; 4]) -> [u8; 4]) {
  for row in rows {
    for px in row.chunks_exact_mut(4) {
      let out = f([px[0], px[1], px[2], px[3]]);
      px.copy_from_slice(&out);
    }
  }
}

/// Runs [`unpremultiply_pixel`] over every pixel of the given rows.
pub(crate) fn unpremultiply_rows<'r>(rows: impl Iterator<Item = &'r mut [u8]>) {
  map_rows(rows, unpremultiply_pixel);
}

/// Runs [`luminance_pixel`] over every pixel of the given rows.
pub(crate) fn luminance_rows<'r>(rows: impl Iterator<Item = &'r mut [u8]>) {
  map_rows(rows, luminance_pixel);
}
