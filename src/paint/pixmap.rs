use crate::debug::runtime::runtime_toggles;
use crate::error::RenderError;
use tiny_skia::{IntSize, Pixmap};

pub(crate) const BYTES_PER_PIXEL: u64 = 4;

fn guard_dimensions(
  width: u32,
  height: u32,
  limit: u64,
  context: &str,
) -> Result<usize, RenderError> {
  if width == 0 || height == 0 {
    return Err(RenderError::InvalidParameters {
      message: format!("{context}: pixmap size is zero ({width}x{height})"),
    });
  }

  let pixels = (width as u64)
    .checked_mul(height as u64)
    .ok_or(RenderError::InvalidParameters {
      message: format!("{context}: pixmap dimensions overflow ({width}x{height})"),
    })?;
  let bytes = pixels
    .checked_mul(BYTES_PER_PIXEL)
    .ok_or(RenderError::InvalidParameters {
      message: format!("{context}: pixmap byte size overflow ({width}x{height})"),
    })?;
  if bytes > limit {
    return Err(RenderError::InvalidParameters {
      message: format!(
        "{context}: pixmap {}x{} would allocate {} bytes (limit {})",
        width, height, bytes, limit
      ),
    });
  }

  usize::try_from(bytes).map_err(|_| RenderError::InvalidParameters {
    message: format!("{context}: allocation size {bytes} does not fit in usize"),
  })
}

fn allocate_pixmap_bytes(bytes: usize) -> Result<Vec<u8>, RenderError> {
  let mut buffer = Vec::new();
  if let Err(err) = buffer.try_reserve_exact(bytes) {
    return Err(RenderError::InvalidParameters {
      message: format!("pixmap allocation failed: {err}"),
    });
  }
  buffer.resize(bytes, 0);
  Ok(buffer)
}

/// Allocates a zeroed pixmap, refusing sizes above `limit` bytes.
pub(crate) fn new_pixmap_with_limit(
  width: u32,
  height: u32,
  limit: u64,
  context: &str,
) -> Result<Pixmap, RenderError> {
  let bytes = guard_dimensions(width, height, limit, context)?;
  let buffer = allocate_pixmap_bytes(bytes)?;
  let size = IntSize::from_wh(width, height).ok_or(RenderError::InvalidParameters {
    message: format!(
      "{context}: pixmap dimensions out of range ({}x{})",
      width, height
    ),
  })?;
  Pixmap::from_vec(buffer, size).ok_or(RenderError::InvalidParameters {
    message: format!(
      "{context}: pixmap creation failed for {}x{} ({} bytes)",
      width, height, bytes
    ),
  })
}

/// Allocates a zeroed pixmap under the configured `SVGPAINT_MAX_PIXMAP_BYTES` limit.
#[track_caller]
pub(crate) fn new_pixmap_with_context(
  width: u32,
  height: u32,
  context: &str,
) -> Result<Pixmap, RenderError> {
  let caller = std::panic::Location::caller();
  let context = format!("{context} (at {}:{})", caller.file(), caller.line());
  let limit = runtime_toggles().config().max_pixmap_bytes;
  new_pixmap_with_limit(width, height, limit, &context)
}
