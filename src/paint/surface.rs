//! Pixel storage behind a canvas.
//!
//! A surface is either owned or a view over caller memory. Owned pixels sit
//! behind an `Arc` so pattern styles can share them; writes go through
//! `Arc::make_mut`, which detaches the writer from any pattern still holding
//! the old pixels. Views only borrow their bytes and never free them.

use super::pixmap::{new_pixmap_with_context, BYTES_PER_PIXEL};
use crate::error::RenderError;
use std::sync::Arc;
use tiny_skia::{Pixmap, PixmapMut, PixmapRef};

const BPP: usize = BYTES_PER_PIXEL as usize;

/// Caller-owned pixel rows, possibly padded past `width * 4` bytes.
pub(crate) struct ExternalSurface<'a> {
  data: &'a mut [u8],
  width: u32,
  height: u32,
  stride: usize,
}

impl<'a> ExternalSurface<'a> {
  pub(crate) fn new(
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: u32,
  ) -> Result<Self, RenderError> {
    if width == 0 || height == 0 {
      return Err(RenderError::InvalidSurface {
        message: format!("surface size is zero ({width}x{height})"),
      });
    }
    let row_bytes = (width as usize)
      .checked_mul(BPP)
      .ok_or(RenderError::InvalidSurface {
        message: format!("row size overflows for width {width}"),
      })?;
    let stride = stride as usize;
    if stride < row_bytes {
      return Err(RenderError::InvalidSurface {
        message: format!("stride {stride} is smaller than row size {row_bytes}"),
      });
    }
    let required = stride
      .checked_mul(height as usize - 1)
      .and_then(|bytes| bytes.checked_add(row_bytes))
      .ok_or(RenderError::InvalidSurface {
        message: format!("surface {width}x{height} with stride {stride} overflows"),
      })?;
    if data.len() < required {
      return Err(RenderError::InvalidSurface {
        message: format!(
          "buffer holds {} bytes, surface {}x{} with stride {} needs {}",
          data.len(),
          width,
          height,
          stride,
          required
        ),
      });
    }

    Ok(Self {
      data: &mut data[..required],
      width,
      height,
      stride,
    })
  }

  #[inline]
  fn row_bytes(&self) -> usize {
    self.width as usize * BPP
  }

  #[inline]
  fn is_packed(&self) -> bool {
    self.stride == self.row_bytes()
  }

  fn copy_rows_to(&self, pixmap: &mut Pixmap) {
    let row_bytes = self.row_bytes();
    for (dst, src) in pixmap
      .data_mut()
      .chunks_exact_mut(row_bytes)
      .zip(self.data.chunks(self.stride))
    {
      dst.copy_from_slice(&src[..row_bytes]);
    }
  }

  fn copy_rows_from(&mut self, pixmap: &Pixmap) {
    let row_bytes = self.row_bytes();
    for (dst, src) in self
      .data
      .chunks_mut(self.stride)
      .zip(pixmap.data().chunks_exact(row_bytes))
    {
      dst[..row_bytes].copy_from_slice(src);
    }
  }

  fn snapshot(&self) -> Result<Pixmap, RenderError> {
    let mut pixmap = new_pixmap_with_context(self.width, self.height, "external surface copy")?;
    self.copy_rows_to(&mut pixmap);
    Ok(pixmap)
  }
}

pub(crate) enum Surface<'a> {
  Owned(Arc<Pixmap>),
  External(ExternalSurface<'a>),
}

impl<'a> Surface<'a> {
  pub(crate) fn width(&self) -> u32 {
    match self {
      Surface::Owned(pixmap) => pixmap.width(),
      Surface::External(view) => view.width,
    }
  }

  pub(crate) fn height(&self) -> u32 {
    match self {
      Surface::Owned(pixmap) => pixmap.height(),
      Surface::External(view) => view.height,
    }
  }

  /// Distance in bytes between the starts of two consecutive rows.
  pub(crate) fn stride(&self) -> usize {
    match self {
      Surface::Owned(pixmap) => pixmap.width() as usize * BPP,
      Surface::External(view) => view.stride,
    }
  }

  pub(crate) fn is_external(&self) -> bool {
    matches!(self, Surface::External(_))
  }

  pub(crate) fn data(&self) -> &[u8] {
    match self {
      Surface::Owned(pixmap) => pixmap.data(),
      Surface::External(view) => &*view.data,
    }
  }

  pub(crate) fn data_mut(&mut self) -> &mut [u8] {
    match self {
      Surface::Owned(pixmap) => Arc::make_mut(pixmap).data_mut(),
      Surface::External(view) => &mut *view.data,
    }
  }

  /// Mutable pixel rows, each trimmed to `width * 4` bytes.
  pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
    let row_bytes = self.width() as usize * BPP;
    let stride = self.stride();
    self
      .data_mut()
      .chunks_mut(stride)
      .map(move |row| &mut row[..row_bytes])
  }

  /// Runs `f` with a tiny-skia view of the pixels.
  ///
  /// Padded external rows are drawn through a packed scratch pixmap and copied
  /// back afterwards. Returns `None` when no view could be produced.
  pub(crate) fn with_pixmap_mut<R>(&mut self, f: impl FnOnce(&mut PixmapMut<'_>) -> R) -> Option<R> {
    match self {
      Surface::Owned(pixmap) => Some(f(&mut Arc::make_mut(pixmap).as_mut())),
      Surface::External(view) if view.is_packed() => {
        let (width, height) = (view.width, view.height);
        let mut pixmap = PixmapMut::from_bytes(&mut *view.data, width, height)?;
        Some(f(&mut pixmap))
      }
      Surface::External(view) => {
        let mut scratch = match view.snapshot() {
          Ok(pixmap) => pixmap,
          Err(err) => {
            log::debug!("skipping draw on padded surface: {err}");
            return None;
          }
        };
        let result = f(&mut scratch.as_mut());
        view.copy_rows_from(&scratch);
        Some(result)
      }
    }
  }

  /// Runs `f` with a read-only tiny-skia view of the pixels.
  pub(crate) fn with_pixmap_ref<R>(&self, f: impl FnOnce(PixmapRef<'_>) -> R) -> Option<R> {
    match self {
      Surface::Owned(pixmap) => Some(f(Pixmap::as_ref(pixmap))),
      Surface::External(view) if view.is_packed() => {
        PixmapRef::from_bytes(&*view.data, view.width, view.height).map(f)
      }
      Surface::External(view) => match view.snapshot() {
        Ok(pixmap) => Some(f(pixmap.as_ref())),
        Err(err) => {
          log::debug!("cannot read padded surface: {err}");
          None
        }
      },
    }
  }

  /// A shared handle to the current pixels, for use as a pattern tile.
  ///
  /// Owned surfaces share their buffer; external views are copied.
  pub(crate) fn share(&self) -> Result<Arc<Pixmap>, RenderError> {
    match self {
      Surface::Owned(pixmap) => Ok(Arc::clone(pixmap)),
      Surface::External(view) => view.snapshot().map(Arc::new),
    }
  }
}
