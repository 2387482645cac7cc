//! Pixel grids used by the matcher.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. Windows returned by
//! [`crate::patch::window`] share the backing slice and keep the parent stride.
//!
//! Coordinates are `(row, col)` with the origin at the top-left pixel.

use crate::util::{NccMatchError, NccMatchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Pixel intensity types accepted by the NCC kernels.
///
/// Values are widened to `f64` before any accumulation.
pub trait Intensity: Copy + Into<f64> + Send + Sync {}

impl<T> Intensity for T where T: Copy + Into<f64> + Send + Sync {}

/// Borrowed 2D view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> NccMatchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> NccMatchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(NccMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the number of pixels covered by the view (`width * height`).
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always `false`: views are at least 1x1.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx)
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.height {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Iterates over rows top to bottom, each trimmed to `width`.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let width = self.width;
        let stride = self.stride;
        let data = self.data;
        (0..self.height).map(move |r| &data[r * stride..r * stride + width])
    }

    /// Returns a zero-copy view of `height` rows and `width` columns starting
    /// at `(row, col)`. Callers are expected to have validated the rectangle;
    /// see [`crate::patch::window`] for the checked entry point.
    pub(crate) fn sub_view(
        &self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> NccMatchResult<ImageView<'a, T>> {
        let start = row
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(col))
            .ok_or(NccMatchError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(NccMatchError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;
        ImageView::new(data, width, height, self.stride)
    }
}

impl<'a, T: Copy> ImageView<'a, T> {
    /// Copies the visible pixels into a contiguous owned image.
    pub fn to_owned_image(&self) -> OwnedImage<T> {
        let mut data = Vec::with_capacity(self.len());
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        OwnedImage {
            data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned, contiguous, row-major grid.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedImage<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> OwnedImage<T> {
    /// Wraps a row-major buffer; values past `width * height` are dropped.
    pub fn new(data: Vec<T>, width: usize, height: usize) -> NccMatchResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() < needed {
            return Err(NccMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        let mut data = data;
        data.truncate(needed);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a grid from nested rows; all rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> NccMatchResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        required_len(width, height, width)?;

        let mut data = Vec::with_capacity(width * height);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(NccMatchError::RaggedRows {
                    row: idx,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the contiguous row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Borrows the grid as a contiguous view.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> NccMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(NccMatchError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(NccMatchError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(NccMatchError::InvalidDimensions { width, height })?;
    Ok(needed)
}
