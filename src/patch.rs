//! Patch extraction from half-open rectangles.
//!
//! Rectangles are given as `rows row_start..row_end` and
//! `cols col_start..col_end`. [`extract`] copies the pixels into a new grid;
//! [`window`] returns a borrowed view with the same contents and is what the
//! search loop uses for every candidate placement.

use crate::image::{ImageView, OwnedImage};
use crate::util::{NccMatchError, NccMatchResult};

/// Copies `image[row_start..row_end][col_start..col_end]` into a new grid.
///
/// # Errors
///
/// - [`NccMatchError::InvalidRange`] if either range is empty or inverted.
/// - [`NccMatchError::OutOfBounds`] if the rectangle exceeds the image.
pub fn extract<T: Copy>(
    image: ImageView<'_, T>,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
) -> NccMatchResult<OwnedImage<T>> {
    let view = window(image, row_start, row_end, col_start, col_end)?;
    Ok(view.to_owned_image())
}

/// Returns a zero-copy view of the rectangle, validated like [`extract`].
pub fn window<'a, T>(
    image: ImageView<'a, T>,
    row_start: usize,
    row_end: usize,
    col_start: usize,
    col_end: usize,
) -> NccMatchResult<ImageView<'a, T>> {
    if row_end <= row_start || col_end <= col_start {
        return Err(NccMatchError::InvalidRange {
            row_start,
            row_end,
            col_start,
            col_end,
        });
    }
    if row_end > image.height() || col_end > image.width() {
        return Err(NccMatchError::OutOfBounds {
            row_end,
            col_end,
            img_width: image.width(),
            img_height: image.height(),
        });
    }
    image.sub_view(
        row_start,
        col_start,
        col_end - col_start,
        row_end - row_start,
    )
}

#[cfg(test)]
mod tests {
    use super::{extract, window};
    use crate::util::NccMatchError;
    use crate::{ImageView, OwnedImage};

    fn ramp(width: usize, height: usize) -> Vec<i32> {
        (0..(width * height) as i32).collect()
    }

    #[test]
    fn extract_copies_row_major_block() {
        let data = ramp(4, 3);
        let view = ImageView::from_slice(&data, 4, 3).unwrap();
        let patch = extract(view, 1, 3, 1, 3).unwrap();
        assert_eq!(patch.width(), 2);
        assert_eq!(patch.height(), 2);
        assert_eq!(patch.data(), &[5, 6, 9, 10]);
    }

    #[test]
    fn extract_full_image_is_identity() {
        let img = OwnedImage::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        let patch = extract(img.view(), 0, 2, 0, 2).unwrap();
        assert_eq!(patch, img);
    }

    #[test]
    fn window_keeps_parent_stride() {
        let data = ramp(5, 5);
        let view = ImageView::from_slice(&data, 5, 5).unwrap();
        let win = window(view, 2, 4, 3, 5).unwrap();
        assert_eq!(win.stride(), 5);
        assert_eq!(win.row(0).unwrap(), &[13, 14]);
        assert_eq!(win.row(1).unwrap(), &[18, 19]);
    }

    #[test]
    fn empty_or_inverted_ranges_are_invalid() {
        let data = ramp(3, 3);
        let view = ImageView::from_slice(&data, 3, 3).unwrap();
        assert_eq!(
            extract(view, 1, 1, 0, 2).err().unwrap(),
            NccMatchError::InvalidRange {
                row_start: 1,
                row_end: 1,
                col_start: 0,
                col_end: 2,
            }
        );
        assert!(matches!(
            extract(view, 0, 2, 2, 1),
            Err(NccMatchError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rectangles_past_the_edge_are_out_of_bounds() {
        let data = ramp(3, 2);
        let view = ImageView::from_slice(&data, 3, 2).unwrap();
        assert_eq!(
            extract(view, 0, 3, 0, 1).err().unwrap(),
            NccMatchError::OutOfBounds {
                row_end: 3,
                col_end: 1,
                img_width: 3,
                img_height: 2,
            }
        );
        assert!(matches!(
            window(view, 0, 1, 1, 4),
            Err(NccMatchError::OutOfBounds { .. })
        ));
    }
}
