use nccmatch::lowlevel::TemplatePlan;
use nccmatch::{extract, window, ImageView, NccMatchError, OwnedImage};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        NccMatchError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        NccMatchError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u8; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        NccMatchError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, NccMatchError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_accessors_use_row_col() {
    let data: Vec<u16> = (0u16..12).collect();
    let view = ImageView::from_slice(&data, 4, 3).unwrap();
    assert_eq!(view.len(), 12);
    assert_eq!(view.get(1, 2).copied(), Some(6));
    assert!(view.get(3, 0).is_none());
    assert!(view.get(0, 4).is_none());
    assert_eq!(view.row(2).unwrap(), &[8u16, 9, 10, 11]);
    assert_eq!(view.rows().count(), 3);
}

#[test]
fn owned_image_from_rows_rejects_ragged_input() {
    let err = OwnedImage::from_rows(vec![vec![1i32, 2, 3], vec![4, 5]])
        .err()
        .unwrap();
    assert_eq!(
        err,
        NccMatchError::RaggedRows {
            row: 1,
            expected: 3,
            got: 2,
        }
    );

    let err = OwnedImage::<i32>::from_rows(Vec::new()).err().unwrap();
    assert_eq!(
        err,
        NccMatchError::InvalidDimensions {
            width: 0,
            height: 0,
        }
    );
}

#[test]
fn extract_from_padded_view_drops_padding() {
    // 3x2 grid stored with stride 4; column 3 is padding.
    let data = [1u8, 2, 3, 99, 4, 5, 6, 99];
    let view = ImageView::new(&data, 3, 2, 4).unwrap();
    let patch = extract(view, 0, 2, 1, 3).unwrap();
    assert_eq!(patch.data(), &[2u8, 3, 5, 6]);

    let win = window(view, 1, 2, 0, 3).unwrap();
    assert_eq!(win.row(0).unwrap(), &[4u8, 5, 6]);
}

#[test]
fn extract_reports_range_before_bounds() {
    let img = OwnedImage::new(vec![0u8; 9], 3, 3).unwrap();
    let err = extract(img.view(), 5, 4, 0, 1).err().unwrap();
    assert!(matches!(err, NccMatchError::InvalidRange { .. }));

    let err = extract(img.view(), 2, 4, 0, 1).err().unwrap();
    assert_eq!(
        err,
        NccMatchError::OutOfBounds {
            row_end: 4,
            col_end: 1,
            img_width: 3,
            img_height: 3,
        }
    );
}

#[test]
fn template_plan_from_padded_view_matches_contiguous() {
    let padded = [0u8, 1, 7, 2, 3, 7];
    let contiguous = [0u8, 1, 2, 3];
    let a = TemplatePlan::from_view(ImageView::new(&padded, 2, 2, 3).unwrap());
    let b = TemplatePlan::from_view(ImageView::from_slice(&contiguous, 2, 2).unwrap());
    assert_eq!(a.zero_mean(), b.zero_mean());
    assert_eq!(a.sum_sq(), b.sum_sq());
}
