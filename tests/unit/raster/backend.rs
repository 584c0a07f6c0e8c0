use super::*;

fn layer(bitmap: &[u8], width: i32, height: i32, stride: i32) -> RasterLayer<'_> {
    RasterLayer {
        dst_x: 0,
        dst_y: 0,
        width,
        height,
        stride,
        color: 0,
        bitmap,
    }
}

#[test]
fn validate_accepts_exact_and_padded_bitmaps() {
    let bitmap = vec![0u8; 2 * 6];
    assert!(layer(&bitmap, 4, 2, 6).validate().is_ok());
    // Last row may omit the trailing stride padding.
    let tight = vec![0u8; 6 + 4];
    assert!(layer(&tight, 4, 2, 6).validate().is_ok());
}

#[test]
fn validate_rejects_stride_smaller_than_width() {
    let bitmap = vec![0u8; 16];
    let err = layer(&bitmap, 4, 2, 3).validate().unwrap_err();
    assert!(err.to_string().contains("geometry"));
}

#[test]
fn validate_rejects_short_bitmap() {
    let bitmap = vec![0u8; 9];
    assert!(layer(&bitmap, 4, 2, 6).validate().is_err());
}

#[test]
fn validate_accepts_zero_height() {
    assert!(layer(&[], 4, 0, 6).validate().is_ok());
}

#[test]
fn rows_skip_stride_padding() {
    let bitmap: Vec<u8> = vec![
        1, 2, 3, 4, 9, 9, //
        5, 6, 7, 8, 9, 9,
    ];
    let l = layer(&bitmap, 4, 2, 6);
    let rows: Vec<&[u8]> = l.rows().collect();
    assert_eq!(rows, vec![&[1u8, 2, 3, 4][..], &[5u8, 6, 7, 8][..]]);
}

#[test]
fn rows_is_empty_for_zero_height() {
    assert_eq!(layer(&[], 4, 0, 6).rows().count(), 0);
}
