use super::*;
use crate::raster::backend::RasterLayer;

fn layer(bitmap: &[u8], dst_x: i32, dst_y: i32, width: i32, height: i32, stride: i32) -> RasterLayer<'_> {
    RasterLayer {
        dst_x,
        dst_y,
        width,
        height,
        stride,
        color: 0,
        bitmap,
    }
}

#[test]
fn single_opaque_pixel_bounds_exactly_that_pixel() {
    let bitmap: Vec<u8> = vec![
        0, 0, 255, 0, 0, 0, //
        0, 0, 0, 0, 0, 0,
    ];
    let l = layer(&bitmap, 10, 20, 4, 2, 6);
    let mut rect = WorkRect::anchored(&l);
    let solid = scan_layer(&l, &mut rect);
    assert!(solid);
    assert_eq!(rect.finalized(), (12, 20, 1, 1));
}

#[test]
fn all_zero_bitmap_collapses_to_anchor() {
    let bitmap = vec![0u8; 12];
    let l = layer(&bitmap, 10, 20, 4, 2, 6);
    let mut rect = WorkRect::anchored(&l);
    let solid = scan_layer(&l, &mut rect);
    assert!(!solid);
    // Anchor corner, zero area.
    assert_eq!(rect.finalized(), (14, 22, 0, 0));
}

#[test]
fn partial_coverage_is_not_solid() {
    let bitmap = vec![0, 254, 0, 0];
    let l = layer(&bitmap, 0, 0, 4, 1, 4);
    let mut rect = WorkRect::anchored(&l);
    assert!(!scan_layer(&l, &mut rect));
    assert_eq!(rect.finalized(), (1, 0, 1, 1));
}

#[test]
fn chunked_rows_locate_exact_columns() {
    // Wide enough that both the word-skip and per-byte rescans run.
    let mut bitmap = vec![0u8; 32];
    bitmap[13] = 7;
    bitmap[30] = 9;
    let l = layer(&bitmap, 0, 0, 32, 1, 32);
    let mut rect = WorkRect::anchored(&l);
    scan_layer(&l, &mut rect);
    assert_eq!(rect.finalized(), (13, 0, 18, 1));
}

#[test]
fn rows_expand_vertical_bounds() {
    let mut bitmap = vec![0u8; 5 * 8];
    bitmap[8 + 2] = 1; // row 1
    bitmap[3 * 8 + 6] = 1; // row 3
    let l = layer(&bitmap, 0, 0, 8, 5, 8);
    let mut rect = WorkRect::anchored(&l);
    scan_layer(&l, &mut rect);
    assert_eq!(rect.finalized(), (2, 1, 5, 3));
}

#[test]
fn stride_padding_is_never_scanned() {
    let bitmap: Vec<u8> = vec![
        0, 0, 0, 0, 255, 255, //
        0, 0, 0, 0, 255, 255,
    ];
    let l = layer(&bitmap, 0, 0, 4, 2, 6);
    let mut rect = WorkRect::anchored(&l);
    let solid = scan_layer(&l, &mut rect);
    assert!(!solid);
    assert_eq!(rect.finalized(), (4, 2, 0, 0));
}

#[test]
fn second_layer_widens_an_existing_rect() {
    let a_bitmap = vec![255u8];
    let a = layer(&a_bitmap, 10, 10, 1, 1, 1);
    let b_bitmap = vec![128u8];
    let b = layer(&b_bitmap, 30, 5, 1, 1, 1);

    let mut rect = WorkRect::anchored(&a);
    scan_layer(&a, &mut rect);
    scan_layer(&b, &mut rect);
    assert_eq!(rect.finalized(), (10, 5, 21, 6));
}
