use crate::{
    foundation::core::BoundingRect,
    foundation::error::SubspectResult,
    inspect::bounds::{WorkRect, scan_layer},
    inspect::checksum::Crc32,
    raster::backend::{ALPHA_INVISIBLE, RenderedFrame},
};

/// Measure one changed frame: scan every layer into a bounding rectangle,
/// fold colors and visible bitmap bytes into a CRC-32, and finalize.
///
/// The caller has already handled the empty-frame and unchanged-frame cases;
/// a frame with no layers measures as the default (all-zero) rectangle.
pub(crate) fn measure_frame(frame: &RenderedFrame<'_>) -> SubspectResult<BoundingRect> {
    for layer in &frame.layers {
        layer.validate()?;
    }
    let Some(first) = frame.layers.first() else {
        return Ok(BoundingRect::default());
    };

    let mut work = WorkRect::anchored(first);
    let mut solid = false;
    let mut crc = Crc32::new();

    for layer in &frame.layers {
        // 0xFF alpha means the layer draws nothing; it still feeds the hash
        // so a color-only change is detected.
        if layer.color as u8 != ALPHA_INVISIBLE {
            solid |= scan_layer(layer, &mut work);
        }
        crc.update(&layer.color.to_le_bytes());
        for row in layer.rows() {
            crc.update(row);
        }
    }

    let (x, y, w, h) = work.finalized();
    let mut rect = BoundingRect {
        x,
        y,
        w,
        h,
        solid,
        hash: crc.value(),
    };
    // The finalized record, current hash field included, is folded back
    // into the checksum and the result overwrites the field.
    crc.update(&rect.digest_bytes());
    rect.hash = crc.value();
    Ok(rect)
}

#[cfg(test)]
#[path = "../../tests/unit/inspect/engine.rs"]
mod tests;
