use crate::raster::backend::RasterLayer;

/// Bytes examined per chunk-skip step of the row scan.
const CHUNK: usize = size_of::<usize>();

/// Transient bounds accumulator for one frame's scan.
///
/// Coordinates follow the 1-based screen convention of the scan: `x1`/`y1`
/// hold the lowest visible column/row minus one, `x2`/`y2` the highest
/// visible column/row inclusive. Starts anchored at the corner opposite any
/// expected hit so the first visible pixel pulls every bound the right way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WorkRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl WorkRect {
    pub(crate) fn anchored(layer: &RasterLayer<'_>) -> Self {
        Self {
            x1: layer.dst_x + layer.width,
            y1: layer.dst_y + layer.height,
            x2: 0,
            y2: 0,
        }
    }

    fn mark_column(&mut self, x: i32) {
        if x <= self.x1 {
            self.x1 = x - 1;
        }
        if x > self.x2 {
            self.x2 = x;
        }
    }

    fn mark_row(&mut self, y: i32) {
        if y <= self.y1 {
            self.y1 = y - 1;
        }
        if y > self.y2 {
            self.y2 = y;
        }
    }

    /// Clamp so the rectangle is never inverted and convert to
    /// `(x, y, w, h)`. A scan that found nothing collapses to a zero-area
    /// box at the anchor.
    pub(crate) fn finalized(mut self) -> (i32, i32, i32, i32) {
        if self.x2 < self.x1 {
            self.x2 = self.x1;
        }
        if self.y2 < self.y1 {
            self.y2 = self.y1;
        }
        (self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1)
    }
}

/// Widen `rect` to cover every visible pixel of `layer` and report whether
/// any coverage byte was fully opaque.
///
/// Rows are scanned a machine word at a time: an all-zero word contributes
/// nothing and is skipped outright, a nonzero word is re-scanned per byte to
/// locate exact columns. Stride padding past `width` is never examined. The
/// layer must already be validated.
pub(crate) fn scan_layer(layer: &RasterLayer<'_>, rect: &mut WorkRect) -> bool {
    let mut solid = false;

    for (row_idx, row) in layer.rows().enumerate() {
        let y = layer.dst_y + row_idx as i32 + 1;
        // 1-based screen column of the next byte to examine.
        let mut x = layer.dst_x + 1;
        let mut row_hit = false;

        let (chunks, tail) = row.as_chunks::<CHUNK>();
        for chunk in chunks {
            if usize::from_ne_bytes(*chunk) == 0 {
                x += CHUNK as i32;
                continue;
            }
            for &byte in chunk {
                if byte != 0 {
                    solid |= byte == 255;
                    rect.mark_column(x);
                }
                x += 1;
            }
            row_hit = true;
        }
        for &byte in tail {
            if byte != 0 {
                solid |= byte == 255;
                rect.mark_column(x);
                row_hit = true;
            }
            x += 1;
        }

        if row_hit {
            rect.mark_row(y);
        }
    }

    solid
}

#[cfg(test)]
#[path = "../../tests/unit/inspect/bounds.rs"]
mod tests;
