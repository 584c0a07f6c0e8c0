use crate::{
    foundation::error::{SubspectError, SubspectResult},
    raster::diag::DiagSink,
};

/// Alpha value the rasterizer uses to mean "no coverage". A layer whose
/// color carries this alpha is folded into the content hash but never
/// scanned for bounds.
pub const ALPHA_INVISIBLE: u8 = 0xFF;

/// One rendered layer of a frame: an 8-bit coverage bitmap plus placement
/// and fill color. Non-owning; the backend retains the pixel memory for the
/// duration of the render call.
#[derive(Clone, Copy, Debug)]
pub struct RasterLayer<'a> {
    /// Horizontal placement of the bitmap on the output raster.
    pub dst_x: i32,
    /// Vertical placement of the bitmap on the output raster.
    pub dst_y: i32,
    /// Bitmap width in pixels (one coverage byte per pixel).
    pub width: i32,
    /// Bitmap height in rows.
    pub height: i32,
    /// Bytes per bitmap row; `stride >= width`, the excess is padding.
    pub stride: i32,
    /// Fill color as 0xRRGGBBAA; the low byte is the alpha component.
    pub color: u32,
    /// Row-major coverage bytes, at least `(height - 1) * stride + width`.
    pub bitmap: &'a [u8],
}

impl<'a> RasterLayer<'a> {
    /// Check that the bitmap actually covers the claimed geometry.
    pub fn validate(&self) -> SubspectResult<()> {
        if self.width < 0 || self.height < 0 || self.stride < self.width {
            return Err(SubspectError::validation("layer geometry is invalid"));
        }
        if self.height > 0 {
            let required =
                (self.height as usize - 1) * self.stride as usize + self.width as usize;
            if self.bitmap.len() < required {
                return Err(SubspectError::validation(
                    "layer bitmap is shorter than its geometry",
                ));
            }
        }
        Ok(())
    }

    /// Iterate the visible span of each row: the first `width` bytes, with
    /// stride padding excluded. Call [`RasterLayer::validate`] first.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        let width = self.width.max(0) as usize;
        let stride = self.stride.max(0) as usize;
        let bitmap = self.bitmap;
        (0..self.height.max(0) as usize).map(move |row| {
            let start = row * stride;
            &bitmap[start..start + width]
        })
    }
}

/// Whether a rendered frame differs from the immediately preceding one.
///
/// Only [`FrameChange::Unchanged`] enables the O(1) reuse path; a
/// positions-only change still forces a full rescan because layer placement
/// offsets are not trustworthy enough to translate the previous rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FrameChange {
    /// Pixel-identical to the previous rendered frame.
    Unchanged,
    /// Same content, moved on screen.
    PositionsChanged,
    /// Content itself changed.
    ContentChanged,
}

/// One frame's worth of rendered output: zero or more overlapping layers in
/// draw order, plus the change indicator relative to the previous render.
#[derive(Debug)]
pub struct RenderedFrame<'a> {
    pub layers: Vec<RasterLayer<'a>>,
    pub change: FrameChange,
}

/// Capabilities the inspection core requires from a subtitle rasterizer.
///
/// Implementations wrap an actual rendering engine (libass via FFI, or the
/// scripted [`crate::MockRaster`]). A [`crate::Session`] takes exclusive
/// ownership of the backend and serializes all calls against it.
pub trait RasterBackend {
    /// Opaque parsed-script handle, owned by the caller and dropped when the
    /// batch that produced it completes.
    type Track;

    /// Install the shared diagnostic buffer. The backend forwards its log
    /// events to [`crate::DiagBuffer::record`].
    fn install_log_sink(&mut self, sink: DiagSink);

    /// Set the output raster dimensions used by subsequent renders.
    fn set_frame_size(&mut self, width: u32, height: u32);

    /// Reconfigure font discovery.
    fn set_fonts(&mut self, fontconfig: Option<&str>, font_dir: Option<&str>);

    /// Parse a script byte buffer into a track.
    fn read_track(&mut self, script: &[u8]) -> SubspectResult<Self::Track>;

    /// Render the track at `time_ms`, yielding the frame's layers and its
    /// change indicator. Layer pixel memory stays owned by the backend.
    fn render_frame(
        &mut self,
        track: &mut Self::Track,
        time_ms: i64,
    ) -> SubspectResult<RenderedFrame<'_>>;
}

#[cfg(test)]
#[path = "../../tests/unit/raster/backend.rs"]
mod tests;
