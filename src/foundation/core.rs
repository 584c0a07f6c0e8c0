/// Finalized inspection result for one requested timestamp.
///
/// `x, y, w, h` is the tight bounding box of visible pixels in screen
/// coordinates; a frame with no visible pixels degenerates to `w == 0` and
/// `h == 0`. `solid` is true iff any scanned coverage byte was fully opaque
/// (255). `hash` is a CRC-32 summary of the frame's visual content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoundingRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub solid: bool,
    pub hash: u32,
}

impl BoundingRect {
    /// Canonical byte serialization used when folding the finalized record
    /// into its own checksum: `x, y, w, h` as i32 LE, `solid` as one byte,
    /// `hash` as u32 LE. Layout- and padding-independent.
    pub fn digest_bytes(&self) -> [u8; 21] {
        let mut out = [0u8; 21];
        out[0..4].copy_from_slice(&self.x.to_le_bytes());
        out[4..8].copy_from_slice(&self.y.to_le_bytes());
        out[8..12].copy_from_slice(&self.w.to_le_bytes());
        out[12..16].copy_from_slice(&self.h.to_le_bytes());
        out[16] = u8::from(self.solid);
        out[17..21].copy_from_slice(&self.hash.to_le_bytes());
        out
    }
}

/// Initial configuration for a [`crate::Session`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionOptions {
    /// Output raster width in pixels.
    pub width: u32,
    /// Output raster height in pixels.
    pub height: u32,
    /// Optional path to a fontconfig configuration file.
    pub fontconfig: Option<String>,
    /// Optional directory of additional fonts to index.
    pub font_dir: Option<String>,
}

impl SessionOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fontconfig: None,
            font_dir: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
