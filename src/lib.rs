//! Subspect inspects rendered subtitle frames.
//!
//! For each requested timestamp it reports *where on screen* subtitle content
//! sits and *whether* it changed, without re-encoding or storing bitmaps:
//! the tight bounding rectangle of visible pixels, whether any pixel is fully
//! opaque, and a CRC-32 checksum of the frame's visual content.
//!
//! # Pipeline overview
//!
//! 1. **Session**: [`Session`] owns a [`RasterBackend`] plus the script
//!    buffers (`header ++ body`) and the previous frame's rectangle.
//! 2. **Render**: the backend parses the script into a track and renders it
//!    at each timestamp, yielding coverage-bitmap layers and a change
//!    indicator.
//! 3. **Inspect**: unchanged frames reuse the previous rectangle in O(1);
//!    changed frames get a word-chunked bounds scan and a rolling [`Crc32`]
//!    over layer colors and visible bitmap bytes.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: every operation runs to completion; a session is
//!   deliberately not `Send` and callers serialize access themselves.
//! - **The rasterizer is a collaborator**: script parsing, shaping and glyph
//!   rendering live behind [`RasterBackend`]; this crate only scans what
//!   comes back. The scripted [`MockRaster`] (feature `backend-mock`, on by
//!   default) stands in for a real engine in tests and harnesses.
#![forbid(unsafe_code)]

mod foundation;
mod inspect;
mod raster;

pub use foundation::core::{BoundingRect, SessionOptions};
pub use foundation::error::{SubspectError, SubspectResult};
pub use inspect::checksum::Crc32;
pub use inspect::session::Session;
pub use raster::backend::{
    ALPHA_INVISIBLE, FrameChange, RasterBackend, RasterLayer, RenderedFrame,
};
pub use raster::diag::{DiagBuffer, DiagSink};

#[cfg(feature = "backend-mock")]
pub use raster::mock::{MockFrame, MockLayer, MockRaster, MockTrack};
