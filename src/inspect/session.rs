use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    foundation::core::{BoundingRect, SessionOptions},
    foundation::error::{SubspectError, SubspectResult},
    inspect::engine::measure_frame,
    raster::backend::{FrameChange, RasterBackend},
    raster::diag::{DiagBuffer, DiagSink},
};

/// One inspection context: exclusive owner of a rasterizer backend, the
/// current script buffer, and the previous frame's rectangle.
///
/// All calls mutate the session in place; callers serialize access
/// themselves. The diagnostic sink is `Rc`-shared with the backend, which
/// makes a session deliberately not `Send`. Buffers and the backend are
/// released when the session is dropped.
pub struct Session<B: RasterBackend> {
    backend: B,
    header: Vec<u8>,
    script: Vec<u8>,
    last_rect: BoundingRect,
    diag: DiagSink,
}

impl<B: RasterBackend> Session<B> {
    /// Wire up a session around `backend`: install the diagnostic sink and
    /// apply the initial frame size and font configuration.
    ///
    /// Constructing the backend itself is the caller's job; a backend that
    /// cannot be brought up never reaches this function.
    pub fn new(options: SessionOptions, mut backend: B) -> SubspectResult<Self> {
        let diag: DiagSink = Rc::new(RefCell::new(DiagBuffer::default()));
        backend.install_log_sink(Rc::clone(&diag));
        backend.set_frame_size(options.width, options.height);
        backend.set_fonts(options.fontconfig.as_deref(), options.font_dir.as_deref());

        Ok(Self {
            backend,
            header: Vec::new(),
            script: Vec::new(),
            last_rect: BoundingRect::default(),
            diag,
        })
    }

    /// Update the output raster dimensions used by subsequent renders.
    pub fn change_resolution(&mut self, width: u32, height: u32) {
        self.backend.set_frame_size(width, height);
    }

    /// Reconfigure font discovery on the backend.
    pub fn reload_fonts(&mut self, fontconfig: Option<&str>, font_dir: Option<&str>) {
        self.backend.set_fonts(fontconfig, font_dir);
    }

    /// Replace the stored script header; `None` clears it.
    ///
    /// The old header is always discarded first. The current script is not
    /// rebuilt until the next [`Session::set_script`] call.
    pub fn set_header(&mut self, header: Option<&[u8]>) {
        self.header.clear();
        if let Some(bytes) = header {
            self.header.extend_from_slice(bytes);
        }
    }

    /// Rebuild the current script as `header ++ body`; `None` clears the
    /// script so a following [`Session::calculate_bounds`] fails.
    pub fn set_script(&mut self, body: Option<&[u8]>) {
        self.script.clear();
        let Some(body) = body else {
            return;
        };
        self.script.reserve(self.header.len() + body.len());
        self.script.extend_from_slice(&self.header);
        self.script.extend_from_slice(body);
    }

    /// Compute per-timestamp bounding rectangles into `rects`.
    ///
    /// The current script is parsed into one track for the whole batch. Per
    /// timestamp: a render with no layers leaves its slot untouched, an
    /// unchanged frame reuses the previous rectangle in O(1), anything else
    /// gets a full scan. A failure aborts the call; slots already written
    /// stay written.
    #[tracing::instrument(skip(self, times, rects))]
    pub fn calculate_bounds(
        &mut self,
        times: &[i64],
        rects: &mut [BoundingRect],
    ) -> SubspectResult<()> {
        if rects.len() < times.len() {
            return Err(self.fail(SubspectError::validation(
                "output slice is shorter than the timestamp list",
            )));
        }
        if self.script.is_empty() {
            return Err(self.fail(SubspectError::script(
                "no script set; call set_script first",
            )));
        }

        let mut track = match self.backend.read_track(&self.script) {
            Ok(track) => track,
            Err(err) => return Err(self.fail(err)),
        };

        for (i, &time) in times.iter().enumerate() {
            let frame = match self.backend.render_frame(&mut track, time) {
                Ok(frame) => frame,
                Err(err) => {
                    self.diag.borrow_mut().set_message(&err.to_string());
                    return Err(err);
                }
            };

            if frame.layers.is_empty() {
                continue;
            }
            if frame.change == FrameChange::Unchanged {
                tracing::trace!(index = i, "frame unchanged, reusing previous rectangle");
                rects[i] = self.last_rect;
                continue;
            }

            let rect = match measure_frame(&frame) {
                Ok(rect) => rect,
                Err(err) => {
                    self.diag.borrow_mut().set_message(&err.to_string());
                    return Err(err);
                }
            };
            rects[i] = rect;
            self.last_rect = rect;
        }

        Ok(())
    }

    /// The most recent diagnostic or failure message, empty if none.
    pub fn last_error(&self) -> String {
        self.diag.borrow().message().to_owned()
    }

    /// Read access to the owned backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the owned backend, for backend-specific
    /// configuration between batches.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn fail(&self, err: SubspectError) -> SubspectError {
        self.diag.borrow_mut().set_message(&err.to_string());
        err
    }
}

#[cfg(all(test, feature = "backend-mock"))]
#[path = "../../tests/unit/inspect/session.rs"]
mod tests;
