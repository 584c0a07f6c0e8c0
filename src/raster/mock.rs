use std::collections::VecDeque;

use crate::{
    foundation::error::{SubspectError, SubspectResult},
    raster::backend::{FrameChange, RasterBackend, RasterLayer, RenderedFrame},
    raster::diag::DiagSink,
};

/// Owned counterpart of [`RasterLayer`] for scripting mock renders.
#[derive(Clone, Debug)]
pub struct MockLayer {
    pub dst_x: i32,
    pub dst_y: i32,
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub color: u32,
    pub bitmap: Vec<u8>,
}

impl MockLayer {
    pub fn view(&self) -> RasterLayer<'_> {
        RasterLayer {
            dst_x: self.dst_x,
            dst_y: self.dst_y,
            width: self.width,
            height: self.height,
            stride: self.stride,
            color: self.color,
            bitmap: &self.bitmap,
        }
    }
}

/// One scripted frame: the change indicator plus its layers in draw order.
#[derive(Clone, Debug)]
pub struct MockFrame {
    pub change: FrameChange,
    pub layers: Vec<MockLayer>,
}

/// Track handle produced by [`MockRaster::read_track`]; exposes the parsed
/// script bytes so harnesses can assert on what the session submitted.
#[derive(Clone, Debug)]
pub struct MockTrack {
    pub script: Vec<u8>,
}

/// Scripted rasterizer backend for tests and downstream harnesses.
///
/// Frames are served FIFO from a queue filled with [`MockRaster::push_frame`];
/// an exhausted queue renders as "nothing to draw" (zero layers). Fault
/// injection covers track parsing and rendering, and [`MockRaster::emit_log`]
/// drives the installed diagnostic sink like a real rasterizer would.
#[derive(Default)]
pub struct MockRaster {
    queue: VecDeque<Result<MockFrame, String>>,
    current: Option<MockFrame>,
    sink: Option<DiagSink>,
    fail_read_track: Option<String>,
    /// Last dimensions applied via `set_frame_size`.
    pub frame_size: Option<(u32, u32)>,
    /// Last fontconfig path applied via `set_fonts`.
    pub fontconfig: Option<String>,
    /// Last font directory applied via `set_fonts`.
    pub font_dir: Option<String>,
    /// Script bytes from the most recent `read_track`.
    pub last_script: Option<Vec<u8>>,
    /// Number of successful `read_track` calls.
    pub tracks_read: usize,
}

impl MockRaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame for the next `render_frame` call.
    pub fn push_frame(&mut self, frame: MockFrame) {
        self.queue.push_back(Ok(frame));
    }

    /// Queue a render failure in place of a frame.
    pub fn push_render_failure(&mut self, message: impl Into<String>) {
        self.queue.push_back(Err(message.into()));
    }

    /// Make the next `read_track` call fail.
    pub fn fail_next_read_track(&mut self, message: impl Into<String>) {
        self.fail_read_track = Some(message.into());
    }

    /// Emit a log event into the installed diagnostic sink, if any.
    pub fn emit_log(&self, level: i32, message: &str) {
        if let Some(sink) = &self.sink {
            sink.borrow_mut().record(level, message);
        }
    }
}

impl RasterBackend for MockRaster {
    type Track = MockTrack;

    fn install_log_sink(&mut self, sink: DiagSink) {
        self.sink = Some(sink);
    }

    fn set_frame_size(&mut self, width: u32, height: u32) {
        self.frame_size = Some((width, height));
    }

    fn set_fonts(&mut self, fontconfig: Option<&str>, font_dir: Option<&str>) {
        self.fontconfig = fontconfig.map(str::to_owned);
        self.font_dir = font_dir.map(str::to_owned);
    }

    fn read_track(&mut self, script: &[u8]) -> SubspectResult<MockTrack> {
        if let Some(message) = self.fail_read_track.take() {
            return Err(SubspectError::raster(message));
        }
        self.last_script = Some(script.to_vec());
        self.tracks_read += 1;
        Ok(MockTrack {
            script: script.to_vec(),
        })
    }

    fn render_frame(
        &mut self,
        _track: &mut MockTrack,
        _time_ms: i64,
    ) -> SubspectResult<RenderedFrame<'_>> {
        match self.queue.pop_front() {
            None => Ok(RenderedFrame {
                layers: Vec::new(),
                change: FrameChange::ContentChanged,
            }),
            Some(Err(message)) => Err(SubspectError::raster(message)),
            Some(Ok(frame)) => {
                let current = self.current.insert(frame);
                let change = current.change;
                Ok(RenderedFrame {
                    layers: current.layers.iter().map(MockLayer::view).collect(),
                    change,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mock.rs"]
mod tests;
