use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a session's diagnostic buffer.
///
/// The session installs a clone on its backend at construction time; both
/// sides write through `RefCell` borrows. Single-threaded by design, which is
/// why this is `Rc` and not `Arc`.
pub type DiagSink = Rc<RefCell<DiagBuffer>>;

/// Diagnostics at this severity or above are informational noise and are
/// dropped. Matches the rasterizer's level numbering, where lower is more
/// severe.
const LEVEL_CUTOFF: i32 = 4;

/// Retained messages are clipped to this many bytes.
const CAPACITY: usize = 128;

/// Bounded single-message diagnostic buffer.
///
/// Holds the most recent retained rasterizer event or session failure
/// message; every write overwrites the previous one.
#[derive(Debug, Default)]
pub struct DiagBuffer {
    text: String,
}

impl DiagBuffer {
    /// Record one rasterizer log event. Events at [`LEVEL_CUTOFF`] or above
    /// are discarded; retained messages are stored as `"{level}: {text}"`.
    pub fn record(&mut self, level: i32, message: &str) {
        if level >= LEVEL_CUTOFF {
            return;
        }
        let formatted = format!("{level}: {message}");
        self.text.clear();
        self.text.push_str(clip(&formatted));
    }

    /// Overwrite the buffer with a session-level failure message, bypassing
    /// the severity filter.
    pub fn set_message(&mut self, message: &str) {
        self.text.clear();
        self.text.push_str(clip(message));
    }

    /// The most recent retained message, empty if none.
    pub fn message(&self) -> &str {
        &self.text
    }
}

fn clip(message: &str) -> &str {
    if message.len() <= CAPACITY {
        return message;
    }
    let mut end = CAPACITY;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/diag.rs"]
mod tests;
