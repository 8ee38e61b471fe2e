//! Batch conversion of decoded frame sequences.
//!
//! Video decoding stays outside this crate: a caller hands over one decoded
//! RGBA raster per frame. Each frame converts independently with no state
//! carried between frames; progress is reported after every frame so long
//! batches stay observable, and a Ctrl-C stops the batch early.

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::engine::{self, ConvertOptions, Rendered};
use crate::raster::Raster;

/// Global flag for handling Ctrl+C across the application.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Check if Ctrl+C has been received.
pub fn interrupted() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// Call once at program startup; batch conversion polls the flag between
/// frames.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
        eprintln!("\nReceived Ctrl+C, stopping after the current frame...");
    })
}

/// Convert a sequence of frames, reporting progress after each one.
///
/// The callback receives `(frames_done, frames_total)`. When Ctrl-C was
/// received the batch stops after the in-flight frame and the partial
/// results are returned; callers decide whether partial output is useful.
pub fn convert_all<F>(frames: &[Raster], options: &ConvertOptions, mut progress: F) -> Vec<Rendered>
where
    F: FnMut(usize, usize),
{
    let total = frames.len();
    let mut results = Vec::with_capacity(total);

    for (i, frame) in frames.iter().enumerate() {
        if interrupted() {
            info!("frame batch interrupted at {i}/{total}");
            break;
        }
        results.push(engine::convert(frame, options));
        progress(i + 1, total);
    }

    results
}
