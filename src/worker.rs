//! Background conversion worker for interactive callers.
//!
//! A UI adjusting sliders fires many conversion requests in quick
//! succession; converting every one would waste work the caller will
//! immediately discard. The worker owns a dedicated thread and applies a
//! trailing debounce: after a request arrives it keeps draining newer
//! requests for [`DEBOUNCE`] before converting, so a burst coalesces into a
//! single conversion of the latest parameters.
//!
//! The engine itself stays call-and-return; cancellation is implicit: a
//! superseded result is simply never produced (coalesced away) or discarded
//! by the caller when a newer one exists.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace};
use thiserror::Error;

use crate::engine::{self, ConvertOptions, Rendered};
use crate::raster::Raster;

/// Trailing debounce window for coalescing rapid submissions.
pub const DEBOUNCE: Duration = Duration::from_millis(100);

/// Errors at the worker boundary.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker thread is gone; submissions and receives cannot proceed.
    #[error("conversion worker is no longer running")]
    Disconnected,
}

struct Job {
    raster: Arc<Raster>,
    options: ConvertOptions,
}

/// Handle to a background conversion thread.
///
/// Submissions within the debounce window coalesce; only the most recent
/// job of a burst is converted. Dropping the handle shuts the thread down.
pub struct ConvertWorker {
    job_tx: Option<Sender<Job>>,
    result_rx: Receiver<Rendered>,
    handle: Option<JoinHandle<()>>,
}

impl ConvertWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel::<Rendered>();

        let handle = thread::spawn(move || worker_loop(&job_rx, &result_tx));

        Self {
            job_tx: Some(job_tx),
            result_rx,
            handle: Some(handle),
        }
    }

    /// Queue a conversion. Rapid successive calls coalesce to the latest.
    pub fn submit(&self, raster: Arc<Raster>, options: ConvertOptions) -> Result<(), WorkerError> {
        self.job_tx
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(Job { raster, options })
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Block until the next result is ready.
    pub fn recv(&self) -> Result<Rendered, WorkerError> {
        self.result_rx.recv().map_err(|_| WorkerError::Disconnected)
    }

    /// Take a result if one is already waiting.
    ///
    /// Callers tracking a live source can drain with this in a loop and
    /// keep only the last value, discarding superseded frames.
    pub fn try_recv(&self) -> Option<Rendered> {
        self.result_rx.try_recv().ok()
    }
}

impl Drop for ConvertWorker {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop
        self.job_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(job_rx: &Receiver<Job>, result_tx: &Sender<Rendered>) {
    loop {
        // Block for the next request
        let mut job = match job_rx.recv() {
            Ok(job) => job,
            Err(_) => break,
        };

        // Trailing debounce: newer requests within the window replace the
        // pending one. The loop also coalesces any backlog that piled up
        // while a previous conversion ran.
        let mut coalesced = 0u32;
        loop {
            match job_rx.recv_timeout(DEBOUNCE) {
                Ok(newer) => {
                    job = newer;
                    coalesced += 1;
                }
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    trace!("job channel closed during debounce");
                    break;
                }
            }
        }
        if coalesced > 0 {
            debug!("coalesced {coalesced} superseded conversion request(s)");
        }

        let rendered = engine::convert(&job.raster, &job.options);

        // A send failure means the caller went away; nothing left to do
        // with the result either way. Jobs that arrived mid-conversion are
        // picked up by the next recv and coalesce in its debounce drain.
        if result_tx.send(rendered).is_err() {
            break;
        }
    }
}
