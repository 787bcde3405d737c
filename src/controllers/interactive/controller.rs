use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::SupersededToken;
use crate::core::actions::render_frame::{RenderFrameError, render_frame_cancelable};
use log::{debug, info, trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, FrameRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn mailbox(&self) -> MutexGuard<'_, Option<(u64, FrameRequest)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation.load(Ordering::Acquire)
    }
}

/// Renders frame requests on a background thread, newest first.
///
/// Only the most recent request is kept. A request submitted while another is
/// rendering cancels the older one at its next poll, and the older frame is
/// never presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any queued one. Returns its generation.
    pub fn submit_request(&self, request: FrameRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.mailbox() = Some((generation, request));
        self.shared.wake.notify_one();

        debug!(
            "submitted frame {} ({}x{}, zoom {})",
            generation,
            request.viewport.width(),
            request.viewport.height(),
            request.view.zoom()
        );

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked before shutdown");
            }
            info!("render worker stopped");
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.mailbox();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                SupersededToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result =
                render_frame_cancelable(request.viewport, request.view, &request.config, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderFrameError::Cancelled(_)) => {
                    trace!("frame {} superseded", job_generation);
                    continue;
                }
                Err(err) => {
                    warn!("frame {} failed: {}", job_generation, err);
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            if !shared.is_current(job_generation) {
                trace!("frame {} finished after being superseded", job_generation);
                continue;
            }

            debug!("frame {} rendered in {:?}", job_generation, render_duration);

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
