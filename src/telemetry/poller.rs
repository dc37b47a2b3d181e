use crate::telemetry::client::{FetchError, SystemStateService};
use crate::telemetry::state::SystemState;
use log::debug;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub type PollOutcome = Result<SystemState, FetchError>;

/// Repeatedly asks a [`SystemStateService`] for the current state and hands
/// every outcome to the UI loop.
///
/// The request and the wait between requests happen on a worker thread; the
/// UI loop only ever calls [`Poller::try_next`], which never blocks. Dropping
/// the poller stops the loop after the request currently in flight.
pub struct Poller {
    rx: Receiver<PollOutcome>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn<S: SystemStateService>(service: S, interval: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("telemetry-poller".to_string())
            .spawn(move || poll_loop(service, interval, tx, worker_stop))?;

        Ok(Self {
            rx,
            stop,
            handle: Some(handle),
        })
    }

    /// Returns the next delivered outcome, if one is waiting.
    pub fn try_next(&self) -> Option<PollOutcome> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        // Not joined: the worker may be stuck in a request until the client
        // timeout fires. It exits on its own once it sees the flag.
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
        }
    }
}

fn poll_loop<S: SystemStateService>(
    service: S,
    interval: Duration,
    tx: Sender<PollOutcome>,
    stop: Arc<AtomicBool>,
) {
    while !stop.load(Ordering::Acquire) {
        let outcome = service.get_system_state();
        if stop.load(Ordering::Acquire) || tx.send(outcome).is_err() {
            break;
        }
        wait(interval, &stop);
    }
    debug!("Telemetry poller exiting");
}

fn wait(interval: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + interval;
    while !stop.load(Ordering::Acquire) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::park_timeout(deadline - now);
    }
}
