//! Timer-driven carousel.
//!
//! A [`Carousel`] owns a [`CarouselState`] and, while the list has at least
//! two items, a background task that advances it every `delay`. Manual moves
//! restart the countdown so the timer never fires right after a user jump.
//!
//! Every manual move and list replacement bumps the state generation. The
//! timer only applies an advance against the generation it started counting
//! from, so a tick that was already due when the user moved is dropped.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::carousel::CarouselState;
use crate::error::{Error, Result};

/// The running auto-advance task of one carousel.
#[derive(Debug)]
struct Timer {
    task: JoinHandle<()>,
    reset: Arc<Notify>,
}

/// An auto-advancing carousel.
///
/// Dropping the carousel cancels its timer.
#[derive(Debug)]
pub struct Carousel<T> {
    state: Arc<watch::Sender<CarouselState<T>>>,
    delay: Duration,
    timer: Mutex<Option<Timer>>,
    runtime: Handle,
}

impl<T> Carousel<T>
where
    T: Send + Sync + 'static,
{
    /// Create a carousel over `items` that advances every `delay`.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelay`] for a zero delay and
    /// [`Error::Runtime`] when no tokio runtime is running.
    pub fn start(items: impl Into<Arc<[T]>>, delay: Duration) -> Result<Self> {
        if delay.is_zero() {
            return Err(Error::InvalidDelay(delay));
        }
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;
        let (state, _) = watch::channel(CarouselState::new(items));

        let carousel = Self {
            state: Arc::new(state),
            delay,
            timer: Mutex::new(None),
            runtime,
        };
        carousel.restart_timer();
        Ok(carousel)
    }

    /// Rotation delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Current index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    /// Whether the carousel has nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Whether an auto-advance timer is scheduled.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Cheap copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> CarouselState<T> {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever the focused item changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CarouselState<T>> {
        self.state.subscribe()
    }

    /// Show the next item and restart the countdown.
    pub fn next(&self) {
        self.update(CarouselState::advance);
        self.reschedule();
    }

    /// Show the previous item and restart the countdown.
    pub fn previous(&self) {
        self.update(CarouselState::retreat);
        self.reschedule();
    }

    /// Jump to `index` (normalized modulo the length) and restart the
    /// countdown.
    pub fn go_to(&self, index: i64) {
        self.update(|s| s.go_to(index));
        self.reschedule();
    }

    /// Replace the list, return to the first item and reschedule from now.
    ///
    /// The previous timer is cancelled before the new list is installed, so
    /// no tick can land on the old list.
    pub fn set_items(&self, items: impl Into<Arc<[T]>>) {
        self.stop_timer();
        self.state.send_modify(|s| s.replace(items));
        self.restart_timer();
    }

    fn update(&self, f: impl FnOnce(&mut CarouselState<T>)) {
        self.state.send_if_modified(|s| {
            let before = s.index();
            f(s);
            s.touch();
            s.index() != before
        });
    }

    fn reschedule(&self) {
        if let Some(timer) = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            timer.reset.notify_one();
        }
    }

    fn stop_timer(&self) {
        let previous = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = previous {
            timer.task.abort();
            debug!("carousel timer cancelled");
        }
    }

    fn restart_timer(&self) {
        self.stop_timer();

        let len = self.len();
        if len < 2 {
            trace!(len, "carousel too short to rotate");
            return;
        }

        let reset = Arc::new(Notify::new());
        let task = self.runtime.spawn(run_timer(
            Arc::clone(&self.state),
            Arc::clone(&reset),
            self.delay,
        ));
        debug!(len, delay_ms = self.delay.as_millis(), "carousel timer scheduled");

        *self.timer.lock().unwrap_or_else(PoisonError::into_inner) = Some(Timer { task, reset });
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        let timer = self
            .timer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = timer {
            timer.task.abort();
        }
    }
}

impl<T> Carousel<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Clone of the item in focus.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.state.borrow().current().cloned()
    }
}

async fn run_timer<T>(
    state: Arc<watch::Sender<CarouselState<T>>>,
    reset: Arc<Notify>,
    delay: Duration,
) {
    loop {
        let generation = state.borrow().generation();
        tokio::select! {
            biased;
            () = reset.notified() => {
                trace!("carousel countdown restarted");
            }
            () = tokio::time::sleep(delay) => {
                if state.send_if_modified(|s| s.advance_from(generation)) {
                    trace!(index = state.borrow().index(), "carousel advanced");
                } else {
                    trace!("stale carousel tick dropped");
                }
            }
        }
    }
}
