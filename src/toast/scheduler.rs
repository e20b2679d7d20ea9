// SPDX-License-Identifier: MPL-2.0
//! One-shot timers behind an injectable scheduler.
//!
//! The store never touches a clock directly. It hands a task to a
//! [`Scheduler`] and keeps the returned [`TimerHandle`] so the task can be
//! cancelled before it runs.
//!
//! - [`TokioScheduler`] runs tasks on real wall-clock timers.
//! - [`ManualScheduler`] runs them when a test advances its virtual clock.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Handle, Runtime};
use tokio::task::AbortHandle;

/// Work run when a timer fires.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Arms one-shot timers.
pub trait Scheduler: Send + Sync {
    /// Runs `task` once after `delay`, unless the returned handle is cancelled first.
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Shared cancellation flag checked right before a task runs.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Cancellation token for an armed timer.
#[derive(Debug)]
pub struct TimerHandle {
    flag: CancelFlag,
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    /// Creates a handle that cancels through `flag`.
    #[must_use]
    pub fn new(flag: CancelFlag) -> Self {
        Self { flag, abort: None }
    }

    /// Also aborts the tokio task driving the timer on cancel.
    #[must_use]
    pub fn with_abort(mut self, abort: AbortHandle) -> Self {
        self.abort = Some(abort);
        self
    }

    /// Prevents the task from running. No effect once it has run.
    pub fn cancel(&self) {
        self.flag.cancel();
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }
}

// =============================================================================
// TokioScheduler
// =============================================================================

/// Wall-clock scheduler backed by a tokio runtime.
///
/// Each timer is a spawned task that sleeps for the delay and then runs.
pub struct TokioScheduler {
    handle: Handle,
    _owned: Option<OwnedRuntime>,
}

/// Runtime started when no ambient one exists. Shut down without blocking
/// so dropping it from async code cannot panic.
struct OwnedRuntime(Option<Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

impl TokioScheduler {
    /// Uses the current tokio runtime, or starts a dedicated single-worker
    /// runtime when called outside of one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the dedicated runtime cannot be started.
    pub fn new() -> Result<Self> {
        match Handle::try_current() {
            Ok(handle) => Ok(Self::with_handle(handle)),
            Err(_) => Self::dedicated(),
        }
    }

    /// Starts a dedicated single-worker runtime for timers, regardless of
    /// any ambient runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] if the runtime cannot be started.
    pub fn dedicated() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("toast-timers")
            .enable_time()
            .build()
            .map_err(Error::Runtime)?;

        Ok(Self {
            handle: runtime.handle().clone(),
            _owned: Some(OwnedRuntime(Some(runtime))),
        })
    }

    /// Spawns timers on the runtime behind `handle`.
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            _owned: None,
        }
    }
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("owns_runtime", &self._owned.is_some())
            .finish()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let flag = CancelFlag::new();
        let armed = flag.clone();

        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if !armed.is_cancelled() {
                task();
            }
        });

        TimerHandle::new(flag).with_abort(join.abort_handle())
    }
}

// =============================================================================
// ManualScheduler
// =============================================================================

/// Deterministic scheduler driven by a virtual clock.
///
/// Nothing runs until [`advance`](Self::advance) moves the clock past a
/// deadline. Due tasks run in deadline order, ties in scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    seq: u64,
    pending: BTreeMap<(Duration, u64), (CancelFlag, Task)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of armed, uncancelled timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .pending
            .values()
            .filter(|(flag, _)| !flag.is_cancelled())
            .count()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks may arm new timers; those run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().now + by;

        loop {
            let due = {
                let mut state = self.state.lock();
                let next = state
                    .pending
                    .first_key_value()
                    .map(|(&(deadline, _), _)| deadline);
                match next {
                    Some(deadline) if deadline <= target => {
                        state.now = deadline;
                        state.pending.pop_first().map(|(_, entry)| entry)
                    }
                    _ => None,
                }
            };

            // The lock is released so tasks can schedule follow-ups.
            match due {
                Some((flag, task)) => {
                    if !flag.is_cancelled() {
                        task();
                    }
                }
                None => break,
            }
        }

        self.state.lock().now = target;
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let flag = CancelFlag::new();
        let mut state = self.state.lock();
        let deadline = state.now + delay;
        let seq = state.seq;
        state.seq += 1;
        state.pending.insert((deadline, seq), (flag.clone(), task));
        TimerHandle::new(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let make = move |name: &'static str| -> Task {
            let sink = sink.clone();
            Box::new(move || sink.lock().push(name))
        };
        (log, make)
    }

    #[test]
    fn manual_runs_nothing_before_deadline() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let _handle = scheduler.schedule(Duration::from_millis(100), task("a"));

        scheduler.advance(Duration::from_millis(99));
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*log.lock(), vec!["a"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn manual_runs_in_deadline_then_schedule_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let _c = scheduler.schedule(Duration::from_millis(30), task("c"));
        let _a = scheduler.schedule(Duration::from_millis(10), task("a"));
        let _b = scheduler.schedule(Duration::from_millis(10), task("b"));

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(*log.lock(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), Duration::from_secs(1));
    }

    #[test]
    fn manual_cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let handle = scheduler.schedule(Duration::from_millis(10), task("a"));

        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_secs(1));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn manual_tasks_can_schedule_follow_ups() {
        let scheduler = Arc::new(ManualScheduler::new());
        let runs = Arc::new(AtomicUsize::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_runs = runs.clone();
        let _handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner_runs.fetch_add(1, Ordering::SeqCst);
                let runs = inner_runs.clone();
                let _follow_up = inner_scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || {
                        runs.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_runs_task_after_delay() {
        let scheduler = TokioScheduler::new().expect("ambient runtime");
        let (log, task) = recorder();
        let _handle = scheduler.schedule(Duration::from_millis(200), task("fired"));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(log.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert_eq!(*log.lock(), vec!["fired"]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_cancelled_task_never_runs() {
        let scheduler = TokioScheduler::new().expect("ambient runtime");
        let (log, task) = recorder();
        let handle = scheduler.schedule(Duration::from_millis(50), task("fired"));

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert!(log.lock().is_empty());
    }

    #[test]
    fn tokio_starts_dedicated_runtime_outside_async_context() {
        let scheduler = TokioScheduler::new().expect("dedicated runtime");
        let (tx, rx) = crossbeam_channel::bounded(1);
        let _handle = scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );

        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }
}
