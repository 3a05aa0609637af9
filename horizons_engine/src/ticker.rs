// ticker.rs - The repeating generation tick while playing

use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::error::EngineError;

/// Owns one periodic timer task with explicit start and cancel.
///
/// The timer runs on a private one-worker runtime and only sends unit
/// messages; the owner consumes them with [`Ticker::drain`] on its own thread.
/// The channel holds at most one pending tick, so a stalled owner sees a
/// single due tick rather than a backlog.
pub struct Ticker {
    runtime: Runtime,
    period: Duration,
    task: Option<JoinHandle<()>>,
    ticks: Option<mpsc::Receiver<()>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("horizons-ticker")
            .enable_time()
            .build()?;

        Ok(Self {
            runtime,
            period: period.max(Duration::from_millis(1)),
            task: None,
            ticks: None,
        })
    }

    /// (Re)starts the timer. The first tick fires one period from now.
    pub fn start(&mut self) {
        self.cancel();

        let (tx, rx) = mpsc::channel(1);
        let period = self.period;
        let task = self.runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                match tx.try_send(()) {
                    Ok(()) | Err(TrySendError::Full(())) => {}  // Already due
                    Err(TrySendError::Closed(())) => break,     // Receiver dropped
                }
            }
        });

        debug!(period_ms = period.as_millis() as u64, "ticker started");
        self.task = Some(task);
        self.ticks = Some(rx);
    }

    /// Stops the timer. Ticks that fired but were not drained are discarded.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("ticker cancelled");
        }
        self.ticks = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Changes the period, restarting the timer if it is running.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period.max(Duration::from_millis(1));
        if self.is_running() {
            self.start();
        }
    }

    /// 1 if at least one tick fired since the last call, otherwise 0.
    pub fn drain(&mut self) -> usize {
        match self.ticks.as_mut() {
            Some(rx) => usize::from(rx.try_recv().is_ok()),
            None => 0,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
