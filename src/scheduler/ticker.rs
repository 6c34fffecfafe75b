//! The accrual scheduler: periodic snapshots with change detection.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::snapshot;
use crate::config::ConfigSource;
use crate::models::AccrualSnapshot;

use super::clock::{Clock, LocalClock};

/// How often a running scheduler re-evaluates earnings.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Receives one call per scheduler tick.
///
/// `changed` is `true` when today's amount moved to a different whole cent
/// since the previous tick. Display observers can ignore it; an audio
/// observer plays its cue only when it is set.
///
/// Any `FnMut(&AccrualSnapshot, bool) + Send` closure is an observer.
pub trait TickObserver: Send + 'static {
    /// Handles one tick. Runs to completion before the next tick is armed.
    fn on_tick(&mut self, snapshot: &AccrualSnapshot, changed: bool);
}

impl<F> TickObserver for F
where
    F: FnMut(&AccrualSnapshot, bool) + Send + 'static,
{
    fn on_tick(&mut self, snapshot: &AccrualSnapshot, changed: bool) {
        self(snapshot, changed)
    }
}

/// The state owned by one run of the scheduler.
struct Ticker<C, S, O> {
    run_id: Uuid,
    clock: Arc<C>,
    source: S,
    observer: O,
    previous_cents: Decimal,
    ticks: u64,
}

impl<C, S, O> Ticker<C, S, O>
where
    C: Clock,
    S: ConfigSource,
    O: TickObserver,
{
    fn tick(&mut self) {
        let config = self.source.current();
        let snapshot = snapshot(&config, self.clock.now());

        let cents = snapshot.today_cents();
        let changed = cents != self.previous_cents;
        self.previous_cents = cents;
        self.ticks += 1;

        debug!(
            run_id = %self.run_id,
            tick = self.ticks,
            today = %snapshot.today.round_dp(2),
            changed,
            "Accrual tick"
        );

        self.observer.on_tick(&snapshot, changed);
    }

    async fn run(mut self, period: Duration) {
        loop {
            // The next tick is armed only once the previous observer call has
            // returned, so ticks never overlap or pile up.
            time::sleep(period).await;
            self.tick();
        }
    }
}

struct RunningTicker {
    run_id: Uuid,
    handle: JoinHandle<()>,
}

/// Drives periodic earnings snapshots to an observer.
///
/// The scheduler is either idle or running. [`start`](Self::start) emits
/// one snapshot straight away and then one per period; [`stop`](Self::stop)
/// cancels the pending tick. Configuration is read from the
/// [`ConfigSource`] on every tick, so edits take effect without a restart.
///
/// Change detection compares today's amount in whole cents with the
/// previous tick. Each start begins from a zero baseline, so the first tick
/// after a (re)start reports a change whenever at least a cent has been
/// earned.
///
/// A running scheduler needs a Tokio runtime; `start` must be called from
/// within one.
///
/// # Example
///
/// ```no_run
/// use payticker::config::FileConfigSource;
/// use payticker::scheduler::AccrualScheduler;
///
/// # async fn run() -> payticker::error::EngineResult<()> {
/// let source = FileConfigSource::open("./config/salary.yaml")?;
/// let mut scheduler = AccrualScheduler::new();
/// scheduler.start(source, |snapshot: &payticker::models::AccrualSnapshot, changed: bool| {
///     println!("today: {:.2}{}", snapshot.today, if changed { " *" } else { "" });
/// });
/// # Ok(())
/// # }
/// ```
pub struct AccrualScheduler<C: Clock = LocalClock> {
    clock: Arc<C>,
    period: Duration,
    running: Option<RunningTicker>,
}

impl AccrualScheduler<LocalClock> {
    /// Creates an idle scheduler on the local wall clock with a one-second
    /// period.
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl Default for AccrualScheduler<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AccrualScheduler<C> {
    /// Creates an idle scheduler reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock: Arc::new(clock),
            period: DEFAULT_TICK_PERIOD,
            running: None,
        }
    }

    /// Sets the tick period. Takes effect on the next `start`.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// The tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns `true` while a run is active.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Starts ticking, emitting the first snapshot before returning.
    ///
    /// Starting a running scheduler stops the current run first.
    pub fn start<S, O>(&mut self, source: S, observer: O)
    where
        S: ConfigSource,
        O: TickObserver,
    {
        self.stop();

        let run_id = Uuid::new_v4();
        let period_ms = u64::try_from(self.period.as_millis()).unwrap_or(u64::MAX);
        info!(run_id = %run_id, period_ms, "Starting accrual scheduler");

        let mut ticker = Ticker {
            run_id,
            clock: Arc::clone(&self.clock),
            source,
            observer,
            previous_cents: Decimal::ZERO,
            ticks: 0,
        };
        ticker.tick();

        let handle = tokio::spawn(ticker.run(self.period));
        self.running = Some(RunningTicker { run_id, handle });
    }

    /// Stops ticking. Does nothing if already idle.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.handle.abort();
            info!(run_id = %running.run_id, "Stopped accrual scheduler");
        }
    }
}

impl<C: Clock> Drop for AccrualScheduler<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
