//! Tokio countdown timer
//!
//! Implements the [`CountdownTimer`] port with a spawned task driving a
//! [`tokio::time::interval`], cancelled through a [`CancellationToken`].
//! Ticks arrive on a single timeline and the token is re-checked before
//! every callback; a stop observed from that timeline silences all
//! further deliveries. A stop racing a tick that already passed the
//! re-check may still see that one callback land.

use quiz_application::{CountdownTimer, OnFinish, OnTick};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The last-dispatched timer configuration, retained for `restart()`
#[derive(Clone)]
struct TimerSession {
    period_seconds: i64,
    interval: Duration,
    on_tick: OnTick,
    on_finish: OnFinish,
}

impl Default for TimerSession {
    fn default() -> Self {
        // Zero period and no-op callbacks make a restart before the
        // first dispatch harmless.
        Self {
            period_seconds: 0,
            interval: Duration::from_secs(1),
            on_tick: Arc::new(|_| {}),
            on_finish: Arc::new(|| {}),
        }
    }
}

struct TimerState {
    session: TimerSession,
    cancel: Option<CancellationToken>,
    running: Arc<AtomicBool>,
}

/// Countdown timer backed by the tokio runtime
///
/// Must be constructed and driven inside a tokio runtime context.
pub struct TokioCountdownTimer {
    state: Mutex<TimerState>,
}

impl TokioCountdownTimer {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TimerState {
                session: TimerSession::default(),
                cancel: None,
                running: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    fn start(&self, session: TimerSession) {
        let cancel = CancellationToken::new();
        let running = Arc::new(AtomicBool::new(true));

        {
            let mut state = self.state.lock().unwrap();
            if let Some(previous) = state.cancel.take() {
                previous.cancel();
            }
            state.running.store(false, Ordering::SeqCst);
            state.session = session.clone();
            state.cancel = Some(cancel.clone());
            state.running = running.clone();
        }

        debug!(
            "Countdown dispatched: {}s at {:?} cadence",
            session.period_seconds, session.interval
        );

        tokio::spawn(async move {
            let mut time_left = session.period_seconds;
            let mut ticker = tokio::time::interval(session.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it
            // so the countdown starts one full interval from now.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if cancel.is_cancelled() {
                            break;
                        }
                        time_left -= 1;
                        if time_left <= 0 {
                            // Order is part of the contract:
                            // stop, then finish, then the trailing tick.
                            running.store(false, Ordering::SeqCst);
                            cancel.cancel();
                            (session.on_finish)();
                            (session.on_tick)(time_left);
                            break;
                        }
                        (session.on_tick)(time_left);
                    }
                }
            }
        });
    }
}

impl Default for TokioCountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer for TokioCountdownTimer {
    fn dispatch(
        &self,
        period_seconds: i64,
        interval: Duration,
        on_tick: OnTick,
        on_finish: OnFinish,
    ) {
        self.start(TimerSession {
            period_seconds,
            interval,
            on_tick,
            on_finish,
        });
    }

    fn restart(&self) {
        let session = { self.state.lock().unwrap().session.clone() };
        self.start(session);
    }

    fn stop(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(cancel) = state.cancel.take() {
            cancel.cancel();
        }
        state.running.store(false, Ordering::SeqCst);
    }

    fn is_running(&self) -> bool {
        self.state.lock().unwrap().running.load(Ordering::SeqCst)
    }
}
