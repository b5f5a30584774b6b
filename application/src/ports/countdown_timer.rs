//! Countdown timer port
//!
//! Defines the repeating tick source driving a quiz round. The tokio
//! implementation lives in the infrastructure layer; tests use a
//! manually-driven mock.

use std::sync::Arc;
use std::time::Duration;

/// Callback invoked on every tick with the remaining seconds
///
/// The final tick after the countdown reaches zero is still delivered,
/// carrying the post-decrement value (see [`CountdownTimer::dispatch`]).
pub type OnTick = Arc<dyn Fn(i64) + Send + Sync>;

/// Callback invoked once when the countdown reaches zero
pub type OnFinish = Arc<dyn Fn() + Send + Sync>;

/// A restartable countdown tick source
///
/// Callbacks are serialized relative to each other: ticks arrive on a
/// single timeline and never overlap. Callers must not assume a
/// specific thread beyond that.
pub trait CountdownTimer: Send + Sync {
    /// Start a countdown over `period_seconds`, ticking every `interval`
    ///
    /// Each tick decrements the remaining-seconds counter by one. When
    /// the counter reaches zero or below, the timer stops itself, then
    /// invokes `on_finish`, then still invokes `on_tick` with the
    /// post-decrement value, exactly in that order. Otherwise each tick
    /// invokes `on_tick(remaining_seconds)`.
    ///
    /// The configuration is retained so [`restart`](Self::restart) can
    /// replay it.
    fn dispatch(&self, period_seconds: i64, interval: Duration, on_tick: OnTick, on_finish: OnFinish);

    /// Stop any active countdown and re-dispatch the retained configuration
    ///
    /// Before the first `dispatch`, the retained configuration is a
    /// zero-period countdown with no-op callbacks, so calling this early
    /// is harmless.
    fn restart(&self);

    /// Cancel the countdown
    ///
    /// Idempotent. Ticks arrive on a single serialized timeline; once a
    /// stop issued on that timeline returns, no further `on_tick` or
    /// `on_finish` invocations are delivered. A stop racing a tick from
    /// another thread may still observe that one in-flight delivery.
    fn stop(&self);

    /// Whether a tick source is currently scheduled
    fn is_running(&self) -> bool;
}
