use std::{
  sync::atomic::{AtomicU64, Ordering},
  thread,
  time::Duration,
};

use tokio::{
  runtime::Builder,
  time::{Instant, MissedTickBehavior, interval_at},
};
use tokio_util::sync::CancellationToken;

use crate::{curve::Easing, error::TweenError};

mod handle;
pub use handle::TweenHandle;

/// Default interval between two values written by a tween.
pub const TICK: Duration = Duration::from_millis(10);

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Settings shared by the tweens started from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenOptions {
  /// How often a value is written. Progress advances by `tick / duration`
  /// on every tick.
  pub tick: Duration,
}

impl Default for TweenOptions {
  fn default() -> Self { Self { tick: TICK } }
}

/// Animate from `from` to `to` over `duration`, shaping the progress with
/// `curve` and writing every value to `write`, with the default
/// [`TweenOptions`].
///
/// See [`TweenOptions::start`].
pub fn tween<W, E>(
  write: W, from: f64, to: f64, duration: Duration, curve: E,
) -> Result<TweenHandle, TweenError>
where
  W: FnMut(f64) + Send + 'static,
  E: Easing + Send + 'static,
{
  TweenOptions::default().start(write, from, to, duration, curve)
}

impl TweenOptions {
  pub fn with_tick(tick: Duration) -> Self { Self { tick } }

  /// Start a tween session.
  ///
  /// `write(from)` is called on the current thread before this returns. Then,
  /// on every tick, progress `t` grows by `tick / duration` and
  /// `write((to - from) * curve.position(t) + from)` is called from the
  /// session thread. Once `t` passes `1.` the session writes `to` exactly and
  /// exits.
  ///
  /// Every session owns a named thread driving a single-threaded runtime, so
  /// a slow `write` only delays its own session.
  ///
  /// # Errors
  ///
  /// [`TweenError::ZeroDuration`] or [`TweenError::ZeroTick`], before `write`
  /// is called. [`TweenError::Spawn`] if the session runtime cannot be built
  /// (before `write(from)`) or its thread cannot be started (after it).
  pub fn start<W, E>(
    &self, mut write: W, from: f64, to: f64, duration: Duration, curve: E,
  ) -> Result<TweenHandle, TweenError>
  where
    W: FnMut(f64) + Send + 'static,
    E: Easing + Send + 'static,
  {
    if self.tick.is_zero() {
      log::warn!("tween rejected: zero tick interval");
      return Err(TweenError::ZeroTick);
    }
    if duration.is_zero() {
      log::warn!("tween rejected: zero duration");
      return Err(TweenError::ZeroDuration);
    }

    let id = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
    let step = self.tick.as_secs_f64() / duration.as_secs_f64();
    log::debug!("tween#{id} start {from} -> {to} over {duration:?}, step {step}");

    let rt = Builder::new_current_thread().enable_time().build()?;

    write(from);

    let handle = TweenHandle::new(id);
    let session = Session { id, write, curve, from, to, step, tick: self.tick };
    let cancel = handle.cancel_token();
    let done = handle.done_guard();
    thread::Builder::new()
      .name(format!("ribir-ease-tween#{id}"))
      .spawn(move || {
        // Declared first so it drops last, after the session and its callback,
        // also when `write` panics.
        let _done = done;
        let rt = rt;
        rt.block_on(session.run(cancel));
      })
      .inspect_err(|e| log::warn!("tween#{id} thread not started: {e}"))?;
    Ok(handle)
  }
}

struct Session<W, E> {
  id: u64,
  write: W,
  curve: E,
  from: f64,
  to: f64,
  step: f64,
  tick: Duration,
}

impl<W, E> Session<W, E>
where
  W: FnMut(f64) + Send + 'static,
  E: Easing + Send + 'static,
{
  async fn run(mut self, cancel: CancellationToken) {
    let mut ticker = interval_at(Instant::now() + self.tick, self.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let delta = self.to - self.from;
    let mut t = 0.;
    loop {
      tokio::select! {
        biased;
        _ = cancel.cancelled() => break,
        _ = ticker.tick() => {}
      }
      if cancel.is_cancelled() {
        break;
      }

      t += self.step;
      if t > 1. {
        (self.write)(self.to);
        log::debug!("tween#{} finished", self.id);
        return;
      }
      let value = delta * self.curve.position(t) + self.from;
      log::trace!("tween#{} t={t} value={value}", self.id);
      (self.write)(value);
    }
    log::debug!("tween#{} cancelled at t={t}", self.id);
  }
}
