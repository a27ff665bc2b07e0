use std::fmt;

use tokio_util::sync::{CancellationToken, DropGuard};

/// Control handle of one running tween session.
///
/// Dropping the handle does not stop the session, it keeps ticking until it
/// reaches the end value. Clones control the same session.
#[derive(Clone)]
pub struct TweenHandle {
  id: u64,
  cancel: CancellationToken,
  done: CancellationToken,
}

impl TweenHandle {
  pub(super) fn new(id: u64) -> Self {
    Self { id, cancel: CancellationToken::new(), done: CancellationToken::new() }
  }

  pub(super) fn cancel_token(&self) -> CancellationToken { self.cancel.clone() }

  /// Fires `finished` when the session thread drops it, after the session and
  /// its callback, whichever way the session exits.
  pub(super) fn done_guard(&self) -> DropGuard { self.done.clone().drop_guard() }

  /// Process-unique id of the session, as it appears in log records.
  #[inline]
  pub fn id(&self) -> u64 { self.id }

  /// Ask the session to stop. No value is written once the session has seen
  /// the request. Calling it again, or after the session finished, does
  /// nothing.
  pub fn cancel(&self) {
    if !self.cancel.is_cancelled() {
      log::debug!("tween#{} cancel requested", self.id);
      self.cancel.cancel();
    }
  }

  #[inline]
  pub fn is_cancelled(&self) -> bool { self.cancel.is_cancelled() }

  /// The session thread has exited, by completion or by cancellation.
  #[inline]
  pub fn is_finished(&self) -> bool { self.done.is_cancelled() }

  /// Resolves once the session has exited and released its callback.
  pub async fn finished(&self) { self.done.cancelled().await }

  /// Block the current thread until the session has exited.
  ///
  /// Inside async code prefer [`TweenHandle::finished`], this blocks the
  /// executor thread.
  pub fn wait(&self) { futures::executor::block_on(self.finished()) }

  /// The session's cancel request as a bare function.
  pub fn into_cancel_fn(self) -> impl Fn() + Send + Sync + 'static { move || self.cancel() }
}

impl fmt::Debug for TweenHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TweenHandle")
      .field("id", &self.id)
      .field("cancelled", &self.is_cancelled())
      .field("finished", &self.is_finished())
      .finish()
  }
}
