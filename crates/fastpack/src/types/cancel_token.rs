use std::{
  pin::pin,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
};

use tokio::sync::Notify;

/// Handle for aborting an in-flight build, e.g. when it is superseded by a
/// newer build request. Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
  cancelled: Arc<AtomicBool>,
  notify: Arc<Notify>,
}

impl CancelToken {
  pub fn cancel(&self) {
    self.cancelled.store(true, Ordering::SeqCst);
    self.notify.notify_waiters();
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::SeqCst)
  }

  /// Resolves once `cancel` has been called. Must not miss a cancellation
  /// that races with the subscription, hence the enable-then-check dance.
  pub(crate) async fn cancelled(&self) {
    let mut notified = pin!(self.notify.notified());
    notified.as_mut().enable();
    if self.is_cancelled() {
      return;
    }
    notified.await;
  }
}
