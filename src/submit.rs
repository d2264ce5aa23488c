use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token for one bottom-bar mount. Set once on teardown and
/// never reset; a remounted bar gets a fresh guard.
#[derive(Clone, Debug, Default)]
pub struct LifecycleGuard {
    destroyed: Arc<AtomicBool>,
}

impl LifecycleGuard {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::Release);
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::Acquire)
    }
}

/// Drives the commit operation behind the bottom bar's Save button.
///
/// The busy flag is both the spinner state and the mutual exclusion: at
/// most one submit is in flight per driver, and confirm clicks while busy
/// are ignored. Once the operation settles the flag resets, unless the
/// guard says the bar was torn down in the meantime.
#[derive(Clone, Debug, Default)]
pub struct SubmitDriver {
    busy: Arc<AtomicBool>,
    guard: LifecycleGuard,
}

impl SubmitDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[allow(dead_code)]
    pub fn guard(&self) -> &LifecycleGuard {
        &self.guard
    }

    pub fn destroy(&self) {
        self.guard.destroy();
    }

    /// Runs one commit operation unless one is already in flight, in which
    /// case `make_op` is never called. `notify` mirrors the busy flag out
    /// to the view (true after the claim, false after the reset).
    ///
    /// A failed operation is discarded here; the calling form reports
    /// errors through its own error count. After the operation settles the
    /// busy flag resets and `notify(false)` fires, unless the bar has been
    /// destroyed, in which case nothing is touched.
    ///
    /// Returns whether the operation ran.
    pub async fn submit_with<F, Fut>(&self, mut notify: impl FnMut(bool), make_op: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        if self.busy.swap(true, Ordering::AcqRel) {
            return false;
        }
        notify(true);

        let _ = make_op().await;

        if self.guard.is_destroyed() {
            return true;
        }
        self.busy.store(false, Ordering::Release);
        notify(false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool)) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |busy| sink.lock().unwrap().push(busy))
    }

    #[tokio::test]
    async fn test_submit_runs_and_resets_busy() {
        let driver = SubmitDriver::new();
        let (seen, notify) = recorder();

        let ran = driver.submit_with(notify, || async { Ok(()) }).await;

        assert!(ran);
        assert!(!driver.is_busy());
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_failed_submit_is_swallowed_and_busy_resets() {
        let driver = SubmitDriver::new();
        let (seen, notify) = recorder();

        let ran = driver
            .submit_with(notify, || async { Err("save failed".to_string()) })
            .await;

        assert!(ran);
        assert!(!driver.is_busy());
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_reentrant_clicks_yield_one_invocation() {
        let driver = SubmitDriver::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel::<()>();

        let pending = tokio::spawn({
            let driver = driver.clone();
            let calls = calls.clone();
            async move {
                driver
                    .submit_with(
                        |_| {},
                        move || async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            let _ = rx.await;
                            Ok(())
                        },
                    )
                    .await
            }
        });
        tokio::task::yield_now().await;
        assert!(driver.is_busy());

        for _ in 0..5 {
            let calls = calls.clone();
            let ran = driver
                .submit_with(
                    |_| {},
                    move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    },
                )
                .await;
            assert!(!ran);
        }

        tx.send(()).unwrap();
        assert!(pending.await.unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!driver.is_busy());
    }

    #[tokio::test]
    async fn test_settle_after_destroy_mutates_nothing() {
        let driver = SubmitDriver::new();
        let (seen, notify) = recorder();
        let (tx, rx) = oneshot::channel::<()>();

        let pending = tokio::spawn({
            let driver = driver.clone();
            async move {
                driver
                    .submit_with(notify, move || async move {
                        let _ = rx.await;
                        Ok(())
                    })
                    .await
            }
        });
        tokio::task::yield_now().await;
        assert!(driver.is_busy());

        driver.destroy();
        tx.send(()).unwrap();
        assert!(pending.await.unwrap());

        // The busy flag stays claimed and the view is never notified again.
        assert!(driver.is_busy());
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_guard_destroy_is_permanent() {
        let guard = LifecycleGuard::new();
        assert!(!guard.is_destroyed());

        guard.destroy();
        assert!(guard.is_destroyed());

        let clone = guard.clone();
        assert!(clone.is_destroyed());
    }
}
