use crate::traits::Presenter;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    last_detected_word: String,
    in_flight: usize,
    auto_fetch_enabled: bool,
}

/// Per-panel mutable state shared by the detection loop and manual actions.
///
/// The lock is never held across an await.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<Mutex<Inner>>,
}

impl SessionState {
    pub fn new(auto_fetch_enabled: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                auto_fetch_enabled,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave `Inner` half-written.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn last_detected_word(&self) -> String {
        self.lock().last_detected_word.clone()
    }

    pub fn set_last_detected_word(&self, word: impl Into<String>) {
        self.lock().last_detected_word = word.into();
    }

    pub fn is_searching(&self) -> bool {
        self.lock().in_flight > 0
    }

    pub fn auto_fetch_enabled(&self) -> bool {
        self.lock().auto_fetch_enabled
    }

    pub fn set_auto_fetch_enabled(&self, enabled: bool) {
        self.lock().auto_fetch_enabled = enabled;
    }

    /// Marks a lookup as in flight until the guard drops.
    pub fn begin_search(&self) -> SearchGuard {
        self.lock().in_flight += 1;
        SearchGuard {
            state: self.clone(),
            active: true,
        }
    }

    /// Like `begin_search`, but only when nothing else is in flight.
    pub fn try_begin_search(&self) -> Option<SearchGuard> {
        let mut inner = self.lock();
        if inner.in_flight > 0 {
            return None;
        }
        inner.in_flight += 1;
        drop(inner);
        Some(SearchGuard {
            state: self.clone(),
            active: true,
        })
    }
}

#[must_use = "the search is marked finished as soon as the guard drops"]
#[derive(Debug)]
pub struct SearchGuard {
    state: SessionState,
    active: bool,
}

impl SearchGuard {
    /// Ends the search now. Returns true when it was the last one in flight.
    pub fn finish(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        if !std::mem::take(&mut self.active) {
            return false;
        }
        let mut inner = self.state.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.in_flight == 0
    }
}

impl Drop for SearchGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Who asked for an operation, and therefore who hears about its failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPolicy {
    /// A user action: failures reach the presenter.
    Foreground,
    /// The detection loop: failures are only logged.
    Background,
}

impl CallPolicy {
    pub fn report(self, presenter: &dyn Presenter, user_message: &str, err: &anyhow::Error) {
        match self {
            CallPolicy::Foreground => {
                log::warn!("{user_message}: {err:#}");
                presenter.show_error(user_message);
            }
            CallPolicy::Background => {
                log::debug!("background cycle failed: {err:#}");
            }
        }
    }
}
