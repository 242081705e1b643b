use crate::engine::ThesaurusController;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owner of a running detection loop. Dropping it also stops the loop.
pub struct DetectionHandle {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl DetectionHandle {
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels and waits for the loop task to exit.
    pub async fn shutdown(self) {
        self.cancel();
        if let Err(e) = self.task.await {
            log::warn!("detection loop ended abnormally: {e}");
        }
    }
}

/// Runs `detect_cycle` every `period` until cancelled.
///
/// Cycles never overlap: the next tick is only awaited after the previous
/// cycle returned, and late ticks are skipped rather than bunched up.
/// Cancelling while a cycle is mid-lookup drops that cycle.
pub fn spawn_detection_loop(
    controller: Arc<ThesaurusController>,
    period: Duration,
) -> DetectionHandle {
    let (cancel, mut cancelled) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::info!("detection loop started (every {}ms)", period.as_millis());

        loop {
            tokio::select! {
                biased;
                _ = cancelled.changed() => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                _ = cancelled.changed() => break,
                outcome = controller.detect_cycle() => {
                    log::trace!("detection cycle: {outcome:?}");
                }
            }
        }

        log::info!("detection loop stopped");
    });

    DetectionHandle { cancel, task }
}
