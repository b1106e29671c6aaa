use super::*;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Handle to a running blind timer.
///
/// One task walks the schedule in order, sleeping until each alert is due
/// relative to when it was spawned, so announcements can never overtake
/// each other. Dropping the handle cancels whatever has not fired yet.
#[derive(Debug)]
pub struct Blinds {
    task: JoinHandle<()>,
}

impl Blinds {
    /// Schedules every alert and returns without waiting for any of them.
    pub fn spawn<S>(schedule: Schedule, mut sink: S) -> Self
    where
        S: Sink + 'static,
    {
        let start = Instant::now();
        let task = tokio::spawn(async move {
            for alert in schedule {
                tokio::time::sleep_until(start + alert.elapsed).await;
                if let Err(e) = sink.send(&alert.to_string()).await {
                    log::warn!("blind alerts stopped: {}", e);
                    break;
                }
                log::debug!("announced {} at {:?}", alert, alert.elapsed);
            }
        });
        Self { task }
    }

    /// Stops any alerts that have not fired yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Blinds {
    fn drop(&mut self) {
        self.task.abort();
    }
}
