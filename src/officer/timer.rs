//! Kiosk session countdown.
//!
//! A single background task sends one [`AppEvent::SessionTick`] per second.
//! Ticks carry the generation of the session that started them, so a tick
//! that races a close is recognised as stale by the session.

use crate::app::event::{AppEvent, Generation};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct SessionTimer {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl SessionTimer {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            task: None,
            period: TICK_PERIOD,
        }
    }

    /// Start ticking for `generation`, cancelling any ticker already running.
    pub fn start(&mut self, generation: Generation) {
        self.stop();
        let tx = self.event_tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::SessionTick { generation }).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!(generation, "session timer started");
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("session timer stopped");
        }
    }
}

#[cfg(test)]
impl SessionTimer {
    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, timeout_at};

    async fn collect_ticks(
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
        window: Duration,
    ) -> Vec<Generation> {
        let deadline = Instant::now() + window;
        let mut ticks = Vec::new();
        while let Ok(Some(event)) = timeout_at(deadline, rx.recv()).await {
            if let AppEvent::SessionTick { generation } = event {
                ticks.push(generation);
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SessionTimer::new(tx);
        timer.start(1);
        assert!(timer.is_running());
        let ticks = collect_ticks(&mut rx, Duration::from_millis(3500)).await;
        assert_eq!(ticks, vec![1, 1, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_does_not_duplicate_ticker() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SessionTimer::new(tx);
        timer.start(1);
        timer.start(2);
        let ticks = collect_ticks(&mut rx, Duration::from_millis(3500)).await;
        assert_eq!(ticks, vec![2, 2, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = SessionTimer::new(tx);
        timer.start(5);
        assert!(matches!(rx.recv().await, Some(AppEvent::SessionTick { generation: 5 })));
        timer.stop();
        assert!(!timer.is_running());
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }
}
