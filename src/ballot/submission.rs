//! Simulated vote submission.
//!
//! Nothing leaves the kiosk: after a fixed delay a receipt is issued locally
//! and delivered back as [`AppEvent::VoteRecorded`]. References are not
//! cryptographic; they only need to differ between submissions.

use crate::app::event::{AppEvent, Generation};
use chrono::{Local, Utc};
use rand::RngExt;
use std::time::Duration;
use tokio::sync::mpsc;

const REFERENCE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub reference: String,
    pub recorded_at: String,
}

impl VoteReceipt {
    pub fn issue() -> Self {
        Self {
            reference: generate_vote_reference(Utc::now().timestamp_millis()),
            recorded_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// `VT` + last six digits of the millisecond clock + six random `[0-9A-Z]`.
pub fn generate_vote_reference(now_millis: i64) -> String {
    let mut rng = rand::rng();
    let clock = format!("{:06}", now_millis.rem_euclid(1_000_000));
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| REFERENCE_CHARSET[rng.random_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("VT{}{}", clock, suffix)
}

/// Wait `delay`, then report a fresh receipt for `generation`.
pub fn spawn_submission(
    generation: Generation,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let receipt = VoteReceipt::issue();
        tracing::info!(generation, reference = %receipt.reference, "vote recorded");
        let _ = event_tx.send(AppEvent::VoteRecorded {
            generation,
            receipt,
        });
    });
}

/// Ask for a full kiosk reset after `delay`.
pub fn spawn_auto_reset(
    generation: Generation,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::AutoReset { generation });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let reference = generate_vote_reference(1_700_000_123_456);
        assert_eq!(reference.len(), 2 + 6 + SUFFIX_LEN);
        assert!(reference.starts_with("VT123456"));
        assert!(reference[8..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn test_reference_pads_small_clock() {
        assert!(generate_vote_reference(42).starts_with("VT000042"));
    }

    #[test]
    fn test_two_receipts_differ() {
        let first = VoteReceipt::issue();
        let second = VoteReceipt::issue();
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = tokio::time::Instant::now();
        spawn_submission(3, Duration::from_millis(2000), tx);
        match rx.recv().await {
            Some(AppEvent::VoteRecorded { generation, receipt }) => {
                assert_eq!(generation, 3);
                assert!(receipt.reference.starts_with("VT"));
                assert!(started.elapsed() >= Duration::from_millis(2000));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_reset_carries_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_auto_reset(9, Duration::from_secs(10), tx);
        assert!(matches!(rx.recv().await, Some(AppEvent::AutoReset { generation: 9 })));
    }
}
