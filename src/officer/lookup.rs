//! Voter directory lookups.
//!
//! Lookups run as background tasks and report back through the event
//! channel, so the officer can keep working while a request is in flight.

use crate::app::event::{AppEvent, RequestId};
use crate::error::LookupError;
use crate::officer::voter::Voter;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Source of voter records.
pub trait VoterDirectory: Send + Sync + 'static {
    /// Resolve with the exact NIC match, `None` when absent, or an error when
    /// the directory itself cannot be reached.
    fn lookup(&self, nic: String) -> BoxFuture<'static, Result<Option<Voter>, LookupError>>;
}

/// The static electoral roll, answered after a fixed simulated latency.
#[derive(Debug, Clone)]
pub struct RosterDirectory {
    voters: Arc<Vec<Voter>>,
    latency: Duration,
}

impl RosterDirectory {
    pub fn new(voters: Vec<Voter>, latency: Duration) -> Self {
        Self {
            voters: Arc::new(voters),
            latency,
        }
    }
}

impl VoterDirectory for RosterDirectory {
    fn lookup(&self, nic: String) -> BoxFuture<'static, Result<Option<Voter>, LookupError>> {
        let voters = Arc::clone(&self.voters);
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            Ok(voters.iter().find(|v| v.nic == nic).cloned())
        }
        .boxed()
    }
}

/// Spawn a lookup task; the outcome arrives as [`AppEvent::LookupFinished`].
pub fn spawn_lookup(
    directory: Arc<dyn VoterDirectory>,
    request_id: RequestId,
    nic: String,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        tracing::debug!(request_id, %nic, "voter lookup started");
        let result = directory.lookup(nic.clone()).await;
        let _ = event_tx.send(AppEvent::LookupFinished {
            request_id,
            nic,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> RosterDirectory {
        RosterDirectory::new(
            vec![Voter {
                nic: "123456789012".into(),
                full_name: "Saman Perera".into(),
                age: 35,
                district: "Colombo".into(),
                assigned_center: "Colombo Central School".into(),
                registered: true,
            }],
            Duration::from_millis(1000),
        )
    }

    struct Offline;

    impl VoterDirectory for Offline {
        fn lookup(&self, _nic: String) -> BoxFuture<'static, Result<Option<Voter>, LookupError>> {
            async { Err(LookupError::Unavailable("connection refused".into())) }.boxed()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_waits_for_latency() {
        let dir = roster();
        let started = tokio::time::Instant::now();
        let found = dir.lookup("123456789012".into()).await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(found.ok().flatten().map(|v| v.full_name), Some("Saman Perera".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_missing_resolves_none() {
        let dir = roster();
        assert_eq!(dir.lookup("999999999999".into()).await, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawn_lookup_reports_result() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_lookup(Arc::new(roster()), 7, "123456789012".into(), tx);
        match rx.recv().await {
            Some(AppEvent::LookupFinished { request_id, nic, result }) => {
                assert_eq!(request_id, 7);
                assert_eq!(nic, "123456789012");
                assert!(matches!(result, Ok(Some(_))));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_lookup_reports_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_lookup(Arc::new(Offline), 1, "123456789012".into(), tx);
        match rx.recv().await {
            Some(AppEvent::LookupFinished { result, .. }) => {
                assert_eq!(
                    result,
                    Err(LookupError::Unavailable("connection refused".into()))
                );
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
