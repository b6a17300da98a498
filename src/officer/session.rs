//! The officer-side kiosk session state machine.
//!
//! `EligibilitySession` owns everything the officer desk shows: the voter on
//! display, their eligibility, whether the voting kiosk is open and for whom,
//! and the audit trail. Methods are pure state transitions; timers and
//! lookups are requested by the caller based on the returned outcomes.

use crate::app::event::{Generation, RequestId};
use crate::error::{KioskError, LookupError};
use crate::officer::audit::AuditLog;
use crate::officer::eligibility::{check_eligibility, Eligibility};
use crate::officer::voter::{validate_nic, Voter};
use chrono::{DateTime, Local};

pub const DEFAULT_SESSION_SECS: u32 = 120;

const EMERGENCY_CLOSE_ALERT: &str = "Emergency close activated. Kiosk has been closed immediately.";
const EMERGENCY_REPORT_ALERT: &str = "Emergency alert logged. Please report to supervisor immediately.";
const TIMEOUT_ALERT: &str = "Voting session has expired. Kiosk automatically closed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskState {
    Closed,
    Open {
        voter_nic: String,
        voter_name: String,
        started_at: DateTime<Local>,
        remaining_secs: u32,
    },
}

/// Why the kiosk closed; each reason leaves its own audit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Manual,
    Emergency,
    Timeout,
}

/// Error panel shown in place of voter details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    NotFound,
    Unavailable,
}

impl LookupFailure {
    pub fn message(&self) -> &'static str {
        match self {
            LookupFailure::NotFound => {
                "Voter not found in the electoral database. Please verify the NIC number."
            }
            LookupFailure::Unavailable => "Error looking up voter. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub request_id: RequestId,
    pub nic: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRefused {
    InvalidNic,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Eligibility),
    NotFound,
    Failed,
    /// Superseded or reset while in flight; nothing was applied.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmergencyOutcome {
    Closed { alert: &'static str },
    Reported { alert: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Counting(u32),
    Expired { alert: &'static str },
}

pub struct EligibilitySession {
    pub current_voter: Option<Voter>,
    pub eligibility: Option<Eligibility>,
    pub lookup_error: Option<LookupFailure>,
    pub audit: AuditLog,
    kiosk: KioskState,
    polling_center: String,
    session_secs: u32,
    pending_lookup: Option<RequestId>,
    next_request_id: RequestId,
    generation: Generation,
}

impl EligibilitySession {
    pub fn new(polling_center: impl Into<String>, session_secs: u32, audit: AuditLog) -> Self {
        Self {
            current_voter: None,
            eligibility: None,
            lookup_error: None,
            audit,
            kiosk: KioskState::Closed,
            polling_center: polling_center.into(),
            session_secs: session_secs.max(1),
            pending_lookup: None,
            next_request_id: 0,
            generation: 0,
        }
    }

    pub fn polling_center(&self) -> &str {
        &self.polling_center
    }

    pub fn session_secs(&self) -> u32 {
        self.session_secs
    }

    pub fn kiosk(&self) -> &KioskState {
        &self.kiosk
    }

    pub fn kiosk_open(&self) -> bool {
        matches!(self.kiosk, KioskState::Open { .. })
    }

    pub fn active_voter_id(&self) -> Option<&str> {
        match &self.kiosk {
            KioskState::Open { voter_nic, .. } => Some(voter_nic),
            KioskState::Closed => None,
        }
    }

    /// Seconds left in the open session; the full allowance while closed.
    pub fn time_remaining(&self) -> u32 {
        match &self.kiosk {
            KioskState::Open { remaining_secs, .. } => *remaining_secs,
            KioskState::Closed => self.session_secs,
        }
    }

    pub fn lookup_pending(&self) -> bool {
        self.pending_lookup.is_some()
    }

    fn displayed_voter_eligible(&self) -> bool {
        self.current_voter.is_some() && self.eligibility.as_ref().is_some_and(|e| e.eligible)
    }

    /// "Open" is disabled while the kiosk is open or no eligible voter is shown.
    pub fn can_open(&self) -> bool {
        !self.kiosk_open() && self.displayed_voter_eligible()
    }

    pub fn can_close(&self) -> bool {
        self.kiosk_open()
    }

    /// Validate the NIC and reserve a lookup. Lookups are allowed whether or
    /// not the kiosk is open.
    pub fn begin_lookup(&mut self, nic: &str) -> Result<LookupTicket, LookupRefused> {
        let nic = nic.trim();
        if !validate_nic(nic) {
            return Err(LookupRefused::InvalidNic);
        }
        if self.pending_lookup.is_some() {
            return Err(LookupRefused::InFlight);
        }
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_lookup = Some(request_id);
        self.lookup_error = None;
        Ok(LookupTicket {
            request_id,
            nic: nic.to_string(),
        })
    }

    /// Apply a lookup result. Results for a request that is no longer pending
    /// (the officer reset in the meantime) are dropped.
    pub fn finish_lookup(
        &mut self,
        request_id: RequestId,
        nic: &str,
        result: Result<Option<Voter>, LookupError>,
    ) -> LookupOutcome {
        if self.pending_lookup != Some(request_id) {
            tracing::debug!(request_id, "discarding stale lookup result");
            return LookupOutcome::Stale;
        }
        self.pending_lookup = None;

        match result {
            Ok(Some(voter)) => {
                let eligibility = check_eligibility(Some(&voter), &self.polling_center);
                self.audit.record(format!(
                    "Voter lookup: {} ({}) - {}",
                    voter.full_name,
                    voter.nic,
                    if eligibility.eligible { "ELIGIBLE" } else { "NOT ELIGIBLE" }
                ));
                if self.kiosk_open() {
                    self.audit.record(format!(
                        "Next voter checked while kiosk is open: {} ({})",
                        voter.full_name, voter.nic
                    ));
                }
                self.lookup_error = None;
                self.current_voter = Some(voter);
                self.eligibility = Some(eligibility.clone());
                LookupOutcome::Found(eligibility)
            }
            Ok(None) => {
                self.show_failure(LookupFailure::NotFound);
                self.audit.record(format!("Voter lookup failed: NIC {} not found", nic));
                LookupOutcome::NotFound
            }
            Err(err) => {
                self.show_failure(LookupFailure::Unavailable);
                self.audit.record(format!("Voter lookup error: {}", err));
                LookupOutcome::Failed
            }
        }
    }

    fn show_failure(&mut self, failure: LookupFailure) {
        self.lookup_error = Some(failure);
        self.current_voter = None;
        self.eligibility = None;
    }

    /// Open the kiosk for the displayed voter. Returns the timer generation
    /// the caller should start ticking for.
    pub fn open(&mut self) -> Result<Generation, KioskError> {
        if self.kiosk_open() {
            return Err(KioskError::AlreadyOpen);
        }
        let voter = self.current_voter.as_ref().ok_or(KioskError::NoVoter)?;
        match &self.eligibility {
            Some(e) if e.eligible => {}
            Some(e) => return Err(KioskError::NotEligible(e.reason.clone())),
            None => return Err(KioskError::NoVoter),
        }

        self.generation += 1;
        self.kiosk = KioskState::Open {
            voter_nic: voter.nic.clone(),
            voter_name: voter.full_name.clone(),
            started_at: Local::now(),
            remaining_secs: self.session_secs,
        };
        let message = format!("Kiosk opened for {} ({})", voter.full_name, voter.nic);
        self.audit.record(message);
        tracing::info!(generation = self.generation, "kiosk opened");
        Ok(self.generation)
    }

    pub fn close(&mut self, reason: CloseReason) -> Result<(), KioskError> {
        if !self.kiosk_open() {
            return Err(KioskError::NotOpen);
        }
        self.kiosk = KioskState::Closed;
        self.audit.record("Kiosk closed - Session completed");
        match reason {
            CloseReason::Manual => {}
            CloseReason::Emergency => {
                self.audit.record("EMERGENCY CLOSE - Kiosk closed by officer");
            }
            CloseReason::Timeout => {
                let limit = session_limit(self.session_secs);
                self.audit
                    .record(format!("Session auto-closed on timeout ({} limit)", limit));
            }
        }
        tracing::info!(?reason, "kiosk closed");
        Ok(())
    }

    pub fn emergency(&mut self) -> EmergencyOutcome {
        if self.close(CloseReason::Emergency).is_ok() {
            EmergencyOutcome::Closed {
                alert: EMERGENCY_CLOSE_ALERT,
            }
        } else {
            self.audit.record("EMERGENCY ALERT - Reported by officer");
            tracing::warn!("emergency alert raised while kiosk closed");
            EmergencyOutcome::Reported {
                alert: EMERGENCY_REPORT_ALERT,
            }
        }
    }

    /// Force-close if open, then clear the displayed voter. Returns whether a
    /// session was closed.
    pub fn reset(&mut self) -> bool {
        let closed = self.close(CloseReason::Manual).is_ok();
        self.current_voter = None;
        self.eligibility = None;
        self.lookup_error = None;
        self.pending_lookup = None;
        self.audit.record("Session reset by officer");
        closed
    }

    /// One countdown step for the session started with `generation`.
    pub fn tick(&mut self, generation: Generation) -> TickOutcome {
        if generation != self.generation {
            return TickOutcome::Ignored;
        }
        let KioskState::Open { remaining_secs, .. } = &mut self.kiosk else {
            return TickOutcome::Ignored;
        };
        *remaining_secs = remaining_secs.saturating_sub(1);
        if *remaining_secs > 0 {
            return TickOutcome::Counting(*remaining_secs);
        }
        // Closing cannot fail here: the kiosk was open a moment ago.
        let _ = self.close(CloseReason::Timeout);
        TickOutcome::Expired {
            alert: TIMEOUT_ALERT,
        }
    }
}

#[cfg(test)]
impl EligibilitySession {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// "2 minute" for whole minutes, "90 second" otherwise.
fn session_limit(secs: u32) -> String {
    if secs % 60 == 0 {
        format!("{} minute", secs / 60)
    } else {
        format!("{} second", secs)
    }
}

/// `MM:SS` rendering of a countdown.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
