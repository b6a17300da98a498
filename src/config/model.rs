//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the kiosks work out of the box with
//! the built-in demonstration roll and ballot.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ballot::catalog::{Candidate, Catalog, ElectionType, Party};
use crate::officer::audit::DEFAULT_AUDIT_CAPACITY;
use crate::officer::session::DEFAULT_SESSION_SECS;
use crate::officer::voter::Voter;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub officer: OfficerConfig,
    #[serde(default)]
    pub voting: VotingConfig,
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            officer: OfficerConfig::default(),
            voting: VotingConfig::default(),
            ui: default_ui(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Eligibility desk settings and the electoral roll it checks against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerConfig {
    /// The polling center this desk serves.
    #[serde(default = "default_polling_center")]
    pub polling_center: String,
    /// Length of one voting kiosk session.
    #[serde(default = "default_session_secs")]
    pub session_secs: u32,
    /// Simulated directory latency.
    #[serde(default = "default_lookup_delay")]
    pub lookup_delay_ms: u64,
    /// Entries kept in the on-screen audit log.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
    #[serde(default = "default_voters")]
    pub voters: Vec<Voter>,
}

impl OfficerConfig {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }
}

impl Default for OfficerConfig {
    fn default() -> Self {
        Self {
            polling_center: default_polling_center(),
            session_secs: default_session_secs(),
            lookup_delay_ms: default_lookup_delay(),
            audit_capacity: default_audit_capacity(),
            voters: default_voters(),
        }
    }
}

/// Voting kiosk settings and ballot contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingConfig {
    #[serde(default = "default_election_type")]
    pub election_type: ElectionType,
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    /// Delay before the success screen resets for the next voter.
    #[serde(default = "default_reset_delay")]
    pub reset_delay_ms: u64,
    #[serde(default = "default_presidential_candidates")]
    pub presidential_candidates: Vec<Candidate>,
    #[serde(default = "default_parties")]
    pub parties: Vec<Party>,
}

impl VotingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.presidential_candidates.clone(), self.parties.clone())
    }
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            election_type: default_election_type(),
            submit_delay_ms: default_submit_delay(),
            reset_delay_ms: default_reset_delay(),
            presidential_candidates: default_presidential_candidates(),
            parties: default_parties(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

/// Diagnostic log and audit trail files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Also append every audit entry to a daily file.
    #[serde(default = "default_true")]
    pub audit_file: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            audit_file: true,
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_polling_center() -> String {
    "Colombo Central School".to_string()
}
fn default_session_secs() -> u32 {
    DEFAULT_SESSION_SECS
}
fn default_lookup_delay() -> u64 {
    1000
}
fn default_audit_capacity() -> usize {
    DEFAULT_AUDIT_CAPACITY
}
fn default_election_type() -> ElectionType {
    ElectionType::Presidential
}
fn default_submit_delay() -> u64 {
    2000
}
fn default_reset_delay() -> u64 {
    10_000
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/pollstation/logs".to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        timestamp_format: default_timestamp_format(),
    }
}

fn voter(nic: &str, name: &str, age: u8, district: &str, center: &str, registered: bool) -> Voter {
    Voter {
        nic: nic.into(),
        full_name: name.into(),
        age,
        district: district.into(),
        assigned_center: center.into(),
        registered,
    }
}

fn default_voters() -> Vec<Voter> {
    let here = "Colombo Central School";
    vec![
        voter("123456789012", "Saman Perera", 35, "Colombo", here, true),
        voter("234567890123", "Nimal Silva", 42, "Colombo", here, true),
        voter("345678901234", "Kamala Jayawardena", 28, "Colombo", here, true),
        voter("456789012345", "Ruwan Fernando", 51, "Colombo", here, true),
        voter("567890123456", "Dilani Rathnayake", 23, "Colombo", here, false),
        voter("678901234567", "Anil Bandara", 29, "Kandy", "Kandy Royal College", true),
        voter("789012345678", "Priya Gunawardena", 33, "Galle", "Galle Methodist College", true),
    ]
}

fn candidate(id: u32, name: &str, affiliation: &str) -> Candidate {
    Candidate {
        id,
        name: name.into(),
        affiliation: affiliation.into(),
    }
}

fn default_presidential_candidates() -> Vec<Candidate> {
    vec![
        candidate(1, "Candidate A", "Progressive Party"),
        candidate(2, "Candidate B", "Democratic Alliance"),
        candidate(3, "Candidate C", "People's Movement"),
        candidate(4, "Candidate D", "National Unity"),
        candidate(5, "Candidate E", "Reform Coalition"),
    ]
}

fn default_parties() -> Vec<Party> {
    let party = |id: u32, name: &str, color: &str, district: &str, names: [&str; 5]| Party {
        id,
        name: name.into(),
        color: color.into(),
        candidates: names
            .iter()
            .enumerate()
            .map(|(i, n)| candidate(id * 100 + i as u32 + 1, n, district))
            .collect(),
    };
    vec![
        party(
            1,
            "Progressive Party",
            "#3B82F6",
            "Colombo District",
            ["John Smith", "Mary Johnson", "David Wilson", "Sarah Brown", "Michael Davis"],
        ),
        party(
            2,
            "Democratic Alliance",
            "#EF4444",
            "Kandy District",
            ["Robert Lee", "Jennifer Taylor", "William Garcia", "Lisa Martinez", "James Rodriguez"],
        ),
        party(
            3,
            "People's Movement",
            "#10B981",
            "Galle District",
            ["Christopher Anderson", "Amanda Thomas", "Daniel Jackson", "Michelle White", "Kevin Harris"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.officer.polling_center, "Colombo Central School");
        assert_eq!(config.officer.session_secs, 120);
        assert_eq!(config.officer.audit_capacity, 20);
        assert_eq!(config.officer.voters.len(), 7);
        assert_eq!(config.voting.election_type, ElectionType::Presidential);
        assert_eq!(config.voting.reset_delay(), Duration::from_secs(10));
        assert_eq!(config.voting.parties[2].candidates[4].id, 305);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [officer]
            polling_center = "Kandy Royal College"
            session_secs = 90
            voters = [
                { nic = "111111111111", full_name = "Test Voter", age = 30, district = "Kandy", assigned_center = "Kandy Royal College" },
            ]

            [voting]
            election_type = "parliamentary"
            "#,
        )
        .unwrap();
        assert_eq!(config.officer.session_secs, 90);
        assert_eq!(config.officer.lookup_delay(), Duration::from_millis(1000));
        assert_eq!(config.officer.voters.len(), 1);
        assert!(config.officer.voters[0].registered);
        assert_eq!(config.voting.election_type, ElectionType::Parliamentary);
        assert_eq!(config.voting.catalog().parties.len(), 3);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.officer.voters, config.officer.voters);
        assert_eq!(parsed.voting.parties, config.voting.parties);
    }
}
