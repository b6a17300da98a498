//! Domain errors for both kiosks.
//!
//! Application-edge failures (config, terminal, log files) use `anyhow`;
//! these typed errors are the recoverable outcomes of session operations.

use thiserror::Error;

/// The voter directory could not answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("voter directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KioskError {
    #[error("no voter has been looked up")]
    NoVoter,

    #[error("voter is not eligible: {0}")]
    NotEligible(String),

    #[error("kiosk is already open")]
    AlreadyOpen,

    #[error("kiosk is not open")]
    NotOpen,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BallotError {
    #[error("action not available on this screen")]
    WrongScreen,

    #[error("voter ID must be at least 6 letters or digits")]
    InvalidVoterId,

    #[error("unknown party {0}")]
    UnknownParty(u32),

    #[error("candidate {0} is not on this ballot")]
    UnknownCandidate(u32),

    #[error("select exactly 3 candidates ({0} selected)")]
    SelectionIncomplete(usize),
}
