//! Polling-officer eligibility desk.
//!
//! Looks voters up by NIC, checks them against this polling center and gates
//! the time-limited voting kiosk session.

pub mod audit;
pub mod eligibility;
pub mod lookup;
pub mod session;
pub mod timer;
pub mod voter;
