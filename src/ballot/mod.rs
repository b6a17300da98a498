//! Multi-language voting kiosk.
//!
//! Walks a voter through language choice, ID entry, party and candidate
//! selection, review, and a simulated submission.

pub mod auth;
pub mod catalog;
pub mod i18n;
pub mod screen;
pub mod selection;
pub mod session;
pub mod submission;
