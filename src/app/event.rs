use crate::ballot::submission::VoteReceipt;
use crate::error::LookupError;
use crate::officer::voter::Voter;
use crossterm::event::Event as CrosstermEvent;

pub type RequestId = u64;
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A voter directory lookup finished
    LookupFinished {
        request_id: RequestId,
        nic: String,
        result: Result<Option<Voter>, LookupError>,
    },

    /// One second of an open kiosk session elapsed
    SessionTick {
        generation: Generation,
    },

    /// Vote submission events
    VoteRecorded {
        generation: Generation,
        receipt: VoteReceipt,
    },
    AutoReset {
        generation: Generation,
    },

    /// Tick for UI refresh
    Tick,
}
