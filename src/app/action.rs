use crate::app::event::{Generation, RequestId};

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LookupVoter { request_id: RequestId, nic: String },
    StartSessionTimer { generation: Generation },
    StopSessionTimer,
    SubmitVote { generation: Generation },
    ScheduleReset { generation: Generation },
    Quit,
}
