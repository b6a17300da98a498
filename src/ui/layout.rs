use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct OfficerLayout {
    pub nic_input: Rect,
    pub voter_panel: Rect,
    pub kiosk_panel: Rect,
    pub audit_log: Rect,
    pub status_bar: Rect,
}

pub struct VotingLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

pub fn compute_officer_layout(area: Rect) -> OfficerLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: lookup column | gap | kiosk + audit column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(55), Constraint::Min(30)])
        .split(content);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // NIC input + feedback
            Constraint::Min(8),    // Voter details
        ])
        .split(h_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Kiosk status + countdown
            Constraint::Min(5),    // Audit log
        ])
        .split(h_chunks[1]);

    OfficerLayout {
        nic_input: left_chunks[0],
        voter_panel: left_chunks[1],
        kiosk_panel: right_chunks[0],
        audit_log: right_chunks[1],
        status_bar,
    }
}

pub fn compute_voting_layout(area: Rect) -> VotingLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Screen title
            Constraint::Min(8),    // Screen body
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    VotingLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// A rectangle of the given percentage size centered in `area`.
pub fn centered(area: Rect, percent_x: u16, min_h: u16) -> Rect {
    let w = (area.width * percent_x / 100).max(30).min(area.width);
    let h = min_h.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
