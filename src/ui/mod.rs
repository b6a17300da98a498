mod audit_log;
mod ballot;
mod input_box;
mod kiosk_panel;
mod layout;
mod status_bar;
mod theme;
mod voter_panel;

use crate::app::state::{Alert, AppState, KioskMode};
use crate::officer::voter::{nic_feedback, NicFeedback};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match state.mode {
        KioskMode::Officer => render_officer(frame, area, state),
        KioskMode::Voting => {
            let chunks = layout::compute_voting_layout(area);
            ballot::render(frame, area, state);
            status_bar::render(frame, chunks.status_bar, state);
        }
    }

    if let Some(alert) = &state.alert {
        render_alert(frame, area, alert);
    }
}

fn render_officer(frame: &mut Frame, area: Rect, state: &AppState) {
    let officer_layout = layout::compute_officer_layout(area);

    // An explicit refusal from the last Enter wins over live feedback.
    let feedback = match &state.input_error {
        Some(err) => Some((err.clone(), Theme::error())),
        None => {
            let fb = nic_feedback(&state.input.text);
            let style = match fb {
                NicFeedback::Valid => Theme::success(),
                _ if fb.is_error() => Theme::error(),
                _ => Theme::label(),
            };
            Some((fb.message(), style))
        }
    };

    input_box::render(
        frame,
        officer_layout.nic_input,
        "Voter NIC",
        &state.input,
        feedback,
    );
    voter_panel::render(frame, officer_layout.voter_panel, state);
    kiosk_panel::render(frame, officer_layout.kiosk_panel, state);
    audit_log::render(frame, officer_layout.audit_log, state);
    status_bar::render(frame, officer_layout.status_bar, state);
}

fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = layout::centered(area, 50, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .title_style(Theme::error().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_RED))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let lines = vec![
        Line::from(Span::styled(alert.message.clone(), Theme::value())),
        Line::default(),
        Line::from(Span::styled("Press Enter to dismiss", Theme::label())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
