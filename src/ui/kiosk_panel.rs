use crate::app::state::AppState;
use crate::officer::session::{format_time, KioskState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.officer;
    let block = Block::default()
        .title(" Kiosk Control ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 4 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    match session.kiosk() {
        KioskState::Open {
            voter_nic,
            voter_name,
            started_at,
            remaining_secs,
        } => {
            lines.push(Line::from(vec![
                Span::styled("Status  ", Theme::label()),
                Span::styled("OPEN", Theme::success()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Voter   ", Theme::label()),
                Span::styled(format!("{} ({})", voter_name, voter_nic), Theme::value()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Started ", Theme::label()),
                Span::styled(
                    started_at.format(&state.config.ui.timestamp_format).to_string(),
                    Theme::timestamp(),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Time Remaining: ", Theme::label()),
                Span::styled(format_time(*remaining_secs), Theme::countdown(*remaining_secs)),
            ]));
        }
        KioskState::Closed => {
            lines.push(Line::from(vec![
                Span::styled("Status  ", Theme::label()),
                Span::styled("CLOSED", Theme::error().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled("No active session", Theme::label())));
            lines.push(Line::default());
            lines.push(Line::default());
        }
    }

    let text_h = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), Rect::new(inner.x, inner.y, inner.width, text_h));

    if session.kiosk_open() && inner.height > text_h {
        let remaining = session.time_remaining();
        let ratio = f64::from(remaining) / f64::from(session.session_secs());
        let gauge = Gauge::default()
            .gauge_style(Theme::countdown(remaining))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format_time(remaining));
        frame.render_widget(gauge, Rect::new(inner.x, inner.y + text_h, inner.width, 1));
    }

    // Control hints; disabled controls are dimmed.
    let hint = |key: &'static str, label: &'static str, enabled: bool| {
        let style = if enabled { Theme::value() } else { Theme::disabled() };
        vec![
            Span::styled(key, Theme::warning()),
            Span::styled(format!(" {}  ", label), style),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(hint("F2", "Open", session.can_open()));
    spans.extend(hint("F3", "Close", session.can_close()));
    spans.extend(hint("F4", "Emergency", true));
    spans.extend(hint("F5", "Reset", true));
    let hints_y = inner.y + inner.height - 1;
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(inner.x, hints_y, inner.width, 1),
    );
}
