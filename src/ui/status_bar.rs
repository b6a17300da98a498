use crate::app::state::{AppState, KioskMode};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let mode_name = match state.mode {
        KioskMode::Officer => "OFFICER",
        KioskMode::Voting => "VOTING",
    };
    parts.push(Span::styled(
        format!(" [{}] ", mode_name),
        Style::default().fg(Color::Black).bg(Theme::ACCENT_TEAL),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let quit_hint = "Ctrl+C quit";
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + quit_hint.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", quit_hint),
        Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
