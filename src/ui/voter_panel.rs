use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.officer;
    let title = if session.lookup_pending() {
        " Voter Details (looking up...) "
    } else {
        " Voter Details "
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();

    if let Some(failure) = &session.lookup_error {
        lines.push(Line::from(Span::styled("ERROR", Theme::error().add_modifier(Modifier::BOLD))));
        lines.push(Line::from(Span::styled(failure.message(), Theme::error())));
    } else if let Some(voter) = &session.current_voter {
        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), Theme::label()),
                Span::styled(value, Theme::value()),
            ])
        };
        lines.push(field("Name", voter.full_name.clone()));
        lines.push(field("NIC", voter.nic.clone()));
        lines.push(field("Age", voter.age.to_string()));
        lines.push(field("District", voter.district.clone()));
        lines.push(field("Polling Center", voter.assigned_center.clone()));
        lines.push(field(
            "Registration",
            if voter.registered { "Registered" } else { "Not Registered" }.to_string(),
        ));
        if session.active_voter_id() == Some(voter.nic.as_str()) {
            lines.push(Line::from(Span::styled(
                "Currently voting at the kiosk",
                Theme::warning(),
            )));
        }
        lines.push(Line::default());

        if let Some(eligibility) = &session.eligibility {
            let (badge, style) = if eligibility.eligible {
                (" ELIGIBLE ", Theme::success())
            } else {
                (" NOT ELIGIBLE ", Theme::error().add_modifier(Modifier::BOLD))
            };
            lines.push(Line::from(Span::styled(badge, style.add_modifier(Modifier::REVERSED))));
            lines.push(Line::from(Span::styled(eligibility.reason.clone(), Theme::value())));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Enter a 12-digit NIC and press Enter to look up a voter.",
            Theme::label(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
