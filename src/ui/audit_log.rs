use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let audit = &state.officer.audit;
    let block = Block::default()
        .title(format!(" Audit Log ({}) ", audit.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let items: Vec<ListItem> = audit
        .entries()
        .map(|entry| {
            let style = if entry.message.starts_with("EMERGENCY") {
                Theme::error()
            } else if entry.message.contains("auto-closed") {
                Theme::warning()
            } else {
                Theme::value()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", entry.timestamp), Theme::timestamp()),
                Span::styled(entry.message.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
