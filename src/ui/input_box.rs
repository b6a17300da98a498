use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

/// A bordered single-line field with an optional feedback line underneath.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    feedback: Option<(String, Style)>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < 3 {
        return;
    }

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(inner.x, inner.y, inner.width, 1));

    // Cursor offset: chevron "❯ " (2 columns) + display width before the cursor
    let before = UnicodeWidthStr::width(&input.text[..input.cursor]) as u16;
    let cursor_x = inner.x + 2 + before;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));

    if let Some((text, style)) = feedback {
        if inner.height > 1 {
            let fb_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            frame.render_widget(Paragraph::new(Span::styled(text, style)), fb_area);
        }
    }
}
