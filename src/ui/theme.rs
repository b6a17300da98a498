use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
    pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 32);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn disabled() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    /// Countdown colour: green above a minute, amber down to 31s, then red.
    pub fn countdown(remaining_secs: u32) -> Style {
        let color = if remaining_secs <= 30 {
            Self::ACCENT_RED
        } else if remaining_secs <= 60 {
            Self::ACCENT_AMBER
        } else {
            Self::ACCENT_GREEN
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
