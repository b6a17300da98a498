use crate::ballot::session::VotingSession;
use crate::config::AppConfig;
use crate::officer::audit::AuditLog;
use crate::officer::session::EligibilitySession;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which kiosk this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KioskMode {
    /// Polling officer eligibility desk
    Officer,
    /// Voter-facing ballot kiosk
    Voting,
}

/// Single-line text field.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Operator-facing modal; input is captured until it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

pub struct AppState {
    pub config: AppConfig,
    pub mode: KioskMode,
    pub officer: EligibilitySession,
    pub voting: VotingSession,
    pub input: InputState,
    /// Highlighted row on list screens (languages, parties, candidates).
    pub cursor: usize,
    /// Inline error next to the voter ID field.
    pub input_error: Option<String>,
    pub alert: Option<Alert>,
    pub status_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, mode: KioskMode) -> Self {
        let officer = EligibilitySession::new(
            config.officer.polling_center.clone(),
            config.officer.session_secs,
            AuditLog::new(config.officer.audit_capacity),
        );
        let voting = VotingSession::new(config.voting.catalog(), config.voting.election_type);
        Self {
            config,
            mode,
            officer,
            voting,
            input: InputState::new(),
            cursor: 0,
            input_error: None,
            alert: None,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn raise_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
        self.dirty = true;
    }

    pub fn flash(&mut self, text: impl Into<String>) {
        self.status_message = Some((text.into(), Instant::now()));
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, since)) = &self.status_message {
            if now.duration_since(*since) >= STATUS_TTL {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        match self.mode {
            KioskMode::Officer => {
                let kiosk = if self.officer.kiosk_open() { "OPEN" } else { "CLOSED" };
                format!("{} | Kiosk: {}", self.officer.polling_center(), kiosk)
            }
            KioskMode::Voting => {
                let s = &self.voting;
                format!(
                    "{} | {}",
                    s.language.native_name(),
                    crate::ballot::i18n::translate(s.language, s.election_type.title_key())
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_handles_multibyte() {
        let mut input = InputState::new();
        for c in "ab€c".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "abc");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "bc");
        input.move_end();
        input.insert_char('1');
        assert_eq!(input.text, "bc1");
        input.clear();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_status_message_expires() {
        let mut state = AppState::new(AppConfig::default(), KioskMode::Officer);
        state.flash("Lookup already in progress");
        assert_eq!(state.status_line(), "Lookup already in progress");
        state.expire_status(Instant::now() + STATUS_TTL);
        assert!(state.status_line().contains("Kiosk: CLOSED"));
    }
}
