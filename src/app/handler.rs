use crate::app::action::Action;
use crate::app::event::{AppEvent, Generation, RequestId};
use crate::app::state::*;
use crate::ballot::i18n::{translate, Language};
use crate::ballot::screen::Screen;
use crate::ballot::selection::ToggleOutcome;
use crate::ballot::session::VotingSession;
use crate::ballot::submission::VoteReceipt;
use crate::error::LookupError;
use crate::officer::session::{CloseReason, EmergencyOutcome, LookupOutcome, LookupRefused, TickOutcome};
use crate::officer::voter::Voter;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::LookupFinished {
            request_id,
            nic,
            result,
        } => handle_lookup_finished(state, request_id, &nic, result),
        AppEvent::SessionTick { generation } => handle_session_tick(state, generation),
        AppEvent::VoteRecorded {
            generation,
            receipt,
        } => handle_vote_recorded(state, generation, receipt),
        AppEvent::AutoReset { generation } => {
            if state.voting.auto_reset(generation) {
                clear_voter_input(state);
                state.cursor = 0;
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_lookup_finished(
    state: &mut AppState,
    request_id: RequestId,
    nic: &str,
    result: Result<Option<Voter>, LookupError>,
) -> Vec<Action> {
    match state.officer.finish_lookup(request_id, nic, result) {
        LookupOutcome::Stale => {}
        LookupOutcome::Found(_) | LookupOutcome::NotFound | LookupOutcome::Failed => {
            state.dirty = true;
        }
    }
    vec![]
}

fn handle_session_tick(state: &mut AppState, generation: Generation) -> Vec<Action> {
    match state.officer.tick(generation) {
        TickOutcome::Ignored => vec![],
        TickOutcome::Counting(_) => {
            state.dirty = true;
            vec![]
        }
        TickOutcome::Expired { alert } => {
            state.raise_alert("Session Expired", alert);
            vec![Action::StopSessionTimer]
        }
    }
}

fn handle_vote_recorded(
    state: &mut AppState,
    generation: Generation,
    receipt: VoteReceipt,
) -> Vec<Action> {
    if !state.voting.complete_submission(generation, receipt) {
        return vec![];
    }
    state.cursor = 0;
    state.dirty = true;
    vec![Action::ScheduleReset { generation }]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Alerts capture all input until acknowledged
    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.alert = None;
        }
        return vec![];
    }

    match state.mode {
        KioskMode::Officer => handle_officer_key(state, key),
        KioskMode::Voting => handle_voting_key(state, key),
    }
}

fn handle_officer_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::F(2) => match state.officer.open() {
            Ok(generation) => vec![Action::StartSessionTimer { generation }],
            Err(e) => {
                state.flash(format!("Cannot open kiosk: {}", e));
                vec![]
            }
        },
        KeyCode::F(3) => match state.officer.close(CloseReason::Manual) {
            Ok(()) => vec![Action::StopSessionTimer],
            Err(e) => {
                state.flash(format!("Cannot close kiosk: {}", e));
                vec![]
            }
        },
        KeyCode::F(4) => match state.officer.emergency() {
            EmergencyOutcome::Closed { alert } => {
                state.raise_alert("Emergency Close", alert);
                vec![Action::StopSessionTimer]
            }
            EmergencyOutcome::Reported { alert } => {
                state.raise_alert("Emergency Alert", alert);
                vec![]
            }
        },
        KeyCode::F(5) => {
            let closed = state.officer.reset();
            clear_voter_input(state);
            if closed {
                vec![Action::StopSessionTimer]
            } else {
                vec![]
            }
        }
        KeyCode::Enter => {
            let nic = state.input.text.clone();
            match state.officer.begin_lookup(&nic) {
                Ok(ticket) => {
                    state.input_error = None;
                    vec![Action::LookupVoter {
                        request_id: ticket.request_id,
                        nic: ticket.nic,
                    }]
                }
                Err(LookupRefused::InvalidNic) => {
                    state.input_error = Some("Please enter a valid 12-digit NIC number".to_string());
                    vec![]
                }
                Err(LookupRefused::InFlight) => {
                    state.flash("Lookup already in progress");
                    vec![]
                }
            }
        }
        _ => {
            if edit_input(&mut state.input, key) {
                state.input_error = None;
            }
            vec![]
        }
    }
}

/// Apply a text-editing key. Returns whether the key was consumed.
fn edit_input(input: &mut InputState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn clear_voter_input(state: &mut AppState) {
    state.input.clear();
    state.input_error = None;
}

fn handle_voting_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let before = state.voting.screen();

    let actions = if key.code == KeyCode::F(5) {
        state.voting.switch_election_type();
        let title = translate(state.voting.language, state.voting.election_type.title_key());
        state.flash(format!("Ballot switched to {}", title));
        vec![]
    } else {
        match before {
            Screen::Language => handle_language_key(state, key),
            Screen::Authentication => handle_auth_key(state, key),
            Screen::Instructions => {
                if key.code == KeyCode::Enter {
                    let _ = state.voting.start_voting();
                }
                vec![]
            }
            Screen::PartySelection => handle_party_key(state, key),
            Screen::CandidateSelection => handle_candidate_key(state, key),
            Screen::Review => handle_review_key(state, key),
            Screen::Success => vec![],
        }
    };

    if state.voting.screen() != before {
        state.cursor = 0;
    }
    actions
}

fn move_cursor(state: &mut AppState, key: KeyCode, len: usize) -> bool {
    match key {
        KeyCode::Up => state.cursor = state.cursor.saturating_sub(1),
        KeyCode::Down if len > 0 => state.cursor = (state.cursor + 1).min(len - 1),
        _ => return false,
    }
    true
}

fn handle_language_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let languages = Language::ALL;
    if move_cursor(state, key.code, languages.len()) {
        return vec![];
    }
    let chosen = match key.code {
        KeyCode::Enter => languages.get(state.cursor).copied(),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| languages.get(i).copied()),
        _ => None,
    };
    if let Some(language) = chosen {
        let _ = state.voting.choose_language(language);
    }
    vec![]
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // Disabled until the ID is well formed.
            if !VotingSession::can_authenticate(&state.input.text) {
                return vec![];
            }
            let id = state.input.text.clone();
            if state.voting.authenticate(&id).is_ok() {
                clear_voter_input(state);
            }
        }
        KeyCode::Esc => {
            clear_voter_input(state);
            state.voting.back();
        }
        _ => {
            if edit_input(&mut state.input, key) {
                let text = state.input.text.trim();
                state.input_error = if text.is_empty() || VotingSession::can_authenticate(text) {
                    None
                } else {
                    Some(translate(state.voting.language, "invalidVoterId").to_string())
                };
            }
        }
    }
    vec![]
}

fn handle_party_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.voting.catalog().parties.len();
    if move_cursor(state, key.code, count) {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => {
            let party_id = state.voting.catalog().parties.get(state.cursor).map(|p| p.id);
            if let Some(id) = party_id {
                if let Err(e) = state.voting.choose_party(id) {
                    state.flash(e.to_string());
                }
            }
        }
        KeyCode::Esc => {
            state.voting.back();
        }
        _ => {}
    }
    vec![]
}

fn handle_candidate_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let count = state.voting.candidates().len();
    if move_cursor(state, key.code, count) {
        return vec![];
    }
    match key.code {
        KeyCode::Char(' ') => {
            let candidate_id = state.voting.candidates().get(state.cursor).map(|c| c.id);
            if let Some(id) = candidate_id {
                if let Ok(ToggleOutcome::Full) = state.voting.toggle_candidate(id) {
                    state.flash("Three candidates already selected; deselect one first");
                }
            }
        }
        KeyCode::Enter => {
            if let Err(e) = state.voting.proceed_to_review() {
                state.flash(e.to_string());
            }
        }
        KeyCode::Esc => {
            state.voting.back();
        }
        _ => {}
    }
    vec![]
}

fn handle_review_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        // Not de-duplicated: every confirm submits again.
        KeyCode::Enter => match state.voting.begin_submission() {
            Ok(generation) => vec![Action::SubmitVote { generation }],
            Err(e) => {
                state.flash(e.to_string());
                vec![]
            }
        },
        KeyCode::Esc => {
            state.voting.back();
            vec![]
        }
        _ => vec![],
    }
}
