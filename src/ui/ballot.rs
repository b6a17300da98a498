//! Voting kiosk screens.
//!
//! Every label goes through [`translate`] so the whole flow follows the
//! language picked on the first screen.

use crate::app::state::AppState;
use crate::ballot::i18n::{translate, Language};
use crate::ballot::screen::Screen;
use crate::ballot::selection::{rank_label_key, MAX_SELECTIONS};
use crate::ui::input_box;
use crate::ui::layout::{centered, compute_voting_layout};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let layout = compute_voting_layout(area);
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);

    render_header(frame, layout.header, state);

    match session.screen() {
        Screen::Language => render_language(frame, layout.body, state),
        Screen::Authentication => {
            let field = centered(layout.body, 60, 4);
            let feedback = state
                .input_error
                .as_ref()
                .map(|e| (e.clone(), Theme::error()));
            input_box::render(frame, field, t("enterVoterId"), &state.input, feedback);
        }
        Screen::Instructions => render_instructions(frame, layout.body, state),
        Screen::PartySelection => render_parties(frame, layout.body, state),
        Screen::CandidateSelection => render_candidates(frame, layout.body, state),
        Screen::Review => render_review(frame, layout.body, state),
        Screen::Success => render_success(frame, layout.body, state),
    }

    frame.render_widget(Paragraph::new(footer_hints(state)), layout.footer);

    if session.submitting {
        render_busy(frame, layout.body, t("submitting"));
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let line = Line::from(vec![
        Span::styled(t(session.election_type.title_key()), Theme::title()),
        Span::styled("  ·  ", Theme::label()),
        Span::styled(t(session.screen().title_key()), Theme::value()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn render_language(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = Language::ALL
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), Theme::label()),
                Span::styled(lang.native_name(), Theme::value()),
                Span::styled(format!("  [{}]", lang.code().to_uppercase()), Theme::timestamp()),
            ]))
        })
        .collect();
    let list_area = centered(area, 40, Language::ALL.len() as u16 + 2);
    render_list(frame, list_area, items, state.cursor);
}

fn render_instructions(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);
    let mut lines = vec![
        Line::from(Span::styled(t(session.election_type.instructions_key()), Theme::value())),
        Line::default(),
    ];
    if let Some(id) = &session.voter_id {
        lines.push(Line::from(Span::styled(format!("ID: {}", id), Theme::label())));
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled("Enter ", Theme::warning()),
        Span::styled(t("startVoting"), Theme::highlight()),
    ]));

    let block = Block::default()
        .title(format!(" {} ", t("votingInstructions")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        centered(area, 70, 10),
    );
}

fn render_parties(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let selected_id = session.selected_party.as_ref().map(|p| p.id);
    let items: Vec<ListItem> = session
        .catalog()
        .parties
        .iter()
        .map(|party| {
            let swatch = match party.rgb() {
                Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
                None => Theme::label(),
            };
            let mut spans = vec![
                Span::styled(" ■ ", swatch),
                Span::styled(party.name.clone(), Theme::value()),
            ];
            if selected_id == Some(party.id) {
                spans.push(Span::styled(
                    format!("  ✓ {}", translate(session.language, "selected")),
                    Theme::success(),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    render_list(frame, area, items, state.cursor);
}

fn render_candidates(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = session
        .candidates()
        .iter()
        .map(|candidate| {
            let badge = match session.selection.rank_of(candidate.id) {
                Some(rank) => Span::styled(format!(" [{}] ", rank), Theme::success()),
                None => Span::styled(" [ ] ", Theme::label()),
            };
            ListItem::new(Line::from(vec![
                badge,
                Span::styled(format!("{:<3} ", candidate.initials()), Theme::timestamp()),
                Span::styled(candidate.name.clone(), Theme::value()),
                Span::styled(format!("  {}", session.affiliation_of(candidate)), Theme::label()),
            ]))
        })
        .collect();
    render_list(frame, chunks[0], items, state.cursor);

    let count_style = if session.selection.is_complete() {
        Theme::success()
    } else {
        Theme::warning()
    };
    let progress = Line::from(vec![
        Span::styled(
            format!(" {} {}/{}", t("selected"), session.selection.len(), MAX_SELECTIONS),
            count_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(progress), chunks[1]);
}

fn render_review(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(party) = &session.selected_party {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t("selectParty")), Theme::label()),
            Span::styled(party.name.clone(), Theme::value()),
        ]));
        lines.push(Line::default());
    }
    for choice in session.selection.choices() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", t(rank_label_key(choice.rank))), Theme::warning()),
            Span::styled(choice.candidate.name.clone(), Theme::value()),
            Span::styled(
                format!("  {}", session.affiliation_of(&choice.candidate)),
                Theme::label(),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Enter ", Theme::warning()),
        Span::styled(t("submit"), Theme::highlight()),
    ]));

    let block = Block::default()
        .title(format!(" {} ", t("confirmVote")))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(Paragraph::new(lines).block(block), centered(area, 70, 10));
}

fn render_success(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);

    let mut lines = vec![
        Line::from(Span::styled(t("voteSubmitted"), Theme::success())),
        Line::from(Span::styled(t("thankYou"), Theme::value())),
        Line::default(),
    ];
    if let Some(receipt) = &session.receipt {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t("voteReference")), Theme::label()),
            Span::styled(receipt.reference.clone(), Theme::highlight()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t("recordedAt")), Theme::label()),
            Span::styled(receipt.recorded_at.clone(), Theme::timestamp()),
        ]));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(t("autoReset"), Theme::disabled())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_GREEN));
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        centered(area, 60, 9),
    );
}

fn render_busy(frame: &mut Frame, area: Rect, text: &str) {
    let popup = centered(area, 40, 3);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    frame.render_widget(
        Paragraph::new(Span::styled(text, Theme::warning()))
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}

fn render_list(frame: &mut Frame, area: Rect, items: Vec<ListItem>, cursor: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::highlight())
        .highlight_symbol("▸");
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn footer_hints(state: &AppState) -> Line<'static> {
    let session = &state.voting;
    let t = |key: &'static str| translate(session.language, key);
    let text = |s: String| Span::styled(s, Theme::label());

    let mut spans = vec![text(" ".to_string())];
    match session.screen() {
        Screen::Language => spans.push(text("↑↓ / 1-3 choose · Enter confirm".to_string())),
        Screen::Authentication => {
            spans.push(text(format!("Enter {} · Esc {}", t("authenticate"), t("back"))))
        }
        Screen::Instructions => spans.push(text(format!("Enter {}", t("startVoting")))),
        Screen::PartySelection => {
            spans.push(text(format!("↑↓ choose · Enter {} · Esc {}", t("next"), t("back"))))
        }
        Screen::CandidateSelection => {
            // Proceeding is dimmed until exactly three are ranked.
            let next_style = if session.can_review() {
                Theme::value()
            } else {
                Theme::disabled()
            };
            spans.push(text("↑↓ move · Space select · ".to_string()));
            spans.push(Span::styled(format!("Enter {}", t("next")), next_style));
            spans.push(text(format!(" · Esc {}", t("back"))));
        }
        Screen::Review => spans.push(text(format!("Enter {} · Esc {}", t("submit"), t("back")))),
        Screen::Success => {}
    }
    spans.push(text("   F5 switch ballot".to_string()));
    Line::from(spans)
}
