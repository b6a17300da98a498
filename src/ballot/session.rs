//! The voter-facing ballot state machine.

use crate::app::event::Generation;
use crate::ballot::auth::validate_voter_id;
use crate::ballot::catalog::{Candidate, Catalog, ElectionType, Party};
use crate::ballot::i18n::Language;
use crate::ballot::screen::Screen;
use crate::ballot::selection::{BallotSelection, ToggleOutcome};
use crate::ballot::submission::VoteReceipt;
use crate::error::BallotError;

pub struct VotingSession {
    pub language: Language,
    pub voter_id: Option<String>,
    pub election_type: ElectionType,
    pub selected_party: Option<Party>,
    pub selection: BallotSelection,
    pub submitted: bool,
    pub submitting: bool,
    pub receipt: Option<VoteReceipt>,
    screen: Screen,
    catalog: Catalog,
    generation: Generation,
}

impl VotingSession {
    pub fn new(catalog: Catalog, election_type: ElectionType) -> Self {
        Self {
            language: Language::En,
            voter_id: None,
            election_type,
            selected_party: None,
            selection: BallotSelection::new(),
            submitted: false,
            submitting: false,
            receipt: None,
            screen: Screen::Language,
            catalog,
            generation: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn expect_screen(&self, screen: Screen) -> Result<(), BallotError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(BallotError::WrongScreen)
        }
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
    }

    pub fn choose_language(&mut self, language: Language) -> Result<(), BallotError> {
        self.expect_screen(Screen::Language)?;
        self.language = language;
        self.navigate(Screen::Authentication);
        Ok(())
    }

    /// The authenticate action is enabled exactly while this holds.
    pub fn can_authenticate(input: &str) -> bool {
        validate_voter_id(input)
    }

    pub fn authenticate(&mut self, input: &str) -> Result<(), BallotError> {
        self.expect_screen(Screen::Authentication)?;
        if !validate_voter_id(input) {
            return Err(BallotError::InvalidVoterId);
        }
        self.voter_id = Some(input.trim().to_string());
        self.navigate(Screen::Instructions);
        Ok(())
    }

    pub fn start_voting(&mut self) -> Result<(), BallotError> {
        self.expect_screen(Screen::Instructions)?;
        self.navigate(Screen::ballot_entry(self.election_type));
        Ok(())
    }

    /// Pick a party. Choosing a different party drops candidates already
    /// ranked from the previous one.
    pub fn choose_party(&mut self, party_id: u32) -> Result<(), BallotError> {
        self.expect_screen(Screen::PartySelection)?;
        let party = self
            .catalog
            .party(party_id)
            .cloned()
            .ok_or(BallotError::UnknownParty(party_id))?;
        if self.selected_party.as_ref().map(|p| p.id) != Some(party.id) {
            self.selection.clear();
        }
        self.selected_party = Some(party);
        self.navigate(Screen::CandidateSelection);
        Ok(())
    }

    /// Candidates offered on the current ballot.
    pub fn candidates(&self) -> &[Candidate] {
        match self.election_type {
            ElectionType::Presidential => &self.catalog.presidential,
            ElectionType::Parliamentary => self
                .selected_party
                .as_ref()
                .map(|p| p.candidates.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Affiliation shown next to a ranked candidate.
    pub fn affiliation_of<'a>(&'a self, candidate: &'a Candidate) -> &'a str {
        match (&self.election_type, &self.selected_party) {
            (ElectionType::Parliamentary, Some(party)) => &party.name,
            _ => &candidate.affiliation,
        }
    }

    pub fn toggle_candidate(&mut self, candidate_id: u32) -> Result<ToggleOutcome, BallotError> {
        self.expect_screen(Screen::CandidateSelection)?;
        let candidate = self
            .candidates()
            .iter()
            .find(|c| c.id == candidate_id)
            .cloned()
            .ok_or(BallotError::UnknownCandidate(candidate_id))?;
        Ok(self.selection.toggle(&candidate))
    }

    pub fn can_review(&self) -> bool {
        self.screen == Screen::CandidateSelection && self.selection.is_complete()
    }

    pub fn proceed_to_review(&mut self) -> Result<(), BallotError> {
        self.expect_screen(Screen::CandidateSelection)?;
        if !self.selection.is_complete() {
            return Err(BallotError::SelectionIncomplete(self.selection.len()));
        }
        self.navigate(Screen::Review);
        Ok(())
    }

    /// Follow the back edge of the current screen, if any.
    pub fn back(&mut self) -> bool {
        match self.screen.back(self.election_type) {
            Some(screen) => {
                self.navigate(screen);
                true
            }
            None => false,
        }
    }

    /// Confirm the reviewed ballot. Repeated confirmations are not merged:
    /// each returns a generation the caller submits separately.
    pub fn begin_submission(&mut self) -> Result<Generation, BallotError> {
        self.expect_screen(Screen::Review)?;
        if !self.selection.is_complete() {
            return Err(BallotError::SelectionIncomplete(self.selection.len()));
        }
        self.submitting = true;
        tracing::info!(generation = self.generation, "vote submission started");
        Ok(self.generation)
    }

    /// Show the success screen for `receipt`. Returns false when the receipt
    /// belongs to a session that has since been reset.
    pub fn complete_submission(&mut self, generation: Generation, receipt: VoteReceipt) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, "discarding stale vote receipt");
            return false;
        }
        self.submitting = false;
        self.submitted = true;
        self.receipt = Some(receipt);
        self.navigate(Screen::Success);
        true
    }

    /// Scheduled reset; ignored if the session was already reset since.
    pub fn auto_reset(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        self.reset();
        true
    }

    /// Back to the language screen with nothing chosen. The election type is
    /// kiosk configuration and survives.
    pub fn reset(&mut self) {
        self.language = Language::En;
        self.voter_id = None;
        self.selected_party = None;
        self.selection.clear();
        self.submitted = false;
        self.submitting = false;
        self.receipt = None;
        self.generation += 1;
        self.navigate(Screen::Language);
    }

    /// Admin/demo switch between presidential and parliamentary ballots.
    pub fn switch_election_type(&mut self) {
        self.election_type = self.election_type.toggled();
        self.selected_party = None;
        self.selection.clear();
        if self.screen.is_mid_ballot() {
            self.navigate(Screen::Instructions);
        }
        tracing::info!(election = ?self.election_type, "election type switched");
    }
}

#[cfg(test)]
impl VotingSession {
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, name: &str, affiliation: &str) -> Candidate {
        Candidate {
            id,
            name: name.into(),
            affiliation: affiliation.into(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                candidate(1, "Candidate A", "Progressive Party"),
                candidate(2, "Candidate B", "Democratic Alliance"),
                candidate(3, "Candidate C", "People's Movement"),
                candidate(4, "Candidate D", "National Unity"),
            ],
            vec![
                Party {
                    id: 1,
                    name: "Progressive Party".into(),
                    color: "#3B82F6".into(),
                    candidates: vec![
                        candidate(101, "John Smith", "Colombo District"),
                        candidate(102, "Mary Johnson", "Colombo District"),
                        candidate(103, "David Wilson", "Colombo District"),
                    ],
                },
                Party {
                    id: 2,
                    name: "Democratic Alliance".into(),
                    color: "#EF4444".into(),
                    candidates: vec![candidate(201, "Robert Lee", "Kandy District")],
                },
            ],
        )
    }

    fn at_candidates(election: ElectionType) -> VotingSession {
        let mut s = VotingSession::new(catalog(), election);
        s.choose_language(Language::Ta).unwrap();
        s.authenticate("abc123").unwrap();
        s.start_voting().unwrap();
        if election == ElectionType::Parliamentary {
            s.choose_party(1).unwrap();
        }
        s
    }

    fn at_review() -> VotingSession {
        let mut s = at_candidates(ElectionType::Presidential);
        for id in [1, 2, 3] {
            s.toggle_candidate(id).unwrap();
        }
        s.proceed_to_review().unwrap();
        s
    }

    fn receipt(reference: &str) -> VoteReceipt {
        VoteReceipt {
            reference: reference.into(),
            recorded_at: "2024-01-01 10:00:00".into(),
        }
    }

    #[test]
    fn test_presidential_flow() {
        let s = at_candidates(ElectionType::Presidential);
        assert_eq!(s.language, Language::Ta);
        assert_eq!(s.voter_id.as_deref(), Some("abc123"));
        assert_eq!(s.screen(), Screen::CandidateSelection);
        assert_eq!(s.candidates().len(), 4);
    }

    #[test]
    fn test_parliamentary_flow_goes_through_party() {
        let mut s = VotingSession::new(catalog(), ElectionType::Parliamentary);
        s.choose_language(Language::En).unwrap();
        s.authenticate("VOTER1").unwrap();
        s.start_voting().unwrap();
        assert_eq!(s.screen(), Screen::PartySelection);
        assert_eq!(s.choose_party(99), Err(BallotError::UnknownParty(99)));
        s.choose_party(1).unwrap();
        assert_eq!(s.screen(), Screen::CandidateSelection);
        assert_eq!(s.candidates()[0].name, "John Smith");
        assert!(s.back());
        assert_eq!(s.screen(), Screen::PartySelection);
    }

    #[test]
    fn test_presidential_back_returns_to_instructions() {
        let mut s = at_candidates(ElectionType::Presidential);
        assert!(s.back());
        assert_eq!(s.screen(), Screen::Instructions);
        assert!(!s.back());
    }

    #[test]
    fn test_authentication_rejects_short_ids() {
        let mut s = VotingSession::new(catalog(), ElectionType::Presidential);
        s.choose_language(Language::En).unwrap();
        assert!(!VotingSession::can_authenticate("abc12"));
        assert!(VotingSession::can_authenticate("abc123"));
        assert_eq!(s.authenticate("abc12"), Err(BallotError::InvalidVoterId));
        assert_eq!(s.screen(), Screen::Authentication);
        assert!(s.voter_id.is_none());
    }

    #[test]
    fn test_review_needs_exactly_three() {
        let mut s = at_candidates(ElectionType::Presidential);
        s.toggle_candidate(1).unwrap();
        s.toggle_candidate(2).unwrap();
        assert!(!s.can_review());
        assert_eq!(s.proceed_to_review(), Err(BallotError::SelectionIncomplete(2)));
        s.toggle_candidate(3).unwrap();
        assert_eq!(s.toggle_candidate(4), Ok(ToggleOutcome::Full));
        assert!(s.can_review());
        s.proceed_to_review().unwrap();
        assert_eq!(s.screen(), Screen::Review);
        assert!(s.back());
        assert_eq!(s.screen(), Screen::CandidateSelection);
        assert_eq!(s.selection.len(), 3);
    }

    #[test]
    fn test_changing_party_clears_selection() {
        let mut s = at_candidates(ElectionType::Parliamentary);
        s.toggle_candidate(101).unwrap();
        s.back();
        s.choose_party(1).unwrap();
        assert_eq!(s.selection.len(), 1);
        s.back();
        s.choose_party(2).unwrap();
        assert!(s.selection.choices().is_empty());
        assert_eq!(s.affiliation_of(&s.candidates()[0]), "Democratic Alliance");
    }

    #[test]
    fn test_switch_election_type_resets_ballot() {
        let mut s = at_candidates(ElectionType::Parliamentary);
        s.toggle_candidate(101).unwrap();
        s.switch_election_type();
        assert_eq!(s.election_type, ElectionType::Presidential);
        assert!(s.selected_party.is_none());
        assert!(s.selection.choices().is_empty());
        assert_eq!(s.screen(), Screen::Instructions);
    }

    #[test]
    fn test_double_submission_is_not_deduplicated() {
        let mut s = at_review();
        let first = s.begin_submission().unwrap();
        let second = s.begin_submission().unwrap();
        assert_eq!(first, second);
        assert!(s.submitting);

        let a = VoteReceipt::issue();
        let b = VoteReceipt::issue();
        assert_ne!(a.reference, b.reference);
        assert!(s.complete_submission(first, a));
        assert!(s.complete_submission(second, b.clone()));
        assert_eq!(s.screen(), Screen::Success);
        assert_eq!(s.receipt, Some(b));
        assert!(s.submitted);
    }

    #[test]
    fn test_auto_reset_restores_initial_state() {
        let mut s = at_review();
        let generation = s.begin_submission().unwrap();
        s.complete_submission(generation, receipt("VT000001AAAAAA"));
        assert!(s.auto_reset(generation));
        assert_eq!(s.screen(), Screen::Language);
        assert_eq!(s.language, Language::En);
        assert!(s.voter_id.is_none());
        assert!(s.selection.choices().is_empty());
        assert!(!s.submitted);
        assert!(s.receipt.is_none());
        // The second scheduled reset from a double submission is stale.
        assert!(!s.auto_reset(generation));
    }

    #[test]
    fn test_receipt_after_reset_is_dropped() {
        let mut s = at_review();
        let generation = s.begin_submission().unwrap();
        s.reset();
        assert!(!s.complete_submission(generation, receipt("VT000002BBBBBB")));
        assert_eq!(s.screen(), Screen::Language);
        assert!(s.receipt.is_none());
    }

    #[test]
    fn test_toggle_rejects_candidate_off_ballot() {
        let mut s = at_candidates(ElectionType::Parliamentary);
        // 201 belongs to a party that was not chosen.
        assert_eq!(s.toggle_candidate(201), Err(BallotError::UnknownCandidate(201)));
        assert!(s.selection.choices().is_empty());
    }

    #[test]
    fn test_actions_check_screen() {
        let mut s = VotingSession::new(catalog(), ElectionType::Presidential);
        assert_eq!(s.authenticate("abc123"), Err(BallotError::WrongScreen));
        assert_eq!(s.begin_submission(), Err(BallotError::WrongScreen));
        assert_eq!(s.toggle_candidate(1), Err(BallotError::WrongScreen));
    }
}
