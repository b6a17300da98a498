use crate::ballot::catalog::ElectionType;

/// The voting kiosk shows exactly one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Language,
    Authentication,
    Instructions,
    PartySelection,
    CandidateSelection,
    Review,
    Success,
}

impl Screen {
    /// Where "start voting" leads from the instructions.
    pub fn ballot_entry(election: ElectionType) -> Screen {
        match election {
            ElectionType::Parliamentary => Screen::PartySelection,
            ElectionType::Presidential => Screen::CandidateSelection,
        }
    }

    /// The back edge from this screen, if it has one.
    pub fn back(self, election: ElectionType) -> Option<Screen> {
        match self {
            Screen::Authentication => Some(Screen::Language),
            Screen::PartySelection => Some(Screen::Instructions),
            Screen::CandidateSelection => match election {
                ElectionType::Parliamentary => Some(Screen::PartySelection),
                ElectionType::Presidential => Some(Screen::Instructions),
            },
            Screen::Review => Some(Screen::CandidateSelection),
            Screen::Language | Screen::Instructions | Screen::Success => None,
        }
    }

    /// Screens that show part of a ballot in progress.
    pub fn is_mid_ballot(self) -> bool {
        matches!(
            self,
            Screen::PartySelection | Screen::CandidateSelection | Screen::Review
        )
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Language => "selectLanguage",
            Screen::Authentication => "voterAuthentication",
            Screen::Instructions => "votingInstructions",
            Screen::PartySelection => "selectParty",
            Screen::CandidateSelection => "selectCandidates",
            Screen::Review => "reviewVote",
            Screen::Success => "voteSubmitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_back_depends_on_election() {
        assert_eq!(
            Screen::CandidateSelection.back(ElectionType::Parliamentary),
            Some(Screen::PartySelection)
        );
        assert_eq!(
            Screen::CandidateSelection.back(ElectionType::Presidential),
            Some(Screen::Instructions)
        );
    }

    #[test]
    fn test_terminal_screens_have_no_back() {
        assert_eq!(Screen::Success.back(ElectionType::Presidential), None);
        assert_eq!(Screen::Language.back(ElectionType::Parliamentary), None);
    }

    #[test]
    fn test_ballot_entry() {
        assert_eq!(Screen::ballot_entry(ElectionType::Presidential), Screen::CandidateSelection);
        assert_eq!(Screen::ballot_entry(ElectionType::Parliamentary), Screen::PartySelection);
    }
}
