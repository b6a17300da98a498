//! Ranked choice of up to three candidates.

use crate::ballot::catalog::Candidate;

pub const MAX_SELECTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedChoice {
    pub candidate: Candidate,
    pub rank: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(u8),
    Removed,
    /// Three already chosen and this candidate is not one of them.
    Full,
}

/// Invariant: at most [`MAX_SELECTIONS`] entries, no candidate twice, ranks
/// exactly `1..=len` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotSelection {
    choices: Vec<RankedChoice>,
}

impl BallotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, candidate: &Candidate) -> ToggleOutcome {
        if let Some(idx) = self.choices.iter().position(|c| c.candidate.id == candidate.id) {
            self.choices.remove(idx);
            self.renumber();
            return ToggleOutcome::Removed;
        }
        if self.choices.len() >= MAX_SELECTIONS {
            return ToggleOutcome::Full;
        }
        let rank = self.choices.len() as u8 + 1;
        self.choices.push(RankedChoice {
            candidate: candidate.clone(),
            rank,
        });
        ToggleOutcome::Added(rank)
    }

    fn renumber(&mut self) {
        for (i, choice) in self.choices.iter_mut().enumerate() {
            choice.rank = i as u8 + 1;
        }
    }

    pub fn rank_of(&self, candidate_id: u32) -> Option<u8> {
        self.choices
            .iter()
            .find(|c| c.candidate.id == candidate_id)
            .map(|c| c.rank)
    }

    pub fn choices(&self) -> &[RankedChoice] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Review requires exactly three ranked candidates.
    pub fn is_complete(&self) -> bool {
        self.choices.len() == MAX_SELECTIONS
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }
}

/// Translation key for a rank label.
pub fn rank_label_key(rank: u8) -> &'static str {
    match rank {
        1 => "firstChoice",
        2 => "secondChoice",
        _ => "thirdChoice",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: u32, name: &str) -> Candidate {
        Candidate {
            id,
            name: name.into(),
            affiliation: "Independent".into(),
        }
    }

    fn ranks(sel: &BallotSelection) -> Vec<(u32, u8)> {
        sel.choices().iter().map(|c| (c.candidate.id, c.rank)).collect()
    }

    #[test]
    fn test_remove_middle_closes_gap() {
        let (a, b, c) = (candidate(1, "A"), candidate(2, "B"), candidate(3, "C"));
        let mut sel = BallotSelection::new();
        assert_eq!(sel.toggle(&a), ToggleOutcome::Added(1));
        assert_eq!(sel.toggle(&b), ToggleOutcome::Added(2));
        assert_eq!(sel.toggle(&c), ToggleOutcome::Added(3));
        assert!(sel.is_complete());
        assert_eq!(sel.toggle(&b), ToggleOutcome::Removed);
        assert_eq!(ranks(&sel), vec![(1, 1), (3, 2)]);
        assert!(!sel.is_complete());
    }

    #[test]
    fn test_fourth_candidate_is_noop() {
        let mut sel = BallotSelection::new();
        for id in 1..=3 {
            sel.toggle(&candidate(id, "x"));
        }
        assert_eq!(sel.toggle(&candidate(4, "D")), ToggleOutcome::Full);
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.rank_of(4), None);
    }

    #[test]
    fn test_ranks_stay_contiguous_over_toggle_sequence() {
        let pool: Vec<_> = (1..=5).map(|id| candidate(id, "x")).collect();
        let sequence = [1, 2, 3, 4, 2, 5, 1, 1, 3, 4, 2, 5, 5, 3];
        let mut sel = BallotSelection::new();
        let mut expected: Vec<u32> = Vec::new();
        for id in sequence {
            sel.toggle(&pool[id as usize - 1]);
            if let Some(pos) = expected.iter().position(|&e| e == id) {
                expected.remove(pos);
            } else if expected.len() < MAX_SELECTIONS {
                expected.push(id);
            }
            assert!(sel.len() <= MAX_SELECTIONS);
            let got = ranks(&sel);
            let want: Vec<(u32, u8)> = expected
                .iter()
                .enumerate()
                .map(|(i, &id)| (id, i as u8 + 1))
                .collect();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_rank_label_key() {
        assert_eq!(rank_label_key(1), "firstChoice");
        assert_eq!(rank_label_key(3), "thirdChoice");
    }
}
