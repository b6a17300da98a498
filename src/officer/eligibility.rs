//! Eligibility rules for the polling center this kiosk serves.

use crate::officer::voter::Voter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: String,
}

impl Eligibility {
    fn denied(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: reason.into(),
        }
    }
}

/// Decide whether `voter` may vote at `polling_center`.
///
/// A missing voter, an unregistered voter and a voter assigned elsewhere are
/// all ineligible, checked in that order.
pub fn check_eligibility(voter: Option<&Voter>, polling_center: &str) -> Eligibility {
    let Some(voter) = voter else {
        return Eligibility::denied("Voter not found in electoral database");
    };

    if !voter.registered {
        return Eligibility::denied("Voter is not registered on the electoral list");
    }

    if voter.assigned_center != polling_center {
        return Eligibility::denied(format!(
            "Voter is assigned to {}, not this polling center",
            voter.assigned_center
        ));
    }

    Eligibility {
        eligible: true,
        reason: "Voter is eligible to vote at this polling center".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: &str = "Colombo Central School";

    fn voter(center: &str, registered: bool) -> Voter {
        Voter {
            nic: "123456789012".into(),
            full_name: "Saman Perera".into(),
            age: 35,
            district: "Colombo".into(),
            assigned_center: center.into(),
            registered,
        }
    }

    #[test]
    fn test_registered_voter_at_this_center_is_eligible() {
        let result = check_eligibility(Some(&voter(CENTER, true)), CENTER);
        assert!(result.eligible);
    }

    #[test]
    fn test_wrong_center_names_assigned_center() {
        let result = check_eligibility(Some(&voter("Kandy Royal College", true)), CENTER);
        assert!(!result.eligible);
        assert!(result.reason.contains("Kandy Royal College"));
    }

    #[test]
    fn test_unregistered_is_checked_before_center() {
        let result = check_eligibility(Some(&voter("Kandy Royal College", false)), CENTER);
        assert!(!result.eligible);
        assert!(result.reason.contains("not registered"));
    }

    #[test]
    fn test_missing_voter() {
        let result = check_eligibility(None, CENTER);
        assert!(!result.eligible);
        assert!(result.reason.contains("not found in electoral database"));
    }
}
