pub const MIN_VOTER_ID_LEN: usize = 6;

/// A voter ID is at least six ASCII letters or digits. No identity check is
/// made beyond that.
pub fn validate_voter_id(input: &str) -> bool {
    let id = input.trim();
    id.len() >= MIN_VOTER_ID_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_voter_id() {
        assert!(!validate_voter_id("abc12"));
        assert!(validate_voter_id("abc123"));
        assert!(validate_voter_id("  ABC123xyz  "));
        assert!(!validate_voter_id("abc-123"));
        assert!(!validate_voter_id("abc 123"));
        assert!(!validate_voter_id(""));
        assert!(!validate_voter_id("ඡන්දදායක"));
    }
}
