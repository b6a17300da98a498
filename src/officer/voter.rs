use serde::{Deserialize, Serialize};

/// Length of a national identity card number.
pub const NIC_LEN: usize = 12;

/// A registered voter as held in the electoral roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub nic: String,
    pub full_name: String,
    pub age: u8,
    pub district: String,
    pub assigned_center: String,
    #[serde(default = "default_registered")]
    pub registered: bool,
}

fn default_registered() -> bool {
    true
}

/// Live hint shown under the NIC field while the officer types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicFeedback {
    Empty,
    NeedMore(usize),
    Valid,
    NonDigit,
    TooLong,
}

impl NicFeedback {
    pub fn message(&self) -> String {
        match self {
            NicFeedback::Empty => String::new(),
            NicFeedback::NeedMore(n) => format!("Enter {} more digits", n),
            NicFeedback::Valid => "Valid NIC format ✓".to_string(),
            NicFeedback::NonDigit => "Invalid NIC format - only digits allowed".to_string(),
            NicFeedback::TooLong => "NIC should be exactly 12 digits".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NicFeedback::NonDigit | NicFeedback::TooLong)
    }
}

/// A NIC is exactly twelve ASCII digits.
pub fn validate_nic(nic: &str) -> bool {
    nic.len() == NIC_LEN && nic.bytes().all(|b| b.is_ascii_digit())
}

pub fn nic_feedback(input: &str) -> NicFeedback {
    let nic = input.trim();
    let len = nic.chars().count();
    if len == 0 {
        NicFeedback::Empty
    } else if len < NIC_LEN {
        NicFeedback::NeedMore(NIC_LEN - len)
    } else if len == NIC_LEN {
        if validate_nic(nic) {
            NicFeedback::Valid
        } else {
            NicFeedback::NonDigit
        }
    } else {
        NicFeedback::TooLong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nic() {
        assert!(validate_nic("123456789012"));
        assert!(!validate_nic("12345678901"));
        assert!(!validate_nic("1234567890123"));
        assert!(!validate_nic("12345678901a"));
        assert!(!validate_nic(""));
        // Non-ASCII digits are rejected even though they are numeric.
        assert!(!validate_nic("١٢٣٤٥٦٧٨٩٠١٢"));
    }

    #[test]
    fn test_nic_feedback() {
        assert_eq!(nic_feedback(""), NicFeedback::Empty);
        assert_eq!(nic_feedback("   "), NicFeedback::Empty);
        assert_eq!(nic_feedback("1234"), NicFeedback::NeedMore(8));
        assert_eq!(nic_feedback("123456789012"), NicFeedback::Valid);
        assert_eq!(nic_feedback("12345678901x"), NicFeedback::NonDigit);
        assert_eq!(nic_feedback("1234567890123"), NicFeedback::TooLong);
        assert_eq!(NicFeedback::NeedMore(3).message(), "Enter 3 more digits");
        assert!(NicFeedback::TooLong.is_error());
        assert!(!NicFeedback::Valid.is_error());
    }
}
