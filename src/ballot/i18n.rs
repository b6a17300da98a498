//! Ballot translations for English, Sinhala and Tamil.
//!
//! Keys missing from a language fall back to English, and keys missing from
//! English fall back to the key itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Si,
    Ta,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Si, Language::Ta];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Si => "si",
            Language::Ta => "ta",
        }
    }

    /// The language's name in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Si => "සිංහල",
            Language::Ta => "தமிழ்",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Si => SI,
            Language::Ta => TA,
        }
    }
}

pub fn translate(lang: Language, key: &'static str) -> &'static str {
    lookup(lang.table(), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("selectLanguage", "Select Your Language"),
    ("voterAuthentication", "Voter Authentication"),
    ("enterVoterId", "Enter Your Voter ID"),
    ("votingInstructions", "Voting Instructions"),
    (
        "presidentialInstructions",
        "Select 3 candidates in order of your preference (1st, 2nd, 3rd choice)",
    ),
    (
        "parliamentaryInstructions",
        "First select your preferred party, then select 3 candidates from that party in order of preference",
    ),
    ("selectParty", "Select Your Party"),
    ("selectCandidates", "Select 3 Candidates (In Order)"),
    ("reviewVote", "Review Your Vote"),
    ("confirmVote", "Confirm Vote"),
    ("voteSubmitted", "Vote Submitted Successfully"),
    ("firstChoice", "1st Choice"),
    ("secondChoice", "2nd Choice"),
    ("thirdChoice", "3rd Choice"),
    ("next", "Next"),
    ("back", "Back"),
    ("submit", "Submit Vote"),
    ("thankYou", "Thank you for voting!"),
    ("selected", "Selected"),
    ("presidentialElection", "Presidential Election"),
    ("parliamentaryElection", "Parliamentary Election"),
    // Kiosk chrome, English only.
    ("authenticate", "Authenticate"),
    ("invalidVoterId", "Voter ID must be at least 6 letters or digits"),
    ("startVoting", "Start Voting"),
    ("submitting", "Submitting your vote..."),
    ("voteReference", "Vote Reference"),
    ("recordedAt", "Recorded At"),
    ("autoReset", "This kiosk will reset automatically"),
];

const SI: &[(&str, &str)] = &[
    ("selectLanguage", "ඔබේ භාෂාව තෝරන්න"),
    ("voterAuthentication", "ඡන්දදායක සත්‍යාපනය"),
    ("enterVoterId", "ඔබේ ඡන්දදායක අංකය ඇතුළත් කරන්න"),
    ("votingInstructions", "ඡන්දය ප්‍රකාශ කිරීමේ උපදෙස්"),
    ("presidentialInstructions", "ඔබේ මනාපය අනුව අපේක්ෂකයින් 3 දෙනෙකු තෝරන්න"),
    (
        "parliamentaryInstructions",
        "පළමුව ඔබේ පක්ෂය තෝරන්න, ඉන්පසු එම පක්ෂයෙන් අපේක්ෂකයින් 3 දෙනෙකු තෝරන්න",
    ),
    ("selectParty", "ඔබේ පක්ෂය තෝරන්න"),
    ("selectCandidates", "අපේක්ෂකයින් 3 දෙනෙකු තෝරන්න"),
    ("reviewVote", "ඔබේ ඡන්දය සමාලෝචනය කරන්න"),
    ("confirmVote", "ඡන්දය තහවුරු කරන්න"),
    ("voteSubmitted", "ඡන්දය සාර්ථකව ඉදිරිපත් කරන ලදී"),
    ("firstChoice", "පළමු තේරීම"),
    ("secondChoice", "දෙවන තේරීම"),
    ("thirdChoice", "තෙවන තේරීම"),
    ("next", "ඊළඟ"),
    ("back", "ආපසු"),
    ("submit", "ඡන්දය ඉදිරිපත් කරන්න"),
    ("thankYou", "ඡන්දය ප්‍රකාශ කිරීම ගැන ස්තූතියි!"),
    ("selected", "තෝරන ලද"),
    ("presidentialElection", "ජනාධිපතිවරණය"),
    ("parliamentaryElection", "පාර්ලිමේන්තු මැතිවරණය"),
];

const TA: &[(&str, &str)] = &[
    ("selectLanguage", "உங்கள் மொழியைத் தேர்ந்தெடுக்கவும்"),
    ("voterAuthentication", "வாக்காளர் அங்கீகாரம்"),
    ("enterVoterId", "உங்கள் வாக்காளர் அடையாள எண்ணை உள்ளிடவும்"),
    ("votingInstructions", "வாக்களிப்பு வழிமுறைகள்"),
    (
        "presidentialInstructions",
        "உங்கள் விருப்பத்தின் அடிப்படையில் 3 வேட்பாளர்களைத் தேர்ந்தெடுக்கவும்",
    ),
    (
        "parliamentaryInstructions",
        "முதலில் உங்கள் கட்சியைத் தேர்ந்தெடுத்து, பின்னர் அந்த கட்சியிலிருந்து 3 வேட்பாளர்களைத் தேர்ந்தெடுக்கவும்",
    ),
    ("selectParty", "உங்கள் கட்சியைத் தேர்ந்தெடுக்கவும்"),
    ("selectCandidates", "3 வேட்பாளர்களைத் தேர்ந்தெடுக்கவும்"),
    ("reviewVote", "உங்கள் வாக்கை சரிபார்க்கவும்"),
    ("confirmVote", "வாக்கை உறுதிப்படுத்தவும்"),
    ("voteSubmitted", "வாக்கு வெற்றிகரமாக சமர்ப்பிக்கப்பட்டது"),
    ("firstChoice", "முதல் தேர்வு"),
    ("secondChoice", "இரண்டாம் தேர்வு"),
    ("thirdChoice", "மூன்றாம் தேர்வு"),
    ("next", "அடுத்து"),
    ("back", "பின்"),
    ("submit", "வாக்கு சமர்ப்பிக்கவும்"),
    ("thankYou", "வாக்களித்ததற்கு நன்றி!"),
    ("selected", "தேர்ந்தெடுக்கப்பட்டது"),
    ("presidentialElection", "ஜனாதிபதி தேர்தல்"),
    ("parliamentaryElection", "பாராளுமன்ற தேர்தல்"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "back"), "Back");
        assert_eq!(translate(Language::Si, "back"), "ආපසු");
        assert_eq!(translate(Language::Ta, "back"), "பின்");
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        assert_eq!(translate(Language::Ta, "startVoting"), "Start Voting");
        assert_eq!(translate(Language::Si, "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_every_language_covers_the_ballot_strings() {
        for lang in [Language::Si, Language::Ta] {
            for (key, _) in EN.iter().take(21) {
                assert!(lookup(lang.table(), key).is_some(), "{} missing {}", lang.code(), key);
            }
        }
    }
}
