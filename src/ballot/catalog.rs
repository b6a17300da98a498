//! Candidates and parties on the ballot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionType {
    Presidential,
    Parliamentary,
}

impl ElectionType {
    pub fn toggled(self) -> Self {
        match self {
            ElectionType::Presidential => ElectionType::Parliamentary,
            ElectionType::Parliamentary => ElectionType::Presidential,
        }
    }

    /// Translation key of the election title.
    pub fn title_key(self) -> &'static str {
        match self {
            ElectionType::Presidential => "presidentialElection",
            ElectionType::Parliamentary => "parliamentaryElection",
        }
    }

    pub fn instructions_key(self) -> &'static str {
        match self {
            ElectionType::Presidential => "presidentialInstructions",
            ElectionType::Parliamentary => "parliamentaryInstructions",
        }
    }
}

/// A candidate; `affiliation` is the party for presidential ballots and the
/// constituency for parliamentary ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    #[serde(alias = "party", alias = "constituency")]
    pub affiliation: String,
}

impl Candidate {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: u32,
    pub name: String,
    /// `#RRGGBB`
    pub color: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Party {
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color)
    }
}

pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Everything the voting kiosk can put on a ballot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub presidential: Vec<Candidate>,
    pub parties: Vec<Party>,
}

impl Catalog {
    pub fn new(presidential: Vec<Candidate>, parties: Vec<Party>) -> Self {
        Self {
            presidential,
            parties,
        }
    }

    pub fn party(&self, id: u32) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3B82F6"), Some((0x3B, 0x82, 0xF6)));
        assert_eq!(parse_hex_color("#ef4444"), Some((0xEF, 0x44, 0x44)));
        assert_eq!(parse_hex_color("3B82F6"), None);
        assert_eq!(parse_hex_color("#3B82"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_initials() {
        let c = Candidate {
            id: 101,
            name: "John Smith".into(),
            affiliation: "Colombo District".into(),
        };
        assert_eq!(c.initials(), "JS");
    }

    #[test]
    fn test_candidate_accepts_party_or_constituency() {
        let presidential: Candidate =
            toml::from_str("id = 1\nname = \"Candidate A\"\nparty = \"Progressive Party\"").unwrap();
        assert_eq!(presidential.affiliation, "Progressive Party");
        let parliamentary: Candidate =
            toml::from_str("id = 101\nname = \"John Smith\"\nconstituency = \"Colombo District\"")
                .unwrap();
        assert_eq!(parliamentary.affiliation, "Colombo District");
    }

    #[test]
    fn test_election_type_toggle() {
        assert_eq!(ElectionType::Presidential.toggled(), ElectionType::Parliamentary);
        assert_eq!(ElectionType::Parliamentary.toggled(), ElectionType::Presidential);
    }
}
