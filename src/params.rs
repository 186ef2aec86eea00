// src/params.rs
use std::fmt;

use crate::error::{Result, ShotMapError};

pub const MISSING_INPUT: &str = "Please input both player and season to generate the shot map.";

/// Free-text player name as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            Err(ShotMapError::InvalidInput(s!(MISSING_INPUT)))
        } else if s.chars().count() > 100 {
            Err(ShotMapError::InvalidInput(format!("Player name \"{s}\" is too long.")))
        } else if s.chars().any(|c| c.is_control()) {
            Err(ShotMapError::InvalidInput(s!("Player name contains control characters.")))
        } else {
            Ok(Self(s!(s)))
        }
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Season key as understat uses it: the starting year, "2022" for 2022/23.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Season(String);

impl Season {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShotMapError::InvalidInput(s!(MISSING_INPUT)));
        }
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShotMapError::InvalidInput(format!(
                "Season \"{s}\" should be a starting year like 2022."
            )));
        }
        Ok(Self(s!(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> u32 {
        // parse() guarantees four ASCII digits
        self.0.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
    }

    /// "2022" → "2022-23"
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, (self.year() + 1) % 100)
    }
}

impl AsRef<str> for Season {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One validated run: who and which season.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub player: PlayerName,
    pub season: Season,
}

impl Request {
    pub fn parse(player: &str, season: &str) -> Result<Self> {
        if player.trim().is_empty() || season.trim().is_empty() {
            return Err(ShotMapError::InvalidInput(s!(MISSING_INPUT)));
        }
        Ok(Self { player: PlayerName::parse(player)?, season: Season::parse(season)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn a_plain_name_is_valid() {
        assert_ok!(PlayerName::parse("Erling Haaland"));
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        assert_err!(PlayerName::parse("   "));
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(PlayerName::parse("  Salah ").unwrap().as_ref(), "Salah");
    }

    #[test]
    fn a_name_longer_than_100_chars_is_rejected() {
        assert_err!(PlayerName::parse(&"a".repeat(101)));
    }

    #[test]
    fn season_must_be_a_four_digit_year() {
        assert_ok!(Season::parse("2022"));
        assert_err!(Season::parse("22"));
        assert_err!(Season::parse("2022/23"));
        assert_err!(Season::parse("abcd"));
    }

    #[test]
    fn season_label_wraps_the_century() {
        assert_eq!(Season::parse("2022").unwrap().label(), "2022-23");
        assert_eq!(Season::parse("2008").unwrap().label(), "2008-09");
        assert_eq!(Season::parse("1999").unwrap().label(), "1999-00");
    }

    #[test]
    fn missing_input_reports_the_form_message() {
        let err = Request::parse("", "2022").unwrap_err();
        assert_eq!(err.to_string(), MISSING_INPUT);
        let err = Request::parse("Erling Haaland", " ").unwrap_err();
        assert_eq!(err.to_string(), MISSING_INPUT);
    }
}
