use serde::{Deserialize, Serialize};

/// Outcome of a match from the recording player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    #[serde(alias = "Win")]
    Win,
    #[serde(alias = "Loss")]
    Loss,
    #[serde(alias = "Draw")]
    Draw,
}

/// A single imported match, owned by the user who recorded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub date: String,
    #[serde(default)]
    pub hero_played: String,
    #[serde(default)]
    pub opponent_hero: String,
    /// External per-opponent identifier, distinct from the internal account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_gem_id: Option<String>,
    pub result: MatchResult,
    /// Free text, by convention "EventName | Round N"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MatchRecord {
    pub fn new(
        date: impl Into<String>,
        hero_played: impl Into<String>,
        opponent_hero: impl Into<String>,
        result: MatchResult,
    ) -> Self {
        Self {
            date: date.into(),
            hero_played: hero_played.into(),
            opponent_hero: opponent_hero.into(),
            opponent_gem_id: None,
            result,
            notes: None,
        }
    }

    pub fn with_opponent(mut self, gem_id: impl Into<String>) -> Self {
        self.opponent_gem_id = Some(gem_id.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The opponent identifier, ignoring blank values
    pub fn opponent_id(&self) -> Option<&str> {
        self.opponent_gem_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn event_details(&self) -> EventDetails {
        EventDetails::parse(self.notes.as_deref())
    }
}

/// Event name and round extracted from a match's notes.
///
/// The first `|` segment is the event name (trimmed, lower-cased), the
/// second is the round (trimmed). Anything after the second segment is
/// ignored. An event name containing `|` will split early; stored
/// fingerprints depend on this exact parsing so it must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetails {
    pub event_name: String,
    pub round: String,
}

impl EventDetails {
    pub fn parse(notes: Option<&str>) -> Self {
        let Some(notes) = notes else {
            return Self::default();
        };

        let mut segments = notes.split('|');
        let event_name = segments
            .next()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let round = segments
            .next()
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Self { event_name, round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_and_round() {
        let details = EventDetails::parse(Some("  Regional Qualifier | Round 3 "));
        assert_eq!(details.event_name, "regional qualifier");
        assert_eq!(details.round, "Round 3");
    }

    #[test]
    fn missing_round_defaults_to_empty() {
        let details = EventDetails::parse(Some("Armory Night"));
        assert_eq!(details.event_name, "armory night");
        assert_eq!(details.round, "");
    }

    #[test]
    fn missing_notes_default_to_empty() {
        assert_eq!(EventDetails::parse(None), EventDetails::default());
    }

    #[test]
    fn blank_opponent_id_is_ignored() {
        let record = MatchRecord::new("2024-01-01", "a", "b", MatchResult::Win).with_opponent("  ");
        assert_eq!(record.opponent_id(), None);
    }

    #[test]
    fn deserializes_camel_case_with_either_result_casing() {
        let record: MatchRecord = serde_json::from_str(
            r#"{"date":"2024-02-03","heroPlayed":"Dori","opponentHero":"Kano","opponentGemId":"gem-7","result":"Loss"}"#,
        )
        .unwrap();
        assert_eq!(record.result, MatchResult::Loss);
        assert_eq!(record.opponent_id(), Some("gem-7"));
        assert!(record.notes.is_none());

        let lower: MatchRecord =
            serde_json::from_str(r#"{"date":"2024-02-03","result":"draw"}"#).unwrap();
        assert_eq!(lower.result, MatchResult::Draw);
        assert_eq!(lower.hero_played, "");
    }
}
