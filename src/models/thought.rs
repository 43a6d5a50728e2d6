use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The recognized mood tags. "All" and "None" are filter values, not moods,
/// so they are deliberately absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Contemplative,
    Anxious,
    Grateful,
    Hopeful,
    Reflective,
    Calm,
    Excited,
    Peaceful,
}

impl Mood {
    pub fn parse(value: &str) -> Option<Mood> {
        match value {
            "Happy" => Some(Mood::Happy),
            "Sad" => Some(Mood::Sad),
            "Contemplative" => Some(Mood::Contemplative),
            "Anxious" => Some(Mood::Anxious),
            "Grateful" => Some(Mood::Grateful),
            "Hopeful" => Some(Mood::Hopeful),
            "Reflective" => Some(Mood::Reflective),
            "Calm" => Some(Mood::Calm),
            "Excited" => Some(Mood::Excited),
            "Peaceful" => Some(Mood::Peaceful),
            _ => None,
        }
    }
}

/// A single journal entry. Immutable once created; there is no edit or
/// delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    pub id: Uuid,
    /// `None` for anonymous submissions.
    pub author_id: Option<Uuid>,
    pub content: String,
    pub is_public: bool,
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}

/// Visibility partition requested on listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    All,
    Me,
}

/// Mood filter derived from the raw `mood` query value.
///
/// "All", an absent value, and anything unrecognized all mean "no mood
/// filtering"; "None" matches only thoughts without a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodFilter {
    Any,
    Unset,
    Is(Mood),
}

impl MoodFilter {
    pub fn from_query(raw: Option<&str>) -> MoodFilter {
        match raw {
            None | Some("All") => MoodFilter::Any,
            Some("None") => MoodFilter::Unset,
            Some(other) => match Mood::parse(other) {
                Some(mood) => MoodFilter::Is(mood),
                None => MoodFilter::Any,
            },
        }
    }

    pub fn matches(&self, mood: Option<Mood>) -> bool {
        match self {
            MoodFilter::Any => true,
            MoodFilter::Unset => mood.is_none(),
            MoodFilter::Is(wanted) => mood == Some(*wanted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_moods() {
        assert_eq!(Mood::parse("Calm"), Some(Mood::Calm));
        assert_eq!(Mood::parse("Contemplative"), Some(Mood::Contemplative));
        assert_eq!(Mood::parse("calm"), None);
        assert_eq!(Mood::parse("Angry"), None);
    }

    #[test]
    fn filter_treats_all_and_absent_as_no_filter() {
        assert_eq!(MoodFilter::from_query(None), MoodFilter::Any);
        assert_eq!(MoodFilter::from_query(Some("All")), MoodFilter::Any);
    }

    #[test]
    fn filter_treats_unrecognized_as_no_filter() {
        assert_eq!(MoodFilter::from_query(Some("Bored")), MoodFilter::Any);
        assert_eq!(MoodFilter::from_query(Some("")), MoodFilter::Any);
    }

    #[test]
    fn filter_none_matches_only_unset_moods() {
        let filter = MoodFilter::from_query(Some("None"));
        assert_eq!(filter, MoodFilter::Unset);
        assert!(filter.matches(None));
        assert!(!filter.matches(Some(Mood::Happy)));
    }

    #[test]
    fn filter_exact_matches_only_that_mood() {
        let filter = MoodFilter::from_query(Some("Sad"));
        assert!(filter.matches(Some(Mood::Sad)));
        assert!(!filter.matches(Some(Mood::Happy)));
        assert!(!filter.matches(None));
    }
}
