use std::{collections::HashMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

use super::timestamp::StarTimestamp;

// ============================================================================
// Private leaderboard
// ============================================================================

/// Representation of the private leaderboard response.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Leaderboard {
    #[serde(deserialize_with = "string_or_int")]
    pub owner_id: String,
    #[serde(deserialize_with = "string_or_int")]
    pub event: String,
    pub members: HashMap<String, Member>,
}

impl Leaderboard {
    /// Flatten the member mapping. The resulting order is unspecified.
    pub fn into_members(self) -> Vec<Member> {
        self.members.into_values().collect()
    }
}

/// A single participant of the leaderboard.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    /// `None` for participants who chose to stay anonymous.
    #[serde(default)]
    pub name: Option<String>,
    pub stars: u32,
    pub local_score: u64,
    pub global_score: u64,
    #[serde(default)]
    pub last_star_ts: StarTimestamp,
    /// Day number to level number to the star earned on it.
    #[serde(default)]
    pub completion_day_level: HashMap<String, HashMap<String, Level>>,
}

impl Member {
    /// The name shown on the website, which falls back to the member id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("(anonymous user #{})", self.id),
        }
    }

    /// Number of levels of `day` that carry a star.
    pub fn stars_on_day(&self, day: u8) -> usize {
        self.completion_day_level
            .get(&day.to_string())
            .map(|levels| earned(levels.values()))
            .unwrap_or(0)
    }

    /// Number of days where both levels are done.
    pub fn completed_days(&self) -> usize {
        self.completion_day_level
            .values()
            .filter(|levels| earned(levels.values()) >= 2)
            .count()
    }
}

fn earned<'a>(levels: impl Iterator<Item = &'a Level>) -> usize {
    levels.filter(|level| !level.get_star_ts.is_unset()).count()
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Level {
    #[serde(default)]
    pub get_star_ts: StarTimestamp,
}

// Ids are strings in older payloads and integers in current ones.
fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vis;

    impl Visitor<'_> for Vis {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }
    }

    deserializer.deserialize_any(Vis)
}
