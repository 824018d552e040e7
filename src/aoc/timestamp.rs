//! Star timestamps as sent by the leaderboard API.
//!
//! The service encodes a timestamp as epoch seconds, either quoted or bare, and
//! uses `null` (the JSON literal or the quoted word) for levels that have no star
//! yet. [`StarTimestamp`] decodes all of those forms and leaves the unset case as
//! a value instead of an error.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::error::{LeaderboardError, LeaderboardResponse};

/// Layout used to normalize a timestamp through its textual form.
const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A point in time with second precision, or unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarTimestamp(Option<DateTime<Utc>>);

impl StarTimestamp {
    pub const UNSET: Self = Self(None);

    /// Interpret `secs` as seconds since the Unix epoch.
    ///
    /// Returns `None` when the value falls outside the representable range.
    pub fn from_epoch_seconds(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|time| Self(Some(time)))
    }

    /// Decode the wire form: quoted or bare epoch seconds, or `null`.
    pub fn parse(raw: &str) -> LeaderboardResponse<Self> {
        parse_wire(raw).map_err(|msg| LeaderboardError::Decode(de::Error::custom(msg)))
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn epoch_seconds(&self) -> Option<i64> {
        self.0.map(|time| time.timestamp())
    }

    /// Render through [`TIME_LAYOUT`] and parse it back into a calendar time.
    ///
    /// An unset timestamp stays unset. Fails with [`LeaderboardError::Conversion`]
    /// only when the rendered text does not parse.
    pub fn to_utc(&self) -> LeaderboardResponse<Option<DateTime<Utc>>> {
        let Some(time) = self.0 else {
            return Ok(None);
        };
        let rendered = time.format(TIME_LAYOUT).to_string();

        DateTime::parse_from_str(&rendered, TIME_LAYOUT)
            .map(|parsed| Some(parsed.with_timezone(&Utc)))
            .map_err(|e| LeaderboardError::Conversion(format!("{rendered}: {e}")))
    }
}

impl From<DateTime<Utc>> for StarTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for StarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => write!(f, "{}", time.timestamp()),
            None => f.write_str("null"),
        }
    }
}

fn parse_wire(raw: &str) -> Result<StarTimestamp, String> {
    let text = raw.trim().trim_matches('"');
    if text == "null" {
        return Ok(StarTimestamp::UNSET);
    }

    let secs = text
        .parse::<i64>()
        .map_err(|e| format!("invalid epoch seconds {text:?}: {e}"))?;
    from_secs(secs)
}

fn from_secs(secs: i64) -> Result<StarTimestamp, String> {
    StarTimestamp::from_epoch_seconds(secs)
        .ok_or_else(|| format!("epoch seconds {secs} out of range"))
}

struct StarTimestampVisitor;

impl Visitor<'_> for StarTimestampVisitor {
    type Value = StarTimestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("epoch seconds as a string or an integer, or null")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_wire(v).map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        from_secs(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("epoch seconds {v} out of range")))?;
        from_secs(secs).map_err(E::custom)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StarTimestamp::UNSET)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(StarTimestamp::UNSET)
    }
}

impl<'de> Deserialize<'de> for StarTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StarTimestampVisitor)
    }
}

impl Serialize for StarTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.epoch_seconds() {
            Some(secs) => serializer.serialize_some(&secs.to_string()),
            None => serializer.serialize_none(),
        }
    }
}
