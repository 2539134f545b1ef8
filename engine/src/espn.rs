//! ESPN scoreboard wire types: serde shapes for the NBA scoreboard feed.
//! These map to the domain types in lib.rs via feed.rs.
//!
//! The feed is loosely typed, so every field is read leniently. A value of the
//! wrong shape deserializes as absent instead of failing the whole event.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// A list where malformed elements are skipped and a non-list is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

/// A list kept only when the value is one, with malformed elements skipped.
fn lenient_some_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_array() {
        return Ok(None);
    }
    lenient_list(value).map(Some).map_err(serde::de::Error::custom)
}

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    /// Kept raw so each event is normalised, and dropped, on its own.
    #[serde(default, deserialize_with = "lenient_list")]
    pub events: Vec<Value>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<EspnId>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>, // ISO 8601, often without seconds
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<EspnStatus>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub competitions: Vec<EspnCompetition>,
}

/// Event ids are strings on the scoreboard but numbers on some mirrors.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnId {
    Text(String),
    Number(serde_json::Number),
}

impl EspnId {
    /// `None` for an empty or blank id.
    pub fn into_string(self) -> Option<String> {
        let id = match self {
            EspnId::Text(s) => s.trim().to_owned(),
            EspnId::Number(n) => n.to_string(),
        };
        (!id.is_empty()).then_some(id)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnCompetition {
    #[serde(default, deserialize_with = "lenient_list")]
    pub competitors: Vec<EspnCompetitor>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub broadcasts: Vec<EspnBroadcast>,
    /// Product flags, e.g. "league-pass".
    #[serde(default, deserialize_with = "lenient_list")]
    pub flags: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<String>, // "pre" | "in" | "post"
    #[serde(default, deserialize_with = "lenient")]
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnCompetitor {
    #[serde(default, deserialize_with = "lenient")]
    pub home_away: Option<String>, // "home" | "away"
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<EspnTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeam {
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>, // "Los Angeles Lakers"
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>, // "Lakers"
    #[serde(default, deserialize_with = "lenient")]
    pub short_display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
}

/// One broadcast entry as it arrives. Four layouts have been seen over time;
/// [`EspnBroadcast::shape`] picks the first one present.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EspnBroadcast {
    #[serde(default, deserialize_with = "lenient_some_list")]
    pub names: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub call_sign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastShape {
    Names(Vec<String>),
    Name(String),
    ShortName(String),
    CallSign(String),
}

impl EspnBroadcast {
    /// Resolve the entry to one shape, in priority order: `names`, `name`,
    /// `shortName`, `callSign`. Empty strings count as absent.
    pub fn shape(self) -> Option<BroadcastShape> {
        let present = |s: Option<String>| s.filter(|s| !s.is_empty());
        if let Some(names) = self.names {
            return Some(BroadcastShape::Names(names));
        }
        present(self.name)
            .map(BroadcastShape::Name)
            .or_else(|| present(self.short_name).map(BroadcastShape::ShortName))
            .or_else(|| present(self.call_sign).map(BroadcastShape::CallSign))
    }
}

impl BroadcastShape {
    pub fn into_labels(self) -> Vec<String> {
        match self {
            BroadcastShape::Names(names) => names,
            BroadcastShape::Name(s) | BroadcastShape::ShortName(s) | BroadcastShape::CallSign(s) => {
                vec![s]
            }
        }
    }
}
