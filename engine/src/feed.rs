use crate::espn::{
    BroadcastShape, EspnBroadcast, EspnCompetitor, EspnEvent, EspnId, EspnStatus,
    ScoreboardResponse,
};
use crate::{Game, GameStatus, Team, UNKNOWN_TEAM_NAME};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

const LEAGUE_PASS_FLAG: &str = "league-pass";
const ABBR_FALLBACK_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    NotAnObject,
    MissingId,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::NotAnObject => write!(f, "event is not a JSON object"),
            NormalizeError::MissingId => write!(f, "event has no usable id"),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Map one upstream event into a [`Game`]. Missing data degrades to documented
/// fallbacks; only a record without an id is rejected.
pub fn normalize_event(raw: &Value) -> Result<Game, NormalizeError> {
    normalize_event_at(raw, Utc::now())
}

/// Like [`normalize_event`], substituting `now` for a missing or invalid start time.
pub fn normalize_event_at(raw: &Value, now: DateTime<Utc>) -> Result<Game, NormalizeError> {
    if !raw.is_object() {
        return Err(NormalizeError::NotAnObject);
    }
    let event = EspnEvent::deserialize(raw).map_err(|_| NormalizeError::NotAnObject)?;
    map_event(event, now)
}

/// Normalize a whole scoreboard response (`{"events": [...]}`). Malformed events
/// are dropped one by one; the batch never fails.
pub fn normalize_scoreboard(raw: &Value) -> Vec<Game> {
    normalize_scoreboard_at(raw, Utc::now())
}

/// Like [`normalize_scoreboard`] with an explicit "now".
pub fn normalize_scoreboard_at(raw: &Value, now: DateTime<Utc>) -> Vec<Game> {
    let events = ScoreboardResponse::deserialize(raw)
        .map(|r| r.events)
        .unwrap_or_default();
    let total = events.len();

    let games: Vec<Game> = events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| match normalize_event_at(event, now) {
            Ok(game) => Some(game),
            Err(e) => {
                warn!("dropping scoreboard event #{index}: {e}");
                None
            }
        })
        .collect();

    debug!("normalized {} of {total} scoreboard events", games.len());
    games
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → domain types
// ---------------------------------------------------------------------------

fn map_event(event: EspnEvent, now: DateTime<Utc>) -> Result<Game, NormalizeError> {
    let id = event
        .id
        .and_then(EspnId::into_string)
        .ok_or(NormalizeError::MissingId)?;

    let start_time = match event.date.as_deref().and_then(parse_start_time) {
        Some(t) => t,
        None => {
            warn!(
                "missing or invalid start time {:?} for game {id}, using current time",
                event.date
            );
            now
        }
    };

    let competition = event.competitions.into_iter().next().unwrap_or_default();

    let (home, away) = split_competitors(&competition.competitors);
    if home.is_none() || away.is_none() {
        warn!("missing team data for game {id}");
    }
    let home = home.map(map_competitor).unwrap_or_else(Team::unknown);
    let away = away.map(map_competitor).unwrap_or_else(Team::unknown);

    let league_pass = competition.flags.iter().any(|f| f == LEAGUE_PASS_FLAG);

    let status = competition
        .status
        .as_ref()
        .or(event.status.as_ref())
        .map(map_status)
        .unwrap_or_default();

    let broadcasts = collect_broadcasts(competition.broadcasts);

    let mut game = Game::new(id, start_time, away, home, broadcasts, league_pass);
    game.status = status;
    Ok(game)
}

/// Flatten every broadcast entry into raw labels, upstream order kept.
/// De-duplication happens in [`Game::new`].
fn collect_broadcasts(entries: Vec<EspnBroadcast>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(EspnBroadcast::shape)
        .flat_map(BroadcastShape::into_labels)
        .collect()
}

/// RFC 3339, or the scoreboard's second-less "2024-01-02T00:30Z".
fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|dt| dt.and_utc())
        })
}

/// Pick (home, away) by the `homeAway` tag. An untagged competitor falls back
/// to its position: first is home, second is away.
fn split_competitors(
    competitors: &[EspnCompetitor],
) -> (Option<&EspnCompetitor>, Option<&EspnCompetitor>) {
    let by_tag = |tag: &str| competitors.iter().find(|c| c.home_away.as_deref() == Some(tag));
    let by_position = |i: usize| competitors.get(i).filter(|c| c.home_away.is_none());
    (
        by_tag("home").or_else(|| by_position(0)),
        by_tag("away").or_else(|| by_position(1)),
    )
}

fn map_competitor(c: &EspnCompetitor) -> Team {
    let Some(team) = &c.team else {
        return Team::unknown();
    };

    let present = |s: &Option<String>| -> Option<String> {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let name = present(&team.display_name)
        .or_else(|| present(&team.name))
        .or_else(|| present(&team.short_display_name))
        .unwrap_or_else(|| UNKNOWN_TEAM_NAME.to_owned());

    let abbr = present(&team.abbreviation)
        .or_else(|| present(&team.short_name))
        .unwrap_or_else(|| {
            name.chars()
                .take(ABBR_FALLBACK_LEN)
                .collect::<String>()
                .to_uppercase()
        });

    Team { abbr, name }
}

fn map_status(status: &EspnStatus) -> GameStatus {
    let Some(kind) = &status.status_type else {
        return GameStatus::default();
    };
    let parsed = kind.name.as_deref().map(parse_status).unwrap_or_default();
    let over = kind.state.as_deref() == Some("post") || kind.completed == Some(true);
    match parsed {
        GameStatus::Scheduled | GameStatus::InProgress if over => GameStatus::Final,
        other => other,
    }
}

fn parse_status(s: &str) -> GameStatus {
    match s {
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" | "STATUS_END_PERIOD" => GameStatus::InProgress,
        "STATUS_FINAL" | "STATUS_FINAL_OT" => GameStatus::Final,
        "STATUS_POSTPONED" | "STATUS_CANCELED" | "STATUS_CANCELLED" | "STATUS_SUSPENDED"
        | "STATUS_DELAYED" => GameStatus::Postponed,
        _ => GameStatus::Scheduled,
    }
}
