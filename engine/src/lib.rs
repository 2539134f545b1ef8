pub mod blackout;
pub mod espn;
pub mod feed;
pub mod markets;
pub mod national;
pub mod networks;
pub mod region;
pub mod tonight;
pub mod verdict;

pub use blackout::{Availability, availability};
pub use feed::{NormalizeError, normalize_event, normalize_scoreboard};
pub use markets::Franchise;
pub use networks::{BroadcastCategory, Network, NormalizedLabel, normalize};
pub use region::{Region, ServerSignal};
pub use verdict::Verdict;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types, independent of the ESPN wire format
// ---------------------------------------------------------------------------

pub const UNKNOWN_TEAM_NAME: &str = "Unknown";
pub const UNKNOWN_TEAM_ABBR: &str = "UNK";

/// One scheduled game, built fresh from each feed poll and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub away: Team,
    pub home: Team,
    /// Every upstream broadcast, regional networks included. Stays inside the crate.
    pub(crate) broadcasts: Vec<Broadcast>,
    /// The League Pass subscription carries this game.
    pub league_pass: bool,
    pub status: GameStatus,
}

impl Game {
    /// Build a game from raw broadcast labels. Labels are de-duplicated, first
    /// occurrence wins, so upstream ordering is preserved for national precedence.
    pub fn new<I, S>(
        id: impl Into<String>,
        start_time: DateTime<Utc>,
        away: Team,
        home: Team,
        raw_broadcasts: I,
        league_pass: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut broadcasts: Vec<Broadcast> = Vec::new();
        for raw in raw_broadcasts {
            let raw = raw.into();
            if !broadcasts.iter().any(|b| b.raw == raw) {
                broadcasts.push(Broadcast::new(raw));
            }
        }

        Self {
            id: id.into(),
            start_time,
            away,
            home,
            broadcasts,
            league_pass,
            status: GameStatus::default(),
        }
    }

    pub fn teams(&self) -> [&Team; 2] {
        [&self.away, &self.home]
    }

    pub fn involves(&self, franchise: Franchise) -> bool {
        self.teams().iter().any(|t| t.franchise() == Some(franchise))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Final | GameStatus::Postponed)
    }

    /// The single national badge for this game, if any.
    pub fn national(&self) -> Option<Network> {
        national::resolve_national(self.broadcasts.iter().map(|b| &b.label))
    }

    /// National and streaming networks only, safe to show a viewer.
    pub fn display_networks(&self) -> Vec<Network> {
        national::display_networks(self.broadcasts.iter().map(|b| &b.label))
    }

    pub(crate) fn broadcasts(&self) -> &[Broadcast] {
        &self.broadcasts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub abbr: String, // "LAL"
    pub name: String, // "Los Angeles Lakers"
}

impl Default for Team {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Team {
    pub fn new(abbr: impl Into<String>, name: impl Into<String>) -> Self {
        Self { abbr: abbr.into(), name: name.into() }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_TEAM_ABBR, UNKNOWN_TEAM_NAME)
    }

    /// `None` for anything outside the league's thirty franchises.
    pub fn franchise(&self) -> Option<Franchise> {
        Franchise::from_abbr(&self.abbr)
    }

    pub fn markets(&self) -> &'static [&'static str] {
        markets::markets_for(&self.abbr)
    }
}

/// An upstream broadcast label together with its canonical form.
///
/// The raw label is not readable outside the crate. Regional network names
/// never reach a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    raw: String,
    label: NormalizedLabel,
}

impl Broadcast {
    pub(crate) fn new(raw: String) -> Self {
        let label = networks::normalize(&raw);
        Self { raw, label }
    }

    pub fn category(&self) -> BroadcastCategory {
        self.label.category()
    }

    pub fn network(&self) -> Option<Network> {
        self.label.network()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Final,
    Postponed,
}
