//! The per-game answer handed to presentation.

use crate::blackout::{self, Availability};
use crate::networks::Network;
use crate::region::Region;
use crate::{tonight, Game};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a viewer may be shown about one game's coverage. Holds canonical
/// network names only; raw upstream labels never make it this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub game_id: String,
    pub national: Option<Network>,
    pub networks: Vec<Network>,
    pub availability: Availability,
    pub tonight: bool,
}

pub fn resolve(game: &Game, region: &Region, timezone: &str, now: DateTime<Utc>) -> Verdict {
    Verdict {
        game_id: game.id.clone(),
        national: game.national(),
        networks: game.display_networks(),
        availability: blackout::availability(region, game),
        tonight: tonight::is_tonight_at(game.start_time, timezone, now),
    }
}

impl Verdict {
    /// Badge text, e.g. "ESPN" or "League Pass — Blackout".
    pub fn badge(&self) -> String {
        match self.national {
            Some(network) => network.label().to_owned(),
            None => self.availability.label().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Team;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn game(broadcasts: &[&str]) -> Game {
        Game::new(
            "401585601",
            utc(2024, 1, 2, 0, 30),
            Team::new("LAL", "Los Angeles Lakers"),
            Team::new("BOS", "Boston Celtics"),
            broadcasts.iter().copied(),
            true,
        )
    }

    #[test]
    fn national_game_for_an_out_of_market_viewer() {
        let g = game(&["ESPN", "NBC Sports Boston", "Spectrum SportsNet"]);
        let v = resolve(&g, &Region::from_state("US", "TX"), "America/New_York", utc(2024, 1, 1, 18, 0));
        assert_eq!(v.game_id, "401585601");
        assert_eq!(v.national, Some(Network::Espn));
        assert_eq!(v.networks, vec![Network::Espn]);
        assert_eq!(v.availability, Availability::Available);
        assert!(v.tonight);
        assert_eq!(v.badge(), "ESPN");
    }

    #[test]
    fn regional_only_game_in_market() {
        let g = game(&["NBC Sports Boston"]);
        let v = resolve(&g, &Region::from_state("US", "MA"), "America/New_York", utc(2024, 1, 1, 18, 0));
        assert_eq!(v.national, None);
        assert!(v.networks.is_empty());
        assert_eq!(v.availability, Availability::BlackedOut);
        assert_eq!(v.badge(), "League Pass — Blackout");
    }

    #[test]
    fn serialized_verdict_carries_no_regional_names() {
        let g = game(&["ESPN", "NBC Sports Boston", "Peacock"]);
        let v = resolve(&g, &Region::unknown(), "America/New_York", utc(2024, 1, 3, 18, 0));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "game_id": "401585601",
                "national": "ESPN",
                "networks": ["ESPN", "Peacock"],
                "availability": "unknown",
                "tonight": false,
            })
        );
        assert!(!json.to_string().contains("Boston"));
    }
}
