//! League Pass availability.
//!
//! Never optimistic: without a known region, or for a game League Pass does
//! not carry, the answer is [`Availability::Unknown`].

use crate::networks::BroadcastCategory;
use crate::region::Region;
use crate::{Game, Team};
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    BlackedOut,
    Unknown,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "League Pass — Available",
            Availability::BlackedOut => "League Pass — Blackout",
            Availability::Unknown => "League Pass — Check Region",
        }
    }
}

/// The viewer's market intersects the team's home markets. Only regions in a
/// blackout country can be in-market; elsewhere a matching subdivision code
/// (Cagliari is "CA" too) means nothing.
pub fn is_in_market(region: &Region, team: &Team) -> bool {
    if !region.is_known() || !region.is_domestic() {
        return false;
    }
    region
        .market()
        .is_some_and(|market| team.markets().contains(&market))
}

/// Decide League Pass availability. Rules are checked in order; the first match wins.
pub fn availability(region: &Region, game: &Game) -> Availability {
    if !region.is_known() {
        return Availability::Unknown;
    }
    if !game.league_pass {
        return Availability::Unknown;
    }

    // Market membership alone decides the blackout, whether or not a regional
    // broadcast is listed for this game.
    if game.teams().iter().any(|team| is_in_market(region, team)) {
        if !has_regional_broadcast(game) {
            debug!("game {}: in-market blackout with no regional broadcast listed", game.id);
        }
        return Availability::BlackedOut;
    }

    // Out-of-market, domestic or international: no local blackout applies.
    Availability::Available
}

/// Internal only: the game lists a regional sports network.
pub(crate) fn has_regional_broadcast(game: &Game) -> bool {
    game.broadcasts()
        .iter()
        .any(|b| b.category() == BroadcastCategory::Regional)
}
