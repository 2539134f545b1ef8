//! National badge selection.
//!
//! Upstream broadcast order is authoritative: the first entry that is a
//! national network wins. There is no separate ranking.

use crate::networks::{self, BroadcastCategory, Network, NormalizedLabel};

/// The national vocabulary, in the order the league lists it.
pub const NATIONAL_NETWORKS: [Network; 5] = [
    Network::Abc,
    Network::Espn,
    Network::Espn2,
    Network::Tnt,
    Network::NbaTv,
];

/// First national network in `labels`, or `None` for a nationally untelevised game.
pub fn resolve_national<'a, I>(labels: I) -> Option<Network>
where
    I: IntoIterator<Item = &'a NormalizedLabel>,
{
    labels
        .into_iter()
        .filter_map(NormalizedLabel::network)
        .find(|n| NATIONAL_NETWORKS.contains(n))
}

/// [`resolve_national`] over raw upstream labels.
pub fn national_network<S: AsRef<str>>(raw: &[S]) -> Option<Network> {
    let labels: Vec<NormalizedLabel> = raw.iter().map(|r| networks::normalize(r.as_ref())).collect();
    resolve_national(&labels)
}

pub fn is_national_network(raw: &str) -> bool {
    networks::normalize(raw)
        .network()
        .is_some_and(|n| NATIONAL_NETWORKS.contains(&n))
}

/// Every national network in `raw`, in input order. Regional and unknown
/// networks are stripped.
pub fn filter_to_national_only<S: AsRef<str>>(raw: &[S]) -> Vec<Network> {
    raw.iter()
        .filter_map(|r| networks::normalize(r.as_ref()).network())
        .filter(|n| NATIONAL_NETWORKS.contains(n))
        .collect()
}

/// De-duplicated national and streaming networks for display, national first,
/// then alphabetical. Regional networks never appear.
pub fn display_networks<'a, I>(labels: I) -> Vec<Network>
where
    I: IntoIterator<Item = &'a NormalizedLabel>,
{
    let mut shown: Vec<Network> = Vec::new();
    for network in labels.into_iter().filter_map(NormalizedLabel::network) {
        if network.is_displayable() && !shown.contains(&network) {
            shown.push(network);
        }
    }
    shown.sort_by_key(|n| (n.category() != BroadcastCategory::National, n.label()));
    shown
}
