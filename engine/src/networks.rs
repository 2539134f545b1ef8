//! Canonical broadcast names.
//!
//! Upstream labels are free text ("ESPN/ESPN2", "nba tv", "Bally Sports Arizona").
//! [`normalize`] folds them into a closed [`Network`] vocabulary, suppresses
//! foreign-language and radio variants, and passes everything else through
//! untouched so unknown regional networks stay visible to blackout reasoning.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Network {
    Abc,
    Espn,
    Espn2,
    Tnt,
    NbaTv,
    PrimeVideo,
    Peacock,
    NbcSports,
    FoxSports,
    BallySports,
    SpectrumSportsNet,
    Msg,
    Yes,
    Altitude,
    Monumental,
    FanDuelSportsNetwork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BroadcastCategory {
    National,
    Streaming,
    Regional,
    Unrecognized,
}

impl Network {
    pub fn label(&self) -> &'static str {
        match self {
            Network::Abc => "ABC",
            Network::Espn => "ESPN",
            Network::Espn2 => "ESPN2",
            Network::Tnt => "TNT",
            Network::NbaTv => "NBA TV",
            Network::PrimeVideo => "Prime Video",
            Network::Peacock => "Peacock",
            Network::NbcSports => "NBC Sports",
            Network::FoxSports => "FOX Sports",
            Network::BallySports => "Bally Sports",
            Network::SpectrumSportsNet => "Spectrum SportsNet",
            Network::Msg => "MSG",
            Network::Yes => "YES",
            Network::Altitude => "Altitude",
            Network::Monumental => "Monumental",
            Network::FanDuelSportsNetwork => "FanDuel Sports Network",
        }
    }

    pub fn category(&self) -> BroadcastCategory {
        match self {
            Network::Abc | Network::Espn | Network::Espn2 | Network::Tnt | Network::NbaTv => {
                BroadcastCategory::National
            }
            Network::PrimeVideo | Network::Peacock => BroadcastCategory::Streaming,
            _ => BroadcastCategory::Regional,
        }
    }

    pub fn is_national(&self) -> bool {
        self.category() == BroadcastCategory::National
    }

    /// Anything a viewer may see on a badge: national and streaming networks.
    pub fn is_displayable(&self) -> bool {
        matches!(
            self.category(),
            BroadcastCategory::National | BroadcastCategory::Streaming
        )
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Network {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Exact-match aliases, keyed by the lower-cased, trimmed label.
const ALIASES: &[(&str, Network)] = &[
    ("abc", Network::Abc),
    ("espn", Network::Espn),
    ("espn2", Network::Espn2),
    ("tnt", Network::Tnt),
    ("nba tv", Network::NbaTv),
    ("nbatv", Network::NbaTv),
    ("nba-tv", Network::NbaTv),
    ("prime video", Network::PrimeVideo),
    ("amazon prime video", Network::PrimeVideo),
    ("prime", Network::PrimeVideo),
    ("peacock", Network::Peacock),
    ("nbc sports", Network::NbcSports),
    ("fox sports", Network::FoxSports),
    ("bally sports", Network::BallySports),
    ("spectrum sportsnet", Network::SpectrumSportsNet),
    ("msg", Network::Msg),
    ("msg network", Network::Msg),
    ("yes", Network::Yes),
    ("yes network", Network::Yes),
    ("altitude", Network::Altitude),
    ("monumental", Network::Monumental),
    ("fanduel sports network", Network::FanDuelSportsNetwork),
    ("fanduel sports", Network::FanDuelSportsNetwork),
];

/// A primary network and every channel that simulcasts it.
const SIMULCASTS: &[(Network, &[&str])] = &[(Network::Espn, &["espn", "espn2"])];

/// Foreign-language and radio variants are never shown.
const SUPPRESSED_MARKERS: &[&str] = &["deportes", "radio"];

/// Substrings that identify a regional sports network when the label is not in
/// the alias table. Compared against the lower-cased label.
pub(crate) const REGIONAL_KEYWORDS: &[&str] = &[
    "msg",
    "bally",
    "yes",
    "nbc sports",
    "fox sports",
    "at&t sportsnet",
    "spectrum",
    "root sports",
    "tsn",
    "sn",
    "fanduel",
    "altitude",
    "monumental",
    "sportsnet",
];

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedLabel {
    Network(Network),
    /// Foreign-language or radio variant, or an empty label.
    Suppressed,
    /// Not in the vocabulary; the raw label, unchanged.
    Other(String),
}

impl NormalizedLabel {
    /// Canonical name, the empty string for suppressed labels, or the raw label.
    pub fn as_str(&self) -> &str {
        match self {
            NormalizedLabel::Network(network) => network.label(),
            NormalizedLabel::Suppressed => "",
            NormalizedLabel::Other(raw) => raw,
        }
    }

    pub fn network(&self) -> Option<Network> {
        match self {
            NormalizedLabel::Network(network) => Some(*network),
            _ => None,
        }
    }

    pub fn category(&self) -> BroadcastCategory {
        match self {
            NormalizedLabel::Network(network) => network.category(),
            NormalizedLabel::Suppressed => BroadcastCategory::Unrecognized,
            NormalizedLabel::Other(raw) => {
                if is_regional_keyword_match(raw) {
                    BroadcastCategory::Regional
                } else {
                    BroadcastCategory::Unrecognized
                }
            }
        }
    }
}

impl fmt::Display for NormalizedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize one upstream broadcast label. Pure; never fails.
pub fn normalize(raw: &str) -> NormalizedLabel {
    let folded = raw.trim().to_lowercase();
    if folded.is_empty() {
        return NormalizedLabel::Suppressed;
    }

    if let Some(primary) = collapse_simulcast(&folded) {
        return NormalizedLabel::Network(primary);
    }

    if SUPPRESSED_MARKERS.iter().any(|m| folded.contains(m)) {
        return NormalizedLabel::Suppressed;
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, network)| NormalizedLabel::Network(*network))
        .unwrap_or_else(|| NormalizedLabel::Other(raw.to_owned()))
}

/// "espn/espn2" and "espn2 / espn" both collapse to ESPN. Every part of a
/// slash-joined label has to belong to the same simulcast family.
fn collapse_simulcast(folded: &str) -> Option<Network> {
    if !folded.contains('/') {
        return None;
    }
    let parts: Vec<&str> = folded.split('/').map(str::trim).collect();
    SIMULCASTS
        .iter()
        .find(|(_, members)| parts.iter().all(|p| members.contains(p)))
        .map(|(primary, _)| *primary)
}

pub(crate) fn is_regional_keyword_match(raw: &str) -> bool {
    let folded = raw.to_lowercase();
    REGIONAL_KEYWORDS.iter().any(|k| folded.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_collapse_regardless_of_case_and_whitespace() {
        for raw in ["NBA TV", "nba tv", "  Nba Tv ", "NBATV", "nba-tv"] {
            assert_eq!(normalize(raw), NormalizedLabel::Network(Network::NbaTv), "{raw:?}");
        }
        assert_eq!(normalize("espn"), normalize(" ESPN "));
        assert_eq!(normalize("Amazon Prime Video").as_str(), "Prime Video");
    }

    #[test]
    fn simulcast_pair_collapses_to_primary() {
        assert_eq!(normalize("ESPN/ESPN2").as_str(), "ESPN");
        assert_eq!(normalize("ESPN2/ESPN").as_str(), "ESPN");
        assert_eq!(normalize("espn / espn2").as_str(), "ESPN");
    }

    #[test]
    fn slash_label_outside_a_family_passes_through() {
        assert_eq!(
            normalize("ESPN/ABC"),
            NormalizedLabel::Other("ESPN/ABC".into())
        );
    }

    #[test]
    fn foreign_language_and_radio_variants_are_suppressed() {
        assert_eq!(normalize("ESPN Deportes"), NormalizedLabel::Suppressed);
        assert_eq!(normalize("ESPN Radio"), NormalizedLabel::Suppressed);
        assert_eq!(normalize("ESPN Deportes").as_str(), "");
        assert_eq!(normalize(""), NormalizedLabel::Suppressed);
        assert_eq!(normalize("   ").as_str(), "");
    }

    #[test]
    fn unknown_labels_pass_through_unchanged() {
        let raw = "Bally Sports Arizona";
        assert_eq!(normalize(raw).as_str(), raw);
        assert_eq!(normalize("KTLA 5").as_str(), "KTLA 5");
    }

    #[test]
    fn canonical_labels_normalize_to_themselves() {
        for (_, network) in ALIASES {
            assert_eq!(
                normalize(network.label()),
                NormalizedLabel::Network(*network),
                "{network:?}"
            );
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let mut inputs: Vec<String> = Vec::new();
        for (alias, network) in ALIASES {
            inputs.push((*alias).to_owned());
            inputs.push(alias.to_uppercase());
            inputs.push(format!("  {}\t", network.label()));
        }
        inputs.extend(
            ["ESPN/ESPN2", " espn2 / ESPN ", "ESPN Deportes", "", "Root Sports NW", "KTLA 5"]
                .map(str::to_owned),
        );
        for raw in &inputs {
            let once = normalize(raw);
            assert_eq!(normalize(once.as_str()), once, "{raw:?}");
        }
    }

    #[test]
    fn categories() {
        assert_eq!(normalize("TNT").category(), BroadcastCategory::National);
        assert_eq!(normalize("Peacock").category(), BroadcastCategory::Streaming);
        assert_eq!(normalize("MSG").category(), BroadcastCategory::Regional);
        assert_eq!(
            normalize("Root Sports Northwest").category(),
            BroadcastCategory::Regional
        );
        assert_eq!(normalize("SNY").category(), BroadcastCategory::Regional);
        assert_eq!(normalize("KTLA 5").category(), BroadcastCategory::Unrecognized);
        assert_eq!(
            normalize("ESPN Deportes").category(),
            BroadcastCategory::Unrecognized
        );
    }

    #[test]
    fn displayable_networks_never_match_regional_keywords() {
        let all = ALIASES.iter().map(|(_, n)| *n);
        for network in all.filter(Network::is_displayable) {
            assert!(
                !is_regional_keyword_match(network.label()),
                "{network} must not look like a regional network"
            );
        }
    }
}
