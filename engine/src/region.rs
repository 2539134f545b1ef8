//! Viewer region resolution.
//!
//! Two signals feed a [`Region`]: the coarse country/state pair the edge layer
//! derives from the request IP, and an optional ZIP code the viewer typed in.
//! The ZIP wins when it is well-formed.

use std::fmt;

/// Coarse location supplied by the hosting edge layer. Both values are opaque
/// strings and either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSignal {
    pub country: Option<String>,
    pub state: Option<String>,
}

impl ServerSignal {
    pub fn new(country: Option<&str>, state: Option<&str>) -> Self {
        Self {
            country: country.map(str::to_owned),
            state: state.map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub country: Option<String>,
    /// State or province code, e.g. "CA" or "ON".
    pub state: Option<String>,
    pub postal: Option<String>,
}

/// Countries where local-market blackout rules apply.
pub const BLACKOUT_COUNTRIES: [&str; 2] = ["US", "CA"];

const DEFAULT_COUNTRY: &str = "US";
const POSTAL_LEN: usize = 5;

impl Region {
    /// No signal at all.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn from_state(country: &str, state: &str) -> Self {
        Self {
            country: clean(Some(country)),
            state: clean(Some(state)),
            postal: None,
        }
    }

    /// A region from a viewer-entered ZIP code; `None` unless it is five digits.
    /// An unmapped prefix still yields a region, just without a state.
    pub fn from_postal(code: &str) -> Option<Self> {
        let code = code.trim();
        if !is_valid_postal(code) {
            return None;
        }
        Some(Self {
            country: Some(DEFAULT_COUNTRY.to_owned()),
            state: state_for_postal(code).map(str::to_owned),
            postal: Some(code.to_owned()),
        })
    }

    /// A region is known when it has a state or a postal code. A bare country
    /// never is.
    pub fn is_known(&self) -> bool {
        self.state.is_some() || self.postal.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// The market code used for in-market checks.
    pub fn market(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn is_domestic(&self) -> bool {
        self.country
            .as_deref()
            .is_some_and(|c| BLACKOUT_COUNTRIES.contains(&c))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.postal, &self.state, &self.country) {
            (Some(zip), _, _) if !zip.is_empty() => write!(f, "ZIP {zip}"),
            (_, Some(state), _) => f.write_str(state),
            (_, _, Some(country)) => f.write_str(country),
            _ => f.write_str("Unknown"),
        }
    }
}

/// Combine the edge signal with an optional viewer override.
///
/// A valid ZIP override takes precedence. Otherwise any server value produces a
/// region (country defaulting to US); with nothing at all the region is unknown.
pub fn resolve(server: &ServerSignal, client_override: Option<&str>) -> Region {
    if let Some(region) = client_override.and_then(Region::from_postal) {
        return region;
    }

    let country = clean(server.country.as_deref());
    let state = clean(server.state.as_deref());
    if country.is_none() && state.is_none() {
        return Region::unknown();
    }

    Region {
        country: Some(country.unwrap_or_else(|| DEFAULT_COUNTRY.to_owned())),
        state,
        postal: None,
    }
}

pub fn is_valid_postal(code: &str) -> bool {
    code.len() == POSTAL_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_ascii_uppercase)
}

/// Three-digit ZIP prefix ranges, inclusive. Military and territory prefixes
/// are left out.
const ZIP_PREFIXES: &[(u16, u16, &str)] = &[
    (5, 5, "NY"),
    (10, 27, "MA"),
    (28, 29, "RI"),
    (30, 38, "NH"),
    (39, 49, "ME"),
    (50, 54, "VT"),
    (55, 55, "MA"),
    (56, 59, "VT"),
    (60, 69, "CT"),
    (70, 89, "NJ"),
    (100, 149, "NY"),
    (150, 196, "PA"),
    (197, 199, "DE"),
    (200, 200, "DC"),
    (201, 201, "VA"),
    (202, 205, "DC"),
    (206, 219, "MD"),
    (220, 246, "VA"),
    (247, 268, "WV"),
    (270, 289, "NC"),
    (290, 299, "SC"),
    (300, 319, "GA"),
    (320, 339, "FL"),
    (341, 349, "FL"),
    (350, 369, "AL"),
    (370, 385, "TN"),
    (386, 397, "MS"),
    (398, 399, "GA"),
    (400, 427, "KY"),
    (430, 459, "OH"),
    (460, 479, "IN"),
    (480, 499, "MI"),
    (500, 528, "IA"),
    (530, 549, "WI"),
    (550, 567, "MN"),
    (569, 569, "DC"),
    (570, 577, "SD"),
    (580, 588, "ND"),
    (590, 599, "MT"),
    (600, 629, "IL"),
    (630, 658, "MO"),
    (660, 679, "KS"),
    (680, 693, "NE"),
    (700, 715, "LA"),
    (716, 729, "AR"),
    (730, 732, "OK"),
    (733, 733, "TX"),
    (734, 749, "OK"),
    (750, 799, "TX"),
    (800, 816, "CO"),
    (820, 831, "WY"),
    (832, 838, "ID"),
    (840, 847, "UT"),
    (850, 865, "AZ"),
    (870, 884, "NM"),
    (885, 885, "TX"),
    (889, 898, "NV"),
    (900, 961, "CA"),
    (967, 968, "HI"),
    (970, 979, "OR"),
    (980, 994, "WA"),
    (995, 999, "AK"),
];

/// State for a ZIP code, by its three-digit prefix.
pub fn state_for_postal(code: &str) -> Option<&'static str> {
    let prefix: u16 = code.get(..3)?.parse().ok()?;
    ZIP_PREFIXES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&prefix))
        .map(|(_, _, state)| *state)
}
