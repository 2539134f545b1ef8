use tonight_engine::region::{self, ServerSignal};
use tonight_engine::{Franchise, Network, Region};

pub const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub timezone: String,
    pub zip: Option<String>,
    pub server: ServerSignal,
    pub favorite: Option<Franchise>,
    pub hidden_networks: Vec<Network>,
    pub hide_finished: bool,
    pub all_day: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_owned(),
            zip: None,
            server: ServerSignal::default(),
            favorite: None,
            hidden_networks: Vec::new(),
            hide_finished: false,
            all_day: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `load` reads the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let favorite = get("TONIGHT_FAVORITE").and_then(|abbr| {
            let team = Franchise::from_abbr(&abbr);
            if team.is_none() {
                log::warn!("ignoring unknown favourite team {abbr:?}");
            }
            team
        });

        let hidden_networks = get("TONIGHT_HIDDEN_NETWORKS")
            .map(|list| {
                list.split(',')
                    .filter_map(|name| tonight_engine::normalize(name).network())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            timezone: get("TONIGHT_TZ").unwrap_or_else(|| DEFAULT_TIMEZONE.to_owned()),
            zip: get("TONIGHT_ZIP"),
            server: ServerSignal {
                country: get("TONIGHT_COUNTRY"),
                state: get("TONIGHT_STATE"),
            },
            favorite,
            hidden_networks,
            hide_finished: get("TONIGHT_HIDE_FINISHED").is_some_and(|v| is_truthy(&v)),
            all_day: get("TONIGHT_ALL_DAY").is_some_and(|v| is_truthy(&v)),
        }
    }

    pub fn region(&self) -> Region {
        region::resolve(&self.server, self.zip.as_deref())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
