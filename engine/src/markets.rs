//! Team → home-market lookup for blackout decisions.
//!
//! Market codes are US state / Canadian province codes. Teams sharing a metro
//! area claim the same codes; see [`MARKET_OVERLAPS`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Franchise {
    Atl,
    Bos,
    Bkn,
    Cha,
    Chi,
    Cle,
    Dal,
    Den,
    Det,
    Gsw,
    Hou,
    Ind,
    Lac,
    Lal,
    Mem,
    Mia,
    Mil,
    Min,
    Nop,
    Nyk,
    Okc,
    Orl,
    Phi,
    Phx,
    Por,
    Sac,
    Sas,
    Tor,
    Uta,
    Was,
}

impl Franchise {
    pub const ALL: [Franchise; 30] = [
        Franchise::Atl,
        Franchise::Bos,
        Franchise::Bkn,
        Franchise::Cha,
        Franchise::Chi,
        Franchise::Cle,
        Franchise::Dal,
        Franchise::Den,
        Franchise::Det,
        Franchise::Gsw,
        Franchise::Hou,
        Franchise::Ind,
        Franchise::Lac,
        Franchise::Lal,
        Franchise::Mem,
        Franchise::Mia,
        Franchise::Mil,
        Franchise::Min,
        Franchise::Nop,
        Franchise::Nyk,
        Franchise::Okc,
        Franchise::Orl,
        Franchise::Phi,
        Franchise::Phx,
        Franchise::Por,
        Franchise::Sac,
        Franchise::Sas,
        Franchise::Tor,
        Franchise::Uta,
        Franchise::Was,
    ];

    /// Accepts the league's three-letter codes and the short forms the
    /// scoreboard feed uses ("GS", "NY", "UTAH", ...). Case-insensitive.
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        let abbr = abbr.trim().to_ascii_uppercase();
        let franchise = match abbr.as_str() {
            "GS" => Franchise::Gsw,
            "NY" => Franchise::Nyk,
            "SA" => Franchise::Sas,
            "NO" => Franchise::Nop,
            "UTAH" => Franchise::Uta,
            "WSH" => Franchise::Was,
            "PHO" => Franchise::Phx,
            "BRK" => Franchise::Bkn,
            other => return Self::ALL.into_iter().find(|f| f.abbr() == other),
        };
        Some(franchise)
    }

    pub fn abbr(&self) -> &'static str {
        match self {
            Franchise::Atl => "ATL",
            Franchise::Bos => "BOS",
            Franchise::Bkn => "BKN",
            Franchise::Cha => "CHA",
            Franchise::Chi => "CHI",
            Franchise::Cle => "CLE",
            Franchise::Dal => "DAL",
            Franchise::Den => "DEN",
            Franchise::Det => "DET",
            Franchise::Gsw => "GSW",
            Franchise::Hou => "HOU",
            Franchise::Ind => "IND",
            Franchise::Lac => "LAC",
            Franchise::Lal => "LAL",
            Franchise::Mem => "MEM",
            Franchise::Mia => "MIA",
            Franchise::Mil => "MIL",
            Franchise::Min => "MIN",
            Franchise::Nop => "NOP",
            Franchise::Nyk => "NYK",
            Franchise::Okc => "OKC",
            Franchise::Orl => "ORL",
            Franchise::Phi => "PHI",
            Franchise::Phx => "PHX",
            Franchise::Por => "POR",
            Franchise::Sac => "SAC",
            Franchise::Sas => "SAS",
            Franchise::Tor => "TOR",
            Franchise::Uta => "UTA",
            Franchise::Was => "WAS",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Franchise::Atl => "Atlanta Hawks",
            Franchise::Bos => "Boston Celtics",
            Franchise::Bkn => "Brooklyn Nets",
            Franchise::Cha => "Charlotte Hornets",
            Franchise::Chi => "Chicago Bulls",
            Franchise::Cle => "Cleveland Cavaliers",
            Franchise::Dal => "Dallas Mavericks",
            Franchise::Den => "Denver Nuggets",
            Franchise::Det => "Detroit Pistons",
            Franchise::Gsw => "Golden State Warriors",
            Franchise::Hou => "Houston Rockets",
            Franchise::Ind => "Indiana Pacers",
            Franchise::Lac => "LA Clippers",
            Franchise::Lal => "Los Angeles Lakers",
            Franchise::Mem => "Memphis Grizzlies",
            Franchise::Mia => "Miami Heat",
            Franchise::Mil => "Milwaukee Bucks",
            Franchise::Min => "Minnesota Timberwolves",
            Franchise::Nop => "New Orleans Pelicans",
            Franchise::Nyk => "New York Knicks",
            Franchise::Okc => "Oklahoma City Thunder",
            Franchise::Orl => "Orlando Magic",
            Franchise::Phi => "Philadelphia 76ers",
            Franchise::Phx => "Phoenix Suns",
            Franchise::Por => "Portland Trail Blazers",
            Franchise::Sac => "Sacramento Kings",
            Franchise::Sas => "San Antonio Spurs",
            Franchise::Tor => "Toronto Raptors",
            Franchise::Uta => "Utah Jazz",
            Franchise::Was => "Washington Wizards",
        }
    }

    pub fn markets(&self) -> &'static [&'static str] {
        match self {
            // Western Conference
            Franchise::Lal | Franchise::Lac | Franchise::Gsw | Franchise::Sac => &["CA"],
            Franchise::Phx => &["AZ"],
            Franchise::Den => &["CO"],
            Franchise::Uta => &["UT"],
            Franchise::Por => &["OR"],
            Franchise::Okc => &["OK"],
            Franchise::Min => &["MN"],
            Franchise::Dal | Franchise::Hou | Franchise::Sas => &["TX"],
            Franchise::Mem => &["TN"],
            Franchise::Nop => &["LA"],
            // Eastern Conference
            Franchise::Bos => &["MA"],
            Franchise::Bkn | Franchise::Nyk => &["NY", "NJ", "CT"],
            Franchise::Phi => &["PA"],
            Franchise::Tor => &["ON"],
            Franchise::Chi => &["IL"],
            Franchise::Cle => &["OH"],
            Franchise::Det => &["MI"],
            Franchise::Ind => &["IN"],
            Franchise::Mil => &["WI"],
            Franchise::Atl => &["GA"],
            Franchise::Cha => &["NC"],
            Franchise::Mia | Franchise::Orl => &["FL"],
            Franchise::Was => &["DC", "MD", "VA"],
        }
    }
}

/// Shared markets, listed for reference. Both franchises legitimately black out
/// the same viewers.
pub const MARKET_OVERLAPS: &[(&str, &[&str])] = &[
    ("Nets/Knicks", &["NY", "NJ", "CT"]),
    ("Clippers/Lakers", &["CA"]),
    ("Warriors/Kings", &["CA"]),
    ("Wizards", &["DC", "MD", "VA"]),
];

/// Market codes for a team abbreviation; empty for anything unrecognised.
pub fn markets_for(abbr: &str) -> &'static [&'static str] {
    Franchise::from_abbr(abbr).map(|f| f.markets()).unwrap_or(&[])
}

pub fn market_overlaps(a: &str, b: &str) -> Vec<&'static str> {
    let theirs = markets_for(b);
    markets_for(a)
        .iter()
        .copied()
        .filter(|m| theirs.contains(m))
        .collect()
}

pub fn teams_in_market(code: &str) -> Vec<Franchise> {
    let code = code.trim().to_ascii_uppercase();
    Franchise::ALL
        .into_iter()
        .filter(|f| f.markets().contains(&code.as_str()))
        .collect()
}
