use crate::settings::Settings;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tonight_engine::verdict::{self, Verdict};
use tonight_engine::{Game, GameStatus, Region, tonight};

/// One line of tonight's slate, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub away: String,
    pub home: String,
    pub start_time: DateTime<Utc>,
    pub status: GameStatus,
    #[serde(flatten)]
    pub verdict: Verdict,
    #[serde(skip)]
    pub favorite: bool,
}

pub fn build(games: &[Game], settings: &Settings, region: &Region, now: DateTime<Utc>) -> Vec<Row> {
    let mut rows: Vec<Row> = games
        .iter()
        .filter(|game| !(settings.hide_finished && game.is_finished()))
        .map(|game| {
            let mut verdict = verdict::resolve(game, region, &settings.timezone, now);
            hide_networks(&mut verdict, settings);
            Row {
                away: game.away.abbr.clone(),
                home: game.home.abbr.clone(),
                start_time: game.start_time,
                status: game.status,
                verdict,
                favorite: settings.favorite.is_some_and(|team| game.involves(team)),
            }
        })
        .filter(|row| settings.all_day || row.verdict.tonight)
        .collect();

    rows.sort_by(|a, b| {
        b.favorite
            .cmp(&a.favorite)
            .then(a.start_time.cmp(&b.start_time))
            .then_with(|| a.verdict.game_id.cmp(&b.verdict.game_id))
    });
    rows
}

fn hide_networks(verdict: &mut Verdict, settings: &Settings) {
    if settings.hidden_networks.is_empty() {
        return;
    }
    verdict.networks.retain(|n| !settings.hidden_networks.contains(n));
    if verdict
        .national
        .is_some_and(|n| settings.hidden_networks.contains(&n))
    {
        verdict.national = None;
    }
}

pub fn header(settings: &Settings, region: &Region, now: DateTime<Utc>) -> String {
    let day = tonight::local_date(now, &settings.timezone)
        .map(|d| d.format("%a %b %-d").to_string())
        .unwrap_or_else(|| "Today".to_string());
    let mut header = format!("NBA {day} ({}) | Region: {region}", settings.timezone);
    if let Some(team) = settings.favorite {
        header.push_str(&format!(" | Following: {}", team.name()));
    }
    header
}

pub fn format_row(row: &Row, timezone: &str) -> String {
    let marker = if row.favorite { "*" } else { " " };
    let when = match row.status {
        GameStatus::Final => "FINAL".to_string(),
        GameStatus::InProgress => "LIVE".to_string(),
        GameStatus::Postponed => "PPD".to_string(),
        GameStatus::Scheduled => local_time(row.start_time, timezone),
    };

    let mut line = format!(
        "{marker} {when:>8}  {:>4} @ {:<4}  [{}]",
        row.away,
        row.home,
        row.verdict.badge()
    );

    let extra: Vec<&str> = row
        .verdict
        .networks
        .iter()
        .filter(|n| Some(**n) != row.verdict.national)
        .map(|n| n.label())
        .collect();
    if !extra.is_empty() {
        line.push_str(&format!("  also: {}", extra.join(", ")));
    }
    line
}

/// 12-hour wall-clock time in `timezone`, falling back to UTC for an unknown zone.
fn local_time(start: DateTime<Utc>, timezone: &str) -> String {
    match timezone.parse::<Tz>() {
        Ok(tz) => start.with_timezone(&tz).format("%-I:%M %p").to_string(),
        Err(_) => start.format("%H:%M UTC").to_string(),
    }
}

pub fn render(rows: &[Row], settings: &Settings, region: &Region, now: DateTime<Utc>) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header(settings, region, now));
    if rows.is_empty() {
        lines.push("No games tonight".to_string());
    }
    lines.extend(rows.iter().map(|row| format_row(row, &settings.timezone)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tonight_engine::{Franchise, Network, Team};

    fn utc(d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, mi, 0).unwrap()
    }

    fn game(id: &str, away: &str, home: &str, start: DateTime<Utc>, broadcasts: &[&str]) -> Game {
        Game::new(
            id,
            start,
            Team::new(away, away),
            Team::new(home, home),
            broadcasts.iter().copied(),
            true,
        )
    }

    fn slate() -> Vec<Game> {
        let mut finished = game("1", "GSW", "SAC", utc(1, 20, 0), &["TNT"]);
        finished.status = GameStatus::Final;
        vec![
            finished,
            game("2", "LAL", "BOS", utc(2, 0, 30), &["ESPN", "NBC Sports Boston", "Peacock"]),
            game("3", "PHX", "UTA", utc(2, 2, 0), &["Bally Sports Arizona"]),
            game("4", "NYK", "MIA", utc(2, 0, 0), &["NBA TV"]),
            game("5", "CHI", "DET", utc(3, 0, 0), &["ESPN"]),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.verdict.game_id.as_str()).collect()
    }

    #[test]
    fn tonight_filter_and_start_order() {
        let settings = Settings::default();
        let rows = build(&slate(), &settings, &Region::from_state("US", "TX"), utc(1, 18, 0));
        assert_eq!(ids(&rows), vec!["1", "4", "2", "3"]);
    }

    #[test]
    fn all_day_and_hide_finished() {
        let settings = Settings { all_day: true, hide_finished: true, ..Settings::default() };
        let rows = build(&slate(), &settings, &Region::unknown(), utc(1, 18, 0));
        assert_eq!(ids(&rows), vec!["4", "2", "3", "5"]);
    }

    #[test]
    fn favourite_games_sort_first() {
        let settings = Settings { favorite: Some(Franchise::Phx), ..Settings::default() };
        let rows = build(&slate(), &settings, &Region::unknown(), utc(1, 18, 0));
        assert_eq!(ids(&rows)[0], "3");
        assert!(rows[0].favorite);
        assert!(format_row(&rows[0], &settings.timezone).starts_with('*'));
        assert!(
            header(&settings, &Region::unknown(), utc(1, 18, 0))
                .ends_with("| Following: Phoenix Suns")
        );
    }

    #[test]
    fn hidden_networks_never_show() {
        let settings = Settings { hidden_networks: vec![Network::Espn], ..Settings::default() };
        let rows = build(&slate(), &settings, &Region::unknown(), utc(1, 18, 0));
        let lal = rows.iter().find(|r| r.verdict.game_id == "2").unwrap();
        assert_eq!(lal.verdict.national, None);
        assert_eq!(lal.verdict.networks, vec![Network::Peacock]);
        assert!(!format_row(lal, &settings.timezone).contains("ESPN"));
    }

    #[test]
    fn rows_format_in_local_time() {
        let settings = Settings::default();
        let region = Region::from_state("US", "MA");
        let rows = build(&slate(), &settings, &region, utc(1, 18, 0));
        let lal = rows.iter().find(|r| r.verdict.game_id == "2").unwrap();
        assert_eq!(
            format_row(lal, &settings.timezone),
            "   7:30 PM   LAL @ BOS   [ESPN]  also: Peacock"
        );
        let phx = rows.iter().find(|r| r.verdict.game_id == "3").unwrap();
        assert!(format_row(phx, &settings.timezone).contains("[League Pass — Available]"));
        let gsw = rows.iter().find(|r| r.verdict.game_id == "1").unwrap();
        assert!(format_row(gsw, &settings.timezone).contains("FINAL"));
    }

    #[test]
    fn render_never_prints_regional_names() {
        let settings = Settings { all_day: true, ..Settings::default() };
        let region = Region::from_state("US", "MA");
        let rows = build(&slate(), &settings, &region, utc(1, 18, 0));
        let out = render(&rows, &settings, &region, utc(1, 18, 0));
        assert!(out.starts_with("NBA Mon Jan 1 (America/New_York) | Region: MA"));
        assert!(!out.contains("NBC Sports Boston"));
        assert!(!out.contains("Bally"));
    }

    #[test]
    fn empty_slate_says_so() {
        let out = render(&[], &Settings::default(), &Region::unknown(), utc(1, 18, 0));
        assert!(out.ends_with("No games tonight"));
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        assert_eq!(local_time(utc(2, 0, 30), "Nowhere/Special"), "00:30 UTC");
        assert_eq!(local_time(utc(2, 0, 30), "America/Los_Angeles"), "4:30 PM");
    }
}
