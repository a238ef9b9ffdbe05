use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

// ============================================================================
// Shared shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanSummary {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub badge_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUrls {
    pub medium: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub id: Option<i64>,
    pub level: Option<i32>,
    pub max_level: Option<i32>,
    pub rarity: Option<String>,
    pub count: Option<i32>,
    pub elixir_cost: Option<i32>,
    pub icon_urls: Option<IconUrls>,
}

/// Error body returned by the API alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub reason: String,
    pub message: String,
}

/// Wrapper used by list endpoints (`{"items": [...]}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsPage<T> {
    pub items: Vec<T>,
}

// ============================================================================
// Players
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub exp_level: Option<i32>,
    pub trophies: Option<i32>,
    pub best_trophies: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub battle_count: Option<i32>,
    pub three_crown_wins: Option<i32>,
    pub challenge_cards_won: Option<i32>,
    pub challenge_max_wins: Option<i32>,
    pub tournament_cards_won: Option<i32>,
    pub tournament_battle_count: Option<i32>,
    pub role: Option<String>,
    pub donations: Option<i32>,
    pub donations_received: Option<i32>,
    pub total_donations: Option<i32>,
    pub war_day_wins: Option<i32>,
    pub clan_cards_collected: Option<i32>,
    pub clan: Option<ClanSummary>,
    pub arena: Option<Arena>,
    pub league_statistics: Option<LeagueStatistics>,
    pub cards: Option<Vec<Card>>,
    pub current_deck: Option<Vec<Card>>,
    pub current_favourite_card: Option<Card>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStatistics {
    pub current_season: Option<Season>,
    pub previous_season: Option<Season>,
    pub best_season: Option<Season>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: Option<String>,
    pub trophies: Option<i32>,
    pub best_trophies: Option<i32>,
}

impl Player {
    /// Wins plus losses, counting only the values the API reported.
    pub fn total_battles(&self) -> i64 {
        let count = |v: Option<i32>| v.filter(|n| *n >= 0).map_or(0, i64::from);
        count(self.wins) + count(self.losses)
    }

    /// Percentage of won games, 0 when the record is unknown, negative or empty.
    pub fn win_rate(&self) -> f64 {
        match (self.wins, self.losses) {
            (Some(w), Some(l)) if w >= 0 && l >= 0 && (w > 0 || l > 0) => {
                f64::from(w) / (f64::from(w) + f64::from(l)) * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn win_rate_display(&self) -> String {
        format!("{:.1}%", self.win_rate())
    }

    pub fn clan_name(&self) -> Option<&str> {
        self.clan.as_ref().and_then(|c| c.name.as_deref())
    }
}

// ============================================================================
// Battle log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(rename = "type")]
    pub battle_type: Option<String>,
    pub battle_time: String,
    pub is_ladder_tournament: Option<bool>,
    pub arena: Option<Arena>,
    pub game_mode: Option<GameMode>,
    pub deck_selection: Option<String>,
    pub team: Vec<Participant>,
    pub opponent: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub starting_trophies: Option<i32>,
    pub trophy_change: Option<i32>,
    pub crowns: Option<i32>,
    pub king_tower_hit_points: Option<i32>,
    pub princess_towers_hit_points: Option<Vec<i32>>,
    pub cards: Option<Vec<Card>>,
}

impl Participant {
    pub fn trophy_change_display(&self) -> Option<String> {
        self.trophy_change.map(|change| format!("{change:+}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Draw,
    Loss,
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Victory => "Victory",
            Self::Draw => "Draw",
            Self::Loss => "Defeat",
        })
    }
}

impl Battle {
    /// Format of `battleTime`, e.g. `20251030T123456.000Z`.
    const BATTLE_TIME_FORMAT: &'static str = "%Y%m%dT%H%M%S%.fZ";

    /// First entry on the player's side.
    pub fn own(&self) -> Option<&Participant> {
        self.team.first()
    }

    /// First entry on the opposing side.
    pub fn rival(&self) -> Option<&Participant> {
        self.opponent.first()
    }

    fn crowns(&self) -> Option<(i32, i32)> {
        let own = self.own()?.crowns?;
        let rival = self.rival()?.crowns?;
        Some((own, rival))
    }

    pub fn is_victory(&self) -> bool {
        self.crowns().is_some_and(|(own, rival)| own > rival)
    }

    pub fn is_draw(&self) -> bool {
        self.crowns().is_some_and(|(own, rival)| own == rival)
    }

    pub fn outcome(&self) -> BattleOutcome {
        if self.is_victory() {
            BattleOutcome::Victory
        } else if self.is_draw() {
            BattleOutcome::Draw
        } else {
            BattleOutcome::Loss
        }
    }

    pub fn played_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.battle_time, Self::BATTLE_TIME_FORMAT)
            .map(|naive| naive.and_utc())
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(&self.battle_time)
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok()
            })
    }

    /// Human readable date, falling back to the raw timestamp.
    pub fn played_at_display(&self) -> String {
        self.played_at()
            .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
            .unwrap_or_else(|| self.battle_time.clone())
    }

    pub fn battle_type_display(&self) -> String {
        self.battle_type
            .as_deref()
            .map(capitalize_words)
            .unwrap_or_else(|| "Battle".to_string())
    }
}

fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ============================================================================
// Rankings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPlayer {
    pub tag: String,
    pub name: String,
    pub rank: i32,
    pub previous_rank: Option<i32>,
    pub exp_level: Option<i32>,
    pub trophies: Option<i32>,
    pub clan: Option<ClanSummary>,
    pub arena: Option<Arena>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankChange {
    New,
    Up(i32),
    Down(i32),
    Unchanged,
}

impl fmt::Display for RankChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str("NEW"),
            Self::Up(n) => write!(f, "↑{n}"),
            Self::Down(n) => write!(f, "↓{n}"),
            Self::Unchanged => f.write_str("−"),
        }
    }
}

impl TopPlayer {
    pub fn rank_change(&self) -> RankChange {
        let Some(previous) = self.previous_rank else {
            return RankChange::New;
        };

        let change = previous - self.rank;
        match change {
            c if c > 0 => RankChange::Up(c),
            c if c < 0 => RankChange::Down(c.abs()),
            _ => RankChange::Unchanged,
        }
    }

    pub fn rank_change_display(&self) -> String {
        self.rank_change().to_string()
    }
}

// ============================================================================
// Locations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub is_country: bool,
    pub country_code: Option<String>,
}

impl Location {
    /// Regional indicator flag for two letter country codes.
    pub fn flag(&self) -> Option<String> {
        let code = self.country_code.as_deref()?;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        code.to_ascii_uppercase()
            .chars()
            .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }

    pub fn display_name(&self) -> String {
        match self.flag() {
            Some(flag) => format!("{} {}", flag, self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn player(wins: Option<i32>, losses: Option<i32>) -> Player {
        serde_json::from_value(json!({
            "tag": "#ABC123",
            "name": "Ash",
            "wins": wins,
            "losses": losses,
        }))
        .unwrap()
    }

    fn battle(own: Option<i32>, rival: Option<i32>) -> Battle {
        serde_json::from_value(json!({
            "type": "PvP",
            "battleTime": "20251030T123456.000Z",
            "team": [{ "tag": "#A", "name": "Ash", "crowns": own, "trophyChange": 30 }],
            "opponent": [{ "tag": "#B", "name": "Misty", "crowns": rival }],
        }))
        .unwrap()
    }

    fn top_player(rank: i32, previous: Option<i32>) -> TopPlayer {
        serde_json::from_value(json!({
            "tag": "#TOP",
            "name": "Champ",
            "rank": rank,
            "previousRank": previous,
        }))
        .unwrap()
    }

    #[test]
    fn win_rate_follows_record() {
        assert!((player(Some(100), Some(50)).win_rate() - 66.666).abs() < 0.01);
        assert_eq!(player(Some(100), Some(50)).win_rate_display(), "66.7%");
        assert_eq!(player(Some(0), Some(0)).win_rate(), 0.0);
        assert_eq!(player(None, Some(3)).win_rate(), 0.0);
        assert_eq!(player(Some(5), Some(0)).win_rate(), 100.0);
    }

    #[test]
    fn win_rate_stays_in_range_for_extreme_records() {
        let huge = player(Some(i32::MAX), Some(1));
        assert!((0.0..=100.0).contains(&huge.win_rate()));
        assert_eq!(huge.total_battles(), i64::from(i32::MAX) + 1);

        let negative = player(Some(-5), Some(10));
        assert_eq!(negative.win_rate(), 0.0);
        assert_eq!(negative.total_battles(), 10);
    }

    #[test]
    fn battle_without_sides_is_rejected() {
        let res = serde_json::from_value::<Battle>(json!({
            "type": "PvP",
            "battleTime": "20251030T123456.000Z",
        }));

        assert!(res.is_err());
    }

    #[test]
    fn missing_record_stays_unknown() {
        let p = player(None, None);

        assert_eq!(p.trophies, None);
        assert_eq!(p.clan, None);
        assert_eq!(p.total_battles(), 0);
    }

    #[test]
    fn exactly_one_outcome_holds() {
        for (own, rival) in [
            (Some(3), Some(1)),
            (Some(1), Some(1)),
            (Some(0), Some(2)),
            (None, Some(1)),
            (Some(1), None),
        ] {
            let b = battle(own, rival);
            let loss = !b.is_victory() && !b.is_draw();
            let held = [b.is_victory(), b.is_draw(), loss]
                .iter()
                .filter(|x| **x)
                .count();
            assert_eq!(held, 1, "crowns {own:?} vs {rival:?}");
        }

        assert_eq!(battle(Some(3), Some(1)).outcome(), BattleOutcome::Victory);
        assert_eq!(battle(Some(2), Some(2)).outcome(), BattleOutcome::Draw);
        assert_eq!(battle(Some(0), Some(1)).outcome(), BattleOutcome::Loss);
        assert_eq!(battle(None, None).outcome(), BattleOutcome::Loss);
    }

    #[test]
    fn empty_sides_count_as_loss() {
        let b: Battle = serde_json::from_value(json!({
            "battleTime": "20251030T123456.000Z",
            "team": [],
            "opponent": [],
        }))
        .unwrap();

        assert_eq!(b.outcome(), BattleOutcome::Loss);
        assert_eq!(b.battle_type_display(), "Battle");
    }

    #[test]
    fn battle_time_is_parsed() {
        let b = battle(Some(1), Some(0));
        let played = b.played_at().expect("timestamp should parse");

        assert_eq!(played.to_rfc3339(), "2025-10-30T12:34:56+00:00");
        assert_eq!(b.played_at_display(), "Oct 30, 2025 12:34");
    }

    #[test]
    fn unparseable_battle_time_falls_back_to_raw() {
        let mut b = battle(Some(1), Some(0));
        b.battle_time = "yesterday".to_string();

        assert!(b.played_at().is_none());
        assert_eq!(b.played_at_display(), "yesterday");
    }

    #[test]
    fn display_helpers() {
        let b = battle(Some(1), Some(0));

        assert_eq!(b.battle_type_display(), "Pvp");
        assert_eq!(
            b.own().and_then(Participant::trophy_change_display),
            Some("+30".to_string())
        );
        assert_eq!(b.rival().and_then(Participant::trophy_change_display), None);
        assert_eq!(capitalize_words("clanMate  war"), "Clanmate War");
    }

    #[test]
    fn rank_change_display() {
        assert_eq!(top_player(3, None).rank_change(), RankChange::New);
        assert_eq!(top_player(3, None).rank_change_display(), "NEW");
        assert_eq!(top_player(3, Some(7)).rank_change(), RankChange::Up(4));
        assert_eq!(top_player(3, Some(7)).rank_change_display(), "↑4");
        assert_eq!(top_player(9, Some(7)).rank_change(), RankChange::Down(2));
        assert_eq!(top_player(9, Some(7)).rank_change_display(), "↓2");
        assert_eq!(top_player(7, Some(7)).rank_change_display(), "−");
    }

    #[test]
    fn location_flag() {
        let france = Location {
            id: 57000087,
            name: "France".into(),
            is_country: true,
            country_code: Some("FR".into()),
        };
        let europe = Location {
            id: 57000000,
            name: "Europe".into(),
            is_country: false,
            country_code: None,
        };

        assert_eq!(france.display_name(), "🇫🇷 France");
        assert_eq!(europe.display_name(), "Europe");
    }
}
