use sqlx::FromRow;

use crate::clash::{Battle, Player, PlayerTag};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FavoritePlayer {
    pub id: i64,
    pub tag: String,
    pub name: String,
    pub trophies: Option<i32>,
    pub saved_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFavoritePlayer {
    pub tag: String,
    pub name: String,
    pub trophies: Option<i32>,
    pub saved_at: i64,
}

impl NewFavoritePlayer {
    pub fn from_player(player: &Player, saved_at: i64) -> Self {
        Self {
            tag: player.tag.clone(),
            name: player.name.clone(),
            trophies: player.trophies,
            saved_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SavedMatch {
    pub id: i64,
    pub battle_time: String,
    pub player_tag: String,
    pub opponent_name: Option<String>,
    pub team_crowns: Option<i32>,
    pub opponent_crowns: Option<i32>,
    pub victory: bool,
    pub battle_type: Option<String>,
    pub trophy_change: Option<i32>,
    pub saved_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSavedMatch {
    pub battle_time: String,
    pub player_tag: String,
    pub opponent_name: Option<String>,
    pub team_crowns: Option<i32>,
    pub opponent_crowns: Option<i32>,
    pub victory: bool,
    pub battle_type: Option<String>,
    pub trophy_change: Option<i32>,
    pub saved_at: i64,
}

impl NewSavedMatch {
    pub fn from_battle(battle: &Battle, player_tag: &PlayerTag, saved_at: i64) -> Self {
        let own = battle.own();
        let rival = battle.rival();

        Self {
            battle_time: battle.battle_time.clone(),
            player_tag: player_tag.to_string(),
            opponent_name: rival.and_then(|p| p.name.clone()),
            team_crowns: own.and_then(|p| p.crowns),
            opponent_crowns: rival.and_then(|p| p.crowns),
            victory: battle.is_victory(),
            battle_type: battle.battle_type.clone(),
            trophy_change: own.and_then(|p| p.trophy_change),
            saved_at,
        }
    }
}
