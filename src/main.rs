use std::env;
use std::sync::Arc;

use royale_stats::clash::{DEFAULT_RANKING_LIMIT, LocationScope, PlayerTag};
use royale_stats::db::{self, Repository};
use royale_stats::state::{BattleLog, Leaderboard, LoadOutcome, PlayerSearch};
use royale_stats::{AppError, ClashClient, Config, logging};
use tracing::{error, info, warn};

const USAGE: &str = "usage: royale-stats <TAG> [--save] | royale-stats --top [LOCATION_ID]";

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    logging::init(config.log_format);

    info!("👑 Starting...");

    if let Err(e) = run(config, env::args().skip(1).collect()).await {
        error!(error = %e, "👑 ❌ Fatal error");
        std::process::exit(1);
    }
}

async fn run(config: Config, args: Vec<String>) -> Result<(), AppError> {
    let client = Arc::new(ClashClient::new(&config.api)?);

    match args.first().map(String::as_str) {
        Some("--top") => {
            let scope = match args.get(1) {
                Some(raw) => raw.parse::<LocationScope>()?,
                None => LocationScope::Global,
            };
            show_leaderboard(client, scope).await;
            Ok(())
        }
        Some(tag) => {
            let save = args.iter().any(|a| a == "--save");
            let store = if save {
                Some(db::connect(&config.database_url).await?)
            } else {
                None
            };
            show_player(client, tag, store.as_ref()).await
        }
        None => {
            eprintln!("{USAGE}");
            Ok(())
        }
    }
}

async fn show_player(
    client: Arc<ClashClient>,
    raw_tag: &str,
    store: Option<&Repository>,
) -> Result<(), AppError> {
    let tag = PlayerTag::parse(raw_tag)?;
    let search = PlayerSearch::new(client.clone());
    let battles = BattleLog::new(client);

    if search.load(tag.as_str()).await != LoadOutcome::Loaded {
        warn!(
            error = %search.state().error_message().unwrap_or_default(),
            "🔎 ⚠️ Player lookup failed"
        );
        return Ok(());
    }

    search.state().read(|s| {
        if let Some(player) = &s.result {
            info!(
                name = %player.name,
                tag = %player.tag,
                trophies = ?player.trophies,
                best_trophies = ?player.best_trophies,
                clan = player.clan_name().unwrap_or("-"),
                win_rate = %player.win_rate_display(),
                "🔎 Player"
            );
        }
    });

    if battles.load(tag.as_str()).await == LoadOutcome::Loaded {
        let stats = battles.stats();
        info!(
            wins = stats.wins,
            losses = stats.losses,
            draws = stats.draws,
            win_rate = %format!("{:.1}%", stats.win_rate),
            average_crowns = %format!("{:.2}", stats.average_crowns),
            "⚔️ Recent battles"
        );
        battles.state().read(|s| {
            for battle in s.result.iter().flatten().take(5) {
                let trophy_change = battle.own().and_then(|p| p.trophy_change_display());
                info!(
                    outcome = %battle.outcome(),
                    kind = %battle.battle_type_display(),
                    played_at = %battle.played_at_display(),
                    opponent = battle.rival().and_then(|p| p.name.as_deref()).unwrap_or("-"),
                    trophies = trophy_change.as_deref().unwrap_or("-"),
                    "⚔️"
                );
            }
        });
    } else {
        warn!(
            error = %battles.state().error_message().unwrap_or_default(),
            "⚔️ ⚠️ Battle log unavailable"
        );
    }

    if let Some(store) = store {
        let now = db::unix_now();
        if let Some(favorite) = search.favorite_record(now) {
            let saved = store.insert_favorite_player(&favorite).await?;
            info!(id = saved.id, tag = %saved.tag, "🗄️ Saved favorite player");
        }
        if let Some(saved_match) = battles.latest_match_record(&tag, now) {
            let saved = store.insert_saved_match(&saved_match).await?;
            info!(id = saved.id, battle_time = %saved.battle_time, "🗄️ Saved latest match");
        }
    }

    Ok(())
}

async fn show_leaderboard(client: Arc<ClashClient>, scope: LocationScope) {
    let leaderboard = Leaderboard::new(client);

    if leaderboard.load(scope, DEFAULT_RANKING_LIMIT).await != LoadOutcome::Loaded {
        warn!(
            error = %leaderboard.players().error_message().unwrap_or_default(),
            "🏆 ⚠️ Leaderboard unavailable"
        );
        return;
    }

    leaderboard.players().read(|s| {
        for player in s.result.iter().flatten() {
            info!(
                rank = player.rank,
                change = %player.rank_change_display(),
                name = %player.name,
                trophies = ?player.trophies,
                "🏆"
            );
        }
    });
}
