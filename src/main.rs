mod analysis;
mod api;
mod config;
mod display;
mod error;
mod fetch;

use analysis::duo_stats::DuoTracker;
use analysis::scorer::{score_duo, ScoreWeights, Thresholds};
use api::client::RiotApiClient;
use chrono::DateTime;
use clap::Parser;
use config::{Config, Queue, Region};
use display::output::{
    display_duo_report, display_error, display_info, display_scan_summary, display_solo_player,
    display_success,
};
use error::AppError;

#[derive(Parser, Debug)]
#[command(name = "Duo Detect")]
#[command(about = "Analyze recent games and detect who is boosting whom", long_about = None)]
struct Args {
    /// Riot ID in Name#TAG form
    riot_id: String,

    /// Platform region (default: euw1, or RIOT_REGION)
    #[arg(short, long, value_enum)]
    region: Option<Region>,

    /// Queue to sample
    #[arg(short, long, value_enum, default_value = "solo")]
    queue: Queue,

    /// Number of recent matches to scan (max 100)
    #[arg(short, long, default_value = "20")]
    matches: usize,

    /// Minimum shared games before a teammate counts as a duo
    #[arg(long, default_value = "4")]
    min_games: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Validate the Riot ID before touching config or the network.
    let (game_name, tag_line) = parse_riot_id(&args.riot_id)?;

    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let player_key = format!("{}#{}", game_name, tag_line);
    display_info(&format!(
        "Scanning {} on {} ({})",
        player_key,
        config.region.shard(),
        args.queue.label()
    ));

    let client = RiotApiClient::new(config);

    // Step 1: Riot ID -> PUUID
    let account = client.get_account(game_name, tag_line)?;
    display_success(&format!("Found PUUID: {}…", &account.puuid[0..8.min(account.puuid.len())]));

    // Step 2: recent match IDs for the queue
    let requested = args.matches.clamp(1, 100);
    let match_ids = client.get_match_ids(&account.puuid, args.queue, requested)?;
    if match_ids.is_empty() {
        return Err(AppError::NoRankedGames);
    }
    display_success(&format!("Found {} matches to analyze", match_ids.len()));

    // Step 3: match details through the worker pool, best-effort
    let outcome = fetch::fetch_matches(&client, &match_ids);
    if outcome.matches.is_empty() {
        return Err(AppError::NoRankedGames);
    }
    if outcome.failed > 0 {
        display_info(&format!(
            "Skipped {} matches that failed to fetch",
            outcome.failed
        ));
    }

    display_scan_summary(
        outcome.matches.len(),
        match_ids.len(),
        args.queue.label(),
        sample_window(&outcome.matches),
    );

    // Step 4: aggregate per teammate, pick the duo
    let tracker = DuoTracker::aggregate(&account.puuid, &outcome.matches);

    match tracker.best_duo(args.min_games) {
        None => display_solo_player(args.min_games.max(1), tracker.matches_seen()),
        Some(duo) => {
            let report = score_duo(duo, &ScoreWeights::default(), &Thresholds::default());
            display_duo_report(&player_key, duo, &report);
        }
    }

    Ok(())
}

fn parse_riot_id(input: &str) -> Result<(&str, &str), AppError> {
    match input.split_once('#') {
        Some((name, tag)) if !name.trim().is_empty() && !tag.trim().is_empty() => {
            Ok((name.trim(), tag.trim()))
        }
        _ => Err(AppError::InvalidRiotId),
    }
}

fn sample_window(
    matches: &[api::models::MatchDto],
) -> Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)> {
    let stamps: Vec<_> = matches
        .iter()
        .filter(|m| m.info.game_creation > 0)
        .filter_map(|m| DateTime::from_timestamp_millis(m.info.game_creation))
        .collect();

    let oldest = stamps.iter().min().copied()?;
    let newest = stamps.iter().max().copied()?;
    Some((oldest, newest))
}
