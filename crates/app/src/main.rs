mod config;
mod render;

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hub_core::catalog::is_known_language;
use services::{ChallengeService, Clock, ProgressStore, pick_random_quote};

use config::{AppConfig, failure_message, print_usage};
use render::{DashboardReport, LearnerReport, render_text};

/// Granted after a learner's first unlocked challenge.
const FIRST_CHALLENGE_ACHIEVEMENT: &str = "First Challenge";
/// Granted once a learner reaches [`CHALLENGER_XP`].
const CHALLENGER_BADGE: &str = "Challenger";
const CHALLENGER_XP: u64 = 50;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = AppConfig::parse(std::env::args().skip(1), |key| std::env::var(key).ok())?;
    let Some(config) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing(config.verbose);

    // One store per process; seeded runs are reproducible end to end.
    let (store, mut rng) = match config.seed {
        Some(seed) => (
            ProgressStore::seeded(Clock::system(), seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (ProgressStore::new(Clock::system()), StdRng::from_os_rng()),
    };
    let store = Arc::new(store);
    let challenges = ChallengeService::new(Arc::clone(&store));

    for language in &config.languages {
        if !is_known_language(language) {
            warn!(language = %language, "language is not in the picker list");
        }
    }

    let quote = pick_random_quote(&mut rng);
    let mut learners = Vec::with_capacity(config.names.len());
    for name in &config.names {
        store.ensure_user(name, config.study_hours, config.languages.iter().cloned())?;

        let mut unlocked = Vec::new();
        for _ in 0..config.challenges {
            let result = challenges.unlock(name, &mut rng)?;
            if result.xp_points >= CHALLENGER_XP {
                store.add_badge(name, CHALLENGER_BADGE)?;
            }
            unlocked.push(result);
        }
        if !unlocked.is_empty() {
            store.add_achievement(name, FIRST_CHALLENGE_ACHIEVEMENT)?;
        }

        let Some(record) = store.get_user(name)? else {
            continue;
        };
        let metrics = store.metrics(name)?;
        learners.push(LearnerReport {
            record,
            metrics,
            challenges: unlocked,
        });
    }

    let report = DashboardReport {
        quote,
        learners,
        leaderboard: store.leaderboard()?,
    };
    info!(learners = report.learners.len(), "dashboard rendered");

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprint!("{}", failure_message(err.as_ref()));
        std::process::exit(2);
    }
}
