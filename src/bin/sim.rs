use guess_number::{BisectPlayer, GameSession, RoundConfig, StatsStore};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("Usage: {} <seed> <rounds> <stats-file> [max-attempts]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: u32 = args[2].parse()?;
    let stats_file = &args[3];
    let max_attempts: u32 = match args.get(4) {
        Some(a) => a.parse()?,
        None => RoundConfig::default().max_attempts(),
    };

    let config = RoundConfig::new(
        RoundConfig::default().min_number(),
        RoundConfig::default().max_number(),
        max_attempts,
    )?;
    let rng = SmallRng::seed_from_u64(seed);
    let player = BisectPlayer::new(rounds.max(1));

    let mut session = GameSession::new(config, StatsStore::new(stats_file), Box::new(player), rng);
    let end = session.run()?;

    let record = *session.record();
    let metrics = record.derive_metrics();
    let result = json!({
        "end": format!("{:?}", end),
        "record": record,
        "win_rate_percent": metrics.win_rate_percent,
        "avg_attempts": metrics.avg_attempts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
