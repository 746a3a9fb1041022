use colored::Colorize;

use crate::core::{config::RoundConfig, stats::StatisticsRecord};

const WIDE_RULE: usize = 50;

/// Print the welcome banner and the rules for `config`.
pub fn print_welcome(config: &RoundConfig) {
    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("{}", "=== GUESS THE NUMBER ===".green().bold());
    println!("{}", "=".repeat(WIDE_RULE));
    println!("Welcome to the game!\n");
    println!(
        "I'm thinking of a number between {} and {}.",
        config.min_number(),
        config.max_number()
    );
    println!(
        "You have {} attempts to guess it.",
        config.max_attempts()
    );
    println!("Rules:");
    println!("  • Enter numbers inside the range");
    println!("  • After every attempt you get a hint");
    println!("  • Type 'exit' to leave the current round");
    println!("{}\n", "=".repeat(WIDE_RULE));
}

/// Print the statistics table for `record`.
pub fn print_stats(record: &StatisticsRecord) {
    let metrics = record.derive_metrics();
    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("{}", "📊 GAME STATISTICS".bold());
    println!("{}", "=".repeat(WIDE_RULE));
    println!("🏆 Games played: {}", record.games_played);
    println!(
        "🎯 Wins: {} ({:.1}%)",
        record.games_won, metrics.win_rate_percent
    );
    println!("📊 Average attempts: {:.1}", metrics.avg_attempts);
    if let Some(best) = metrics.best_score {
        println!("⭐ Best result: {} attempts", best);
    }
    println!("{}\n", "=".repeat(WIDE_RULE));
}

/// Print the final statistics block shown when a session ends.
pub fn print_final_stats(record: &StatisticsRecord) {
    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("{}", "SESSION SUMMARY".yellow().bold());
    print_stats(record);
}

/// Print the farewell shown when input ends or is interrupted.
pub fn print_interrupted(how: &str) {
    println!("\nProgram interrupted by the user ({})\nGoodbye!", how);
}
