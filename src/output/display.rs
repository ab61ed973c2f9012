//! Display functions for game and command results

use super::formatters::{keyboard, word_row};
use crate::game::{GameState, Outcome};
use crate::wordlists::ListReport;
use colored::Colorize;

/// Print every guess so far followed by the keyboard
pub fn print_board(game: &GameState) {
    println!();
    for record in game.guesses() {
        println!("  {}", word_row(record.word(), record.letters()));
    }
    println!();
    for row in keyboard(game.knowledge()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-game banner, the answer and the share summary
pub fn print_result(game: &GameState) {
    println!("{}", "─".repeat(40).cyan());
    match game.outcome() {
        Some(Outcome::Won { guesses }) => println!(
            "{}",
            format!(
                "Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        Some(Outcome::Lost) => println!("{}", "Out of guesses".red().bold()),
        None => println!("{}", "Game in progress".yellow()),
    }

    if game.is_complete() {
        println!(
            "The correct word is {}",
            game.secret().to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(40).cyan());
    println!("{}", game.share_summary());
}

/// Print the word list audit
pub fn print_list_report(report: &ListReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LISTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Dictionary:    {} words", report.dictionary_size);
    println!("   Puzzles:       {}", report.puzzle_count);
    println!("   Today:         #{}", report.today_index);

    match (report.last_puzzle, report.days_left) {
        (Some(last), Some(days)) if days >= 0 => {
            println!("   Last puzzle:   {last}");
            println!("   Days left:     {}", days.to_string().bright_yellow());
        }
        (Some(last), Some(days)) => {
            println!("   Last puzzle:   {last}");
            println!(
                "   Days left:     {}",
                format!("none (ran out {} days ago)", -days).red().bold()
            );
        }
        _ => println!("   Last puzzle:   {}", "none".red()),
    }

    if report.is_healthy() {
        println!("\n{}", "✅ Every secret is a valid guess".green());
        return;
    }

    for (day, word) in &report.missing_secrets {
        println!(
            "{}",
            format!("   ❌ day {day}: '{word}' is not in the dictionary").red()
        );
    }
    for (day, word) in &report.irregular_lengths {
        println!(
            "{}",
            format!("   ⚠ day {day}: '{word}' has an unexpected length").yellow()
        );
    }
}
