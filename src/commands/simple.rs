//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use crate::core::Verdict;
use crate::error::{Error, Result};
use crate::game::{MAX_GUESSES, StateStore};
use crate::output::{print_board, print_result};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play today's puzzle reading guesses from `input`
///
/// Ends when the game is over, on `quit`, or at end of input. Progress is
/// saved after every accepted guess.
///
/// # Errors
///
/// Returns an error if reading input, writing output or saving fails.
pub fn run_simple<S: StateStore, R: BufRead>(session: &mut Session<S>, mut input: R) -> Result<()> {
    let length = session.game().word_length();

    println!("\n╔══════════════════════════════════════╗");
    println!("║         lesble #{:<6}               ║", session.game().day());
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the {length}-letter word in {MAX_GUESSES} tries. Type 'quit' to stop.");

    if !session.game().guesses().is_empty() {
        print_board(session.game());
    }

    while !session.is_complete() {
        let turn = session.game().guesses().len() + 1;
        let Some(line) = read_line(&mut input, &format!("Guess {turn}/{MAX_GUESSES}"))? else {
            return Ok(());
        };
        let guess = line.trim().to_lowercase();

        match guess.as_str() {
            "" => continue,
            "quit" | "exit" => {
                println!("\n👋 Progress saved. See you later!\n");
                return Ok(());
            }
            _ => {}
        }

        if guess.chars().count() != length {
            println!("{}", format!("Words are {length} letters long").red());
            continue;
        }

        let result = session.submit(&guess)?;
        if result.verdict == Verdict::Invalid {
            println!(
                "{}",
                format!("{} is not in the word list", guess.to_uppercase()).red()
            );
            continue;
        }

        print_board(session.game());
    }

    print_result(session.game());
    Ok(())
}

/// Prompt and read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| Error::io("flush stdout", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| Error::io("read input", e))?;

    Ok((read > 0).then_some(line))
}
