//! Simple line-mode game
//!
//! Text-based play without the TUI: one whole word per line.

use crate::game::Game;
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use crate::wordlists::{LoadStatus, WordSource};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-mode game until the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(game: &mut Game<W>, load_status: &LoadStatus) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Line Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess:");
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!("  - {} letter elsewhere in the word", " Y ".black().on_yellow());
    println!("  - {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game, ':stats' for statistics\n");

    if let LoadStatus::Fallback { reason } = load_status {
        println!("{} {reason}\n", "⚠ Using the built-in word list:".yellow());
    }
    if game.restored() {
        println!("↺ Resuming your saved game.");
    }

    loop {
        print_board(game.session());

        if game.session().status().is_terminal() {
            print_outcome(game.session());
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.new_game();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_keyboard(game.session().keyboard());

        let turn = game.session().rows().len() + 1;
        let prompt = format!("Guess {turn}/{}", game.session().max_rows());
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Your game is saved. Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.new_game();
                println!("\n🔄 New game started!");
            }
            // Five-letter commands would shadow real guesses
            ":stats" | "?" => print_statistics(game.statistics(), game.session().max_rows()),
            _ => {
                if let Err(err) = game.submit_word(&input) {
                    println!("❌ {err}");
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
