//! Display functions for line-mode output

use super::formatters::{create_progress_bar, share_text};
use crate::core::{Classification, KeyboardState, WORD_LENGTH};
use crate::game::{GameStatus, Row, Session, Statistics};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colour a letter by its classification
fn paint(letter: char, classification: Option<Classification>) -> ColoredString {
    let cell = format!(" {letter} ");
    match classification {
        Some(Classification::Correct) => cell.black().on_green().bold(),
        Some(Classification::Present) => cell.black().on_yellow().bold(),
        Some(Classification::Absent) => cell.white().on_bright_black(),
        None => cell.normal(),
    }
}

/// Print one submitted row as coloured tiles
pub fn print_row(row: &Row) {
    let tiles: Vec<String> = row
        .guess
        .text()
        .chars()
        .zip(row.result.classifications())
        .map(|(letter, &classification)| paint(letter, Some(classification)).to_string())
        .collect();
    println!("  {}", tiles.join(""));
}

/// Print the whole board: submitted rows, then placeholders for the rest
pub fn print_board(session: &Session) {
    println!();
    for row in session.rows() {
        print_row(row);
    }
    for _ in session.rows().len()..session.max_rows() {
        println!("  {}", " · ".repeat(WORD_LENGTH).bright_black());
    }
    println!();
}

/// Print the keyboard coloured by the best classification of each letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| paint(letter, keyboard.get(letter)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent));
    }
    println!();
}

/// Print the outcome of a finished session
pub fn print_outcome(session: &Session) {
    match session.status() {
        GameStatus::Won => {
            let guesses = session.rows().len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                session.target().text().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return,
    }
    println!("\n{}\n", share_text(session));
}

/// Print statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics, max_rows: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!(
        "   Win %:           {}",
        format!("{:.0}", stats.win_percentage()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=max_rows {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(f64::from(count), f64::from(most), 40);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
    println!();
}
