//! TUI rendering with ratatui
//!
//! Draws the board, keyboard, messages and statistics from engine state.

use super::app::{App, MessageStyle};
use crate::core::{Classification, KeyboardState, WORD_LENGTH};
use crate::game::{Game, GameStatus, Session};
use crate::wordlists::Dictionary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let Some(game) = app.game.as_ref() else {
        render_loading(f, chunks[1]);
        return;
    };

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, game.session(), main_chunks[0]);
    render_side_panel(f, app, game, main_chunks[1]);
    render_status(f, game, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_loading(f: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading dictionary...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(loading, area);
}

/// Tile colours for a classification
fn tile_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
}

/// Board lines: submitted rows, the row being typed, then empty rows
fn board_lines(session: &Session) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(session.max_rows() * 2 + 3);

    for row in session.rows() {
        let spans: Vec<Span> = row
            .guess
            .text()
            .chars()
            .zip(row.result.classifications())
            .flat_map(|(letter, &classification)| tile(letter, tile_style(Some(classification))))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut remaining = session.max_rows() - session.rows().len();
    if session.status() == GameStatus::InProgress && remaining > 0 {
        let typed: Vec<char> = session.buffer().chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| match typed.get(i) {
                Some(&letter) => tile(
                    letter,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => tile('·', Style::default().fg(Color::DarkGray)),
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        remaining -= 1;
    }

    for _ in 0..remaining {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    match session.status() {
        GameStatus::Won => lines.push(Line::from(Span::styled(
            format!("Solved in {}/{}!", session.rows().len(), session.max_rows()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        GameStatus::Lost => lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                session.target().text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        GameStatus::InProgress => {}
    }

    lines
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let title = format!(
        " Board ({} left) ",
        session.remaining_attempts()
    );
    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| tile(letter, tile_style(keyboard.get(letter))))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_side_panel(f: &mut Frame, app: &App, game: &Game<Dictionary>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    let keyboard = Paragraph::new(keyboard_lines(game.session().keyboard()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, game: &Game<Dictionary>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats = game.statistics();
    let stats_text = format!(
        "Played: {} | Win: {:.0}%",
        stats.games_played,
        stats.win_percentage()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let streak_text = format!(
        "Streak: {} | Max: {}",
        stats.current_streak, stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if game.session().status().is_terminal() {
        "n/Enter: New Game | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
