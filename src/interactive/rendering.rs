//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, message line and statistics.

use super::app::App;
use crate::core::LetterStatus;
use crate::game::{BACKSPACE_LABEL, ENTER_LABEL, GameState, KEY_ROWS, Key, KeyState};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const WIDE_KEY_WIDTH: u16 = 7;
const STATS_WIDTH: u16 = 30;

/// Main UI rendering function
///
/// Returns the screen area of every on-screen key so clicks can be mapped
/// back to keys.
pub fn ui(f: &mut Frame, app: &App, now: Instant) -> Vec<(Rect, Key)> {
    // Sessions cap the row count at MAX_ROWS, so this fits in a u16
    let board_height = TILE_HEIGHT * app.session.config().total_rows as u16 + 2;
    let keyboard_height = TILE_HEIGHT * KEY_ROWS.len() as u16 + 2;

    let chunks = Layout::vertical([
        Constraint::Length(3),               // Header
        Constraint::Min(board_height),       // Board + stats
        Constraint::Length(3),               // Message
        Constraint::Length(keyboard_height), // Keyboard
        Constraint::Length(1),               // Status bar
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(STATS_WIDTH)]).split(chunks[1]);
    render_board(f, app, main_chunks[0]);
    render_stats(f, app, main_chunks[1]);

    render_message(f, app, now, chunks[2]);
    let hitboxes = render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    hitboxes
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.session.puzzle_number() {
        Some(n) => format!("WORD OF THE DAY #{n} · {}", app.setup.date),
        None => "WORD OF THE DAY · Practice".to_string(),
    };

    let header = Paragraph::new(title)
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

fn status_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: Option<char>, text_style: Style, border_style: Style) -> Paragraph<'static> {
    Paragraph::new(letter.map(String::from).unwrap_or_default())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();
    let block = Block::default().title(" Board ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); config.total_rows])
        .flex(Flex::Center)
        .split(inner);
    let input = app.session.current_input();

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); config.word_length])
            .flex(Flex::Center)
            .split(*row_area);

        let completed = app.session.guesses().get(row_index);
        let is_current = row_index == app.session.current_row() && !app.session.state().is_over();

        for (col, cell) in cells.iter().enumerate() {
            let widget = if let Some(feedback) = completed {
                let (letter, status) = feedback
                    .letters()
                    .nth(col)
                    .map_or((None, LetterStatus::Absent), |(l, s)| {
                        (Some(char::from(l)), s)
                    });
                let style = status_style(status);
                tile(letter, style, style)
            } else if is_current {
                let letter = input.chars().nth(col);
                // Cursor sits on the next empty box, or the last box when full
                let cursor = input.len().min(config.word_length - 1);
                let border = if col == cursor {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                tile(letter, Style::default().fg(Color::White), border)
            } else {
                tile(None, Style::default(), Style::default().fg(Color::DarkGray))
            };
            f.render_widget(widget, *cell);
        }
    }
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let total_rows = app.session.config().total_rows;
    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = vec![
        Line::from(format!("Played:   {}", stats.total_games)),
        Line::from(format!("Win rate: {:.0}%", stats.win_rate())),
        Line::from(""),
    ];
    for guesses in 1..=total_rows {
        let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
        lines.push(Line::from(format!(
            "{guesses}: {} {count}",
            create_progress_bar(count as f64, max as f64, 15)
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let text = app.message.visible(now).unwrap_or_default();
    let color = match app.session.state() {
        GameState::Won => Color::Green,
        GameState::Lost => Color::Red,
        GameState::Active => Color::Yellow,
    };

    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyState::Burned => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        KeyState::Default => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) -> Vec<(Rect, Key)> {
    let block = Block::default().title(" Keyboard ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); KEY_ROWS.len()]).split(inner);
    let mut hitboxes = Vec::new();

    for (labels, row_area) in KEY_ROWS.iter().zip(rows.iter()) {
        let widths = labels.iter().map(|label| {
            if *label == BACKSPACE_LABEL || *label == ENTER_LABEL {
                Constraint::Length(WIDE_KEY_WIDTH)
            } else {
                Constraint::Length(TILE_WIDTH)
            }
        });
        let cells = Layout::horizontal(widths).flex(Flex::Center).split(*row_area);

        for (label, cell) in labels.iter().zip(cells.iter()) {
            let Some(key) = Key::from_virtual(label) else {
                continue;
            };
            let style = match key {
                Key::Letter(ch) => key_style(app.session.key_state(ch)),
                Key::Backspace | Key::Enter => Style::default().fg(Color::Cyan),
            };
            let text = if *label == BACKSPACE_LABEL { "⌫" } else { *label };

            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            f.render_widget(widget, *cell);
            hitboxes.push((*cell, key));
        }
    }

    hitboxes
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.can_start_new_game() {
        "Esc: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete | Click keys to type"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GameSetup;
    use crate::core::{Timestamp, Word, WordList};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> (Vec<(Rect, Key)>, String) {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| hitboxes = ui(f, app, Instant::now()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        (hitboxes, text)
    }

    fn app() -> App {
        let list = WordList::new(vec![Word::new("apple").unwrap()]).unwrap();
        let date = Timestamp::parse_date("2025-08-05").unwrap();
        App::new(GameSetup::new(list, date)).unwrap()
    }

    #[test]
    fn every_key_gets_a_hitbox() {
        let (hitboxes, _) = draw(&app());
        let total: usize = KEY_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(hitboxes.len(), total);
        assert!(hitboxes.iter().any(|(_, key)| *key == Key::Enter));
        assert!(hitboxes.iter().any(|(_, key)| *key == Key::Backspace));
    }

    #[test]
    fn header_shows_puzzle_number() {
        let (_, text) = draw(&app());
        assert!(text.contains("#4"));
        assert!(text.contains("2025-08-05"));
    }

    #[test]
    fn typed_letters_appear_on_board() {
        let mut app = app();
        let now = Instant::now();
        app.press(Key::Letter('Q'), now);
        app.press(Key::Letter('X'), now);
        app.press(Key::Letter('J'), now);
        let (_, text) = draw(&app);
        // Q, X and J also sit on the keyboard, so each now appears twice
        assert!(text.matches('X').count() >= 2);
        assert!(text.matches('J').count() >= 2);
    }
}
