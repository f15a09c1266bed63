//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, WORD_LENGTH};
use crate::game::LetterStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app.game.state().letters(), side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors for a cell status
fn tile_style(status: CellStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        CellStatus::Correct => base.fg(Color::Black).bg(Color::Green),
        CellStatus::Present => base.fg(Color::Black).bg(Color::Yellow),
        CellStatus::Absent => base.fg(Color::White).bg(Color::DarkGray),
        CellStatus::Unrevealed => Style::default().fg(Color::Gray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let mut lines = Vec::with_capacity(state.max_guesses() * 2);
    let mut typing_row = !app.is_finished();

    for row in state.rows() {
        let spans: Vec<Span> = match row {
            Some(record) => record
                .word
                .text()
                .chars()
                .zip(record.feedback.iter())
                .map(|(c, status)| {
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), tile_style(status))
                })
                .collect(),
            None if typing_row => {
                // First empty row shows what is being typed
                typing_row = false;
                let mut typed: Vec<char> = app.input_buffer.chars().collect();
                typed.resize(WORD_LENGTH, '_');
                typed
                    .into_iter()
                    .map(|c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect()
            }
            None => (0..WORD_LENGTH)
                .map(|_| Span::styled(" · ", tile_style(CellStatus::Unrevealed)))
                .collect(),
        };

        let spaced: Vec<Span> = spans
            .into_iter()
            .flat_map(|span| [span, Span::raw(" ")])
            .collect();
        lines.push(Line::from(spaced));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, letters: &LetterStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| {
                        let status = letters.get(c);
                        let style = match status {
                            CellStatus::Unrevealed => Style::default().fg(Color::White),
                            _ => tile_style(status),
                        };
                        Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.is_finished() {
        (
            " Game over | 'n' new game, 'q' quit ",
            String::new(),
            Color::Green,
        )
    } else {
        (
            " Enter a 5-letter word | Enter to submit, Esc to quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let distribution = app.stats.guess_distribution[1..]
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}:{count}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");

    let status = format!(
        "Guess {}/{} | Games: {} | Win Rate: {:.0}% | {distribution}",
        state.guesses().len(),
        state.max_guesses(),
        app.stats.total_games,
        app.stats.win_rate()
    );

    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
