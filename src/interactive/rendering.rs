//! TUI rendering with ratatui
//!
//! Board of coloured guesses, candidate gauge, message log and input box.

use super::app::{App, MessageStyle};
use crate::core::{Hint, Judgment, Word};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ABSURDLE")
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

const fn cell_color(judgment: Judgment) -> Color {
    match judgment {
        Judgment::Exact => Color::Green,
        Judgment::Present => Color::Yellow,
        Judgment::Absent => Color::Gray,
    }
}

fn cell_span(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn guess_line(guess: &Word, hint: &Hint) -> Line<'static> {
    let mut spans = Vec::with_capacity(guess.len() * 2);
    for (&letter, &judgment) in guess.letters().iter().zip(hint.judgments()) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(cell_color(judgment))
            .add_modifier(Modifier::BOLD);
        spans.push(cell_span(char::from(letter), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pending_line(input: &str, length: usize) -> Line<'static> {
    let style = Style::default()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let mut letters = input.chars();
    let mut spans = Vec::with_capacity(length * 2);
    for _ in 0..length {
        spans.push(cell_span(letters.next().unwrap_or(' '), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.word_length();
    let mut lines: Vec<Line> = Vec::new();

    for turn in app.game.history() {
        lines.push(guess_line(&turn.guess, &turn.hint));
        lines.push(Line::from(""));
    }

    if !app.game.status().is_over() {
        lines.push(pending_line(&app.input_buffer, length));
        lines.push(Line::from(""));
        for _ in 1..app.game.turns_left() {
            lines.push(pending_line("", length));
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining().len();
    let total = app.game.dictionary().len().max(1);
    let ratio = (remaining as f64 / total as f64).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
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
    let (title, content, color) = match app.game.status() {
        GameStatus::Won { .. } => (
            " 🎉 You win! | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            " You lose! | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Red,
        ),
        GameStatus::InProgress => (
            format!(" Input your guess ({} letters) ", app.word_length()),
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let turns = Paragraph::new(format!(
        "Turn {}/{}",
        app.game.history().len(),
        app.game.config().max_turns
    ))
    .alignment(Alignment::Center);
    f.render_widget(turns, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
