//! TUI rendering with ratatui
//!
//! Layout: tile panel on top, the editable guess row in the middle, both
//! players' boards side by side below, then messages and a status bar.

use super::app::{App, Message, MessageStyle};
use crate::core::Hint;
use crate::game::{Phase, Player};
use crate::output::tile_row;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Tile panel
            Constraint::Length(3), // Guess row
            Constraint::Min(8),    // Player boards
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tiles(f, app, chunks[1]);
    render_guess_row(f, app, chunks[2]);
    render_boards(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("한글 낱말 대결 - KOREAN WORD DUEL")
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

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let tiles = app.session.tiles();
    let content = vec![
        Line::from(vec![
            Span::styled("자음  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                tile_row(&tiles.consonants),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("모음  ", Style::default().fg(Color::DarkGray)),
            Span::styled(tile_row(&tiles.vowels), Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Tiles ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_guess_row(f: &mut Frame, app: &App, area: Rect) {
    // After the match the row turns into the result banner
    let (title, content, color) = match app.session.phase() {
        Phase::Won(player) => (
            format!(" 🎉 Player {player} wins! "),
            Line::from(Span::styled(
                format!(
                    "The word was {} - press 'n' for a new round, 'q' to quit",
                    app.session.target()
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Color::Green,
        ),
        Phase::Drawn => (
            " Round over ".to_string(),
            Line::from(format!("The word was {}", app.session.target())),
            Color::Yellow,
        ),
        Phase::InProgress => {
            let mut spans = Vec::with_capacity(app.cells.len() * 2);
            for (i, cell) in app.cells.iter().enumerate() {
                let text = match cell {
                    Some(c) => format!(" {c} "),
                    None => " · ".to_string(),
                };
                let mut style = match cell {
                    Some(_) => Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                    None => Style::default().fg(Color::DarkGray),
                };
                if app.selected.contains(&i) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" "));
            }
            (
                format!(" Player {}'s guess ", app.session.current_player()),
                Line::from(spans),
                Color::Yellow,
            )
        }
    };

    let row = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(row, area);
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_board(f, app, Player::One, halves[0]);
    render_board(f, app, Player::Two, halves[1]);
}

fn render_board(f: &mut Frame, app: &App, player: Player, area: Rect) {
    let is_active = !app.session.is_over() && app.session.current_player() == player;

    let lines: Vec<Line> = app
        .session
        .history(player)
        .iter()
        .map(|attempt| {
            let mut spans = Vec::with_capacity(attempt.word.len() * 2);
            for (&c, &hint) in attempt.word.chars().iter().zip(attempt.hints.as_slice()) {
                let style = match hint {
                    Hint::Correct => Style::default()
                        .fg(Color::White)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    Hint::Present => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Hint::Absent => Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                };
                spans.push(Span::styled(format!(" {c} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let border_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if is_active {
        format!(" Player {player} ← ")
    } else {
        format!(" Player {player} ")
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|Message { text, style }| {
            let style = match style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.is_over() {
        "n: New Round | q: Quit | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | 1-7: Mark Cell | Ctrl-N: New Round | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
