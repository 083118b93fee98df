//! TUI rendering with ratatui
//!
//! Options form, attempt grid and message panel.

use super::app::{App, Game, MessageStyle, OptionField, Screen};
use crate::core::{Classification, EMPTY_SLOT, Mode};
use crate::provider::SecretProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: SecretProvider>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Form or board
            Constraint::Percentage(40), // Legend and messages
        ])
        .split(chunks[1]);

    match (app.screen, &app.game) {
        (Screen::Playing | Screen::GameOver, Some(game)) => {
            render_board(f, game, app.screen, main_chunks[0]);
        }
        _ => render_options(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Tile colour for each verdict
const fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Exact => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::Red,
    }
}

fn render_header<P: SecretProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let mode = app
        .game
        .as_ref()
        .filter(|_| app.screen != Screen::Options)
        .map(|game| game.state.config().mode());
    let title = match mode {
        Some(mode) => format!("🚦 TRAFFIC LIGHT - {} Game", mode.name()),
        None => "🚦 TRAFFIC LIGHT - Options".to_string(),
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

fn render_options<P: SecretProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let mut lines = vec![Line::from("")];

    for field in OptionField::ALL {
        let selected = app.form.selected == field;
        let invalid = app.form.invalid == Some(field);

        let value_style = match (selected, invalid) {
            (_, true) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            (false, false) => Style::default().fg(Color::White),
        };
        let marker = if selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::raw(format!("{:<22}", field.label())),
            Span::styled(format!("◀ {} ▶", app.form.value(field)), value_style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Modes: Number, Word | Characters: 3-7 | Attempts: 5-10",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Game Options ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, game: &Game, screen: Screen, area: Rect) {
    let config = game.state.config();
    let length = config.secret_length();
    let mut lines = Vec::new();

    if config.mode() == Mode::Number {
        let labels: Vec<Span> = config
            .mode()
            .place_labels(length)
            .iter()
            .map(|label| {
                Span::styled(format!(" {label:^3} "), Style::default().fg(Color::DarkGray))
            })
            .collect();
        lines.push(Line::from(labels));
    }

    let active_row = (screen == Screen::Playing).then(|| game.state.current_attempt_index());

    for row in 0..config.max_attempts() {
        let spans: Vec<Span> = if let Some(record) = game.state.records().get(row) {
            record
                .attempt()
                .slots()
                .iter()
                .zip(record.feedback().verdicts())
                .map(|(slot, &verdict)| {
                    tile(
                        slot.unwrap_or(EMPTY_SLOT),
                        Style::default()
                            .fg(Color::Black)
                            .bg(classification_color(verdict))
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else if active_row == Some(row) {
            let focus = game.editor.focus();
            game.editor
                .cells()
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let style = if column == focus.column {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    };
                    tile(cell.unwrap_or(EMPTY_SLOT), style)
                })
                .collect()
        } else {
            (0..length)
                .map(|_| tile('·', Style::default().fg(Color::DarkGray)))
                .collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(
        " Attempts ({}/{}) ",
        game.state.current_attempt_index(),
        config.max_attempts()
    );
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn tile(ch: char, style: Style) -> Span<'static> {
    Span::styled(format!("  {ch}  "), style)
}

fn render_info_panel<P: SecretProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_legend(f, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let entry = |classification: Classification, text: &'static str| {
        Line::from(vec![
            Span::styled(
                "    ",
                Style::default().bg(classification_color(classification)),
            ),
            Span::raw(" "),
            Span::raw(text),
        ])
    };

    let legend = Paragraph::new(vec![
        entry(Classification::Exact, "right character, right place"),
        entry(Classification::Present, "in the answer, somewhere else"),
        entry(Classification::Absent, "not in the answer"),
    ])
    .block(Block::default().title(" Legend ").borders(Borders::ALL));

    f.render_widget(legend, area);
}

fn render_messages<P: SecretProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
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

fn render_status<P: SecretProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let status_text = match (&app.game, app.screen) {
        (Some(game), Screen::Playing | Screen::GameOver) => format!(
            "Attempts left: {}",
            game.state.attempts_remaining()
        ),
        _ => "Setting up".to_string(),
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = match app.screen {
        Screen::Options => "↑↓: Field | ←→: Change | Enter: Start | Esc: Quit",
        Screen::Playing => "←→: Move | Backspace: Delete | Enter: Submit | Tab: Options | Esc: Quit",
        Screen::GameOver => "Enter: Play Again | Tab: Options | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
