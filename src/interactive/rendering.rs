//! TUI rendering with ratatui
//!
//! One tab per dictionary, each showing its ranked words as a table.

use super::app::{App, MessageStyle};
use crate::core::MAX_RACK_LEN;
use crate::output::formatters::{format_strength, strength_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState, Tabs},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Dictionary tabs
            Constraint::Min(8),    // Results
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);
    render_tabs(f, app, chunks[2]);

    // Results and messages side by side
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Results table
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[3]);

    render_results(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📚 BOOKWORM SOLVER - Find the best words for your puzzle")
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Enter your letters ({}/{MAX_RACK_LEN}) | Enter: Find Words | Ctrl-U: Clear ",
        app.input_buffer.len()
    );

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .map(|name| {
            let count = app.results.get(name).map_or(0, Vec::len);
            Line::from(format!(" {name} ({count}) "))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab)
        .block(
            Block::default()
                .title(" Dictionaries ")
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");

    f.render_widget(tabs, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let words = app.active_words();
    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if words.is_empty() {
        let text = if app.last_rack.is_some() {
            "No words found"
        } else {
            "Enter letters to find words"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let strongest = words.first().map_or(0.0, |w| w.strength);
    let rows: Vec<Row> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = if i % 2 == 0 {
                Style::default()
            } else {
                Style::default().fg(Color::Gray)
            };
            Row::new(vec![
                Cell::from(format!("{:>2}", i + 1)),
                Cell::from(word.word.clone()),
                Cell::from(Span::styled(
                    strength_bar(word.strength, strongest, 12),
                    Style::default().fg(Color::Green),
                )),
                Cell::from(format_strength(word.strength)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(13),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["#", "Word", "", "Strength"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(app.selected);
    f.render_stateful_widget(table, area, &mut state);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let rack_text = format!(
        "Rack: {}",
        app.last_rack.as_deref().map_or_else(|| "-".to_string(), str::to_uppercase)
    );
    let rack = Paragraph::new(rack_text).alignment(Alignment::Center);
    f.render_widget(rack, chunks[0]);

    let stats_text = format!(
        "Racks: {} | Words: {}",
        app.stats.racks_solved, app.stats.words_found
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let time_text = app.last_duration.map_or_else(
        || "Search: -".to_string(),
        |d| format!("Search: {:.2}ms", d.as_secs_f64() * 1000.0),
    );
    let time = Paragraph::new(time_text).alignment(Alignment::Center);
    f.render_widget(time, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ←/→: Tab | ↑/↓: Select")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
