//! TUI application state and logic

use crate::commands::solve_rack;
use crate::core::{MAX_RACK_LEN, ScoredWord};
use crate::solver::{ResultSet, Solver};
use crate::wordlists::LoadError;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub tabs: Vec<String>,
    pub active_tab: usize,
    pub selected: Option<usize>,
    pub input_buffer: String,
    pub last_rack: Option<String>,
    pub results: ResultSet,
    pub last_duration: Option<Duration>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub racks_solved: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>, load_failures: &[LoadError]) -> Self {
        let tabs: Vec<String> = solver.registry().names().map(str::to_string).collect();

        let mut app = Self {
            solver,
            tabs,
            active_tab: 0,
            selected: None,
            input_buffer: String::new(),
            last_rack: None,
            results: ResultSet::new(),
            last_duration: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Type your letters and press Enter to find the strongest words.",
            MessageStyle::Info,
        );
        for failure in load_failures {
            app.add_message(&failure.to_string(), MessageStyle::Error);
        }

        app
    }

    /// Append a letter to the rack being typed
    ///
    /// Non-letters are dropped and the rack is capped at its maximum size.
    pub fn push_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() >= MAX_RACK_LEN {
            self.add_message(
                &format!("A rack holds at most {MAX_RACK_LEN} letters"),
                MessageStyle::Error,
            );
            return;
        }
        self.input_buffer.push(c.to_ascii_lowercase());
    }

    pub fn find_words(&mut self) {
        match solve_rack(&self.input_buffer, &self.solver) {
            Ok(result) => {
                let total = result.total_words();
                self.stats.racks_solved += 1;
                self.stats.words_found += total;

                self.add_message(
                    &format!(
                        "{} → {total} words across {} dictionaries",
                        result.rack.to_uppercase(),
                        result.results.len()
                    ),
                    MessageStyle::Success,
                );

                self.last_rack = Some(result.rack);
                self.last_duration = Some(result.duration);
                self.results = result.results;
                self.selected = self.active_words().first().map(|_| 0);
            }
            Err(err) => {
                self.add_message(&format!("Please enter valid letters: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Ranked words of the active tab
    #[must_use]
    pub fn active_words(&self) -> &[ScoredWord] {
        self.tabs
            .get(self.active_tab)
            .and_then(|name| self.results.get(name))
            .map_or(&[], Vec::as_slice)
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
            self.reset_selection();
        }
    }

    pub fn previous_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + self.tabs.len() - 1) % self.tabs.len();
            self.reset_selection();
        }
    }

    pub fn select_next(&mut self) {
        let len = self.active_words().len();
        if len > 0 {
            self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
        }
    }

    pub fn select_previous(&mut self) {
        if !self.active_words().is_empty() {
            self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        }
    }

    fn reset_selection(&mut self) {
        self.selected = self.active_words().first().map(|_| 0);
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c' | 'u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if key.code == KeyCode::Char('c') {
                    self.should_quit = true;
                } else {
                    self.clear_input();
                }
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.find_words(),
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.previous_tab(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DictionaryRegistry;

    fn setup_registry() -> DictionaryRegistry {
        let mut registry = DictionaryRegistry::new();
        registry.register("colors", ["red", "tan", "teal"]);
        registry.register("metals", ["tin", "zinc"]);
        registry.register("words", ["ant", "cat", "act", "tact"]);
        registry
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn app_starts_with_tabs_per_dictionary() {
        let registry = setup_registry();
        let app = App::new(Solver::new(&registry), &[]);

        assert_eq!(app.tabs, ["colors", "metals", "words"]);
        assert_eq!(app.active_tab, 0);
        assert!(app.active_words().is_empty());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn typing_filters_and_caps_input() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);

        type_str(&mut app, "T4a-C!");
        assert_eq!(app.input_buffer, "tac");

        type_str(&mut app, &"z".repeat(20));
        assert_eq!(app.input_buffer.len(), MAX_RACK_LEN);
    }

    #[test]
    fn enter_solves_rack() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);

        type_str(&mut app, "tact");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.last_rack.as_deref(), Some("actt"));
        assert_eq!(app.results.len(), 3);
        assert_eq!(app.stats.racks_solved, 1);
        assert!(app.messages.last().is_some_and(|m| m.style == MessageStyle::Success));
    }

    #[test]
    fn enter_on_empty_input_reports_error() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);

        press(&mut app, KeyCode::Enter);

        assert!(app.results.is_empty());
        assert_eq!(app.stats.racks_solved, 0);
        assert!(app.messages.last().is_some_and(|m| m.style == MessageStyle::Error));
    }

    #[test]
    fn tabs_wrap_around() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_tab, 2);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, 0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.active_tab, 1);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);

        type_str(&mut app, "tact");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);

        // words tab: tact, act, cat
        assert_eq!(app.active_words().len(), 3);
        assert_eq!(app.selected, Some(0));

        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, Some(2));

        for _ in 0..5 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn load_failures_become_messages() {
        let registry = setup_registry();
        let mut scratch = DictionaryRegistry::new();
        let failures = scratch.load_all([("broken", "[")]);

        let app = App::new(Solver::new(&registry), &failures);
        assert!(app
            .messages
            .iter()
            .any(|m| m.style == MessageStyle::Error && m.text.contains("broken")));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(Solver::new(&registry), &[]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn ctrl_u_clears_input() {
        let registry = setup_registry();
        let mut app = App::new(Solver::new(&registry), &[]);
        type_str(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }
}
