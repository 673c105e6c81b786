//! TUI Renderer for the browse command
//!
//! ## Design:
//! - The engine presenter owns the view state and the screen contents
//! - Renderer owns UI state only (toast, quit flag)
//! - Key presses become engine `Control`s; the renderer never edits the screen
//! - Play notifications arrive over the presenter's event channel

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use cinelane_engine::{Control, Presenter, ViewEvent};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::config::UiConfig;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{DetailsView, HeaderView, LaneView, ReasonsView, StatusBarView};

pub type ScreenPresenter = Presenter<ScreenViewModel, Sender<ViewEvent>>;

/// What a key press asks the renderer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Control(Control),
    Quit,
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Enter => {
            Some(KeyAction::Control(Control::NextRecommendation))
        }
        KeyCode::Char('s') => Some(KeyAction::Control(Control::ShuffleLane)),
        KeyCode::Char('p') => Some(KeyAction::Control(Control::Play)),
        _ => None,
    }
}

/// Status-bar message that disappears after a fixed time
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}

pub struct TuiRenderer {
    presenter: ScreenPresenter,
    events: Receiver<ViewEvent>,

    /// UI State: transient play notification
    toast: Option<Toast>,

    /// UI State: Should quit flag
    should_quit: bool,

    tick_rate: Duration,
    toast_ttl: Duration,
}

impl TuiRenderer {
    pub fn new(presenter: ScreenPresenter, events: Receiver<ViewEvent>, ui: &UiConfig) -> Self {
        Self {
            presenter,
            events,
            toast: None,
            should_quit: false,
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            toast_ttl: Duration::from_millis(ui.toast_ms),
        }
    }

    pub fn presenter(&self) -> &ScreenPresenter {
        &self.presenter
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets up the terminal, runs the event loop, and restores the terminal
    /// even when setup or the loop fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut terminal = setup_or_restore(enter_screen, restore_terminal)?;

        let result = self.event_loop(&mut terminal);

        restore_terminal();
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            self.on_tick();
        }

        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key_action(key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::Control(control)) => {
                self.presenter.dispatch(control);
                self.drain_events();
            }
            None => {}
        }
    }

    /// Pull presenter notifications and expire the toast.
    pub fn on_tick(&mut self) {
        self.drain_events();
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match &event {
                ViewEvent::PlaybackRequested { provider } => {
                    tracing::info!(%provider, "playback requested from browse screen");
                }
            }
            self.toast = Some(Toast::new(event.to_string(), self.toast_ttl));
        }
    }

    pub fn render(&self, f: &mut Frame) {
        draw_screen(
            f,
            self.presenter.surface(),
            self.presenter.index(),
            self.presenter.catalog().len(),
            self.toast.as_ref().map(|t| t.message.as_str()),
        );
    }
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen, ignoring failures.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Runs `setup` once raw mode is on. A failed setup restores the terminal
/// before the error is returned.
fn setup_or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

/// Layout: [Header | Details | Why this pick | More like this | Status bar]
pub fn draw_screen(
    f: &mut Frame,
    screen: &ScreenViewModel,
    position: usize,
    total: usize,
    toast: Option<&str>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Min(5),
        Constraint::Length(5),
        Constraint::Length(3),
    ])
    .split(f.area());

    f.render_widget(HeaderView::new(screen), chunks[0]);
    f.render_widget(DetailsView::new(screen), chunks[1]);
    f.render_widget(ReasonsView::new(&screen.reasons), chunks[2]);
    f.render_widget(LaneView::new(&screen.lane), chunks[3]);
    f.render_widget(StatusBarView::new(position, total, toast), chunks[4]);
}
