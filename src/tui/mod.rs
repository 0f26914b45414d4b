//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (splash, pending sign-in, loading data, cross-fade):
//!   draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events, actions from
//!   background tasks, or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use tokio::sync::mpsc;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::home::Overlay;
use crate::core::state::{App, Screen};
use crate::data::MockParkingProvider;
use crate::runtime::Scheduler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub spinner_frame: usize,
    pub cursor_visible: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            spinner_frame: 0,
            cursor_visible: true,
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        let secs = elapsed.as_secs_f32();
        self.spinner_frame = (secs * 12.0) as usize;
        self.cursor_visible = (secs * 2.0) as usize % 2 == 0;
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Map a key press to an action for the screen currently showing.
pub fn action_for(event: &TuiEvent, app: &App) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
        return Some(Action::Quit);
    }

    match app.screen() {
        Screen::Splash => None,
        Screen::Login => match event {
            TuiEvent::CursorUp => Some(Action::FocusPreviousSignIn),
            TuiEvent::CursorDown => Some(Action::FocusNextSignIn),
            TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::SignIn(app.login().focused())),
            _ => None,
        },
        Screen::Tutorial => match event {
            TuiEvent::CursorRight | TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::TutorialNext),
            TuiEvent::CursorLeft | TuiEvent::Escape => Some(Action::TutorialBack),
            _ => None,
        },
        Screen::Home => {
            let overlay_open = app.home().and_then(|h| h.overlay()).is_some();
            match event {
                TuiEvent::Escape if overlay_open => Some(Action::CloseOverlay),
                TuiEvent::InputChar('p') => Some(Action::ToggleOverlay(Overlay::Profile)),
                TuiEvent::InputChar('m') => Some(Action::ToggleOverlay(Overlay::Menu)),
                _ if overlay_open => None,
                TuiEvent::CursorLeft => Some(Action::SlotBackward),
                TuiEvent::CursorRight => Some(Action::SlotForward),
                TuiEvent::InputChar('r') => Some(Action::RefreshData),
                _ => None,
            }
        }
    }
}

fn is_animating(app: &App) -> bool {
    let loading = app.home().is_some_and(|h| h.service().is_loading());
    app.screen() == Screen::Splash
        || app.login().is_pending()
        || loading
        || ui::is_fading(app.last_transition(), Instant::now())
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = MockParkingProvider::shared(config.timing.fetch_latency, config.seed);
    let mut app = App::new(provider);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = Scheduler::new(tx, config.timing.clone());
    scheduler.start_splash();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = is_animating(&app);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            tui.tick(start_time.elapsed());
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(&event, &app) else {
                continue;
            };
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
            }
            scheduler.apply(&effect, &app);
        }

        // Handle background task actions (timers, fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
            }
            scheduler.apply(&effect, &app);
        }

        if should_quit {
            info!("Quit requested");
            break;
        }
    }

    scheduler.cancel_all();
    ratatui::restore();
    Ok(())
}
