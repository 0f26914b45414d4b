//! # Actions
//!
//! Everything that can happen in BrainWave becomes an `Action`.
//! User presses Enter on a sign-in button? That's `Action::SignIn(method)`.
//! The splash timer fires? That's `Action::SplashElapsed`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller should start. No side effects here.
//! Timers and fetches happen in `runtime`, which reports back with more actions.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::debug;

use crate::core::home::Overlay;
use crate::core::login::SignInMethod;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Splash timer
    SplashTick,
    SplashElapsed,

    // Login
    FocusPreviousSignIn,
    FocusNextSignIn,
    SignIn(SignInMethod),
    SignInCompleted(SignInMethod),

    // Tutorial
    TutorialNext,
    TutorialBack,

    // Home
    RefreshData,
    FetchFinished,
    SlotBackward,
    SlotForward,
    ToggleOverlay(Overlay),
    CloseOverlay,

    Quit,
}

/// Work the caller must start after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Wait out the simulated sign-in, then send `SignInCompleted`.
    ScheduleSignIn(SignInMethod),
    /// Run a fetch on the home screen's data service, then send `FetchFinished`.
    FetchData,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.screen());
    let before = app.screen();

    let effect = match action {
        Action::SplashTick => {
            if before == Screen::Splash {
                app.splash_mut().reveal_next();
            }
            Effect::None
        }
        Action::SplashElapsed => {
            if before == Screen::Splash {
                app.to_login();
            }
            Effect::None
        }
        Action::FocusPreviousSignIn => {
            if before == Screen::Login && !app.login().is_pending() {
                app.login_mut().focus_previous();
            }
            Effect::None
        }
        Action::FocusNextSignIn => {
            if before == Screen::Login && !app.login().is_pending() {
                app.login_mut().focus_next();
            }
            Effect::None
        }
        Action::SignIn(method) => {
            if before == Screen::Login && app.login_mut().begin(method) {
                app.set_status("Signing in...");
                Effect::ScheduleSignIn(method)
            } else {
                Effect::None
            }
        }
        Action::SignInCompleted(method) => {
            if app.login_mut().finish(method) {
                app.complete_login(method.is_new_user());
                app.set_status("");
            }
            Effect::None
        }
        Action::TutorialNext => {
            app.tutorial_next();
            Effect::None
        }
        Action::TutorialBack => {
            app.tutorial_back();
            Effect::None
        }
        Action::RefreshData => {
            if app.home().is_some() {
                app.set_status("Refreshing...");
                Effect::FetchData
            } else {
                Effect::None
            }
        }
        Action::FetchFinished => {
            let status = app.home().map(|home| home.status());
            match status {
                Some(status) if status.loading => {}
                Some(status) => match status.error {
                    Some(error) => app.set_status(format!("Fetch failed: {error}")),
                    None => app.set_status(format!("Updated {}", Local::now().format("%H:%M:%S"))),
                },
                None => {}
            }
            Effect::None
        }
        Action::SlotBackward => {
            if let Some(home) = app.home_mut() {
                home.slot_backward();
            }
            Effect::None
        }
        Action::SlotForward => {
            if let Some(home) = app.home_mut() {
                home.slot_forward();
            }
            Effect::None
        }
        Action::ToggleOverlay(overlay) => {
            if let Some(home) = app.home_mut() {
                home.toggle_overlay(overlay);
            }
            Effect::None
        }
        Action::CloseOverlay => {
            if let Some(home) = app.home_mut() {
                home.close_overlay();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    };

    // Arriving on Home always kicks off the first fetch.
    if before != Screen::Home && app.screen() == Screen::Home {
        app.set_status("Loading parking data...");
        return Effect::FetchData;
    }
    effect
}
