//! # Application State
//!
//! Core business state for BrainWave. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ParkingDataProvider>  // data source for the home screen
//! ├── screen: Screen                   // exactly one active screen
//! ├── session: Session                 // login flags + profile
//! ├── splash: SplashState              // title reveal progress
//! ├── login: LoginState                // focused button, pending sign-in
//! ├── tutorial: TutorialState          // current page
//! ├── home: Option<HomeState>          // exists only once Home is entered
//! ├── status_message: String           // status bar text
//! └── last_transition: Option<Instant> // drives the cross-fade
//! ```
//!
//! Screens move along a closed graph:
//!
//! ```text
//! Splash ──► Login ──┬──► Tutorial ──► Home
//!                    └──────────────────► Home
//! ```
//!
//! The only way to move is through `to_login`, `to_tutorial`, `to_home` and
//! `complete_login`. A request for an edge that is not in the graph is
//! logged and ignored, so every operation is total.

use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::core::home::HomeState;
use crate::core::login::LoginState;
use crate::core::splash::SplashState;
use crate::core::tutorial::{TutorialState, TutorialStep};
use crate::data::{ParkingDataProvider, ParkingDataService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Tutorial,
    Home,
}

impl Screen {
    /// Whether `self → next` is an edge of the navigation graph.
    pub fn can_transition_to(self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::Splash, Screen::Login)
                | (Screen::Login, Screen::Tutorial)
                | (Screen::Login, Screen::Home)
                | (Screen::Tutorial, Screen::Home)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: String,
    name: String,
    email: String,
    profile_image: Option<String>,
}

impl UserProfile {
    pub fn new(id: String, name: String, email: String, profile_image: Option<String>) -> Self {
        Self {
            id,
            name,
            email,
            profile_image,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }
}

/// Login status for the lifetime of the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
    is_new_user: bool,
    // Demo sign-in never fills this in; a real identity provider would.
    profile: Option<UserProfile>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn is_new_user(&self) -> bool {
        self.is_new_user
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}

pub struct App {
    provider: Arc<dyn ParkingDataProvider>,
    screen: Screen,
    session: Session,
    splash: SplashState,
    login: LoginState,
    tutorial: TutorialState,
    home: Option<HomeState>,
    status_message: String,
    last_transition: Option<Instant>,
}

impl App {
    pub fn new(provider: Arc<dyn ParkingDataProvider>) -> Self {
        Self {
            provider,
            screen: Screen::Splash,
            session: Session::default(),
            splash: SplashState::default(),
            login: LoginState::default(),
            tutorial: TutorialState::default(),
            home: None,
            status_message: String::new(),
            last_transition: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn splash(&self) -> &SplashState {
        &self.splash
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn tutorial(&self) -> &TutorialState {
        &self.tutorial
    }

    pub fn home(&self) -> Option<&HomeState> {
        self.home.as_ref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// When the current screen became active. `None` while still on the splash.
    pub fn last_transition(&self) -> Option<Instant> {
        self.last_transition
    }

    pub fn to_login(&mut self) -> bool {
        self.transition(Screen::Login)
    }

    pub fn to_tutorial(&mut self) -> bool {
        self.transition(Screen::Tutorial)
    }

    /// Enter the dashboard. The data service is created on the way in.
    pub fn to_home(&mut self) -> bool {
        let entered = self.transition(Screen::Home);
        if entered {
            self.home = Some(HomeState::new(ParkingDataService::new(self.provider.clone())));
        }
        entered
    }

    /// Record a successful sign-in and move on: new users see the tutorial,
    /// returning users go straight home. Ignored outside the login screen.
    pub fn complete_login(&mut self, as_new_user: bool) -> Screen {
        if self.screen != Screen::Login {
            warn!("Ignoring login completion on {:?}", self.screen);
            return self.screen;
        }
        self.session.is_logged_in = true;
        self.session.is_new_user = as_new_user;
        info!("User logged in (new user: {})", as_new_user);

        if as_new_user {
            self.to_tutorial();
        } else {
            self.to_home();
        }
        self.screen
    }

    /// Next tutorial page, or home from the last page. No-op elsewhere.
    pub fn tutorial_next(&mut self) {
        if self.screen != Screen::Tutorial {
            return;
        }
        if self.tutorial.next() == TutorialStep::Finished {
            self.to_home();
        }
    }

    /// Previous tutorial page, clamped at the first. No-op elsewhere.
    pub fn tutorial_back(&mut self) {
        if self.screen == Screen::Tutorial {
            self.tutorial.back();
        }
    }

    pub(crate) fn splash_mut(&mut self) -> &mut SplashState {
        &mut self.splash
    }

    pub(crate) fn login_mut(&mut self) -> &mut LoginState {
        &mut self.login
    }

    pub(crate) fn home_mut(&mut self) -> Option<&mut HomeState> {
        self.home.as_mut()
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    fn transition(&mut self, next: Screen) -> bool {
        if self.screen == next {
            return false;
        }
        if !self.screen.can_transition_to(next) {
            warn!("Ignoring transition {:?} -> {:?}", self.screen, next);
            return false;
        }
        info!("Screen transition {:?} -> {:?}", self.screen, next);
        self.screen = next;
        self.last_transition = Some(Instant::now());
        true
    }
}
