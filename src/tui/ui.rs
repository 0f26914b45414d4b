use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};

use crate::core::home::Overlay;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    HomeView, LoginView, MenuOverlay, ProfileOverlay, SplashView, TitleBar, TutorialView,
};

/// How long a newly entered screen is drawn dimmed.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    // The splash owns the whole terminal; other screens get a title bar.
    let main_area = if app.screen() == Screen::Splash {
        frame.area()
    } else {
        let mut title_bar = TitleBar::new(screen_name(app.screen()).to_string(), app.status_message().to_string());
        title_bar.render(frame, title_area);
        main_area
    };

    match app.screen() {
        Screen::Splash => {
            let splash = app.splash();
            SplashView {
                text: splash.visible_text(),
                show_subtitle: splash.is_revealed(),
                cursor_visible: tui.cursor_visible,
            }
            .render(frame, main_area);
        }
        Screen::Login => {
            LoginView {
                focused: app.login().focused(),
                pending: app.login().pending(),
                spinner_frame: tui.spinner_frame,
            }
            .render(frame, main_area);
        }
        Screen::Tutorial => {
            TutorialView {
                tutorial: app.tutorial(),
            }
            .render(frame, main_area);
        }
        Screen::Home => draw_home(frame, main_area, app, tui),
    }

    if is_fading(app.last_transition(), Instant::now()) {
        frame
            .buffer_mut()
            .set_style(main_area, Style::default().add_modifier(Modifier::DIM));
    }
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let Some(home) = app.home() else {
        return;
    };
    let status = home.status();
    HomeView {
        status: &status,
        selected_slot: home.selected_slot(),
        spinner_frame: tui.spinner_frame,
    }
    .render(frame, area);

    match home.overlay() {
        Some(Overlay::Profile) => ProfileOverlay {
            profile: app.session().profile(),
        }
        .render(frame, area),
        Some(Overlay::Menu) => MenuOverlay.render(frame, area),
        None => {}
    }
}

/// True while the cross-fade into the current screen is running.
pub fn is_fading(last_transition: Option<Instant>, now: Instant) -> bool {
    last_transition.is_some_and(|at| now.saturating_duration_since(at) < FADE_DURATION)
}

pub fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => "Splash",
        Screen::Login => "Sign in",
        Screen::Tutorial => "Welcome",
        Screen::Home => "Dashboard",
    }
}
