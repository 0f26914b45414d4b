//! End-to-end flow tests: drive the core through the real scheduler the way
//! the event loop does, with every delay shortened.

use std::time::Duration;

use brainwave::core::action::{Action, Effect, update};
use brainwave::core::config::Timing;
use brainwave::core::login::SignInMethod;
use brainwave::core::state::{App, Screen};
use brainwave::data::MockParkingProvider;
use brainwave::runtime::Scheduler;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn fast_timing() -> Timing {
    Timing {
        splash_char_interval: Duration::from_millis(1),
        splash_pause: Duration::from_millis(2),
        sign_in_delay: Duration::from_millis(2),
        demo_sign_in_delay: Duration::from_millis(2),
        fetch_latency: Duration::from_millis(2),
    }
}

fn seeded_app(timing: &Timing) -> App {
    App::new(MockParkingProvider::shared(timing.fetch_latency, Some(42)))
}

/// Feed background actions into `update` until `done` holds.
async fn pump_until(
    app: &mut App,
    scheduler: &mut Scheduler,
    rx: &mut UnboundedReceiver<Action>,
    done: impl Fn(&App) -> bool,
) {
    while !done(app) {
        let action = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for an action")
            .expect("channel closed");
        let effect = update(app, action);
        scheduler.apply(&effect, app);
    }
}

#[tokio::test]
async fn test_new_user_walks_splash_login_tutorial_home() {
    let timing = fast_timing();
    let mut app = seeded_app(&timing);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = Scheduler::new(tx, timing);

    assert_eq!(app.screen(), Screen::Splash);
    scheduler.start_splash();
    pump_until(&mut app, &mut scheduler, &mut rx, |a| a.screen() == Screen::Login).await;
    assert!(app.splash().is_revealed());

    let effect = update(&mut app, Action::SignIn(SignInMethod::Demo));
    assert_eq!(effect, Effect::ScheduleSignIn(SignInMethod::Demo));
    scheduler.apply(&effect, &app);
    pump_until(&mut app, &mut scheduler, &mut rx, |a| a.screen() != Screen::Login).await;

    assert_eq!(app.screen(), Screen::Tutorial);
    assert!(app.session().is_logged_in());
    assert!(app.session().is_new_user());
    assert_eq!(app.tutorial().page(), 0);

    update(&mut app, Action::TutorialNext);
    assert_eq!(app.tutorial().page(), 1);
    assert_eq!(app.tutorial().primary_label(), "Get Started");

    let effect = update(&mut app, Action::TutorialNext);
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(effect, Effect::FetchData);
    scheduler.apply(&effect, &app);

    pump_until(&mut app, &mut scheduler, &mut rx, |a| {
        a.home().is_some_and(|h| !h.status().lots.is_empty())
    })
    .await;

    let status = app.home().unwrap().status();
    assert!(!status.loading);
    assert!(status.error.is_none());
    let lot = status.primary_lot().unwrap();
    assert_eq!(lot.time_series.len(), 48);
}

#[tokio::test]
async fn test_returning_user_skips_tutorial() {
    let timing = fast_timing();
    let mut app = seeded_app(&timing);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = Scheduler::new(tx, timing);

    update(&mut app, Action::SplashElapsed);
    let effect = update(&mut app, Action::SignIn(SignInMethod::Apple));
    scheduler.apply(&effect, &app);
    pump_until(&mut app, &mut scheduler, &mut rx, |a| a.screen() != Screen::Login).await;

    assert_eq!(app.screen(), Screen::Home);
    assert!(!app.session().is_new_user());
}

#[tokio::test]
async fn test_refresh_replaces_data() {
    let timing = fast_timing();
    let mut app = seeded_app(&timing);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler = Scheduler::new(tx, timing);

    update(&mut app, Action::SplashElapsed);
    update(&mut app, Action::SignIn(SignInMethod::Google));
    let effect = update(&mut app, Action::SignInCompleted(SignInMethod::Google));
    scheduler.apply(&effect, &app);
    pump_until(&mut app, &mut scheduler, &mut rx, |a| a.status_message().starts_with("Updated")).await;
    let first = app.home().unwrap().status().lots;

    let effect = update(&mut app, Action::RefreshData);
    assert_eq!(effect, Effect::FetchData);
    assert_eq!(app.status_message(), "Refreshing...");
    scheduler.apply(&effect, &app);
    pump_until(&mut app, &mut scheduler, &mut rx, |a| a.status_message().starts_with("Updated")).await;

    let second = app.home().unwrap().status().lots;
    assert_eq!(second.len(), 1);
    // Same seeded generator, next draw: a fresh lot, not the cached one.
    assert_ne!(first[0].time_series, second[0].time_series);
}
