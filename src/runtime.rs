//! # Runtime
//!
//! Turns `Effect`s into tokio tasks. Tasks never touch `App`; they sleep or
//! fetch and then send an `Action` back over the channel, where the event
//! loop applies it through `update()` like any key press.
//!
//! Every spawned task's `AbortHandle` is kept so the whole set can be
//! cancelled on quit. Dropping the scheduler cancels them too.

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect};
use crate::core::config::Timing;
use crate::core::login::SignInMethod;
use crate::core::splash::SplashState;
use crate::core::state::App;

pub struct Scheduler {
    tx: UnboundedSender<Action>,
    timing: Timing,
    handles: Vec<AbortHandle>,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<Action>, timing: Timing) -> Self {
        Self {
            tx,
            timing,
            handles: Vec::new(),
        }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Number of tasks that have not finished yet.
    pub fn pending_tasks(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Types the splash title, pauses, then requests the move to login.
    pub fn start_splash(&mut self) {
        let tx = self.tx.clone();
        let interval = self.timing.splash_char_interval;
        let pause = self.timing.splash_pause;
        let ticks = SplashState::title_len();
        info!("Splash timer: {} ticks every {:?}, then {:?}", ticks, interval, pause);

        let handle = tokio::spawn(async move {
            for _ in 0..ticks {
                tokio::time::sleep(interval).await;
                if tx.send(Action::SplashTick).is_err() {
                    return;
                }
            }
            tokio::time::sleep(pause).await;
            if tx.send(Action::SplashElapsed).is_err() {
                warn!("Failed to send SplashElapsed: receiver dropped");
            }
        });
        self.track(handle.abort_handle());
    }

    /// Start whatever `effect` asks for. `app` is read for the data service handle.
    pub fn apply(&mut self, effect: &Effect, app: &App) {
        match effect {
            Effect::None => {}
            Effect::Quit => self.cancel_all(),
            Effect::ScheduleSignIn(method) => self.spawn_sign_in(*method),
            Effect::FetchData => self.spawn_fetch(app),
        }
    }

    /// Abort every outstanding task.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    fn spawn_sign_in(&mut self, method: SignInMethod) {
        let tx = self.tx.clone();
        let delay = method.delay(&self.timing);
        info!("Simulating {:?} sign-in ({:?})", method, delay);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::SignInCompleted(method)).is_err() {
                warn!("Failed to send SignInCompleted: receiver dropped");
            }
        });
        self.track(handle.abort_handle());
    }

    fn spawn_fetch(&mut self, app: &App) {
        let Some(home) = app.home() else {
            warn!("FetchData requested without a home screen");
            return;
        };
        let service = home.service().clone();
        let tx = self.tx.clone();
        info!("Spawning fetch ({})", service.provider_name());

        let handle = tokio::spawn(async move {
            service.fetch().await;
            if tx.send(Action::FetchFinished).is_err() {
                warn!("Failed to send FetchFinished: receiver dropped");
            }
        });
        self.track(handle.abort_handle());
    }

    fn track(&mut self, handle: AbortHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
        debug!("Tracking {} task(s)", self.handles.len());
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::state::Screen;
    use crate::test_support::{fast_timing, test_app};
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_splash_timer_ticks_then_elapses() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx, fast_timing());
        scheduler.start_splash();

        let mut ticks = 0;
        loop {
            match rx.recv().await.unwrap() {
                Action::SplashTick => ticks += 1,
                Action::SplashElapsed => break,
                other => panic!("unexpected action {other:?}"),
            }
        }
        assert_eq!(ticks, SplashState::title_len());
    }

    #[tokio::test]
    async fn test_sign_in_completes_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx, fast_timing());
        let app = test_app();

        scheduler.apply(&Effect::ScheduleSignIn(SignInMethod::Demo), &app);
        assert_eq!(rx.recv().await, Some(Action::SignInCompleted(SignInMethod::Demo)));
    }

    #[tokio::test]
    async fn test_cancel_all_stops_pending_tasks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timing = fast_timing();
        timing.sign_in_delay = Duration::from_secs(60);
        let mut scheduler = Scheduler::new(tx, timing);
        let app = test_app();

        scheduler.apply(&Effect::ScheduleSignIn(SignInMethod::Google), &app);
        assert_eq!(scheduler.pending_tasks(), 1);
        scheduler.apply(&Effect::Quit, &app);
        drop(scheduler);

        // All senders are gone once the aborted task is dropped.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_fetch_without_home_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx, fast_timing());
        let app = test_app();

        scheduler.apply(&Effect::FetchData, &app);
        assert_eq!(scheduler.pending_tasks(), 0);
    }

    #[tokio::test]
    async fn test_fetch_reports_finished_with_data() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx, fast_timing());
        let mut app = test_app();
        update(&mut app, Action::SplashElapsed);
        update(&mut app, Action::SignIn(SignInMethod::Google));
        let effect = update(&mut app, Action::SignInCompleted(SignInMethod::Google));
        assert_eq!(app.screen(), Screen::Home);

        scheduler.apply(&effect, &app);
        assert_eq!(rx.recv().await, Some(Action::FetchFinished));
        update(&mut app, Action::FetchFinished);

        let status = app.home().unwrap().status();
        assert!(!status.loading);
        assert_eq!(status.lots.len(), 1);
        assert!(app.status_message().starts_with("Updated"));
    }
}
