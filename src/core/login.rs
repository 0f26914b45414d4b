//! # Login
//!
//! Simulated sign-in. Each method waits a little, then completes the login
//! as either a returning user (Google, Apple) or a new user (Demo).

use std::time::Duration;

use crate::core::config::Timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    Google,
    Apple,
    Demo,
}

impl SignInMethod {
    /// Button order on the login screen.
    pub const ALL: [SignInMethod; 3] = [SignInMethod::Google, SignInMethod::Apple, SignInMethod::Demo];

    pub fn label(self) -> &'static str {
        match self {
            SignInMethod::Google => "Continue with Google",
            SignInMethod::Apple => "Continue with Apple",
            SignInMethod::Demo => "Try Demo",
        }
    }

    /// Demo users see the tutorial first.
    pub fn is_new_user(self) -> bool {
        matches!(self, SignInMethod::Demo)
    }

    /// How long the simulated provider round trip takes.
    pub fn delay(self, timing: &Timing) -> Duration {
        match self {
            SignInMethod::Google | SignInMethod::Apple => timing.sign_in_delay,
            SignInMethod::Demo => timing.demo_sign_in_delay,
        }
    }
}

/// Login screen state: which button has focus and whether a sign-in is in flight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginState {
    focused: usize,
    pending: Option<SignInMethod>,
}

impl LoginState {
    pub fn focused(&self) -> SignInMethod {
        SignInMethod::ALL[self.focused]
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1).min(SignInMethod::ALL.len() - 1);
    }

    pub fn pending(&self) -> Option<SignInMethod> {
        self.pending
    }

    /// Buttons are disabled while a sign-in is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks `method` as in flight. Returns false if another sign-in already is.
    pub(crate) fn begin(&mut self, method: SignInMethod) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(method);
        true
    }

    /// Clears the in-flight method. Returns false if `method` was not in flight.
    pub(crate) fn finish(&mut self, method: SignInMethod) -> bool {
        if self.pending == Some(method) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fast_timing;

    #[test]
    fn test_only_demo_is_new_user() {
        assert!(SignInMethod::Demo.is_new_user());
        assert!(!SignInMethod::Google.is_new_user());
        assert!(!SignInMethod::Apple.is_new_user());
    }

    #[test]
    fn test_delays_follow_timing() {
        let timing = Timing::default();
        assert_eq!(SignInMethod::Google.delay(&timing), Duration::from_millis(1500));
        assert_eq!(SignInMethod::Apple.delay(&timing), Duration::from_millis(1500));
        assert_eq!(SignInMethod::Demo.delay(&timing), Duration::from_millis(1000));
        assert_eq!(SignInMethod::Demo.delay(&fast_timing()), Duration::from_millis(5));
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut login = LoginState::default();
        assert_eq!(login.focused(), SignInMethod::Google);
        login.focus_previous();
        assert_eq!(login.focused(), SignInMethod::Google);
        login.focus_next();
        login.focus_next();
        login.focus_next();
        assert_eq!(login.focused(), SignInMethod::Demo);
    }

    #[test]
    fn test_second_sign_in_rejected_while_pending() {
        let mut login = LoginState::default();
        assert!(login.begin(SignInMethod::Demo));
        assert!(!login.begin(SignInMethod::Google));
        assert_eq!(login.pending(), Some(SignInMethod::Demo));

        assert!(!login.finish(SignInMethod::Google));
        assert!(login.finish(SignInMethod::Demo));
        assert!(!login.is_pending());
    }
}
