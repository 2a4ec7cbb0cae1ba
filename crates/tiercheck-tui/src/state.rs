//! TUI state.
//!
//! `AppState` is the single state tree the reducer mutates. The runtime owns
//! it and renders from it; nothing else touches it.

use tiercheck_core::session::SessionStore;

use crate::features::auth::{LoginForm, RegisterForm};

/// Which screen the client is showing.
#[derive(Debug)]
pub enum Screen {
    /// Credential entry. Initial screen when no session is persisted.
    Login(LoginForm),
    /// New account creation, reached from the login screen.
    Register(RegisterForm),
    /// Logged-in screen with the endpoint probes.
    Home,
}

/// Full application state.
pub struct AppState {
    /// Set by the reducer when the user quits; the event loop exits on it.
    pub should_quit: bool,
    /// Session store (identity + status message), backed by the session file.
    pub session: SessionStore,
    /// Current screen.
    pub screen: Screen,
    /// Number of gateway calls awaiting a result. Drives the spinner.
    pub in_flight: usize,
    /// Spinner animation frame, advanced on Tick.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates state from a restored session.
    ///
    /// A persisted identity skips the login screen; it is trusted until a
    /// request is rejected.
    pub fn new(session: SessionStore) -> Self {
        let screen = if session.is_logged_in() {
            Screen::Home
        } else {
            Screen::Login(LoginForm::default())
        };
        Self {
            should_quit: false,
            session,
            screen,
            in_flight: 0,
            spinner_frame: 0,
        }
    }

    /// Whether any gateway call is still pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
