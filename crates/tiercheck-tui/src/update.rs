//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Gateway results may arrive after the
//! screen that issued them is gone; the last result to arrive wins.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tiercheck_core::gateway::{EndpointOutcome, ProbeTier};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::auth::{self, AuthAction, LoginForm, RegisterForm};
use crate::state::{AppState, Screen};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginResult { identity, outcome } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            match outcome {
                EndpointOutcome::Success { .. } => {
                    app.session.login(identity);
                    app.screen = Screen::Home;
                }
                EndpointOutcome::AuthFailure { status, message } => {
                    let status_line = match message {
                        Some(reason) => format!("Login failed: {status} - {reason}"),
                        None => format!("Login failed: {status}"),
                    };
                    app.session.set_status(status_line);
                }
                // login() classifies every rejection as AuthFailure; this arm
                // exists only for match exhaustiveness
                EndpointOutcome::AuthzFailure { message } => {
                    app.session.set_status(format!("Login failed: {message}"));
                }
                EndpointOutcome::NetworkFailure { detail } => {
                    app.session.set_status(format!("Network error: {detail}"));
                }
            }
            vec![]
        }
        UiEvent::RegisterResult { outcome } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            match outcome {
                EndpointOutcome::Success { .. } => {
                    // Only the register screen advances on success; a result
                    // arriving after the user left the screen is dropped so a
                    // logged-in session keeps its authenticated screen
                    if matches!(app.screen, Screen::Register(_)) {
                        app.screen = Screen::Login(LoginForm::default());
                        app.session
                            .set_status("Registration successful! Please login.");
                    }
                }
                EndpointOutcome::AuthFailure { status, message } => {
                    let reason = message.unwrap_or_else(|| status.to_string());
                    app.session
                        .set_status(format!("Registration failed: {reason}"));
                }
                EndpointOutcome::AuthzFailure { message } => {
                    app.session
                        .set_status(format!("Registration failed: {message}"));
                }
                EndpointOutcome::NetworkFailure { detail } => {
                    app.session.set_status(format!("Network error: {detail}"));
                }
            }
            vec![]
        }
        UiEvent::ProbeResult { tier, outcome } => {
            app.in_flight = app.in_flight.saturating_sub(1);
            app.session.set_status(probe_status(tier, outcome));
            vec![]
        }
    }
}

/// Status line text for a finished probe.
fn probe_status(tier: ProbeTier, outcome: EndpointOutcome) -> String {
    match outcome {
        EndpointOutcome::Success { message } => {
            format!("{} endpoint: {message}", tier.label())
        }
        EndpointOutcome::AuthzFailure { message } => {
            format!("Error accessing {} endpoint: {message}", tier.name())
        }
        EndpointOutcome::AuthFailure { status, message } => match message {
            Some(reason) => format!(
                "Error accessing {} endpoint: {status} {reason}",
                tier.name()
            ),
            None => format!("Error accessing {} endpoint: {status}", tier.name()),
        },
        EndpointOutcome::NetworkFailure { detail } => format!("Network error: {detail}"),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        // Key releases and repeats would double-handle on Windows terminals
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match &mut app.screen {
        Screen::Login(form) => {
            let action = auth::handle_login_key(form, key);
            apply_auth_action(app, action)
        }
        Screen::Register(form) => {
            let action = auth::handle_register_key(form, key);
            apply_auth_action(app, action)
        }
        Screen::Home => handle_home_key(app, key),
    }
}

fn apply_auth_action(app: &mut AppState, action: AuthAction) -> Vec<UiEffect> {
    match action {
        AuthAction::None => vec![],
        AuthAction::Quit => vec![UiEffect::Quit],
        AuthAction::GoToRegister => {
            app.screen = Screen::Register(RegisterForm::default());
            app.session.set_status("");
            vec![]
        }
        AuthAction::GoToLogin => {
            app.screen = Screen::Login(LoginForm::default());
            app.session.set_status("");
            vec![]
        }
        AuthAction::SubmitLogin(identity) => {
            app.in_flight += 1;
            vec![UiEffect::SpawnLogin { identity }]
        }
        AuthAction::SubmitRegister {
            username,
            password,
            email,
        } => {
            app.in_flight += 1;
            vec![UiEffect::SpawnRegister {
                username,
                password,
                email,
            }]
        }
    }
}

fn handle_home_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('l') => {
            app.session.logout();
            app.screen = Screen::Login(LoginForm::default());
            vec![]
        }
        KeyCode::Char('1') => spawn_probe(app, ProbeTier::Public),
        KeyCode::Char('2') => spawn_probe(app, ProbeTier::Secured),
        KeyCode::Char('3') => spawn_probe(app, ProbeTier::Admin),
        _ => vec![],
    }
}

fn spawn_probe(app: &mut AppState, tier: ProbeTier) -> Vec<UiEffect> {
    // The public tier is probed anonymously even while logged in
    let identity = if tier.requires_auth() {
        app.session.identity().cloned()
    } else {
        None
    };
    app.in_flight += 1;
    vec![UiEffect::SpawnProbe { tier, identity }]
}

#[cfg(test)]
mod tests {
    use tiercheck_core::session::{Identity, SessionStore};

    use super::*;

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn testuser() -> Identity {
        Identity {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        }
    }

    fn logged_out_app(dir: &tempfile::TempDir) -> AppState {
        AppState::new(SessionStore::empty(dir.path().join("session.json")))
    }

    fn logged_in_app(dir: &tempfile::TempDir) -> AppState {
        let mut session = SessionStore::empty(dir.path().join("session.json"));
        session.login(testuser());
        AppState::new(session)
    }

    #[test]
    fn test_initial_screen_follows_session() {
        let dir = tempfile::tempdir().unwrap();

        let app = logged_out_app(&dir);
        assert!(matches!(app.screen, Screen::Login(_)));

        let app = logged_in_app(&dir);
        assert!(matches!(app.screen, Screen::Home));
    }

    #[test]
    fn test_login_success_persists_and_moves_home() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);
        app.in_flight = 1;

        let effects = update(
            &mut app,
            UiEvent::LoginResult {
                identity: testuser(),
                outcome: EndpointOutcome::Success {
                    message: "This is a secured endpoint".to_string(),
                },
            },
        );

        assert!(effects.is_empty());
        assert!(matches!(app.screen, Screen::Home));
        assert_eq!(app.session.identity(), Some(&testuser()));
        assert_eq!(app.session.status_message(), "Login successful!");
        assert_eq!(app.in_flight, 0);
        assert!(dir.path().join("session.json").exists());
    }

    #[test]
    fn test_login_failure_stays_on_login_with_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);
        app.in_flight = 1;

        update(
            &mut app,
            UiEvent::LoginResult {
                identity: testuser(),
                outcome: EndpointOutcome::AuthFailure {
                    status: 401,
                    message: Some("Unauthorized".to_string()),
                },
            },
        );

        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(!app.session.is_logged_in());
        assert_eq!(app.session.status_message(), "Login failed: 401 - Unauthorized");
    }

    #[test]
    fn test_register_success_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);
        app.screen = Screen::Register(RegisterForm::default());
        app.in_flight = 1;

        update(
            &mut app,
            UiEvent::RegisterResult {
                outcome: EndpointOutcome::Success {
                    message: "User registered successfully".to_string(),
                },
            },
        );

        assert!(matches!(app.screen, Screen::Login(_)));
        assert_eq!(
            app.session.status_message(),
            "Registration successful! Please login."
        );
    }

    #[test]
    fn test_stale_register_result_keeps_authenticated_screen() {
        // Register submitted, user backs out and logs in, then the register
        // result lands: the authenticated screen must survive it
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);
        app.in_flight = 1;

        update(
            &mut app,
            UiEvent::RegisterResult {
                outcome: EndpointOutcome::Success {
                    message: "User registered successfully".to_string(),
                },
            },
        );

        assert!(matches!(app.screen, Screen::Home));
        assert!(app.session.is_logged_in());
        assert_eq!(app.session.status_message(), "Login successful!");
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_register_failure_shows_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);
        app.screen = Screen::Register(RegisterForm::default());
        app.in_flight = 1;

        update(
            &mut app,
            UiEvent::RegisterResult {
                outcome: EndpointOutcome::AuthFailure {
                    status: 400,
                    message: Some("Username already exists".to_string()),
                },
            },
        );

        assert!(matches!(app.screen, Screen::Register(_)));
        assert_eq!(
            app.session.status_message(),
            "Registration failed: Username already exists"
        );
    }

    #[test]
    fn test_public_probe_carries_no_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);

        let effects = update(&mut app, press(KeyCode::Char('1')));

        assert_eq!(app.in_flight, 1);
        match effects.as_slice() {
            [UiEffect::SpawnProbe { tier, identity }] => {
                assert_eq!(*tier, ProbeTier::Public);
                assert!(identity.is_none());
            }
            other => panic!("expected SpawnProbe, got {other:?}"),
        }
    }

    #[test]
    fn test_secured_probe_carries_session_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);

        let effects = update(&mut app, press(KeyCode::Char('2')));

        match effects.as_slice() {
            [UiEffect::SpawnProbe { tier, identity }] => {
                assert_eq!(*tier, ProbeTier::Secured);
                assert_eq!(identity.as_ref(), Some(&testuser()));
            }
            other => panic!("expected SpawnProbe, got {other:?}"),
        }
    }

    #[test]
    fn test_probe_statuses() {
        assert_eq!(
            probe_status(
                ProbeTier::Public,
                EndpointOutcome::Success {
                    message: "This is a public endpoint".to_string()
                }
            ),
            "Public endpoint: This is a public endpoint"
        );
        assert_eq!(
            probe_status(
                ProbeTier::Admin,
                EndpointOutcome::AuthzFailure {
                    message: "Access denied".to_string()
                }
            ),
            "Error accessing admin endpoint: Access denied"
        );
        assert_eq!(
            probe_status(
                ProbeTier::Secured,
                EndpointOutcome::NetworkFailure {
                    detail: "Cannot connect to server at http://localhost:8080. Check that the backend is running.".to_string()
                }
            ),
            "Network error: Cannot connect to server at http://localhost:8080. Check that the backend is running."
        );
    }

    #[test]
    fn test_logout_clears_session_and_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);
        assert!(dir.path().join("session.json").exists());

        update(&mut app, press(KeyCode::Char('l')));

        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(!app.session.is_logged_in());
        assert_eq!(app.session.status_message(), "");
        assert!(!dir.path().join("session.json").exists());
    }

    #[test]
    fn test_quit_keys_on_home() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);

        let effects = update(&mut app, press(KeyCode::Char('q')));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));

        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_in_app(&dir);

        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(key)));

        assert!(effects.is_empty());
    }

    #[test]
    fn test_stale_login_result_after_logout_wins() {
        // Last result wins: a login racing a logout re-establishes the session
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);
        app.in_flight = 1;

        update(
            &mut app,
            UiEvent::LoginResult {
                identity: testuser(),
                outcome: EndpointOutcome::Success {
                    message: String::new(),
                },
            },
        );

        assert!(app.session.is_logged_in());
        assert!(matches!(app.screen, Screen::Home));
    }

    #[test]
    fn test_tick_advances_spinner() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = logged_out_app(&dir);

        update(&mut app, UiEvent::Tick);
        update(&mut app, UiEvent::Tick);

        assert_eq!(app.spinner_frame, 2);
    }
}
