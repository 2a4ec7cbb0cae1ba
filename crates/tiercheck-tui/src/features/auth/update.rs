//! Key handling for the auth screens.
//!
//! These functions mutate the form and return an action for the main reducer
//! to interpret; they never touch the session store or emit effects directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tiercheck_core::session::Identity;

use super::state::{LoginForm, RegisterForm, cycle_focus};

/// What the reducer should do after a key on an auth screen.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthAction {
    None,
    Quit,
    /// Fields validated; start a login attempt.
    SubmitLogin(Identity),
    /// Fields validated; start a registration attempt.
    SubmitRegister {
        username: String,
        password: String,
        email: String,
    },
    /// Switch to the register screen.
    GoToRegister,
    /// Switch back to the login screen.
    GoToLogin,
}

pub fn handle_login_key(form: &mut LoginForm, key: KeyEvent) -> AuthAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Any edit clears a stale validation error
    if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        form.error = None;
    }

    match key.code {
        KeyCode::Char('c') if ctrl => AuthAction::Quit,
        KeyCode::Esc => AuthAction::Quit,
        KeyCode::Char('r') if ctrl => AuthAction::GoToRegister,
        KeyCode::Tab | KeyCode::Down => {
            form.focus = cycle_focus(form.focus, LoginForm::FIELD_COUNT, true);
            AuthAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = cycle_focus(form.focus, LoginForm::FIELD_COUNT, false);
            AuthAction::None
        }
        KeyCode::Enter => {
            if form.username.value.trim().is_empty() || form.password.value.is_empty() {
                form.error = Some("Username and password are required".to_string());
                AuthAction::None
            } else {
                AuthAction::SubmitLogin(Identity {
                    username: form.username.value.trim().to_string(),
                    password: form.password.value.clone(),
                })
            }
        }
        KeyCode::Backspace => {
            form.focused_field_mut().value.pop();
            AuthAction::None
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_field_mut().value.push(c);
            AuthAction::None
        }
        _ => AuthAction::None,
    }
}

pub fn handle_register_key(form: &mut RegisterForm, key: KeyEvent) -> AuthAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        form.error = None;
    }

    match key.code {
        KeyCode::Char('c') if ctrl => AuthAction::Quit,
        KeyCode::Esc => AuthAction::GoToLogin,
        KeyCode::Tab | KeyCode::Down => {
            form.focus = cycle_focus(form.focus, RegisterForm::FIELD_COUNT, true);
            AuthAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = cycle_focus(form.focus, RegisterForm::FIELD_COUNT, false);
            AuthAction::None
        }
        KeyCode::Enter => {
            if form.username.value.trim().is_empty()
                || form.password.value.is_empty()
                || form.email.value.trim().is_empty()
            {
                form.error = Some("All fields are required".to_string());
                AuthAction::None
            } else {
                AuthAction::SubmitRegister {
                    username: form.username.value.trim().to_string(),
                    password: form.password.value.clone(),
                    email: form.email.value.trim().to_string(),
                }
            }
        }
        KeyCode::Backspace => {
            form.focused_field_mut().value.pop();
            AuthAction::None
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_field_mut().value.push(c);
            AuthAction::None
        }
        _ => AuthAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            handle_login_key(form, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_login_submit_requires_both_fields() {
        let mut form = LoginForm::default();
        type_into(&mut form, "testuser");

        let action = handle_login_key(&mut form, press(KeyCode::Enter));

        assert_eq!(action, AuthAction::None);
        assert!(form.error.is_some());
    }

    #[test]
    fn test_login_submit_builds_identity() {
        let mut form = LoginForm::default();
        type_into(&mut form, "testuser");
        handle_login_key(&mut form, press(KeyCode::Tab));
        type_into(&mut form, "password123");

        let action = handle_login_key(&mut form, press(KeyCode::Enter));

        assert_eq!(
            action,
            AuthAction::SubmitLogin(Identity {
                username: "testuser".to_string(),
                password: "password123".to_string(),
            })
        );
    }

    #[test]
    fn test_ctrl_r_opens_register() {
        let mut form = LoginForm::default();
        let action = handle_login_key(
            &mut form,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, AuthAction::GoToRegister);
    }

    #[test]
    fn test_register_esc_returns_to_login() {
        let mut form = RegisterForm::default();
        let action = handle_register_key(&mut form, press(KeyCode::Esc));
        assert_eq!(action, AuthAction::GoToLogin);
    }

    #[test]
    fn test_typing_clears_validation_error() {
        let mut form = LoginForm::default();
        handle_login_key(&mut form, press(KeyCode::Enter));
        assert!(form.error.is_some());

        handle_login_key(&mut form, press(KeyCode::Char('a')));
        assert!(form.error.is_none());
    }
}
