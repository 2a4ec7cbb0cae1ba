//! Form state for the auth screens.

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    /// Render as dots instead of the actual characters.
    pub masked: bool,
}

impl TextField {
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Text to draw: the value, or one dot per character when masked.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Credential entry form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    /// Index of the focused field (0 = username, 1 = password).
    pub focus: usize,
    /// Validation error shown below the fields.
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::masked(),
            focus: 0,
            error: None,
        }
    }
}

impl LoginForm {
    pub const FIELD_COUNT: usize = 2;

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.username,
            _ => &mut self.password,
        }
    }
}

/// Account creation form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub username: TextField,
    pub password: TextField,
    pub email: TextField,
    /// Index of the focused field (0 = username, 1 = password, 2 = email).
    pub focus: usize,
    pub error: Option<String>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::masked(),
            email: TextField::default(),
            focus: 0,
            error: None,
        }
    }
}

impl RegisterForm {
    pub const FIELD_COUNT: usize = 3;

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            0 => &mut self.username,
            1 => &mut self.password,
            _ => &mut self.email,
        }
    }
}

/// Moves focus forward or backward, wrapping around.
pub fn cycle_focus(focus: usize, field_count: usize, forward: bool) -> usize {
    if forward {
        (focus + 1) % field_count
    } else {
        (focus + field_count - 1) % field_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_display_hides_value() {
        let mut field = TextField::masked();
        field.value = "secret".to_string();
        assert_eq!(field.display(), "••••••");
    }

    #[test]
    fn test_cycle_focus_wraps() {
        assert_eq!(cycle_focus(1, 2, true), 0);
        assert_eq!(cycle_focus(0, 2, false), 1);
        assert_eq!(cycle_focus(0, 3, true), 1);
    }
}
