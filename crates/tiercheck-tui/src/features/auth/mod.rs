//! Login and registration screens.

mod render;
mod state;
mod update;

pub use render::{render_login, render_register};
pub use state::{LoginForm, RegisterForm, TextField};
pub use update::{AuthAction, handle_login_key, handle_register_key};
