//! Screen-scoped features: each module owns its state, key handling, and
//! rendering for one screen.

pub mod auth;
pub mod home;
