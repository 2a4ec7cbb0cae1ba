//! Logged-in screen with the tiered endpoint probes.

mod render;

pub use render::render_home;
