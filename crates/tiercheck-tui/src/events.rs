//! Events consumed by the reducer.

use crossterm::event::Event;
use tiercheck_core::gateway::{EndpointOutcome, ProbeTier};
use tiercheck_core::session::Identity;

/// Everything that can happen to the UI.
///
/// Terminal input and async gateway results arrive through the same enum so
/// the reducer is the only place that interprets them.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; advances the spinner and caps the render rate.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// A login attempt finished. Carries the attempted identity so a success
    /// can persist it.
    LoginResult {
        identity: Identity,
        outcome: EndpointOutcome,
    },
    /// A registration attempt finished.
    RegisterResult { outcome: EndpointOutcome },
    /// An endpoint probe finished.
    ProbeResult {
        tier: ProbeTier,
        outcome: EndpointOutcome,
    },
}
