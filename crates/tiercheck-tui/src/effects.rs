//! Effects produced by the reducer.
//!
//! The reducer never performs I/O against the network; it returns these and
//! the runtime executes them, sending results back as events.

use tiercheck_core::gateway::ProbeTier;
use tiercheck_core::session::Identity;

#[derive(Debug)]
pub enum UiEffect {
    /// Exit the event loop.
    Quit,
    /// Verify credentials against the secured endpoint.
    SpawnLogin { identity: Identity },
    /// Create a new account.
    SpawnRegister {
        username: String,
        password: String,
        email: String,
    },
    /// Probe one of the tiered test endpoints. `identity` is `None` for the
    /// public tier so no auth header is sent.
    SpawnProbe {
        tier: ProbeTier,
        identity: Option<Identity>,
    },
}
