//! Effect handlers: pure async functions that call the gateway and return
//! the result as a `UiEvent`. The runtime spawns these and routes the event
//! back through the inbox.

use std::sync::Arc;

use tiercheck_core::gateway::{AuthGateway, ProbeTier};
use tiercheck_core::session::Identity;

use crate::events::UiEvent;

pub async fn login(gateway: Arc<AuthGateway>, identity: Identity) -> UiEvent {
    let outcome = gateway
        .login(&identity.username, &identity.password)
        .await;
    UiEvent::LoginResult { identity, outcome }
}

pub async fn register(
    gateway: Arc<AuthGateway>,
    username: String,
    password: String,
    email: String,
) -> UiEvent {
    let outcome = gateway.register(&username, &password, &email).await;
    UiEvent::RegisterResult { outcome }
}

pub async fn probe(
    gateway: Arc<AuthGateway>,
    tier: ProbeTier,
    identity: Option<Identity>,
) -> UiEvent {
    let outcome = gateway.probe(tier, identity.as_ref()).await;
    UiEvent::ProbeResult { tier, outcome }
}
