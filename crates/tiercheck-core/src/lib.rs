//! Core TierCheck library (config, session store, auth gateway).

pub mod config;
pub mod gateway;
pub mod logging;
pub mod session;
