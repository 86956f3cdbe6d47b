#[macro_use]
extern crate tracing;
#[macro_use]
extern crate lazy_static;

pub mod configuration;
pub mod render;
pub mod routes;
pub mod startup;
pub mod telemetry;

/// The one page session, shared by all handlers.
///
/// Handlers hold the lock for the whole command, so commands never interleave.
pub type SessionData = tokio::sync::Mutex<notepad::TodoSession>;
