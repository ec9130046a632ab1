//! Network layer - candidate API calls
//!
//! The Network actor receives commands and sends back responses.

pub mod actor;
pub mod api;
pub mod client;
#[cfg(test)]
pub mod fake;

pub use actor::NetworkActor;
pub use api::CandidatesApi;
pub use client::HttpCandidatesApi;
