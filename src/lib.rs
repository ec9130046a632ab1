//! # Profilez TUI
//!
//! A terminal client for the Profilez candidate API.
//!
//! ## Features
//! - Paginated candidate list, newest first
//! - Create a sample candidate and refresh the current page
//! - Search filters (text, skills, experience, location)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::{Candidate, CandidatePage, Filters, NewCandidate, PageQuery};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{CandidatesApi, HttpCandidatesApi, NetworkActor};
