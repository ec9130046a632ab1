//! Network messages - communication between App and Network layers

use crate::models::{Candidate, CandidatePage, NewCandidate, PageQuery};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch one page of candidates
    SearchCandidates { id: u64, query: PageQuery },
    /// Submit a new candidate
    CreateCandidate { id: u64, candidate: NewCandidate },
    /// Shutdown the network actor
    Shutdown,
}

/// Which API call an error belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Search,
    Create,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// A page was fetched
    PageLoaded {
        id: u64,
        page: CandidatePage,
        time_ms: u64,
    },
    /// A candidate was created
    CandidateCreated {
        id: u64,
        candidate: Candidate,
        time_ms: u64,
    },
    /// Either call failed; `message` is the logged cause
    Error {
        id: u64,
        operation: Operation,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PageLoaded { id, .. } => *id,
            NetworkResponse::CandidateCreated { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::PageLoaded { time_ms, .. } => *time_ms,
            NetworkResponse::CandidateCreated { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }
}
