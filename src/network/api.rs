//! The API capability the rest of the client depends on

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Candidate, CandidatePage, NewCandidate, PageQuery};

/// Candidate endpoints of the Profilez API.
///
/// Object-safe via `async_trait` so the network actor can hold any transport.
#[async_trait]
pub trait CandidatesApi: Send + Sync {
    /// `GET /candidates` with paging, sorting and optional filters
    async fn search_candidates(&self, query: &PageQuery) -> ApiResult<CandidatePage>;

    /// `POST /candidates`
    async fn create_candidate(&self, candidate: &NewCandidate) -> ApiResult<Candidate>;
}
