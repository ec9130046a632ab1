//! HTTP client wrapper - reqwest implementation of the candidates API

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Candidate, CandidatePage, NewCandidate, PageQuery};
use crate::network::api::CandidatesApi;

/// Talks to a real Profilez backend
pub struct HttpCandidatesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCandidatesApi {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(HttpCandidatesApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn candidates_url(&self) -> String {
        format!("{}/candidates", self.base_url)
    }
}

/// Turn non-2xx into `ApiError::Status`, otherwise decode the JSON body
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl CandidatesApi for HttpCandidatesApi {
    async fn search_candidates(&self, query: &PageQuery) -> ApiResult<CandidatePage> {
        let resp = self
            .client
            .get(self.candidates_url())
            .header("Accept", "application/json")
            .query(&query.to_params())
            .send()
            .await?;
        decode(resp).await
    }

    async fn create_candidate(&self, candidate: &NewCandidate) -> ApiResult<Candidate> {
        let resp = self
            .client
            .post(self.candidates_url())
            .header("Accept", "application/json")
            .json(candidate)
            .send()
            .await?;
        decode(resp).await
    }
}
