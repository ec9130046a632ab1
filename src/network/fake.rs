//! In-memory candidates API for tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{Candidate, CandidatePage, NewCandidate, PageQuery};
use crate::network::api::CandidatesApi;

/// Candidate created `minutes_ago` minutes before a fixed instant
pub fn candidate(first_name: &str, minutes_ago: i64) -> Candidate {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    Candidate {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: String::from("Tester"),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: None,
        summary: None,
        experience: None,
        skills: Vec::new(),
        created_at: base - Duration::minutes(minutes_ago),
        updated_at: None,
    }
}

#[derive(Default)]
pub struct FakeCandidatesApi {
    candidates: Mutex<Vec<Candidate>>,
    created: Mutex<Vec<NewCandidate>>,
    fail_searches: AtomicBool,
    fail_creates: AtomicBool,
    searches: AtomicUsize,
}

impl FakeCandidatesApi {
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        FakeCandidatesApi {
            candidates: Mutex::new(candidates),
            ..Default::default()
        }
    }

    pub fn fail_searches(&self, fail: bool) {
        self.fail_searches.store(fail, Ordering::SeqCst);
    }

    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<NewCandidate> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidatesApi for FakeCandidatesApi {
    async fn search_candidates(&self, query: &PageQuery) -> ApiResult<CandidatePage> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 503,
                body: String::from("unavailable"),
            });
        }

        let mut all = self.candidates.lock().unwrap().clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let size = query.size.max(1) as usize;
        let total = all.len();
        let total_pages = total.div_ceil(size) as u32;
        let content: Vec<Candidate> = all
            .into_iter()
            .skip(query.page as usize * size)
            .take(size)
            .collect();

        Ok(CandidatePage {
            content,
            total_pages,
            total_elements: total as u64,
            size: query.size,
            number: query.page,
            first: query.page == 0,
            last: query.page + 1 >= total_pages,
        })
    }

    async fn create_candidate(&self, new: &NewCandidate) -> ApiResult<Candidate> {
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 400,
                body: String::from("invalid"),
            });
        }

        let created = Candidate {
            id: Uuid::new_v4(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            summary: new.summary.clone(),
            experience: new.experience,
            skills: new.skills.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.created.lock().unwrap().push(new.clone());
        self.candidates.lock().unwrap().push(created.clone());
        Ok(created)
    }
}
