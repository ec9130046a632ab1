use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_SORT, PAGE_SIZE};

/// A candidate as returned by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Years of experience
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Skills joined for display, `None` when there are none
    pub fn skills_line(&self) -> Option<String> {
        if self.skills.is_empty() {
            None
        } else {
            Some(self.skills.join(", "))
        }
    }
}

/// Body of a create request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skills: Vec<String>,
}

impl NewCandidate {
    /// The fixed demo record submitted by "create sample"
    pub fn sample() -> Self {
        NewCandidate {
            first_name: String::from("Jane"),
            last_name: String::from("Smith"),
            email: String::from("jane.smith@example.com"),
            phone: Some(String::from("+1-555-987-6543")),
            summary: Some(String::from(
                "Experienced React developer with 3 years of experience",
            )),
            experience: Some(3),
            skills: ["React", "TypeScript", "Node.js", "GraphQL"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// One page of candidates plus paging metadata
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePage {
    pub content: Vec<Candidate>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub size: u32,
    /// Zero-based index of this page
    pub number: u32,
    pub first: bool,
    pub last: bool,
}

/// Optional search filters accepted by the search endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: Option<String>,
    /// Comma-separated skill names
    pub skills: Option<String>,
    /// Minimum years of experience
    pub experience: Option<u32>,
    pub location: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
            && self.location.is_none()
    }

    /// Short human-readable summary, e.g. `search=rust, min 3y`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(search) = &self.search {
            parts.push(format!("search={}", search));
        }
        if let Some(skills) = &self.skills {
            parts.push(format!("skills={}", skills));
        }
        if let Some(years) = self.experience {
            parts.push(format!("min {}y", years));
        }
        if let Some(location) = &self.location {
            parts.push(format!("location={}", location));
        }
        parts.join(", ")
    }
}

/// Parameters of a single search request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort: String,
    pub filters: Filters,
}

impl PageQuery {
    /// Newest-first page of the fixed page size
    pub fn newest_first(page: u32, filters: Filters) -> Self {
        PageQuery {
            page,
            size: PAGE_SIZE,
            sort: String::from(DEFAULT_SORT),
            filters,
        }
    }

    /// Query-string pairs; unset filters are omitted
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
        ];
        if let Some(search) = &self.filters.search {
            params.push(("search", search.clone()));
        }
        if let Some(skills) = &self.filters.skills {
            params.push(("skills", skills.clone()));
        }
        if let Some(years) = self.filters.experience {
            params.push(("experience", years.to_string()));
        }
        if let Some(location) = &self.filters.location {
            params.push(("location", location.clone()));
        }
        params
    }
}
