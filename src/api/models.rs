use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::CCStr;

pub type ProjectId = u64;
pub type ContractId = u64;
pub type RequestId = u64;

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal, $badge:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn badge_class(self) -> &'static str {
                match self {
                    $($name::$variant => $badge),+
                }
            }

            /// Value sent in the `status` query parameter
            pub fn query_value(self) -> String {
                serde_json::to_value(self)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_owned))
                    .unwrap_or_default()
            }

            pub fn from_query_value(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|s| s.query_value() == value)
            }
        }
        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

status_enum!(ProjectStatus {
    Draft => "Draft", "badge-ghost",
    Active => "Active", "badge-success",
    OnHold => "On hold", "badge-warning",
    Completed => "Completed", "badge-info",
});

status_enum!(ContractStatus {
    Pending => "Pending", "badge-warning",
    Signed => "Signed", "badge-success",
    Expired => "Expired", "badge-ghost",
    Terminated => "Terminated", "badge-error",
});

status_enum!(RequestStatus {
    Submitted => "Submitted", "badge-info",
    UnderReview => "Under review", "badge-warning",
    Approved => "Approved", "badge-success",
    Rejected => "Rejected", "badge-error",
    Paid => "Paid", "badge-primary",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: CCStr,
    #[serde(default)]
    pub description: CCStr,
    pub owner: CCStr,
    pub status: ProjectStatus,
    pub budget: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Body of project creation and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub status: ProjectStatus,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl From<&Project> for ProjectDraft {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.to_string(),
            description: p.description.to_string(),
            owner: p.owner.to_string(),
            status: p.status,
            budget: p.budget,
            start_date: p.start_date,
            end_date: p.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub project_id: ProjectId,
    pub title: CCStr,
    pub vendor: CCStr,
    pub amount: f64,
    pub status: ContractStatus,
    #[serde(default)]
    pub signed_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDraft {
    pub project_id: ProjectId,
    pub title: String,
    pub vendor: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestStep {
    pub label: CCStr,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub contract_id: Option<ContractId>,
    pub title: CCStr,
    pub requested_by: CCStr,
    pub amount: f64,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub steps: Vec<RequestStep>,
}

impl Request {
    /// Completed steps over total steps
    pub fn progress(&self) -> (usize, usize) {
        (
            self.steps.iter().filter(|s| s.done).count(),
            self.steps.len(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub contract_id: ContractId,
    pub title: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_projects: u64,
    pub open_contracts: u64,
    pub pending_requests: u64,
    pub total_budget: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization: String,
}

/// One page of a paginated listing. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// Always at least 1, an empty listing is a single empty page
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.page_size as u64);
        pages.clamp(1, u32::MAX as u64) as u32
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            total_pages: self.total_pages(),
            total: self.total,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }
}

/// Position of a [`Page`] in its listing, without the items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Pagination and filters of a listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search: None,
            status: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then(|| search.trim().to_owned());
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status.filter(|s| !s.is_empty());
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, page_size: u32, total: u64) -> Page<()> {
        Page {
            items: vec![],
            page,
            page_size,
            total,
        }
    }

    #[test]
    fn page_counts() {
        assert_eq!(page(1, 20, 0).total_pages(), 1);
        assert_eq!(page(1, 20, 20).total_pages(), 1);
        assert_eq!(page(1, 20, 21).total_pages(), 2);
        assert_eq!(page(1, 0, 21).total_pages(), 1);
    }

    #[test]
    fn page_navigation() {
        let first = page(1, 10, 35);
        assert!(!first.has_previous());
        assert!(first.has_next());
        let last = page(4, 10, 35);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert!(!page(1, 10, 0).has_next());
    }

    #[test]
    fn page_info_matches_the_page() {
        assert_eq!(
            page(2, 10, 35).info(),
            PageInfo {
                page: 2,
                total_pages: 4,
                total: 35,
                has_previous: true,
                has_next: true,
            }
        );
        let empty = page(1, 10, 0).info();
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_previous && !empty.has_next);
    }

    #[test]
    fn query_pairs_skip_empty_filters() {
        let q = ListQuery::new(20).with_search("   ").with_status(Some(String::new()));
        assert_eq!(
            q.to_query_pairs(),
            vec![("page", "1".to_owned()), ("page_size", "20".to_owned())]
        );

        let q = ListQuery::new(10)
            .with_page(0)
            .with_search(" solar ")
            .with_status(Some(RequestStatus::UnderReview.query_value()));
        assert_eq!(q.page, 1);
        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("page", "1".to_owned()),
                ("page_size", "10".to_owned()),
                ("search", "solar".to_owned()),
                ("status", "under_review".to_owned()),
            ]
        );
    }

    #[test]
    fn status_query_values_round_trip() {
        for s in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_query_value(&s.query_value()), Some(*s));
        }
        assert_eq!(ProjectStatus::OnHold.query_value(), "on_hold");
        assert_eq!(ContractStatus::from_query_value("void"), None);
    }

    #[test]
    fn request_decodes_from_backend_json() {
        let request: Request = serde_json::from_str(
            r#"{
                "id": 3,
                "project_id": 12,
                "contract_id": 7,
                "title": "Solar panels, phase 2",
                "requested_by": "M. Okafor",
                "amount": 12500.5,
                "status": "under_review",
                "submitted_at": "2026-03-01T09:30:00Z",
                "steps": [
                    { "label": "Submitted", "done": true },
                    { "label": "Finance review", "done": true },
                    { "label": "Approval", "done": false }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(request.status, RequestStatus::UnderReview);
        assert_eq!(request.contract_id, Some(7));
        assert_eq!(request.progress(), (2, 3));
    }

    #[test]
    fn optional_fields_default() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Rural clinics",
                "owner": "Health dept.",
                "status": "active",
                "budget": 250000,
                "start_date": "2026-01-15"
            }"#,
        )
        .unwrap();
        assert_eq!(&*project.description, "");
        assert_eq!(project.end_date, None);
        assert_eq!(ProjectDraft::from(&project).name, "Rural clinics");
    }
}
