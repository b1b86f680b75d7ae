use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RequestKind {
    Vacation,
    Leave,
    Other,
}

impl RequestKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RequestKind::Vacation => "vacation",
            RequestKind::Leave => "leave",
            RequestKind::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vacation" => Some(RequestKind::Vacation),
            "leave" => Some(RequestKind::Leave),
            "other" => Some(RequestKind::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

/// A planner (vacation/leave) request filed by or for a subject.
/// Created as Pending; a company actor approves or rejects it exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct PlannerRequest {
    pub id: i64,
    pub subject_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: RequestKind,
    pub status: RequestStatus,
    pub comment: Option<String>,
    pub created_at: String,
}
