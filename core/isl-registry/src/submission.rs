use chrono::{DateTime, Utc};
use isl_protocol::SubmissionId;
use serde::Serialize;

/// Shown when a submission carries no submitter.
pub const ANONYMOUS: &str = "Anonymous User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

/// A sign video uploaded for one word or phrase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub word: String,
    pub file_path: String,
    pub submitted_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ApprovalStatus,
}

impl Submission {
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    pub fn submitter(&self) -> &str {
        self.submitted_by.as_deref().unwrap_or(ANONYMOUS)
    }
}
