//! Word / sign-video approval workflow.
//!
//! Uploaded videos start out pending; an administrator approves them, after
//! which they can be looked up by the gloss tokens they represent.

pub mod submission;

use chrono::Utc;
use isl_lexicon::normalize_lemma;
use isl_protocol::{GlossSentence, SubmissionId};
use thiserror::Error;

pub use submission::{ApprovalStatus, Submission, ANONYMOUS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("please provide both word and file (missing {0})")]
    MissingField(&'static str),
    #[error("no submission with id {0}")]
    NotFound(SubmissionId),
    #[error("submission {0} is already approved")]
    AlreadyApproved(SubmissionId),
}

/// Key-value store behind the approval workflow.
pub trait SignStore {
    fn submit(
        &mut self,
        word: &str,
        file_path: &str,
        submitted_by: Option<&str>,
    ) -> Result<SubmissionId, RegistryError>;

    fn get(&self, id: SubmissionId) -> Option<&Submission>;

    /// Pending submissions, oldest first.
    fn pending(&self) -> Vec<&Submission>;

    fn approve(&mut self, id: SubmissionId) -> Result<&Submission, RegistryError>;

    /// Newest approved submission for `word`, compared in gloss form.
    fn approved_video(&self, word: &str) -> Option<&Submission>;

    /// Pairs every gloss token with its approved video, in gloss order.
    fn videos_for<'a>(&'a self, gloss: &'a GlossSentence) -> Vec<(&'a str, Option<&'a Submission>)> {
        gloss
            .iter()
            .map(|token| (token, self.approved_video(token)))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemorySignStore {
    submissions: Vec<Submission>,
    next_id: u32,
}

impl InMemorySignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

impl SignStore for InMemorySignStore {
    fn submit(
        &mut self,
        word: &str,
        file_path: &str,
        submitted_by: Option<&str>,
    ) -> Result<SubmissionId, RegistryError> {
        let word = word.trim();
        let file_path = file_path.trim();
        if word.is_empty() {
            return Err(RegistryError::MissingField("word"));
        }
        if file_path.is_empty() {
            return Err(RegistryError::MissingField("file"));
        }

        self.next_id += 1;
        let id = SubmissionId::new(self.next_id);
        self.submissions.push(Submission {
            id,
            word: word.to_string(),
            file_path: file_path.to_string(),
            submitted_by: submitted_by
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            created_at: Utc::now(),
            status: ApprovalStatus::Pending,
        });

        tracing::info!(%id, word, file_path, "sign submission received");
        Ok(id)
    }

    fn get(&self, id: SubmissionId) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    fn pending(&self) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|s| s.status == ApprovalStatus::Pending)
            .collect()
    }

    fn approve(&mut self, id: SubmissionId) -> Result<&Submission, RegistryError> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        if submission.is_approved() {
            return Err(RegistryError::AlreadyApproved(id));
        }
        submission.status = ApprovalStatus::Approved;

        tracing::info!(%id, word = %submission.word, "sign submission approved");
        Ok(submission)
    }

    fn approved_video(&self, word: &str) -> Option<&Submission> {
        let key = normalize_lemma(word);
        self.submissions
            .iter()
            .rev()
            .find(|s| s.is_approved() && normalize_lemma(&s.word) == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_starts_pending() {
        let mut store = InMemorySignStore::new();
        let id = store.submit("hello", "videos/hello.mp4", None).unwrap();

        let pending = store.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
        assert_eq!(pending[0].submitter(), ANONYMOUS);
        assert!(store.approved_video("hello").is_none());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut store = InMemorySignStore::new();
        assert_eq!(
            store.submit("  ", "a.mp4", None),
            Err(RegistryError::MissingField("word"))
        );
        assert_eq!(
            store.submit("cat", "", Some("asha")),
            Err(RegistryError::MissingField("file"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_approve_flow() {
        let mut store = InMemorySignStore::new();
        let first = store.submit("eat", "eat_v1.mp4", Some("ravi")).unwrap();
        let second = store.submit("rice", "rice.mp4", None).unwrap();

        let approved = store.approve(first).unwrap();
        assert_eq!(approved.status, ApprovalStatus::Approved);
        assert_eq!(approved.submitter(), "ravi");

        let pending: Vec<_> = store.pending().iter().map(|s| s.id).collect();
        assert_eq!(pending, vec![second]);

        assert_eq!(store.approve(first), Err(RegistryError::AlreadyApproved(first)));
        assert_eq!(
            store.approve(SubmissionId::new(99)),
            Err(RegistryError::NotFound(SubmissionId::new(99)))
        );
    }

    #[test]
    fn test_lookup_uses_gloss_form_and_newest() {
        let mut store = InMemorySignStore::new();
        let old = store.submit("Eat", "eat_old.mp4", None).unwrap();
        let new = store.submit("eat", "eat_new.mp4", None).unwrap();
        let unapproved = store.submit("eat", "eat_draft.mp4", None).unwrap();
        store.approve(old).unwrap();
        store.approve(new).unwrap();

        let found = store.approved_video("EAT").unwrap();
        assert_eq!(found.id, new);
        assert_ne!(found.id, unapproved);
    }

    #[test]
    fn test_videos_for_gloss() {
        let mut store = InMemorySignStore::new();
        let rice = store.submit("rice", "rice.mp4", None).unwrap();
        store.approve(rice).unwrap();

        let gloss = GlossSentence::dedup_from(["I", "RICE", "EAT"].map(String::from));
        let videos = store.videos_for(&gloss);

        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].0, "I");
        assert!(videos[0].1.is_none());
        assert_eq!(videos[1].1.map(|s| s.file_path.as_str()), Some("rice.mp4"));
        assert!(videos[2].1.is_none());
    }

    #[test]
    fn test_submission_serializes_status() {
        let mut store = InMemorySignStore::new();
        let id = store.submit("hello", "hello.mp4", None).unwrap();
        let json = serde_json::to_value(store.get(id).unwrap()).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["id"], 1);
        assert_eq!(json["word"], "hello");
    }
}
