//! Seed Data
//!
//! Initial submission collections. The built-in reference set and any seed
//! file share one JSON format: an array of camelCase submission records.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::Submission;
use crate::domain::value_objects::{RejectionReason, ReviewState, SubmissionId, SubmissionStatus};
use crate::error::{ReviewError, ReviewResult};

const REFERENCE_SEED: &str = include_str!("../../seed/submissions.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SeedRecord {
    id: String,
    title: String,
    location: String,
    description: String,
    user_name: String,
    user_id: String,
    image_url: String,
    submitted_at: DateTime<Utc>,
    #[serde(default)]
    status: Option<SubmissionStatus>,
    #[serde(default)]
    rejection_reason: Option<String>,
}

impl SeedRecord {
    fn into_submission(self) -> ReviewResult<Submission> {
        for (field, value) in [
            ("id", &self.id),
            ("title", &self.title),
            ("location", &self.location),
            ("description", &self.description),
            ("userName", &self.user_name),
            ("userId", &self.user_id),
        ] {
            if value.trim().is_empty() {
                return Err(ReviewError::Seed(format!(
                    "submission {:?}: {field} must not be empty",
                    self.id
                )));
            }
        }

        let review = match (self.status.unwrap_or(SubmissionStatus::Pending), self.rejection_reason) {
            (SubmissionStatus::Rejected, Some(reason)) => ReviewState::Rejected {
                reason: RejectionReason::new(reason).ok_or_else(|| {
                    ReviewError::Seed(format!(
                        "submission {:?}: rejectionReason must not be blank",
                        self.id
                    ))
                })?,
            },
            (SubmissionStatus::Rejected, None) => {
                return Err(ReviewError::Seed(format!(
                    "submission {:?}: rejected without rejectionReason",
                    self.id
                )));
            }
            (status, Some(_)) => {
                return Err(ReviewError::Seed(format!(
                    "submission {:?}: rejectionReason given for {status} submission",
                    self.id
                )));
            }
            (SubmissionStatus::Pending, None) => ReviewState::Pending,
            (SubmissionStatus::Approved, None) => ReviewState::Approved,
        };

        Ok(Submission {
            id: SubmissionId::new(self.id),
            title: self.title,
            location: self.location,
            description: self.description,
            user_name: self.user_name,
            user_id: self.user_id,
            image_url: self.image_url,
            submitted_at: self.submitted_at,
            review,
        })
    }
}

/// The five built-in reference submissions (ids 1-5)
pub fn reference_seed() -> ReviewResult<Vec<Submission>> {
    parse_seed(REFERENCE_SEED)
}

/// Parse and validate a JSON seed
pub fn parse_seed(json: &str) -> ReviewResult<Vec<Submission>> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(json).map_err(|e| ReviewError::Seed(e.to_string()))?;

    let submissions = records
        .into_iter()
        .map(SeedRecord::into_submission)
        .collect::<ReviewResult<Vec<_>>>()?;

    ensure_unique_ids(&submissions)?;
    Ok(submissions)
}

/// Read and validate a JSON seed file
pub async fn load_seed_file(path: &Path) -> ReviewResult<Vec<Submission>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReviewError::Seed(format!("{}: {e}", path.display())))?;

    let submissions = parse_seed(&json)?;
    tracing::info!(
        path = %path.display(),
        count = submissions.len(),
        "Loaded submission seed file"
    );
    Ok(submissions)
}

pub(crate) fn ensure_unique_ids(submissions: &[Submission]) -> ReviewResult<()> {
    let mut seen = HashSet::with_capacity(submissions.len());
    for submission in submissions {
        if !seen.insert(&submission.id) {
            return Err(ReviewError::DuplicateId(submission.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, extra: &str) -> String {
        format!(
            r#"{{"id":"{id}","title":"T","location":"L","description":"D","userName":"U","userId":"u1","imageUrl":"https://example.com/x.jpg","submittedAt":"2023-05-15T09:23:45Z"{extra}}}"#
        )
    }

    #[test]
    fn test_reference_seed_shape() {
        let seed = reference_seed().unwrap();
        let ids: Vec<_> = seed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        let statuses: Vec<_> = seed.iter().map(|s| s.status()).collect();
        assert_eq!(
            statuses,
            vec![
                SubmissionStatus::Pending,
                SubmissionStatus::Pending,
                SubmissionStatus::Approved,
                SubmissionStatus::Rejected,
                SubmissionStatus::Pending,
            ]
        );

        assert_eq!(seed[0].title, "Ancient Temple");
        assert_eq!(seed[0].location, "Mysore, Karnataka");
        assert_eq!(seed[0].user_name, "Rahul Sharma");
        assert_eq!(seed[0].submitted_at.to_rfc3339(), "2023-05-15T09:23:45+00:00");
        assert_eq!(
            seed[3].rejection_reason(),
            Some("Image quality too low. Please upload a higher resolution image.")
        );
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let seed = parse_seed(&format!("[{}]", record("a", ""))).unwrap();
        assert_eq!(seed[0].status(), SubmissionStatus::Pending);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = format!("[{},{}]", record("a", ""), record("a", ""));
        assert!(matches!(parse_seed(&json), Err(ReviewError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_reason_status_mismatch_rejected() {
        let rejected_without_reason = format!("[{}]", record("a", r#","status":"rejected""#));
        assert!(matches!(
            parse_seed(&rejected_without_reason),
            Err(ReviewError::Seed(_))
        ));

        let approved_with_reason = format!(
            "[{}]",
            record("a", r#","status":"approved","rejectionReason":"no""#)
        );
        assert!(matches!(
            parse_seed(&approved_with_reason),
            Err(ReviewError::Seed(_))
        ));

        let blank_reason = format!(
            "[{}]",
            record("a", r#","status":"rejected","rejectionReason":"  ""#)
        );
        assert!(matches!(parse_seed(&blank_reason), Err(ReviewError::Seed(_))));
    }

    #[test]
    fn test_blank_required_field_rejected() {
        let json = format!("[{}]", record(" ", ""));
        assert!(matches!(parse_seed(&json), Err(ReviewError::Seed(_))));
        assert!(matches!(parse_seed("{}"), Err(ReviewError::Seed(_))));
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let path = std::env::temp_dir().join(format!("review-seed-{}.json", std::process::id()));
        tokio::fs::write(&path, format!("[{}]", record("x1", "")))
            .await
            .unwrap();

        let seed = load_seed_file(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id.as_str(), "x1");

        assert!(matches!(
            load_seed_file(Path::new("/nonexistent/seed.json")).await,
            Err(ReviewError::Seed(_))
        ));
    }
}
