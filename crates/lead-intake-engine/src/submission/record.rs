//! The stored copy of a submission, as listed on the dashboard.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FormKind, Submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    #[serde(default)]
    pub form: FormKind,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
    /// Seconds since the Unix epoch.
    pub submitted_at: u64,
    /// Raw assistant reply; empty when the evaluation failed or was skipped.
    #[serde(default)]
    pub evaluation: String,
}

impl SubmissionRecord {
    pub fn new(submission: &Submission, evaluation: Option<&str>, submitted_at: SystemTime) -> Self {
        let contact = submission.contact();
        let profile = submission.profile();
        Self {
            id: Uuid::new_v4(),
            form: submission.kind(),
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            country: contact.country.clone(),
            linkedin: contact.linkedin.clone(),
            academic_level: profile.map(|p| p.academic_level.clone()),
            years_of_experience: profile.map(|p| p.years_of_experience.clone()),
            current_field: profile.map(|p| p.current_field.clone()),
            awards: profile.map(|p| p.awards.clone()),
            project: submission.project().map(str::to_string),
            resume_file: submission.resume().map(|r| r.file_name.clone()),
            submitted_at: submitted_at
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            evaluation: evaluation.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{ResumeUpload, SubmissionForm};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn resume_submission() -> Submission {
        Submission::from_form(SubmissionForm {
            full_name: Some("Luis Gómez".to_string()),
            email: Some("luis@example.com".to_string()),
            resume: Some(ResumeUpload {
                file_name: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
            }),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn record_copies_submission() {
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let record = SubmissionRecord::new(&resume_submission(), Some("Apto"), at);
        assert_eq!(record.full_name, "Luis Gómez");
        assert_eq!(record.email.as_deref(), Some("luis@example.com"));
        assert_eq!(record.resume_file.as_deref(), Some("LuisGómez.pdf"));
        assert_eq!(record.academic_level, None);
        assert_eq!(record.submitted_at, 1_700_000_000);
        assert_eq!(record.evaluation, "Apto");
        assert_eq!(record.id.get_version_num(), 4);
        assert_eq!(record.form, FormKind::Evaluation);
        assert_eq!(record.project, None);
    }

    #[test]
    fn curriculum_record_keeps_project() {
        let submission = Submission::from_form(SubmissionForm {
            kind: FormKind::Curriculum,
            no_resume: true,
            full_name: Some("Luis Gómez".to_string()),
            academic_level: Some("Doctorado".to_string()),
            years_of_experience: Some("5-10".to_string()),
            current_field: Some("Salud".to_string()),
            awards: Some("Sí".to_string()),
            project: Some("Clínicas rurales".to_string()),
            ..Default::default()
        })
        .unwrap();
        let record = SubmissionRecord::new(&submission, None, UNIX_EPOCH);
        assert_eq!(record.form, FormKind::Curriculum);
        assert_eq!(record.project.as_deref(), Some("Clínicas rurales"));
        assert_eq!(record.current_field.as_deref(), Some("Salud"));

        let text = toml::to_string(&record).unwrap();
        assert!(text.contains("form = \"curriculum\""));
        assert!(text.contains("project = \"Clínicas rurales\""));
    }

    #[test]
    fn records_get_distinct_ids() {
        let submission = resume_submission();
        let a = SubmissionRecord::new(&submission, None, SystemTime::now());
        let b = SubmissionRecord::new(&submission, None, SystemTime::now());
        assert_ne!(a.id, b.id);
        assert_eq!(a.evaluation, "");
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let record = SubmissionRecord::new(&resume_submission(), None, UNIX_EPOCH);
        let text = toml::to_string(&record).unwrap();
        assert!(text.contains("full_name = \"Luis Gómez\""));
        assert!(text.contains("submitted_at = 0"));
        assert!(!text.contains("phone"));
        assert!(!text.contains("awards"));

        let back: SubmissionRecord = toml::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
