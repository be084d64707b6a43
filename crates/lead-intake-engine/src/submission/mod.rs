//! # Submissions
//!
//! A visitor's evaluation request as the server sees it after validation.
//!
//! [`SubmissionForm`] mirrors the posted form: every field optional, blank
//! fields count as absent. Two forms post to the server, told apart by
//! [`FormKind`]:
//!
//! - **Evaluation**: a request with a résumé file (career fields optional) or
//!   a profile-only request where all four career fields are required.
//! - **Curriculum**: needs a LinkedIn profile, a résumé, or the "no résumé"
//!   box ticked. Ticking it asks for the career fields plus a project the
//!   applicant would carry out in the United States.
//!
//! The staff e-mail and the stored record are derived from a [`Submission`]
//! (see `summary` and `record`). Sending, storing and the AI call itself are
//! done by the caller.

pub mod record;
pub mod summary;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use record::SubmissionRecord;
pub use summary::SummaryStyle;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Full name is required")]
    MissingName,

    #[error("No résumé was attached and the profile fields are incomplete")]
    Incomplete,

    #[error("A LinkedIn profile, a résumé or the profile fields are required")]
    NoProfileSource,
}

/// Which intake form a submission came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    #[default]
    Evaluation,
    Curriculum,
}

/// An uploaded résumé as described by the multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUpload {
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
}

/// Raw form fields as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub kind: FormKind,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub linkedin: Option<String>,
    pub academic_level: Option<String>,
    pub years_of_experience: Option<String>,
    pub current_field: Option<String>,
    pub awards: Option<String>,
    /// Curriculum form only.
    pub project: Option<String>,
    /// Curriculum form only: the "no résumé" box. Gates the career fields.
    pub no_resume: bool,
    pub resume: Option<ResumeUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub linkedin: Option<String>,
}

/// The four career fields asked for when no résumé is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub academic_level: String,
    pub years_of_experience: String,
    pub current_field: String,
    pub awards: String,
}

/// A résumé renamed after the applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub file_name: String,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    WithResume {
        contact: Contact,
        resume: Resume,
        profile: Option<ProfileFields>,
    },
    ProfileOnly {
        contact: Contact,
        profile: ProfileFields,
    },
    /// From the curriculum form. `profile` and `project` are only read when
    /// the "no résumé" box was ticked.
    Curriculum {
        contact: Contact,
        resume: Option<Resume>,
        profile: Option<ProfileFields>,
        project: Option<String>,
    },
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `Ana María Pérez` + `cv.final.pdf` → `AnaMaríaPérez.pdf`.
pub fn resume_file_name(full_name: &str, original: &str) -> String {
    let stem: String = full_name.split_whitespace().collect();
    let extension = original.rsplit('.').next().unwrap_or(original);
    format!("{stem}.{extension}")
}

impl Submission {
    pub fn from_form(form: SubmissionForm) -> Result<Self, SubmissionError> {
        let full_name = present(form.full_name).ok_or(SubmissionError::MissingName)?;

        let profile = match (
            present(form.academic_level),
            present(form.years_of_experience),
            present(form.current_field),
            present(form.awards),
        ) {
            (Some(academic_level), Some(years_of_experience), Some(current_field), Some(awards)) => {
                Some(ProfileFields {
                    academic_level,
                    years_of_experience,
                    current_field,
                    awards,
                })
            }
            _ => None,
        };

        let resume = form
            .resume
            .filter(|r| !r.file_name.trim().is_empty())
            .map(|r| Resume {
                file_name: resume_file_name(&full_name, &r.file_name),
                content_type: r.content_type,
            });

        let contact = Contact {
            full_name,
            email: present(form.email),
            phone: present(form.phone),
            country: present(form.country),
            linkedin: present(form.linkedin),
        };

        let submission = match form.kind {
            FormKind::Evaluation => match (resume, profile) {
                (Some(resume), profile) => Submission::WithResume {
                    contact,
                    resume,
                    profile,
                },
                (None, Some(profile)) => Submission::ProfileOnly { contact, profile },
                (None, None) => return Err(SubmissionError::Incomplete),
            },
            FormKind::Curriculum if form.no_resume => Submission::Curriculum {
                contact,
                resume,
                profile: Some(profile.ok_or(SubmissionError::Incomplete)?),
                project: present(form.project),
            },
            FormKind::Curriculum => {
                if contact.linkedin.is_none() && resume.is_none() {
                    return Err(SubmissionError::NoProfileSource);
                }
                Submission::Curriculum {
                    contact,
                    resume,
                    profile: None,
                    project: None,
                }
            }
        };

        log::debug!(
            "accepted {:?} submission from {} (resume: {}, profile: {})",
            form.kind,
            submission.contact().full_name,
            submission.resume().is_some(),
            submission.profile().is_some()
        );
        Ok(submission)
    }

    pub fn contact(&self) -> &Contact {
        match self {
            Submission::WithResume { contact, .. }
            | Submission::ProfileOnly { contact, .. }
            | Submission::Curriculum { contact, .. } => contact,
        }
    }

    pub fn resume(&self) -> Option<&Resume> {
        match self {
            Submission::WithResume { resume, .. } => Some(resume),
            Submission::ProfileOnly { .. } => None,
            Submission::Curriculum { resume, .. } => resume.as_ref(),
        }
    }

    pub fn profile(&self) -> Option<&ProfileFields> {
        match self {
            Submission::WithResume { profile, .. } | Submission::Curriculum { profile, .. } => {
                profile.as_ref()
            }
            Submission::ProfileOnly { profile, .. } => Some(profile),
        }
    }

    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Curriculum { .. } => FormKind::Curriculum,
            _ => FormKind::Evaluation,
        }
    }

    pub fn project(&self) -> Option<&str> {
        match self {
            Submission::Curriculum { project, .. } => project.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn profile_form() -> SubmissionForm {
        SubmissionForm {
            full_name: s("Ana María Pérez"),
            email: s("ana@example.com"),
            academic_level: s("Maestría"),
            years_of_experience: s("10+"),
            current_field: s("Ingeniería"),
            awards: s("Sí"),
            ..Default::default()
        }
    }

    #[test]
    fn profile_only_submission() {
        let submission = Submission::from_form(profile_form()).unwrap();
        assert!(matches!(submission, Submission::ProfileOnly { .. }));
        assert_eq!(submission.contact().full_name, "Ana María Pérez");
        assert_eq!(submission.profile().unwrap().current_field, "Ingeniería");
        assert_eq!(submission.resume(), None);
    }

    #[test]
    fn resume_submission_renames_file() {
        let form = SubmissionForm {
            full_name: s("Ana  María Pérez"),
            resume: Some(ResumeUpload {
                file_name: "mi cv.final.PDF".to_string(),
                content_type: "application/pdf".to_string(),
            }),
            ..Default::default()
        };
        let submission = Submission::from_form(form).unwrap();
        let resume = submission.resume().unwrap();
        assert_eq!(resume.file_name, "AnaMaríaPérez.PDF");
        assert_eq!(resume.content_type, "application/pdf");
        assert_eq!(submission.profile(), None);
    }

    #[test]
    fn resume_with_complete_profile_keeps_both() {
        let form = SubmissionForm {
            resume: Some(ResumeUpload {
                file_name: "cv.docx".to_string(),
                content_type: String::new(),
            }),
            ..profile_form()
        };
        let submission = Submission::from_form(form).unwrap();
        assert!(submission.resume().is_some());
        assert!(submission.profile().is_some());
    }

    #[rstest]
    #[case::missing_awards(SubmissionForm { awards: None, ..profile_form() })]
    #[case::blank_field(SubmissionForm { current_field: s("   "), ..profile_form() })]
    #[case::nameless_resume(SubmissionForm {
        resume: Some(ResumeUpload { file_name: String::new(), content_type: String::new() }),
        awards: None,
        ..profile_form()
    })]
    fn incomplete_without_resume(#[case] form: SubmissionForm) {
        assert_eq!(Submission::from_form(form), Err(SubmissionError::Incomplete));
    }

    #[test]
    fn name_is_required() {
        let form = SubmissionForm {
            full_name: s(" "),
            ..profile_form()
        };
        assert_eq!(Submission::from_form(form), Err(SubmissionError::MissingName));
    }

    #[test]
    fn blank_contact_fields_are_absent() {
        let form = SubmissionForm {
            phone: s(""),
            country: s("  República Dominicana "),
            ..profile_form()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.contact().phone, None);
        assert_eq!(submission.contact().country.as_deref(), Some("República Dominicana"));
    }

    #[test]
    fn form_reads_from_toml() {
        let form: SubmissionForm = toml::from_str(
            r#"
full_name = "Ana Pérez"
phone = "+1 (809) 555-1234"

[resume]
file_name = "cv.pdf"
"#,
        )
        .unwrap();
        assert_eq!(form.email, None);
        assert_eq!(form.kind, FormKind::Evaluation);
        assert_eq!(form.resume.as_ref().unwrap().content_type, "");
        assert!(Submission::from_form(form).is_ok());
    }

    fn curriculum_form() -> SubmissionForm {
        SubmissionForm {
            kind: FormKind::Curriculum,
            full_name: s("Luis Gómez"),
            ..Default::default()
        }
    }

    #[test]
    fn curriculum_accepts_linkedin_alone() {
        let form = SubmissionForm {
            linkedin: s("linkedin.com/in/luis"),
            ..curriculum_form()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.kind(), FormKind::Curriculum);
        assert_eq!(submission.resume(), None);
        assert_eq!(submission.profile(), None);
    }

    #[test]
    fn curriculum_needs_linkedin_resume_or_profile() {
        assert_eq!(
            Submission::from_form(curriculum_form()),
            Err(SubmissionError::NoProfileSource)
        );
    }

    #[test]
    fn curriculum_ignores_profile_unless_box_ticked() {
        let form = SubmissionForm {
            kind: FormKind::Curriculum,
            project: s("Clínicas rurales"),
            resume: Some(ResumeUpload {
                file_name: "cv.pdf".to_string(),
                content_type: String::new(),
            }),
            ..profile_form()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.profile(), None);
        assert_eq!(submission.project(), None);
        assert_eq!(submission.resume().unwrap().file_name, "AnaMaríaPérez.pdf");
    }

    #[test]
    fn curriculum_without_resume_reads_profile_and_project() {
        let form = SubmissionForm {
            kind: FormKind::Curriculum,
            no_resume: true,
            project: s("Clínicas rurales"),
            ..profile_form()
        };
        let submission = Submission::from_form(form).unwrap();
        assert_eq!(submission.profile().unwrap().academic_level, "Maestría");
        assert_eq!(submission.project(), Some("Clínicas rurales"));
    }

    #[test]
    fn curriculum_without_resume_needs_every_profile_field() {
        let form = SubmissionForm {
            kind: FormKind::Curriculum,
            no_resume: true,
            linkedin: s("linkedin.com/in/ana"),
            awards: None,
            ..profile_form()
        };
        assert_eq!(Submission::from_form(form), Err(SubmissionError::Incomplete));
    }

    #[test]
    fn form_kind_reads_from_toml() {
        let form: SubmissionForm = toml::from_str(
            r#"
kind = "curriculum"
full_name = "Luis Gómez"
no_resume = true
"#,
        )
        .unwrap();
        assert_eq!(form.kind, FormKind::Curriculum);
        assert!(form.no_resume);
    }

    #[rstest]
    #[case("Juan Pérez", "cv.pdf", "JuanPérez.pdf")]
    #[case("Juan", "resume", "Juan.resume")]
    #[case("Juan\tde la Cruz", "a.b.c.jpg", "JuandelaCruz.jpg")]
    fn renames_resume(#[case] name: &str, #[case] original: &str, #[case] expected: &str) {
        assert_eq!(resume_file_name(name, original), expected);
    }
}
