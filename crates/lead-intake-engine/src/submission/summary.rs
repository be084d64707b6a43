//! Staff-facing text derived from a [`Submission`]: the e-mail subject, the
//! assistant prompt and the HTML summary.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{ProfileFields, Submission};
use crate::evaluation::format_evaluation;

const CONTAINER_STYLE: &str = "font-family: Arial, sans-serif; line-height: 1.6; color: #111; font-size: 1rem;";
const FIELD_STYLE: &str = "font-size: inherit; margin: 10px 0; color: inherit;";
const SECTION_START_STYLE: &str = "font-size: inherit; margin: 30px 0 10px; color: inherit;";
const PROJECT_LABEL: &str = "Proyecto o Plan que beneficiaría a EE.UU.";

/// Presentation options for [`Submission::summary_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStyle {
    /// Colour of the summary headings.
    pub accent_color: String,
    /// Shown for contact fields the visitor left blank.
    pub missing_value: String,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self {
            accent_color: "#f27931".to_string(),
            missing_value: "No proporcionado".to_string(),
        }
    }
}

impl ProfileFields {
    fn labelled(&self) -> [(&'static str, &str); 4] {
        [
            ("Nivel Académico", self.academic_level.as_str()),
            ("Años de Experiencia Profesional", self.years_of_experience.as_str()),
            ("Área o Campo Profesional Actual", self.current_field.as_str()),
            ("Reconocimientos o Premios", self.awards.as_str()),
        ]
    }
}

fn linkedin_href(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

fn field(out: &mut String, style: &str, label: &str, value_html: &str) {
    out.push_str(&format!(
        r#"<p style="{style}"><strong>{label}:</strong> {value_html}</p>"#
    ));
}

impl Submission {
    pub fn subject(&self) -> String {
        format!(
            "{} quiere una evaluación de su perfil para obtener una Visa EB2",
            self.contact().full_name
        )
    }

    /// Prompt sent to the evaluation assistant. Résumé text extraction is
    /// done by the caller and appended after this.
    pub fn evaluation_prompt(&self) -> String {
        let mut prompt = format!("Nombre del cliente: {}.", self.contact().full_name);
        if let Some(profile) = self.profile() {
            let lines: Vec<String> = profile
                .labelled()
                .iter()
                .map(|(label, value)| format!("{label}: {value}."))
                .collect();
            prompt.push(' ');
            prompt.push_str(&lines.join("\n"));
        }
        if let Some(project) = self.project() {
            prompt.push_str(&format!("\n{PROJECT_LABEL}: {project}."));
        }
        prompt
    }

    /// HTML body of the staff notification. Every visitor-supplied value is
    /// escaped; `evaluation` is rendered with [`format_evaluation`].
    pub fn summary_html(&self, evaluation: Option<&str>, style: &SummaryStyle) -> String {
        let contact = self.contact();
        let accent = encode_double_quoted_attribute(&style.accent_color);
        let missing = encode_text(&style.missing_value);
        let or_missing = |value: &Option<String>| {
            value
                .as_deref()
                .map(|v| encode_text(v).into_owned())
                .unwrap_or_else(|| missing.to_string())
        };

        let mut out = String::new();
        out.push_str(&format!(r#"<div style="{CONTAINER_STYLE}">"#));
        out.push_str(&format!(
            r#"<h1 style="font-size: 1.3rem; color: {accent};">Solicitud de Evaluación EB2</h1>"#
        ));

        field(&mut out, FIELD_STYLE, "Nombre Completo", &encode_text(&contact.full_name));
        field(&mut out, FIELD_STYLE, "Correo Electrónico", &or_missing(&contact.email));
        field(&mut out, FIELD_STYLE, "Teléfono", &or_missing(&contact.phone));
        field(&mut out, FIELD_STYLE, "País", &or_missing(&contact.country));

        let linkedin = match &contact.linkedin {
            Some(url) => format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                encode_double_quoted_attribute(&linkedin_href(url)),
                encode_text(url)
            ),
            None => missing.to_string(),
        };
        field(&mut out, FIELD_STYLE, "LinkedIn", &linkedin);

        match self.resume() {
            Some(resume) => field(&mut out, FIELD_STYLE, "CV adjunto", &encode_text(&resume.file_name)),
            None => field(&mut out, FIELD_STYLE, "CV", "No se adjuntó un archivo"),
        }

        if let Some(profile) = self.profile() {
            for (i, (label, value)) in profile.labelled().iter().enumerate() {
                let style = if i == 0 { SECTION_START_STYLE } else { FIELD_STYLE };
                field(&mut out, style, label, &encode_text(value));
            }
        }
        if let Submission::Curriculum {
            profile: Some(_),
            project,
            ..
        } = self
        {
            field(&mut out, FIELD_STYLE, PROJECT_LABEL, &or_missing(project));
        }
        out.push_str("</div>");

        if let Some(evaluation) = evaluation.filter(|e| !e.trim().is_empty()) {
            out.push_str(&format!(
                r#"<div style="{CONTAINER_STYLE} margin-top: 2.5rem;"><h2 style="font-size: 1.3rem; color: {accent}; margin: 0;">Evaluación Inicial</h2>{}</div>"#,
                format_evaluation(evaluation)
            ));
        }

        out
    }
}
