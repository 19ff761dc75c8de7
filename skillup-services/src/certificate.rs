//! Certificate resolution for the public verification page.
//!
//! A certificate id resolves to display data or to a not-found outcome.
//! Missing linked rows (course or user) are hard not-founds too: a
//! certificate that cannot name its course or holder must not render.

use skillup_core::certificate::{
    format_completion_date_pt_br, format_duration_hours, participant_name_from_email,
};
use skillup_core::config::CertificateConfig;
use skillup_core::errors::CertificateError;
use skillup_storage::queries::{certificates, courses, profiles};
use skillup_storage::DatabaseManager;

/// What the certificate page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateData {
    pub certificate_id: String,
    /// Derived from the holder's email local part, upper-cased.
    pub participant_name: String,
    pub course_title: String,
    /// Long pt-BR date, e.g. "12 de março de 2024".
    pub completion_date: String,
    /// `"<hours> horas"`.
    pub course_duration: String,
}

/// Resolve a certificate id into display data.
pub fn resolve_certificate(
    db: &DatabaseManager,
    config: &CertificateConfig,
    id: &str,
) -> Result<CertificateData, CertificateError> {
    let cert = db
        .with_reader(|conn| certificates::get_certificate(conn, id))?
        .ok_or_else(|| CertificateError::NotFound { id: id.to_string() })?;

    let course = db
        .with_reader(|conn| courses::get_course(conn, cert.course_id))?
        .ok_or_else(|| CertificateError::CourseMissing {
            certificate_id: cert.id.clone(),
        })?;

    let holder = db
        .with_reader(|conn| profiles::get_profile(conn, &cert.user_id))?
        .ok_or_else(|| CertificateError::UserMissing {
            certificate_id: cert.id.clone(),
        })?;

    // The placeholder only covers a holder without a mirrored email; a
    // missing holder row was already rejected above.
    let email = holder
        .email
        .unwrap_or_else(|| config.effective_placeholder_email().to_string());

    Ok(CertificateData {
        certificate_id: cert.id,
        participant_name: participant_name_from_email(&email),
        course_title: course.title,
        completion_date: format_completion_date_pt_br(cert.issued_at),
        course_duration: format_duration_hours(course.duration_hours),
    })
}
