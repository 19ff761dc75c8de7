//! Certificate display formatting: participant name derivation, pt-BR
//! completion date, and the duration string.

use chrono::{DateTime, Datelike};

/// Month names for the fixed pt-BR certificate locale.
const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Derive the participant's display name from their email: the local part
/// with `.`/`-`/`_` replaced by spaces, upper-cased. This is the only
/// source of the printed name; no real-name field is consulted.
pub fn participant_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .chars()
        .map(|c| match c {
            '.' | '-' | '_' => ' ',
            other => other,
        })
        .collect::<String>()
        .to_uppercase()
}

/// Format a unix timestamp as a long pt-BR date, e.g. "12 de março de 2024".
/// Out-of-range timestamps fall back to the epoch date rather than failing;
/// an unreadable date on a certificate beats a hard error.
pub fn format_completion_date_pt_br(unix_secs: i64) -> String {
    let date = DateTime::from_timestamp(unix_secs, 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .date_naive();
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Duration display string: `"<hours> horas"`.
pub fn format_duration_hours(hours: i64) -> String {
    format!("{} horas", hours.max(0))
}
