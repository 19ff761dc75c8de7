//! Auth callback handling, modeled as a pure redirect decision.
//!
//! The surrounding transport (whatever serves `/auth/callback`) extracts
//! the `code` and `next` query parameters and applies the returned
//! redirect; nothing here touches HTTP.

use tracing::warn;

use crate::providers::SessionProvider;
use crate::urlenc::percent_encode;

const DEFAULT_NEXT: &str = "/dashboard";
const LOGIN_PATH: &str = "/login";
const EXCHANGE_FAILED_MESSAGE: &str = "Link inválido ou expirado.";

/// Where the callback sends the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
}

impl Redirect {
    fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Decide the callback redirect. A missing code goes straight back to
/// login; a failed exchange carries the error message; success lands on
/// `next` (default `/dashboard`). Off-site `next` values are ignored.
pub fn handle_auth_callback(
    provider: &dyn SessionProvider,
    code: Option<&str>,
    next: Option<&str>,
) -> Redirect {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return Redirect::to(LOGIN_PATH);
    };

    match provider.exchange_code(code) {
        Ok(_) => {
            let next = next
                .filter(|n| n.starts_with('/') && !n.starts_with("//"))
                .unwrap_or(DEFAULT_NEXT);
            Redirect::to(next)
        }
        Err(e) => {
            warn!(error = %e, "auth code exchange failed");
            Redirect::to(format!(
                "{LOGIN_PATH}?error={}",
                percent_encode(EXCHANGE_FAILED_MESSAGE)
            ))
        }
    }
}
