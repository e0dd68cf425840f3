//! Profile probe: the header's mount-time gate.
//!
//! One activation ends in exactly one of: profile stored, `replace` to the
//! login page (401), `replace` to `/<status>` (any other failure). Transport
//! errors, empty bodies, harness mode, and teardown end without navigation.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use crate::config::{LandingConfig, status_page};
use crate::net::api::FetchError;
use crate::net::types::{HttpResponse, Profile};
use crate::util::liveness::Liveness;
use crate::util::navigation::Navigation;

use super::SessionServices;
use super::outcome::{Outcome, classify};

const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Authenticated(Profile),
    /// 2xx without a profile body; the header stays anonymous.
    Anonymous,
    /// A gating redirect was issued.
    Redirected(Navigation),
    Unreachable(FetchError),
    /// Harness mode: nothing was fetched.
    Skipped,
    /// The owner was torn down before the response arrived.
    Abandoned,
}

/// Map a `/profile` response to its result, without side effects.
pub fn interpret_profile_response(resp: &HttpResponse, config: &LandingConfig) -> ProbeResult {
    match classify::<Profile>(resp) {
        Ok(Outcome::Body(profile)) => ProbeResult::Authenticated(profile),
        Ok(Outcome::Empty) => ProbeResult::Anonymous,
        Ok(Outcome::Failure(UNAUTHORIZED)) => ProbeResult::Redirected(Navigation::Replace(config.login_path.clone())),
        Ok(Outcome::Failure(status)) => ProbeResult::Redirected(Navigation::Replace(status_page(status))),
        Err(err) => ProbeResult::Unreachable(err),
    }
}

impl SessionServices {
    /// Fetch the profile and issue any gating redirect.
    ///
    /// The returned result is for the caller to fold into its view-state;
    /// callers should skip that when `liveness` has been retired.
    pub async fn probe_session(&self, liveness: &Liveness) -> ProbeResult {
        if self.is_harness() {
            return ProbeResult::Skipped;
        }

        let endpoint = &self.config.profile_endpoint;
        let resp = match self.backend.get(endpoint).await {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("profile fetch from {endpoint} failed: {err}");
                return if liveness.is_alive() { ProbeResult::Unreachable(err) } else { ProbeResult::Abandoned };
            }
        };
        if !liveness.is_alive() {
            log::debug!("profile response ({}) arrived after teardown", resp.status);
            return ProbeResult::Abandoned;
        }

        let result = interpret_profile_response(&resp, &self.config);
        match &result {
            ProbeResult::Redirected(navigation) => {
                log::info!("profile status {} gates page, redirecting to {}", resp.status, navigation.target());
                navigation.issue(self.navigator.as_ref());
            }
            ProbeResult::Unreachable(err) => log::warn!("profile response unusable: {err}"),
            ProbeResult::Anonymous => log::debug!("profile endpoint returned no profile"),
            ProbeResult::Authenticated(_) | ProbeResult::Skipped | ProbeResult::Abandoned => {}
        }
        result
    }
}
