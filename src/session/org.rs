//! Organization lookup and redirect.
//!
//! `fetch_org_url` is the lookup alone; `SessionServices::redirect_to_org`
//! adds the in-flight guard, the liveness check, and the navigation.

#[cfg(test)]
#[path = "org_test.rs"]
mod org_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::{Backend, FetchError};
use crate::net::types::OrganizationReference;
use crate::util::liveness::Liveness;

use super::SessionServices;
use super::outcome::{Outcome, classify};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgRedirect {
    /// The browser was sent to this URL.
    Navigated(String),
    /// No organization URL yet; nothing happens.
    NotProvisioned,
    /// Another lookup is still pending; this trigger was dropped.
    AlreadyPending,
    Failed(FetchError),
    /// Harness mode: nothing was fetched.
    Skipped,
    /// The owner was torn down before the response arrived.
    Abandoned,
}

/// Look up the caller's organization URL.
///
/// Non-2xx, empty/falsy bodies, and a missing, `null` or empty `url` all
/// yield `Ok(None)`.
/// The body is fully read before `url` is taken.
///
/// # Errors
///
/// Transport failures and undecodable 2xx bodies.
pub async fn fetch_org_url(backend: &dyn Backend, endpoint: &str) -> Result<Option<String>, FetchError> {
    let resp = backend.get(endpoint).await?;
    match classify::<OrganizationReference>(&resp)? {
        Outcome::Body(OrganizationReference { url: Some(url) }) if !url.is_empty() => Ok(Some(url)),
        Outcome::Body(_) | Outcome::Empty => Ok(None),
        Outcome::Failure(status) => {
            log::debug!("organization lookup returned {status}");
            Ok(None)
        }
    }
}

/// Held while a lookup is pending; released on drop.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SessionServices {
    /// Look up the organization URL and navigate there (normal navigation).
    pub async fn redirect_to_org(&self, liveness: &Liveness) -> OrgRedirect {
        if self.is_harness() {
            return OrgRedirect::Skipped;
        }
        let Some(_guard) = InFlight::acquire(&self.org_in_flight) else {
            log::debug!("organization lookup already pending");
            return OrgRedirect::AlreadyPending;
        };

        let lookup = fetch_org_url(self.backend.as_ref(), &self.config.organization_endpoint).await;
        if !liveness.is_alive() {
            return OrgRedirect::Abandoned;
        }
        match lookup {
            Ok(Some(url)) => {
                log::info!("redirecting to organization {url}");
                self.navigator.assign(&url);
                OrgRedirect::Navigated(url)
            }
            Ok(None) => {
                log::debug!("no organization provisioned yet");
                OrgRedirect::NotProvisioned
            }
            Err(err) => {
                log::warn!("organization lookup failed: {err}");
                OrgRedirect::Failed(err)
            }
        }
    }

    /// Whether an organization lookup is currently pending.
    pub fn org_lookup_pending(&self) -> bool {
        self.org_in_flight.load(Ordering::Acquire)
    }
}
