//! Header view-state: who is signed in, whether the account menu is open,
//! and any non-fatal notice from the last fetch.
//!
//! Phases: `Unknown` until the profile probe answers, `Authenticated` while
//! a profile is held, `LoggedOut` once logout starts. `LoggedOut` is
//! terminal; the page is navigating away.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::net::types::Profile;
use crate::session::org::OrgRedirect;
use crate::session::probe::ProbeResult;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unknown,
    Authenticated(Profile),
    LoggedOut,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub phase: SessionPhase,
    pub menu_open: bool,
    pub notice: Option<String>,
    /// Last organization URL the header navigated to.
    pub org_url: Option<String>,
}

impl HeaderState {
    /// State seeded with an injected profile, as a harness would render it.
    pub fn with_profile(profile: Profile) -> Self {
        Self { phase: SessionPhase::Authenticated(profile), ..Self::default() }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.phase {
            SessionPhase::Authenticated(profile) => Some(profile),
            SessionPhase::Unknown | SessionPhase::LoggedOut => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile().is_some()
    }

    /// Banner text for the authenticated view, `None` otherwise.
    pub fn welcome_text(&self) -> Option<String> {
        self.profile().map(welcome_text)
    }

    pub fn open_menu(&mut self) {
        if self.is_authenticated() {
            self.menu_open = true;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fold a profile probe result into the state.
    pub fn apply_probe(&mut self, result: &ProbeResult) {
        if self.phase == SessionPhase::LoggedOut {
            return;
        }
        match result {
            ProbeResult::Authenticated(profile) => {
                self.phase = SessionPhase::Authenticated(profile.clone());
                self.notice = None;
            }
            ProbeResult::Unreachable(err) => self.notice = Some(err.notice()),
            ProbeResult::Anonymous | ProbeResult::Redirected(_) | ProbeResult::Skipped | ProbeResult::Abandoned => {}
        }
    }

    /// Fold an organization redirect result into the state.
    pub fn apply_org_redirect(&mut self, result: &OrgRedirect) {
        match result {
            OrgRedirect::Navigated(url) => {
                self.org_url = Some(url.clone());
                self.notice = None;
            }
            OrgRedirect::Failed(err) => self.notice = Some(err.notice()),
            OrgRedirect::NotProvisioned | OrgRedirect::AlreadyPending | OrgRedirect::Skipped | OrgRedirect::Abandoned => {}
        }
    }

    /// Drop the profile and close the menu. Terminal.
    pub fn sign_out(&mut self) {
        self.phase = SessionPhase::LoggedOut;
        self.menu_open = false;
        self.notice = None;
    }
}

/// `"Welcome, {Name}"`.
pub fn welcome_text(profile: &Profile) -> String {
    format!("Welcome, {}", profile.name)
}
