//! Session/redirect flow: profile gating, organization redirect, logout.
//!
//! ARCHITECTURE
//! ============
//! `SessionServices` bundles the injected capabilities (`Backend`,
//! `Navigator`), the config, and the run mode. The three operations are
//! independent and live in their own modules:
//!
//! - `probe`: fetch `/profile` on mount, store it or issue a gating redirect
//! - `org`: fetch `/organization` on click and navigate to its URL
//! - `logout`: clear header state, then navigate to `/logout`
//!
//! `outcome` holds the pure response classification all of them share.
//! Nothing here reads a global: a harness builds `SessionServices` from
//! `testing` fakes (or `RunMode::Harness`) and drives the same code paths.

pub mod logout;
pub mod org;
pub mod outcome;
pub mod probe;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::config::{LandingConfig, RunMode};
use crate::net::api::{Backend, BrowserBackend};
use crate::util::navigation::{BrowserNavigator, Navigator};

/// Capabilities and settings shared by every session operation.
///
/// Cheap to clone; clones share the organization in-flight guard.
#[derive(Clone)]
pub struct SessionServices {
    backend: Arc<dyn Backend>,
    navigator: Arc<dyn Navigator>,
    config: Arc<LandingConfig>,
    org_in_flight: Arc<AtomicBool>,
}

impl SessionServices {
    pub fn new(backend: Arc<dyn Backend>, navigator: Arc<dyn Navigator>, config: LandingConfig) -> Self {
        Self {
            backend,
            navigator,
            config: Arc::new(config),
            org_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Services wired to the browser's `fetch` and `window.location`.
    pub fn browser(config: LandingConfig) -> Self {
        let backend = BrowserBackend::new(config.fetch_timeout_ms);
        Self::new(Arc::new(backend), Arc::new(BrowserNavigator), config)
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn is_harness(&self) -> bool {
        self.config.run_mode == RunMode::Harness
    }
}

impl std::fmt::Debug for SessionServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionServices")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
