//! Browser navigation as an injected capability.
//!
//! Gating redirects use `replace` so the gated page is not reachable with
//! the back button; the organization redirect uses `assign`, a normal
//! navigation that pushes a history entry.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// A navigation intent, as issued to a `Navigator`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current history entry.
    Replace(String),
    /// Navigate normally, keeping the current entry in history.
    Assign(String),
}

impl Navigation {
    pub fn target(&self) -> &str {
        match self {
            Self::Replace(url) | Self::Assign(url) => url,
        }
    }

    /// Hand this intent to `navigator`.
    pub fn issue(&self, navigator: &dyn Navigator) {
        match self {
            Self::Replace(url) => navigator.replace(url),
            Self::Assign(url) => navigator.assign(url),
        }
    }
}

/// Top-level navigation capability (the `window.location` surface).
pub trait Navigator: Send + Sync {
    fn replace(&self, url: &str);
    fn assign(&self, url: &str);
}

/// Navigator backed by `window.location`.
///
/// Outside the browser there is no location to change, so intents are only
/// logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().replace(url) {
                    log::warn!("location.replace({url}) failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("replace navigation to {url} skipped outside the browser");
        }
    }

    fn assign(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    log::warn!("location.href = {url} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("assign navigation to {url} skipped outside the browser");
        }
    }
}
