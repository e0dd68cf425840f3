//! Logout: clear the header, then leave for the server's logout route.
//!
//! No request is made from here; the logout route ends the session and
//! redirects on its own.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::util::navigation::Navigation;

use super::SessionServices;

impl SessionServices {
    /// Run `sign_out` and, outside harness mode, `replace` to the logout
    /// route. `sign_out` has returned before the navigator is touched.
    ///
    /// Returns the navigation issued, if any.
    pub fn logout(&self, sign_out: impl FnOnce()) -> Option<Navigation> {
        sign_out();
        if self.is_harness() {
            return None;
        }
        let navigation = Navigation::Replace(self.config.logout_path.clone());
        log::info!("logging out via {}", navigation.target());
        navigation.issue(self.navigator.as_ref());
        Some(navigation)
    }
}
