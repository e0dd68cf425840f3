//! Wire DTOs for the profile and organization endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror what the backend emits (`Name`, `Email`, `AccountName`
//! for profiles; lowercase `url` for organizations) so no renaming layer is
//! needed between the response body and view-state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's display identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    /// Display name shown in the welcome banner.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Directory account, e.g. `corp\tester` or `tester@corp.net`.
    #[serde(default)]
    pub account_name: String,
}

/// Organization record returned by `/organization`.
///
/// The backend sends the full organization (guid, name, quota, ...); only
/// `url` is consumed, everything else is ignored. A missing or `null` url
/// means the organization is not provisioned yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationReference {
    #[serde(default)]
    pub url: Option<String>,
}

/// Transport-neutral result of a GET: status code plus raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// `true` for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
