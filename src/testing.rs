//! In-memory capabilities for harnesses and unit tests.
//!
//! `StubBackend` answers GETs from a canned table and counts calls, so a
//! harness can assert that a mount performed no network traffic.
//! `RecordingNavigator` records intents instead of leaving the page.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::LocalBoxFuture;

use crate::net::api::{Backend, FetchError};
use crate::net::types::HttpResponse;
use crate::util::navigation::{Navigation, Navigator};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Canned-response backend. Paths without a canned answer get a 404.
#[derive(Debug, Default)]
pub struct StubBackend {
    answers: Mutex<HashMap<String, Result<HttpResponse, FetchError>>>,
    calls: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `status` and a raw `body`.
    #[must_use]
    pub fn respond(self, path: &str, status: u16, body: &str) -> Self {
        lock(&self.answers).insert(path.to_owned(), Ok(HttpResponse::new(status, body)));
        self
    }

    /// Answer `path` with a JSON body.
    #[must_use]
    pub fn respond_json(self, path: &str, status: u16, body: &serde_json::Value) -> Self {
        let text = body.to_string();
        self.respond(path, status, &text)
    }

    /// Fail `path` at the transport level.
    #[must_use]
    pub fn fail(self, path: &str, error: FetchError) -> Self {
        lock(&self.answers).insert(path.to_owned(), Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Paths requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

impl Backend for StubBackend {
    fn get<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<HttpResponse, FetchError>> {
        lock(&self.calls).push(path.to_owned());
        let answer = lock(&self.answers)
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")));
        Box::pin(async move { answer })
    }
}

/// Navigator that records intents in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<Navigation> {
        lock(&self.history).clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        lock(&self.history).last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.history).is_empty()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, url: &str) {
        lock(&self.history).push(Navigation::Replace(url.to_owned()));
    }

    fn assign(&self, url: &str) {
        lock(&self.history).push(Navigation::Assign(url.to_owned()));
    }
}
