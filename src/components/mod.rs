//! UI components for the landing page.
//!
//! Components only display header state and forward clicks to the session
//! flow; marketing copy lives in `copy` so it can be checked without a DOM.

pub mod actions;
pub mod app_bar;
pub mod body;
pub mod copy;
pub mod footer;
