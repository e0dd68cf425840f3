//! Utility helpers shared across the session flow and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (window location,
//! component teardown) from flow logic so the flow stays testable natively.

pub mod liveness;
pub mod navigation;
