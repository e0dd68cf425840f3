//! Networking modules for the two JSON endpoints the landing page consumes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `Backend` capability and the browser transport, `types`
//! defines the wire schema shared by the session flow and the components.

pub mod api;
pub mod types;
