//! Client-side view-state.
//!
//! DESIGN
//! ======
//! Only the header owns state that the session flow writes; the hero and
//! footer are stateless.

pub mod header;
