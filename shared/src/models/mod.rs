//! Read models
//!
//! Projections the client fetches for display. They are never mutated
//! client-side.

pub mod reservation;
pub mod room;

// Re-exports
pub use reservation::*;
pub use room::*;
