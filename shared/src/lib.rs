//! Shared types for the CQRS Hotel client
//!
//! Wire types of the hotel API, used by both the HTTP client and the UI.
//! Field names are camelCase on the wire.

pub mod client;
pub mod consistency;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{MakeReservation, SearchForAccommodation};
pub use consistency::{OBSERVED_POSITION_HEADER, ObservedPosition};
pub use models::{ReservationDto, ReservationOffer, RoomAvailabilityDto, RoomAvailabilityInterval, RoomDto};
