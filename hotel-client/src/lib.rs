//! Hotel Client - HTTP client for the CQRS Hotel API
//!
//! Provides typed access to the hotel endpoints and carries the observed
//! position forward between requests.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::HotelApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::{
    MakeReservation, ObservedPosition, ReservationDto, ReservationOffer, RoomAvailabilityDto,
    RoomDto, SearchForAccommodation,
};
