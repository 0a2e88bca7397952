//! Room Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_id: Uuid,
    pub room_number: String,
}

/// Availability of one room over a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityDto {
    pub room_id: Uuid,
    pub room_number: String,
    pub available: bool,
    #[serde(default)]
    pub details: Vec<RoomAvailabilityInterval>,
}

/// Occupied or free interval of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAvailabilityInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub occupied: bool,
}
