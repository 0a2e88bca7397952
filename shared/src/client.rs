//! Command payloads sent by the client
//!
//! These are the request bodies of the two write endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ReservationOffer;

/// Guest name used when the booking flow does not ask for one
pub const DEFAULT_GUEST_NAME: &str = "John Doe";

/// Guest e-mail used when the booking flow does not ask for one
pub const DEFAULT_GUEST_EMAIL: &str = "john@example.com";

/// `POST /api/search-for-accommodation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForAccommodation {
    pub reservation_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// `POST /api/make-reservation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeReservation {
    pub reservation_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    pub name: String,
    pub email: String,
}

impl MakeReservation {
    /// Accept an offer on behalf of a guest
    pub fn from_offer(offer: &ReservationOffer, name: Option<String>, email: Option<String>) -> Self {
        Self {
            reservation_id: offer.reservation_id,
            start_date: offer.start_date,
            end_date: offer.end_date,
            total_price: offer.total_price.clone(),
            name: name.unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string()),
            email: email.unwrap_or_else(|| DEFAULT_GUEST_EMAIL.to_string()),
        }
    }
}
