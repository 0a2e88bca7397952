//! Reservation Models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Price quote for a searched stay
///
/// `total_price` is a money string such as `"EUR 120.00"`; `None` means
/// the hotel is sold out for the requested dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationOffer {
    pub reservation_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub total_price: Option<String>,
}

impl ReservationOffer {
    pub fn is_sold_out(&self) -> bool {
        self.total_price.as_deref().is_none_or(str::is_empty)
    }
}

/// Reservation as seen by the reservations view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub reservation_id: Uuid,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_sold_out() {
        let json = r#"{"reservationId":"6f1c1f0e-6a61-4f59-9a4b-0d3b0c7c2f11","startDate":"2026-10-20","endDate":"2026-10-21","totalPrice":null}"#;
        let offer: ReservationOffer = serde_json::from_str(json).unwrap();
        assert!(offer.is_sold_out());

        let json = r#"{"reservationId":"6f1c1f0e-6a61-4f59-9a4b-0d3b0c7c2f11","startDate":"2026-10-20","endDate":"2026-10-21","totalPrice":"EUR 100.00"}"#;
        let offer: ReservationOffer = serde_json::from_str(json).unwrap();
        assert!(!offer.is_sold_out());
        assert_eq!(offer.start_date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn test_reservation_dto_tolerates_partial_projection() {
        let json = r#"{"reservationId":"6f1c1f0e-6a61-4f59-9a4b-0d3b0c7c2f11","checkInTime":"2026-10-20T11:00:00Z","status":"reserved"}"#;
        let dto: ReservationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.status.as_deref(), Some("reserved"));
        assert!(dto.check_in_time.is_some());
        assert!(dto.check_out_time.is_none());
        assert!(dto.name.is_none());
    }
}
