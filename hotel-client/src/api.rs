//! Typed hotel API
//!
//! One method per endpoint. Dates in paths use the ISO `YYYY-MM-DD` form.

use chrono::NaiveDate;
use shared::{
    MakeReservation, ObservedPosition, ReservationDto, ReservationOffer, RoomAvailabilityDto,
    RoomDto, SearchForAccommodation,
};
use uuid::Uuid;

use crate::{ClientResult, HttpClient, NetworkHttpClient};

/// Hotel API over any [`HttpClient`] transport
#[derive(Debug, Clone)]
pub struct HotelApi<C: HttpClient = NetworkHttpClient> {
    http: C,
}

impl<C: HttpClient> HotelApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn observed_position(&self) -> Option<ObservedPosition> {
        self.http.observed_position()
    }

    /// `GET /api/dummy`
    pub async fn dummy(&self) -> ClientResult<Vec<String>> {
        self.http.get("/api/dummy").await
    }

    /// `POST /api/search-for-accommodation`
    pub async fn search_for_accommodation(
        &self,
        search: &SearchForAccommodation,
    ) -> ClientResult<ReservationOffer> {
        tracing::debug!(
            reservation_id = %search.reservation_id,
            start = %search.start_date,
            end = %search.end_date,
            "Searching for accommodation"
        );
        self.http.post("/api/search-for-accommodation", search).await
    }

    /// `POST /api/make-reservation`
    ///
    /// The confirmation differs between backend versions, so it is returned
    /// as raw JSON.
    pub async fn make_reservation(&self, command: &MakeReservation) -> ClientResult<serde_json::Value> {
        tracing::debug!(reservation_id = %command.reservation_id, "Making reservation");
        self.http.post("/api/make-reservation", command).await
    }

    /// `GET /api/reservations`
    pub async fn reservations(&self) -> ClientResult<Vec<ReservationDto>> {
        self.http.get("/api/reservations").await
    }

    /// `GET /api/reservations/:id`
    pub async fn reservation(&self, id: Uuid) -> ClientResult<ReservationDto> {
        self.http.get(&format!("/api/reservations/{id}")).await
    }

    /// `GET /api/rooms`
    pub async fn rooms(&self) -> ClientResult<Vec<RoomDto>> {
        self.http.get("/api/rooms").await
    }

    /// `GET /api/availability/:start/:end`
    pub async fn availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<RoomAvailabilityDto>> {
        self.http
            .get(&format!(
                "/api/availability/{}/{}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ))
            .await
    }
}
