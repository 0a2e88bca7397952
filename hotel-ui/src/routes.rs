//! Route table of the hotel client

use std::sync::Arc;

use chrono::NaiveDate;
use hotel_client::{ClientError, HotelApi, HttpClient};
use uuid::Uuid;

use crate::forms::DATE_FORMAT;
use crate::pages::Page;
use crate::router::{PatternError, Route, RouteContext, RouteError, Router};

const UUID_PATTERN: &str =
    r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";
const DATE_PATTERN: &str = r"\d{4}-\d{2}-\d{2}";

impl From<ClientError> for RouteError {
    fn from(error: ClientError) -> Self {
        let status = error.status().unwrap_or(500);
        RouteError::failed(status, error.to_string())
    }
}

pub fn routes<C: HttpClient + 'static>(api: Arc<HotelApi<C>>) -> Result<Vec<Route<Page>>, PatternError> {
    let reservations_api = api.clone();
    let reservation_api = api.clone();
    let rooms_api = api.clone();
    let availability_api = api;

    Ok(vec![
        Route::page("/", |_| Page::Booking)?,
        Route::new("/reservations", move |_| {
            reservations_page(reservations_api.clone())
        })?,
        Route::new(&format!("/reservations/:id({UUID_PATTERN})"), move |context| {
            reservation_page(reservation_api.clone(), context)
        })?,
        Route::new("/rooms", move |_| rooms_page(rooms_api.clone()))?,
        Route::new(
            &format!("/availability/:start({DATE_PATTERN})/:end({DATE_PATTERN})"),
            move |context| availability_page(availability_api.clone(), context),
        )?,
        Route::page("/admin", |_| Page::Admin)?,
        Route::page("/error", |context| {
            Page::Error(context.error.unwrap_or(RouteError::NotFound))
        })?,
    ])
}

pub fn router<C: HttpClient + 'static>(api: Arc<HotelApi<C>>) -> Result<Router<Page>, PatternError> {
    Ok(Router::new(routes(api)?))
}

async fn reservations_page<C: HttpClient>(api: Arc<HotelApi<C>>) -> Result<Option<Page>, RouteError> {
    let reservations = api.reservations().await?;
    Ok(Some(Page::Reservations(reservations)))
}

async fn reservation_page<C: HttpClient>(
    api: Arc<HotelApi<C>>,
    context: RouteContext,
) -> Result<Option<Page>, RouteError> {
    let Some(id) = context.param("id").and_then(|id| Uuid::parse_str(id).ok()) else {
        return Ok(None);
    };
    let reservation = api.reservation(id).await?;
    Ok(Some(Page::Reservation(reservation)))
}

async fn rooms_page<C: HttpClient>(api: Arc<HotelApi<C>>) -> Result<Option<Page>, RouteError> {
    let rooms = api.rooms().await?;
    Ok(Some(Page::Rooms(rooms)))
}

async fn availability_page<C: HttpClient>(
    api: Arc<HotelApi<C>>,
    context: RouteContext,
) -> Result<Option<Page>, RouteError> {
    let start = parse_date_param(&context, "start")?;
    let end = parse_date_param(&context, "end")?;
    let rooms = api.availability(start, end).await?;
    Ok(Some(Page::Availability { start, end, rooms }))
}

fn parse_date_param(context: &RouteContext, name: &str) -> Result<NaiveDate, RouteError> {
    let value = context.param(name).unwrap_or_default();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| RouteError::failed(400, format!("Invalid date: {value}")))
}
