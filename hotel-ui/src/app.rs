//! Application controller
//!
//! Owns the API, the store, the router and the current location. Every user
//! interaction goes through [`App`], which resolves pages and dispatches
//! actions; rendering always reads the latest store state.

use std::sync::Arc;

use hotel_client::{ClientError, HotelApi, HttpClient, NetworkHttpClient};
use shared::{MakeReservation, SearchForAccommodation};
use thiserror::Error;
use uuid::Uuid;

use crate::forms::{FormErrors, SEARCH_FAILED, SearchForm};
use crate::pages::Page;
use crate::router::{PatternError, RouteContext, Router};
use crate::routes;
use crate::store::{Action, AppState, Store};

/// Failures of user-triggered flows
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid search form")]
    InvalidForm(FormErrors),

    #[error("Search failed: {0}")]
    SearchFailed(ClientError),

    #[error("Nothing to reserve, search first")]
    NoOffer,

    #[error("Sold out!")]
    SoldOut,

    #[error("Reservation failed: {0}")]
    Reservation(ClientError),

    #[error("Loading dummy data failed: {0}")]
    DummyFailed(ClientError),
}

pub struct App<C: HttpClient + 'static = NetworkHttpClient> {
    api: Arc<HotelApi<C>>,
    store: Store,
    router: Router<Page>,
    form: SearchForm,
    /// As typed, query included
    location: String,
    pathname: String,
    page: Page,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(api: HotelApi<C>) -> Result<Self, PatternError> {
        let api = Arc::new(api);
        let router = routes::router(api.clone())?;
        Ok(Self {
            api,
            store: Store::new(),
            router,
            form: SearchForm::for_today(),
            location: "/".to_string(),
            pathname: "/".to_string(),
            page: Page::Booking,
        })
    }

    pub fn with_form(mut self, form: SearchForm) -> Self {
        self.form = form;
        self
    }

    pub fn api(&self) -> &HotelApi<C> {
        &self.api
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Resolve `location` and make it the current page
    ///
    /// A failed resolution is resolved again with the error in the context,
    /// which lands on the error page.
    pub async fn navigate(&mut self, location: &str) -> &Page {
        let context = RouteContext::from_location(location);
        self.location = location.trim().to_string();
        self.pathname = context.pathname.clone();

        self.page = match self.router.resolve(context.clone()).await {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(
                    location = %self.location,
                    status = error.status(),
                    error = %error,
                    "Navigation failed"
                );
                self.router
                    .resolve(context.with_error(error.clone()))
                    .await
                    .unwrap_or(Page::Error(error))
            }
        };
        &self.page
    }

    /// Re-render the current page, fetching again unless it is state-driven
    pub async fn refresh(&mut self) -> &Page {
        if self.page.is_state_driven() {
            return &self.page;
        }
        let location = self.location.clone();
        self.navigate(&location).await
    }

    pub fn render(&self) -> String {
        let state = self.store.state();
        self.page.view(&self.pathname, &state, &self.form).to_string()
    }

    /// Validate the form and ask the server for an offer
    pub async fn search(&mut self, start: Option<&str>, end: Option<&str>) -> Result<(), AppError> {
        self.form.fill(start, end);
        self.show_booking().await;

        let (start_date, end_date) = match self.form.validate() {
            Ok(dates) => dates,
            Err(errors) => {
                self.form.errors = errors.clone();
                return Err(AppError::InvalidForm(errors));
            }
        };
        self.form.errors = FormErrors::default();

        let reservation_id = self
            .store
            .state()
            .reservation
            .id
            .unwrap_or_else(Uuid::new_v4);
        let search = SearchForAccommodation {
            reservation_id,
            start_date,
            end_date,
        };

        match self.api.search_for_accommodation(&search).await {
            Ok(offer) => {
                self.store.dispatch(Action::ReservationOfferReceived(offer));
                Ok(())
            }
            Err(e) => {
                tracing::error!(reservation_id = %reservation_id, error = %e, "Search failed");
                self.form.errors.form = Some(SEARCH_FAILED.to_string());
                Err(AppError::SearchFailed(e))
            }
        }
    }

    /// Reserve the current offer
    pub async fn make_reservation(
        &mut self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), AppError> {
        let offer = self.store.state().reservation.offer.ok_or(AppError::NoOffer)?;
        if offer.is_sold_out() {
            return Err(AppError::SoldOut);
        }

        let command = MakeReservation::from_offer(
            &offer,
            name.map(str::to_string),
            email.map(str::to_string),
        );
        let result = self.api.make_reservation(&command).await;
        self.show_booking().await;

        match result {
            Ok(made) => {
                tracing::info!(reservation_id = %command.reservation_id, "Reservation made");
                self.store.dispatch(Action::ReservationMade(made));
                Ok(())
            }
            Err(e) => {
                tracing::error!(reservation_id = %command.reservation_id, error = %e, "Reservation failed");
                Err(AppError::Reservation(e))
            }
        }
    }

    pub async fn load_dummy_data(&mut self) -> Result<(), AppError> {
        match self.api.dummy().await {
            Ok(data) => {
                tracing::debug!(count = data.len(), "Dummy data loaded");
                self.store.dispatch(Action::DummyDataLoaded(data));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Loading dummy data failed");
                Err(AppError::DummyFailed(e))
            }
        }
    }

    async fn show_booking(&mut self) {
        if self.page != Page::Booking {
            self.navigate("/").await;
        }
    }
}
