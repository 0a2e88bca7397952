//! Global UI state
//!
//! A single store holding the reservation workflow state. Reducers are pure
//! functions of `(state, action)`; the store applies them and publishes the
//! new state to subscribers.

use shared::ReservationOffer;
use tokio::sync::watch;
use uuid::Uuid;

const NAMESPACE: &str = "cqrs-hotel/";

/// State change requests
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ReservationOfferReceived(ReservationOffer),
    /// Raw confirmation returned by the server
    ReservationMade(serde_json::Value),
    DummyDataLoaded(Vec<String>),
}

impl Action {
    pub fn name(&self) -> String {
        let name = match self {
            Self::ReservationOfferReceived(_) => "RESERVATION_OFFER_RECEIVED",
            Self::ReservationMade(_) => "RESERVATION_MADE",
            Self::DummyDataLoaded(_) => "DUMMY_DATA_LOADED",
        };
        format!("{NAMESPACE}{name}")
    }
}

/// Last known state of the booking flow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationState {
    /// Reservation id used for all searches of this session
    pub id: Option<Uuid>,
    pub offer: Option<ReservationOffer>,
    /// Last reservation made
    pub current: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub reservation: ReservationState,
    pub dummy: Vec<String>,
}

pub fn reservation(state: ReservationState, action: &Action) -> ReservationState {
    match action {
        Action::ReservationOfferReceived(offer) => ReservationState {
            id: state.id.or(Some(offer.reservation_id)),
            offer: Some(offer.clone()),
            ..state
        },
        Action::ReservationMade(made) => ReservationState {
            current: Some(made.clone()),
            ..state
        },
        _ => state,
    }
}

pub fn dummy(mut state: Vec<String>, action: &Action) -> Vec<String> {
    if let Action::DummyDataLoaded(data) = action {
        state.extend(data.iter().cloned());
    }
    state
}

/// Root reducer
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        reservation: reservation(state.reservation, action),
        dummy: dummy(state.dummy, action),
    }
}

/// State container
#[derive(Debug)]
pub struct Store {
    tx: watch::Sender<AppState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.tx.borrow().clone()
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(action = %action.name(), "Dispatching action");
        self.tx
            .send_modify(|state| *state = reduce(std::mem::take(state), &action));
    }

    /// Receiver notified after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn offer(id: Uuid, price: Option<&str>) -> ReservationOffer {
        ReservationOffer {
            reservation_id: id,
            start_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            total_price: price.map(str::to_string),
        }
    }

    #[test]
    fn test_action_names_are_namespaced() {
        assert_eq!(
            Action::ReservationMade(json!({})).name(),
            "cqrs-hotel/RESERVATION_MADE"
        );
    }

    #[test]
    fn test_offer_received_sets_id_once() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let state = reservation(
            ReservationState::default(),
            &Action::ReservationOfferReceived(offer(first, Some("EUR 100.00"))),
        );
        assert_eq!(state.id, Some(first));
        assert_eq!(state.offer.as_ref().unwrap().reservation_id, first);

        let state = reservation(
            state,
            &Action::ReservationOfferReceived(offer(second, None)),
        );
        assert_eq!(state.id, Some(first));
        assert_eq!(state.offer.as_ref().unwrap().reservation_id, second);
        assert!(state.offer.as_ref().unwrap().is_sold_out());
    }

    #[test]
    fn test_reservation_made_keeps_offer_and_id() {
        let id = Uuid::new_v4();
        let state = ReservationState {
            id: Some(id),
            offer: Some(offer(id, Some("EUR 100.00"))),
            current: None,
        };

        let state = reservation(state, &Action::ReservationMade(json!({"committedPosition": 3})));
        assert_eq!(state.id, Some(id));
        assert!(state.offer.is_some());
        assert_eq!(state.current, Some(json!({"committedPosition": 3})));
    }

    #[test]
    fn test_dummy_data_appends() {
        let state = dummy(vec!["foo".into()], &Action::DummyDataLoaded(vec!["bar".into()]));
        assert_eq!(state, vec!["foo", "bar"]);

        let state = dummy(state, &Action::ReservationMade(json!(null)));
        assert_eq!(state, vec!["foo", "bar"]);
    }

    #[tokio::test]
    async fn test_store_notifies_subscribers() {
        let store = Store::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.dispatch(Action::DummyDataLoaded(vec!["foo".into()]));

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().dummy, vec!["foo"]);
        assert_eq!(store.state().dummy, vec!["foo"]);
    }
}
