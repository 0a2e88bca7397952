// hotel-ui/tests/app.rs
// Application controller flows over a stub transport

mod common;

use common::{StubClient, app};
use hotel_ui::forms::{END_BEFORE_START, SEARCH_FAILED};
use hotel_ui::shell;
use hotel_ui::{AppError, Page, RouteError};
use serde_json::json;

const RESERVATION_ID: &str = "6f1c1f0e-6a61-4f59-9a4b-0d3b0c7c2f11";

fn offer(price: Option<&str>) -> serde_json::Value {
    json!({
        "reservationId": RESERVATION_ID,
        "startDate": "2026-10-20",
        "endDate": "2026-10-22",
        "totalPrice": price,
    })
}

// ========== Navigation ==========

#[tokio::test]
async fn test_navigate_to_reservations() {
    let stub = StubClient::default();
    stub.respond(
        "/api/reservations",
        json!([{
            "reservationId": RESERVATION_ID,
            "checkInTime": "2026-10-20T11:00:00Z",
            "name": "John Doe",
            "email": "john@example.com",
            "status": "reserved",
        }]),
    );
    let mut app = app(&stub);

    let page = app.navigate("/reservations?sort=asc").await;
    assert!(matches!(page, Page::Reservations(list) if list.len() == 1));
    assert_eq!(app.location(), "/reservations?sort=asc");
    assert_eq!(app.pathname(), "/reservations");

    let out = app.render();
    assert!(out.contains("## Reservations"));
    assert!(out.contains("[*] Reservations (/reservations)"));
    assert!(out.contains("John Doe"));
}

#[tokio::test]
async fn test_reservation_detail() {
    let stub = StubClient::default();
    stub.respond(
        &format!("/api/reservations/{RESERVATION_ID}"),
        json!({"reservationId": RESERVATION_ID, "name": "John Doe", "status": "reserved"}),
    );
    let mut app = app(&stub);

    let page = app.navigate(&format!("/reservations/{RESERVATION_ID}")).await;
    assert!(matches!(page, Page::Reservation(r) if r.name.as_deref() == Some("John Doe")));
}

#[tokio::test]
async fn test_malformed_reservation_id_is_not_found() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    let page = app.navigate("/reservations/not-a-uuid").await;
    assert_eq!(page, &Page::Error(RouteError::NotFound));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_failing_fetch_renders_error_page() {
    let stub = StubClient::default();
    stub.fail("/api/rooms", 503, "read model behind");
    let mut app = app(&stub);

    let page = app.navigate("/rooms").await;
    assert!(matches!(page, Page::Error(e) if e.status() == 503));
    assert_eq!(app.location(), "/rooms");
    assert!(app.render().contains("Error 503:"));

    // reload fetches again
    stub.respond("/api/rooms", json!([{"roomId": RESERVATION_ID, "roomNumber": "101"}]));
    let page = app.refresh().await;
    assert!(matches!(page, Page::Rooms(rooms) if rooms[0].room_number == "101"));
    assert_eq!(stub.calls().len(), 2);
}

#[tokio::test]
async fn test_refresh_keeps_query() {
    let stub = StubClient::default();
    stub.respond("/api/rooms", json!([{"roomId": RESERVATION_ID, "roomNumber": "101"}]));
    let mut app = app(&stub);

    app.navigate("/rooms?floor=2").await;
    let page = app.refresh().await;
    assert!(matches!(page, Page::Rooms(_)));
    assert_eq!(app.location(), "/rooms?floor=2");
    assert_eq!(app.pathname(), "/rooms");
    assert!(app.render().contains("[*] Rooms (/rooms)"));
    assert_eq!(stub.calls().len(), 2);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    app.navigate("/no/such/page").await;
    assert!(app.render().contains("Error 404: Not found"));
}

#[tokio::test]
async fn test_availability_route() {
    let stub = StubClient::default();
    stub.respond(
        "/api/availability/2026-10-20/2026-10-22",
        json!([{
            "roomId": RESERVATION_ID,
            "roomNumber": "101",
            "available": false,
            "details": [{
                "start": "2026-10-20T14:00:00Z",
                "end": "2026-10-21T10:00:00Z",
                "occupied": true,
            }],
        }]),
    );
    let mut app = app(&stub);

    let page = app.navigate("/availability/2026-10-20/2026-10-22").await;
    assert!(matches!(page, Page::Availability { rooms, .. } if !rooms[0].available));

    let page = app.navigate("/availability/2026-10-20/2026-13-40").await;
    assert!(matches!(page, Page::Error(e) if e.status() == 400));
}

#[tokio::test]
async fn test_state_driven_refresh_does_not_fetch() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    app.navigate("/admin").await;
    app.refresh().await;
    assert_eq!(app.page(), &Page::Admin);
    assert!(stub.calls().is_empty());
}

// ========== Booking flow ==========

#[tokio::test]
async fn test_search_keeps_reservation_id() {
    let stub = StubClient::default();
    stub.respond("/api/search-for-accommodation", offer(Some("EUR 240.00")));
    let mut app = app(&stub);
    app.navigate("/rooms").await;

    app.search(None, Some("2026-10-22")).await.unwrap();
    assert_eq!(app.page(), &Page::Booking);
    assert_eq!(app.location(), "/");

    let state = app.state();
    assert_eq!(state.reservation.id.unwrap().to_string(), RESERVATION_ID);
    assert!(app.render().contains("Cost:      EUR 240.00"));

    app.search(Some("2026-10-21"), None).await.unwrap();

    let searches: Vec<_> = stub
        .calls()
        .into_iter()
        .filter(|(path, _)| path == "/api/search-for-accommodation")
        .filter_map(|(_, body)| body)
        .collect();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0]["startDate"], "2026-10-20");
    assert_eq!(searches[0]["endDate"], "2026-10-22");
    assert_eq!(searches[1]["reservationId"], RESERVATION_ID);
    assert_eq!(searches[1]["startDate"], "2026-10-21");
}

#[tokio::test]
async fn test_invalid_search_is_not_sent() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    let err = app.search(Some("2026-10-22"), Some("2026-10-21")).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidForm(_)));
    assert_eq!(app.form().errors.end_date.as_deref(), Some(END_BEFORE_START));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_search_failure_sets_form_error() {
    let stub = StubClient::default();
    stub.fail("/api/search-for-accommodation", 500, "boom");
    let mut app = app(&stub);

    let err = app.search(None, None).await.unwrap_err();
    assert!(matches!(err, AppError::SearchFailed(_)));
    assert_eq!(app.form().errors.form.as_deref(), Some(SEARCH_FAILED));
    assert!(app.render().contains(SEARCH_FAILED));
}

#[tokio::test]
async fn test_reserve_without_offer() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    let err = app.make_reservation(None, None).await.unwrap_err();
    assert!(matches!(err, AppError::NoOffer));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_reserve_sold_out() {
    let stub = StubClient::default();
    stub.respond("/api/search-for-accommodation", offer(None));
    let mut app = app(&stub);

    app.search(None, None).await.unwrap();
    assert!(app.render().contains("Sold out!"));

    let err = app.make_reservation(None, None).await.unwrap_err();
    assert!(matches!(err, AppError::SoldOut));
}

#[tokio::test]
async fn test_make_reservation() {
    let stub = StubClient::default();
    stub.respond("/api/search-for-accommodation", offer(Some("EUR 240.00")));
    stub.respond("/api/make-reservation", json!({"committedPosition": 7}));
    let mut app = app(&stub);

    app.search(None, None).await.unwrap();
    app.make_reservation(Some("Jane Roe"), None).await.unwrap();

    let (_, body) = stub.calls().pop().unwrap();
    let body = body.unwrap();
    assert_eq!(body["reservationId"], RESERVATION_ID);
    assert_eq!(body["name"], "Jane Roe");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["totalPrice"], "EUR 240.00");

    assert_eq!(app.state().reservation.current, Some(json!({"committedPosition": 7})));
    assert!(app.render().contains(r#"Reservation: {"committedPosition":7}"#));
}

// ========== Admin ==========

#[tokio::test]
async fn test_load_dummy_data() {
    let stub = StubClient::default();
    stub.respond("/api/dummy", json!(["foo", "bar"]));
    let mut app = app(&stub);
    app.navigate("/admin").await;

    app.load_dummy_data().await.unwrap();
    app.load_dummy_data().await.unwrap();

    assert_eq!(app.state().dummy, vec!["foo", "bar", "foo", "bar"]);
    assert!(app.render().contains("- bar"));
}

#[tokio::test]
async fn test_dummy_failure() {
    let stub = StubClient::default();
    let mut app = app(&stub);

    let err = app.load_dummy_data().await.unwrap_err();
    assert!(matches!(err, AppError::DummyFailed(_)));
    assert!(app.state().dummy.is_empty());
}

// ========== Shell ==========

#[tokio::test]
async fn test_shell_session() {
    let stub = StubClient::default();
    stub.respond("/api/dummy", json!(["foo"]));
    let mut app = app(&stub);

    let input: &[u8] = b"/admin\ndummy\nreserve\nbogus\nquit\nopen /rooms\n";
    let mut output = Vec::new();
    shell::run_with(&mut app, "/", input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("## Booking a Room"));
    assert!(output.contains("- foo"));
    assert!(output.contains("! Nothing to reserve, search first"));
    assert!(output.contains("bogus"));
    // nothing after quit runs
    assert_eq!(app.page(), &Page::Admin);
    assert_eq!(stub.calls().len(), 1);
}
