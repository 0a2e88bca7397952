//! Pages
//!
//! A [`Page`] is what a route resolves to. Rendering combines it with the
//! current store state and form, so state-driven pages (booking, admin)
//! re-render without another fetch.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use shared::{ReservationDto, RoomAvailabilityDto, RoomDto};

use crate::forms::SearchForm;
use crate::router::RouteError;
use crate::store::AppState;

mod admin;
mod booking;
mod error;
pub mod layout;
mod reservations;
mod rooms;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Booking,
    Reservations(Vec<ReservationDto>),
    Reservation(ReservationDto),
    Rooms(Vec<RoomDto>),
    Availability {
        start: NaiveDate,
        end: NaiveDate,
        rooms: Vec<RoomAvailabilityDto>,
    },
    Admin,
    Error(RouteError),
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Booking => "Booking a Room",
            Self::Reservations(_) => "Reservations",
            Self::Reservation(_) => "Reservation",
            Self::Rooms(_) => "Rooms",
            Self::Availability { .. } => "Availability",
            Self::Admin => "Admin",
            Self::Error(_) => "Error",
        }
    }

    /// Whether the page only depends on local state
    pub fn is_state_driven(&self) -> bool {
        matches!(self, Self::Booking | Self::Admin)
    }

    pub fn view<'a>(&'a self, location: &'a str, state: &'a AppState, form: &'a SearchForm) -> PageView<'a> {
        PageView {
            page: self,
            location,
            state,
            form,
        }
    }
}

/// Page bound to the data it renders from
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    page: &'a Page,
    location: &'a str,
    state: &'a AppState,
    form: &'a SearchForm,
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        layout::header(f, self.location)?;
        match self.page {
            Page::Error(error) => error::render(f, error)?,
            page => {
                layout::subhead(f, page.title())?;
                match page {
                    Page::Booking => booking::render(f, self.state, self.form)?,
                    Page::Reservations(list) => reservations::render_list(f, list)?,
                    Page::Reservation(reservation) => reservations::render_detail(f, reservation)?,
                    Page::Rooms(list) => rooms::render_list(f, list)?,
                    Page::Availability { start, end, rooms } => {
                        rooms::render_availability(f, *start, *end, rooms)?
                    }
                    Page::Admin => admin::render(f, &self.state.dummy)?,
                    Page::Error(_) => {}
                }
            }
        }
        layout::footer(f)
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Left-aligned text table
fn write_table(f: &mut fmt::Formatter<'_>, headers: &[&str], rows: &[Vec<String>]) -> fmt::Result {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let write_row = |f: &mut fmt::Formatter<'_>, cells: &[&str]| -> fmt::Result {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(f, "{}", line.trim_end())
    };

    write_row(f, headers)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(f, &rule.iter().map(String::as_str).collect::<Vec<_>>())?;
    for row in rows {
        write_row(f, &row.iter().map(String::as_str).collect::<Vec<_>>())?;
    }
    Ok(())
}
