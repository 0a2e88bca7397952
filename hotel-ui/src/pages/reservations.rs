use std::fmt;

use shared::ReservationDto;

use super::{format_time, or_dash, write_table};

pub fn render_list(f: &mut fmt::Formatter<'_>, reservations: &[ReservationDto]) -> fmt::Result {
    if reservations.is_empty() {
        return writeln!(f, "No reservations yet.");
    }

    let rows: Vec<Vec<String>> = reservations
        .iter()
        .map(|r| {
            vec![
                or_dash(r.status.as_deref()).to_string(),
                format_time(r.check_in_time.as_ref()),
                format_time(r.check_out_time.as_ref()),
                or_dash(r.name.as_deref()).to_string(),
                or_dash(r.email.as_deref()).to_string(),
                format!("/reservations/{}", r.reservation_id),
            ]
        })
        .collect();

    write_table(
        f,
        &["Status", "Check-In", "Check-Out", "Guest", "E-mail", "Details"],
        &rows,
    )
}

pub fn render_detail(f: &mut fmt::Formatter<'_>, reservation: &ReservationDto) -> fmt::Result {
    writeln!(f, "Status:    {}", or_dash(reservation.status.as_deref()))?;
    writeln!(f, "Check-In:  {}", format_time(reservation.check_in_time.as_ref()))?;
    writeln!(f, "Check-Out: {}", format_time(reservation.check_out_time.as_ref()))?;
    writeln!(f)?;
    writeln!(f, "### Guest Details")?;
    writeln!(f, "Name:  {}", or_dash(reservation.name.as_deref()))?;
    writeln!(f, "Email: {}", or_dash(reservation.email.as_deref()))
}
