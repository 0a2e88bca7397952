use std::fmt;

use crate::forms::SearchForm;
use crate::store::AppState;

pub fn render(f: &mut fmt::Formatter<'_>, state: &AppState, form: &SearchForm) -> fmt::Result {
    writeln!(f, "Start date: {}{}", form.start_date, field_error(&form.errors.start_date))?;
    writeln!(f, "End date:   {}{}", form.end_date, field_error(&form.errors.end_date))?;
    writeln!(f, "(search [start] [end] to find a room)")?;
    if let Some(error) = &form.errors.form {
        writeln!(f, "!! {error}")?;
    }

    if let Some(offer) = &state.reservation.offer {
        writeln!(f)?;
        writeln!(f, "Check in:  {}", offer.start_date)?;
        writeln!(f, "Check out: {}", offer.end_date)?;
        match offer.total_price.as_deref().filter(|_| !offer.is_sold_out()) {
            Some(price) => {
                writeln!(f, "Cost:      {price}")?;
                writeln!(f, "(reserve [name] [email] to make the reservation)")?;
            }
            None => writeln!(f, "Sold out!")?,
        }
    }

    if let Some(reservation) = &state.reservation.current {
        writeln!(f)?;
        writeln!(f, "Reservation: {reservation}")?;
    }
    Ok(())
}

fn field_error(error: &Option<String>) -> String {
    error
        .as_ref()
        .map(|e| format!("  <- {e}"))
        .unwrap_or_default()
}
