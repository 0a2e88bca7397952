use std::fmt;

use crate::router::RouteError;

use super::layout;

pub fn render(f: &mut fmt::Formatter<'_>, error: &RouteError) -> fmt::Result {
    layout::subhead(f, &format!("Error {}: {}", error.status(), error))
}
