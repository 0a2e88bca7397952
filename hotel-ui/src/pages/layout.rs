//! Site frame shared by every page

use std::fmt;

pub const TITLE: &str = "CQRS Hotel";
pub const TAGLINE: &str = "Example application about CQRS and Event Sourcing";

/// Top-level menu entries (label, location)
pub const MENU: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Reservations", "/reservations"),
    ("Rooms", "/rooms"),
    ("Admin", "/admin"),
];

const RULE_WIDTH: usize = 60;

pub fn header(f: &mut fmt::Formatter<'_>, location: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{TITLE}")?;
    writeln!(f, "{TAGLINE}")?;
    writeln!(f)?;

    let path = location.split(['?', '#']).next().unwrap_or(location);
    let menu = MENU
        .iter()
        .map(|(label, href)| {
            let marker = if is_active(path, href) { '*' } else { ' ' };
            format!("[{marker}] {label} ({href})")
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{menu}")?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

pub fn subhead(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)
}

pub fn footer(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

/// Menu entries stay highlighted on their sub-pages
fn is_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    let href = href.trim_end_matches('/');
    if href.is_empty() {
        return path.is_empty();
    }
    path == href || path.starts_with(&format!("{href}/"))
}
