use std::fmt;

use chrono::NaiveDate;
use shared::{RoomAvailabilityDto, RoomDto};

use super::write_table;

pub fn render_list(f: &mut fmt::Formatter<'_>, rooms: &[RoomDto]) -> fmt::Result {
    if rooms.is_empty() {
        return writeln!(f, "No rooms.");
    }

    // server order
    let rows: Vec<Vec<String>> = rooms
        .iter()
        .map(|room| vec![room.room_number.clone(), room.room_id.to_string()])
        .collect();

    write_table(f, &["Room", "Id"], &rows)
}

pub fn render_availability(
    f: &mut fmt::Formatter<'_>,
    start: NaiveDate,
    end: NaiveDate,
    rooms: &[RoomAvailabilityDto],
) -> fmt::Result {
    writeln!(f, "From {start} to {end}")?;
    writeln!(f)?;
    if rooms.is_empty() {
        return writeln!(f, "No rooms.");
    }

    for room in rooms {
        let status = if room.available { "available" } else { "occupied" };
        writeln!(f, "Room {:<6} {status}", room.room_number)?;
        for interval in &room.details {
            writeln!(
                f,
                "    {} .. {}  {}",
                interval.start.format("%Y-%m-%d %H:%M"),
                interval.end.format("%Y-%m-%d %H:%M"),
                if interval.occupied { "occupied" } else { "free" }
            )?;
        }
    }
    Ok(())
}
