// Console rendering. Formatting is a presentation concern kept out of the
// core types; everything here writes to an `io::Write` so callers can point
// it at stdout or at a buffer.

use std::fmt;
use std::io::{self, Write};

use crate::guest::Guest;
use crate::hotel::{Hotel, Room, RoomStyle};
use crate::registry::Registry;
use crate::reservation::{Reservation, ReservationId};

/// `dd/MM/yyyy hh:mm:ss tt`, the format the original reports used.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

impl fmt::Display for RoomStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomStyle::Twin => "Twin Room",
            RoomStyle::Queen => "Queen Room",
            RoomStyle::King => "King Room",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}, Style: {}, Price: {}",
            self.number, self.style, self.nightly_price
        )
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Start Time: {}, End Time: {}, Duration: {}, Total: {}",
            self.id.0,
            self.start.format(TIMESTAMP_FORMAT),
            self.end.format(TIMESTAMP_FORMAT),
            self.duration_days(),
            self.total()
        )
    }
}

/// One line per hotel, insertion order.
pub fn write_hotels<W: Write>(w: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(w, "List of Hotels:")?;
    for hotel in registry.hotels() {
        writeln!(w, "{}, {}", hotel.name, hotel.location)?;
    }
    Ok(())
}

/// Rooms currently open for booking. An empty listing is just the header.
pub fn write_available_rooms<W: Write>(w: &mut W, hotel: &Hotel) -> io::Result<()> {
    writeln!(w, "\n{} - Available Rooms", hotel.name)?;
    for room in hotel.available_rooms() {
        writeln!(w, "{room}")?;
    }
    Ok(())
}

/// Rooms currently held by some reservation.
pub fn write_booked_rooms<W: Write>(w: &mut W, hotel: &Hotel) -> io::Result<()> {
    writeln!(w, "\n{} - Booked Rooms", hotel.name)?;
    for room in hotel.booked_rooms() {
        writeln!(w, "{room}")?;
    }
    Ok(())
}

/// The guest's reservations in insertion order.
pub fn write_guest_reservations<W: Write>(w: &mut W, guest: &Guest) -> io::Result<()> {
    writeln!(w, "\nList of Reservations of {}:", guest.name)?;
    for reservation in &guest.reservations {
        writeln!(w, "{reservation}")?;
    }
    Ok(())
}

/// Renders the reservation with the given id, or the not-found message.
pub fn write_reservation_details<W: Write>(
    w: &mut W,
    registry: &Registry,
    id: ReservationId,
) -> io::Result<()> {
    match registry.find_reservation(id) {
        Some(reservation) => writeln!(w, "{reservation}"),
        None => writeln!(w, "Reservation not found."),
    }
}
