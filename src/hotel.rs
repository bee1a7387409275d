// Hotels and the rooms they own.

use serde::{Deserialize, Serialize};

/// Category of a room. Carries no business logic beyond being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStyle {
    Twin,
    Queen,
    King,
}

/// A bookable unit. `available` starts true and is flipped to false by
/// `Reservation` construction; nothing flips it back (there is no checkout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub number: u32,
    pub style: RoomStyle,
    pub available: bool,
    pub nightly_price: f64,
}

impl Room {
    pub fn new(number: u32, style: RoomStyle, nightly_price: f64) -> Self {
        Self {
            number,
            style,
            available: true,
            nightly_price,
        }
    }
}

/// A hotel exclusively owns its rooms. Room numbers are not guaranteed
/// unique across hotels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub rooms: Vec<Room>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms,
        }
    }

    /// Rooms with `available == true`, in storage order.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|r| r.available)
    }

    /// Complement of `available_rooms`, in storage order.
    pub fn booked_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|r| !r.available)
    }
}
