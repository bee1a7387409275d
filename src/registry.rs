// The registry coordinates hotels, guests, receptionists and the flat
// reservation list for a single run. Process-wide state, no teardown.

use std::rc::Rc;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::guest::Guest;
use crate::hotel::{Hotel, Room};
use crate::receptionist::Receptionist;
use crate::reservation::{IdSequence, Reservation, ReservationId};

/// Handle to a hotel registered in a `Registry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HotelKey(pub usize);

impl HotelKey {
    pub fn room(self, index: usize) -> RoomKey {
        RoomKey { hotel: self, index }
    }
}

/// Non-owning handle to a room: the hotel it lives in plus its position in
/// that hotel's room list. Ownership of the `Room` stays with the `Hotel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoomKey {
    pub hotel: HotelKey,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GuestKey(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReceptionistKey(pub usize);

/// Key resolution failures. These exist because handles replace references;
/// there is no business validation behind them — any resolvable room is
/// bookable, whatever its current state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown hotel key {0:?}")]
    UnknownHotel(HotelKey),

    #[error("Unknown room key {0:?}")]
    UnknownRoom(RoomKey),

    #[error("Unknown guest key {0:?}")]
    UnknownGuest(GuestKey),

    #[error("Unknown receptionist key {0:?}")]
    UnknownReceptionist(ReceptionistKey),
}

#[derive(Debug, Default)]
pub struct Registry {
    hotels: Vec<Hotel>,
    guests: Vec<Guest>,
    receptionists: Vec<Receptionist>,
    reservations: Vec<Rc<Reservation>>,
    ids: IdSequence,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry drawing reservation numbers from the given sequence.
    /// Lets tests pin the seed.
    pub fn with_id_sequence(ids: IdSequence) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn add_hotel(&mut self, hotel: Hotel) -> HotelKey {
        info!(hotel = %hotel.name, rooms = hotel.rooms.len(), "hotel added");
        self.hotels.push(hotel);
        HotelKey(self.hotels.len() - 1)
    }

    pub fn register_guest(&mut self, guest: Guest) -> GuestKey {
        info!(guest = %guest.name, "guest registered");
        self.guests.push(guest);
        GuestKey(self.guests.len() - 1)
    }

    pub fn register_receptionist(&mut self, receptionist: Receptionist) -> ReceptionistKey {
        info!(receptionist = %receptionist.name, "receptionist registered");
        self.receptionists.push(receptionist);
        ReceptionistKey(self.receptionists.len() - 1)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotel(&self, key: HotelKey) -> Option<&Hotel> {
        self.hotels.get(key.0)
    }

    pub fn guest(&self, key: GuestKey) -> Option<&Guest> {
        self.guests.get(key.0)
    }

    pub fn receptionist(&self, key: ReceptionistKey) -> Option<&Receptionist> {
        self.receptionists.get(key.0)
    }

    pub fn room(&self, key: RoomKey) -> Option<&Room> {
        self.hotels.get(key.hotel.0)?.rooms.get(key.index)
    }

    /// The flat list: every reservation ever created through this registry,
    /// in creation order, independent of guest or hotel.
    pub fn reservations(&self) -> &[Rc<Reservation>] {
        &self.reservations
    }

    /// Constructs a reservation (id assigned, room claimed) without
    /// registering it anywhere. The caller is responsible for handing it to
    /// `book_via_receptionist`; a reservation constructed here and dropped
    /// still leaves the room unavailable.
    pub fn new_reservation(
        &mut self,
        key: RoomKey,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Reservation, RegistryError> {
        let hotel = self
            .hotels
            .get_mut(key.hotel.0)
            .ok_or(RegistryError::UnknownHotel(key.hotel))?;
        let room = hotel
            .rooms
            .get_mut(key.index)
            .ok_or(RegistryError::UnknownRoom(key))?;
        let reservation = Reservation::new(&mut self.ids, start, end, key, room);
        info!(
            id = reservation.id.0,
            room = room.number,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Books `room` for `guest` and records the reservation in both the flat
    /// list and the guest's sequence.
    ///
    /// `hotel` is taken at face value: nothing checks that `room` belongs to
    /// it, and the room key alone decides which room is claimed.
    pub fn book_direct(
        &mut self,
        hotel: HotelKey,
        room: RoomKey,
        guest: GuestKey,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Rc<Reservation>, RegistryError> {
        if self.guests.get(guest.0).is_none() {
            return Err(RegistryError::UnknownGuest(guest));
        }
        let reservation = Rc::new(self.new_reservation(room, start, end)?);
        info!(
            id = reservation.id.0,
            hotel = hotel.0,
            guest = guest.0,
            "direct booking"
        );
        self.reservations.push(Rc::clone(&reservation));
        self.guests[guest.0].add_reservation(Rc::clone(&reservation));
        Ok(reservation)
    }

    /// Records an already-constructed reservation: the receptionist attaches
    /// it to the guest, then it joins the flat list. The room was claimed
    /// when the reservation was constructed, independently of this call.
    pub fn book_via_receptionist(
        &mut self,
        receptionist: ReceptionistKey,
        guest: GuestKey,
        reservation: Reservation,
    ) -> Result<Rc<Reservation>, RegistryError> {
        let attendant = self
            .receptionists
            .get(receptionist.0)
            .ok_or(RegistryError::UnknownReceptionist(receptionist))?;
        let holder = self
            .guests
            .get_mut(guest.0)
            .ok_or(RegistryError::UnknownGuest(guest))?;
        let reservation = Rc::new(reservation);
        info!(
            id = reservation.id.0,
            receptionist = %attendant.name,
            guest = %holder.name,
            "booking via receptionist"
        );
        attendant.book_for(holder, Rc::clone(&reservation));
        self.reservations.push(Rc::clone(&reservation));
        Ok(reservation)
    }

    /// Linear scan of the flat list. Absent result means "not found"; the
    /// display layer renders the message.
    pub fn find_reservation(&self, id: ReservationId) -> Option<&Rc<Reservation>> {
        self.reservations.iter().find(|r| r.id == id)
    }
}
