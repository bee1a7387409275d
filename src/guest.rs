// Guests and the reservations they hold.

use std::rc::Rc;

use crate::reservation::Reservation;

/// A registered guest. Reservations are shared with the registry's flat
/// list via `Rc`; the guest's sequence keeps insertion order.
#[derive(Debug, Clone)]
pub struct Guest {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: u64,
    pub reservations: Vec<Rc<Reservation>>,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: u64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: email.into(),
            phone,
            reservations: Vec::new(),
        }
    }

    /// Appends with no uniqueness check; the same reservation can be
    /// attached twice by misuse.
    pub fn add_reservation(&mut self, reservation: Rc<Reservation>) {
        self.reservations.push(reservation);
    }
}
