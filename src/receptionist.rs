// Receptionists: identity plus delegation, no state of their own.

use std::rc::Rc;

use crate::guest::Guest;
use crate::reservation::Reservation;

#[derive(Debug, Clone)]
pub struct Receptionist {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: u64,
}

impl Receptionist {
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
        }
    }

    /// Attaches the reservation to the guest. Pure delegation.
    pub fn book_for(&self, guest: &mut Guest, reservation: Rc<Reservation>) {
        guest.add_reservation(reservation);
    }
}
