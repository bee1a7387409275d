// Hotel reservation bookkeeping: hotels that own rooms, guests holding
// shared reservations, receptionists who book on a guest's behalf, and a
// registry coordinating a single run. In-memory and single-threaded; the
// only interface beyond the API is the console reporting in `display`.

pub mod display;
pub mod guest;
pub mod hotel;
pub mod receptionist;
pub mod registry;
pub mod reservation;

// Re-export key types for convenience
pub use guest::Guest;
pub use hotel::{Hotel, Room, RoomStyle};
pub use receptionist::Receptionist;
pub use registry::{GuestKey, HotelKey, ReceptionistKey, Registry, RegistryError, RoomKey};
pub use reservation::{IdSequence, Reservation, ReservationId, RESERVATION_ID_SEED};
