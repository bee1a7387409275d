// Reservations and the seeded identifier sequence they draw from.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::hotel::Room;
use crate::registry::RoomKey;

/// Base value for reservation numbering. The first reservation in a run
/// gets `RESERVATION_ID_SEED + 1`.
pub const RESERVATION_ID_SEED: u32 = 1_234_567_890;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReservationId(pub u32);

/// Strictly increasing identifier source. An explicit value owned by the
/// `Registry` rather than a process-global static, so tests can pin the seed.
#[derive(Debug, Clone)]
pub struct IdSequence {
    last: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::seeded(RESERVATION_ID_SEED)
    }

    pub fn seeded(seed: u32) -> Self {
        Self { last: seed }
    }

    pub fn next_id(&mut self) -> ReservationId {
        self.last += 1;
        ReservationId(self.last)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A booked stay. Immutable once constructed; never cancelled or removed.
///
/// The room is referenced by key, not owned. The nightly price is read once
/// at construction — rooms never change price, so the derived total matches
/// what reading through the reference would give.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub room: RoomKey,
    pub nightly_price: f64,
}

impl Reservation {
    /// Construction claims the room: `room.available` is set false
    /// unconditionally, even if it was already false. Start/end are stored
    /// verbatim; nothing checks that `end > start`.
    pub fn new(
        ids: &mut IdSequence,
        start: NaiveDateTime,
        end: NaiveDateTime,
        key: RoomKey,
        room: &mut Room,
    ) -> Self {
        room.available = false;
        Self {
            id: ids.next_id(),
            start,
            end,
            room: key,
            nightly_price: room.nightly_price,
        }
    }

    /// Whole days between end and start, truncated toward zero. Negative or
    /// zero when `end <= start`.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Duration times the nightly price. Negative or zero when the duration
    /// is non-positive.
    pub fn total(&self) -> f64 {
        self.duration_days() as f64 * self.nightly_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::RoomStyle;
    use crate::registry::HotelKey;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn key() -> RoomKey {
        HotelKey(0).room(0)
    }

    #[test]
    fn test_ids_start_above_seed_and_increase() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), ReservationId(RESERVATION_ID_SEED + 1));
        assert_eq!(ids.next_id(), ReservationId(RESERVATION_ID_SEED + 2));
        assert_eq!(ids.next_id(), ReservationId(RESERVATION_ID_SEED + 3));
    }

    #[test]
    fn test_seeded_sequence_is_deterministic() {
        let mut ids = IdSequence::seeded(100);
        assert_eq!(ids.next_id(), ReservationId(101));
        assert_eq!(ids.next_id(), ReservationId(102));
    }

    #[test]
    fn test_construction_claims_the_room() {
        let mut ids = IdSequence::seeded(0);
        let mut room = Room::new(101, RoomStyle::Twin, 1500.0);
        assert!(room.available);
        let res = Reservation::new(&mut ids, at(2024, 4, 10), at(2024, 4, 16), key(), &mut room);
        assert!(!room.available);
        assert_eq!(res.nightly_price, 1500.0);
    }

    #[test]
    fn test_already_claimed_room_is_flipped_again_without_complaint() {
        // Documented gap: no guard against booking an unavailable room.
        let mut ids = IdSequence::seeded(0);
        let mut room = Room::new(101, RoomStyle::Twin, 1500.0);
        let first = Reservation::new(&mut ids, at(2024, 4, 10), at(2024, 4, 16), key(), &mut room);
        let second = Reservation::new(&mut ids, at(2024, 4, 12), at(2024, 4, 14), key(), &mut room);
        assert!(!room.available);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_duration_is_whole_days() {
        let mut ids = IdSequence::seeded(0);
        let mut room = Room::new(101, RoomStyle::Twin, 1500.0);
        let res = Reservation::new(&mut ids, at(2024, 4, 10), at(2024, 4, 16), key(), &mut room);
        assert_eq!(res.duration_days(), 6);
        assert_eq!(res.total(), 9000.0);
    }

    #[test]
    fn test_partial_days_truncate() {
        let mut ids = IdSequence::seeded(0);
        let mut room = Room::new(102, RoomStyle::King, 3000.0);
        let start = at(2024, 4, 10);
        let end = NaiveDate::from_ymd_opt(2024, 4, 16)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let res = Reservation::new(&mut ids, start, end, key(), &mut room);
        assert_eq!(res.duration_days(), 6);
    }

    #[test]
    fn test_reversed_range_yields_negative_total() {
        // Documented gap: end < start is stored verbatim, no validation.
        let mut ids = IdSequence::seeded(0);
        let mut room = Room::new(101, RoomStyle::Queen, 2000.0);
        let res = Reservation::new(&mut ids, at(2024, 4, 16), at(2024, 4, 10), key(), &mut room);
        assert_eq!(res.duration_days(), -6);
        assert_eq!(res.total(), -12000.0);
    }

    #[test]
    fn test_reservation_serializes_with_id_and_dates() {
        let mut ids = IdSequence::new();
        let mut room = Room::new(101, RoomStyle::Twin, 1500.0);
        let res = Reservation::new(&mut ids, at(2024, 4, 10), at(2024, 4, 16), key(), &mut room);
        let value: serde_json::Value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["id"], RESERVATION_ID_SEED + 1);
        assert_eq!(value["nightly_price"], 1500.0);
        assert!(value["start"].as_str().unwrap().starts_with("2024-04-10"));
    }
}
