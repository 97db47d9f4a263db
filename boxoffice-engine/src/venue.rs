use boxoffice_domain::{Reservation, SeatChart, SeatHold};
use boxoffice_shared::VenueConfig;
use std::collections::{HashMap, HashSet};

/// Live state for one venue: the immutable seat chart plus active holds,
/// expired hold IDs, and confirmed reservations. Invariant maintained by
/// the service layer: a seat number appears in at most one active hold or
/// reservation at any instant.
pub struct Venue {
    chart: SeatChart,
    holds: HashMap<u32, SeatHold>,
    expired_hold_ids: HashSet<u32>,
    reservations: Vec<Reservation>,
    config: VenueConfig,
}

impl Venue {
    pub fn new(config: VenueConfig) -> Self {
        Self {
            chart: SeatChart::new(config.capacity),
            holds: HashMap::new(),
            expired_hold_ids: HashSet::new(),
            reservations: Vec::new(),
            config,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    pub fn chart(&self) -> &SeatChart {
        &self.chart
    }

    pub fn config(&self) -> &VenueConfig {
        &self.config
    }

    pub fn add_hold(&mut self, hold: SeatHold) {
        self.holds.insert(hold.id, hold);
    }

    pub fn remove_hold(&mut self, hold_id: u32) -> Option<SeatHold> {
        self.holds.remove(&hold_id)
    }

    /// Records a hold ID as expired. Idempotent.
    pub fn mark_expired(&mut self, hold_id: u32) {
        self.expired_hold_ids.insert(hold_id);
    }

    pub fn find_hold(&self, hold_id: u32) -> Option<&SeatHold> {
        self.holds.get(&hold_id)
    }

    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    pub fn holds(&self) -> impl Iterator<Item = &SeatHold> {
        self.holds.values()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn expired_hold_ids(&self) -> &HashSet<u32> {
        &self.expired_hold_ids
    }

    pub fn held_seat_numbers(&self) -> HashSet<u32> {
        self.holds
            .values()
            .flat_map(|h| h.seats.iter().copied())
            .collect()
    }

    pub fn reserved_seat_numbers(&self) -> HashSet<u32> {
        self.reservations
            .iter()
            .flat_map(|r| r.seats.iter().copied())
            .collect()
    }

    /// Seats present in the chart but in no active hold and no reservation,
    /// ascending.
    pub fn free_seat_numbers(&self) -> Vec<u32> {
        let held = self.held_seat_numbers();
        let reserved = self.reserved_seat_numbers();
        self.chart
            .iter()
            .filter(|n| !held.contains(n) && !reserved.contains(n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn venue() -> Venue {
        Venue::new(VenueConfig {
            capacity: 10,
            ..VenueConfig::default()
        })
    }

    #[test]
    fn fresh_venue_has_all_seats_free() {
        let v = venue();
        assert_eq!(v.free_seat_numbers(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn held_and_reserved_seats_are_not_free() {
        let mut v = venue();
        v.add_hold(SeatHold::new(123456, vec![1, 2], "someemail", Utc::now()));
        v.add_reservation(Reservation::new(
            "A1b2C3d4".to_string(),
            vec![3, 4],
            "someemail".into(),
            Utc::now(),
        ));
        assert_eq!(v.free_seat_numbers(), vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn removing_a_hold_returns_it_and_frees_its_seats() {
        let mut v = venue();
        v.add_hold(SeatHold::new(123456, vec![1, 2], "someemail", Utc::now()));
        let removed = v.remove_hold(123456).unwrap();
        assert_eq!(removed.seats, vec![1, 2]);
        assert!(v.remove_hold(123456).is_none());
        assert_eq!(v.free_seat_numbers().len(), 10);
    }

    #[test]
    fn mark_expired_is_idempotent() {
        let mut v = venue();
        v.mark_expired(123456);
        v.mark_expired(123456);
        assert_eq!(v.expired_hold_ids().len(), 1);
    }

    #[test]
    fn find_hold_looks_up_by_id() {
        let mut v = venue();
        v.add_hold(SeatHold::new(123456, vec![1], "someemail", Utc::now()));
        assert!(v.find_hold(123456).is_some());
        assert!(v.find_hold(654321).is_none());
    }
}
