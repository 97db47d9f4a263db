use crate::error::TicketError;
use crate::service::TicketService;
use crate::venue::Venue;
use boxoffice_domain::SeatHold;
use boxoffice_shared::VenueConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe front for [`TicketService`]. One exclusive lock
/// guards the whole venue state and is held for the full duration of each
/// public operation, so the free-seat computation and the mutation that
/// follows it cannot interleave with another caller's.
#[derive(Clone)]
pub struct SharedTicketService {
    inner: Arc<Mutex<TicketService>>,
}

impl SharedTicketService {
    pub fn new(config: VenueConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TicketService::new(config))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TicketService> {
        // The engine itself never panics mid-mutation, so a poisoned
        // lock still guards consistent state. Recover the guard.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn num_seats_available(&self) -> u32 {
        self.lock().num_seats_available()
    }

    pub fn find_and_hold_seats(
        &self,
        num_seats: u32,
        customer: &str,
    ) -> Result<SeatHold, TicketError> {
        self.lock().find_and_hold_seats(num_seats, customer)
    }

    pub fn reserve_seats(&self, hold_id: u32, customer: &str) -> Result<String, TicketError> {
        self.lock().reserve_seats(hold_id, customer)
    }

    pub fn is_hold_expired(&self, hold_id: u32) -> bool {
        self.lock().is_hold_expired(hold_id)
    }

    pub fn is_valid_hold_id(&self, hold_id: u32) -> bool {
        self.lock().is_valid_hold_id(hold_id)
    }

    /// Runs `f` against the venue state under the lock.
    pub fn with_venue<R>(&self, f: impl FnOnce(&Venue) -> R) -> R {
        f(self.lock().venue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn concurrent_holds_never_share_a_seat() {
        let service = SharedTicketService::new(VenueConfig {
            capacity: 200,
            ..VenueConfig::default()
        });

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    let customer = format!("customer-{}@example.com", i);
                    (0..5)
                        .filter_map(|_| service.find_and_hold_seats(4, &customer).ok())
                        .flat_map(|hold| hold.seats)
                        .collect::<Vec<u32>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for seat in handle.join().unwrap() {
                assert!(seen.insert(seat), "seat {} double-assigned", seat);
            }
        }
        assert_eq!(seen.len(), 160);
        assert_eq!(service.num_seats_available(), 40);
    }

    #[test]
    fn clones_share_the_same_venue() {
        let service = SharedTicketService::new(VenueConfig::default());
        let clone = service.clone();
        let hold = service.find_and_hold_seats(5, "someemail").unwrap();
        assert!(clone.is_valid_hold_id(hold.id));
        assert_eq!(clone.num_seats_available(), 45);
        assert_eq!(clone.with_venue(|v| v.capacity()), 50);
    }
}
