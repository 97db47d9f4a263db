use crate::error::TicketError;
use crate::idgen::IdGenerator;
use crate::venue::Venue;
use boxoffice_domain::{Reservation, SeatHold};
use boxoffice_shared::events::{HoldCreatedEvent, HoldExpiredEvent, ReservationConfirmedEvent};
use boxoffice_shared::{Masked, VenueConfig};
use chrono::Utc;

/// Seat-hold and reservation engine for a single venue.
///
/// Every public operation first sweeps expired holds, so the state observed
/// or mutated is always consistent with "now". Methods take `&mut self`,
/// which makes each sweep-read-mutate sequence atomic for a single caller;
/// concurrent callers should go through
/// [`SharedTicketService`](crate::SharedTicketService) instead.
pub struct TicketService {
    venue: Venue,
    idgen: IdGenerator,
}

impl TicketService {
    pub fn new(config: VenueConfig) -> Self {
        Self {
            venue: Venue::new(config),
            idgen: IdGenerator::new(),
        }
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Direct state access for setup code and tests. Mutations through this
    /// bypass the allocation checks, so the caller owns the invariants.
    pub fn venue_mut(&mut self) -> &mut Venue {
        &mut self.venue
    }

    /// Moves every hold older than the configured timeout from the active
    /// set into the expired registry, freeing its seats. A hold whose age
    /// equals the timeout exactly is still valid; only a strictly greater
    /// age expires it. Idempotent.
    pub fn sweep_expired_holds(&mut self) {
        let now = Utc::now();
        let timeout = self.venue.config().hold_timeout_seconds;

        let lapsed: Vec<u32> = self
            .venue
            .holds()
            .filter(|h| h.age_seconds(now) > timeout)
            .map(|h| h.id)
            .collect();

        for hold_id in lapsed {
            if let Some(hold) = self.venue.remove_hold(hold_id) {
                self.venue.mark_expired(hold_id);
                let event = HoldExpiredEvent {
                    hold_id,
                    seats: hold.seats,
                    expired_at: now.timestamp(),
                };
                tracing::info!(hold_id = event.hold_id, seats = ?event.seats, "hold expired, seats reclaimed");
            }
        }
    }

    /// Number of seats neither held nor reserved, after a sweep.
    pub fn num_seats_available(&mut self) -> u32 {
        self.sweep_expired_holds();
        self.venue.free_seat_numbers().len() as u32
    }

    /// Claims the `num_seats` lowest-numbered free seats for `customer` and
    /// returns the resulting hold. All-or-nothing: a request for zero seats
    /// or for more seats than are free creates no hold. The greedy
    /// lowest-numbered-first selection is deterministic, so later holds
    /// receive equal-or-higher seat numbers given equal availability.
    pub fn find_and_hold_seats(
        &mut self,
        num_seats: u32,
        customer: &str,
    ) -> Result<SeatHold, TicketError> {
        self.sweep_expired_holds();

        let free = self.venue.free_seat_numbers();
        let available = free.len() as u32;
        if num_seats == 0 || available < num_seats {
            return Err(TicketError::NotEnoughSeats {
                requested: num_seats,
                available,
            });
        }

        let seats: Vec<u32> = free.into_iter().take(num_seats as usize).collect();
        let hold_id = self
            .idgen
            .next_hold_id(self.venue.config().hold_id_digits)?;

        let hold = SeatHold::new(hold_id, seats, customer, Utc::now());
        let event = HoldCreatedEvent {
            hold_id,
            seats: hold.seats.clone(),
            created_at: hold.created_at.timestamp(),
        };
        tracing::info!(hold_id = event.hold_id, seats = ?event.seats, "seat hold created");

        self.venue.add_hold(hold.clone());
        Ok(hold)
    }

    /// Promotes a hold into a permanent reservation and returns the
    /// confirmation code.
    ///
    /// Once the hold is found and not in the expired registry it is removed
    /// unconditionally, so a hold can be consumed exactly once: if the age
    /// re-check below fails, a later attempt with the same ID reports
    /// not-found. The reservation carries the identity the hold was created
    /// with; `customer` identifies the caller for the audit log only.
    pub fn reserve_seats(&mut self, hold_id: u32, customer: &str) -> Result<String, TicketError> {
        self.sweep_expired_holds();

        tracing::debug!(hold_id, customer = %Masked::from(customer), "reservation requested");

        if self.venue.expired_hold_ids().contains(&hold_id) {
            return Err(TicketError::HoldExpired(hold_id));
        }
        let hold = self
            .venue
            .remove_hold(hold_id)
            .ok_or(TicketError::HoldNotFound(hold_id))?;

        // Re-check against the clock: the hold may have lapsed between the
        // sweep above and this point.
        let now = Utc::now();
        if hold.age_seconds(now) > self.venue.config().hold_timeout_seconds {
            return Err(TicketError::HoldExpired(hold_id));
        }

        let code = self
            .idgen
            .next_confirmation_code(self.venue.config().confirmation_code_length)?;

        let reservation = Reservation::new(code.clone(), hold.seats, hold.customer, now);
        let event = ReservationConfirmedEvent {
            confirmation_code: code.clone(),
            seats: reservation.seats.clone(),
            confirmed_at: now.timestamp(),
        };
        tracing::info!(hold_id, seats = ?event.seats, "reservation confirmed");

        self.venue.add_reservation(reservation);
        Ok(code)
    }

    /// Whether `hold_id` sits in the expired registry, after a sweep.
    pub fn is_hold_expired(&mut self, hold_id: u32) -> bool {
        self.sweep_expired_holds();
        self.venue.expired_hold_ids().contains(&hold_id)
    }

    /// Whether an active hold exists for `hold_id`, after a sweep.
    pub fn is_valid_hold_id(&mut self, hold_id: u32) -> bool {
        self.sweep_expired_holds();
        self.venue.find_hold(hold_id).is_some()
    }
}
