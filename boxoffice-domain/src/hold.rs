use boxoffice_shared::Masked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed claim on specific seats. Owned by the venue state from
/// creation until it expires or is promoted into a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatHold {
    pub id: u32,
    /// Seat numbers held, ascending and unique within the hold.
    pub seats: Vec<u32>,
    pub customer: Masked<String>,
    pub created_at: DateTime<Utc>,
}

impl SeatHold {
    pub fn new(id: u32, seats: Vec<u32>, customer: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            seats,
            customer: customer.into(),
            created_at,
        }
    }

    /// Whole seconds elapsed since the hold was created.
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds()
    }
}
