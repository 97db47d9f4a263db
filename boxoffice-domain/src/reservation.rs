use boxoffice_shared::Masked;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A permanent seat allocation, created only from a still-valid hold.
/// Immutable once built; retained for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub confirmation_code: String,
    pub seats: Vec<u32>,
    pub customer: Masked<String>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        confirmation_code: String,
        seats: Vec<u32>,
        customer: Masked<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            confirmation_code,
            seats,
            customer,
            created_at,
        }
    }
}
