use crate::idgen::IdGenError;

/// Failures surfaced by the public ticket operations. All variants are
/// recoverable values; the engine never aborts the process.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    /// Covers both oversized requests and requests for zero seats.
    #[error("not enough seats available: requested {requested}, available {available}")]
    NotEnoughSeats { requested: u32, available: u32 },

    /// The ID was never issued, or its hold was already consumed.
    #[error("no active hold found for ID {0}")]
    HoldNotFound(u32),

    #[error("hold {0} has expired")]
    HoldExpired(u32),

    #[error(transparent)]
    IdGeneration(#[from] IdGenError),
}
