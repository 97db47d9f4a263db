//! Event payloads describing hold and reservation lifecycle transitions.
//! The engine logs these; the presentation layer may serialize them as-is.

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct HoldCreatedEvent {
    pub hold_id: u32,
    pub seats: Vec<u32>,
    pub created_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct HoldExpiredEvent {
    pub hold_id: u32,
    pub seats: Vec<u32>,
    pub expired_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReservationConfirmedEvent {
    pub confirmation_code: String,
    pub seats: Vec<u32>,
    pub confirmed_at: i64,
}
