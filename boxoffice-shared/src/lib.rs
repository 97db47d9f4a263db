pub mod config;
pub mod events;
pub mod input;
pub mod pii;

pub use config::{Config, Messages, VenueConfig};
pub use pii::Masked;
