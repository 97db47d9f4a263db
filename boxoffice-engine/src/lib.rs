pub mod error;
pub mod handle;
pub mod idgen;
pub mod service;
pub mod venue;

pub use error::TicketError;
pub use handle::SharedTicketService;
pub use idgen::IdGenerator;
pub use service::TicketService;
pub use venue::Venue;
