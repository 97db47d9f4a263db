pub mod hold;
pub mod reservation;
pub mod seat;

pub use hold::SeatHold;
pub use reservation::Reservation;
pub use seat::SeatChart;
