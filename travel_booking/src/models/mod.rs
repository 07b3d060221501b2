// travel_booking/src/models/mod.rs

//! Flight offers and fare computation.

pub mod fare;
pub mod flight;

pub use fare::FareSummary;
pub use flight::{sample_offer, Airport, FlightOffer, Schedule};
