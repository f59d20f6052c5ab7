//! Google Flights result shaping

mod parser;

pub use parser::{FlightRecord, parse_flights};
