//! Serpkit - Google Finance and Google Flights lookups over SerpAPI
//!
//! A set of tools that an agent runtime (or the bundled CLI) can call by name.
//! Finance tools return the raw API body inside a uniform [`envelope::ResponseEnvelope`];
//! the flight tool flattens itineraries into [`flights::FlightRecord`]s.

pub mod envelope;
pub mod error;
pub mod flights;
pub mod gateway;
pub mod query;
pub mod tools;
pub mod vocab;

pub use error::{Result, SerpkitError};
