//! Flattening of Google Flights itinerary groups
//!
//! An itinerary group (one entry of `best_flights`) holds a list of legs under
//! `flights` plus group-level price, duration and emissions. Each group becomes
//! one [`FlightRecord`]. Per-leg detail comes from the first leg only; the raw
//! legs are kept in `legs`, so layover detail is still available to callers.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SerpkitError};

#[derive(Debug, Default, Deserialize)]
struct Airport {
    id: Option<String>,
    name: Option<String>,
    time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Leg {
    departure_airport: Option<Airport>,
    arrival_airport: Option<Airport>,
    airline: Option<String>,
    flight_number: Option<String>,
    airplane: Option<String>,
    travel_class: Option<String>,
    duration: Option<i64>,
    legroom: Option<String>,
    overnight: Option<bool>,
    ticket_also_sold_by: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ItineraryGroup {
    flights: Option<Vec<Value>>,
    price: Option<f64>,
    departure_date: Option<String>,
    return_date: Option<String>,
    passenger: Option<u32>,
    total_duration: Option<i64>,
    carbon_emissions: Option<Map<String, Value>>,
}

/// One itinerary, flattened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRecord {
    pub departure_airport_id: Option<String>,
    pub departure_airport_name: Option<String>,
    pub departure_time: Option<String>,

    pub arrival_airport_id: Option<String>,
    pub arrival_airport_name: Option<String>,
    pub arrival_time: Option<String>,

    pub airline: Option<String>,
    pub flight_number: Option<String>,
    pub airplane: Option<String>,
    pub travel_class: Option<String>,

    /// First leg only, minutes
    pub duration: Option<i64>,
    pub legroom: Option<String>,
    pub overnight: Option<bool>,
    pub ticket_also_sold_by: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,

    pub price: Option<f64>,

    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub passenger: Option<u32>,

    /// Whole itinerary, minutes
    pub total_duration: Option<i64>,
    pub carbon_emissions: Option<Map<String, Value>>,
    pub legs: Option<Vec<Value>>,
}

impl FlightRecord {
    fn from_group(group: ItineraryGroup, first_leg: Leg) -> Self {
        let departure = first_leg.departure_airport.unwrap_or_default();
        let arrival = first_leg.arrival_airport.unwrap_or_default();

        // "2025-06-01 08:30" -> "2025-06-01"
        let departure_date = departure
            .time
            .as_deref()
            .and_then(|t| t.split_whitespace().next())
            .map(str::to_string)
            .or(group.departure_date);

        Self {
            departure_airport_id: departure.id,
            departure_airport_name: departure.name,
            departure_time: departure.time,
            arrival_airport_id: arrival.id,
            arrival_airport_name: arrival.name,
            arrival_time: arrival.time,
            airline: first_leg.airline,
            flight_number: first_leg.flight_number,
            airplane: first_leg.airplane,
            travel_class: first_leg.travel_class,
            duration: first_leg.duration,
            legroom: first_leg.legroom,
            overnight: first_leg.overnight,
            ticket_also_sold_by: first_leg.ticket_also_sold_by,
            extensions: first_leg.extensions,
            price: group.price,
            departure_date,
            return_date: group.return_date,
            passenger: group.passenger.or(Some(1)),
            total_duration: group.total_duration,
            carbon_emissions: group.carbon_emissions,
            legs: group.flights,
        }
    }
}

/// Flatten itinerary groups into at most `max_results` records, in input order.
///
/// Groups without legs are dropped and do not count toward the cap.
pub fn parse_flights(groups: &[Value], max_results: usize) -> Result<Vec<FlightRecord>> {
    let mut records = Vec::with_capacity(groups.len().min(max_results));

    for (index, raw) in groups.iter().enumerate() {
        if records.len() >= max_results {
            break;
        }

        let group: ItineraryGroup = serde_json::from_value(raw.clone())
            .map_err(|e| SerpkitError::FlightParse(format!("itinerary {}: {}", index, e)))?;

        let Some(first) = group.flights.as_ref().and_then(|legs| legs.first()) else {
            debug!("parse_flights: skipping itinerary {} with no legs", index);
            continue;
        };

        let leg: Leg = serde_json::from_value(first.clone())
            .map_err(|e| SerpkitError::FlightParse(format!("itinerary {} leg 0: {}", index, e)))?;

        records.push(FlightRecord::from_group(group, leg));
    }

    Ok(records)
}
