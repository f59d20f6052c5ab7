//! google_flights tool - flight search with flattened itineraries

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use super::args::{FlightSearchArgs, parse_args};
use super::{Tool, ToolContext, ToolResult};
use crate::error::SerpkitError;
use crate::flights::{FlightRecord, parse_flights};
use crate::gateway::{ENGINE_FLIGHTS, SearchParams};
use crate::vocab::TravelClass;

const NO_FLIGHTS: &str = "No flights found.";

/// Flight search outcome. Serialized without a tag, so each variant is its
/// own JSON shape: `best_flights`, `message`, or `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlightSearchResponse {
    Found { best_flights: Vec<FlightRecord> },
    NoResults { message: String },
    Error { error: String },
}

impl FlightSearchResponse {
    fn no_results() -> Self {
        Self::NoResults {
            message: NO_FLIGHTS.to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Error { error: message.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn flights(&self) -> &[FlightRecord] {
        match self {
            Self::Found { best_flights } => best_flights,
            _ => &[],
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }))
    }
}

/// Build the `google_flights` parameter map, resolving the travel class
fn build_params(args: &FlightSearchArgs) -> Result<SearchParams, SerpkitError> {
    let passengers = args.passengers.filter(|p| *p > 0).unwrap_or(1);

    let travel_class = match args.travel_class.as_deref().filter(|c| !c.trim().is_empty()) {
        None => TravelClass::default(),
        Some(c) => TravelClass::resolve(c)?,
    };

    let mut params = SearchParams::for_engine(ENGINE_FLIGHTS);
    params
        .set("departure_id", args.departure_airport.to_uppercase())
        .set("arrival_id", args.arrival_airport.to_uppercase())
        .set("outbound_date", args.departure_date.as_str())
        .set("adults", passengers)
        .set("travel_class", travel_class.tier())
        .set("hl", "en");

    match args.return_date.as_deref().filter(|d| !d.is_empty()) {
        Some(return_date) => {
            params.set("return_date", return_date).set("type", "1");
        }
        None => {
            params.set("type", "2");
        }
    }

    if let Some(max_price) = args.max_price.filter(|p| *p > 0) {
        params.set("max_price", max_price);
    }
    params.set_opt_str("airline_name", args.airline_name.as_deref());

    Ok(params)
}

/// Search flights and return at most `max_results` flattened itineraries
/// (default taken from the context).
pub async fn google_flights(ctx: &ToolContext, args: FlightSearchArgs) -> FlightSearchResponse {
    let params = match build_params(&args) {
        Ok(params) => params,
        Err(e) => return FlightSearchResponse::error(e.to_string()),
    };
    debug!(
        "google_flights: {} -> {} on {}",
        args.departure_airport, args.arrival_airport, args.departure_date
    );

    let body = match ctx.search(params).await {
        Ok(body) => body,
        Err(SerpkitError::Gateway(e)) => {
            warn!("google_flights: upstream failure: {}", e);
            return FlightSearchResponse::error(format!("SerpAPI error: {}", e));
        }
        Err(e) => return FlightSearchResponse::error(e.to_string()),
    };

    let groups = match body.get("best_flights").and_then(Value::as_array) {
        Some(groups) if !groups.is_empty() => groups,
        _ => return FlightSearchResponse::no_results(),
    };

    // Negative caps behave like zero
    let max_results = args
        .max_results
        .map(|n| n.max(0) as usize)
        .unwrap_or_else(|| ctx.default_max_flight_results());
    match parse_flights(groups, max_results) {
        Ok(records) if records.is_empty() => FlightSearchResponse::no_results(),
        Ok(records) => FlightSearchResponse::Found { best_flights: records },
        Err(e) => FlightSearchResponse::error(format!("Error searching flights: {}", e)),
    }
}

pub struct GoogleFlightsTool;

#[async_trait]
impl Tool for GoogleFlightsTool {
    fn name(&self) -> &'static str {
        "google_flights"
    }

    fn description(&self) -> &'static str {
        "Search for flights using Google Flights and return flattened itinerary details."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "departure_airport": {"type": "string", "description": "IATA code of the departure airport"},
                "arrival_airport": {"type": "string", "description": "IATA code of the arrival airport"},
                "departure_date": {"type": "string", "description": "Departure date, YYYY-MM-DD"},
                "return_date": {"type": "string", "description": "Return date, YYYY-MM-DD (omit for one way)"},
                "airline_name": {"type": "string", "description": "Filter results by airline"},
                "travel_class": {
                    "type": "string",
                    "description": "economy, premium economy, business, or first (default: economy)"
                },
                "max_price": {"type": "integer", "description": "Maximum price in USD"},
                "max_results": {"type": "integer", "minimum": 0, "description": "Maximum itineraries to return"},
                "passengers": {"type": "integer", "description": "Number of adult passengers (default: 1)"}
            },
            "required": ["departure_airport", "arrival_airport", "departure_date"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolResult, eyre::Error> {
        let response = match parse_args::<FlightSearchArgs>(input) {
            Ok(args) => google_flights(ctx, args).await,
            Err(msg) => FlightSearchResponse::error(msg),
        };

        let content = response.to_value();
        Ok(if response.is_error() {
            ToolResult::error(content)
        } else {
            ToolResult::success(content)
        })
    }
}
