//! Static help resource describing the tools and their response envelope

/// URI under which the help text is published
pub const HELP_RESOURCE_URI: &str = "resource://finance/help";

const HELP_TEXT: &str = r#"serpkit - Google Finance and Google Flights tools over SerpAPI

Finance tools return the complete API response without extraction.

Tools:
  1. google_flights(departure_airport, arrival_airport, departure_date,
                    return_date, airline_name, travel_class, max_price,
                    max_results, passengers) - Flattened flight itineraries
  2. get_stock_quote(q, gl, hl) - Complete stock information
  3. get_market_data(trend, gl, hl) - Complete market data
  4. get_graph_data(q, period, gl, hl) - Complete historical data
  5. compare_stocks(q, period, gl, hl) - Complete comparison data
  6. get_financials(q, window, gl, hl) - Complete financial data
  7. get_stock_news(q, category, num, start, gl, hl) - Complete news data
  8. debug_api_response(q, engine, gl, hl) - Raw response from any engine

Finance responses include:
  - tool: Tool type used
  - query: Original query
  - timestamp: Response timestamp
  - success: Boolean success status
  - api_response: Complete raw API response (on success)
  - error: Error message (on failure)
  - engine: Engine used (debug_api_response only)

Flight responses are one of:
  - {"best_flights": [...]}
  - {"message": "No flights found."}
  - {"error": "..."}

Parameters:
  - trend: indexes, most-active, gainers, losers, climate-leaders,
           cryptocurrencies, currencies
  - period: 1d, 5d, 1m, 6m, ytd, 1y, 5y, max (get_graph_data, compare_stocks)
  - window: week, month, 3month, 6month, year (get_financials)
  - category: all, latest, opinion, press_releases (get_stock_news)
  - num: 1-100, default 10 (get_stock_news)
  - travel_class: economy, premium economy, business, first (google_flights)
  - gl, hl: country and language codes, accepted by all finance tools

Set SERP_API_KEY in the environment (or a .env file) for API access.

Examples:
  serpkit call get_stock_quote --args '{"q": "AAPL"}'
  serpkit call get_market_data --args '{"trend": "gainers"}'
  serpkit call google_flights --args '{"departure_airport": "JFK", "arrival_airport": "LAX", "departure_date": "2025-06-01"}'
"#;

/// Help document for the tool set
pub fn help_text() -> &'static str {
    HELP_TEXT
}
