//! Stock query normalization
//!
//! SerpAPI's `google_finance` engine expects `SYMBOL:EXCHANGE` (`AAPL:NASDAQ`),
//! while people often type `EXCHANGE:SYMBOL` (`NASDAQ:AAPL`).

/// Rewrite `EXCHANGE:SYMBOL` into `SYMBOL:EXCHANGE`.
///
/// A left-hand part that is all uppercase with no digits is taken to be an
/// exchange code and the halves are swapped. Everything else passes through
/// untouched: bare tickers, already-canonical queries, and anything with more
/// than one colon.
pub fn normalize_query(query: &str) -> String {
    let mut parts = query.split(':');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return query.to_string();
    };

    if looks_like_exchange(first) {
        format!("{}:{}", second, first)
    } else {
        query.to_string()
    }
}

fn looks_like_exchange(s: &str) -> bool {
    let has_upper = s.chars().any(char::is_uppercase);
    let has_lower = s.chars().any(char::is_lowercase);
    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    has_upper && !has_lower && !has_digit
}
