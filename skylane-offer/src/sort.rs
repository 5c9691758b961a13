//! Sort engine. All policies are stable sorts: offers with equal keys keep
//! their relative input order, so equal-score offers never visibly swap
//! between recomputations.

use serde::{Deserialize, Serialize};
use skylane_core::metrics::{flight_price, total_duration_minutes};
use skylane_core::models::FlightOffer;
use std::cmp::Ordering;

/// Ranking policy for a result set. The wire names are the legacy ones the
/// search UI has always sent; `price_high` orders cheapest first despite the
/// name, and that behavior is load-bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Balance of price and duration: ascending price-per-minute.
    #[default]
    Best,
    /// Ascending by total price (cheapest first).
    PriceHigh,
    /// Ascending by total duration.
    Fastest,
}

/// Returns a new, sorted result set; the input is left untouched.
pub fn sort_flights(flights: &[FlightOffer], sort_by: SortOption) -> Vec<FlightOffer> {
    let mut sorted = flights.to_vec();

    match sort_by {
        SortOption::PriceHigh => {
            sorted.sort_by(|a, b| {
                flight_price(a)
                    .partial_cmp(&flight_price(b))
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortOption::Fastest => {
            sorted.sort_by_key(total_duration_minutes);
        }
        SortOption::Best => {
            sorted.sort_by(|a, b| {
                best_score(a)
                    .partial_cmp(&best_score(b))
                    .unwrap_or(Ordering::Equal)
            });
        }
    }

    sorted
}

/// Price per minute; lower is better. The divisor is floored at one minute so
/// offers with unparseable (zero) durations cannot divide by zero.
fn best_score(offer: &FlightOffer) -> f64 {
    let minutes = total_duration_minutes(offer).max(1);
    flight_price(offer) / minutes as f64
}
