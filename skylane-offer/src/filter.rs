//! Filter engine and result-set metadata. Filtering is stable (input order
//! preserved) and conjunctive; the default filter is the identity transform.

use serde::Serialize;
use skylane_core::metrics::{flight_price, primary_airline, total_stops};
use skylane_core::models::{FlightFilters, FlightOffer};

/// Airline codes and price bounds derived from a result set, used to build
/// the filter UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightMetadata {
    pub available_airlines: Vec<String>,
    pub price_range: PriceBounds,
}

/// Integer display bounds, rounded outward so no real price falls outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// Applies the filter clauses to a result set. Clauses are ANDed; each keeps
/// the surviving offers in their original order.
pub fn filter_flights(flights: &[FlightOffer], filters: &FlightFilters) -> Vec<FlightOffer> {
    let mut filtered: Vec<FlightOffer> = flights.to_vec();

    if let Some(stops) = filters.stops {
        if stops == 2 {
            // 2 means "2 or more"
            filtered.retain(|offer| total_stops(offer) >= 2);
        } else {
            filtered.retain(|offer| total_stops(offer) == stops);
        }
    }

    // Price bounds are inclusive on both ends
    if let Some(min) = filters.price_range.min {
        filtered.retain(|offer| flight_price(offer) >= min);
    }
    if let Some(max) = filters.price_range.max {
        filtered.retain(|offer| flight_price(offer) <= max);
    }

    if !filters.airlines.is_empty() {
        filtered.retain(|offer| {
            let airline = primary_airline(offer);
            filters.airlines.iter().any(|code| code == airline)
        });
    }

    filtered
}

/// Scans a result set for the airlines present and the outward-rounded price
/// bounds. Empty input yields empty airlines and a zero range.
pub fn calculate_flight_metadata(flights: &[FlightOffer]) -> FlightMetadata {
    if flights.is_empty() {
        return FlightMetadata {
            available_airlines: Vec::new(),
            price_range: PriceBounds { min: 0.0, max: 0.0 },
        };
    }

    let mut airlines: Vec<String> = Vec::new();
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;

    for offer in flights {
        let airline = primary_airline(offer);
        if !airline.is_empty() && !airlines.iter().any(|existing| existing == airline) {
            airlines.push(airline.to_string());
        }
        let price = flight_price(offer);
        min_price = min_price.min(price);
        max_price = max_price.max(price);
    }

    airlines.sort();

    FlightMetadata {
        available_airlines: airlines,
        price_range: PriceBounds {
            min: min_price.floor(),
            max: max_price.ceil(),
        },
    }
}

/// Number of active filter constraints, for the "N filters applied" badge:
/// one for a stops constraint, one when either price bound is set, plus one
/// per selected airline.
pub fn active_filter_count(filters: &FlightFilters) -> usize {
    let mut count = 0;
    if filters.stops.is_some() {
        count += 1;
    }
    if filters.price_range.min.is_some() || filters.price_range.max.is_some() {
        count += 1;
    }
    count + filters.airlines.len()
}
