//! Pure metric extractors over a single offer. These feed every pipeline
//! stage: filtering, sorting, metadata and price statistics.

use crate::models::FlightOffer;
use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_AND_MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"PT(\d+)H(\d+)M").unwrap());
static HOURS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^PT(\d+)H$").unwrap());
static MINUTES_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^PT(\d+)M$").unwrap());

/// Parses the offer's total price. Returns NaN when the decimal string does
/// not parse; screening rejects such offers before they enter the pipeline,
/// so downstream stages never see NaN.
pub fn flight_price(offer: &FlightOffer) -> f64 {
    offer.price.total.parse::<f64>().unwrap_or(f64::NAN)
}

/// Total number of connections across all itineraries. Each itinerary with N
/// segments contributes N-1 stops.
pub fn total_stops(offer: &FlightOffer) -> u32 {
    offer
        .itineraries
        .iter()
        .map(|itinerary| itinerary.segments.len().saturating_sub(1) as u32)
        .sum()
}

/// Total duration in minutes across all itineraries. Malformed duration
/// strings contribute zero rather than failing the offer.
pub fn total_duration_minutes(offer: &FlightOffer) -> u32 {
    offer
        .itineraries
        .iter()
        .map(|itinerary| parse_duration_to_minutes(&itinerary.duration))
        .sum()
}

/// Parses an ISO-8601-like duration (`PT5H30M`, `PT2H`, `PT45M`) to minutes.
/// Unrecognized strings yield 0.
pub fn parse_duration_to_minutes(duration: &str) -> u32 {
    if let Some(caps) = HOURS_AND_MINUTES.captures(duration) {
        let hours: u32 = caps[1].parse().unwrap_or(0);
        let minutes: u32 = caps[2].parse().unwrap_or(0);
        return hours * 60 + minutes;
    }
    if let Some(caps) = HOURS_ONLY.captures(duration) {
        return caps[1].parse::<u32>().unwrap_or(0) * 60;
    }
    if let Some(caps) = MINUTES_ONLY.captures(duration) {
        return caps[1].parse::<u32>().unwrap_or(0);
    }
    0
}

/// Carrier code of the first segment of the first itinerary; empty when the
/// offer has no segments. Used as the offer's airline classification.
pub fn primary_airline(offer: &FlightOffer) -> &str {
    offer
        .itineraries
        .first()
        .and_then(|itinerary| itinerary.segments.first())
        .map(|segment| segment.carrier_code.as_str())
        .unwrap_or("")
}

/// Arrival airport of every non-final segment across all itineraries, in
/// encounter order, first occurrence kept.
pub fn connection_airports(offer: &FlightOffer) -> Vec<String> {
    let mut connections: Vec<String> = Vec::new();
    for itinerary in &offer.itineraries {
        if itinerary.segments.len() < 2 {
            continue;
        }
        for segment in &itinerary.segments[..itinerary.segments.len() - 1] {
            let code = &segment.arrival.iata_code;
            if !connections.iter().any(|existing| existing == code) {
                connections.push(code.clone());
            }
        }
    }
    connections
}
