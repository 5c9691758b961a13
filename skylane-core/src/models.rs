use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use skylane_shared::dictionaries::ApiDictionaries;

/// A priced, bookable flight itinerary (or pair of itineraries for round
/// trips) as returned by the upstream offers API. Offers are immutable once
/// they pass screening; every pipeline stage returns new values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    #[serde(default)]
    pub one_way: Option<bool>,
    #[serde(default)]
    pub number_of_bookable_seats: Option<i32>,
    /// 1-2 entries, first is always the outbound direction.
    pub itineraries: Vec<Itinerary>,
    pub price: OfferPrice,
    #[serde(default)]
    pub pricing_options: Option<PricingOptions>,
    #[serde(default)]
    pub validating_airline_codes: Vec<String>,
    /// One entry per traveler.
    #[serde(default)]
    pub traveler_pricings: Vec<TravelerPricing>,
}

impl FlightOffer {
    pub fn new(
        id: impl Into<String>,
        itineraries: Vec<Itinerary>,
        total: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            one_way: None,
            number_of_bookable_seats: None,
            itineraries,
            price: OfferPrice {
                currency: currency.into(),
                total: total.into(),
                base: None,
                fees: Vec::new(),
                grand_total: None,
            },
            pricing_options: None,
            validating_airline_codes: Vec::new(),
            traveler_pricings: Vec::new(),
        }
    }
}

/// One direction of travel, composed of one or more segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// ISO-8601-like duration string (`PT5H30M`, `PT2H`, `PT45M`).
    pub duration: String,
    pub segments: Vec<Segment>,
}

impl Itinerary {
    pub fn new(duration: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            duration: duration.into(),
            segments,
        }
    }
}

/// A single flight leg between two airports on one aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub carrier_code: String,
    #[serde(default)]
    pub number: Option<String>,
    pub aircraft: Aircraft,
    #[serde(default)]
    pub operating: Option<OperatingCarrier>,
    pub duration: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number_of_stops: Option<u32>,
}

impl Segment {
    pub fn new(
        departure: FlightEndpoint,
        arrival: FlightEndpoint,
        carrier_code: impl Into<String>,
        aircraft_code: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            departure,
            arrival,
            carrier_code: carrier_code.into(),
            number: None,
            aircraft: Aircraft {
                code: aircraft_code.into(),
            },
            operating: None,
            duration: duration.into(),
            id: None,
            number_of_stops: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEndpoint {
    pub iata_code: String,
    pub at: NaiveDateTime,
}

impl FlightEndpoint {
    pub fn new(iata_code: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            iata_code: iata_code.into(),
            at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingCarrier {
    pub carrier_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    pub currency: String,
    /// Decimal string; must parse to a non-negative finite number to pass
    /// screening.
    pub total: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    #[serde(default)]
    pub grand_total: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    pub amount: String,
    #[serde(rename = "type")]
    pub fee_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOptions {
    #[serde(default)]
    pub fare_type: Vec<String>,
    #[serde(default)]
    pub included_checked_bags_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerPricing {
    pub traveler_id: String,
    pub fare_option: String,
    pub traveler_type: String,
    pub price: TravelerPrice,
    #[serde(default)]
    pub fare_details_by_segment: Vec<FareDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerPrice {
    pub currency: String,
    pub total: String,
    #[serde(default)]
    pub base: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDetail {
    pub segment_id: String,
    pub cabin: String,
    #[serde(default)]
    pub fare_basis: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub included_checked_bags: Option<IncludedBags>,
    #[serde(default)]
    pub included_cabin_bags: Option<IncludedBags>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedBags {
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub weight_unit: Option<String>,
}

/// Caller-owned filter state. The default value applies no constraints, so
/// filtering with it is the identity transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilters {
    /// None = any, 0 = nonstop, 1 = one stop, 2 = two or more.
    pub stops: Option<u32>,
    pub price_range: PriceRangeFilter,
    /// Carrier codes to keep; empty = no airline restriction.
    pub airlines: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Top-level search response envelope from the offers API.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchResponse {
    pub meta: ResponseMeta,
    pub data: Vec<FlightOffer>,
    #[serde(default)]
    pub dictionaries: ApiDictionaries,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMeta {
    pub count: u32,
}
