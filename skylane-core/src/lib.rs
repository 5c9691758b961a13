pub mod metrics;
pub mod models;
pub mod screen;

pub use models::{FlightFilters, FlightOffer, FlightSearchResponse, Itinerary, Segment};
pub use screen::{screen_offers, screen_offers_lossy};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed price '{total}' on offer {offer_id}")]
    MalformedPrice { offer_id: String, total: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
