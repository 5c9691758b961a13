//! Pipeline-boundary screening. A malformed price is a data-integrity error:
//! letting it through would propagate NaN into sort comparisons and price
//! sums, so offers are checked once here and the rest of the pipeline can
//! assume finite, non-negative prices.

use crate::metrics::flight_price;
use crate::models::FlightOffer;
use crate::{CoreError, CoreResult};
use tracing::warn;

fn has_valid_price(offer: &FlightOffer) -> bool {
    let price = flight_price(offer);
    price.is_finite() && price >= 0.0
}

/// Strict screening: rejects the whole batch when any offer carries a price
/// that does not parse to a non-negative finite number.
pub fn screen_offers(offers: Vec<FlightOffer>) -> CoreResult<Vec<FlightOffer>> {
    for offer in &offers {
        if !has_valid_price(offer) {
            return Err(CoreError::MalformedPrice {
                offer_id: offer.id.clone(),
                total: offer.price.total.clone(),
            });
        }
    }
    Ok(offers)
}

/// Permissive screening: drops offers with malformed prices and keeps the
/// rest. Suited to live API data where one bad record should not blank the
/// whole result set.
pub fn screen_offers_lossy(offers: Vec<FlightOffer>) -> Vec<FlightOffer> {
    offers
        .into_iter()
        .filter(|offer| {
            if has_valid_price(offer) {
                true
            } else {
                warn!(
                    "Dropping offer {} with malformed price '{}'",
                    offer.id, offer.price.total
                );
                false
            }
        })
        .collect()
}
