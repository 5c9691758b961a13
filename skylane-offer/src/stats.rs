//! Price statistics and histogram for the price-distribution chart. The
//! engine operates on whatever set it is handed, typically the filtered and
//! sorted result, and never mutates it.

use serde::Serialize;
use skylane_core::metrics::flight_price;
use skylane_core::models::FlightOffer;
use skylane_shared::format::format_currency;

/// Tuning knobs for the statistics engine.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Upper bound on histogram buckets; small result sets get one bucket
    /// per offer instead.
    pub max_buckets: usize,

    /// Fraction of the average price below which an offer counts as a
    /// "great deal".
    pub great_deal_ratio: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            max_buckets: 5,
            great_deal_ratio: 0.8,
        }
    }
}

/// Lowest/average/highest price over the set. All offers in one result set
/// share a currency by construction of the upstream API; the first offer's
/// currency is reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStats {
    pub lowest: f64,
    pub average: f64,
    pub highest: f64,
    pub currency: String,
}

/// First-half vs second-half price comparison of the sequence as passed in.
/// A simple split-trend, not a time-series regression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTrend {
    pub percentage: f64,
    pub is_up: bool,
}

/// Below-average pricing summary. A deal is an offer priced strictly below
/// the set's average; a great deal is strictly below the configured fraction
/// of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealsInfo {
    pub deal_count: usize,
    pub great_deals: usize,
    pub max_savings: f64,
}

/// One histogram bucket. Member offer ids are exposed so the UI layer can
/// implement click-to-scroll from a chart bar to the offer cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket {
    /// Human-readable label, e.g. `"$100.00-$260.00"`.
    pub price_range: String,
    /// Mean price of the bucket's members, or the bucket midpoint if empty.
    pub price: f64,
    pub count: usize,
    pub flight_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStatsReport {
    pub stats: PriceStats,
    pub trend: PriceTrend,
    pub deals: DealsInfo,
    pub histogram: Vec<PriceBucket>,
}

pub struct PriceStatsEngine {
    config: StatsConfig,
}

impl PriceStatsEngine {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, offers: &[FlightOffer]) -> PriceStatsReport {
        let stats = self.summary(offers);
        PriceStatsReport {
            trend: self.trend(offers),
            deals: self.deals(offers),
            histogram: self.histogram(offers, &stats.currency),
            stats,
        }
    }

    fn summary(&self, offers: &[FlightOffer]) -> PriceStats {
        if offers.is_empty() {
            return PriceStats {
                lowest: 0.0,
                average: 0.0,
                highest: 0.0,
                currency: "USD".to_string(),
            };
        }

        let prices: Vec<f64> = offers.iter().map(flight_price).collect();
        let lowest = prices.iter().cloned().fold(f64::INFINITY, f64::min);
        let highest = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let average = prices.iter().sum::<f64>() / prices.len() as f64;

        PriceStats {
            lowest,
            average,
            highest,
            currency: offers[0].price.currency.clone(),
        }
    }

    fn trend(&self, offers: &[FlightOffer]) -> PriceTrend {
        if offers.len() < 2 {
            return PriceTrend {
                percentage: 0.0,
                is_up: true,
            };
        }

        let prices: Vec<f64> = offers.iter().map(flight_price).collect();
        let mid_point = prices.len() / 2;
        let first_half = &prices[..mid_point];
        let second_half = &prices[mid_point..];

        let first_avg = first_half.iter().sum::<f64>() / first_half.len() as f64;
        let second_avg = second_half.iter().sum::<f64>() / second_half.len() as f64;

        let percentage = ((second_avg - first_avg) / first_avg) * 100.0;

        PriceTrend {
            percentage: percentage.abs(),
            is_up: percentage > 0.0,
        }
    }

    fn deals(&self, offers: &[FlightOffer]) -> DealsInfo {
        if offers.is_empty() {
            return DealsInfo {
                deal_count: 0,
                great_deals: 0,
                max_savings: 0.0,
            };
        }

        let prices: Vec<f64> = offers.iter().map(flight_price).collect();
        let average = prices.iter().sum::<f64>() / prices.len() as f64;
        let lowest = prices.iter().cloned().fold(f64::INFINITY, f64::min);

        DealsInfo {
            deal_count: prices.iter().filter(|&&p| p < average).count(),
            great_deals: prices
                .iter()
                .filter(|&&p| p < average * self.config.great_deal_ratio)
                .count(),
            max_savings: average - lowest,
        }
    }

    fn histogram(&self, offers: &[FlightOffer], currency: &str) -> Vec<PriceBucket> {
        if offers.is_empty() {
            return Vec::new();
        }

        let prices: Vec<(f64, &str)> = offers
            .iter()
            .map(|offer| (flight_price(offer), offer.id.as_str()))
            .collect();

        let min_price = prices.iter().map(|(p, _)| *p).fold(f64::INFINITY, f64::min);
        let max_price = prices
            .iter()
            .map(|(p, _)| *p)
            .fold(f64::NEG_INFINITY, f64::max);

        let bucket_count = self.config.max_buckets.min(prices.len()).max(1);
        // Zero width when every offer costs the same; the buckets degenerate
        // to a single price point.
        let bucket_size = (max_price - min_price) / bucket_count as f64;

        let mut buckets = Vec::with_capacity(bucket_count);
        for i in 0..bucket_count {
            let range_start = min_price + i as f64 * bucket_size;
            let range_end = min_price + (i + 1) as f64 * bucket_size;
            let is_last = i == bucket_count - 1;

            // Buckets are [start, end), except the last which is [start, end]
            // so the maximum-priced offer always lands somewhere.
            let members: Vec<&(f64, &str)> = prices
                .iter()
                .filter(|(p, _)| {
                    if is_last {
                        *p >= range_start && *p <= range_end
                    } else {
                        *p >= range_start && *p < range_end
                    }
                })
                .collect();

            let price = if members.is_empty() {
                (range_start + range_end) / 2.0
            } else {
                members.iter().map(|(p, _)| *p).sum::<f64>() / members.len() as f64
            };

            buckets.push(PriceBucket {
                price_range: format!(
                    "{}-{}",
                    format_currency(range_start, currency),
                    format_currency(range_end, currency)
                ),
                price,
                count: members.len(),
                flight_ids: members.iter().map(|(_, id)| id.to_string()).collect(),
            });
        }

        buckets
    }
}

/// Computes the full report with the default configuration.
pub fn compute_price_stats(offers: &[FlightOffer]) -> PriceStatsReport {
    PriceStatsEngine::new(StatsConfig::default()).compute(offers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, total: &str) -> FlightOffer {
        FlightOffer::new(id, vec![], total, "USD")
    }

    fn offers(prices: &[&str]) -> Vec<FlightOffer> {
        prices
            .iter()
            .enumerate()
            .map(|(i, total)| offer(&format!("{}", i + 1), total))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_zero_report() {
        let report = compute_price_stats(&[]);
        assert_eq!(report.stats.lowest, 0.0);
        assert_eq!(report.stats.average, 0.0);
        assert_eq!(report.stats.highest, 0.0);
        assert_eq!(report.stats.currency, "USD");
        assert_eq!(report.trend.percentage, 0.0);
        assert!(report.trend.is_up);
        assert_eq!(report.deals.deal_count, 0);
        assert!(report.histogram.is_empty());
    }

    #[test]
    fn test_summary_and_deals_worked_example() {
        // The canonical five-offer set: average 320, great-deal line at 256
        let flights = offers(&["100", "150", "200", "250", "900"]);
        let report = compute_price_stats(&flights);

        assert_eq!(report.stats.lowest, 100.0);
        assert_eq!(report.stats.highest, 900.0);
        assert_eq!(report.stats.average, 320.0);
        assert_eq!(report.stats.currency, "USD");

        assert_eq!(report.deals.deal_count, 4);
        assert_eq!(report.deals.great_deals, 3);
        assert_eq!(report.deals.max_savings, 220.0);
    }

    #[test]
    fn test_histogram_worked_example() {
        // n=5 -> 5 buckets of width 160 over [100, 900]
        let flights = offers(&["100", "150", "200", "250", "900"]);
        let report = compute_price_stats(&flights);
        let histogram = &report.histogram;

        assert_eq!(histogram.len(), 5);

        // Bucket 0 = [100, 260): four offers, mean 175
        assert_eq!(histogram[0].count, 4);
        assert_eq!(histogram[0].price, 175.0);
        assert_eq!(histogram[0].flight_ids, vec!["1", "2", "3", "4"]);
        assert_eq!(histogram[0].price_range, "$100.00-$260.00");

        // Middle buckets are empty and report their midpoint
        assert_eq!(histogram[1].count, 0);
        assert_eq!(histogram[1].price, 340.0);

        // Last bucket [740, 900] is closed on both ends and holds the max
        assert_eq!(histogram[4].count, 1);
        assert_eq!(histogram[4].flight_ids, vec!["5"]);
        assert_eq!(histogram[4].price, 900.0);
    }

    #[test]
    fn test_histogram_conserves_every_offer() {
        let flights = offers(&["100", "150", "200", "250", "320", "480", "640", "900"]);
        let report = compute_price_stats(&flights);
        let total: usize = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, flights.len());
    }

    #[test]
    fn test_histogram_bucket_count_tracks_small_sets() {
        let report = compute_price_stats(&offers(&["100", "200", "300"]));
        assert_eq!(report.histogram.len(), 3);
    }

    #[test]
    fn test_histogram_degenerates_when_all_prices_equal() {
        let flights = offers(&["250", "250", "250"]);
        let report = compute_price_stats(&flights);
        // Zero-width buckets: everything lands in the last (closed) bucket
        let total: usize = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_trend_splits_at_midpoint() {
        // mid = 2: first half [100, 150] avg 125, second [200, 250, 900] avg 450
        let flights = offers(&["100", "150", "200", "250", "900"]);
        let report = compute_price_stats(&flights);
        assert!(report.trend.is_up);
        assert!((report.trend.percentage - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_down_reports_absolute_percentage() {
        let flights = offers(&["400", "400", "200", "200"]);
        let report = compute_price_stats(&flights);
        assert!(!report.trend.is_up);
        assert!((report.trend.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_needs_two_offers() {
        let report = compute_price_stats(&offers(&["500"]));
        assert_eq!(report.trend.percentage, 0.0);
        assert!(report.trend.is_up);
    }

    #[test]
    fn test_currency_follows_first_offer() {
        let mut flights = offers(&["100", "200"]);
        for flight in &mut flights {
            flight.price.currency = "NGN".to_string();
        }
        let report = compute_price_stats(&flights);
        assert_eq!(report.stats.currency, "NGN");
        assert!(report.histogram[0].price_range.starts_with('\u{20a6}'));
    }

    #[test]
    fn test_custom_config() {
        let engine = PriceStatsEngine::new(StatsConfig {
            max_buckets: 2,
            great_deal_ratio: 0.5,
        });
        let flights = offers(&["100", "150", "200", "250", "900"]);
        let report = engine.compute(&flights);
        assert_eq!(report.histogram.len(), 2);
        // Half of 320 is 160: only the 100 and 150 offers qualify
        assert_eq!(report.deals.great_deals, 2);
    }
}
