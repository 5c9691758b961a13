pub mod controller;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod stats;

pub use controller::{SearchController, SearchView};
pub use filter::{active_filter_count, calculate_flight_metadata, filter_flights, FlightMetadata, PriceBounds};
pub use pagination::{paginate, Paginator, DEFAULT_PAGE_SIZE};
pub use sort::{sort_flights, SortOption};
pub use stats::{
    compute_price_stats, DealsInfo, PriceBucket, PriceStats, PriceStatsEngine, PriceStatsReport,
    PriceTrend, StatsConfig,
};
