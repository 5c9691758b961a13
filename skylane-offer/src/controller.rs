//! The single owner of search-result state: screened offers, filter and sort
//! selections, and the current page. The pipeline functions stay pure; all
//! statefulness lives here, and page resets on filter/sort changes are
//! explicit calls rather than hidden change detection.

use skylane_core::models::{FlightFilters, FlightOffer, FlightSearchResponse};
use skylane_core::screen::screen_offers;
use skylane_core::CoreResult;
use skylane_shared::dictionaries::{airline_name, ApiDictionaries};
use tracing::debug;

use crate::filter::{active_filter_count, calculate_flight_metadata, filter_flights, FlightMetadata};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::sort::{sort_flights, SortOption};
use crate::stats::{PriceStatsEngine, PriceStatsReport, StatsConfig};

pub struct SearchController {
    offers: Vec<FlightOffer>,
    dictionaries: ApiDictionaries,
    filters: FlightFilters,
    sort_by: SortOption,
    paginator: Paginator,
    current_page: usize,
    stats_engine: PriceStatsEngine,
}

/// Everything a render pass needs, computed in one call.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// The full filtered and sorted result set.
    pub sorted: Vec<FlightOffer>,
    /// The slice of `sorted` for the current page.
    pub page_items: Vec<FlightOffer>,
    pub metadata: FlightMetadata,
    pub current_page: usize,
    pub total_pages: usize,
    pub results_count: usize,
    pub airlines_count: usize,
    pub active_filters_count: usize,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            offers: Vec::new(),
            dictionaries: ApiDictionaries::default(),
            filters: FlightFilters::default(),
            sort_by: SortOption::default(),
            paginator: Paginator::new(page_size),
            current_page: 1,
            stats_engine: PriceStatsEngine::new(StatsConfig::default()),
        }
    }

    /// Ingests a full search response: screens the offers, stores the lookup
    /// dictionaries, and starts over on page 1.
    pub fn load_response(&mut self, response: FlightSearchResponse) -> CoreResult<()> {
        self.dictionaries = response.dictionaries;
        self.load_offers(response.data)
    }

    /// Screens and stores a new offer batch, superseding the previous search.
    /// Fails with `CoreError::MalformedPrice` when any offer carries an
    /// unparseable total.
    pub fn load_offers(&mut self, offers: Vec<FlightOffer>) -> CoreResult<()> {
        self.offers = screen_offers(offers)?;
        self.reset_page();
        debug!("Loaded {} screened offers", self.offers.len());
        Ok(())
    }

    pub fn filters(&self) -> &FlightFilters {
        &self.filters
    }

    /// Replaces the filter selection and resets to page 1.
    pub fn set_filters(&mut self, filters: FlightFilters) {
        self.filters = filters;
        self.reset_page();
    }

    pub fn sort_by(&self) -> SortOption {
        self.sort_by
    }

    /// Replaces the sort selection and resets to page 1.
    pub fn set_sort(&mut self, sort_by: SortOption) {
        self.sort_by = sort_by;
        self.reset_page();
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves to `page`, clamped to the valid range for the current result
    /// set. An empty result set pins the page at 1.
    pub fn set_page(&mut self, page: usize) {
        let max_page = self.total_pages().max(1);
        self.current_page = page.clamp(1, max_page);
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.sorted_offers().len())
    }

    pub fn dictionaries(&self) -> &ApiDictionaries {
        &self.dictionaries
    }

    /// Airline display name for a carrier code, via the response dictionary.
    pub fn airline_display_name(&self, carrier_code: &str) -> String {
        airline_name(carrier_code, Some(&self.dictionaries.carriers))
    }

    /// The 1-based page a given offer id lands on under the current filter
    /// and sort selection, for chart click-through navigation.
    pub fn page_of_offer(&self, offer_id: &str) -> Option<usize> {
        self.sorted_offers()
            .iter()
            .position(|offer| offer.id == offer_id)
            .map(|index| index / self.paginator.page_size() + 1)
    }

    /// Computes the complete view for a render pass.
    pub fn view(&self) -> SearchView {
        let metadata = calculate_flight_metadata(&self.offers);
        let sorted = self.sorted_offers();
        let total_pages = self.paginator.total_pages(sorted.len());
        let page_items = self.paginator.page(&sorted, self.current_page).to_vec();

        SearchView {
            results_count: sorted.len(),
            airlines_count: metadata.available_airlines.len(),
            active_filters_count: active_filter_count(&self.filters),
            page_items,
            metadata,
            current_page: self.current_page,
            total_pages,
            sorted,
        }
    }

    /// Price statistics over the filtered and sorted set, for the chart.
    pub fn price_stats(&self) -> PriceStatsReport {
        self.stats_engine.compute(&self.sorted_offers())
    }

    fn sorted_offers(&self) -> Vec<FlightOffer> {
        sort_flights(&filter_flights(&self.offers, &self.filters), self.sort_by)
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
