//! Shared listing filter model and the single mutation entry point.

use serde::{Deserialize, Serialize};

use crate::catalog::{Condition, Currency, SortDirection, SortField, VehicleType};
use crate::listing_const::{DEFAULT_PAGE_SIZE, FIRST_PAGE, MAX_PAGE_SIZE};


/// Every constraint the browse page can apply to the listing search.
///
/// "Unset" is always `None`, never an empty string, so that clearing a filter
/// and never touching it are indistinguishable on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    pub brand_id: Option<String>,
    /// Only meaningful while `brand_id` is set.
    pub model_id: Option<String>,
    /// Only meaningful while `model_id` is set.
    pub version_id: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub condition: Option<Condition>,
    pub currency: Option<Currency>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_year: Option<u64>,
    pub max_year: Option<u64>,
    pub min_mileage: Option<u64>,
    pub max_mileage: Option<u64>,
    pub search: Option<String>,
    pub order_by: SortField,
    pub order: SortDirection,
    /// 1-based.
    pub page: u64,
    pub limit: u64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        ListingFilter {
            brand_id: None,
            model_id: None,
            version_id: None,
            vehicle_type: None,
            condition: None,
            currency: None,
            min_price: None,
            max_price: None,
            min_year: None,
            max_year: None,
            min_mileage: None,
            max_mileage: None,
            search: None,
            order_by: SortField::default(),
            order: SortDirection::default(),
            page: FIRST_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}


/// One mutation of the filter. All UI controls funnel through
/// [`ListingFilter::apply`] with one of these, so the page-reset and cascade
/// rules live in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterUpdate {
    Brand(Option<String>),
    Model(Option<String>),
    Version(Option<String>),
    VehicleType(Option<VehicleType>),
    Condition(Option<Condition>),
    Currency(Option<Currency>),
    PriceRange(Option<u64>, Option<u64>),
    YearRange(Option<u64>, Option<u64>),
    MileageRange(Option<u64>, Option<u64>),
    Search(Option<String>),
    Sort(SortField, SortDirection),
    Limit(u64),
    Page(u64),
    Reset,
}

impl ListingFilter {
    /// Applies one update. Any update other than `Page` sends the user back
    /// to the first page: the old page position is meaningless once the
    /// result set changes.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Page(page) => {
                self.page = page.max(FIRST_PAGE);
                return;
            }
            FilterUpdate::Brand(brand_id) => {
                // a different (or absent) brand invalidates the dependent
                // model and version selections
                self.brand_id = normalize_id(brand_id);
                self.model_id = None;
                self.version_id = None;
            }
            FilterUpdate::Model(model_id) => {
                self.model_id = normalize_id(model_id);
                self.version_id = None;
            }
            FilterUpdate::Version(version_id) => {
                self.version_id = normalize_id(version_id);
            }
            FilterUpdate::VehicleType(vehicle_type) => self.vehicle_type = vehicle_type,
            FilterUpdate::Condition(condition) => self.condition = condition,
            FilterUpdate::Currency(currency) => self.currency = currency,
            FilterUpdate::PriceRange(min, max) => {
                self.min_price = min;
                self.max_price = max;
            }
            FilterUpdate::YearRange(min, max) => {
                self.min_year = min;
                self.max_year = max;
            }
            FilterUpdate::MileageRange(min, max) => {
                self.min_mileage = min;
                self.max_mileage = max;
            }
            FilterUpdate::Search(search) => {
                self.search = normalize_search(search.as_deref().unwrap_or(""));
            }
            FilterUpdate::Sort(order_by, order) => {
                self.order_by = order_by;
                self.order = order;
            }
            FilterUpdate::Limit(limit) => {
                self.limit = limit.clamp(1, MAX_PAGE_SIZE);
            }
            FilterUpdate::Reset => {
                *self = ListingFilter::default();
            }
        }
        self.page = FIRST_PAGE;
    }

    /// True when no user-visible constraint is active (sort and paging are
    /// presentation, not constraints).
    pub fn is_unfiltered(&self) -> bool {
        let defaults = ListingFilter::default();
        ListingFilter {
            order_by: defaults.order_by,
            order: defaults.order,
            page: defaults.page,
            limit: defaults.limit,
            ..self.clone()
        } == defaults
    }

    /// Number of active constraints, for the "clear filters (n)" badge.
    pub fn active_constraint_count(&self) -> usize {
        [
            self.brand_id.is_some(),
            self.model_id.is_some(),
            self.version_id.is_some(),
            self.vehicle_type.is_some(),
            self.condition.is_some(),
            self.currency.is_some(),
            self.min_price.is_some() || self.max_price.is_some(),
            self.min_year.is_some() || self.max_year.is_some(),
            self.min_mileage.is_some() || self.max_mileage.is_some(),
            self.search.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Empty and whitespace-only ids count as "unset".
pub fn normalize_id(id: Option<String>) -> Option<String> {
    id.filter(|v| !v.trim().is_empty())
}

/// Free text is trimmed; empty text counts as "unset".
pub fn normalize_search(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn filter_with_cascade() -> ListingFilter {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Brand(Some("ford".into())));
        filter.apply(FilterUpdate::Model(Some("ranger".into())));
        filter.apply(FilterUpdate::Version(Some("ranger-xlt".into())));
        filter
    }

    #[test]
    fn clearing_brand_clears_model_and_version() {
        let mut filter = filter_with_cascade();
        filter.apply(FilterUpdate::Brand(None));
        assert_eq!(filter.brand_id, None);
        assert_eq!(filter.model_id, None);
        assert_eq!(filter.version_id, None);
    }

    #[test]
    fn changing_brand_clears_model_and_version() {
        let mut filter = filter_with_cascade();
        filter.apply(FilterUpdate::Brand(Some("toyota".into())));
        assert_eq!(filter.brand_id.as_deref(), Some("toyota"));
        assert_eq!(filter.model_id, None);
        assert_eq!(filter.version_id, None);
    }

    #[test]
    fn changing_model_clears_version_only() {
        let mut filter = filter_with_cascade();
        filter.apply(FilterUpdate::Model(Some("f-150".into())));
        assert_eq!(filter.brand_id.as_deref(), Some("ford"));
        assert_eq!(filter.model_id.as_deref(), Some("f-150"));
        assert_eq!(filter.version_id, None);
    }

    #[test]
    fn empty_string_brand_counts_as_unset() {
        let mut filter = filter_with_cascade();
        filter.apply(FilterUpdate::Brand(Some("  ".into())));
        assert_eq!(filter.brand_id, None);
        assert_eq!(filter.model_id, None);
    }

    #[test]
    fn every_update_except_page_resets_page() {
        let updates = [
            FilterUpdate::Brand(Some("fiat".into())),
            FilterUpdate::Model(Some("cronos".into())),
            FilterUpdate::Version(None),
            FilterUpdate::VehicleType(Some(crate::catalog::VehicleType::Car)),
            FilterUpdate::Condition(Some(crate::catalog::Condition::Used)),
            FilterUpdate::Currency(Some(crate::catalog::Currency::Ars)),
            FilterUpdate::PriceRange(Some(1), Some(2)),
            FilterUpdate::YearRange(Some(2010), None),
            FilterUpdate::MileageRange(None, Some(100_000)),
            FilterUpdate::Search(Some("gnc".into())),
            FilterUpdate::Sort(SortField::Price, SortDirection::Ascending),
            FilterUpdate::Limit(50),
            FilterUpdate::Reset,
        ];
        for update in updates {
            let mut filter = ListingFilter::default();
            filter.apply(FilterUpdate::Page(7));
            assert_eq!(filter.page, 7);
            filter.apply(update.clone());
            assert_eq!(filter.page, FIRST_PAGE, "page not reset by {update:?}");
        }
    }

    #[test]
    fn set_page_touches_nothing_else() {
        let mut filter = filter_with_cascade();
        let before = filter.clone();
        filter.apply(FilterUpdate::Page(3));
        assert_eq!(filter.page, 3);
        assert_eq!(
            ListingFilter { page: before.page, ..filter },
            before
        );
    }

    #[test]
    fn page_is_clamped_to_first() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Page(0));
        assert_eq!(filter.page, FIRST_PAGE);
    }

    #[test]
    fn reset_restores_the_default_state() {
        let mut filter = filter_with_cascade();
        filter.apply(FilterUpdate::PriceRange(Some(5_000_000), Some(10_000_000)));
        filter.apply(FilterUpdate::Page(4));
        filter.apply(FilterUpdate::Reset);
        assert_eq!(filter, ListingFilter::default());
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn range_bounds_are_independent() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::PriceRange(None, Some(10_000_000)));
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, Some(10_000_000));
        filter.apply(FilterUpdate::PriceRange(Some(5_000_000), None));
        assert_eq!(filter.min_price, Some(5_000_000));
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn inverted_ranges_are_kept_verbatim() {
        // min > max is sent to the server as-is; nothing reorders the bounds
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::PriceRange(Some(9), Some(1)));
        assert_eq!((filter.min_price, filter.max_price), (Some(9), Some(1)));
    }

    #[test]
    fn search_is_trimmed_and_empty_means_unset() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Search(Some("  diesel 4x4  ".into())));
        assert_eq!(filter.search.as_deref(), Some("diesel 4x4"));
        filter.apply(FilterUpdate::Search(Some("   ".into())));
        assert_eq!(filter.search, None);
    }

    #[test]
    fn limit_is_clamped_to_the_allowed_window() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Limit(0));
        assert_eq!(filter.limit, 1);
        filter.apply(FilterUpdate::Limit(10_000));
        assert_eq!(filter.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn brand_change_keeps_unrelated_filters() {
        // price range + currency set, then the brand changes: the four
        // remaining constraints survive and the page rewinds
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::PriceRange(Some(5_000_000), Some(10_000_000)));
        filter.apply(FilterUpdate::Currency(Some(crate::catalog::Currency::Ars)));
        filter.apply(FilterUpdate::Page(5));
        filter.apply(FilterUpdate::Brand(Some("chevrolet".into())));

        assert_eq!(filter.min_price, Some(5_000_000));
        assert_eq!(filter.max_price, Some(10_000_000));
        assert_eq!(filter.currency, Some(crate::catalog::Currency::Ars));
        assert_eq!(filter.brand_id.as_deref(), Some("chevrolet"));
        assert_eq!(filter.model_id, None);
        assert_eq!(filter.version_id, None);
        assert_eq!(filter.page, FIRST_PAGE);
        assert_eq!(filter.active_constraint_count(), 3);
    }
}
