//! Query-string round-trip for the browse filter.
//!
//! The browse route carries the whole [`ListingFilter`] in its query string,
//! one parameter per set field, so the address bar is the single durable copy
//! of the filter state: reload, bookmark and back button all reproduce it.

use std::fmt::Display;

use dioxus::router::routable::FromQuery;
use serde::{Deserialize, Serialize};

use common::catalog::{Condition, Currency, SortDirection, SortField, VehicleType};
use common::listing_const::{DEFAULT_PAGE_SIZE, FIRST_PAGE, MAX_PAGE_SIZE};
use common::listing_filter::{ListingFilter, normalize_id, normalize_search};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BrowseFilter(pub ListingFilter);

impl From<ListingFilter> for BrowseFilter {
    fn from(value: ListingFilter) -> Self {
        BrowseFilter(value)
    }
}

// Serialize only the fields that differ from the default state, so an
// untouched filter produces an empty query string and "unset" never shows up
// as an empty parameter.
impl Display for BrowseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filter = &self.0;
        let mut pairs = form_urlencoded::Serializer::new(String::new());

        if let Some(v) = &filter.brand_id {
            pairs.append_pair("brandId", v);
        }
        if let Some(v) = &filter.model_id {
            pairs.append_pair("modelId", v);
        }
        if let Some(v) = &filter.version_id {
            pairs.append_pair("versionId", v);
        }
        if let Some(v) = filter.vehicle_type {
            pairs.append_pair("type", v.as_str());
        }
        if let Some(v) = filter.condition {
            pairs.append_pair("condition", v.as_str());
        }
        if let Some(v) = filter.currency {
            pairs.append_pair("currency", v.as_str());
        }
        if let Some(v) = filter.min_price {
            pairs.append_pair("minPrice", &v.to_string());
        }
        if let Some(v) = filter.max_price {
            pairs.append_pair("maxPrice", &v.to_string());
        }
        if let Some(v) = filter.min_year {
            pairs.append_pair("minYear", &v.to_string());
        }
        if let Some(v) = filter.max_year {
            pairs.append_pair("maxYear", &v.to_string());
        }
        if let Some(v) = filter.min_mileage {
            pairs.append_pair("minMileage", &v.to_string());
        }
        if let Some(v) = filter.max_mileage {
            pairs.append_pair("maxMileage", &v.to_string());
        }
        if let Some(v) = &filter.search {
            pairs.append_pair("search", v);
        }
        if filter.order_by != SortField::default() {
            pairs.append_pair("orderBy", filter.order_by.as_str());
        }
        if filter.order != SortDirection::default() {
            pairs.append_pair("order", filter.order.as_str());
        }
        if filter.page != FIRST_PAGE {
            pairs.append_pair("page", &filter.page.to_string());
        }
        if filter.limit != DEFAULT_PAGE_SIZE {
            pairs.append_pair("limit", &filter.limit.to_string());
        }

        write!(f, "{}", pairs.finish())
    }
}

// Parsing never fails: a malformed value leaves its own field at the default
// and the remaining parameters still apply. Unknown keys are ignored.
impl FromQuery for BrowseFilter {
    fn from_query(query: &str) -> Self {
        let mut filter = ListingFilter::default();
        let query = query.trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "brandId" => filter.brand_id = normalize_id(Some(value.to_string())),
                "modelId" => filter.model_id = normalize_id(Some(value.to_string())),
                "versionId" => filter.version_id = normalize_id(Some(value.to_string())),
                "type" => filter.vehicle_type = VehicleType::parse(&value),
                "condition" => filter.condition = Condition::parse(&value),
                "currency" => filter.currency = Currency::parse(&value),
                "minPrice" => filter.min_price = value.parse().ok(),
                "maxPrice" => filter.max_price = value.parse().ok(),
                "minYear" => filter.min_year = value.parse().ok(),
                "maxYear" => filter.max_year = value.parse().ok(),
                "minMileage" => filter.min_mileage = value.parse().ok(),
                "maxMileage" => filter.max_mileage = value.parse().ok(),
                "search" => filter.search = normalize_search(&value),
                "orderBy" => {
                    if let Some(order_by) = SortField::parse(&value) {
                        filter.order_by = order_by;
                    }
                }
                "order" => {
                    if let Some(order) = SortDirection::parse(&value) {
                        filter.order = order;
                    }
                }
                "page" => {
                    if let Ok(page) = value.parse::<u64>() {
                        filter.page = page.max(FIRST_PAGE);
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<u64>() {
                        filter.limit = limit.clamp(1, MAX_PAGE_SIZE);
                    }
                }
                _ => {}
            }
        }
        // a hand-edited URL can carry a model without its brand; the
        // cascading constraint drops such orphans
        if filter.brand_id.is_none() {
            filter.model_id = None;
        }
        if filter.model_id.is_none() {
            filter.version_id = None;
        }
        BrowseFilter(filter)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_filter::FilterUpdate;

    fn round_trip(filter: &ListingFilter) -> ListingFilter {
        let serialized = BrowseFilter(filter.clone()).to_string();
        BrowseFilter::from_query(&serialized).0
    }

    #[test]
    fn the_default_filter_serializes_to_an_empty_query_string() {
        assert_eq!(BrowseFilter(ListingFilter::default()).to_string(), "");
    }

    #[test]
    fn a_reset_filter_round_trips_to_the_default() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Brand(Some("fiat".into())));
        filter.apply(FilterUpdate::Reset);
        assert_eq!(BrowseFilter(filter.clone()).to_string(), "");
        assert_eq!(round_trip(&filter), ListingFilter::default());
    }

    #[test]
    fn every_field_survives_a_round_trip() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Brand(Some("ford".into())));
        filter.apply(FilterUpdate::Model(Some("ranger".into())));
        filter.apply(FilterUpdate::Version(Some("ranger-xlt".into())));
        filter.apply(FilterUpdate::VehicleType(Some(VehicleType::Pickup)));
        filter.apply(FilterUpdate::Condition(Some(Condition::Used)));
        filter.apply(FilterUpdate::Currency(Some(Currency::Usd)));
        filter.apply(FilterUpdate::PriceRange(Some(5_000_000), Some(10_000_000)));
        filter.apply(FilterUpdate::YearRange(Some(2015), Some(2022)));
        filter.apply(FilterUpdate::MileageRange(None, Some(120_000)));
        filter.apply(FilterUpdate::Search(Some("diesel 4x4 100%".into())));
        filter.apply(FilterUpdate::Sort(SortField::Price, SortDirection::Ascending));
        filter.apply(FilterUpdate::Limit(50));
        filter.apply(FilterUpdate::Page(3));
        assert_eq!(round_trip(&filter), filter);
    }

    #[test]
    fn unset_fields_never_appear_in_the_query_string() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Brand(Some("ford".into())));
        let serialized = BrowseFilter(filter).to_string();
        assert_eq!(serialized, "brandId=ford");
    }

    #[test]
    fn currency_symbols_are_percent_encoded_and_recovered() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Currency(Some(Currency::Ars)));
        let serialized = BrowseFilter(filter.clone()).to_string();
        assert_eq!(serialized, "currency=AR%24");
        assert_eq!(round_trip(&filter), filter);
    }

    #[test]
    fn search_text_with_spaces_and_symbols_round_trips() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Search(Some("caja automática & GNC".into())));
        assert_eq!(round_trip(&filter), filter);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let parsed = BrowseFilter::from_query("brandId=ford&utm_source=mail&foo=bar").0;
        assert_eq!(parsed.brand_id.as_deref(), Some("ford"));
        assert_eq!(parsed.model_id, None);
    }

    #[test]
    fn one_malformed_parameter_does_not_invalidate_the_rest() {
        let parsed =
            BrowseFilter::from_query("minPrice=abc&maxPrice=10000000&condition=mint&brandId=fiat").0;
        assert_eq!(parsed.min_price, None);
        assert_eq!(parsed.max_price, Some(10_000_000));
        assert_eq!(parsed.condition, None);
        assert_eq!(parsed.brand_id.as_deref(), Some("fiat"));
    }

    #[test]
    fn orphan_model_and_version_are_dropped_on_parse() {
        let parsed = BrowseFilter::from_query("modelId=ranger&versionId=ranger-xlt").0;
        assert_eq!(parsed.model_id, None);
        assert_eq!(parsed.version_id, None);

        let parsed = BrowseFilter::from_query("brandId=ford&versionId=ranger-xlt").0;
        assert_eq!(parsed.brand_id.as_deref(), Some("ford"));
        assert_eq!(parsed.version_id, None);
    }

    #[test]
    fn page_zero_and_oversized_limit_fall_back_to_sane_values() {
        let parsed = BrowseFilter::from_query("page=0&limit=100000").0;
        assert_eq!(parsed.page, FIRST_PAGE);
        assert_eq!(parsed.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn a_leading_question_mark_is_tolerated() {
        let parsed = BrowseFilter::from_query("?brandId=ford").0;
        assert_eq!(parsed.brand_id.as_deref(), Some("ford"));
    }

    #[test]
    fn default_sort_and_pagination_are_omitted() {
        let mut filter = ListingFilter::default();
        filter.apply(FilterUpdate::Sort(SortField::default(), SortDirection::default()));
        filter.apply(FilterUpdate::Page(FIRST_PAGE));
        assert_eq!(BrowseFilter(filter).to_string(), "");
    }
}
