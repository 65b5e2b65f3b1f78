//! Result models returned by the listing search and detail endpoints.

use serde::{Deserialize, Serialize};

use crate::listing_filter::ListingFilter;


/// One page of search results, with the server-reported totals. The filter
/// that produced the page travels with it so the client can tell which
/// request a response belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub filter: ListingFilter,
    pub data: Vec<ListingSummary>,
    pub total: u64,
    /// 1-based, echoing the clamped request page.
    pub page: u64,
    pub total_pages: u64,
}

impl ListingPage {
    /// Zero matches means zero pages; otherwise the last page may be short.
    pub fn total_pages_for(total: u64, limit: u64) -> u64 {
        if total == 0 {
            0
        } else {
            total.div_ceil(limit.max(1))
        }
    }
}


/// The card-sized projection of a listing shown in the result grid.
/// Categorical columns stay display-ready strings here; only the filter
/// works with the typed vocabularies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub listing_id: String,
    pub title: String,
    pub brand_name: String,
    pub model_name: String,
    pub version_name: String,
    pub vehicle_type: String,
    pub condition: String,
    pub currency: String,
    pub price: u64,
    pub year: u16,
    pub mileage: u64,
    pub location: String,
    pub cover_photo_key: String,
    pub result_index_in_page: u64,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub listing_id: String,
    pub title: String,
    pub description: String,
    pub brand_id: String,
    pub brand_name: String,
    pub model_id: String,
    pub model_name: String,
    pub version_id: String,
    pub version_name: String,
    pub vehicle_type: String,
    pub condition: String,
    pub currency: String,
    pub price: u64,
    pub year: u16,
    pub mileage: u64,
    pub location: String,
    pub seller_name: String,
    pub seller_phone: String,
    pub photo_keys: Vec<String>,
    /// Unix seconds.
    pub published_at: u64,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_zero_for_an_empty_result_set() {
        assert_eq!(ListingPage::total_pages_for(0, 20), 0);
    }

    #[test]
    fn total_pages_rounds_the_last_short_page_up() {
        assert_eq!(ListingPage::total_pages_for(1, 20), 1);
        assert_eq!(ListingPage::total_pages_for(20, 20), 1);
        assert_eq!(ListingPage::total_pages_for(21, 20), 2);
        assert_eq!(ListingPage::total_pages_for(199, 20), 10);
    }
}
