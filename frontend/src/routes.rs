use dioxus::prelude::*;

use common::listing_filter::ListingFilter;

use crate::components::navbar::Navbar;
use crate::data_definitions::filter_query::BrowseFilter;
use crate::pages::browse_page::BrowsePage;
use crate::pages::home_page::HomePage;
use crate::pages::listing_detail_page::ListingDetailPage;
use crate::pages::sell_page::SellPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/browse?:..filter")]
    BrowsePage {
        filter: BrowseFilter,
    },


    #[route("/listing/:listing_id")]
    ListingDetailPage { listing_id: String },


    #[route("/sell")]
    SellPage {},

}

impl Route {
    pub fn browse_with_filter(filter: ListingFilter) -> Self {
        Self::BrowsePage {
            filter: BrowseFilter(filter),
        }
    }
}
