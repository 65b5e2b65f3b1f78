use chrono::DateTime;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_maps_icons::MdDirectionsCar};

use common::listing_const::MAX_LISTING_PHOTOS;
use common::listing_filter::ListingFilter;
use common::listing_result::ListingDetail as ListingDetailData;

use crate::{
    api::listing_api::get_listing,
    components::{
        browse_components::listing_card::format_price_number,
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};


/// Listing detail page
#[component]
pub fn ListingDetailPage(listing_id: String) -> Element {
    rsx! {
        Title { "AutoPlaza: Listing" }
        div {
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                background: #F5F6F8;
            ",
            SuspendWrapper {
                ListingDetailView { listing_id }
            }
        }
    }
}

#[component]
fn ListingDetailView(listing_id: ReadSignal<String>) -> Element {
    let listing = use_resource(move || {
        let listing_id = listing_id.read().clone();
        get_listing(listing_id)
    })
    .suspend()?
    .cloned();
    let listing = match listing {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(listing) => listing,
    };

    let price_txt = format!("{} {}", listing.currency, format_price_number(listing.price));
    let mileage_txt = format_price_number(listing.mileage);
    let published_txt = DateTime::from_timestamp(listing.published_at as i64, 0)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            id: "x-listing-detail",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                max-width: 900px;
                margin: 0 auto;
                padding: 28px;
            ",

            Link {
                to: Route::browse_with_filter(ListingFilter::default()),
                span {
                    style: "font-size: 14px; color: #2563EB;",
                    "← Back to browse"
                }
            }

            PhotoStrip { listing: listing.clone() }

            // TITLE ROW
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: baseline;
                    gap: 14px;
                ",
                h1 {
                    style: "font-size: 30px; font-weight: 500; color: #0F172A; margin: 0; flex: 1;",
                    "{listing.title}"
                }
                div {
                    style: "font-size: 28px; font-weight: 600; color: #0F172A; flex-shrink: 0;",
                    "{price_txt}"
                }
            }

            // SPEC TABLE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 10px;
                ",
                SpecChip { label: "Brand", value: listing.brand_name.clone() }
                SpecChip { label: "Model", value: listing.model_name.clone() }
                SpecChip { label: "Version", value: listing.version_name.clone() }
                SpecChip { label: "Type", value: listing.vehicle_type.clone() }
                SpecChip { label: "Condition", value: listing.condition.clone() }
                SpecChip { label: "Year", value: listing.year.to_string() }
                SpecChip { label: "Mileage", value: format!("{mileage_txt} km") }
                SpecChip { label: "Location", value: listing.location.clone() }
                SpecChip { label: "Published", value: published_txt }
            }

            // DESCRIPTION
            div {
                style: "
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 12px;
                    padding: 18px;
                    font-size: 17px;
                    line-height: 1.6;
                    color: #111827;
                    white-space: pre-wrap;
                ",
                "{listing.description}"
            }

            // SELLER BOX
            div {
                style: "
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 12px;
                    padding: 18px;
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                ",
                div { style: "font-size: 14px; color: rgba(0,0,0,0.5);", "Seller" }
                div { style: "font-size: 18px; font-weight: 500;", "{listing.seller_name}" }
                div { style: "font-size: 16px; color: #2563EB;", "{listing.seller_phone}" }
            }
        }
    }
}

#[component]
fn PhotoStrip(listing: ListingDetailData) -> Element {
    if listing.photo_keys.is_empty() {
        return rsx! {
            div {
                style: "
                    width: 100%;
                    height: 260px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ECEEF2;
                    border-radius: 12px;
                    color: rgba(0,0,0,0.3);
                ",
                Icon { icon: MdDirectionsCar, style: "width: 96px; height: 96px;" }
            }
        };
    }
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                overflow-x: auto;
                width: 100%;
            ",
            for photo_key in listing.photo_keys.iter().take(MAX_LISTING_PHOTOS).cloned() {
                img {
                    key: "{photo_key}",
                    style: "
                        height: 260px;
                        border-radius: 12px;
                        object-fit: cover;
                    ",
                    src: "/_listing_photo/{listing.listing_id}/{photo_key}",
                    alt: "{listing.title}",
                }
            }
        }
    }
}

#[component]
fn SpecChip(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 2px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 10px;
                padding: 8px 14px;
            ",
            span { style: "font-size: 12px; color: rgba(0,0,0,0.5);", "{label}" }
            span { style: "font-size: 16px; font-weight: 500;", "{value}" }
        }
    }
}
