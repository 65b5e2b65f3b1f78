//! Result grid card for one listing.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_maps_icons::MdDirectionsCar};

use common::listing_result::ListingSummary;

use crate::{
    components::browse_components::card_action_buttons::{
        ListingCardActionButtonCopyLink, ListingCardActionButtonOpenNewTab,
    },
    routes::Route,
};

/// Prices render with dot separators the way local listings are written:
/// 5.000.000.
pub fn format_price_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[component]
pub fn ListingCard(listing: ReadSignal<ListingSummary>) -> Element {
    let ListingSummary {
        listing_id,
        title,
        version_name,
        condition,
        currency,
        price,
        year,
        mileage,
        location,
        cover_photo_key,
        ..
    } = listing.read().clone();

    let price_txt = format!("{} {}", currency, format_price_number(price));
    let mileage_txt = format_price_number(mileage);
    let condition_badge = if condition == "new" { "NEW" } else { "USED" };
    let photo_listing_id = listing_id.clone();
    let card_listing_id = listing_id.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                width: 300px;
                box-sizing: border-box;
                cursor: pointer;
            ",
            class: "autoplaza-hover-shadow",
            onclick: move |_| {
                navigator().push(Route::ListingDetailPage { listing_id: card_listing_id.clone() });
            },

            // COVER PHOTO
            if cover_photo_key.is_empty() {
                div {
                    style: "
                        width: 100%;
                        height: 150px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #ECEEF2;
                        border-radius: 6px;
                        color: rgba(0,0,0,0.3);
                    ",
                    Icon { icon: MdDirectionsCar, style: "width: 64px; height: 64px;" }
                }
            } else {
                img {
                    style: "
                        width: 100%;
                        height: 150px;
                        object-fit: cover;
                        border-radius: 6px;
                    ",
                    src: "/_listing_photo/{photo_listing_id}/{cover_photo_key}",
                    alt: "{title}",
                }
            }

            // TITLE + CONDITION BADGE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                ",
                div {
                    style: "
                        font-size: 17px;
                        line-height: 24px;
                        font-weight: 500;
                        color: rgb(0, 0, 0);
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        min-width: 0;
                        flex: 1;
                    ",
                    "{title}"
                }
                span {
                    style: "
                        font-size: 11px;
                        font-weight: 600;
                        color: rgb(75, 87, 112);
                        border: 1px solid rgb(75, 87, 112);
                        border-radius: 4px;
                        padding: 1px 5px;
                        flex-shrink: 0;
                    ",
                    "{condition_badge}"
                }
            }

            // VERSION
            div {
                style: "
                    font-size: 14px;
                    color: rgba(0,0,0,0.55);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{version_name}"
            }

            // SPECS LINE
            div {
                style: "
                    font-size: 14px;
                    color: rgba(0,0,0,0.7);
                ",
                "{year} · {mileage_txt} km · {location}"
            }

            // PRICE + ACTIONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                ",
                div {
                    style: "
                        font-size: 20px;
                        font-weight: 600;
                        color: rgb(17, 24, 39);
                    ",
                    "{price_txt}"
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 8px;
                        flex-shrink: 0;
                    ",
                    ListingCardActionButtonOpenNewTab { listing_id: listing_id.clone() }
                    ListingCardActionButtonCopyLink { listing_id: listing_id.clone() }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_numbers_get_dot_separators() {
        assert_eq!(format_price_number(0), "0");
        assert_eq!(format_price_number(999), "999");
        assert_eq!(format_price_number(1_000), "1.000");
        assert_eq!(format_price_number(28_500), "28.500");
        assert_eq!(format_price_number(5_000_000), "5.000.000");
    }
}
