//! Listing card action buttons component.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_action_icons::MdOpenInNew, md_editor_icons::MdInsertLink},
};

use crate::routes::Route;

#[component]
pub fn ListingCardActionButtonOpenNewTab(listing_id: ReadSignal<String>) -> Element {
    rsx! {
        a {
            style: "
                width: 34px;
                height: 34px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1px;
                margin: 1px;
            ",
            target: "_blank",
            title: "Open in new tab",
            class: "autoplaza-hover-shadow",
            href: Route::ListingDetailPage { listing_id: listing_id.read().clone() }.to_string(),
            onclick: move |_e| {
                // the card underneath navigates on click; keep this an <a>
                _e.stop_propagation();
            },
            Icon {
                icon: MdOpenInNew,
                style: "width: 20px; height: 20px;"
            }
        }
    }
}

#[component]
pub fn ListingCardActionButtonCopyLink(listing_id: ReadSignal<String>) -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let origin = web_sys::window().unwrap().location().origin().unwrap();
        let path = Route::ListingDetailPage { listing_id: listing_id.read().clone() }.to_string();
        let url = format!("{origin}{path}");
        let _r = web_sys::window().unwrap().navigator().clipboard().write_text(&url);
        dioxus::logger::tracing::info!("Link copied to clipboard: {:#?}", url);
    });
    rsx! {
        button {
            style: "
                width: 34px;
                height: 34px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1px;
                margin: 1px;
            ",
            title: "Copy listing link",
            class: "autoplaza-hover-shadow",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                do_copy_link.call(());
            },
            Icon {
                icon: MdInsertLink,
                style: "width: 20px; height: 20px;"
            }
        }
    }
}
