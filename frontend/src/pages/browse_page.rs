use dioxus::prelude::*;

use common::listing_filter::{FilterUpdate, ListingFilter};
use common::listing_result::ListingPage;

use crate::{
    api::listing_api::search_listings,
    components::{
        browse_components::{
            filter_panel::FilterPanel, list_controls::ListControls, listing_card::ListingCard,
            search_box::SearchBox,
        },
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::filter_query::BrowseFilter,
    routes::Route,
};


fn page_title(filter: &ListingFilter) -> String {
    match &filter.search {
        Some(search) if search.chars().count() > 20 => {
            let prefix = search.chars().take(18).collect::<String>();
            format!("Search: {}...", prefix)
        }
        Some(search) => format!("Search: {}", search),
        None => "Browse vehicles".to_string(),
    }
}

/// Browse page
#[component]
pub fn BrowsePage(filter: BrowseFilter) -> Element {
    rsx! {
        Title { "AutoPlaza: {page_title(&filter.0)}" }
        BrowsePageRootComponent { filter: filter.0.clone() }
    }
}

/// The browse page's single source of truth, provided as context. All
/// durable state lives in the URL; the callbacks are the only mutation
/// entry points.
#[derive(Copy, Clone)]
pub struct BrowseState {
    pub filter: ReadSignal<ListingFilter>,
    pub listing_page: ReadSignal<Option<Result<ListingPage, ServerFnError>>>,
    pub apply_update: Callback<FilterUpdate>,
    pub set_page: Callback<u64>,
}

#[component]
fn BrowsePageRootComponent(filter: ReadSignal<ListingFilter>) -> Element {
    let mut listing_page = use_resource(move || {
        let f = filter.read().clone();
        search_listings(f)
    });
    // when the filter in the URL changes, restart the request; the
    // superseded future is dropped, so a slow response can never be
    // rendered over a newer one
    use_effect(move || {
        let _ = filter.read();
        listing_page.clear();
        listing_page.restart();
    });

    let apply_update = Callback::new(move |update: FilterUpdate| {
        let mut next = filter.read().clone();
        next.apply(update);
        if next == *filter.read() {
            return;
        }
        // replace instead of push, so filtering does not pollute
        // back-navigation with one entry per keystroke
        navigator().replace(Route::BrowsePage {
            filter: BrowseFilter(next),
        });
    });
    let set_page = Callback::new(move |page: u64| {
        apply_update(FilterUpdate::Page(page));
    });

    use_context_provider(move || BrowseState {
        filter,
        listing_page: listing_page.into(),
        apply_update,
        set_page,
    });

    rsx! {
        div {
            id: "x-browse-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-browse-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchBox {}
            }

            div {
                id: "x-browse-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-browse-filter-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-shrink: 0;
                        width: 290px;
                        overflow-y: auto;
                    ",
                    SuspendWrapper { FilterPanel {} }
                }
                div {
                    id: "x-browse-results-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 400px;
                        display: flex;
                        flex-direction: column;
                        gap: 1px;
                        padding: 7px;
                        padding-top: 0px;
                    ",
                    ListControls {}

                    div {
                        style: "
                            flex-grow: 1;
                            width: 100%;
                            max-height: calc(100% - 56px);
                        ",
                        SuspendWrapper {
                            ResultsView {}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsView() -> Element {
    let browse_state = use_context::<BrowseState>();
    let listing_page = browse_state.listing_page;
    let listing_page = listing_page.read();
    let listing_page = match listing_page.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(p)) => p,
        None => return rsx! { LoadingIndicator {} },
    };

    // an empty page is a valid result, not an error
    if listing_page.data.is_empty() {
        return rsx! { EmptyResults {} };
    }

    let result_list = listing_page.data.clone();
    rsx! {
        ul {
            id: "x-browse-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-content: flex-start;
                gap: 8px;
                list-style: none;
                margin: 0;
                padding: 8px;
            ",
            for listing in result_list.iter().cloned() {
                li {
                    key: "{listing.listing_id}",
                    ListingCard { listing: listing.clone() }
                }
            }
        }
    }
}

#[component]
fn EmptyResults() -> Element {
    let browse_state = use_context::<BrowseState>();
    let has_constraints = use_memo(move || !browse_state.filter.read().is_unfiltered());
    rsx! {
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
            ",
            div {
                style: "font-size: 24px; font-weight: 300; color: rgb(75, 87, 112);",
                "No vehicles match the selected filters."
            }
            if has_constraints() {
                button {
                    style: "
                        font-size: 16px;
                        padding: 8px 16px;
                        border-radius: 8px;
                        border: 1px solid rgb(75, 87, 112);
                        background: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        browse_state.apply_update.call(FilterUpdate::Reset);
                    },
                    "Clear all filters"
                }
            }
        }
    }
}
