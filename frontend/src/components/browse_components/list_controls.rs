//! Controls above the result grid: hit count, sort order and pagination.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{
    MdArrowBack, MdArrowDownward, MdArrowForward, MdArrowUpward,
};
use dioxus_free_icons::{Icon, IconShape};

use common::catalog::{SortDirection, SortField};
use common::listing_filter::FilterUpdate;

use crate::pages::browse_page::BrowseState;

#[component]
pub fn ListControls() -> Element {
    rsx! {
        div {
            id: "x-browse-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112); margin: 0;",
                HitCountString {}
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            SortControls {}
            PaginationControls {}
        }
    }
}


#[component]
fn HitCountString() -> Element {
    let browse_state = use_context::<BrowseState>();
    let listing_page = browse_state.listing_page;

    match listing_page.read().as_ref() {
        Some(Err(e)) => return rsx! { "! error: {e:?}" },
        Some(Ok(page)) => return rsx! { "{page.total} vehicles found" },
        None => return rsx! { "..." },
    };
}


#[component]
fn SortControls() -> Element {
    let browse_state = use_context::<BrowseState>();
    let apply_update = browse_state.apply_update;
    let order_by = use_memo(move || browse_state.filter.read().order_by);
    let order = use_memo(move || browse_state.filter.read().order);

    let direction_label = use_memo(move || match order() {
        SortDirection::Ascending => "Ascending",
        SortDirection::Descending => "Descending",
    });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                margin-right: 16px;
            ",
            select {
                style: "
                    height: 32px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    background: white;
                    font-size: 14px;
                    padding: 0 8px;
                ",
                value: "{order_by().as_str()}",
                onchange: move |event: Event<FormData>| {
                    if let Some(field) = SortField::parse(&event.value()) {
                        apply_update(FilterUpdate::Sort(field, *order.peek()));
                    }
                },
                for field in SortField::ALL {
                    option {
                        key: "{field.as_str()}",
                        value: "{field.as_str()}",
                        selected: *field == order_by(),
                        "{field.display_name()}"
                    }
                }
            }
            button {
                style: "
                    width: 32px;
                    height: 32px;
                    background: white;
                    border: 1px solid rgba(0,0,0,0.3);
                    border-radius: 8px;
                    padding: 4px;
                    cursor: pointer;
                ",
                title: "{direction_label}",
                onclick: move |_| {
                    apply_update(FilterUpdate::Sort(*order_by.peek(), order.peek().toggled()));
                },
                if order() == SortDirection::Ascending {
                    Icon { icon: MdArrowUpward, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                } else {
                    Icon { icon: MdArrowDownward, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                }
            }
        }
    }
}


#[component]
fn PaginationControls() -> Element {
    let browse_state = use_context::<BrowseState>();
    let listing_page = browse_state.listing_page;
    let set_page = browse_state.set_page;

    let total_pages = use_memo(move || {
        let listing_page = listing_page.read();
        match listing_page.as_ref() {
            Some(Ok(page)) => page.total_pages,
            _ => 0,
        }
    });
    let current_page = use_memo(move || browse_state.filter.read().page);
    // with zero result pages the display still shows "1 / 0" rather than an
    // impossible page number
    let selected_page = use_memo(move || current_page().min(total_pages().max(1)));
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < total_pages());

    rsx! {
        // prev page
        NavigationButton {
            icon: MdArrowBack,
            label: "Previous Page",
            disabled: !can_go_to_previous_page(),
            onclick: move |_| {
                set_page(selected_page() - 1);
            }
        }
        // current page counter
        div {
            style: "
                font-size: 16px;
                line-height: 21px;
                font-weight: 400;
                background-color: white;
                border-radius: 2px;
                border-left: 1px solid rgba(0,0,0,0.1);
                border-right: 1px solid rgba(0,0,0,0.1);
                padding: 4px 12px;
                align-items: center;
                align-content: center;
            ",
            "{selected_page()}"
            span {
                style: "color: rgba(0,0,0,0.5);",
                "/{total_pages()}"
            }
        }
        // next page
        NavigationButton {
            icon: MdArrowForward,
            label: "Next Page",
            disabled: !can_go_to_next_page(),
            onclick: move |_| {
                set_page(selected_page() + 1);
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                border: none;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
