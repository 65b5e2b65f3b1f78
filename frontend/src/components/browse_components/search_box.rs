//! Debounced free-text search input.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::listing_const::SEARCH_DEBOUNCE_MS;
use common::listing_filter::{FilterUpdate, normalize_search};

use crate::data_definitions::debounce::Debouncer;
use crate::pages::browse_page::BrowseState;


#[component]
pub fn SearchBox() -> Element {
    let browse_state = use_context::<BrowseState>();
    let filter = browse_state.filter;
    let apply_update = browse_state.apply_update;

    let mut draft_text = use_signal(|| filter.peek().search.clone().unwrap_or_default());
    // the last search value this input committed to the URL; lets us tell
    // our own navigation apart from back-button / reset navigation
    let mut last_committed = use_signal(|| filter.peek().search.clone());
    let mut debouncer = use_signal(|| Debouncer::new(SEARCH_DEBOUNCE_MS));

    // navigation does not remount the page, so pull outside changes (back
    // button, clear filters) into the input without clobbering typing
    use_effect(move || {
        let url_search = filter.read().search.clone();
        if url_search != *last_committed.peek() {
            draft_text.set(url_search.clone().unwrap_or_default());
            last_committed.set(url_search);
        }
    });

    let commit = Callback::new(move |text: String| {
        last_committed.set(normalize_search(&text));
        apply_update(FilterUpdate::Search(Some(text)));
    });

    let search_oninput = move |event: Event<FormData>| {
        let text = event.value();
        draft_text.set(text.clone());
        // cancel-on-supersede: only the latest keystroke's timer can fire
        debouncer.write().schedule(move || {
            commit(text);
        });
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            debouncer.write().cancel();
            commit(draft_text.peek().clone());
        }
    };

    rsx! {
        div {
            id: "x-browse-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search brand, model or description",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-weight: 400;
                ",
                value: "{draft_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
