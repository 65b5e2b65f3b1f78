//! Dropdown over catalog reference data, shared by the filter panel and the
//! publish form.

use dioxus::prelude::*;

use common::catalog::CatalogEntry;


#[component]
pub fn CatalogSelect(
    label: String,
    placeholder: String,
    entries: Vec<CatalogEntry>,
    selected: Option<String>,
    disabled: ReadSignal<bool>,
    onchange: Callback<Option<String>>,
) -> Element {
    let selected_value = selected.clone().unwrap_or_default();
    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                font-size: 14px;
                font-weight: 500;
                color: rgb(55, 65, 81);
            ",
            "{label}"
            select {
                style: "
                    height: 36px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    background: white;
                    font-size: 15px;
                    padding: 0 8px;
                ",
                disabled: *disabled.read(),
                value: "{selected_value}",
                onchange: move |event: Event<FormData>| {
                    let value = event.value();
                    if value.is_empty() {
                        onchange(None);
                    } else {
                        onchange(Some(value));
                    }
                },
                option { value: "", "{placeholder}" }
                for entry in entries.iter().cloned() {
                    option {
                        key: "{entry.id}",
                        value: "{entry.id}",
                        selected: Some(&entry.id) == selected.as_ref(),
                        "{entry.name}"
                    }
                }
            }
        }
    }
}
