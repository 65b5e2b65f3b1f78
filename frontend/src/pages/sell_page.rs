use dioxus::prelude::*;

use common::catalog::{CatalogEntry, Condition, Currency, VehicleType};
use common::listing_draft::{DescriptionSeed, ListingDraft};

use crate::{
    api::listing_api::{draft_description, list_brands, list_models, list_versions, publish_listing},
    components::{
        browse_components::catalog_select::CatalogSelect,
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};


/// Sell page: a single-form listing editor with catalog-backed dropdowns and
/// an optional AI-drafted description.
#[component]
pub fn SellPage() -> Element {
    rsx! {
        Title { "AutoPlaza: Sell your vehicle" }
        div {
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                background: #F5F6F8;
            ",
            SellForm {}
        }
    }
}

#[component]
fn SellForm() -> Element {
    let draft = use_signal(ListingDraft::default);
    let mut form_error = use_signal(|| None::<String>);
    let mut drafting = use_signal(|| false);
    let mut publishing = use_signal(|| false);

    let missing = use_memo(move || draft.read().missing_fields());
    let missing_txt = use_memo(move || missing.read().join(", "));
    let can_publish = use_memo(move || missing.read().is_empty() && !*publishing.read());
    let can_draft = use_memo(move || {
        let d = draft.read();
        !d.brand_name.is_empty() && !d.model_name.is_empty() && !*drafting.read()
    });

    let on_draft_description = move |_| {
        if !can_draft() {
            return;
        }
        drafting.set(true);
        form_error.set(None);
        spawn(async move {
            let d = draft.peek().clone();
            let seed = DescriptionSeed {
                brand_name: d.brand_name,
                model_name: d.model_name,
                version_name: d.version_name,
                vehicle_type: d.vehicle_type,
                condition: d.condition,
                year: d.year,
                mileage: d.mileage,
            };
            match draft_description(seed).await {
                Ok(text) => {
                    let mut draft = draft;
                    draft.write().description = text;
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
            drafting.set(false);
        });
    };

    let on_publish = move |_| {
        if !can_publish() {
            return;
        }
        publishing.set(true);
        form_error.set(None);
        spawn(async move {
            match publish_listing(draft.peek().clone()).await {
                Ok(listing_id) => {
                    navigator().push(Route::ListingDetailPage { listing_id });
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
            publishing.set(false);
        });
    };

    rsx! {
        div {
            id: "x-sell-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                max-width: 640px;
                margin: 0 auto;
                padding: 28px;
            ",

            h1 {
                style: "font-size: 30px; font-weight: 500; color: #0F172A; margin: 0;",
                "Sell your vehicle"
            }

            TextField {
                label: "Title".to_string(),
                placeholder: "e.g. Ford Ranger XLT 3.2 4x4".to_string(),
                value: draft.read().title.clone(),
                oninput: move |value: String| {
                    let mut draft = draft;
                    draft.write().title = value;
                },
            }

            SuspendWrapper { DraftBrandSelect { draft } }
            SuspendWrapper { DraftModelSelect { draft } }
            SuspendWrapper { DraftVersionSelect { draft } }

            CatalogSelect {
                label: "Vehicle type".to_string(),
                placeholder: "Choose a type".to_string(),
                entries: VehicleType::ALL.iter()
                    .map(|t| CatalogEntry { id: t.as_str().to_string(), name: t.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: draft.read().vehicle_type.map(|t| t.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    let mut draft = draft;
                    draft.write().vehicle_type = value.as_deref().and_then(VehicleType::parse);
                },
            }
            CatalogSelect {
                label: "Condition".to_string(),
                placeholder: "Choose a condition".to_string(),
                entries: Condition::ALL.iter()
                    .map(|c| CatalogEntry { id: c.as_str().to_string(), name: c.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: draft.read().condition.map(|c| c.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    let mut draft = draft;
                    draft.write().condition = value.as_deref().and_then(Condition::parse);
                },
            }
            CatalogSelect {
                label: "Currency".to_string(),
                placeholder: "Choose a currency".to_string(),
                entries: Currency::ALL.iter()
                    .map(|c| CatalogEntry { id: c.as_str().to_string(), name: c.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: draft.read().currency.map(|c| c.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    let mut draft = draft;
                    draft.write().currency = value.as_deref().and_then(Currency::parse);
                },
            }

            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                NumberField {
                    label: "Price".to_string(),
                    value: draft.read().price,
                    oninput: move |value: Option<u64>| {
                        let mut draft = draft;
                        draft.write().price = value;
                    },
                }
                NumberField {
                    label: "Year".to_string(),
                    value: draft.read().year.map(|y| y as u64),
                    oninput: move |value: Option<u64>| {
                        let mut draft = draft;
                        draft.write().year = value.and_then(|v| u16::try_from(v).ok());
                    },
                }
                NumberField {
                    label: "Mileage (km)".to_string(),
                    value: draft.read().mileage,
                    oninput: move |value: Option<u64>| {
                        let mut draft = draft;
                        draft.write().mileage = value;
                    },
                }
            }

            TextField {
                label: "Location".to_string(),
                placeholder: "City or province".to_string(),
                value: draft.read().location.clone(),
                oninput: move |value: String| {
                    let mut draft = draft;
                    draft.write().location = value;
                },
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                TextField {
                    label: "Seller name".to_string(),
                    placeholder: "".to_string(),
                    value: draft.read().seller_name.clone(),
                    oninput: move |value: String| {
                        let mut draft = draft;
                        draft.write().seller_name = value;
                    },
                }
                TextField {
                    label: "Phone".to_string(),
                    placeholder: "".to_string(),
                    value: draft.read().seller_phone.clone(),
                    oninput: move |value: String| {
                        let mut draft = draft;
                        draft.write().seller_phone = value;
                    },
                }
            }

            // DESCRIPTION + AI DRAFT
            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    ",
                    span {
                        style: "font-size: 14px; font-weight: 500; color: rgb(55, 65, 81);",
                        "Description"
                    }
                    button {
                        style: "
                            font-size: 13px;
                            border: 1px solid #2563EB;
                            border-radius: 8px;
                            background: white;
                            color: #2563EB;
                            padding: 4px 10px;
                            cursor: pointer;
                        ",
                        disabled: !can_draft(),
                        onclick: on_draft_description,
                        if *drafting.read() { "Drafting..." } else { "Draft with AI" }
                    }
                }
                textarea {
                    style: "
                        min-height: 120px;
                        border-radius: 8px;
                        border: 1px solid rgba(0,0,0,0.3);
                        padding: 8px;
                        font-size: 15px;
                        font-family: inherit;
                    ",
                    placeholder: "Describe the vehicle's state, service history, extras...",
                    value: "{draft.read().description}",
                    oninput: move |event: Event<FormData>| {
                        let mut draft = draft;
                        draft.write().description = event.value();
                    },
                }
            }

            if form_error.read().is_some() {
                ComponentErrorDisplay { error_txt: form_error.read().clone().unwrap_or_default() }
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px;",
                button {
                    style: "
                        font-size: 17px;
                        font-weight: 500;
                        border: none;
                        border-radius: 10px;
                        background: #13213A;
                        color: white;
                        padding: 12px 26px;
                        cursor: pointer;
                    ",
                    disabled: !can_publish(),
                    onclick: on_publish,
                    if *publishing.read() { "Publishing..." } else { "Publish listing" }
                }
                if !missing.read().is_empty() {
                    span {
                        style: "font-size: 13px; color: rgba(0,0,0,0.5);",
                        "Still needed: {missing_txt}"
                    }
                }
            }
        }
    }
}


#[component]
fn DraftBrandSelect(draft: Signal<ListingDraft>) -> Element {
    let brands = use_resource(move || list_brands()).suspend()?.cloned();
    let brands = match brands {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(brands) => brands,
    };
    let selected = Some(draft.read().brand_id.clone()).filter(|id| !id.is_empty());
    let entries = brands.clone();
    rsx! {
        CatalogSelect {
            label: "Brand".to_string(),
            placeholder: "Choose a brand".to_string(),
            entries: brands,
            selected,
            disabled: false,
            onchange: move |value: Option<String>| {
                let name = value
                    .as_ref()
                    .and_then(|id| entries.iter().find(|e| &e.id == id))
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                let mut draft = draft;
                let mut draft = draft.write();
                draft.brand_id = value.unwrap_or_default();
                draft.brand_name = name;
                // the dependent picks no longer belong to this brand
                draft.model_id = String::new();
                draft.model_name = String::new();
                draft.version_id = String::new();
                draft.version_name = String::new();
            },
        }
    }
}

#[component]
fn DraftModelSelect(draft: Signal<ListingDraft>) -> Element {
    let brand_id = use_memo(move || Some(draft.read().brand_id.clone()).filter(|id| !id.is_empty()));
    let mut models = use_resource(move || {
        let brand_id = brand_id();
        async move {
            match brand_id {
                Some(brand_id) => list_models(brand_id).await,
                None => Ok(Vec::new()),
            }
        }
    });
    use_effect(move || {
        let _ = brand_id.read();
        models.clear();
        models.restart();
    });
    let models = models.suspend()?.cloned();
    let models = match models {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(models) => models,
    };
    let selected = Some(draft.read().model_id.clone()).filter(|id| !id.is_empty());
    let entries = models.clone();
    rsx! {
        CatalogSelect {
            label: "Model".to_string(),
            placeholder: "Choose a model".to_string(),
            entries: models,
            selected,
            disabled: brand_id().is_none(),
            onchange: move |value: Option<String>| {
                let name = value
                    .as_ref()
                    .and_then(|id| entries.iter().find(|e| &e.id == id))
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                let mut draft = draft;
                let mut draft = draft.write();
                draft.model_id = value.unwrap_or_default();
                draft.model_name = name;
                draft.version_id = String::new();
                draft.version_name = String::new();
            },
        }
    }
}

#[component]
fn DraftVersionSelect(draft: Signal<ListingDraft>) -> Element {
    let model_id = use_memo(move || Some(draft.read().model_id.clone()).filter(|id| !id.is_empty()));
    let mut versions = use_resource(move || {
        let model_id = model_id();
        async move {
            match model_id {
                Some(model_id) => list_versions(model_id).await,
                None => Ok(Vec::new()),
            }
        }
    });
    use_effect(move || {
        let _ = model_id.read();
        versions.clear();
        versions.restart();
    });
    let versions = versions.suspend()?.cloned();
    let versions = match versions {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(versions) => versions,
    };
    let selected = Some(draft.read().version_id.clone()).filter(|id| !id.is_empty());
    let entries = versions.clone();
    rsx! {
        CatalogSelect {
            label: "Version (optional)".to_string(),
            placeholder: "Choose a version".to_string(),
            entries: versions,
            selected,
            disabled: model_id().is_none(),
            onchange: move |value: Option<String>| {
                let name = value
                    .as_ref()
                    .and_then(|id| entries.iter().find(|e| &e.id == id))
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                let mut draft = draft;
                let mut draft = draft.write();
                draft.version_id = value.unwrap_or_default();
                draft.version_name = name;
            },
        }
    }
}


#[component]
fn TextField(
    label: String,
    placeholder: String,
    value: String,
    oninput: Callback<String>,
) -> Element {
    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                font-size: 14px;
                font-weight: 500;
                color: rgb(55, 65, 81);
                flex: 1;
            ",
            "{label}"
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    height: 36px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    padding: 0 8px;
                    font-size: 15px;
                ",
                value: "{value}",
                oninput: move |event: Event<FormData>| {
                    oninput(event.value());
                },
            }
        }
    }
}

#[component]
fn NumberField(label: String, value: Option<u64>, oninput: Callback<Option<u64>>) -> Element {
    let value_text = value.map(|v| v.to_string()).unwrap_or_default();
    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                font-size: 14px;
                font-weight: 500;
                color: rgb(55, 65, 81);
                flex: 1;
            ",
            "{label}"
            input {
                r#type: "number",
                min: "0",
                style: "
                    height: 36px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    padding: 0 8px;
                    font-size: 15px;
                ",
                value: "{value_text}",
                oninput: move |event: Event<FormData>| {
                    oninput(event.value().parse().ok());
                },
            }
        }
    }
}
