//! Left panel with every filter control. All controls are stateless: they
//! render the filter from context and push updates through the one shared
//! callback.

use dioxus::prelude::*;

use common::catalog::{CatalogEntry, Condition, Currency, VehicleType};
use common::listing_filter::FilterUpdate;

use crate::{
    api::listing_api::{list_brands, list_models, list_versions},
    components::{
        browse_components::catalog_select::CatalogSelect,
        error_boundary::ComponentErrorDisplay,
    },
    pages::browse_page::BrowseState,
};


#[component]
pub fn FilterPanel() -> Element {
    let browse_state = use_context::<BrowseState>();
    let filter = browse_state.filter.read().clone();
    let apply_update = browse_state.apply_update;
    let active_count = filter.active_constraint_count();

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 14px;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                ",
                h2 {
                    style: "font-size: 18px; font-weight: 500; color: rgb(31, 41, 55); margin: 0;",
                    "Filters"
                }
                if active_count > 0 {
                    button {
                        style: "
                            font-size: 13px;
                            border: none;
                            background: none;
                            color: #2563EB;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            apply_update(FilterUpdate::Reset);
                        },
                        "Clear all ({active_count})"
                    }
                }
            }

            BrandSelect {}
            ModelSelect {}
            VersionSelect {}

            CatalogSelect {
                label: "Vehicle type".to_string(),
                placeholder: "All types".to_string(),
                entries: VehicleType::ALL.iter()
                    .map(|t| CatalogEntry { id: t.as_str().to_string(), name: t.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: filter.vehicle_type.map(|t| t.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    apply_update(FilterUpdate::VehicleType(value.as_deref().and_then(VehicleType::parse)));
                },
            }
            CatalogSelect {
                label: "Condition".to_string(),
                placeholder: "New and used".to_string(),
                entries: Condition::ALL.iter()
                    .map(|c| CatalogEntry { id: c.as_str().to_string(), name: c.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: filter.condition.map(|c| c.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    apply_update(FilterUpdate::Condition(value.as_deref().and_then(Condition::parse)));
                },
            }
            CatalogSelect {
                label: "Currency".to_string(),
                placeholder: "Any currency".to_string(),
                entries: Currency::ALL.iter()
                    .map(|c| CatalogEntry { id: c.as_str().to_string(), name: c.display_name().to_string() })
                    .collect::<Vec<_>>(),
                selected: filter.currency.map(|c| c.as_str().to_string()),
                disabled: false,
                onchange: move |value: Option<String>| {
                    apply_update(FilterUpdate::Currency(value.as_deref().and_then(Currency::parse)));
                },
            }

            RangeFilter {
                label: "Price".to_string(),
                min: filter.min_price,
                max: filter.max_price,
                on_commit: move |(min, max)| {
                    apply_update(FilterUpdate::PriceRange(min, max));
                },
            }
            RangeFilter {
                label: "Year".to_string(),
                min: filter.min_year,
                max: filter.max_year,
                on_commit: move |(min, max)| {
                    apply_update(FilterUpdate::YearRange(min, max));
                },
            }
            RangeFilter {
                label: "Mileage (km)".to_string(),
                min: filter.min_mileage,
                max: filter.max_mileage,
                on_commit: move |(min, max)| {
                    apply_update(FilterUpdate::MileageRange(min, max));
                },
            }
        }
    }
}


#[component]
fn BrandSelect() -> Element {
    let browse_state = use_context::<BrowseState>();
    let brands = use_resource(move || list_brands()).suspend()?.cloned();
    let brands = match brands {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(brands) => brands,
    };
    let selected = browse_state.filter.read().brand_id.clone();
    rsx! {
        CatalogSelect {
            label: "Brand".to_string(),
            placeholder: "All brands".to_string(),
            entries: brands,
            selected,
            disabled: false,
            onchange: move |value| {
                browse_state.apply_update.call(FilterUpdate::Brand(value));
            },
        }
    }
}

#[component]
fn ModelSelect() -> Element {
    let browse_state = use_context::<BrowseState>();
    let brand_id = use_memo(move || browse_state.filter.read().brand_id.clone());
    let mut models = use_resource(move || {
        let brand_id = brand_id();
        async move {
            match brand_id {
                Some(brand_id) => list_models(brand_id).await,
                // no brand selected: nothing to offer yet
                None => Ok(Vec::new()),
            }
        }
    });
    // picking a different brand must refetch the model list
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
    let selected = browse_state.filter.read().model_id.clone();
    rsx! {
        CatalogSelect {
            label: "Model".to_string(),
            placeholder: "All models".to_string(),
            entries: models,
            selected,
            disabled: brand_id().is_none(),
            onchange: move |value| {
                browse_state.apply_update.call(FilterUpdate::Model(value));
            },
        }
    }
}

#[component]
fn VersionSelect() -> Element {
    let browse_state = use_context::<BrowseState>();
    let model_id = use_memo(move || browse_state.filter.read().model_id.clone());
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
    let selected = browse_state.filter.read().version_id.clone();
    rsx! {
        CatalogSelect {
            label: "Version".to_string(),
            placeholder: "All versions".to_string(),
            entries: versions,
            selected,
            disabled: model_id().is_none(),
            onchange: move |value| {
                browse_state.apply_update.call(FilterUpdate::Version(value));
            },
        }
    }
}


#[component]
fn RangeFilter(
    label: String,
    min: Option<u64>,
    max: Option<u64>,
    on_commit: Callback<(Option<u64>, Option<u64>)>,
) -> Element {
    let min_text = min.map(|v| v.to_string()).unwrap_or_default();
    let max_text = max.map(|v| v.to_string()).unwrap_or_default();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",
            span {
                style: "font-size: 14px; font-weight: 500; color: rgb(55, 65, 81);",
                "{label}"
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 6px;
                ",
                input {
                    r#type: "number",
                    placeholder: "Min",
                    min: "0",
                    style: "
                        width: 50%;
                        height: 32px;
                        border-radius: 8px;
                        border: 1px solid rgba(0,0,0,0.3);
                        padding: 0 8px;
                        font-size: 14px;
                    ",
                    value: "{min_text}",
                    // non-numeric input counts as clearing the bound
                    onchange: move |event: Event<FormData>| {
                        on_commit((event.value().parse().ok(), max));
                    },
                }
                input {
                    r#type: "number",
                    placeholder: "Max",
                    min: "0",
                    style: "
                        width: 50%;
                        height: 32px;
                        border-radius: 8px;
                        border: 1px solid rgba(0,0,0,0.3);
                        padding: 0 8px;
                        font-size: 14px;
                    ",
                    value: "{max_text}",
                    onchange: move |event: Event<FormData>| {
                        on_commit((min, event.value().parse().ok()));
                    },
                }
            }
        }
    }
}
