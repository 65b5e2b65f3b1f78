//! Client API calls for marketplace endpoints.

use common::{
    catalog::CatalogEntry,
    listing_draft::{DescriptionSeed, ListingDraft},
    listing_filter::ListingFilter,
    listing_result::{ListingDetail, ListingPage},
};
use dioxus::prelude::*;




#[server]
pub async fn search_listings(filter: ListingFilter) -> Result<ListingPage, ServerFnError> {
    let x = backend::api::listings::search_listings(filter).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_listing(listing_id: String) -> Result<ListingDetail, ServerFnError> {
    let x = backend::api::listings::get_listing(listing_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn publish_listing(draft: ListingDraft) -> Result<String, ServerFnError> {
    let x = backend::api::listings::publish_listing(draft).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_brands() -> Result<Vec<CatalogEntry>, ServerFnError> {
    let x = backend::api::catalog::list_brands().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_models(brand_id: String) -> Result<Vec<CatalogEntry>, ServerFnError> {
    let x = backend::api::catalog::list_models(brand_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_versions(model_id: String) -> Result<Vec<CatalogEntry>, ServerFnError> {
    let x = backend::api::catalog::list_versions(model_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn draft_description(seed: DescriptionSeed) -> Result<String, ServerFnError> {
    let x = backend::api::describe::draft_description(seed).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
