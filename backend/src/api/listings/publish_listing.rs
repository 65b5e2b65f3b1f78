//! Endpoint for publishing a new listing.

use common::listing_draft::ListingDraft;

use crate::db_utils::clickhouse_utils::get_clickhouse_client;

pub async fn publish_listing(draft: ListingDraft) -> anyhow::Result<String> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        anyhow::bail!("Listing is missing required fields: {}", missing.join(", "));
    }

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_nanos();
    let listing_id = sha256::digest(format!("{}:{}:{}", draft.brand_id, draft.title, nanos));
    let listing_id = listing_id[..16].to_string();

    // categorical tokens already validated by the typed draft fields
    let vehicle_type = draft.vehicle_type.map(|t| t.as_str()).unwrap_or_default();
    let condition = draft.condition.map(|c| c.as_str()).unwrap_or_default();
    let currency = draft.currency.map(|c| c.as_str()).unwrap_or_default();

    let client = get_clickhouse_client();
    let sql = "
    INSERT INTO vehicle_posts (
        listing_id, title, description,
        brand_id, brand_name, model_id, model_name, version_id, version_name,
        vehicle_type, condition, currency,
        price, year, mileage,
        location, seller_name, seller_phone,
        cover_photo_key, photo_keys,
        published_at, is_published
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, '', [], now(), 1)
    ";
    client
        .query(sql)
        .bind(&listing_id)
        .bind(draft.title.trim())
        .bind(draft.description.trim())
        .bind(&draft.brand_id)
        .bind(&draft.brand_name)
        .bind(&draft.model_id)
        .bind(&draft.model_name)
        .bind(&draft.version_id)
        .bind(&draft.version_name)
        .bind(vehicle_type)
        .bind(condition)
        .bind(currency)
        .bind(draft.price.unwrap_or_default())
        .bind(draft.year.unwrap_or_default())
        .bind(draft.mileage.unwrap_or_default())
        .bind(draft.location.trim())
        .bind(draft.seller_name.trim())
        .bind(draft.seller_phone.trim())
        .execute()
        .await?;

    tracing::info!("Published listing {}: {}", listing_id, draft.title.trim());
    Ok(listing_id)
}
