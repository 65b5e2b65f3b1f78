//! Endpoint for retrieving one published listing.

use clickhouse::Row;
use common::listing_result::ListingDetail;
use serde::Deserialize;

use crate::db_utils::clickhouse_utils::get_clickhouse_client;

#[derive(Debug, Row, Deserialize)]
struct ListingDetailRow {
    listing_id: String,
    title: String,
    description: String,
    brand_id: String,
    brand_name: String,
    model_id: String,
    model_name: String,
    version_id: String,
    version_name: String,
    vehicle_type: String,
    condition: String,
    currency: String,
    price: u64,
    year: u16,
    mileage: u64,
    location: String,
    seller_name: String,
    seller_phone: String,
    photo_keys: Vec<String>,
    published_at: u64,
}

pub async fn get_listing(listing_id: String) -> anyhow::Result<ListingDetail> {
    let client = get_clickhouse_client();

    let sql = "
    SELECT listing_id,
        title,
        description,
        brand_id,
        brand_name,
        model_id,
        model_name,
        version_id,
        version_name,
        vehicle_type,
        condition,
        currency,
        price,
        year,
        mileage,
        location,
        seller_name,
        seller_phone,
        photo_keys,
        toUInt64(published_at) AS published_at
    FROM vehicle_posts
    WHERE listing_id = ?
      AND is_published = 1
    LIMIT 1
    ";
    let row = client
        .query(sql)
        .bind(&listing_id)
        .fetch_optional::<ListingDetailRow>()
        .await?;

    let Some(row) = row else {
        anyhow::bail!("Listing not found: {}", listing_id);
    };

    Ok(ListingDetail {
        listing_id: row.listing_id,
        title: row.title,
        description: row.description,
        brand_id: row.brand_id,
        brand_name: row.brand_name,
        model_id: row.model_id,
        model_name: row.model_name,
        version_id: row.version_id,
        version_name: row.version_name,
        vehicle_type: row.vehicle_type,
        condition: row.condition,
        currency: row.currency,
        price: row.price,
        year: row.year,
        mileage: row.mileage,
        location: row.location,
        seller_name: row.seller_name,
        seller_phone: row.seller_phone,
        photo_keys: row.photo_keys,
        published_at: row.published_at,
    })
}
