//! Search endpoint for paginated listing pages.

use clickhouse::Row;
use common::{
    listing_filter::ListingFilter,
    listing_result::{ListingPage, ListingSummary},
};
use serde::Deserialize;

use crate::api::listings::listing_sql::{
    SQL_LISTING_TABLE, build_sql_order_clause, build_sql_where_clause, page_window,
};
use crate::db_utils::clickhouse_utils::get_clickhouse_client;

#[derive(Debug, Row, Deserialize)]
struct ListingRow {
    listing_id: String,
    title: String,
    brand_name: String,
    model_name: String,
    version_name: String,
    vehicle_type: String,
    condition: String,
    currency: String,
    price: u64,
    year: u16,
    mileage: u64,
    location: String,
    cover_photo_key: String,
}

pub async fn search_listings(filter: ListingFilter) -> anyhow::Result<ListingPage> {
    let sql_where_clause = build_sql_where_clause(&filter);
    let sql_order_clause = build_sql_order_clause(&filter);
    let (limit, offset) = page_window(&filter);

    let client = get_clickhouse_client();

    let count_sql = format!(
        "
        SELECT count()
        FROM {SQL_LISTING_TABLE}
        {sql_where_clause}
        ;"
    );
    let total = client.query(&count_sql).fetch_one::<u64>().await?;

    let sql = format!(
        "
        SELECT listing_id,
            title,
            brand_name,
            model_name,
            version_name,
            vehicle_type,
            condition,
            currency,
            price,
            year,
            mileage,
            location,
            cover_photo_key

        FROM {SQL_LISTING_TABLE}

        {sql_where_clause}

        {sql_order_clause}
        LIMIT {limit} OFFSET {offset}
        ;"
    );
    tracing::debug!(total, limit, offset, "listing search: {}", sql);
    let rows = client.query(&sql).fetch_all::<ListingRow>().await?;

    let data = rows
        .into_iter()
        .enumerate()
        .map(|(result_index_in_page, row)| ListingSummary {
            listing_id: row.listing_id,
            title: row.title,
            brand_name: row.brand_name,
            model_name: row.model_name,
            version_name: row.version_name,
            vehicle_type: row.vehicle_type,
            condition: row.condition,
            currency: row.currency,
            price: row.price,
            year: row.year,
            mileage: row.mileage,
            location: row.location,
            cover_photo_key: row.cover_photo_key,
            result_index_in_page: result_index_in_page as u64,
        })
        .collect::<Vec<_>>();

    let result = ListingPage {
        total,
        total_pages: ListingPage::total_pages_for(total, limit),
        page: filter.page.max(common::listing_const::FIRST_PAGE),
        data,
        filter,
    };
    Ok(result)
}
