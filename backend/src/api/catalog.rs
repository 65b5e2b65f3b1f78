//! Reference-data endpoints feeding the cascading brand/model/version
//! dropdowns.

use common::catalog::CatalogEntry;

use crate::db_utils::clickhouse_utils::get_clickhouse_client;

pub async fn list_brands() -> anyhow::Result<Vec<CatalogEntry>> {
    let client = get_clickhouse_client();
    let result = client
        .query("SELECT brand_id, brand_name FROM catalog_brands ORDER BY brand_name")
        .fetch_all::<(String, String)>()
        .await?;
    Ok(result
        .into_iter()
        .map(|(id, name)| CatalogEntry { id, name })
        .collect())
}

pub async fn list_models(brand_id: String) -> anyhow::Result<Vec<CatalogEntry>> {
    let client = get_clickhouse_client();
    let result = client
        .query(
            "SELECT model_id, model_name FROM catalog_models WHERE brand_id = ? ORDER BY model_name",
        )
        .bind(brand_id)
        .fetch_all::<(String, String)>()
        .await?;
    Ok(result
        .into_iter()
        .map(|(id, name)| CatalogEntry { id, name })
        .collect())
}

pub async fn list_versions(model_id: String) -> anyhow::Result<Vec<CatalogEntry>> {
    let client = get_clickhouse_client();
    let result = client
        .query(
            "SELECT version_id, version_name FROM catalog_versions WHERE model_id = ? ORDER BY version_name",
        )
        .bind(model_id)
        .fetch_all::<(String, String)>()
        .await?;
    Ok(result
        .into_iter()
        .map(|(id, name)| CatalogEntry { id, name })
        .collect())
}
