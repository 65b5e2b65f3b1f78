//! Listing description drafting through a local text-generation endpoint,
//! with a ClickHouse response cache keyed by the prompt hash.

use anyhow::Context;
use common::listing_draft::DescriptionSeed;
use serde::{Deserialize, Serialize};

use crate::db_utils::clickhouse_utils::get_clickhouse_client;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

pub async fn draft_description(seed: DescriptionSeed) -> anyhow::Result<String> {
    let prompt = build_prompt(&seed);
    let prompt_hash = sha256::digest(prompt.clone());

    if let Ok(cached_response) = get_cached_response(&prompt_hash, &prompt).await {
        tracing::info!("DESCRIPTION CACHE HIT: {}", prompt_hash);
        return Ok(cached_response);
    }
    tracing::info!("DESCRIPTION CACHE MISS: {}", prompt_hash);

    let t0 = std::time::Instant::now();
    let api_url = std::env::var("DESCRIPTION_API_URL").unwrap_or("http://127.0.0.1:11434".to_string());
    let api_url = format!("{}/api/generate", api_url);
    let model = std::env::var("DESCRIPTION_API_MODEL").unwrap_or("llama3.2".to_string());
    let client = reqwest::Client::new();

    // generation can hang on a cold model; bound the wait
    let response = tokio::time::timeout(
        std::time::Duration::from_secs(60),
        client
            .post(api_url)
            .json(&GenerateRequest { model, prompt: prompt.clone(), stream: false })
            .send(),
    )
    .await
    .context("Description generation timed out")??;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let response: GenerateResponse = serde_json::from_str(&response_txt)?;
    let description = response.response.trim().to_string();

    let dt_ms = t0.elapsed().as_millis() as u32;
    if insert_cache(&prompt_hash, &prompt, &description, dt_ms).await.is_ok() {
        tracing::info!("DESCRIPTION CACHE INSERTED: {} (generated in {}ms)", prompt_hash, dt_ms);
    } else {
        tracing::warn!("DESCRIPTION CACHE INSERT FAILED: {}", prompt_hash);
    }
    Ok(description)
}


fn build_prompt(seed: &DescriptionSeed) -> String {
    let mut facts = vec![format!("{} {}", seed.brand_name, seed.model_name)];
    if !seed.version_name.trim().is_empty() {
        facts.push(seed.version_name.trim().to_string());
    }
    if let Some(vehicle_type) = seed.vehicle_type {
        facts.push(vehicle_type.display_name().to_lowercase());
    }
    if let Some(condition) = seed.condition {
        facts.push(condition.display_name().to_lowercase());
    }
    if let Some(year) = seed.year {
        facts.push(format!("year {year}"));
    }
    if let Some(mileage) = seed.mileage {
        facts.push(format!("{mileage} km"));
    }
    format!(
        "Write a short, factual sales description (max 80 words, no emojis, \
         no price) for a vehicle marketplace post: {}.",
        facts.join(", ")
    )
}


async fn get_cached_response(prompt_hash: &String, prompt: &String) -> anyhow::Result<String> {
    let client = get_clickhouse_client();
    let sql = "
    SELECT response_text
    FROM description_draft_cache
    WHERE prompt_hash = ?
      AND prompt = ?
    ORDER BY date_created DESC
    LIMIT 1
    ";
    let rows = client
        .query(sql)
        .bind(prompt_hash.clone())
        .bind(prompt.clone())
        .fetch_all::<String>()
        .await?;
    if let Some(response_text) = rows.into_iter().next() {
        Ok(response_text)
    } else {
        anyhow::bail!("Cache miss")
    }
}


async fn insert_cache(
    prompt_hash: &String,
    prompt: &String,
    response_text: &String,
    dt_ms: u32,
) -> anyhow::Result<()> {
    let client = get_clickhouse_client();
    let sql = "
    INSERT INTO description_draft_cache (prompt_hash, prompt, response_text, duration_ms)
    VALUES (?, ?, ?, ?)
    ";
    client
        .query(sql)
        .bind(prompt_hash.clone())
        .bind(prompt.clone())
        .bind(response_text.clone())
        .bind(dt_ms)
        .execute()
        .await?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog::{Condition, VehicleType};

    #[test]
    fn prompt_includes_only_the_known_facts() {
        let prompt = build_prompt(&DescriptionSeed {
            brand_name: "Ford".into(),
            model_name: "Ranger".into(),
            version_name: "".into(),
            vehicle_type: Some(VehicleType::Pickup),
            condition: Some(Condition::Used),
            year: Some(2019),
            mileage: None,
        });
        assert!(prompt.contains("Ford Ranger"));
        assert!(prompt.contains("pickup"));
        assert!(prompt.contains("used"));
        assert!(prompt.contains("year 2019"));
        assert!(!prompt.contains("km"));
    }
}
