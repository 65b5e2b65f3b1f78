use anyhow::Context;
use axum::{
    body::Body,
    extract::Path,
    response::{IntoResponse, Response},
};
use minio::s3::Client;
use minio::s3::{creds::StaticProvider, http::BaseUrl, types::S3Api};
use reqwest::StatusCode;
use tracing::info;

const PHOTO_BUCKET: &str = "autoplaza-photos";

async fn _listing_photo(
    Path((listing_id, photo_key)): Path<(String, String)>,
) -> anyhow::Result<impl IntoResponse> {
    info!("Serving listing photo: {}/{}", listing_id, photo_key);

    // photo keys are flat names under the listing prefix
    if photo_key.contains('/') || photo_key.contains("..") {
        anyhow::bail!("Invalid photo key: {}", photo_key);
    }

    let content_type = match photo_key.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    };
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), content_type.to_string()),
        // published photos never change under the same key
        ("Cache-Control".to_string(), "public, max-age=86400".to_string()),
    ];

    let s3_path = format!("{}/{}", listing_id, photo_key);
    let s3_endpoint = std::env::var("S3_ENDPOINT").context("S3_ENDPOINT is not set")?;
    let base_url = s3_endpoint
        .parse::<BaseUrl>()
        .context("Failed to parse s3 endpoint")?;
    let static_provider = StaticProvider::new("autoplaza", "autoplaza-secret", None);
    let client = Client::new(base_url, Some(Box::new(static_provider)), None, None)
        .context("Failed to create s3 client")?;
    let object = client
        .get_object(PHOTO_BUCKET, s3_path)
        .send()
        .await
        .context("Failed to get object")?;
    let (stream, _size) = object
        .content
        .to_stream()
        .await
        .context("Failed to get object stream")?;

    let body = Body::from_stream(stream);
    Ok((headers, body).into_response())
}

pub async fn listing_photo(Path((listing_id, photo_key)): Path<(String, String)>) -> Response {
    match _listing_photo(Path((listing_id, photo_key))).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("listing_photo: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response();
        }
    }
}
