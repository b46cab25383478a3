//! Byte-stream loading for site content.
//!
//! Descriptors and page sources are pulled through one loader regardless of
//! where they live: an HTTP docgen service, a checkout on disk, or the assets
//! compiled into the binary.

use crate::assets::embedded_docgen_asset;
use anyhow::{Error, anyhow};
use bytes::Bytes;
use tokio_stream::{Stream, StreamExt as _, once};
use url::Url;

/// The boxed chunk stream every scheme resolves to.
pub type ByteStream = Box<dyn Stream<Item = Result<Bytes, Error>> + Send + Unpin>;

/// Creates a byte stream from a URL.
///
/// Supported URL schemes:
/// - `http`, `https`: fetched via `reqwest` as a streaming response
/// - `file`: read from the local filesystem (emitted as a single chunk)
/// - `plinth`: embedded resources served from the binary
///
/// # Errors
/// Returns an error for unsupported schemes, failed or non-success HTTP
/// fetches, unreadable files, and unknown embedded assets.
pub async fn stream_url(url: &Url) -> Result<ByteStream, Error> {
    match url.scheme() {
        "http" | "https" => stream_http(url).await,
        "file" => stream_file(url).await,
        "plinth" => stream_embedded(url),
        other => Err(anyhow!("Unsupported url scheme {other}")),
    }
}

async fn stream_http(url: &Url) -> Result<ByteStream, Error> {
    let response = reqwest::get(url.clone())
        .await
        .map_err(|err| anyhow!("Failed to fetch URL {url}: {err}"))?;
    if !response.status().is_success() {
        return Err(anyhow!("Failed to fetch URL: {} (Status: {})", url, response.status()));
    }
    let stream = response
        .bytes_stream()
        .map(|chunk| chunk.map_err(Error::from));
    Ok(Box::new(stream))
}

async fn stream_file(url: &Url) -> Result<ByteStream, Error> {
    let path = url
        .to_file_path()
        .map_err(|()| anyhow!("Invalid file path for file url: {url}"))?;
    // Whole file as a single chunk; descriptors are small.
    let data = tokio::fs::read(path).await.map(Bytes::from)?;
    Ok(Box::new(once(Ok::<Bytes, Error>(data))))
}

fn stream_embedded(url: &Url) -> Result<ByteStream, Error> {
    // We only support plinth://docgen/* for now
    if url.host_str() != Some("docgen") {
        return Err(anyhow!("Unsupported plinth host: {url}"));
    }
    let bytes = embedded_docgen_asset(url.path())
        .ok_or_else(|| anyhow!("Embedded asset not found for {url}"))?;
    Ok(Box::new(once(Ok::<Bytes, Error>(Bytes::from_static(bytes)))))
}

/// Collect a URL's content into a single buffer.
///
/// # Errors
/// Propagates any failure from [`stream_url`] or from the stream itself.
pub async fn fetch_bytes(url: &Url) -> Result<Vec<u8>, Error> {
    let mut stream = stream_url(url).await?;
    let mut data = Vec::new();
    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(&chunk?);
    }
    Ok(data)
}
