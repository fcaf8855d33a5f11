use std::collections::BTreeMap;
use std::fs;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

/// Per-page plain text of a source document, as produced by the external
/// extraction tool. Page numbers are 1-based; `BTreeMap` keeps them in
/// ascending order, which the generation pipeline relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub filename: String,
    pub page_count: usize,
    #[serde(alias = "text_by_page")]
    pub pages: BTreeMap<usize, String>,
}

#[derive(Error, Debug)]
enum RequestError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("Failed to read response body: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Extraction service returned an error: {status}")]
    ServerError { status: u16 },
}

/// Contract with the external document-extraction collaborator: given a
/// locator, produce ordered per-page text. Any failure aborts the whole
/// generation run; there is no partial result.
pub trait DocumentExtractor {
    fn extract(&self, locator: &str) -> anyhow::Result<Document>;
}

/// Reads a pre-extracted document JSON from disk.
pub struct FileExtractor;

impl DocumentExtractor for FileExtractor {
    fn extract(&self, locator: &str) -> anyhow::Result<Document> {
        let raw = fs::read_to_string(locator)
            .context(format!("failed to read document file '{}'", locator))?;
        serde_json::from_str(&raw).context(format!("document '{}' is not valid JSON", locator))
    }
}

/// Fetches the extracted document JSON from an extraction service URL.
pub struct RemoteExtractor;

impl DocumentExtractor for RemoteExtractor {
    fn extract(&self, locator: &str) -> anyhow::Result<Document> {
        let response = ureq::get(locator)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => RequestError::ServerError { status: code },
                other => RequestError::HttpError(other),
            })
            .context(format!("failed to fetch document from '{}'", locator))?;

        let document: Document = response
            .into_json()
            .context("failed to read extraction response body")?;

        Ok(document)
    }
}

/// Picks the extractor matching a locator: URLs go to the extraction
/// service, everything else is treated as a local path.
pub fn extractor_for(locator: &str) -> Box<dyn DocumentExtractor> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        Box::new(RemoteExtractor)
    } else {
        Box::new(FileExtractor)
    }
}
