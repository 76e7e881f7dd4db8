//! Feed collection: fetch the configured sources, map their records to the
//! canonical shape, dedupe by id and write the store's backing file.

mod api;
mod wire;

pub use api::IngestSummary;

use std::path::{Path, PathBuf};

use crate::core::PulseError;

/// A builder for one ingestion run.
pub struct IngestBuilder {
    http: reqwest::Client,
    sources_path: PathBuf,
    output_path: PathBuf,
    data_dir: PathBuf,
}

impl IngestBuilder {
    /// Creates a builder reading source descriptors from `sources_path` and
    /// writing the merged article set to `output_path`.
    ///
    /// `local://` endpoints resolve against the sources file's directory
    /// unless overridden with [`IngestBuilder::data_dir`].
    pub fn new(sources_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        let sources_path = sources_path.into();
        let data_dir = sources_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self {
            http: reqwest::Client::new(),
            sources_path,
            output_path: output_path.into(),
            data_dir,
        }
    }

    /// Overrides the directory `local://` endpoints resolve against.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Overrides the HTTP client used for remote sources.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Executes the run: fetch every source, skip the ones that fail, and
    /// write the deduplicated result.
    ///
    /// # Errors
    ///
    /// Returns a `PulseError` if the sources file cannot be read or parsed,
    /// or if the output file cannot be written. Per-source fetch and parse
    /// failures are logged and counted, not propagated.
    pub async fn run(self) -> Result<IngestSummary, PulseError> {
        api::run(
            &self.http,
            &self.sources_path,
            &self.output_path,
            &self.data_dir,
        )
        .await
    }
}
