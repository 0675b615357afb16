use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, warn};

use crate::engine::ParseEngine;
use crate::models::ParseResult;
use crate::types::DatePolicy;
use crate::ui::errors::UploadError;
use crate::ui::{FileSource, Renderer};

/// Wires file selection to the parser: read one file, parse it, render the outcome.
pub struct UploadSession<F: FileSource, R: Renderer> {
    source: F,
    renderer: R,
    engine: ParseEngine
}

impl<F: FileSource, R: Renderer> UploadSession<F, R> {
    pub fn new(source: F, renderer: R) -> Self {
        Self {
            source,
            renderer,
            engine: ParseEngine::new()
        }
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.engine = self.engine.with_date_policy(date_policy);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Handles one user selection.
    ///
    /// Anything other than exactly one file is rejected before parsing starts. Upload
    /// errors and parse envelopes are both rendered; the outer `Result` only fails
    /// when rendering itself fails.
    pub async fn handle_files(&mut self, files: &[PathBuf]) -> Result<Result<ParseResult, UploadError>> {
        let outcome = self.load_and_parse(files).await;

        match &outcome {
            Ok(result) => self.renderer.render_result(result)?,
            Err(error) => self.renderer.render_message(&error.to_string())?
        }

        Ok(outcome)
    }

    async fn load_and_parse(&self, files: &[PathBuf]) -> Result<ParseResult, UploadError> {
        let [path] = files else {
            warn!("Rejected a selection of {} files", files.len());
            return Err(UploadError::FileCount { count: files.len() });
        };

        let text = self.source.read_text(path).await.map_err(|error| {
            warn!("Could not read [{}]: {error}", path.display());
            UploadError::Read { path: path.clone(), source: error.into() }
        })?;

        debug!("Read {} bytes from [{}]", text.len(), path.display());

        Ok(self.engine.parse(&text))
    }
}
