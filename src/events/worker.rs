use crate::diagram::DiagramRenderer;
use crate::state::media::{self, Attachment, AttachmentSource, MediaError};
use crate::state::State;
use anyhow::Result;
use chrono::Local;
use log::*;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different background worker event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Validate, encode, and attach an image file. `open_preview` is false
    /// for the silent re-attach performed at startup.
    IngestImage {
        path: PathBuf,
        open_preview: bool,
    },
    /// Render the workflow diagram definition through the external renderer.
    RenderDiagram {
        definition: String,
    },
}

/// Specify struct for managing state with worker events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    renderer: &'a mut DiagramRenderer,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, renderer: &'a mut DiagramRenderer) -> Self {
        Handler { state, renderer }
    }

    /// Handle worker events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing worker event '{:?}'...", event);
        match event {
            Event::IngestImage { path, open_preview } => {
                self.ingest_image(path, open_preview).await?
            }
            Event::RenderDiagram { definition } => self.render_diagram(&definition).await?,
        }
        Ok(())
    }

    /// Validate a candidate image, encode it, and replace the attachment.
    ///
    /// Events are processed one at a time off a channel, so when several
    /// ingests are issued in quick succession the completion applied last
    /// wins; nothing is queued back or cancelled.
    ///
    async fn ingest_image(&mut self, path: PathBuf, open_preview: bool) -> Result<()> {
        info!("Ingesting image {}...", path.display());

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                let reason = MediaError::ReadFailed {
                    path: path.clone(),
                    source: e,
                };
                self.state.lock().await.reject_ingest(&reason);
                return Ok(());
            }
        };

        // Type and size checks happen before any encoding work.
        let format = match media::validate(&path, metadata.len()) {
            Ok(format) => format,
            Err(reason) => {
                self.state.lock().await.reject_ingest(&reason);
                return Ok(());
            }
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let reason = MediaError::ReadFailed {
                    path: path.clone(),
                    source: e,
                };
                self.state.lock().await.reject_ingest(&reason);
                return Ok(());
            }
        };

        let data_uri = media::encode_data_uri(format, &bytes);
        // Decoding is only needed for terminal display; a file that encodes
        // but fails to decode still replaces the attachment.
        let decoded = match image::load_from_memory(&bytes) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("Attached image could not be decoded for display: {}", e);
                None
            }
        };

        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let attachment = Attachment {
            source: AttachmentSource::Encoded(data_uri),
            display_name,
            path: Some(path),
            uploaded_at: Some(Local::now()),
        };

        self.state
            .lock()
            .await
            .apply_ingest(attachment, decoded, open_preview);
        info!("Attached image successfully.");
        Ok(())
    }

    /// Run the external diagram renderer and store its output. When the
    /// renderer is missing or fails, the render is skipped and the screen
    /// falls back to the raw definition.
    ///
    async fn render_diagram(&mut self, definition: &str) -> Result<()> {
        match self.renderer.render(definition).await {
            Ok(output) => {
                self.state.lock().await.set_diagram_rendered(output);
                info!("Rendered workflow diagram.");
            }
            Err(e) => {
                warn!("Skipping diagram render: {}", e);
                self.state.lock().await.set_diagram_unavailable();
            }
        }
        Ok(())
    }
}
