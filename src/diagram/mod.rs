//! External diagram renderer boundary.
//!
//! The workflow page embeds a mermaid flowchart. Rendering it to terminal
//! text is delegated to an optional external tool (`mermaid-ascii`) resolved
//! from `PATH` on first use. The screen must keep working when the tool never
//! materializes: the render call is skipped and the raw definition shown.

use log::*;
use std::env;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Executable consulted for diagram rendering.
///
const RENDERER_BINARY: &str = "mermaid-ascii";

/// Errors from the external diagram renderer.
///
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// No renderer executable could be located
    #[error("No diagram renderer available on PATH")]
    NotLoaded,

    /// The renderer ran but failed
    #[error("Diagram renderer failed: {0}")]
    RenderFailed(String),

    /// I/O failure while driving the renderer
    #[error("Diagram renderer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lazily-resolved handle to the external renderer.
///
pub struct DiagramRenderer {
    // None until the first probe; Some(None) when the probe found nothing.
    binary: Option<Option<PathBuf>>,
}

impl DiagramRenderer {
    pub fn new() -> Self {
        DiagramRenderer { binary: None }
    }

    /// Resolve the renderer executable, probing `PATH` on the first call
    /// only. Returns the handle if one exists.
    ///
    pub fn ensure_loaded(&mut self) -> Option<&Path> {
        if self.binary.is_none() {
            let located = Self::locate_binary();
            match &located {
                Some(path) => info!("Located diagram renderer at {}.", path.display()),
                None => warn!(
                    "Diagram renderer '{}' not found on PATH; diagrams will show raw definitions.",
                    RENDERER_BINARY
                ),
            }
            self.binary = Some(located);
        }
        self.binary.as_ref().and_then(|b| b.as_deref())
    }

    /// Render a mermaid definition to text using the resolved executable.
    ///
    pub async fn render(&mut self, definition: &str) -> Result<String, DiagramError> {
        let binary = self
            .ensure_loaded()
            .ok_or(DiagramError::NotLoaded)?
            .to_path_buf();

        // The renderer only reads files, so stage the definition in a
        // temporary one and clean it up afterwards.
        let input_path = env::temp_dir().join(format!("vendor-guide-{}.mmd", std::process::id()));
        tokio::fs::write(&input_path, definition).await?;
        let output = Command::new(&binary)
            .arg("--file")
            .arg(&input_path)
            .output()
            .await;
        let _ = tokio::fs::remove_file(&input_path).await;

        let output = output?;
        if !output.status.success() {
            return Err(DiagramError::RenderFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Search each PATH entry for the renderer executable.
    ///
    fn locate_binary() -> Option<PathBuf> {
        let paths = env::var_os("PATH")?;
        env::split_paths(&paths)
            .map(|dir| dir.join(RENDERER_BINARY))
            .find(|candidate| candidate.is_file())
    }
}
