//! Zip bundle assembly.

use reelsmith_core::{SceneDescriptor, WorkflowResult};
use reelsmith_error::{ExportError, ExportErrorKind, ReelsmithResult};
use reelsmith_storage::MediaStorage;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packages a [`WorkflowResult`] into one zip archive.
///
/// Layout:
///
/// ```text
/// script.txt               narration, if present
/// scene-descriptions.txt   "Scene <n>: <title>" + description per scene
/// scene-<n>.png            one per stored image, 1-indexed
/// audio.mp3                narration audio, if present
/// ```
///
/// Absent parts are omitted. An asset that cannot be fetched from storage is
/// logged and skipped, so a partial bundle is still produced.
#[derive(Clone)]
pub struct BundleExporter {
    storage: Arc<dyn MediaStorage>,
}

impl std::fmt::Debug for BundleExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleExporter").finish_non_exhaustive()
    }
}

fn archive_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Archive(err.to_string()))
}

/// Renders scene blocks separated by a blank line.
fn scene_descriptions(scenes: &[SceneDescriptor]) -> String {
    scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| {
            format!(
                "Scene {}: {}\n{}\n",
                i + 1,
                scene.title(),
                scene.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl BundleExporter {
    /// Creates an exporter reading binary assets from `storage`.
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    /// Build the archive in memory.
    ///
    /// # Errors
    ///
    /// Returns an `ExportError` only if the zip writer itself fails; missing or
    /// unreadable assets are skipped.
    #[instrument(skip(self, result), fields(scenes = result.scene_prompts.len(), images = result.image_refs.len()))]
    pub async fn export(&self, result: &WorkflowResult) -> ReelsmithResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut entries = 0usize;

        if let Some(script) = &result.script {
            write_entry(&mut zip, "script.txt", script.as_bytes(), CompressionMethod::Deflated)?;
            entries += 1;
        }

        if !result.scene_prompts.is_empty() {
            let body = scene_descriptions(&result.scene_prompts);
            write_entry(&mut zip, "scene-descriptions.txt", body.as_bytes(), CompressionMethod::Deflated)?;
            entries += 1;
        }

        for (i, reference) in result.image_refs.iter().enumerate() {
            let name = format!("scene-{}.png", i + 1);
            match self.storage.retrieve(reference).await {
                Ok(bytes) => {
                    write_entry(&mut zip, &name, &bytes, CompressionMethod::Stored)?;
                    entries += 1;
                }
                Err(e) => {
                    warn!(entry = %name, error = %e, "Skipping image that could not be fetched")
                }
            }
        }

        if let Some(reference) = &result.audio_ref {
            match self.storage.retrieve(reference).await {
                Ok(bytes) => {
                    write_entry(&mut zip, "audio.mp3", &bytes, CompressionMethod::Stored)?;
                    entries += 1;
                }
                Err(e) => warn!(error = %e, "Skipping audio that could not be fetched"),
            }
        }

        let archive = zip.finish().map_err(archive_error)?.into_inner();
        info!(entries, bytes = archive.len(), "Bundle assembled");
        Ok(archive)
    }

    /// Build the archive and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an `ExportError` if the archive cannot be built or written.
    #[instrument(skip(self, result, path), fields(path = %path.as_ref().display()))]
    pub async fn export_to_file(
        &self,
        result: &WorkflowResult,
        path: impl AsRef<Path>,
    ) -> ReelsmithResult<()> {
        let path = path.as_ref();
        let archive = self.export(result).await?;

        tokio::fs::write(path, &archive).await.map_err(|e| {
            ExportError::new(ExportErrorKind::Write(format!("{}: {}", path.display(), e)))
        })?;

        debug!(bytes = archive.len(), "Bundle written");
        Ok(())
    }
}

fn write_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    bytes: &[u8],
    compression: CompressionMethod,
) -> ReelsmithResult<()> {
    let options = SimpleFileOptions::default().compression_method(compression);
    zip.start_file(name, options).map_err(archive_error)?;
    zip.write_all(bytes).map_err(archive_error)?;
    debug!(entry = name, bytes = bytes.len(), "Added bundle entry");
    Ok(())
}
