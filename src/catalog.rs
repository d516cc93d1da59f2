use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::{LearnFlowError, Result};
use crate::models::{CatalogFile, Quiz, Video};

/// File-backed video catalog.
///
/// Every call goes back to disk; nothing is cached between calls. Quiz writes
/// re-read the whole file, patch one record and replace the file, with the
/// read-modify-write serialized by `write_lock`.
pub struct CatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every video record. Any failure is logged and yields an empty list.
    pub async fn list_videos(&self) -> Vec<Video> {
        match self.load().await {
            Ok(catalog) => catalog.videos,
            Err(e) => {
                error!("Error loading videos from {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub async fn get_video(&self, video_id: &str) -> Option<Video> {
        self.list_videos()
            .await
            .into_iter()
            .find(|video| video.id == video_id)
    }

    /// Space-joined target-language subtitle text, or an empty string for an unknown video
    pub async fn get_transcript(&self, video_id: &str) -> String {
        self.get_video(video_id)
            .await
            .map(|video| video.transcript())
            .unwrap_or_default()
    }

    pub async fn get_quiz(&self, video_id: &str) -> Option<Quiz> {
        self.get_video(video_id).await.and_then(|video| video.quiz)
    }

    /// Attach `quiz` to the video with `video_id` and rewrite the catalog.
    ///
    /// Returns `false` on any failure; the cause is logged, never propagated.
    pub async fn save_quiz(&self, video_id: &str, quiz: Quiz) -> bool {
        match self.try_save_quiz(video_id, quiz).await {
            Ok(()) => {
                info!("Saved quiz for video {}", video_id);
                true
            }
            Err(e) => {
                error!("Error saving quiz for video {}: {}", video_id, e);
                false
            }
        }
    }

    async fn try_save_quiz(&self, video_id: &str, mut quiz: Quiz) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.load().await?;

        let video = catalog
            .videos
            .iter_mut()
            .find(|video| video.id == video_id)
            .ok_or_else(|| LearnFlowError::NotFound(format!("Video {} not in catalog", video_id)))?;

        if quiz.video_id != video_id {
            warn!(
                "Quiz references video {} but is stored on {}; rewriting reference",
                quiz.video_id, video_id
            );
            quiz.video_id = video_id.to_string();
        }
        video.quiz = Some(quiz);

        self.write(&catalog).await
    }

    async fn load(&self) -> Result<CatalogFile> {
        let content = fs::read_to_string(&self.path).await?;
        let mut catalog: CatalogFile = serde_json::from_str(&content)?;

        let mut seen = HashSet::new();
        catalog.videos.retain(|video| {
            let first = seen.insert(video.id.clone());
            if !first {
                warn!("Duplicate video id {} in catalog; keeping the first record", video.id);
            }
            first
        });

        debug!("Loaded {} videos from {}", catalog.videos.len(), self.path.display());
        Ok(catalog)
    }

    /// Replace the catalog file by writing a uniquely named temp file in the
    /// same directory and renaming it over the catalog
    async fn write(&self, catalog: &CatalogFile) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };

            // Dropped (and removed) on any early return
            let mut tmp = NamedTempFile::new_in(dir)?;
            tmp.write_all(content.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| LearnFlowError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| LearnFlowError::Catalog(format!("Catalog write task failed: {}", e)))??;

        debug!("Wrote {} videos to {}", catalog.videos.len(), self.path.display());
        Ok(())
    }
}
