//! Best-effort thumbnail downloads.
//!
//! Pages reference `images/games/{slug}-{id}.jpg` whether or not the file
//! exists, so a failed download only means a broken image. Failures are logged
//! and counted, never returned.

use crate::content::ContentError;
use crate::types::GameRecord;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Something that can fetch image bytes by URL.
pub trait ThumbnailSource {
    fn download(&self, url: &str) -> Result<Vec<u8>, ContentError>;
}

impl<F> ThumbnailSource for F
where
    F: Fn(&str) -> Result<Vec<u8>, ContentError>,
{
    fn download(&self, url: &str) -> Result<Vec<u8>, ContentError> {
        self(url)
    }
}

pub struct HttpThumbnailSource {
    client: reqwest::blocking::Client,
}

impl HttpThumbnailSource {
    pub fn new(timeout_secs: u64) -> Result<Self, ContentError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("casino-gen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl ThumbnailSource for HttpThumbnailSource {
    fn download(&self, url: &str) -> Result<Vec<u8>, ContentError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Counts from one download pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbnailReport {
    pub downloaded: usize,
    pub failed: usize,
    /// Records with no thumbnail URL.
    pub skipped: usize,
}

/// Download each record's thumbnail into `images_dir`.
///
/// A record appearing twice is fetched once.
pub fn download_thumbnails<'a, S, I>(source: &S, games: I, images_dir: &Path) -> ThumbnailReport
where
    S: ThumbnailSource + ?Sized,
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut report = ThumbnailReport::default();
    let mut seen = HashSet::new();

    for game in games {
        if !seen.insert(game.id) {
            continue;
        }
        let Some(url) = game.thumbnail_url.as_deref() else {
            report.skipped += 1;
            continue;
        };
        let target = images_dir.join(game.thumbnail_file_name());
        let result = source
            .download(url)
            .and_then(|bytes| Ok(std::fs::write(&target, bytes)?));
        match result {
            Ok(()) => {
                tracing::debug!(
                    slug = %game.slug,
                    path = %target.display(),
                    "downloaded thumbnail"
                );
                report.downloaded += 1;
            }
            Err(e) => {
                tracing::warn!(slug = %game.slug, url, error = %e, "thumbnail download failed");
                report.failed += 1;
            }
        }
    }
    report
}
